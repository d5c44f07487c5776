use std::cmp::min;

use crate::{BLOCK_SIZE, DISK_SIZE};

/// A contiguous run of bytes inside a single block
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Extent {
    pub disk: u32,
    pub block: u32,
    pub offset: u32,
    pub length: u32,
}

impl Extent {
    /// Linear address of the first byte covered by this extent
    pub fn addr(&self) -> u32 {
        self.disk * DISK_SIZE + self.block * BLOCK_SIZE + self.offset
    }
}

/// Iterator over the extents covering `[addr, addr + len)`, in increasing
/// address order. Runs that cross a block or disk boundary fall out of the
/// address arithmetic; there is no boundary special case.
pub struct ExtentIter {
    addr: u64,
    remaining: u64,
}

pub fn extents(addr: u32, len: u32) -> ExtentIter {
    ExtentIter {
        addr: addr as u64,
        remaining: len as u64,
    }
}

impl Iterator for ExtentIter {
    type Item = Extent;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let offset = self.addr % BLOCK_SIZE as u64;
        let length = min(BLOCK_SIZE as u64 - offset, self.remaining);
        let extent = Extent {
            disk: (self.addr / DISK_SIZE as u64) as u32,
            block: ((self.addr % DISK_SIZE as u64) / BLOCK_SIZE as u64) as u32,
            offset: offset as u32,
            length: length as u32,
        };
        self.addr += length;
        self.remaining -= length;
        Some(extent)
    }
}
