use syscall::error::{Error, Result, EIO};

use crate::device::Device;
use crate::{BlockBuf, BLOCKS_PER_DISK, BLOCK_SIZE, DISK_COUNT, DISK_SIZE, TOTAL_SIZE};

/// An in-memory device, used mostly by tests.
///
/// Behaves like the real thing: the mount directives pair up, and every
/// other operation fails until the device is mounted.
pub struct DeviceMemory {
    data: Vec<u8>,
    disk: u32,
    block: u32,
    mounted: bool,
}

impl DeviceMemory {
    pub fn new() -> DeviceMemory {
        DeviceMemory {
            data: vec![0; TOTAL_SIZE as usize],
            disk: 0,
            block: 0,
            mounted: false,
        }
    }

    fn cursor(&self) -> usize {
        (self.disk * DISK_SIZE + self.block * BLOCK_SIZE) as usize
    }
}

impl Default for DeviceMemory {
    fn default() -> DeviceMemory {
        DeviceMemory::new()
    }
}

impl Device for DeviceMemory {
    fn mount(&mut self) -> Result<()> {
        if self.mounted {
            return Err(Error::new(EIO));
        }
        self.mounted = true;
        Ok(())
    }

    fn unmount(&mut self) -> Result<()> {
        if !self.mounted {
            return Err(Error::new(EIO));
        }
        self.mounted = false;
        Ok(())
    }

    fn seek_to_disk(&mut self, disk: u32) -> Result<()> {
        if !self.mounted || disk >= DISK_COUNT {
            return Err(Error::new(EIO));
        }
        self.disk = disk;
        Ok(())
    }

    fn seek_to_block(&mut self, block: u32) -> Result<()> {
        if !self.mounted || block >= BLOCKS_PER_DISK {
            return Err(Error::new(EIO));
        }
        self.block = block;
        Ok(())
    }

    fn read_block(&mut self, buffer: &mut BlockBuf) -> Result<()> {
        if !self.mounted {
            return Err(Error::new(EIO));
        }
        let offset = self.cursor();
        buffer.copy_from_slice(&self.data[offset..offset + BLOCK_SIZE as usize]);
        Ok(())
    }

    fn write_block(&mut self, buffer: &BlockBuf) -> Result<()> {
        if !self.mounted {
            return Err(Error::new(EIO));
        }
        let offset = self.cursor();
        self.data[offset..offset + BLOCK_SIZE as usize].copy_from_slice(buffer);
        Ok(())
    }
}
