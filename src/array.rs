use log::{debug, trace};
use syscall::error::{Error, Result, EBUSY, EFAULT, EINVAL, ENODEV};

use crate::cache::BlockCache;
use crate::device::Device;
use crate::extent::extents;
use crate::{BlockBuf, BLOCK_SIZE, MAX_TRANSFER, TOTAL_SIZE};

/// A flat byte address space over a multi-disk device.
///
/// Requests of arbitrary offset and length are translated into per-disk,
/// per-block operations on the device. Reads optionally go through a
/// whole-block cache; writes always go to the device and drop any cache
/// entry for the blocks they touch.
pub struct Array<D: Device> {
    pub device: D,
    pub cache: Option<BlockCache>,
    mounted: bool,
}

impl<D: Device> Array<D> {
    pub fn new(device: D) -> Array<D> {
        Array {
            device,
            cache: None,
            mounted: false,
        }
    }

    pub fn with_cache(device: D, cache: BlockCache) -> Array<D> {
        Array {
            device,
            cache: Some(cache),
            mounted: false,
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn mount(&mut self) -> Result<()> {
        if self.mounted {
            return Err(Error::new(EBUSY));
        }
        self.device.mount()?;
        self.mounted = true;
        debug!("array mounted");
        Ok(())
    }

    pub fn unmount(&mut self) -> Result<()> {
        if !self.mounted {
            return Err(Error::new(ENODEV));
        }
        self.device.unmount()?;
        self.mounted = false;
        debug!("array unmounted");
        Ok(())
    }

    // Shared validation for read and write. Argument checks come before the
    // mount check, so an oversized transfer fails the same way mounted or
    // not; nothing touches the device until every check passes.
    fn check_transfer(&self, addr: u32, len: u32, buffer_len: Option<usize>) -> Result<()> {
        if len > MAX_TRANSFER {
            return Err(Error::new(EINVAL));
        }
        if len != 0 {
            match buffer_len {
                Some(buffer_len) if buffer_len >= len as usize => (),
                _ => return Err(Error::new(EINVAL)),
            }
        }
        if !self.mounted {
            return Err(Error::new(ENODEV));
        }
        if addr as u64 + len as u64 > TOTAL_SIZE as u64 {
            return Err(Error::new(EFAULT));
        }
        Ok(())
    }

    /// Read `len` bytes starting at linear address `addr` into `buffer`.
    ///
    /// A zero-length read needs no buffer and returns 0 without touching
    /// the device. Returns the number of bytes read, always `len`.
    pub fn read(&mut self, addr: u32, len: u32, buffer: Option<&mut [u8]>) -> Result<usize> {
        self.check_transfer(addr, len, buffer.as_ref().map(|buffer| buffer.len()))?;
        let buffer = match buffer {
            Some(buffer) if len != 0 => buffer,
            _ => return Ok(0),
        };

        let mut block_buf: BlockBuf = [0; BLOCK_SIZE as usize];
        let mut copied = 0;
        for extent in extents(addr, len) {
            trace!(
                "read disk {} block {} offset {} length {}",
                extent.disk,
                extent.block,
                extent.offset,
                extent.length
            );
            match self.cache {
                Some(ref mut cache) => {
                    if let Some(cached) = cache.lookup(extent.disk, extent.block) {
                        block_buf.copy_from_slice(cached);
                    } else {
                        self.device.seek_to_disk(extent.disk)?;
                        self.device.seek_to_block(extent.block)?;
                        self.device.read_block(&mut block_buf)?;
                        cache.insert(extent.disk, extent.block, &block_buf);
                    }
                }
                None => {
                    self.device.seek_to_disk(extent.disk)?;
                    self.device.seek_to_block(extent.block)?;
                    self.device.read_block(&mut block_buf)?;
                }
            }
            let offset = extent.offset as usize;
            let length = extent.length as usize;
            buffer[copied..copied + length].copy_from_slice(&block_buf[offset..offset + length]);
            copied += length;
        }
        Ok(copied)
    }

    /// Write `len` bytes from `buffer` starting at linear address `addr`.
    ///
    /// Partial blocks are read, spliced and written back, so the bytes
    /// around a fragment survive the block-granular device write. Returns
    /// the number of bytes written, always `len`.
    pub fn write(&mut self, addr: u32, len: u32, buffer: Option<&[u8]>) -> Result<usize> {
        self.check_transfer(addr, len, buffer.map(|buffer| buffer.len()))?;
        let buffer = match buffer {
            Some(buffer) if len != 0 => buffer,
            _ => return Ok(0),
        };

        let mut block_buf: BlockBuf = [0; BLOCK_SIZE as usize];
        let mut written = 0;
        for extent in extents(addr, len) {
            trace!(
                "write disk {} block {} offset {} length {}",
                extent.disk,
                extent.block,
                extent.offset,
                extent.length
            );
            self.device.seek_to_disk(extent.disk)?;
            self.device.seek_to_block(extent.block)?;

            let offset = extent.offset as usize;
            let length = extent.length as usize;
            if length < BLOCK_SIZE as usize {
                self.device.read_block(&mut block_buf)?;
            }
            block_buf[offset..offset + length].copy_from_slice(&buffer[written..written + length]);
            self.device.write_block(&block_buf)?;

            if let Some(ref mut cache) = self.cache {
                cache.invalidate(extent.disk, extent.block);
            }
            written += length;
        }
        Ok(written)
    }
}
