use syscall::error::Result;

use crate::BlockBuf;

pub use self::file::DeviceFile;
pub use self::memory::DeviceMemory;

mod file;
mod memory;

/// A multi-disk block device addressed through a disk/block cursor.
///
/// The cursor set by the seek calls persists until changed; `read_block`
/// and `write_block` operate on whatever it currently points at and do
/// not advance it. Rejecting out-of-range seeks is the implementation's
/// job, not re-checked by callers.
pub trait Device {
    /// Forward the mount directive to the device
    fn mount(&mut self) -> Result<()>;

    /// Forward the unmount directive to the device
    fn unmount(&mut self) -> Result<()>;

    /// Select a disk
    fn seek_to_disk(&mut self, disk: u32) -> Result<()>;

    /// Select a block on the currently selected disk
    fn seek_to_block(&mut self, block: u32) -> Result<()>;

    /// Read the block under the cursor
    fn read_block(&mut self, buffer: &mut BlockBuf) -> Result<()>;

    /// Write the block under the cursor
    fn write_block(&mut self, buffer: &BlockBuf) -> Result<()>;
}
