pub use self::array::Array;
pub use self::cache::BlockCache;
pub use self::device::{Device, DeviceFile, DeviceMemory};
pub use self::extent::{extents, Extent, ExtentIter};

mod array;
mod cache;
mod device;
mod extent;


/// Size of one block in bytes
pub const BLOCK_SIZE: u32 = 256;

/// Number of blocks on each disk
pub const BLOCKS_PER_DISK: u32 = 256;

/// Capacity of one disk in bytes
pub const DISK_SIZE: u32 = BLOCK_SIZE * BLOCKS_PER_DISK;

/// Number of independent disks behind the linear address space
pub const DISK_COUNT: u32 = 8;

/// Capacity of the linear address space in bytes
pub const TOTAL_SIZE: u32 = DISK_COUNT * DISK_SIZE;

/// Largest transfer a single read or write may request
pub const MAX_TRANSFER: u32 = 1024;

/// A buffer holding exactly one block
pub type BlockBuf = [u8; BLOCK_SIZE as usize];
