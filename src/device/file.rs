use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::Path;

use syscall::error::{Error, Result, EIO};

use crate::device::Device;
use crate::{BlockBuf, BLOCKS_PER_DISK, BLOCK_SIZE, DISK_COUNT, DISK_SIZE, TOTAL_SIZE};

macro_rules! try_disk {
    ($expr:expr) => {
        match $expr {
            Ok(val) => val,
            Err(err) => {
                eprintln!("Device I/O Error: {}", err);
                return Err(Error::new(EIO));
            }
        }
    };
}

/// A device backed by a single image file laid out disk after disk
pub struct DeviceFile {
    file: File,
    disk: u32,
    block: u32,
}

impl DeviceFile {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<DeviceFile> {
        let file = try_disk!(OpenOptions::new().read(true).write(true).open(path));
        Ok(DeviceFile {
            file,
            disk: 0,
            block: 0,
        })
    }

    pub fn create<P: AsRef<Path>>(path: P) -> Result<DeviceFile> {
        let file = try_disk!(OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .open(path));
        try_disk!(file.set_len(TOTAL_SIZE as u64));
        Ok(DeviceFile {
            file,
            disk: 0,
            block: 0,
        })
    }

    fn cursor(&self) -> u64 {
        (self.disk * DISK_SIZE + self.block * BLOCK_SIZE) as u64
    }
}

impl Device for DeviceFile {
    fn mount(&mut self) -> Result<()> {
        Ok(())
    }

    fn unmount(&mut self) -> Result<()> {
        // Nothing held open per mount; flush so an unmounted image is complete
        try_disk!(self.file.flush());
        Ok(())
    }

    fn seek_to_disk(&mut self, disk: u32) -> Result<()> {
        if disk >= DISK_COUNT {
            return Err(Error::new(EIO));
        }
        self.disk = disk;
        Ok(())
    }

    fn seek_to_block(&mut self, block: u32) -> Result<()> {
        if block >= BLOCKS_PER_DISK {
            return Err(Error::new(EIO));
        }
        self.block = block;
        Ok(())
    }

    fn read_block(&mut self, buffer: &mut BlockBuf) -> Result<()> {
        try_disk!(self.file.seek(SeekFrom::Start(self.cursor())));
        try_disk!(self.file.read_exact(buffer));
        Ok(())
    }

    fn write_block(&mut self, buffer: &BlockBuf) -> Result<()> {
        try_disk!(self.file.seek(SeekFrom::Start(self.cursor())));
        try_disk!(self.file.write_all(buffer));
        Ok(())
    }
}
