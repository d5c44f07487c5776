use std::{env, process};

use jbod::{DeviceFile, DISK_COUNT, DISK_SIZE, TOTAL_SIZE};

fn usage() -> ! {
    eprintln!("jbod-mkimage DISK");
    process::exit(1);
}

fn main() {
    env_logger::init();

    let mut disk_path_opt = None;
    for arg in env::args().skip(1) {
        if disk_path_opt.is_none() {
            disk_path_opt = Some(arg);
        } else {
            eprintln!("jbod-mkimage: too many arguments provided");
            usage();
        }
    }

    let disk_path = if let Some(path) = disk_path_opt {
        path
    } else {
        eprintln!("jbod-mkimage: no disk image provided");
        usage();
    };

    match DeviceFile::create(&disk_path) {
        Ok(_) => {
            eprintln!(
                "jbod-mkimage: created image {}, {} disks of {} bytes, {} bytes total",
                disk_path, DISK_COUNT, DISK_SIZE, TOTAL_SIZE
            );
        }
        Err(err) => {
            eprintln!("jbod-mkimage: failed to create image {}: {}", disk_path, err);
            process::exit(1);
        }
    }
}
