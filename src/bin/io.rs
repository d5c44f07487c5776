use std::{env, process};

use jbod::{Array, DeviceFile};

fn usage() -> ! {
    eprintln!("jbod-io DISK read ADDR LEN");
    eprintln!("jbod-io DISK write ADDR DATA");
    process::exit(1);
}

fn parse_u32(what: &str, arg: &str) -> u32 {
    match arg.parse() {
        Ok(val) => val,
        Err(err) => {
            eprintln!("jbod-io: bad {} {}: {}", what, arg, err);
            usage();
        }
    }
}

fn hex_dump(addr: u32, data: &[u8]) {
    for (i, chunk) in data.chunks(16).enumerate() {
        print!("{:08x}:", addr as usize + i * 16);
        for byte in chunk {
            print!(" {:02x}", byte);
        }
        println!();
    }
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    if args.len() < 3 {
        eprintln!("jbod-io: not enough arguments provided");
        usage();
    }

    let disk_path = &args[0];
    let command = &args[1];
    let addr = parse_u32("address", &args[2]);

    let device = match DeviceFile::open(disk_path) {
        Ok(device) => device,
        Err(err) => {
            eprintln!("jbod-io: failed to open image {}: {}", disk_path, err);
            process::exit(1);
        }
    };

    let mut array = Array::new(device);
    if let Err(err) = array.mount() {
        eprintln!("jbod-io: failed to mount {}: {}", disk_path, err);
        process::exit(1);
    }

    let res = match command.as_str() {
        "read" => {
            if args.len() != 4 {
                usage();
            }
            let len = parse_u32("length", &args[3]);
            let mut buffer = vec![0; len as usize];
            match array.read(addr, len, Some(&mut buffer)) {
                Ok(count) => {
                    hex_dump(addr, &buffer[..count]);
                    Ok(())
                }
                Err(err) => Err(err),
            }
        }
        "write" => {
            if args.len() != 4 {
                usage();
            }
            let data = args[3].as_bytes();
            array.write(addr, data.len() as u32, Some(data)).map(|count| {
                eprintln!("jbod-io: wrote {} bytes at {}", count, addr);
            })
        }
        _ => {
            eprintln!("jbod-io: unknown command {}", command);
            usage();
        }
    };

    if let Err(err) = res {
        eprintln!("jbod-io: {} failed: {}", command, err);
        process::exit(1);
    }

    if let Err(err) = array.unmount() {
        eprintln!("jbod-io: failed to unmount {}: {}", disk_path, err);
        process::exit(1);
    }
}
