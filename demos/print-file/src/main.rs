use std::{
    io::{self, Write},
    process::ExitCode,
};

use imu::fileloader::FileLoader;
use log::{error, info};

fn main() -> ExitCode {
    env_logger::init();

    let mut args = std::env::args_os().skip(1).peekable();
    if args.peek().is_none() {
        eprintln!("usage: print-file <path>...");
        return ExitCode::from(2);
    }

    let mut stdout = io::stdout().lock();
    let mut failed = false;
    for arg in args {
        let path = match arg.into_string() {
            Ok(path) => path,
            Err(arg) => {
                error!("Path is not valid UTF-8: {arg:?}");
                failed = true;
                continue;
            }
        };

        let loader = FileLoader::new(path);
        match loader.read_bytes() {
            Ok(contents) => {
                if let Err(e) = stdout.write_all(&contents) {
                    error!("Couldn't write to stdout: {e}");
                    return ExitCode::FAILURE;
                }
                info!("Printed {}", loader.filename());
            }
            Err(e) => {
                error!("{e}");
                failed = true;
            }
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
