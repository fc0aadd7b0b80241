//! FILENAME: app/src/main.rs

use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use tabula_lib::{logging, Config};

fn main() -> ExitCode {
    let config = Config::parse();

    if let Err(e) = logging::init(
        logging::level_for_verbosity(config.verbosity),
        config.log_file.as_deref(),
    ) {
        eprintln!("error: {}", e);
        return ExitCode::FAILURE;
    }

    match tabula_lib::run(&config) {
        Ok(output) => {
            let mut stdout = std::io::stdout().lock();
            if let Err(e) = stdout.write_all(output.as_bytes()).and_then(|_| stdout.flush()) {
                eprintln!("error: {}", e);
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
