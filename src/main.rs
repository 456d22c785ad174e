use std::path::Path;
use std::process::ExitCode;

use clap::error::ErrorKind;
use log::{debug, error};

use protein_validator::cli;

fn main() -> ExitCode {
    env_logger::init();

    let input = match cli::parse_args(std::env::args_os()) {
        Ok(path) => path,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            debug!("{}", e);
            println!("{}", cli::USAGE);
            return ExitCode::from(1);
        }
    };

    match protein_validator::run(&input, Path::new(".")) {
        Ok(summary) => {
            println!("{}", summary);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Run aborted: {}", e);
            eprintln!("Error: {}", e);
            ExitCode::from(1)
        }
    }
}
