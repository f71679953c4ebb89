//! Positional entry point kept for existing scripts:
//! `flowmod-compat <path> <lower> <upper> [ignore_label ...]`.

use flowmod::{logging, run, RunOptions};
use std::path::PathBuf;
use std::process::ExitCode;

fn print_usage() {
    println!("Usage: flowmod-compat <file or directory> <lower> <upper> [ignore_label ...]");
    println!("Example: flowmod-compat ./json 5 6 z");
}

fn main() -> ExitCode {
    logging::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 4 {
        print_usage();
        return ExitCode::FAILURE;
    }

    let (lower, upper) = match (args[2].parse::<i64>(), args[3].parse::<i64>()) {
        (Ok(lower), Ok(upper)) => (lower, upper),
        _ => {
            log::error!("Lower and upper bounds must be integers");
            return ExitCode::FAILURE;
        }
    };

    let options = RunOptions {
        input: PathBuf::from(&args[1]),
        lower,
        upper,
        ignored_labels: args[4..].to_vec(),
        config_path: None,
    };

    match run(&options) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            if e.is_usage_error() {
                print_usage();
            }
            ExitCode::FAILURE
        }
    }
}
