use clap::{CommandFactory, Parser};
use flowmod::{logging, run, RunOptions};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "flowmod")]
#[command(about = "Extract closed, size-bounded subgraphs from flow JSON files as module_*.json")]
#[command(after_help = "Example: flowmod ./json 5 6 z")]
#[command(allow_negative_numbers = true)]
struct Args {
    /// Input JSON file, or directory of JSON files
    path: PathBuf,

    /// Smallest subgraph size (positive)
    lower: i64,

    /// Largest subgraph size (positive, >= lower)
    upper: i64,

    /// Field names whose contents are not scanned for node references
    ignore_labels: Vec<String>,

    /// Configuration file (defaults to plusconfig.json next to the input)
    #[arg(short, long, env = "FLOWMOD_CONFIG")]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    // Load .env file if it exists (ignore errors - file is optional)
    let _ = dotenv::dotenv();
    logging::init();

    let args = Args::parse();

    let options = RunOptions {
        input: args.path,
        lower: args.lower,
        upper: args.upper,
        ignored_labels: args.ignore_labels,
        config_path: args.config,
    };

    match run(&options) {
        Ok(report) => {
            log::info!(
                "Done: {} file(s), {} subgraph(s), {} module(s) written",
                report.files_processed,
                report.subgraphs_found,
                report.modules_written
            );
            if report.write_failures > 0 {
                log::warn!("{} module file(s) could not be written", report.write_failures);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{}", e);
            if e.is_usage_error() {
                eprintln!("{}", Args::command().render_usage());
            }
            ExitCode::FAILURE
        }
    }
}
