//! # tender
//!
//! Entry point for the `tender` command.
//!
//! ```bash
//! tender change 137
//! tender tendered --total 1135 --tendered 2000 --format json
//! tender representable 33 --denominations 25,10
//! ```

use std::process::ExitCode;

use clap::Parser;
use tracing::error;

use tender_cli::args::Cli;
use tender_cli::{execute, init_tracing, load_config};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("tender: {}", err);
            return ExitCode::FAILURE;
        }
    };

    init_tracing(&config.logging.filter);
    config.log_summary();

    match execute(&cli, &config) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(error = %err, "command failed");
            eprintln!("tender: {}", err);
            ExitCode::FAILURE
        }
    }
}
