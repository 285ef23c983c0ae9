//! # tender-cli: Command-Line Front End
//!
//! Embeds `tender-core` behind the `tender` binary.
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       tender Startup                                    │
//! │                                                                         │
//! │  1. Parse arguments (clap)                                             │
//! │  2. Load config: defaults → tender.toml → TENDER_* env → flags         │
//! │  3. Initialize tracing (stderr, RUST_LOG or [logging] filter), then    │
//! │     report the config source                                           │
//! │  4. Run the subcommand against tender-core                             │
//! │  5. Print text or JSON to stdout                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`args`] - Argument definitions
//! - [`config`] - Layered configuration
//! - [`output`] - Text and JSON rendering
//! - [`error`] - CLI error type

pub mod args;
pub mod config;
pub mod error;
pub mod output;

use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use tender_core::{change_due, ChangeGenerator, Money};

use args::{Cli, Command};
use config::TenderConfig;
use error::CliResult;
use output::{render_change, render_representable, ChangeReport, RepresentableReport, Sale};

// =============================================================================
// Setup
// =============================================================================

/// Loads configuration and applies the command-line overrides on top.
pub fn load_config(cli: &Cli) -> CliResult<TenderConfig> {
    let mut config = TenderConfig::load(cli.config.clone())?;
    apply_flags(&mut config, cli)?;
    Ok(config)
}

/// Applies `--denominations` and `--max-combinations`, then re-validates.
pub fn apply_flags(config: &mut TenderConfig, cli: &Cli) -> CliResult<()> {
    if let Some(denominations) = &cli.denominations {
        config.catalogue.denominations = denominations.clone();
    }
    if let Some(max) = cli.max_combinations {
        config.generator.max_combinations = max;
    }
    config.validate()
}

/// Initializes the tracing subscriber.
///
/// `RUST_LOG` wins over the configured filter. Logs go to stderr so JSON on
/// stdout stays parseable.
pub fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

// =============================================================================
// Commands
// =============================================================================

/// Runs a subcommand and returns what should be printed.
pub fn execute(cli: &Cli, config: &TenderConfig) -> CliResult<String> {
    let generator = ChangeGenerator::with_config(config.generator)?;
    let denominations = &config.catalogue.denominations;
    debug!(?denominations, command = ?cli.command, "executing");

    match cli.command {
        Command::Change { amount } => {
            let result = generator.generate(amount, denominations)?;
            let report = ChangeReport {
                sale: None,
                amount_owed: amount,
                result: &result,
            };
            render_change(&report, cli.format, &config.currency)
        }
        Command::Tendered { total, tendered } => {
            let due = change_due(Money::from_minor(total), Money::from_minor(tendered))?;
            info!(total, tendered, change_due = %due, "computed change due");

            let result = generator.generate(due.minor(), denominations)?;
            let report = ChangeReport {
                sale: Some(Sale { total, tendered }),
                amount_owed: due.minor(),
                result: &result,
            };
            render_change(&report, cli.format, &config.currency)
        }
        Command::Representable { amount } => {
            let givable = generator.max_representable(amount, denominations)?;
            let report = RepresentableReport {
                amount,
                givable_amount: givable,
                remainder: amount.unsigned_abs() - givable,
            };
            render_representable(&report, cli.format, &config.currency)
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
