//! Command-line arguments.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::output::OutputFormat;

/// List the ways to hand back change at the till.
///
/// Amounts and notes are integers in the smallest currency unit.
#[derive(Debug, Parser)]
#[command(name = "tender", version, about)]
pub struct Cli {
    /// Config file (default: the platform config dir's tender.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the note catalogue, e.g. 5,10,25
    #[arg(long, global = true, value_delimiter = ',', value_name = "LIST")]
    pub denominations: Option<Vec<u64>>,

    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Maximum number of combinations to list
    #[arg(long, global = true, value_name = "N")]
    pub max_combinations: Option<usize>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Show the ways to hand back an amount owed
    Change {
        #[arg(allow_negative_numbers = true)]
        amount: i64,
    },

    /// Compute change due for a sale, then show the ways to hand it back
    Tendered {
        /// Sale total
        #[arg(long, allow_negative_numbers = true)]
        total: i64,

        /// Cash handed over by the customer
        #[arg(long, allow_negative_numbers = true)]
        tendered: i64,
    },

    /// Show how much of an amount the catalogue can cover exactly
    Representable {
        #[arg(allow_negative_numbers = true)]
        amount: i64,
    },
}
