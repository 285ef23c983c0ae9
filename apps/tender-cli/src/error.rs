//! CLI error type.
//!
//! Wraps core errors and adds the failures only the front end can hit:
//! reading and parsing configuration, and rendering output.

use std::path::PathBuf;

use tender_core::CoreError;
use thiserror::Error;

/// Errors surfaced to the user on stderr.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Failed to read config file {path}: {source}")]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file: {0}")]
    ParseConfig(#[from] toml::de::Error),

    /// An environment override could not be parsed.
    #[error("Invalid value for {var}: '{value}'")]
    InvalidEnv { var: String, value: String },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Failed to render output: {0}")]
    Render(#[from] serde_json::Error),
}

pub type CliResult<T> = Result<T, CliError>;
