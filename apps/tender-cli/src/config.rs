//! # CLI Configuration
//!
//! Loads the note catalogue, currency presentation and generator settings.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Command-line flags (highest priority)                              │
//! │     --denominations 5,10,25   --max-combinations 2                     │
//! │                                                                         │
//! │  2. Environment Variables                                              │
//! │     TENDER_DENOMINATIONS=5,10,25                                       │
//! │     TENDER_MAX_AMOUNT=50000                                            │
//! │                                                                         │
//! │  3. TOML Config File                                                   │
//! │     ~/.config/change/tender.toml (Linux)                               │
//! │     ~/Library/Application Support/com.tender.change/tender.toml       │
//! │                                                                         │
//! │  4. Default Values (lowest priority)                                   │
//! │     [500, 250, 100, 50, 25, 10, 5], 4 combinations                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # tender.toml
//! [catalogue]
//! denominations = [500, 250, 100, 50, 25, 10, 5]
//!
//! [currency]
//! symbol = "€"
//! minor_digits = 2
//!
//! [generator]
//! max_combinations = 4
//! max_amount = 1000000
//!
//! [generator.bands]
//! high_min = 500
//! mid_min = 100
//! high_weight = 50
//! mid_weight = 30
//! low_weight = 20
//!
//! [logging]
//! filter = "info,tender=debug"
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, info};

use tender_core::{DenominationSet, GeneratorConfig, DEFAULT_DENOMINATIONS};

use crate::error::{CliError, CliResult};

/// Largest supported number of fractional digits in displayed amounts.
pub const MAX_MINOR_DIGITS: u8 = 6;

// =============================================================================
// Sections
// =============================================================================

/// The notes available at the till.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogueConfig {
    /// Face values in the smallest currency unit, any order.
    #[serde(default = "default_denominations")]
    pub denominations: Vec<u64>,
}

fn default_denominations() -> Vec<u64> {
    DEFAULT_DENOMINATIONS.to_vec()
}

impl Default for CatalogueConfig {
    fn default() -> Self {
        CatalogueConfig {
            denominations: default_denominations(),
        }
    }
}

/// How amounts are displayed in text output.
///
/// The engine works in whole minor units; `minor_digits = 2` turns 1385
/// into `12.85`, `minor_digits = 0` prints it as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyConfig {
    #[serde(default = "default_symbol")]
    pub symbol: String,

    #[serde(default)]
    pub minor_digits: u8,
}

fn default_symbol() -> String {
    "$".to_string()
}

impl Default for CurrencyConfig {
    fn default() -> Self {
        CurrencyConfig {
            symbol: default_symbol(),
            minor_digits: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

fn default_log_filter() -> String {
    "warn,tender=info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            filter: default_log_filter(),
        }
    }
}

// =============================================================================
// Main Configuration
// =============================================================================

/// Complete CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TenderConfig {
    #[serde(default)]
    pub catalogue: CatalogueConfig,

    #[serde(default)]
    pub currency: CurrencyConfig,

    #[serde(default)]
    pub generator: GeneratorConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    /// File the settings were read from; `None` means built-in defaults.
    #[serde(skip)]
    pub source: Option<PathBuf>,

    /// `TENDER_*` variables that overrode file or default values.
    #[serde(skip)]
    pub env_overrides: Vec<String>,
}

impl TenderConfig {
    /// Loads configuration from file and environment, then validates it.
    ///
    /// An explicit `config_path` that does not exist is an error; a missing
    /// file at the default location just means defaults.
    pub fn load(config_path: Option<PathBuf>) -> CliResult<Self> {
        Self::load_with(config_path, |key| std::env::var(key).ok())
    }

    /// Same as [`load`](Self::load) with a custom environment lookup.
    pub fn load_with<F>(config_path: Option<PathBuf>, env: F) -> CliResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match config_path {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_config_path() {
                Some(path) if path.exists() => Self::from_file(path)?,
                _ => Self::default(),
            },
        };

        config.apply_env_overrides(env)?;
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: PathBuf) -> CliResult<Self> {
        let contents = match std::fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(source) => return Err(CliError::ReadConfig { path, source }),
        };
        let mut config: Self = toml::from_str(&contents)?;
        config.source = Some(path);
        Ok(config)
    }

    /// Reports where the settings came from.
    ///
    /// Loading happens before the subscriber exists, so `main` calls this
    /// once tracing is up.
    pub fn log_summary(&self) {
        match &self.source {
            Some(path) => info!(?path, "Loaded config from file"),
            None => debug!("No config file, using defaults"),
        }
        for var in &self.env_overrides {
            debug!(var = %var, "Setting overridden from environment");
        }
        debug!(
            denominations = ?self.catalogue.denominations,
            max_combinations = self.generator.max_combinations,
            max_amount = ?self.generator.max_amount,
            "Effective settings"
        );
    }

    /// Validates the configuration.
    pub fn validate(&self) -> CliResult<()> {
        DenominationSet::new(&self.catalogue.denominations)?;
        self.generator.validate()?;

        if self.currency.minor_digits > MAX_MINOR_DIGITS {
            return Err(CliError::InvalidConfig(format!(
                "currency.minor_digits must be at most {}, got {}",
                MAX_MINOR_DIGITS, self.currency.minor_digits
            )));
        }

        Ok(())
    }

    fn apply_env_overrides<F>(&mut self, env: F) -> CliResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(list) = env("TENDER_DENOMINATIONS") {
            self.catalogue.denominations = parse_list("TENDER_DENOMINATIONS", &list)?;
            self.env_overrides.push("TENDER_DENOMINATIONS".to_string());
        }

        if let Some(value) = env("TENDER_MAX_COMBINATIONS") {
            self.generator.max_combinations = parse_var("TENDER_MAX_COMBINATIONS", &value)?;
            self.env_overrides.push("TENDER_MAX_COMBINATIONS".to_string());
        }

        // "none" lifts the ceiling entirely
        if let Some(value) = env("TENDER_MAX_AMOUNT") {
            self.generator.max_amount = if value.trim().eq_ignore_ascii_case("none") {
                None
            } else {
                Some(parse_var("TENDER_MAX_AMOUNT", &value)?)
            };
            self.env_overrides.push("TENDER_MAX_AMOUNT".to_string());
        }

        if let Some(symbol) = env("TENDER_CURRENCY_SYMBOL") {
            self.currency.symbol = symbol;
            self.env_overrides.push("TENDER_CURRENCY_SYMBOL".to_string());
        }

        Ok(())
    }

    /// Returns the default config file path.
    pub fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "tender", "change")
            .map(|dirs| dirs.config_dir().join("tender.toml"))
    }
}

fn parse_var<T: std::str::FromStr>(var: &str, value: &str) -> CliResult<T> {
    value.trim().parse().map_err(|_| CliError::InvalidEnv {
        var: var.to_string(),
        value: value.to_string(),
    })
}

fn parse_list(var: &str, value: &str) -> CliResult<Vec<u64>> {
    value
        .split(',')
        .filter(|part| !part.trim().is_empty())
        .map(|part| parse_var(var, part))
        .collect()
}

// =============================================================================
// Tests
// =============================================================================
