//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application settings.
//! Every section is optional; a missing file section falls back to defaults.
//!
//! # Example
//!
//! ```no_run
//! use cancelwatch::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("cancelwatch.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use super::logging::LoggingConfig;
use crate::adapter::outbound::csv::settings::CsvSourceConfig;
use crate::domain::monitor::MonitorConfig;
use crate::error::{ConfigError, Result};

/// Main application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Window length and offender threshold.
    #[serde(default)]
    pub monitor: MonitorConfig,

    /// Trade file code mapping.
    #[serde(default)]
    pub source: CsvSourceConfig,

    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Read, parse and validate a TOML configuration file.
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Parse and validate configuration from a TOML string.
    #[allow(clippy::result_large_err)]
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path` when given, otherwise use defaults.
    #[allow(clippy::result_large_err)]
    pub fn load_or_default<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    #[allow(clippy::result_large_err)]
    pub fn validate(&self) -> Result<()> {
        if self.monitor.window_secs < 0 {
            return Err(ConfigError::InvalidValue {
                field: "window_secs",
                reason: format!("must be non-negative, got {}", self.monitor.window_secs),
            }
            .into());
        }

        let threshold = self.monitor.threshold;
        if threshold <= Decimal::ZERO || threshold > Decimal::ONE {
            return Err(ConfigError::InvalidValue {
                field: "threshold",
                reason: format!("must be in (0, 1], got {threshold}"),
            }
            .into());
        }

        self.source.validate()?;

        if !matches!(self.logging.format.as_str(), "pretty" | "json") {
            return Err(ConfigError::InvalidValue {
                field: "format",
                reason: format!("expected \"pretty\" or \"json\", got {:?}", self.logging.format),
            }
            .into());
        }

        Ok(())
    }

    /// Render the effective configuration as TOML.
    #[allow(clippy::result_large_err)]
    pub fn to_toml(&self) -> Result<String> {
        let rendered = toml::to_string_pretty(self).map_err(ConfigError::Render)?;
        Ok(rendered)
    }

    pub fn init_logging(&self) {
        self.logging.init();
    }
}
