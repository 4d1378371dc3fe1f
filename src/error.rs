use std::path::PathBuf;

use thiserror::Error;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),

    #[error("failed to render config: {0}")]
    Render(#[source] toml::ser::Error),
}

/// Errors raised by a trade source before any record reaches the monitor.
///
/// Individual unusable rows are not errors; they surface as incomplete
/// records and are filtered by the monitor.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("trade source unavailable at {}: {source}", path.display())]
    Unavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("trade source at {} is malformed: {reason}", path.display())]
    Malformed { path: PathBuf, reason: String },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Source(#[from] SourceError),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
