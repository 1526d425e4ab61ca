//! Error types for config loading and validation.

use std::path::PathBuf;
use thiserror::Error;

/// Errors returned while loading or validating config.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reading a config file failed.
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// A layer is not valid JSON5.
    #[error("failed to parse config {label}: {source}")]
    Parse {
        label: String,
        #[source]
        source: json5::Error,
    },
    /// The merged value could not be decoded into the schema.
    #[error("failed to decode config: {0}")]
    Decode(#[from] serde_json::Error),
    /// A specific field failed validation.
    #[error("invalid config at {path}: {message}")]
    InvalidField { path: String, message: String },
}

impl ConfigError {
    pub(crate) fn invalid(path: &str, message: impl Into<String>) -> Self {
        Self::InvalidField {
            path: path.to_string(),
            message: message.into(),
        }
    }
}
