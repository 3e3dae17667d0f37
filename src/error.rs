//! Error types for the conversion pipeline.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading configuration or converting commands.
///
/// Malformed metadata never produces an error; only filesystem faults and
/// invalid configuration do.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Unknown target: {0}")]
    UnknownTarget(String),

    #[error(transparent)]
    Config(#[from] config::ConfigError),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl ConvertError {
    /// Wrap an I/O error with the path it occurred at.
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        ConvertError::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}

impl From<serde_json::Error> for ConvertError {
    fn from(err: serde_json::Error) -> Self {
        ConvertError::Serialization(err.to_string())
    }
}

impl From<toml::ser::Error> for ConvertError {
    fn from(err: toml::ser::Error) -> Self {
        ConvertError::Serialization(err.to_string())
    }
}
