//! Error types for Horizon Gallery.
//!
//! Navigation itself never fails: out-of-range requests and lookup misses are
//! resolved by policy inside the controller. Errors only come from the
//! fallible edges, such as reading and validating configuration.

use std::path::PathBuf;

/// Result type alias for gallery operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in Horizon Gallery.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration text is not valid TOML or does not match the schema.
    #[error("Failed to parse gallery configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// A configuration file could not be read.
    #[error("Failed to read gallery configuration '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A configuration value is out of its permitted range.
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: &'static str, message: String },
}

impl Error {
    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a value error.
    pub fn invalid_value(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field,
            message: message.into(),
        }
    }
}
