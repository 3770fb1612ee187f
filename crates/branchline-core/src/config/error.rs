//! # Branchline Configuration Errors
//!
//! Defines [`ConfigError`] for reading and parsing engine configuration
//! files.
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error during '{operation}' on path '{path}': {source}")]
    Io {
        path: PathBuf,
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Unknown or unsupported config format for path: {path}")]
    UnsupportedFormat { path: PathBuf },

    #[error("Failed to deserialize config from {format}: {message}")]
    Deserialization { format: String, message: String },

    #[error("Failed to serialize config to {format}: {message}")]
    Serialization { format: String, message: String },
}
