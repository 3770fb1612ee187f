//! # Branchline Kernel Errors
//!
//! Defines the crate-wide [`Error`] enum. Each subsystem owns a typed error
//! ([`EventSystemError`], [`PluginSystemError`], [`ConfigError`]) and this
//! module folds them into one type for host-facing `Result`s.
use std::result::Result as StdResult;

use crate::config::error::ConfigError;
use crate::event::error::EventSystemError;
use crate::plugin_system::error::PluginSystemError;
use thiserror::Error as ThisError;

/// Top-level error for the Branchline engine
#[derive(Debug, ThisError)]
pub enum Error {
    /// Specific, typed event system error
    #[error("Event system error: {0}")]
    EventSystem(#[from] EventSystemError),

    /// Specific, typed plugin system error
    #[error("Plugin system error: {0}")]
    PluginSystem(#[from] PluginSystemError),

    /// Configuration loading or parsing error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Generic error with message
    #[error("Error: {0}")]
    Other(String),
}

/// Shorthand for Result with our Error type
pub type Result<T> = StdResult<T, Error>;

impl From<&str> for Error {
    fn from(msg: &str) -> Self {
        Error::Other(msg.to_string())
    }
}

impl From<String> for Error {
    fn from(msg: String) -> Self {
        Error::Other(msg)
    }
}
