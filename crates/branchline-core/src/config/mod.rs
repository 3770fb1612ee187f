//! # Branchline Configuration
//!
//! [`EngineConfig`] holds the namespace segment and baseline context an
//! engine starts with. Configs are read from JSON, YAML (`yaml-config`
//! feature) or TOML (`toml-config` feature) files; the format follows the
//! file extension.
pub mod error;

use std::fs;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::event::context::Context;
use crate::kernel::constants::{DEFAULT_EDITOR_NAME, DEFAULT_NAMESPACE, EDITOR_NAME_KEY};

pub use error::ConfigError;

/// Supported configuration file formats
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigFormat {
    /// JSON format (.json)
    Json,
    /// YAML format (.yaml, .yml) - requires "yaml-config" feature
    #[cfg(feature = "yaml-config")]
    Yaml,
    /// TOML format (.toml) - requires "toml-config" feature
    #[cfg(feature = "toml-config")]
    Toml,
}

impl ConfigFormat {
    /// Get the file extension for this format
    pub fn extension(&self) -> &'static str {
        match self {
            ConfigFormat::Json => "json",
            #[cfg(feature = "yaml-config")]
            ConfigFormat::Yaml => "yaml",
            #[cfg(feature = "toml-config")]
            ConfigFormat::Toml => "toml",
        }
    }

    /// Determine format from file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| match ext.to_lowercase().as_str() {
                "json" => Some(ConfigFormat::Json),
                #[cfg(feature = "yaml-config")]
                "yaml" | "yml" => Some(ConfigFormat::Yaml),
                #[cfg(feature = "toml-config")]
                "toml" => Some(ConfigFormat::Toml),
                _ => None,
            })
    }
}

fn default_namespace() -> String {
    DEFAULT_NAMESPACE.to_string()
}

fn default_baseline() -> Map<String, Value> {
    let mut baseline = Map::new();
    baseline.insert(
        EDITOR_NAME_KEY.to_string(),
        Value::String(DEFAULT_EDITOR_NAME.to_string()),
    );
    baseline
}

/// Settings an engine is constructed from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Root segment prefixed to every event path the engine manages
    #[serde(default = "default_namespace")]
    pub namespace: String,
    /// Engine-wide state delivered to every handler
    #[serde(default = "default_baseline")]
    pub baseline: Map<String, Value>,
}

impl EngineConfig {
    /// Baseline as a handler [`Context`]
    pub fn baseline_context(&self) -> Context {
        Context::from_map(self.baseline.clone())
    }

    /// Load a config file, picking the format from its extension
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let format = ConfigFormat::from_path(path).ok_or_else(|| ConfigError::UnsupportedFormat {
            path: path.to_path_buf(),
        })?;
        let data = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            operation: "read_config".to_string(),
            source,
        })?;
        debug!("Loaded {:?} config from {}", format, path.display());
        Self::from_str_with_format(&data, format)
    }

    /// Deserialize from string based on format
    pub fn from_str_with_format(data: &str, format: ConfigFormat) -> Result<Self, ConfigError> {
        let invalid = |message: String| ConfigError::Deserialization {
            format: format.extension().to_uppercase(),
            message,
        };
        match format {
            ConfigFormat::Json => serde_json::from_str(data).map_err(|e| invalid(e.to_string())),
            #[cfg(feature = "yaml-config")]
            ConfigFormat::Yaml => serde_yaml::from_str(data).map_err(|e| invalid(e.to_string())),
            #[cfg(feature = "toml-config")]
            ConfigFormat::Toml => toml::from_str(data).map_err(|e| invalid(e.to_string())),
        }
    }

    /// Serialize to string based on format
    pub fn to_string_with_format(&self, format: ConfigFormat) -> Result<String, ConfigError> {
        let failed = |message: String| ConfigError::Serialization {
            format: format.extension().to_uppercase(),
            message,
        };
        match format {
            ConfigFormat::Json => serde_json::to_string_pretty(self).map_err(|e| failed(e.to_string())),
            #[cfg(feature = "yaml-config")]
            ConfigFormat::Yaml => serde_yaml::to_string(self).map_err(|e| failed(e.to_string())),
            #[cfg(feature = "toml-config")]
            ConfigFormat::Toml => toml::to_string_pretty(self).map_err(|e| failed(e.to_string())),
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            namespace: default_namespace(),
            baseline: default_baseline(),
        }
    }
}
