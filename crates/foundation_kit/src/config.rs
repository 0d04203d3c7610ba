//! FoundationKit Configuration
//!
//! Loaded from a TOML file supplied by the host application:
//!
//! ```toml
//! [log]
//! level = "info"
//!
//! [debug_log]
//! enabled = true
//! subsystem = "com.example.app"
//! category = "Debug"
//! ```
//!
//! Every field has a default, so an empty file is a valid configuration.

use crate::error::KitError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// Debug facade configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebugLogConfig {
    /// Runtime switch; has no effect when the facade is compiled out
    #[serde(default = "default_debug_enabled")]
    pub enabled: bool,

    /// Overrides the host identifier as default subsystem
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subsystem: Option<String>,

    /// Overrides the default category
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

fn default_debug_enabled() -> bool {
    true
}

impl Default for DebugLogConfig {
    fn default() -> Self {
        Self {
            enabled: default_debug_enabled(),
            subsystem: None,
            category: None,
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KitConfig {
    #[serde(default)]
    pub log: LogConfig,

    #[serde(default)]
    pub debug_log: DebugLogConfig,
}

impl KitConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, KitError> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, KitError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Like `load`, but a missing file yields the defaults
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, KitError> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load(path)
    }

    pub fn to_toml_string(&self) -> Result<String, KitError> {
        Ok(toml::to_string_pretty(self)?)
    }
}
