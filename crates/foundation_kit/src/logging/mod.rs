//! Logging Module
//!
//! Category-tagged logging for FoundationKit with:
//! - Severity levels (TRACE, DEBUG, INFO, WARN, ERROR)
//! - `Logger` handles bound to a fixed subsystem/category pair
//! - A pluggable `LogSink` (tracing in production, memory in tests)
//! - A fixed registry of named application channels

pub mod channels;
pub mod logger;
pub mod sink;

pub use logger::*;
pub use sink::*;

use crate::config::LogConfig;
use crate::error::KitError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing_subscriber::EnvFilter;

/// Log level enum
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace = 0,
    #[default]
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "TRACE",
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "trace" => Some(LogLevel::Trace),
            "debug" => Some(LogLevel::Debug),
            "info" => Some(LogLevel::Info),
            "warn" | "warning" => Some(LogLevel::Warn),
            "error" => Some(LogLevel::Error),
            _ => None,
        }
    }

    pub fn as_tracing(&self) -> tracing::Level {
        match self {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single log write request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogRecord {
    /// ISO 8601 timestamp with timezone
    pub timestamp: DateTime<Utc>,
    pub level: LogLevel,
    /// Owning application namespace
    pub subsystem: String,
    /// Sub-namespace within the subsystem
    pub category: String,
    pub message: String,
}

impl LogRecord {
    pub fn new(
        level: LogLevel,
        subsystem: impl Into<String>,
        category: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            level,
            subsystem: subsystem.into(),
            category: category.into(),
            message: message.into(),
        }
    }

    /// Serialize to JSONL (single line JSON)
    pub fn to_jsonl(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| {
            format!(
                r#"{{"timestamp":"{}","level":"{}","category":"{}","message":"serialization_error"}}"#,
                self.timestamp.to_rfc3339(),
                self.level.as_str().to_lowercase(),
                self.category
            )
        })
    }

    /// Parse a line produced by `to_jsonl`
    pub fn from_jsonl(line: &str) -> Result<Self, KitError> {
        Ok(serde_json::from_str(line.trim())?)
    }
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over the configured level. Fails if a global
/// subscriber is already installed.
pub fn init(config: &LogConfig) -> Result<(), KitError> {
    let level = LogLevel::parse(&config.level)
        .ok_or_else(|| KitError::InvalidLevel(config.level.clone()))?;

    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::new(level.as_str().to_lowercase()),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .map_err(|e| KitError::SubscriberInit(e.to_string()))
}
