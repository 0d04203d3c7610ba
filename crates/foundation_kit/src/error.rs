//! Error types for FoundationKit.

use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

/// A user-facing error with a short title and a detail message.
///
/// Every instance gets its own id, so two errors built from the same text
/// are still distinguishable (and never compare equal). Ids only come from
/// `new`, so the type is serialize-only.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("{title}: {message}")]
pub struct ErrorMessage {
    id: Uuid,
    title: String,
    message: String,
}

impl ErrorMessage {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[derive(Error, Debug)]
pub enum KitError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Config serialize error: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid log level: {0}")]
    InvalidLevel(String),

    #[error("Subscriber init error: {0}")]
    SubscriberInit(String),
}
