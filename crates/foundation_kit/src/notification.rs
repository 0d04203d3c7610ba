//! Notification channel names.
//!
//! Names are plain string keys that publishers and subscribers agree on.
//! The string values are part of the public contract and must not change.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// Identifier of a broadcast notification channel
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NotificationName(Cow<'static, str>);

impl NotificationName {
    /// A file of the app's custom document type was received
    pub const DID_RECEIVE_DOT_SHAKE_FILE: NotificationName =
        NotificationName(Cow::Borrowed("didReceiveDotShakeFile"));

    pub const fn new(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NotificationName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for NotificationName {
    fn from(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }
}

impl From<String> for NotificationName {
    fn from(name: String) -> Self {
        Self(Cow::Owned(name))
    }
}

impl AsRef<str> for NotificationName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
