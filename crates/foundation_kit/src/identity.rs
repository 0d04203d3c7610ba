//! Host application identity.
//!
//! The subsystem of every log line is the host's identifier. It comes from
//! `FOUNDATION_KIT_SUBSYSTEM` when set; otherwise callers fall back to their
//! own default subsystem constant.

use crate::SUBSYSTEM_ENV_VAR;
use std::env;

/// Identifier of the running host application, if one is configured
pub fn host_identifier() -> Option<String> {
    env::var(SUBSYSTEM_ENV_VAR).ok().and_then(non_empty)
}

/// Host identifier, or `fallback` when none is available
pub fn host_identifier_or(fallback: &str) -> String {
    host_identifier().unwrap_or_else(|| fallback.to_string())
}

fn non_empty(s: String) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
