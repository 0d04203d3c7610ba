//! Debug Log Facade
//!
//! Development-only logging with per-category logger caching and timing
//! instrumentation.
//!
//! The facade is compiled in when `debug_assertions` are on or the
//! `debug-log` feature is enabled. Otherwise `is_enabled` is the constant
//! `false`: message closures are never evaluated and the measure helpers
//! reduce to running the work.
//!
//! Usage:
//! ```ignore
//! let log = DebugLog::new(Arc::new(TracingSink));
//! log.configure(Some("com.example.app"), None);
//! log.debug(|| format!("loaded {} brushes", brushes.len()), Some("Brush"));
//! let frames = log.measure(|| "encode gif".into(), Some("Export"), || encode(&clip));
//! ```

mod measure;

pub use measure::format_elapsed;

use crate::config::DebugLogConfig;
use crate::identity;
use crate::logging::{LogSink, Logger, TracingSink};
use crate::{DEFAULT_DEBUG_CATEGORY, DEFAULT_DEBUG_SUBSYSTEM};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, RwLock};

/// Whether the facade is part of this build
pub const COMPILED_IN: bool = cfg!(any(debug_assertions, feature = "debug-log"));

#[derive(Debug, Clone)]
struct Defaults {
    subsystem: String,
    category: String,
}

pub struct DebugLog {
    defaults: RwLock<Defaults>,
    loggers: Mutex<HashMap<String, Arc<Logger>>>,
    sink: Arc<dyn LogSink>,
    enabled: AtomicBool,
}

impl DebugLog {
    /// Facade with the host identifier as default subsystem
    pub fn new(sink: Arc<dyn LogSink>) -> Self {
        Self::with_defaults(
            identity::host_identifier_or(DEFAULT_DEBUG_SUBSYSTEM),
            DEFAULT_DEBUG_CATEGORY,
            sink,
        )
    }

    pub fn with_defaults(
        subsystem: impl Into<String>,
        category: impl Into<String>,
        sink: Arc<dyn LogSink>,
    ) -> Self {
        Self {
            defaults: RwLock::new(Defaults {
                subsystem: subsystem.into(),
                category: category.into(),
            }),
            loggers: Mutex::new(HashMap::new()),
            sink,
            enabled: AtomicBool::new(true),
        }
    }

    pub fn from_config(config: &DebugLogConfig, sink: Arc<dyn LogSink>) -> Self {
        let log = Self::new(sink);
        log.configure(config.subsystem.as_deref(), config.category.as_deref());
        log.set_enabled(config.enabled);
        log
    }

    /// Process-wide facade writing to `tracing`
    pub fn shared() -> &'static DebugLog {
        static SHARED: OnceLock<DebugLog> = OnceLock::new();
        SHARED.get_or_init(|| DebugLog::new(Arc::new(TracingSink)))
    }

    /// Override the default subsystem and/or category.
    ///
    /// Meant to run once during startup. Loggers already cached keep the
    /// subsystem they were created with.
    pub fn configure(&self, subsystem: Option<&str>, category: Option<&str>) {
        if !COMPILED_IN {
            return;
        }
        let mut defaults = self.defaults.write().unwrap_or_else(|e| e.into_inner());
        if let Some(subsystem) = subsystem {
            defaults.subsystem = subsystem.to_string();
        }
        if let Some(category) = category {
            defaults.category = category.to_string();
        }
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::Relaxed);
    }

    #[inline(always)]
    pub fn is_enabled(&self) -> bool {
        COMPILED_IN && self.enabled.load(Ordering::Relaxed)
    }

    pub fn default_subsystem(&self) -> String {
        self.defaults().subsystem
    }

    pub fn default_category(&self) -> String {
        self.defaults().category
    }

    fn defaults(&self) -> Defaults {
        self.defaults
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    fn cache(&self) -> MutexGuard<'_, HashMap<String, Arc<Logger>>> {
        self.loggers.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Cached logger for `category`, or the default category when `None`.
    ///
    /// The first request for a category creates its logger with the current
    /// default subsystem; later requests return the same handle.
    pub fn logger(&self, category: Option<&str>) -> Arc<Logger> {
        let defaults = self.defaults();
        let category = category.unwrap_or(defaults.category.as_str());

        let mut cache = self.cache();
        if let Some(existing) = cache.get(category) {
            return existing.clone();
        }
        let logger = Arc::new(Logger::new(
            &defaults.subsystem,
            category,
            self.sink.clone(),
        ));
        cache.insert(category.to_string(), logger.clone());
        logger
    }

    /// Categories that already have a cached logger
    pub fn cached_categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = self.cache().keys().cloned().collect();
        categories.sort();
        categories
    }

    #[inline]
    pub fn debug(&self, message: impl FnOnce() -> String, category: Option<&str>) {
        if self.is_enabled() {
            let msg = message();
            self.logger(category).debug(&msg);
        }
    }

    #[inline]
    pub fn info(&self, message: impl FnOnce() -> String, category: Option<&str>) {
        if self.is_enabled() {
            let msg = message();
            self.logger(category).info(&msg);
        }
    }

    #[inline]
    pub fn error(&self, message: impl FnOnce() -> String, category: Option<&str>) {
        if self.is_enabled() {
            let msg = message();
            self.logger(category).error(&msg);
        }
    }
}

impl std::fmt::Debug for DebugLog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let defaults = self.defaults();
        f.debug_struct("DebugLog")
            .field("subsystem", &defaults.subsystem)
            .field("category", &defaults.category)
            .field("enabled", &self.is_enabled())
            .field("cached", &self.cached_categories())
            .finish()
    }
}
