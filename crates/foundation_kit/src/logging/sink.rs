//! Log sinks.
//!
//! A sink is where `Logger` handles deliver records. `TracingSink` forwards
//! to the `tracing` ecosystem; `MemorySink` keeps records for inspection.

use super::{LogLevel, LogRecord};
use std::sync::{Arc, Mutex, MutexGuard};

/// Destination for log records
pub trait LogSink: Send + Sync {
    fn write(&self, record: LogRecord);

    /// Cheap pre-check so callers can skip building records nobody reads
    fn enabled(&self, _level: LogLevel) -> bool {
        true
    }
}

impl<S: LogSink + ?Sized> LogSink for Arc<S> {
    fn write(&self, record: LogRecord) {
        (**self).write(record)
    }

    fn enabled(&self, level: LogLevel) -> bool {
        (**self).enabled(level)
    }
}

/// Forwards records to `tracing` with `subsystem` and `category` fields
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn write(&self, record: LogRecord) {
        let LogRecord {
            level,
            subsystem,
            category,
            message,
            ..
        } = record;
        match level {
            LogLevel::Trace => tracing::trace!(%subsystem, %category, "{}", message),
            LogLevel::Debug => tracing::debug!(%subsystem, %category, "{}", message),
            LogLevel::Info => tracing::info!(%subsystem, %category, "{}", message),
            LogLevel::Warn => tracing::warn!(%subsystem, %category, "{}", message),
            LogLevel::Error => tracing::error!(%subsystem, %category, "{}", message),
        }
    }

    fn enabled(&self, level: LogLevel) -> bool {
        tracing::level_enabled!(level.as_tracing())
    }
}

/// Keeps every record in memory
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Mutex<Vec<LogRecord>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    fn lock(&self) -> MutexGuard<'_, Vec<LogRecord>> {
        self.records.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn records(&self) -> Vec<LogRecord> {
        self.lock().clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.lock().iter().map(|r| r.message.clone()).collect()
    }

    pub fn records_for(&self, category: &str) -> Vec<LogRecord> {
        self.lock()
            .iter()
            .filter(|r| r.category == category)
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }
}

impl LogSink for MemorySink {
    fn write(&self, record: LogRecord) {
        self.lock().push(record);
    }
}
