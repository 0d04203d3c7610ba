//! Logger handles.

use super::{LogLevel, LogRecord, LogSink};
use std::fmt;
use std::sync::Arc;

/// Accepts leveled log writes for one subsystem/category pair
#[derive(Clone)]
pub struct Logger {
    subsystem: Arc<str>,
    category: Arc<str>,
    sink: Arc<dyn LogSink>,
}

impl Logger {
    pub fn new(subsystem: &str, category: &str, sink: Arc<dyn LogSink>) -> Self {
        Self {
            subsystem: Arc::from(subsystem),
            category: Arc::from(category),
            sink,
        }
    }

    pub fn subsystem(&self) -> &str {
        &self.subsystem
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn is_enabled(&self, level: LogLevel) -> bool {
        self.sink.enabled(level)
    }

    pub fn log(&self, level: LogLevel, message: &str) {
        if !self.sink.enabled(level) {
            return;
        }
        self.sink.write(LogRecord::new(
            level,
            &*self.subsystem,
            &*self.category,
            message,
        ));
    }

    pub fn trace(&self, message: &str) {
        self.log(LogLevel::Trace, message)
    }

    pub fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message)
    }

    pub fn info(&self, message: &str) {
        self.log(LogLevel::Info, message)
    }

    pub fn warn(&self, message: &str) {
        self.log(LogLevel::Warn, message)
    }

    pub fn error(&self, message: &str) {
        self.log(LogLevel::Error, message)
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("subsystem", &self.subsystem)
            .field("category", &self.category)
            .finish()
    }
}
