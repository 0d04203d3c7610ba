//! Timing instrumentation for the debug facade.
//!
//! Each helper runs the work, then logs `"<label>: <elapsed>ms"` at debug
//! level on the resolved category. The `try_` variants skip the timing line
//! when the work fails and hand the error back untouched. For the async
//! variants the timing covers the whole await; a future dropped before
//! completion logs nothing.

use super::DebugLog;
use std::future::Future;
use std::time::{Duration, Instant};

/// Timing line as written to the log
pub fn format_elapsed(label: &str, elapsed: Duration) -> String {
    format!("{}: {:.2}ms", label, elapsed.as_secs_f64() * 1000.0)
}

impl DebugLog {
    fn log_elapsed(&self, label: &str, category: Option<&str>, start: Instant) {
        let line = format_elapsed(label, start.elapsed());
        self.logger(category).debug(&line);
    }

    pub fn measure<T>(
        &self,
        label: impl FnOnce() -> String,
        category: Option<&str>,
        work: impl FnOnce() -> T,
    ) -> T {
        if !self.is_enabled() {
            return work();
        }
        let label = label();
        let start = Instant::now();
        let result = work();
        self.log_elapsed(&label, category, start);
        result
    }

    pub fn try_measure<T, E>(
        &self,
        label: impl FnOnce() -> String,
        category: Option<&str>,
        work: impl FnOnce() -> Result<T, E>,
    ) -> Result<T, E> {
        if !self.is_enabled() {
            return work();
        }
        let label = label();
        let start = Instant::now();
        let value = work()?;
        self.log_elapsed(&label, category, start);
        Ok(value)
    }

    pub async fn measure_async<T>(
        &self,
        label: impl FnOnce() -> String,
        category: Option<&str>,
        work: impl Future<Output = T>,
    ) -> T {
        if !self.is_enabled() {
            return work.await;
        }
        let label = label();
        let start = Instant::now();
        let result = work.await;
        self.log_elapsed(&label, category, start);
        result
    }

    pub async fn try_measure_async<T, E>(
        &self,
        label: impl FnOnce() -> String,
        category: Option<&str>,
        work: impl Future<Output = Result<T, E>>,
    ) -> Result<T, E> {
        if !self.is_enabled() {
            return work.await;
        }
        let label = label();
        let start = Instant::now();
        let value = work.await?;
        self.log_elapsed(&label, category, start);
        Ok(value)
    }
}
