//! Shared helpers for FoundationKit applications.
//! v0.1.0: Safe indexing, weak proxies, named errors, logging channels and
//! the debug logging facade.

pub mod config;
pub mod debug_log;
pub mod error;
pub mod identity;
pub mod logging;
pub mod notification;
pub mod safe_index;
pub mod weak_proxy;

pub use config::{DebugLogConfig, KitConfig, LogConfig};
pub use debug_log::DebugLog;
pub use error::{ErrorMessage, KitError};
pub use logging::channels::{Channel, LoggerRegistry};
pub use logging::{LogLevel, LogRecord, LogSink, Logger, MemorySink, TracingSink};
pub use notification::NotificationName;
pub use safe_index::SafeIndex;
pub use weak_proxy::WeakProxy;

/// Subsystem used by the debug facade when no host identifier is available
pub const DEFAULT_DEBUG_SUBSYSTEM: &str = "App";

/// Category used by the debug facade when callers pass none
pub const DEFAULT_DEBUG_CATEGORY: &str = "Debug";

/// Subsystem used by the channel registry when no host identifier is available
pub const DEFAULT_CHANNEL_SUBSYSTEM: &str = "com.zion.Doodlefy";

/// Environment variable overriding the host identifier
pub const SUBSYSTEM_ENV_VAR: &str = "FOUNDATION_KIT_SUBSYSTEM";
