//! Centralized logging channels for FoundationKit applications
//!
//! Every channel is created up front and bound to the same subsystem.
//! Callers pick a channel instead of building their own loggers.

use super::{LogSink, Logger, TracingSink};
use crate::identity;
use crate::DEFAULT_CHANNEL_SUBSYSTEM;
use std::sync::{Arc, OnceLock};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    App,
    Ui,
    Data,
    Rendering,
    FileOps,
    Export,
    Canvas,
    Brush,
    Performance,
}

impl Channel {
    pub const ALL: [Channel; 9] = [
        Channel::App,
        Channel::Ui,
        Channel::Data,
        Channel::Rendering,
        Channel::FileOps,
        Channel::Export,
        Channel::Canvas,
        Channel::Brush,
        Channel::Performance,
    ];

    /// Category name written on every record of this channel
    pub fn category(&self) -> &'static str {
        match self {
            Channel::App => "App",
            Channel::Ui => "UI",
            Channel::Data => "Data",
            Channel::Rendering => "Rendering",
            Channel::FileOps => "FileOps",
            Channel::Export => "Export",
            Channel::Canvas => "Canvas",
            Channel::Brush => "Brush",
            Channel::Performance => "Performance",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Channel::App => "General app logging",
            Channel::Ui => "UI and view-related logging",
            Channel::Data => "Data and persistence logging",
            Channel::Rendering => "Rendering and graphics logging",
            Channel::FileOps => "File operations logging",
            Channel::Export => "Export operations (GIF, LivePhoto, etc.)",
            Channel::Canvas => "Canvas and drawing operations",
            Channel::Brush => "Brush engine logging",
            Channel::Performance => "Performance monitoring",
        }
    }

    pub fn from_category(category: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.category() == category)
    }

    fn slot(&self) -> usize {
        *self as usize
    }
}

/// One eagerly created logger per `Channel`
#[derive(Debug, Clone)]
pub struct LoggerRegistry {
    subsystem: String,
    loggers: [Logger; 9],
}

impl LoggerRegistry {
    pub fn new(subsystem: impl Into<String>, sink: Arc<dyn LogSink>) -> Self {
        let subsystem = subsystem.into();
        let loggers = Channel::ALL.map(|c| Logger::new(&subsystem, c.category(), sink.clone()));
        Self { subsystem, loggers }
    }

    /// Process-wide registry, created on first reference
    pub fn shared() -> &'static LoggerRegistry {
        static SHARED: OnceLock<LoggerRegistry> = OnceLock::new();
        SHARED.get_or_init(|| {
            LoggerRegistry::new(
                identity::host_identifier_or(DEFAULT_CHANNEL_SUBSYSTEM),
                Arc::new(TracingSink),
            )
        })
    }

    pub fn subsystem(&self) -> &str {
        &self.subsystem
    }

    pub fn get(&self, channel: Channel) -> &Logger {
        &self.loggers[channel.slot()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Channel, &Logger)> {
        Channel::ALL.into_iter().zip(self.loggers.iter())
    }

    pub fn app(&self) -> &Logger {
        self.get(Channel::App)
    }

    pub fn ui(&self) -> &Logger {
        self.get(Channel::Ui)
    }

    pub fn data(&self) -> &Logger {
        self.get(Channel::Data)
    }

    pub fn rendering(&self) -> &Logger {
        self.get(Channel::Rendering)
    }

    pub fn file_ops(&self) -> &Logger {
        self.get(Channel::FileOps)
    }

    pub fn export(&self) -> &Logger {
        self.get(Channel::Export)
    }

    pub fn canvas(&self) -> &Logger {
        self.get(Channel::Canvas)
    }

    pub fn brush(&self) -> &Logger {
        self.get(Channel::Brush)
    }

    pub fn performance(&self) -> &Logger {
        self.get(Channel::Performance)
    }
}
