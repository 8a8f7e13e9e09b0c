//! Log output targets.

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::logging::{LogEntry, LogLevel};

/// Destination for formatted log entries.
pub trait LogSink {
    /// Write one entry. `formatted` is the entry rendered in the logger's format.
    fn write(&self, entry: &LogEntry, formatted: &str);
}

/// Writes to stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrSink;

impl LogSink for StderrSink {
    fn write(&self, _entry: &LogEntry, formatted: &str) {
        eprintln!("{}", formatted);
    }
}

/// Writes to the browser console, picking the console method by level.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

#[cfg(target_arch = "wasm32")]
impl LogSink for ConsoleSink {
    fn write(&self, entry: &LogEntry, formatted: &str) {
        let value = wasm_bindgen::JsValue::from_str(formatted);
        match entry.level {
            LogLevel::Error => web_sys::console::error_1(&value),
            LogLevel::Warn => web_sys::console::warn_1(&value),
            LogLevel::Info => web_sys::console::info_1(&value),
            LogLevel::Debug | LogLevel::Trace => web_sys::console::debug_1(&value),
        }
    }
}

/// Forwards entries as `tracing` events, for hosts that install a subscriber.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn write(&self, entry: &LogEntry, formatted: &str) {
        let component = entry.component.as_str();
        match entry.level {
            LogLevel::Error => tracing::error!(component = component, "{}", formatted),
            LogLevel::Warn => tracing::warn!(component = component, "{}", formatted),
            LogLevel::Info => tracing::info!(component = component, "{}", formatted),
            LogLevel::Debug => tracing::debug!(component = component, "{}", formatted),
            LogLevel::Trace => tracing::trace!(component = component, "{}", formatted),
        }
    }
}

/// Keeps entries in memory. Clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    entries: Rc<RefCell<Vec<(LogEntry, String)>>>,
}

impl MemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// All captured entries.
    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.borrow().iter().map(|(e, _)| e.clone()).collect()
    }

    /// All captured lines as formatted.
    pub fn lines(&self) -> Vec<String> {
        self.entries.borrow().iter().map(|(_, l)| l.clone()).collect()
    }

    /// Most recent entry.
    pub fn last(&self) -> Option<LogEntry> {
        self.entries.borrow().last().map(|(e, _)| e.clone())
    }

    /// Entries at exactly `level`.
    pub fn at_level(&self, level: LogLevel) -> Vec<LogEntry> {
        self.entries
            .borrow()
            .iter()
            .filter(|(e, _)| e.level == level)
            .map(|(e, _)| e.clone())
            .collect()
    }

    /// Drop everything captured so far.
    pub fn clear(&self) {
        self.entries.borrow_mut().clear();
    }
}

impl LogSink for MemorySink {
    fn write(&self, entry: &LogEntry, formatted: &str) {
        self.entries
            .borrow_mut()
            .push((entry.clone(), formatted.to_string()));
    }
}

/// The sink a new logger writes to: the console in the browser, stderr elsewhere.
pub fn default_sink() -> Rc<dyn LogSink> {
    #[cfg(target_arch = "wasm32")]
    {
        Rc::new(ConsoleSink)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Rc::new(StderrSink)
    }
}

/// Output selected by configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogTarget {
    /// [`default_sink`] for the platform.
    #[default]
    Platform,
    /// [`TracingSink`].
    Tracing,
}

impl LogTarget {
    /// Build the sink for this target.
    pub fn sink(self) -> Rc<dyn LogSink> {
        match self {
            LogTarget::Platform => default_sink(),
            LogTarget::Tracing => Rc::new(TracingSink),
        }
    }
}
