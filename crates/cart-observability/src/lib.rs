//! Structured diagnostics for the shopping cart widget.
//!
//! This crate provides:
//! - `StructuredLogger` - Leveled, structured logging tagged with a component
//! - `LogBuilder` - Fluent construction of entries with typed fields
//! - `LogSink` - Output targets (stderr, browser console, `tracing`, memory)

mod logging;
mod sink;

pub use logging::*;
pub use sink::*;
