//! Event Sink Implementations
//!
//! Provides concrete implementations of BuildEventSink:
//! - ConsoleEventSink: diagnostics on stderr, progress through `tracing`
//! - JsonEventSink: NDJSON output for CI/automation

mod console;
mod json;

pub use console::ConsoleEventSink;
pub use json::JsonEventSink;
