//! Observability for the Kashe Energy website.
//!
//! This crate provides:
//! - `StructuredLogger` - Structured logging with view context
//! - `LogSink` - Where rendered log lines go (stderr, `tracing`, a callback, memory)

mod logging;
mod sink;

pub use logging::*;
pub use sink::*;

// Re-export ViewId from kashe-core for convenience
pub use kashe_core::ViewId;
