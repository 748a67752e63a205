//! Structured logging with view context.

use std::collections::BTreeMap;
use std::fmt;

use kashe_core::{ViewContext, ViewId};
use serde::Serialize;

use crate::sink::LogSink;

/// Log level for structured logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Parse a level name, case-insensitively.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "trace" => Some(Self::Trace),
            "debug" => Some(Self::Debug),
            "info" => Some(Self::Info),
            "warn" | "warning" => Some(Self::Warn),
            "error" => Some(Self::Error),
            _ => None,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Trace => write!(f, "TRACE"),
            Self::Debug => write!(f, "DEBUG"),
            Self::Info => write!(f, "INFO"),
            Self::Warn => write!(f, "WARN"),
            Self::Error => write!(f, "ERROR"),
        }
    }
}

/// A structured log entry.
#[derive(Debug, Clone, Serialize)]
pub struct LogEntry {
    /// Log level.
    pub level: LogLevel,
    /// Log message.
    pub message: String,
    /// View ID for correlation.
    pub view_id: String,
    /// Page name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<String>,
    /// Additional structured fields.
    #[serde(flatten)]
    pub fields: BTreeMap<String, serde_json::Value>,
    /// Microseconds since the view mounted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elapsed_us: Option<u64>,
}

impl LogEntry {
    /// Format as JSON string.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| self.message.clone())
    }

    /// Format as human-readable string.
    pub fn to_human(&self) -> String {
        let mut s = format!("[{}]", self.level);

        if let Some(page) = &self.page {
            s.push_str(&format!(" {}:", page));
        }
        s.push(' ');
        s.push_str(&self.message);

        if let Some(elapsed) = self.elapsed_us {
            s.push_str(&format!(" ({}us)", elapsed));
        }

        if !self.fields.is_empty() {
            s.push_str(" | ");
            let fields: Vec<String> = self
                .fields
                .iter()
                .map(|(k, v)| format!("{}={}", k, v))
                .collect();
            s.push_str(&fields.join(" "));
        }

        s
    }
}

/// Output format for logs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// JSON format (for log aggregation).
    #[default]
    Json,
    /// Human-readable format (for development and the browser console).
    Human,
}

/// Measures time since a view mounted. The browser build has no monotonic
/// clock in `std`, so entries there carry no elapsed time.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone, Copy)]
struct Stopwatch(std::time::Instant);

#[cfg(not(target_arch = "wasm32"))]
impl Stopwatch {
    fn start() -> Self {
        Self(std::time::Instant::now())
    }

    fn elapsed_us(&self) -> Option<u64> {
        Some(self.0.elapsed().as_micros() as u64)
    }
}

#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy)]
struct Stopwatch;

#[cfg(target_arch = "wasm32")]
impl Stopwatch {
    fn start() -> Self {
        Self
    }

    fn elapsed_us(&self) -> Option<u64> {
        None
    }
}

/// Structured logger bound to one mounted view.
///
/// Every entry carries the view id and page name, so interleaved output
/// from several pages can be separated again.
#[derive(Debug, Clone)]
pub struct StructuredLogger {
    view_id: ViewId,
    page: Option<String>,
    stopwatch: Stopwatch,
    min_level: LogLevel,
    format: LogFormat,
    sink: LogSink,
}

impl StructuredLogger {
    /// Create a new logger for a view.
    pub fn new(view_id: ViewId) -> Self {
        Self {
            view_id,
            page: None,
            stopwatch: Stopwatch::start(),
            min_level: LogLevel::Info,
            format: LogFormat::Json,
            sink: LogSink::default(),
        }
    }

    /// Create a logger from a view context, tagged with its page name.
    pub fn for_view(ctx: &ViewContext) -> Self {
        Self::new(ctx.view_id.clone()).with_page(ctx.page())
    }

    /// Set the page name.
    pub fn with_page(mut self, page: impl Into<String>) -> Self {
        self.page = Some(page.into());
        self
    }

    /// Set minimum log level.
    pub fn with_min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    /// Set output format.
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    /// Set the output sink.
    pub fn with_sink(mut self, sink: LogSink) -> Self {
        self.sink = sink;
        self
    }

    /// Log at trace level.
    pub fn trace(&self, message: &str) {
        self.log(LogLevel::Trace, message, BTreeMap::new());
    }

    /// Log at debug level.
    pub fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message, BTreeMap::new());
    }

    /// Log at info level.
    pub fn info(&self, message: &str) {
        self.log(LogLevel::Info, message, BTreeMap::new());
    }

    /// Log at warn level.
    pub fn warn(&self, message: &str) {
        self.log(LogLevel::Warn, message, BTreeMap::new());
    }

    /// Log at error level.
    pub fn error(&self, message: &str) {
        self.log(LogLevel::Error, message, BTreeMap::new());
    }

    /// Log at info level with fields.
    pub fn info_with(&self, message: &str, fields: &[(&str, &dyn fmt::Debug)]) {
        self.log(LogLevel::Info, message, debug_fields(fields));
    }

    /// Log at warn level with fields.
    pub fn warn_with(&self, message: &str, fields: &[(&str, &dyn fmt::Debug)]) {
        self.log(LogLevel::Warn, message, debug_fields(fields));
    }

    fn log(&self, level: LogLevel, message: &str, fields: BTreeMap<String, serde_json::Value>) {
        if level < self.min_level {
            return;
        }

        let entry = LogEntry {
            level,
            message: message.to_string(),
            view_id: self.view_id.to_string(),
            page: self.page.clone(),
            fields,
            elapsed_us: self.stopwatch.elapsed_us(),
        };

        let output = match self.format {
            LogFormat::Json => entry.to_json(),
            LogFormat::Human => entry.to_human(),
        };

        self.sink.write(level, &output);
    }

    /// Get the view ID.
    pub fn view_id(&self) -> &ViewId {
        &self.view_id
    }

    /// Start building an info log entry.
    pub fn info_builder(&self, message: impl Into<String>) -> LogBuilder<'_> {
        LogBuilder::new(self, LogLevel::Info, message)
    }

    /// Start building a debug log entry.
    pub fn debug_builder(&self, message: impl Into<String>) -> LogBuilder<'_> {
        LogBuilder::new(self, LogLevel::Debug, message)
    }

    /// Start building a warn log entry.
    pub fn warn_builder(&self, message: impl Into<String>) -> LogBuilder<'_> {
        LogBuilder::new(self, LogLevel::Warn, message)
    }
}

fn debug_fields(fields: &[(&str, &dyn fmt::Debug)]) -> BTreeMap<String, serde_json::Value> {
    fields
        .iter()
        .map(|(k, v)| (k.to_string(), serde_json::json!(format!("{:?}", v))))
        .collect()
}

/// Builder for log entries with fluent API.
pub struct LogBuilder<'a> {
    logger: &'a StructuredLogger,
    level: LogLevel,
    message: String,
    fields: BTreeMap<String, serde_json::Value>,
}

impl<'a> LogBuilder<'a> {
    /// Create a new log builder.
    pub fn new(logger: &'a StructuredLogger, level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            logger,
            level,
            message: message.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Add a string field.
    pub fn field(mut self, key: &str, value: impl Into<String>) -> Self {
        self.fields
            .insert(key.to_string(), serde_json::json!(value.into()));
        self
    }

    /// Add an optional string field; `None` is written as null.
    pub fn field_opt(mut self, key: &str, value: Option<&str>) -> Self {
        self.fields.insert(key.to_string(), serde_json::json!(value));
        self
    }

    /// Add an integer field.
    pub fn field_u64(mut self, key: &str, value: u64) -> Self {
        self.fields.insert(key.to_string(), serde_json::json!(value));
        self
    }

    /// Add a boolean field.
    pub fn field_bool(mut self, key: &str, value: bool) -> Self {
        self.fields.insert(key.to_string(), serde_json::json!(value));
        self
    }

    /// Add a duration field (in milliseconds).
    pub fn duration_ms(mut self, key: &str, duration: std::time::Duration) -> Self {
        self.fields
            .insert(key.to_string(), serde_json::json!(duration.as_millis() as u64));
        self
    }

    /// Emit the log entry.
    pub fn emit(self) {
        self.logger.log(self.level, &self.message, self.fields);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::MemorySink;
    use kashe_core::Route;

    fn memory_logger() -> (StructuredLogger, MemorySink) {
        let mem = MemorySink::new();
        let logger = StructuredLogger::new(ViewId::from_string("view-test"))
            .with_page("products")
            .with_sink(LogSink::Memory(mem.clone()));
        (logger, mem)
    }

    #[test]
    fn test_json_entry() {
        let (logger, mem) = memory_logger();
        logger
            .info_builder("filter changed")
            .field("category", "transmission")
            .field_u64("visible", 2)
            .emit();

        let lines = mem.lines();
        assert_eq!(lines.len(), 1);
        let value: serde_json::Value = serde_json::from_str(&lines[0]).unwrap();
        assert_eq!(value["level"], "info");
        assert_eq!(value["message"], "filter changed");
        assert_eq!(value["view_id"], "view-test");
        assert_eq!(value["page"], "products");
        assert_eq!(value["category"], "transmission");
        assert_eq!(value["visible"], 2);
    }

    #[test]
    fn test_min_level_filters() {
        let (logger, mem) = memory_logger();
        logger.debug("hidden");
        logger.trace("hidden");
        logger.warn("shown");
        assert_eq!(mem.len(), 1);

        let logger = logger.with_min_level(LogLevel::Trace);
        logger.trace("now shown");
        assert_eq!(mem.len(), 2);
    }

    #[test]
    fn test_human_format() {
        let (logger, mem) = memory_logger();
        let logger = logger.with_format(LogFormat::Human);
        logger
            .info_builder("carousel advanced")
            .field_u64("index", 1)
            .field_bool("autoplay", true)
            .emit();

        let line = &mem.lines()[0];
        assert!(line.starts_with("[INFO] products: carousel advanced"));
        assert!(line.ends_with("| autoplay=true index=1"));
    }

    #[test]
    fn test_writer_sink() {
        let seen = MemorySink::new();
        let captured = seen.clone();
        let logger = StructuredLogger::new(ViewId::generate())
            .with_format(LogFormat::Human)
            .with_sink(LogSink::writer(move |level, line| {
                if level >= LogLevel::Warn {
                    LogSink::Memory(captured.clone()).write(level, line);
                }
            }));

        logger.info("ignored by writer");
        logger.error("kept");
        assert_eq!(seen.len(), 1);
        assert!(seen.lines()[0].contains("kept"));
    }

    #[test]
    fn test_for_view_uses_route_name() {
        let ctx = ViewContext::new(Route::Resources { query: None });
        let mem = MemorySink::new();
        let logger = StructuredLogger::for_view(&ctx).with_sink(LogSink::Memory(mem.clone()));
        logger.info_with("mounted", &[("faq_count", &6)]);

        let value: serde_json::Value = serde_json::from_str(&mem.lines()[0]).unwrap();
        assert_eq!(value["page"], "resources");
        assert_eq!(value["view_id"], ctx.view_id.as_str());
        assert_eq!(value["faq_count"], "6");
    }

    #[test]
    fn test_level_parse() {
        assert_eq!(LogLevel::parse("WARNING"), Some(LogLevel::Warn));
        assert_eq!(LogLevel::parse("debug"), Some(LogLevel::Debug));
        assert_eq!(LogLevel::parse("loud"), None);
    }
}
