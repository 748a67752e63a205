//! Log output destinations.

use std::fmt;
use std::sync::{Arc, Mutex};

use crate::logging::LogLevel;

/// Callback receiving each rendered log line.
pub type LineWriter = Arc<dyn Fn(LogLevel, &str) + Send + Sync>;

/// Where rendered log lines are written.
#[derive(Clone, Default)]
pub enum LogSink {
    /// Standard error.
    #[default]
    Stderr,
    /// Forward as `tracing` events at the matching level.
    Tracing,
    /// Caller-supplied writer (the browser console, for instance).
    Writer(LineWriter),
    /// Keep lines in memory.
    Memory(MemorySink),
}

impl LogSink {
    /// Build a writer sink from a closure.
    pub fn writer(f: impl Fn(LogLevel, &str) + Send + Sync + 'static) -> Self {
        LogSink::Writer(Arc::new(f))
    }

    /// Write one rendered line.
    pub fn write(&self, level: LogLevel, line: &str) {
        match self {
            LogSink::Stderr => eprintln!("{}", line),
            LogSink::Tracing => match level {
                LogLevel::Trace => tracing::trace!("{}", line),
                LogLevel::Debug => tracing::debug!("{}", line),
                LogLevel::Info => tracing::info!("{}", line),
                LogLevel::Warn => tracing::warn!("{}", line),
                LogLevel::Error => tracing::error!("{}", line),
            },
            LogSink::Writer(f) => f(level, line),
            LogSink::Memory(mem) => mem.push(line),
        }
    }
}

impl fmt::Debug for LogSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogSink::Stderr => write!(f, "Stderr"),
            LogSink::Tracing => write!(f, "Tracing"),
            LogSink::Writer(_) => write!(f, "Writer(..)"),
            LogSink::Memory(mem) => write!(f, "Memory({} lines)", mem.len()),
        }
    }
}

/// Shared in-memory line buffer.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&self, line: &str) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push(line.to_string());
        }
    }

    /// Snapshot of the lines written so far.
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .map(|lines| lines.clone())
            .unwrap_or_default()
    }

    /// Number of lines written so far.
    pub fn len(&self) -> usize {
        self.lines.lock().map(|lines| lines.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use tracing_subscriber::fmt::MakeWriter;

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    struct BufferWriter(Arc<Mutex<Vec<u8>>>);

    impl<'a> MakeWriter<'a> for SharedBuffer {
        type Writer = BufferWriter;

        fn make_writer(&'a self) -> Self::Writer {
            BufferWriter(Arc::clone(&self.0))
        }
    }

    impl io::Write for BufferWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            let mut guard = self
                .0
                .lock()
                .map_err(|_| io::Error::new(io::ErrorKind::Other, "lock poisoned"))?;
            guard.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_memory_sink_keeps_lines() {
        let mem = MemorySink::new();
        let sink = LogSink::Memory(mem.clone());
        sink.write(LogLevel::Info, "first");
        sink.write(LogLevel::Error, "second");

        assert_eq!(mem.lines(), vec!["first", "second"]);
        assert_eq!(format!("{:?}", sink), "Memory(2 lines)");
    }

    #[test]
    fn test_writer_sink_receives_level() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let captured = Arc::clone(&seen);
        let sink = LogSink::writer(move |level, line| {
            captured.lock().unwrap().push((level, line.to_string()));
        });

        sink.write(LogLevel::Warn, "slow timer");

        assert_eq!(
            *seen.lock().unwrap(),
            vec![(LogLevel::Warn, "slow timer".to_string())]
        );
    }

    #[test]
    fn test_tracing_sink_forwards_at_level() {
        let buffer = SharedBuffer::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(buffer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::INFO)
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            LogSink::Tracing.write(LogLevel::Warn, "carousel paused");
            LogSink::Tracing.write(LogLevel::Debug, "filtered out");
        });

        let text = String::from_utf8(buffer.0.lock().unwrap().clone()).unwrap();
        let lines: Vec<&str> = text.lines().filter(|l| !l.trim().is_empty()).collect();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("WARN"));
        assert!(lines[0].contains("carousel paused"));
    }
}
