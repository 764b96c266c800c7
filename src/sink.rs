//! Where formatted lines end up

use std::io::{self, IsTerminal, Write};
use parking_lot::Mutex;

/// Standard stream a line is written to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stream {
    /// Warn, log, debug and profile lines
    Stdout,
    /// Error lines
    Stderr,
}

/// Destination for formatted log lines.
///
/// Implementations must not fail; write errors are dropped.
pub trait Sink: Send + Sync {
    /// Write one formatted line to `stream`
    fn write_line(&self, stream: Stream, line: &str);

    /// Whether escape codes would render on `stream`
    fn supports_color(&self, _stream: Stream) -> bool {
        false
    }
}

/// Writes to the process's standard output and error streams
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

impl Sink for ConsoleSink {
    fn write_line(&self, stream: Stream, line: &str) {
        let result = match stream {
            Stream::Stdout => writeln!(io::stdout().lock(), "{}", line),
            Stream::Stderr => writeln!(io::stderr().lock(), "{}", line),
        };
        if let Err(err) = result {
            tracing::warn!(?stream, error = %err, "failed to write log line");
        }
    }

    fn supports_color(&self, stream: Stream) -> bool {
        match stream {
            Stream::Stdout => io::stdout().is_terminal(),
            Stream::Stderr => io::stderr().is_terminal(),
        }
    }
}

/// A captured line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Stream the line was meant for
    pub stream: Stream,
    /// Formatted line without trailing newline
    pub line: String,
}

/// Keeps lines in memory instead of printing them
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Mutex<Vec<Record>>,
}

impl MemorySink {
    /// Empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything captured so far
    pub fn records(&self) -> Vec<Record> {
        self.records.lock().clone()
    }

    /// Captured lines, regardless of stream
    pub fn lines(&self) -> Vec<String> {
        self.records.lock().iter().map(|r| r.line.clone()).collect()
    }

    /// Drain captured records
    pub fn take(&self) -> Vec<Record> {
        std::mem::take(&mut *self.records.lock())
    }

    /// Discard captured records
    pub fn clear(&self) {
        self.records.lock().clear();
    }

    /// Number of captured records
    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    /// Whether nothing has been captured
    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }
}

impl Sink for MemorySink {
    fn write_line(&self, stream: Stream, line: &str) {
        self.records.lock().push(Record {
            stream,
            line: line.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_sink_capture() {
        let sink = MemorySink::new();
        assert!(sink.is_empty());

        sink.write_line(Stream::Stdout, "one");
        sink.write_line(Stream::Stderr, "two");

        assert_eq!(sink.len(), 2);
        assert_eq!(sink.lines(), vec!["one", "two"]);
        assert_eq!(sink.records()[1].stream, Stream::Stderr);
        assert!(!sink.supports_color(Stream::Stdout));
    }

    #[test]
    fn test_memory_sink_take_and_clear() {
        let sink = MemorySink::new();
        sink.write_line(Stream::Stdout, "a");
        assert_eq!(sink.take().len(), 1);
        assert!(sink.is_empty());

        sink.write_line(Stream::Stdout, "b");
        sink.clear();
        assert!(sink.is_empty());
    }

    #[test]
    fn test_console_sink_does_not_panic() {
        ConsoleSink.write_line(Stream::Stdout, "console sink test line");
    }
}
