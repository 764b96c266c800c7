use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};
use chrono::{DateTime, Local};

use crate::format;
use crate::level::Level;
use crate::sink::{Sink, Stream};

/// One-shot timing marker bound to a start label.
///
/// Created by [`Logger::profiler`](crate::Logger::profiler). When the logger's
/// threshold is below [`Level::Profile`] the profiler is disabled and every
/// method is free.
#[derive(Clone)]
pub struct Profiler {
    active: Option<ActiveProfile>,
}

/// State captured when an enabled profiler starts
#[derive(Clone)]
struct ActiveProfile {
    start_label: String,
    started_at: DateTime<Local>,
    started: Instant,
    tags: Arc<[String]>,
    colorize: bool,
    sink: Arc<dyn Sink>,
}

impl Profiler {
    /// A profiler that never captures or prints anything
    pub fn disabled() -> Self {
        Self { active: None }
    }

    pub(crate) fn start(
        start_label: impl Into<String>,
        tags: Arc<[String]>,
        colorize: bool,
        sink: Arc<dyn Sink>,
    ) -> Self {
        Self {
            active: Some(ActiveProfile {
                start_label: start_label.into(),
                started_at: Local::now(),
                started: Instant::now(),
                tags,
                colorize,
                sink,
            }),
        }
    }

    /// Whether `finish` will print anything
    pub fn is_enabled(&self) -> bool {
        self.active.is_some()
    }

    /// Label given to [`Logger::profiler`](crate::Logger::profiler), if enabled
    pub fn start_label(&self) -> Option<&str> {
        self.active.as_ref().map(|a| a.start_label.as_str())
    }

    /// Time since the profiler was created
    pub fn elapsed(&self) -> Option<Duration> {
        self.active.as_ref().map(|a| a.started.elapsed())
    }

    /// Emit `[<ts.mmm>] PROFILE #tags #profile:<start> <end>` and consume the profiler.
    ///
    /// The timestamp is the moment the profiler was created, not the moment
    /// `finish` runs; use [`elapsed`](Profiler::elapsed) for the duration.
    pub fn finish(self, end_label: impl fmt::Display) {
        let Some(active) = self.active else {
            return;
        };
        let marker = format!(
            "[{}] {}{} #profile:{}",
            format::timestamp_millis(&active.started_at),
            Level::Profile.label(),
            format::tag_suffix(&active.tags),
            active.start_label,
        );
        let line = format!(
            "{} {}",
            format::paint(Level::Profile, marker, active.colorize),
            end_label
        );
        active.sink.write_line(Stream::Stdout, &line);
    }
}

impl fmt::Debug for Profiler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.active {
            Some(active) => f
                .debug_struct("Profiler")
                .field("start_label", &active.start_label)
                .field("started_at", &active.started_at)
                .field("tags", &active.tags)
                .finish(),
            None => f.write_str("Profiler(disabled)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::MemorySink;
    use std::thread;

    fn tags(list: &[&str]) -> Arc<[String]> {
        list.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_disabled_profiler() {
        let profiler = Profiler::disabled();
        assert!(!profiler.is_enabled());
        assert!(profiler.elapsed().is_none());
        assert!(profiler.start_label().is_none());
        profiler.finish("end");
    }

    #[test]
    fn test_finish_emits_one_line() {
        let sink = Arc::new(MemorySink::new());
        let profiler = Profiler::start("load", tags(&["db"]), false, sink.clone());
        assert_eq!(profiler.start_label(), Some("load"));

        profiler.finish("done");

        let records = sink.records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].stream, Stream::Stdout);
        assert!(records[0].line.ends_with("] PROFILE #db #profile:load done"));
    }

    #[test]
    fn test_timestamp_has_millis() {
        let sink = Arc::new(MemorySink::new());
        Profiler::start("a", tags(&[]), false, sink.clone()).finish("b");

        let line = &sink.lines()[0];
        // "[YYYY-MM-DD HH:MM:SS.mmm]"
        assert_eq!(line.find(']'), Some(24));
        assert_eq!(&line[20..21], ".");
    }

    #[test]
    fn test_elapsed_grows() {
        let sink = Arc::new(MemorySink::new());
        let profiler = Profiler::start("sleep", tags(&[]), false, sink);
        thread::sleep(Duration::from_millis(20));
        assert!(profiler.elapsed().unwrap() >= Duration::from_millis(20));
    }

    #[test]
    fn test_debug_format() {
        assert_eq!(format!("{:?}", Profiler::disabled()), "Profiler(disabled)");
    }
}
