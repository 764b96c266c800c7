use std::fmt;
use std::sync::Arc;
use chrono::Local;

use crate::{
    config::{ColorMode, LoggerConfig, TagSpec},
    error::Result,
    format,
    level::Level,
    sink::{Sink, Stream},
    types::LogValue,
    utils::Profiler,
};

use super::builder::LoggerBuilder;

/// Immutable logger handle.
///
/// Cloning is cheap: tags and sink are shared. Deriving a child with
/// [`sub`](Logger::sub) never touches the parent.
#[derive(Clone)]
pub struct Logger {
    pub(super) tags: Arc<[String]>,
    pub(super) level: Level,
    pub(super) color: ColorMode,
    pub(super) sink: Arc<dyn Sink>,
}

impl Logger {
    /// Start building a logger
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// Tags in the order they are printed
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Resolved severity threshold
    pub fn level(&self) -> Level {
        self.level
    }

    /// Color mode inherited by sub-loggers
    pub fn color_mode(&self) -> ColorMode {
        self.color
    }

    /// Whether messages at `level` would be emitted
    pub fn enabled(&self, level: Level) -> bool {
        level != Level::None && self.level.allows(level)
    }

    /// Print to stderr. An error-like last argument is expanded with its stack.
    pub fn error(&self, args: &[LogValue]) {
        if self.enabled(Level::Error) {
            self.emit(Level::Error, format::error_args(args));
        }
    }

    /// Print to stdout at warn level
    pub fn warn(&self, args: &[LogValue]) {
        self.emit_plain(Level::Warn, args);
    }

    /// Print to stdout at log level
    pub fn log(&self, args: &[LogValue]) {
        self.emit_plain(Level::Log, args);
    }

    /// Print to stdout at debug level
    pub fn debug(&self, args: &[LogValue]) {
        self.emit_plain(Level::Debug, args);
    }

    /// Derive a child logger.
    ///
    /// Tags from `config` are appended to ours; its level, when set, replaces ours.
    pub fn sub(&self, config: LoggerConfig) -> Result<Logger> {
        let level = config.resolve_level()?.unwrap_or(self.level);
        let extra = config.tag_list();
        let tags = if extra.is_empty() {
            self.tags.clone()
        } else {
            self.tags.iter().cloned().chain(extra).collect()
        };

        tracing::trace!(tags = ?tags, %level, "derived sub-logger");

        Ok(Logger {
            tags,
            level,
            color: self.color,
            sink: self.sink.clone(),
        })
    }

    /// Derive a child logger that only adds tags
    pub fn sub_tagged(&self, tag: impl Into<TagSpec>) -> Logger {
        let tags: Arc<[String]> = self
            .tags
            .iter()
            .cloned()
            .chain(tag.into().into_vec())
            .collect();
        Logger {
            tags,
            level: self.level,
            color: self.color,
            sink: self.sink.clone(),
        }
    }

    /// Start a profiler. Below [`Level::Profile`] this returns a disabled one.
    pub fn profiler(&self, start_label: impl Into<String>) -> Profiler {
        if !self.enabled(Level::Profile) {
            return Profiler::disabled();
        }
        Profiler::start(
            start_label,
            self.tags.clone(),
            self.colorize(Stream::Stdout),
            self.sink.clone(),
        )
    }

    fn emit_plain(&self, level: Level, args: &[LogValue]) {
        if self.enabled(level) {
            self.emit(level, args.iter().map(ToString::to_string));
        }
    }

    fn emit<I>(&self, level: Level, args: I)
    where
        I: IntoIterator<Item = String>,
    {
        let stream = stream_for(level);
        let stamp = format::timestamp(&Local::now());
        let header = format::header(level, &stamp, &self.tags, self.colorize(stream));
        self.sink.write_line(stream, &format::line(header, args));
    }

    fn colorize(&self, stream: Stream) -> bool {
        match self.color {
            ColorMode::Never => false,
            ColorMode::Always => true,
            // NO_COLOR / CLICOLOR still apply in auto mode
            ColorMode::Auto => {
                self.sink.supports_color(stream)
                    && colored::control::SHOULD_COLORIZE.should_colorize()
            }
        }
    }
}

fn stream_for(level: Level) -> Stream {
    match level {
        Level::Error => Stream::Stderr,
        _ => Stream::Stdout,
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("tags", &self.tags)
            .field("level", &self.level)
            .field("color", &self.color)
            .finish_non_exhaustive()
    }
}
