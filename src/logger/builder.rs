use std::sync::Arc;
use crate::{
    config::{ColorMode, LoggerConfig},
    error::Result,
    level::Level,
    sink::{ConsoleSink, Sink},
};

use super::handle::Logger;

/// Builder for constructing a [`Logger`]
pub struct LoggerBuilder {
    config: LoggerConfig,
    color: ColorMode,
    sink: Option<Arc<dyn Sink>>,
}

impl LoggerBuilder {
    /// Create a new builder instance
    pub fn new() -> Self {
        Self {
            config: LoggerConfig::default(),
            color: ColorMode::default(),
            sink: None,
        }
    }

    /// Set tags and level
    pub fn with_config(mut self, config: LoggerConfig) -> Self {
        self.config = config;
        self
    }

    /// Choose when headers are colorized
    pub fn with_color(mut self, color: ColorMode) -> Self {
        self.color = color;
        self
    }

    /// Send lines somewhere other than the console
    pub fn with_sink(mut self, sink: Arc<dyn Sink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Build the logger, failing on an unknown level name
    pub fn build(self) -> Result<Logger> {
        let level = self.config.resolve_level()?.unwrap_or(Level::DEFAULT);
        let tags: Arc<[String]> = self.config.tag_list().into();
        let sink = self.sink.unwrap_or_else(|| Arc::new(ConsoleSink));

        tracing::trace!(tags = ?tags, %level, color = ?self.color, "created logger");

        Ok(Logger {
            tags,
            level,
            color: self.color,
            sink,
        })
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
