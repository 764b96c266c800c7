//! Logger factory and handles

mod builder;
mod handle;

pub use builder::LoggerBuilder;
pub use handle::Logger;

use crate::{
    config::LoggerConfig,
    error::Result,
    types::LogValue,
    utils::Profiler,
};

/// Build a console logger from `config`.
///
/// Fails only when `config.level` names an unknown level.
pub fn create(config: LoggerConfig) -> Result<Logger> {
    LoggerBuilder::new().with_config(config).build()
}

/// The operations every logger handle offers
pub trait Log: Send + Sync {
    /// Emit at error level; an error-like last argument is expanded
    fn error(&self, args: &[LogValue]);
    /// Emit at warn level
    fn warn(&self, args: &[LogValue]);
    /// Emit at log level
    fn log(&self, args: &[LogValue]);
    /// Emit at debug level
    fn debug(&self, args: &[LogValue]);
    /// Start a profiler, disabled below the profile level
    fn profiler(&self, start_label: &str) -> Profiler;

    /// Derive a child handle with extra tags and an optional new threshold
    fn sub(&self, config: LoggerConfig) -> Result<Self>
    where
        Self: Sized;
}

impl Log for Logger {
    fn error(&self, args: &[LogValue]) {
        Logger::error(self, args)
    }

    fn warn(&self, args: &[LogValue]) {
        Logger::warn(self, args)
    }

    fn log(&self, args: &[LogValue]) {
        Logger::log(self, args)
    }

    fn debug(&self, args: &[LogValue]) {
        Logger::debug(self, args)
    }

    fn profiler(&self, start_label: &str) -> Profiler {
        Logger::profiler(self, start_label)
    }

    fn sub(&self, config: LoggerConfig) -> Result<Self> {
        Logger::sub(self, config)
    }
}
