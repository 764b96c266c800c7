//! taglog - leveled, taggable console logging
//!
//! Loggers filter messages by severity, prefix them with a timestamp and
//! `#tag` suffixes, and colorize the header by level. Child loggers created
//! with [`Logger::sub`] extend the parent's tags and may override its level.
//!
//! ```no_run
//! use taglog::{create, LoggerConfig};
//!
//! let log = create(LoggerConfig::new().tag("db").level("log"))?;
//! taglog::log!(log, "connected in", 12, "ms");
//!
//! let query = log.sub_tagged("query");
//! taglog::debug!(query, "suppressed at level log");
//! # Ok::<(), taglog::LoggerError>(())
//! ```

#![warn(missing_docs)]

// Public modules
pub mod config;
pub mod error;
pub mod level;
pub mod logger;
pub mod sink;
pub mod types;

// Internal modules
mod format;
mod utils;

// Version information
/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Re-exports for public API
pub use config::{ColorMode, LevelSpec, LoggerConfig, TagSpec};
pub use error::{LoggerError, Result};
pub use level::Level;
pub use logger::{create, Log, Logger, LoggerBuilder};
pub use sink::{ConsoleSink, MemorySink, Record, Sink, Stream};
pub use types::{ErrorRecord, LogValue};
pub use utils::Profiler;

/// Emit at error level: `error!(logger, "failed", ErrorRecord::capture(&err))`
#[macro_export]
macro_rules! error {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $logger.error(&[$($crate::LogValue::from($arg)),*])
    };
}

/// Emit at warn level
#[macro_export]
macro_rules! warn {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $logger.warn(&[$($crate::LogValue::from($arg)),*])
    };
}

/// Emit at log level
#[macro_export]
macro_rules! log {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $logger.log(&[$($crate::LogValue::from($arg)),*])
    };
}

/// Emit at debug level
#[macro_export]
macro_rules! debug {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $logger.debug(&[$($crate::LogValue::from($arg)),*])
    };
}
