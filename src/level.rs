//! Severity levels and their symbolic names

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::{LoggerError, Result};

/// Ordered severity; higher values are more verbose.
///
/// A message at level `L` is emitted only when the logger's threshold is `>= L`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Level {
    /// Nothing is emitted
    None = 0,
    /// Failures
    Error = 1,
    /// Recoverable problems
    Warn = 2,
    /// Regular output
    Log = 3,
    /// Diagnostics; the default threshold
    Debug = 4,
    /// Enables profiler output
    Profile = 5,
}

impl Level {
    /// Threshold used when a logger is built without an explicit level
    pub const DEFAULT: Level = Level::Debug;

    /// All levels in ascending order
    pub const ALL: [Level; 6] = [
        Level::None,
        Level::Error,
        Level::Warn,
        Level::Log,
        Level::Debug,
        Level::Profile,
    ];

    /// Map a numeric severity to a level. Anything above 5 saturates to `Profile`.
    pub fn from_numeric(value: u8) -> Self {
        match value {
            0 => Level::None,
            1 => Level::Error,
            2 => Level::Warn,
            3 => Level::Log,
            4 => Level::Debug,
            _ => Level::Profile,
        }
    }

    /// Numeric severity, 0 to 5
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Symbolic name, as accepted by [`FromStr`]
    pub fn as_str(self) -> &'static str {
        match self {
            Level::None => "none",
            Level::Error => "error",
            Level::Warn => "warn",
            Level::Log => "log",
            Level::Debug => "debug",
            Level::Profile => "profile",
        }
    }

    /// Label printed in the line header
    pub(crate) fn label(self) -> &'static str {
        match self {
            Level::None => "",
            Level::Error => "ERROR",
            Level::Warn => "WARNING",
            Level::Log => "LOG",
            Level::Debug => "DEBUG",
            Level::Profile => "PROFILE",
        }
    }

    /// Whether a logger with this threshold emits messages at `level`
    pub fn allows(self, level: Level) -> bool {
        self >= level
    }
}

impl Default for Level {
    fn default() -> Self {
        Level::DEFAULT
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self> {
        Level::ALL
            .into_iter()
            .find(|level| level.as_str() == s)
            .ok_or_else(|| LoggerError::invalid_level(s))
    }
}

impl From<u8> for Level {
    fn from(value: u8) -> Self {
        Level::from_numeric(value)
    }
}
