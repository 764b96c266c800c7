//! Construction errors

use thiserror::Error;

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, LoggerError>;

/// Errors raised while building a logger.
///
/// Emitting never fails; these only surface from construction paths.
#[derive(Debug, Error)]
pub enum LoggerError {
    /// A symbolic severity name did not match any known level
    #[error("There is no log level \"{name}\"")]
    InvalidLevelName {
        /// The rejected name
        name: String,
    },

    /// The JSON configuration document could not be parsed
    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),
}

impl LoggerError {
    pub(crate) fn invalid_level(name: impl Into<String>) -> Self {
        let name = name.into();
        tracing::debug!(level = %name, "rejected unknown log level name");
        LoggerError::InvalidLevelName { name }
    }

    /// Whether this error comes from an unknown level name
    pub fn is_invalid_level(&self) -> bool {
        matches!(self, LoggerError::InvalidLevelName { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = LoggerError::invalid_level("bogus");
        assert_eq!(error.to_string(), "There is no log level \"bogus\"");
        assert!(error.is_invalid_level());
    }

    #[test]
    fn test_config_error_conversion() {
        let parse: std::result::Result<serde_json::Value, _> = serde_json::from_str("{");
        let error: LoggerError = parse.unwrap_err().into();
        assert!(!error.is_invalid_level());
        assert!(error.to_string().starts_with("Configuration error:"));
    }
}
