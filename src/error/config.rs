//! Configuration errors.

use thiserror::Error;

/// A setting from the environment or command line could not be used.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{key}: cannot parse {value:?} ({reason})")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },

    #[error("{key} is out of range: {message}")]
    OutOfRange { key: String, message: String },

    #[error("missing value for {flag}")]
    MissingArgument { flag: String },

    #[error("unknown argument: {0}")]
    UnknownArgument(String),
}

impl ConfigError {
    pub fn invalid(key: &str, value: &str, reason: impl ToString) -> Self {
        ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn out_of_range(key: &str, message: impl Into<String>) -> Self {
        ConfigError::OutOfRange {
            key: key.to_string(),
            message: message.into(),
        }
    }
}
