//! Configuration errors.

use thiserror::Error;

/// Raised while reading configuration from the environment.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A variable was set but could not be parsed.
    #[error("{key}={value:?} is invalid: {reason}")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },

    /// A duration variable parsed to zero.
    #[error("{key} must be greater than zero")]
    ZeroDuration { key: String },
}

impl ConfigError {
    pub fn error_code(&self) -> &'static str {
        match self {
            ConfigError::InvalidValue { .. } => "CONFIG_INVALID",
            ConfigError::ZeroDuration { .. } => "CONFIG_ZERO_DURATION",
        }
    }
}
