//! Unified error type for lingodeck.

use std::fmt;

use super::category::ErrorCategory;
use super::config::ConfigError;

/// Unified error type.
///
/// Startup failures convert into `DrillError` with `?`, which gives each
/// one a category, an error code for the log and a message for the
/// terminal. Provider errors never get here: the provider recovers from
/// them with the fallback lesson.
#[derive(Debug)]
pub enum DrillError {
    /// Environment configuration was invalid.
    Config(ConfigError),

    /// Filesystem or OS failure.
    System {
        operation: String,
        source: std::io::Error,
    },
}

impl DrillError {
    /// Wrap an IO error with the operation that produced it.
    pub fn system(operation: impl Into<String>, source: std::io::Error) -> Self {
        DrillError::System {
            operation: operation.into(),
            source,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            DrillError::Config(_) => ErrorCategory::Configuration,
            DrillError::System { .. } => ErrorCategory::System,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            DrillError::Config(err) => err.error_code(),
            DrillError::System { .. } => "SYSTEM_IO",
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            DrillError::Config(err) => format!("Invalid configuration: {}", err),
            DrillError::System { operation, source } => {
                format!("Could not {}: {}", operation, source)
            }
        }
    }

    /// What the user can do about it.
    pub fn recovery_hint(&self) -> &'static str {
        self.category().recovery_hint()
    }
}

impl fmt::Display for DrillError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrillError::Config(err) => write!(f, "{}", err),
            DrillError::System { operation, source } => {
                write!(f, "failed to {}: {}", operation, source)
            }
        }
    }
}

impl std::error::Error for DrillError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DrillError::Config(err) => Some(err),
            DrillError::System { source, .. } => Some(source),
        }
    }
}

// ============================================================================
// From implementations
// ============================================================================

impl From<ConfigError> for DrillError {
    fn from(err: ConfigError) -> Self {
        DrillError::Config(err)
    }
}
