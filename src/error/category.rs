//! Error category classification.
//!
//! Categories give every failure a coarse bucket for log lines and a
//! recovery hint for the terminal.

use std::fmt;

/// High-level categorization of errors for handling decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Connection, DNS and timeout failures talking to the content service.
    Network,

    /// The content service answered with a 5xx or an unusable body.
    Server,

    /// Bugs or payloads we cannot make sense of.
    Client,

    /// Filesystem and OS failures (log file, speech binary).
    System,

    /// Invalid environment or configuration values.
    Configuration,
}

impl ErrorCategory {
    /// Short label used in log lines.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "network",
            ErrorCategory::Server => "server",
            ErrorCategory::Client => "client",
            ErrorCategory::System => "system",
            ErrorCategory::Configuration => "configuration",
        }
    }

    /// Suggested next step, printed under startup errors.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "Check your internet connection and try again",
            ErrorCategory::Server => "The lesson service may be busy. Try again later",
            ErrorCategory::Client => "This may be a bug. Please report it if it keeps happening",
            ErrorCategory::System => "Check file permissions and available disk space",
            ErrorCategory::Configuration => "Check your LINGODECK_* environment variables",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_display_matches_label() {
        assert_eq!(ErrorCategory::Network.to_string(), "network");
        assert_eq!(ErrorCategory::Configuration.to_string(), "configuration");
    }

    #[test]
    fn test_every_category_has_a_hint() {
        for category in [
            ErrorCategory::Network,
            ErrorCategory::Server,
            ErrorCategory::Client,
            ErrorCategory::System,
            ErrorCategory::Configuration,
        ] {
            assert!(!category.recovery_hint().is_empty());
        }
    }
}
