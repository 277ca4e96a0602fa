//! Errors raised while generating lesson content.
//!
//! These never reach the lesson screen: the provider logs them and swaps in
//! the fallback lesson. They exist so the log says exactly what went wrong.

use thiserror::Error;

use crate::traits::HttpError;

use super::category::ErrorCategory;

/// Failure modes of a single lesson generation call.
#[derive(Debug, Clone, Error)]
pub enum ProviderError {
    /// The request never produced an HTTP response.
    #[error("transport failure: {0}")]
    Transport(#[from] HttpError),

    /// The service answered with a non-2xx status.
    #[error("content service returned status {status}: {message}")]
    Status { status: u16, message: String },

    /// The envelope parsed but carried no candidate text.
    #[error("content service response had no candidate text")]
    EmptyCandidate,

    /// The envelope or the candidate text was not valid JSON of the expected shape.
    #[error("could not decode lesson payload: {0}")]
    Decode(String),

    /// A decoded question failed loose validation.
    #[error("question {index} is unusable: {reason}")]
    Schema { index: usize, reason: String },
}

impl ProviderError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ProviderError::Transport(_) => ErrorCategory::Network,
            ProviderError::Status { status, .. } if *status >= 500 => ErrorCategory::Server,
            ProviderError::Status { status: 401 | 403, .. } => ErrorCategory::Configuration,
            ProviderError::Status { .. } => ErrorCategory::Client,
            ProviderError::EmptyCandidate => ErrorCategory::Server,
            ProviderError::Decode(_) | ProviderError::Schema { .. } => ErrorCategory::Client,
        }
    }

    /// Short code for log lines.
    pub fn error_code(&self) -> &'static str {
        match self {
            ProviderError::Transport(_) => "PROVIDER_TRANSPORT",
            ProviderError::Status { .. } => "PROVIDER_STATUS",
            ProviderError::EmptyCandidate => "PROVIDER_EMPTY",
            ProviderError::Decode(_) => "PROVIDER_DECODE",
            ProviderError::Schema { .. } => "PROVIDER_SCHEMA",
        }
    }
}
