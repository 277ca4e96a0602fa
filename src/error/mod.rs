//! Error handling for lingodeck.
//!
//! - **Error Categories**: coarse classification for logging and messaging
//! - **Domain Errors**: [`ProviderError`] for lesson generation, [`ConfigError`]
//!   for environment configuration
//! - **Unified Error Type**: [`DrillError`] for startup failures
//! - **Result Alias**: [`DrillResult<T>`]
//!
//! | Category | Description |
//! |----------|-------------|
//! | Network | Connection, DNS, timeout |
//! | Server | Content service errors (5xx, empty reply) |
//! | Client | Undecodable payloads, rejected requests |
//! | System | OS/filesystem errors |
//! | Configuration | Bad environment values, rejected API key |

mod category;
mod config;
mod drill_error;
mod provider;

pub use category::ErrorCategory;
pub use config::ConfigError;
pub use drill_error::DrillError;
pub use provider::ProviderError;

/// Result alias for fallible lingodeck operations.
pub type DrillResult<T> = Result<T, DrillError>;
