//! Trait abstractions for dependency injection and testability.
//!
//! - [`HttpClient`] - outbound HTTP used by the content provider
//! - [`SpeechSynthesizer`] - fire-and-forget prompt playback

pub mod http;
pub mod speech;

pub use http::{Headers, HttpClient, HttpError, Response};
pub use speech::SpeechSynthesizer;
