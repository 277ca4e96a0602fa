//! Mock implementations for testing.
//!
//! - [`MockHttpClient`] - HTTP client with configurable responses
//! - [`MockContentProvider`] - scripted lessons, optionally never answering
//! - [`RecordingSpeech`] - records speech requests

pub mod http;
pub mod provider;
pub mod speech;

pub use http::{MockHttpClient, MockResponse, RecordedRequest};
pub use provider::MockContentProvider;
pub use speech::RecordingSpeech;
