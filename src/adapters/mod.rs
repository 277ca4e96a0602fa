//! Concrete implementations of the traits in `crate::traits`.
//!
//! - [`ReqwestHttpClient`] - HTTP client using reqwest
//! - [`SystemSpeech`] - speech through `say` / `espeak-ng`
//!
//! The [`mock`] submodule provides test doubles.

pub mod mock;
pub mod reqwest_http;
pub mod system_speech;

pub use mock::{MockContentProvider, MockHttpClient, RecordingSpeech};
pub use reqwest_http::ReqwestHttpClient;
pub use system_speech::SystemSpeech;
