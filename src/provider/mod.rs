//! Lesson content providers.
//!
//! A [`ContentProvider`] turns a topic and level into an ordered list of
//! questions. Providers never fail from the caller's point of view: anything
//! that goes wrong is logged and replaced with [`fallback_lesson`]. An empty
//! list is a legitimate (if useless) answer and is passed through as-is.

pub mod fallback;
pub mod gemini;
pub mod prompt;

pub use fallback::{fallback_lesson, OfflineProvider, FALLBACK_QUESTION_ID};
pub use gemini::{parse_questions, GeminiProvider};

use async_trait::async_trait;
use std::sync::Arc;

use crate::adapters::ReqwestHttpClient;
use crate::config::AppConfig;
use crate::models::{Level, Question, TopicConfig};

/// What to generate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonRequest {
    pub topic: String,
    pub level: Level,
}

impl LessonRequest {
    pub fn new(topic: impl Into<String>, level: Level) -> Self {
        Self {
            topic: topic.into(),
            level,
        }
    }

    pub fn for_topic(topic: &TopicConfig) -> Self {
        Self::new(topic.name, topic.level)
    }
}

#[async_trait]
pub trait ContentProvider: Send + Sync {
    /// Produce the questions for one lesson. Must not fail.
    async fn generate_lesson(&self, request: &LessonRequest) -> Vec<Question>;

    /// Short name for logs and the dashboard footer.
    fn name(&self) -> &'static str;
}

/// Pick the live provider when an API key is configured, else the offline one.
pub fn build_provider(config: &AppConfig) -> Arc<dyn ContentProvider> {
    match (&config.api_key, config.uses_live_provider()) {
        (Some(key), true) => Arc::new(GeminiProvider::new(
            Arc::new(ReqwestHttpClient::new()),
            key.clone(),
            config,
        )),
        _ => {
            tracing::info!("no API key configured, lessons come from the offline provider");
            Arc::new(OfflineProvider)
        }
    }
}
