//! The fallback lesson and the provider that only serves it.

use async_trait::async_trait;

use super::{ContentProvider, LessonRequest};
use crate::models::Question;

pub const FALLBACK_QUESTION_ID: &str = "fallback-1";

/// Single multiple-choice question served whenever generation fails.
pub fn fallback_lesson() -> Vec<Question> {
    vec![Question::multiple_choice(
        FALLBACK_QUESTION_ID,
        "How do you say \"Hello\" in Arabic?",
        vec![
            "مرحباً".to_string(),
            "مع السلامة".to_string(),
            "شكراً".to_string(),
            "نعم".to_string(),
        ],
        "مرحباً",
    )
    .with_explanation("Hello تعني مرحباً.")]
}

/// Provider used when no API key is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineProvider;

#[async_trait]
impl ContentProvider for OfflineProvider {
    async fn generate_lesson(&self, request: &LessonRequest) -> Vec<Question> {
        tracing::debug!(topic = %request.topic, "serving fallback lesson offline");
        fallback_lesson()
    }

    fn name(&self) -> &'static str {
        "offline"
    }
}
