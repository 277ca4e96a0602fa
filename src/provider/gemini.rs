//! Gemini `generateContent` provider.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

use super::fallback::fallback_lesson;
use super::prompt::{build_prompt, response_schema};
use super::{ContentProvider, LessonRequest};
use crate::config::{AppConfig, LanguagePair};
use crate::error::ProviderError;
use crate::models::{Question, WireQuestion};
use crate::traits::{Headers, HttpClient};

const ERROR_BODY_PREVIEW: usize = 200;

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

impl GenerateContentResponse {
    fn into_text(self) -> Option<String> {
        self.candidates
            .into_iter()
            .next()?
            .content?
            .parts
            .into_iter()
            .next()?
            .text
            .filter(|text| !text.trim().is_empty())
    }
}

/// Generates lessons with a single structured-output call per topic.
pub struct GeminiProvider {
    http: Arc<dyn HttpClient>,
    api_key: String,
    model: String,
    api_base: String,
    languages: LanguagePair,
    question_count: usize,
}

impl GeminiProvider {
    pub fn new(http: Arc<dyn HttpClient>, api_key: String, config: &AppConfig) -> Self {
        Self {
            http,
            api_key,
            model: config.model.clone(),
            api_base: config.api_base.trim_end_matches('/').to_string(),
            languages: config.languages.clone(),
            question_count: config.question_count,
        }
    }

    pub fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.api_base, self.model)
    }

    fn request_body(&self, request: &LessonRequest) -> String {
        let prompt = build_prompt(request, &self.languages, self.question_count);
        json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": response_schema()
            }
        })
        .to_string()
    }

    /// One generation attempt, surfacing every failure.
    pub async fn fetch_questions(
        &self,
        request: &LessonRequest,
    ) -> Result<Vec<Question>, ProviderError> {
        let mut headers = Headers::new();
        headers.insert("content-type".to_string(), "application/json".to_string());
        headers.insert("x-goog-api-key".to_string(), self.api_key.clone());

        let response = self
            .http
            .post(&self.endpoint(), &self.request_body(request), &headers)
            .await?;

        if !response.is_success() {
            let message: String = response.text_lossy().chars().take(ERROR_BODY_PREVIEW).collect();
            return Err(ProviderError::Status {
                status: response.status,
                message,
            });
        }

        let envelope: GenerateContentResponse = response
            .json()
            .map_err(|e| ProviderError::Decode(e.to_string()))?;
        let text = envelope.into_text().ok_or(ProviderError::EmptyCandidate)?;

        parse_questions(&text)
    }
}

#[async_trait]
impl ContentProvider for GeminiProvider {
    async fn generate_lesson(&self, request: &LessonRequest) -> Vec<Question> {
        match self.fetch_questions(request).await {
            Ok(questions) => {
                tracing::info!(
                    topic = %request.topic,
                    level = %request.level,
                    count = questions.len(),
                    "lesson generated"
                );
                questions
            }
            Err(err) => {
                tracing::warn!(
                    topic = %request.topic,
                    code = err.error_code(),
                    category = %err.category(),
                    hint = err.category().recovery_hint(),
                    error = %err,
                    "lesson generation failed, serving fallback"
                );
                fallback_lesson()
            }
        }
    }

    fn name(&self) -> &'static str {
        "gemini"
    }
}

/// Decode the model's JSON array and stamp fresh ids `q-<unix millis>-<index>`.
pub fn parse_questions(text: &str) -> Result<Vec<Question>, ProviderError> {
    let wire: Vec<WireQuestion> =
        serde_json::from_str(text).map_err(|e| ProviderError::Decode(e.to_string()))?;
    let stamp = chrono::Utc::now().timestamp_millis();

    wire.into_iter()
        .enumerate()
        .map(|(index, question)| {
            validate(index, &question)?;
            Ok(question.into_question(format!("q-{}-{}", stamp, index)))
        })
        .collect()
}

fn validate(index: usize, question: &WireQuestion) -> Result<(), ProviderError> {
    let reason = if question.prompt.trim().is_empty() {
        "prompt is empty"
    } else if question.correct_answer.trim().is_empty() {
        "correctAnswer is empty"
    } else {
        return Ok(());
    };
    Err(ProviderError::Schema {
        index,
        reason: reason.to_string(),
    })
}
