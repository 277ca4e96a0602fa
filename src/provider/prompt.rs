//! Prompt text and response schema for lesson generation.

use serde_json::{json, Value};

use super::LessonRequest;
use crate::config::LanguagePair;
use crate::models::QuestionKind;

/// Instruction text sent to the model.
pub fn build_prompt(request: &LessonRequest, languages: &LanguagePair, count: usize) -> String {
    let target = &languages.target;
    let native = &languages.native;
    format!(
        "Create a dynamic {target} lesson for a {native} speaker.\n\
         Topic: {topic}\n\
         Level: {level}\n\
         \n\
         Generate {count} distinct questions.\n\
         Requirements:\n\
         1. Mix the question types: {forwards} (a {target} sentence to translate into {native}), \
         {backwards} (a {native} sentence to translate into {target}), {choice} and {blank}.\n\
         2. Keep each prompt clear. For translations the prompt is only the source sentence.\n\
         3. {choice} and {blank} questions have exactly 4 options, one of which is the correctAnswer.\n\
         4. The explanation MUST be written in {native}.\n\
         5. Use acceptableAnswers for common variations (for example \"I am\" and \"I'm\").\n\
         Return a valid JSON array only.",
        topic = request.topic,
        level = request.level,
        forwards = QuestionKind::TranslateForwards.as_wire(),
        backwards = QuestionKind::TranslateBackwards.as_wire(),
        choice = QuestionKind::MultipleChoice.as_wire(),
        blank = QuestionKind::FillInBlank.as_wire(),
    )
}

/// Structured-output schema describing an array of wire questions.
pub fn response_schema() -> Value {
    let kinds: Vec<&str> = [
        QuestionKind::MultipleChoice,
        QuestionKind::TranslateForwards,
        QuestionKind::TranslateBackwards,
        QuestionKind::FillInBlank,
    ]
    .iter()
    .map(QuestionKind::as_wire)
    .collect();

    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "type": { "type": "STRING", "enum": kinds },
                "prompt": { "type": "STRING" },
                "options": { "type": "ARRAY", "items": { "type": "STRING" } },
                "correctAnswer": { "type": "STRING" },
                "acceptableAnswers": { "type": "ARRAY", "items": { "type": "STRING" } },
                "explanation": { "type": "STRING" }
            },
            "required": ["type", "prompt", "correctAnswer", "explanation"]
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Level;

    #[test]
    fn test_prompt_mentions_topic_level_and_languages() {
        let request = LessonRequest::new("الطعام (Food)", Level::Beginner);
        let prompt = build_prompt(&request, &LanguagePair::default(), 5);

        assert!(prompt.contains("Topic: الطعام (Food)"));
        assert!(prompt.contains("Level: Beginner"));
        assert!(prompt.contains("Generate 5 distinct questions"));
        assert!(prompt.contains("English lesson for a Arabic speaker"));
        assert!(prompt.contains("MUST be written in Arabic"));
        assert!(prompt.contains("TRANSLATE_FORWARDS"));
    }

    #[test]
    fn test_schema_requires_core_fields() {
        let schema = response_schema();
        assert_eq!(schema["type"], "ARRAY");
        let required = schema["items"]["required"].as_array().unwrap();
        assert!(required.contains(&json!("correctAnswer")));
        assert_eq!(
            schema["items"]["properties"]["type"]["enum"]
                .as_array()
                .unwrap()
                .len(),
            4
        );
    }
}
