//! Quiz question types.
//!
//! [`Question`] is the in-memory form: a tagged body keyed by kind, each
//! variant carrying only what it needs. [`WireQuestion`] is the flat JSON
//! shape the content service returns; it converts into `Question` once the
//! provider has assigned an id.

use serde::{Deserialize, Serialize};

/// Discriminant of a question, also its wire `type` tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QuestionKind {
    MultipleChoice,
    /// Prompt in the language being learned, answer in the learner's own.
    #[serde(alias = "TRANSLATE_EN_TO_AR")]
    TranslateForwards,
    /// Prompt in the learner's own language, answer in the one being learned.
    #[serde(alias = "TRANSLATE_AR_TO_EN")]
    TranslateBackwards,
    FillInBlank,
}

impl QuestionKind {
    pub fn as_wire(&self) -> &'static str {
        match self {
            QuestionKind::MultipleChoice => "MULTIPLE_CHOICE",
            QuestionKind::TranslateForwards => "TRANSLATE_FORWARDS",
            QuestionKind::TranslateBackwards => "TRANSLATE_BACKWARDS",
            QuestionKind::FillInBlank => "FILL_IN_BLANK",
        }
    }

    /// Label shown above the prompt.
    pub fn instruction(&self) -> &'static str {
        match self {
            QuestionKind::MultipleChoice => "Choose the correct answer",
            QuestionKind::TranslateForwards | QuestionKind::TranslateBackwards => {
                "Translate this sentence"
            }
            QuestionKind::FillInBlank => "Fill in the blank",
        }
    }

    pub fn is_choice(&self) -> bool {
        matches!(self, QuestionKind::MultipleChoice | QuestionKind::FillInBlank)
    }
}

/// Kind-specific payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionBody {
    MultipleChoice { options: Vec<String> },
    FillInBlank { options: Vec<String> },
    TranslateForwards { acceptable_answers: Vec<String> },
    TranslateBackwards { acceptable_answers: Vec<String> },
}

/// One quiz item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub id: String,
    pub prompt: String,
    pub correct_answer: String,
    pub explanation: Option<String>,
    pub body: QuestionBody,
}

impl Question {
    pub fn multiple_choice(
        id: impl Into<String>,
        prompt: impl Into<String>,
        options: Vec<String>,
        correct_answer: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            prompt: prompt.into(),
            correct_answer: correct_answer.into(),
            explanation: None,
            body: QuestionBody::MultipleChoice { options },
        }
    }

    pub fn fill_in_blank(
        id: impl Into<String>,
        prompt: impl Into<String>,
        options: Vec<String>,
        correct_answer: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            prompt: prompt.into(),
            correct_answer: correct_answer.into(),
            explanation: None,
            body: QuestionBody::FillInBlank { options },
        }
    }

    pub fn translate_forwards(
        id: impl Into<String>,
        prompt: impl Into<String>,
        correct_answer: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            prompt: prompt.into(),
            correct_answer: correct_answer.into(),
            explanation: None,
            body: QuestionBody::TranslateForwards {
                acceptable_answers: Vec::new(),
            },
        }
    }

    pub fn translate_backwards(
        id: impl Into<String>,
        prompt: impl Into<String>,
        correct_answer: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            prompt: prompt.into(),
            correct_answer: correct_answer.into(),
            explanation: None,
            body: QuestionBody::TranslateBackwards {
                acceptable_answers: Vec::new(),
            },
        }
    }

    pub fn with_explanation(mut self, explanation: impl Into<String>) -> Self {
        self.explanation = Some(explanation.into());
        self
    }

    /// Add accepted variants. Ignored for choice kinds.
    pub fn with_acceptable_answers<I, S>(mut self, answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if let QuestionBody::TranslateForwards { acceptable_answers }
        | QuestionBody::TranslateBackwards { acceptable_answers } = &mut self.body
        {
            acceptable_answers.extend(answers.into_iter().map(Into::into));
        }
        self
    }

    pub fn kind(&self) -> QuestionKind {
        match self.body {
            QuestionBody::MultipleChoice { .. } => QuestionKind::MultipleChoice,
            QuestionBody::FillInBlank { .. } => QuestionKind::FillInBlank,
            QuestionBody::TranslateForwards { .. } => QuestionKind::TranslateForwards,
            QuestionBody::TranslateBackwards { .. } => QuestionKind::TranslateBackwards,
        }
    }

    /// Options for choice kinds; empty for translations.
    pub fn options(&self) -> &[String] {
        match &self.body {
            QuestionBody::MultipleChoice { options } | QuestionBody::FillInBlank { options } => {
                options
            }
            _ => &[],
        }
    }

    pub fn acceptable_answers(&self) -> &[String] {
        match &self.body {
            QuestionBody::TranslateForwards { acceptable_answers }
            | QuestionBody::TranslateBackwards { acceptable_answers } => acceptable_answers,
            _ => &[],
        }
    }

    /// True when the learner picks from a list.
    ///
    /// A choice question that arrived without options is answered by typing.
    pub fn presents_options(&self) -> bool {
        !self.options().is_empty()
    }

    /// Prompts written in the language being learned can be read aloud.
    pub fn is_speakable(&self) -> bool {
        !matches!(self.body, QuestionBody::TranslateBackwards { .. })
    }

    /// Judge an answer.
    ///
    /// Choice kinds compare exactly. Translations compare after trimming and
    /// lower-casing, against the canonical answer and every accepted variant.
    pub fn accepts(&self, answer: &str) -> bool {
        if self.kind().is_choice() {
            return answer == self.correct_answer;
        }
        let answer = normalize_answer(answer);
        answer == normalize_answer(&self.correct_answer)
            || self
                .acceptable_answers()
                .iter()
                .any(|candidate| normalize_answer(candidate) == answer)
    }
}

/// Trim and lower-case free-text input for comparison.
pub fn normalize_answer(text: &str) -> String {
    text.trim().to_lowercase()
}

// ============================================================================
// Wire format
// ============================================================================

/// Flat question record as returned by the content service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireQuestion {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub kind: QuestionKind,
    pub prompt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    pub correct_answer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acceptable_answers: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

impl WireQuestion {
    /// Convert under a freshly assigned id, dropping fields the kind ignores.
    pub fn into_question(self, id: String) -> Question {
        let options = self.options.unwrap_or_default();
        let acceptable_answers = self.acceptable_answers.unwrap_or_default();
        let body = match self.kind {
            QuestionKind::MultipleChoice => QuestionBody::MultipleChoice { options },
            QuestionKind::FillInBlank => QuestionBody::FillInBlank { options },
            QuestionKind::TranslateForwards => {
                QuestionBody::TranslateForwards { acceptable_answers }
            }
            QuestionKind::TranslateBackwards => {
                QuestionBody::TranslateBackwards { acceptable_answers }
            }
        };
        Question {
            id,
            prompt: self.prompt,
            correct_answer: self.correct_answer,
            explanation: self.explanation.filter(|text| !text.trim().is_empty()),
            body,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_choice_requires_exact_match() {
        let q = Question::multiple_choice("q1", "Pick", options(&["Hello", "Bye"]), "Hello");
        assert!(q.accepts("Hello"));
        assert!(!q.accepts("hello"));
        assert!(!q.accepts(" Hello "));
    }

    #[test]
    fn test_translation_is_trimmed_and_case_insensitive() {
        let q = Question::translate_backwards("q1", "أنا جائع", "I'm hungry")
            .with_acceptable_answers(["i am hungry"]);
        assert!(q.accepts(" I'm hungry "));
        assert!(q.accepts("I AM HUNGRY"));
        assert!(!q.accepts("I was hungry"));
    }

    #[test]
    fn test_acceptable_answers_ignored_for_choice() {
        let q = Question::fill_in_blank("q1", "I ___ tea", options(&["drink", "eat"]), "drink")
            .with_acceptable_answers(["sip"]);
        assert!(q.acceptable_answers().is_empty());
        assert!(!q.accepts("sip"));
    }

    #[test]
    fn test_choice_without_options_degrades_to_typing() {
        let q = Question::multiple_choice("q1", "Say hi", Vec::new(), "Hi");
        assert!(!q.presents_options());
        assert!(q.accepts("Hi"));
    }

    #[test]
    fn test_speakable_kinds() {
        assert!(Question::multiple_choice("a", "p", options(&["x"]), "x").is_speakable());
        assert!(Question::fill_in_blank("b", "p", options(&["x"]), "x").is_speakable());
        assert!(Question::translate_forwards("c", "Good morning", "صباح الخير").is_speakable());
        assert!(!Question::translate_backwards("d", "صباح الخير", "Good morning").is_speakable());
    }

    #[test]
    fn test_wire_question_parses_legacy_tags() {
        let json = r#"{
            "type": "TRANSLATE_EN_TO_AR",
            "prompt": "Thank you",
            "correctAnswer": "شكراً",
            "acceptableAnswers": ["شكرا"],
            "explanation": "Thank you تعني شكراً"
        }"#;
        let wire: WireQuestion = serde_json::from_str(json).unwrap();
        assert_eq!(wire.kind, QuestionKind::TranslateForwards);

        let question = wire.into_question("q-1-0".to_string());
        assert_eq!(question.id, "q-1-0");
        assert_eq!(question.acceptable_answers(), &["شكرا".to_string()]);
        assert!(question.options().is_empty());
    }

    #[test]
    fn test_wire_question_drops_blank_explanation_and_stray_options() {
        let json = r#"{
            "type": "TRANSLATE_BACKWARDS",
            "prompt": "مرحبا",
            "options": ["Hi", "Bye"],
            "correctAnswer": "Hello",
            "explanation": "  "
        }"#;
        let question: Question = serde_json::from_str::<WireQuestion>(json)
            .unwrap()
            .into_question("x".to_string());
        assert_eq!(question.kind(), QuestionKind::TranslateBackwards);
        assert!(question.options().is_empty());
        assert!(question.explanation.is_none());
    }

    #[test]
    fn test_unknown_wire_type_is_rejected() {
        let json = r#"{"type": "ESSAY", "prompt": "p", "correctAnswer": "a"}"#;
        assert!(serde_json::from_str::<WireQuestion>(json).is_err());
    }

    #[test]
    fn test_kind_wire_names_round_trip_through_serde() {
        let tag = serde_json::to_string(&QuestionKind::FillInBlank).unwrap();
        assert_eq!(tag, format!("\"{}\"", QuestionKind::FillInBlank.as_wire()));
    }
}
