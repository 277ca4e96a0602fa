//! Mock implementations and canned provider payloads.

pub use lingodeck::adapters::mock::{
    MockContentProvider, MockHttpClient, MockResponse, RecordingSpeech,
};
pub use lingodeck::traits::{Headers, HttpClient, Response};

use serde_json::{json, Value};

/// A Gemini `generateContent` reply whose first candidate carries `text`.
pub fn gemini_envelope(text: &str) -> Value {
    json!({
        "candidates": [{
            "content": {
                "parts": [{ "text": text }],
                "role": "model"
            },
            "finishReason": "STOP"
        }]
    })
}

/// The question array the model is asked to produce, serialized as text.
pub fn wire_questions_text() -> String {
    json!([
        {
            "type": "MULTIPLE_CHOICE",
            "prompt": "How do you say \"Thank you\"?",
            "options": ["شكراً", "نعم", "لا", "مرحباً"],
            "correctAnswer": "شكراً",
            "explanation": "Thank you تعني شكراً."
        },
        {
            "type": "TRANSLATE_AR_TO_EN",
            "prompt": "صباح الخير",
            "correctAnswer": "Good morning",
            "acceptableAnswers": ["morning"],
            "explanation": ""
        },
        {
            "type": "FILL_IN_BLANK",
            "prompt": "Good ___, how are you?",
            "options": ["morning", "table"],
            "correctAnswer": "morning",
            "explanation": "A greeting."
        }
    ])
    .to_string()
}
