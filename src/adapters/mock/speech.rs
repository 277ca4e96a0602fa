//! Speech synthesizer that records instead of speaking.

use std::sync::{Arc, Mutex};

use crate::traits::SpeechSynthesizer;

#[derive(Debug, Clone, Default)]
pub struct RecordingSpeech {
    spoken: Arc<Mutex<Vec<(String, String)>>>,
}

impl RecordingSpeech {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every `(text, language)` pair passed to [`SpeechSynthesizer::speak`].
    pub fn spoken(&self) -> Vec<(String, String)> {
        self.spoken
            .lock()
            .map(|spoken| spoken.clone())
            .unwrap_or_default()
    }
}

impl SpeechSynthesizer for RecordingSpeech {
    fn speak(&self, text: &str, language: &str) {
        if let Ok(mut spoken) = self.spoken.lock() {
            spoken.push((text.to_string(), language.to_string()));
        }
    }
}
