//! Text-to-speech abstraction.

/// Fire-and-forget speech playback.
///
/// Implementations must return promptly and swallow their own failures;
/// callers never learn whether anything was spoken.
pub trait SpeechSynthesizer: Send + Sync {
    /// Speak `text` using the voice for `language` (a BCP 47 tag such as `en-US`).
    fn speak(&self, text: &str, language: &str);
}
