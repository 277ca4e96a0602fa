//! Application configuration.
//!
//! Use the builder methods to customize behavior, or [`AppConfig::from_env`]
//! to read `GEMINI_API_KEY` and the `LINGODECK_*` variables.
//!
//! ```ignore
//! use lingodeck::config::AppConfig;
//! use std::time::Duration;
//!
//! let config = AppConfig::default()
//!     .with_api_key("test-key")
//!     .with_forced_end_delay(Duration::from_millis(10));
//! ```

use std::time::Duration;

use crate::error::ConfigError;

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_HEART_RECOVERY: Duration = Duration::from_secs(5 * 60);
pub const DEFAULT_FORCED_END_DELAY: Duration = Duration::from_millis(1500);
pub const DEFAULT_COMPLETION_DELAY: Duration = Duration::from_millis(500);
pub const DEFAULT_QUESTION_COUNT: usize = 5;

/// The language being learned and the learner's own language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguagePair {
    pub target: String,
    pub native: String,
}

impl Default for LanguagePair {
    fn default() -> Self {
        Self {
            target: "English".to_string(),
            native: "Arabic".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Gemini API key. Without one the offline provider is used.
    pub api_key: Option<String>,
    pub model: String,
    /// Base URL up to and including the API version segment.
    pub api_base: String,
    /// Force the offline provider even when a key is present.
    pub offline: bool,
    pub heart_recovery_interval: Duration,
    /// Delay between running out of hearts and the lesson being torn down.
    pub forced_end_delay: Duration,
    /// How long the completion banner shows before returning to the dashboard.
    pub completion_delay: Duration,
    /// BCP 47 tag passed to the speech synthesizer.
    pub speech_language: String,
    pub languages: LanguagePair,
    pub question_count: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            offline: false,
            heart_recovery_interval: DEFAULT_HEART_RECOVERY,
            forced_end_delay: DEFAULT_FORCED_END_DELAY,
            completion_delay: DEFAULT_COMPLETION_DELAY,
            speech_language: "en-US".to_string(),
            languages: LanguagePair::default(),
            question_count: DEFAULT_QUESTION_COUNT,
        }
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = base.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_offline(mut self, offline: bool) -> Self {
        self.offline = offline;
        self
    }

    pub fn with_heart_recovery_interval(mut self, interval: Duration) -> Self {
        self.heart_recovery_interval = interval;
        self
    }

    pub fn with_forced_end_delay(mut self, delay: Duration) -> Self {
        self.forced_end_delay = delay;
        self
    }

    pub fn with_completion_delay(mut self, delay: Duration) -> Self {
        self.completion_delay = delay;
        self
    }

    pub fn with_speech_language(mut self, tag: impl Into<String>) -> Self {
        self.speech_language = tag.into();
        self
    }

    pub fn with_languages(mut self, target: impl Into<String>, native: impl Into<String>) -> Self {
        self.languages = LanguagePair {
            target: target.into(),
            native: native.into(),
        };
        self
    }

    /// True when lessons should come from the live content service.
    pub fn uses_live_provider(&self) -> bool {
        !self.offline && self.api_key.is_some()
    }

    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, which returns a variable's value if set.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let mut config = Self::default();

        if let Some(key) = get("GEMINI_API_KEY").or_else(|| get("API_KEY")) {
            config = config.with_api_key(key.trim());
        }
        if let Some(model) = get("LINGODECK_MODEL") {
            config = config.with_model(model.trim());
        }
        if let Some(base) = get("LINGODECK_API_BASE") {
            config = config.with_api_base(base.trim());
        }
        if let Some(value) = get("LINGODECK_HEART_RECOVERY_SECS") {
            let secs = parse_positive("LINGODECK_HEART_RECOVERY_SECS", &value)?;
            config = config.with_heart_recovery_interval(Duration::from_secs(secs));
        }
        if let Some(value) = get("LINGODECK_FORCED_END_MS") {
            let millis = parse_positive("LINGODECK_FORCED_END_MS", &value)?;
            config = config.with_forced_end_delay(Duration::from_millis(millis));
        }
        if let Some(value) = get("LINGODECK_COMPLETION_MS") {
            let millis = parse_positive("LINGODECK_COMPLETION_MS", &value)?;
            config = config.with_completion_delay(Duration::from_millis(millis));
        }
        if let Some(tag) = get("LINGODECK_SPEECH_LANG") {
            config = config.with_speech_language(tag.trim());
        }

        let target = get("LINGODECK_TARGET_LANGUAGE");
        let native = get("LINGODECK_NATIVE_LANGUAGE");
        if target.is_some() || native.is_some() {
            let defaults = LanguagePair::default();
            config = config.with_languages(
                target.unwrap_or(defaults.target),
                native.unwrap_or(defaults.native),
            );
        }

        Ok(config)
    }
}

fn parse_positive(key: &str, value: &str) -> Result<u64, ConfigError> {
    let parsed = value
        .trim()
        .parse::<u64>()
        .map_err(|err| ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
            reason: err.to_string(),
        })?;
    if parsed == 0 {
        return Err(ConfigError::ZeroDuration {
            key: key.to_string(),
        });
    }
    Ok(parsed)
}
