//! Configuration read from the real process environment.
//!
//! These tests mutate process-wide state, so they run serially.

use std::time::Duration;

use lingodeck::config::{AppConfig, DEFAULT_MODEL};
use lingodeck::error::ConfigError;
use serial_test::serial;

const VARS: &[&str] = &[
    "GEMINI_API_KEY",
    "API_KEY",
    "LINGODECK_MODEL",
    "LINGODECK_API_BASE",
    "LINGODECK_HEART_RECOVERY_SECS",
    "LINGODECK_FORCED_END_MS",
    "LINGODECK_COMPLETION_MS",
    "LINGODECK_SPEECH_LANG",
    "LINGODECK_TARGET_LANGUAGE",
    "LINGODECK_NATIVE_LANGUAGE",
];

fn clear_env() {
    for var in VARS {
        std::env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_defaults_without_environment() {
    clear_env();
    let config = AppConfig::from_env().unwrap();
    assert!(config.api_key.is_none());
    assert!(!config.uses_live_provider());
    assert_eq!(config.model, DEFAULT_MODEL);
    assert_eq!(config.heart_recovery_interval, Duration::from_secs(300));
    assert_eq!(config.forced_end_delay, Duration::from_millis(1500));
    assert_eq!(config.completion_delay, Duration::from_millis(500));
}

#[test]
#[serial]
fn test_reads_key_and_overrides() {
    clear_env();
    std::env::set_var("GEMINI_API_KEY", " secret ");
    std::env::set_var("LINGODECK_MODEL", "gemini-2.5-pro");
    std::env::set_var("LINGODECK_HEART_RECOVERY_SECS", "60");

    let config = AppConfig::from_env().unwrap();
    clear_env();

    assert_eq!(config.api_key.as_deref(), Some("secret"));
    assert!(config.uses_live_provider());
    assert_eq!(config.model, "gemini-2.5-pro");
    assert_eq!(config.heart_recovery_interval, Duration::from_secs(60));
    assert!(!config.with_offline(true).uses_live_provider());
}

#[test]
#[serial]
fn test_legacy_key_variable() {
    clear_env();
    std::env::set_var("API_KEY", "legacy");
    let config = AppConfig::from_env().unwrap();
    clear_env();
    assert_eq!(config.api_key.as_deref(), Some("legacy"));
}

#[test]
#[serial]
fn test_invalid_duration_is_rejected() {
    clear_env();
    std::env::set_var("LINGODECK_FORCED_END_MS", "soon");
    let err = AppConfig::from_env().unwrap_err();
    clear_env();
    assert!(matches!(err, ConfigError::InvalidValue { .. }));
    assert_eq!(err.error_code(), "CONFIG_INVALID");
}

#[test]
#[serial]
fn test_zero_duration_is_rejected() {
    clear_env();
    std::env::set_var("LINGODECK_COMPLETION_MS", "0");
    let err = AppConfig::from_env().unwrap_err();
    clear_env();
    assert!(matches!(err, ConfigError::ZeroDuration { .. }));
}
