//! Speech playback through the platform's command-line synthesizer.

use std::process::{Command, Stdio};

use crate::traits::SpeechSynthesizer;

/// Spawns `say` on macOS and `espeak-ng` elsewhere.
///
/// The child is reaped on a detached thread so the event loop never waits
/// on audio. Missing binaries are logged once per call at debug level.
#[derive(Debug, Clone)]
pub struct SystemSpeech {
    program: String,
}

impl SystemSpeech {
    /// Use the default synthesizer for this platform.
    pub fn detect() -> Self {
        let program = if cfg!(target_os = "macos") {
            "say"
        } else {
            "espeak-ng"
        };
        Self::with_program(program)
    }

    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn build_command(program: &str, text: &str, language: &str) -> Command {
        let mut command = Command::new(program);
        if program.ends_with("espeak-ng") || program.ends_with("espeak") {
            command.arg("-v").arg(language.to_ascii_lowercase());
        }
        command
            .arg(text)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        command
    }
}

impl SpeechSynthesizer for SystemSpeech {
    fn speak(&self, text: &str, language: &str) {
        let program = &self.program;
        match Self::build_command(program, text, language).spawn() {
            Ok(mut child) => {
                std::thread::spawn(move || {
                    let _ = child.wait();
                });
            }
            Err(err) => {
                tracing::debug!(program = %program, error = %err, "speech synthesizer unavailable");
            }
        }
    }
}
