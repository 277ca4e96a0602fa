//! Help command.

use super::version::VERSION;

/// Usage text printed by `--help`.
pub fn help_text() -> String {
    format!(
        "lingodeck {VERSION}
Vocabulary drills in the terminal, with lessons generated by Gemini.

USAGE:
    lingodeck [--offline]

OPTIONS:
    --offline        Use the built-in lesson instead of calling the API
    -h, --help       Print this help
    -V, --version    Print the version

ENVIRONMENT:
    GEMINI_API_KEY                  API key (API_KEY is also read)
    LINGODECK_MODEL                 Model name [default: gemini-2.5-flash]
    LINGODECK_API_BASE              API base URL
    LINGODECK_HEART_RECOVERY_SECS   Seconds per recovered heart [default: 300]
    LINGODECK_FORCED_END_MS         Delay before an out-of-hearts lesson ends [default: 1500]
    LINGODECK_COMPLETION_MS         Completion banner duration [default: 500]
    LINGODECK_SPEECH_LANG           Speech language tag [default: en-US]
    LINGODECK_TARGET_LANGUAGE       Language being learned [default: English]
    LINGODECK_NATIVE_LANGUAGE       Learner's language [default: Arabic]
    LINGODECK_LOG                   Log filter [default: info]

KEYS:
    Dashboard   up/down or j/k move, enter start, q quit
    Lesson      up/down or 1-9 pick, type to answer, enter check/continue,
                ctrl+s listen, esc leave
    Anywhere    ctrl+c quit
"
    )
}

/// Handle the --help command.
pub fn handle_help_command() {
    print!("{}", help_text());
}
