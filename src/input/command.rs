//! Command definitions for keyboard input handling.
//!
//! The [`Command`] enum represents every user action, decoupling key
//! bindings from their effects.

/// Represents all possible commands that can be triggered by keyboard input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    // =========================================================================
    // Global Commands
    // =========================================================================
    /// Quit the application (Ctrl+C, q on the dashboard)
    Quit,
    /// Key was consumed but does nothing
    Noop,

    // =========================================================================
    // Dashboard
    // =========================================================================
    TopicUp,
    TopicDown,
    /// Start the highlighted topic (Enter)
    StartSelectedTopic,

    // =========================================================================
    // Lesson
    // =========================================================================
    OptionUp,
    OptionDown,
    /// Choose the option at a zero-based index (1-9)
    ChooseOption(usize),
    /// Type a character into the answer
    InsertChar(char),
    /// Delete the last character of the answer (Backspace)
    DeleteChar,
    CheckAnswer,
    /// Leave the feedback sheet (Enter after a check)
    Continue,
    /// Ask to leave the lesson (Esc)
    RequestExit,
    /// Read the prompt aloud (Ctrl+S)
    Speak,

    // =========================================================================
    // Dialogs
    // =========================================================================
    ConfirmDialog,
    CancelDialog,
    DismissDialog,
}

impl Command {
    /// Returns true if this command should trigger a redraw.
    pub fn marks_dirty(&self) -> bool {
        !matches!(self, Command::Noop | Command::Speak)
    }

    pub fn is_quit(&self) -> bool {
        matches!(self, Command::Quit)
    }

    /// Returns a human-readable description of the command.
    pub fn description(&self) -> &'static str {
        match self {
            Command::Quit => "Quit application",
            Command::Noop => "No operation",
            Command::TopicUp => "Previous topic",
            Command::TopicDown => "Next topic",
            Command::StartSelectedTopic => "Start lesson",
            Command::OptionUp => "Previous option",
            Command::OptionDown => "Next option",
            Command::ChooseOption(_) => "Choose option",
            Command::InsertChar(_) => "Type character",
            Command::DeleteChar => "Delete character",
            Command::CheckAnswer => "Check answer",
            Command::Continue => "Continue",
            Command::RequestExit => "Leave lesson",
            Command::Speak => "Read prompt aloud",
            Command::ConfirmDialog => "Confirm",
            Command::CancelDialog => "Cancel",
            Command::DismissDialog => "Dismiss",
        }
    }
}
