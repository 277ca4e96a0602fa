//! Type definitions for the application state.
//!
//! - [`Screen`] - Which screen is currently displayed
//! - [`Dialog`] - Modal dialog on top of the screen

/// Represents which screen is currently active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Screen {
    #[default]
    Dashboard,
    Lesson,
}

/// Blocking modal dialogs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialog {
    /// Yes/no gate before discarding the active lesson.
    ConfirmExit,
    /// A topic was picked with no hearts left.
    NotEnoughHearts,
    /// The lesson was torn down after the last heart was lost.
    OutOfHearts,
}

impl Dialog {
    pub fn title(&self) -> &'static str {
        match self {
            Dialog::ConfirmExit => "Leave lesson?",
            Dialog::NotEnoughHearts => "Not enough hearts",
            Dialog::OutOfHearts => "Out of hearts!",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Dialog::ConfirmExit => "Your progress in this lesson will be lost.",
            Dialog::NotEnoughHearts => {
                "You have no hearts left. Wait for one to refill before starting a lesson."
            }
            Dialog::OutOfHearts => "You ran out of hearts. Hearts refill over time.",
        }
    }

    /// Key hint shown at the bottom of the dialog.
    pub fn hint(&self) -> &'static str {
        match self {
            Dialog::ConfirmExit => "[y] leave   [n] keep going",
            Dialog::NotEnoughHearts | Dialog::OutOfHearts => "[Enter] OK",
        }
    }

    pub fn is_confirmation(&self) -> bool {
        matches!(self, Dialog::ConfirmExit)
    }
}
