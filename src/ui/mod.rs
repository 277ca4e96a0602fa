//! UI rendering for lingodeck
//!
//! - Dashboard: learner stats and the topic list
//! - Lesson: progress, question, answer area and feedback
//! - Dialogs drawn over either screen
//!
//! Render functions size themselves with `LayoutContext` so the layout
//! holds up in narrow terminals.

pub mod components;
mod dashboard;
mod dialogs;
mod layout;
mod lesson;
mod theme;

pub use layout::{breakpoints, centered_column, LayoutContext};
pub use theme::{
    topic_color, COLOR_ACCENT, COLOR_BORDER, COLOR_CORRECT, COLOR_DIM, COLOR_HEADER,
    COLOR_HEART, COLOR_INCORRECT, COLOR_XP,
};

use ratatui::Frame;

use crate::app::{App, Screen};

// ============================================================================
// Main UI Rendering
// ============================================================================

/// Render the UI based on current screen
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    match app.screen {
        Screen::Dashboard => dashboard::render(frame, area, app),
        Screen::Lesson => lesson::render(frame, area, app),
    }

    if let Some(dialog) = app.dialog {
        dialogs::render_dialog(frame, area, dialog);
    }
}
