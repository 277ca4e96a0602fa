//! Color theme constants for the lingodeck UI
//!
//! Defines the minimal dark color palette used throughout the UI.

use ratatui::style::Color;

use crate::models::TopicColor;

// ============================================================================
// Minimal Dark Color Theme
// ============================================================================

/// Primary border color - dark gray for minimal aesthetic
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Accent color - white for highlights and important elements
pub const COLOR_ACCENT: Color = Color::White;

/// Header text color
pub const COLOR_HEADER: Color = Color::White;

/// Dim text for less important info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Progress bar fill color
pub const COLOR_PROGRESS: Color = Color::Rgb(88, 204, 2);

/// Progress bar background
pub const COLOR_PROGRESS_BG: Color = Color::Rgb(40, 40, 48);

/// Background for the text answer field
pub const COLOR_INPUT_BG: Color = Color::Rgb(20, 20, 30);

// ============================================================================
// Profile Colors
// ============================================================================

pub const COLOR_HEART: Color = Color::Rgb(255, 75, 75);

/// Spent heart slots
pub const COLOR_HEART_EMPTY: Color = Color::DarkGray;

pub const COLOR_XP: Color = Color::Rgb(255, 200, 0);

pub const COLOR_STREAK: Color = Color::Rgb(255, 150, 0);

// ============================================================================
// Feedback Colors
// ============================================================================

pub const COLOR_CORRECT: Color = Color::Rgb(4, 181, 117); // green #04B575

pub const COLOR_INCORRECT: Color = Color::Red;

/// Highlighted answer option
pub const COLOR_SELECTED: Color = Color::Cyan;

// ============================================================================
// Dialog Colors
// ============================================================================

/// Background color for dialog boxes
pub const COLOR_DIALOG_BG: Color = Color::Rgb(10, 15, 35);

/// Map a catalog accent to a terminal color.
pub fn topic_color(color: TopicColor) -> Color {
    match color {
        TopicColor::Green => Color::Rgb(88, 204, 2),
        TopicColor::Yellow => Color::Rgb(255, 200, 0),
        TopicColor::Blue => Color::Rgb(28, 176, 246),
        TopicColor::Purple => Color::Rgb(206, 130, 255),
        TopicColor::Pink => Color::Rgb(255, 134, 208),
    }
}
