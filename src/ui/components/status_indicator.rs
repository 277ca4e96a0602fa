//! Status Indicator Component
//!
//! Renders spinner, success, and error status indicators.
//! Used for lesson loading, completion, and the unavailable state.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::ui::theme::{COLOR_CORRECT, COLOR_DIM, COLOR_INCORRECT, COLOR_XP};

/// Spinner animation frames
const SPINNER_FRAMES: [char; 4] = ['◐', '◓', '◑', '◒'];

/// Status indicator types
#[derive(Debug, Clone)]
pub enum StatusIndicatorType {
    /// Spinning indicator with a message
    Spinner { message: String, frame: usize },
    /// Success indicator with an optional detail line
    Success {
        message: String,
        detail: Option<String>,
    },
    /// Error indicator with an optional hint line
    Error {
        header: String,
        hint: Option<String>,
    },
}

impl StatusIndicatorType {
    pub fn spinner(message: impl Into<String>, frame: usize) -> Self {
        Self::Spinner {
            message: message.into(),
            frame,
        }
    }

    pub fn success(message: impl Into<String>, detail: Option<String>) -> Self {
        Self::Success {
            message: message.into(),
            detail,
        }
    }

    pub fn error(header: impl Into<String>, hint: Option<String>) -> Self {
        Self::Error {
            header: header.into(),
            hint,
        }
    }
}

/// Get the current spinner character based on frame
pub fn get_spinner_char(frame: usize) -> char {
    SPINNER_FRAMES[frame % SPINNER_FRAMES.len()]
}

/// Render a status indicator as centered-friendly lines
pub fn render_status_indicator(indicator: &StatusIndicatorType) -> Vec<Line<'static>> {
    let mut lines: Vec<Line<'static>> = vec![Line::from("")];

    match indicator {
        StatusIndicatorType::Spinner { message, frame } => {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{} ", get_spinner_char(*frame)),
                    Style::default().fg(COLOR_XP),
                ),
                Span::styled(
                    message.clone(),
                    Style::default().fg(COLOR_XP).add_modifier(Modifier::BOLD),
                ),
            ]));
        }

        StatusIndicatorType::Success { message, detail } => {
            lines.push(Line::from(vec![
                Span::styled("\u{25CF} ", Style::default().fg(COLOR_CORRECT)),
                Span::styled(
                    message.clone(),
                    Style::default()
                        .fg(COLOR_CORRECT)
                        .add_modifier(Modifier::BOLD),
                ),
            ]));
            if let Some(detail) = detail {
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(
                    detail.clone(),
                    Style::default().fg(COLOR_XP).add_modifier(Modifier::BOLD),
                )));
            }
        }

        StatusIndicatorType::Error { header, hint } => {
            lines.push(Line::from(vec![
                Span::styled("\u{2717} ", Style::default().fg(COLOR_INCORRECT)),
                Span::styled(
                    header.clone(),
                    Style::default()
                        .fg(COLOR_INCORRECT)
                        .add_modifier(Modifier::BOLD),
                ),
            ]));
            if let Some(hint) = hint {
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(
                    hint.clone(),
                    Style::default().fg(COLOR_DIM),
                )));
            }
        }
    }

    lines
}

/// Calculate the height needed for a status indicator
pub fn calculate_status_height(indicator: &StatusIndicatorType) -> u16 {
    render_status_indicator(indicator).len() as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(lines: &[Line]) -> String {
        lines
            .iter()
            .flat_map(|line| line.spans.iter().map(|span| span.content.to_string()))
            .collect()
    }

    #[test]
    fn test_spinner_frames_cycle() {
        assert_eq!(get_spinner_char(0), '◐');
        assert_eq!(get_spinner_char(3), '◒');
        assert_eq!(get_spinner_char(4), '◐');
    }

    #[test]
    fn test_spinner_renders_message() {
        let lines = render_status_indicator(&StatusIndicatorType::spinner("Loading", 1));
        assert!(text(&lines).contains("◓ Loading"));
    }

    #[test]
    fn test_success_with_detail() {
        let indicator = StatusIndicatorType::success("Done", Some("+15 XP".to_string()));
        let lines = render_status_indicator(&indicator);
        assert!(text(&lines).contains("+15 XP"));
        assert_eq!(calculate_status_height(&indicator), 4);
    }

    #[test]
    fn test_error_without_hint() {
        let indicator = StatusIndicatorType::error("Broken", None);
        assert_eq!(calculate_status_height(&indicator), 2);
        assert!(text(&render_status_indicator(&indicator)).contains("✗ Broken"));
    }
}
