//! Dashboard UI module
//!
//! The home screen: learner stats and the topic catalog.

pub mod footer;
pub mod header;
pub mod topic_list;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::Line,
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::models::catalog;
use crate::ui::layout::{centered_column, LayoutContext};
use crate::ui::theme::COLOR_DIM;

// ============================================================================
// Main Dashboard Rendering
// ============================================================================

/// Render the complete dashboard view
///
/// # Layout
/// ```text
/// +------------------------------------------+
/// | lingodeck            ♥♥♥♥♥ 5  ★ 0 XP  🔥 1|
/// +------------------------------------------+
/// | ╭ Topics ──────────────────────────────╮ |
/// | │▸ 👋 التحيات (Greetings)  Beginner  ✓  │ |
/// | │  ☕ الطعام (Food)  Beginner           │ |
/// | ╰──────────────────────────────────────╯ |
/// +------------------------------------------+
/// | hints                    lessons: gemini |
/// +------------------------------------------+
/// ```
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let ctx = LayoutContext::from_area(area);
    let column = centered_column(area, ctx.content_width());
    let topics = catalog();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(topics.len() as u16 + 2),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(column);

    header::render(frame, chunks[0], app.profile());
    topic_list::render(frame, chunks[2], topics, app.dashboard_index, app.profile());
    render_footer(frame, chunks[4], app);
}

fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let hint = footer::get_footer_hint(app.profile().can_start_lesson());
    let style = Style::default().fg(COLOR_DIM);
    frame.render_widget(Paragraph::new(Line::styled(hint, style)), area);
    frame.render_widget(
        Paragraph::new(Line::styled(
            footer::provider_label(app.provider_name()),
            style,
        ))
        .alignment(Alignment::Right),
        area,
    );
}
