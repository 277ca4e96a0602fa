//! Dashboard header component
//!
//! Renders the app title (left) and the learner's hearts, xp and streak (right).

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::state::{ProfileState, MAX_HEARTS};
use crate::ui::theme::{
    COLOR_DIM, COLOR_HEADER, COLOR_HEART, COLOR_HEART_EMPTY, COLOR_STREAK, COLOR_XP,
};

const TITLE: &str = "lingodeck";

/// Render the dashboard header into a two-row area.
pub fn render(frame: &mut Frame, area: Rect, profile: &ProfileState) {
    if area.height == 0 {
        return;
    }

    let title = Line::from(vec![
        Span::styled(
            TITLE,
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("  pick a topic", Style::default().fg(COLOR_DIM)),
    ]);
    frame.render_widget(Paragraph::new(title), area);
    frame.render_widget(
        Paragraph::new(stats_line(profile)).alignment(Alignment::Right),
        area,
    );
}

/// Hearts as filled/empty glyphs followed by xp and streak counters.
pub fn stats_line(profile: &ProfileState) -> Line<'static> {
    let mut spans = hearts_spans(profile.hearts());
    spans.push(Span::raw("   "));
    spans.push(Span::styled(
        format!("★ {} XP", profile.xp()),
        Style::default().fg(COLOR_XP).add_modifier(Modifier::BOLD),
    ));
    spans.push(Span::raw("   "));
    spans.push(Span::styled(
        format!("🔥 {}", profile.streak()),
        Style::default().fg(COLOR_STREAK),
    ));
    Line::from(spans)
}

/// One glyph per heart slot, filled for the hearts left.
pub fn hearts_spans(hearts: u8) -> Vec<Span<'static>> {
    let filled = hearts.min(MAX_HEARTS) as usize;
    vec![
        Span::styled("♥".repeat(filled), Style::default().fg(COLOR_HEART)),
        Span::styled(
            "♡".repeat(MAX_HEARTS as usize - filled),
            Style::default().fg(COLOR_HEART_EMPTY),
        ),
        Span::styled(format!(" {}", hearts), Style::default().fg(COLOR_HEART)),
    ]
}
