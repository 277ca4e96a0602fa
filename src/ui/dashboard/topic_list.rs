//! Topic list for the dashboard.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::models::TopicConfig;
use crate::state::ProfileState;
use crate::ui::theme::{topic_color, COLOR_ACCENT, COLOR_BORDER, COLOR_CORRECT, COLOR_DIM};

/// Render one bordered row per topic, highlighting `selected`.
pub fn render(
    frame: &mut Frame,
    area: Rect,
    topics: &[TopicConfig],
    selected: usize,
    profile: &ProfileState,
) {
    let lines: Vec<Line> = topics
        .iter()
        .enumerate()
        .map(|(index, topic)| topic_line(topic, index == selected, profile.has_completed(topic.id)))
        .collect();

    let block = Block::default()
        .title(Span::styled(" Topics ", Style::default().fg(COLOR_DIM)))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// A single topic row: cursor, icon, name, level and completion mark.
pub fn topic_line(topic: &TopicConfig, selected: bool, completed: bool) -> Line<'static> {
    let accent = topic_color(topic.color);
    let cursor = if selected { "▸ " } else { "  " };
    let name_style = if selected {
        Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(COLOR_ACCENT)
    };

    let mut spans = vec![
        Span::styled(cursor, Style::default().fg(accent)),
        Span::styled(format!("{} ", topic.icon.glyph()), Style::default().fg(accent)),
        Span::styled(topic.name, name_style),
        Span::styled(format!("  {}", topic.level), Style::default().fg(COLOR_DIM)),
    ];
    if completed {
        spans.push(Span::styled("  ✓", Style::default().fg(COLOR_CORRECT)));
    }
    Line::from(spans)
}
