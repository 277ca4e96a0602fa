//! Lesson screen rendering
//!
//! The body depends on the session phase: a spinner while questions load,
//! an error when none arrived, the question with its answer area while
//! answering, a feedback sheet after a check, and a banner once complete.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, Paragraph, Wrap},
    Frame,
};

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::app::App;
use crate::models::Question;
use crate::state::{Feedback, LessonSession, SessionPhase, LESSON_XP_AWARD};
use crate::ui::components::{render_status_indicator, StatusIndicatorType};
use crate::ui::dashboard::header::hearts_spans;
use crate::ui::layout::{centered_column, LayoutContext};
use crate::ui::theme::{
    COLOR_ACCENT, COLOR_BORDER, COLOR_CORRECT, COLOR_DIM, COLOR_INCORRECT, COLOR_INPUT_BG,
    COLOR_PROGRESS, COLOR_PROGRESS_BG, COLOR_SELECTED,
};

const LOADING_MESSAGE: &str = "Generating lesson...";
const UNAVAILABLE_MESSAGE: &str = "Error loading lesson.";

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let Some(session) = app.session() else {
        return;
    };
    let ctx = LayoutContext::from_area(area);
    let column = centered_column(area, ctx.content_width());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(footer_height(session, column.width)),
        ])
        .split(column);

    render_progress_row(frame, chunks[0], session, app.profile().hearts());

    match session.phase() {
        SessionPhase::Loading => render_status(
            frame,
            chunks[2],
            StatusIndicatorType::spinner(LOADING_MESSAGE, (app.tick_count / 6) as usize),
        ),
        SessionPhase::Unavailable => render_status(
            frame,
            chunks[2],
            StatusIndicatorType::error(
                UNAVAILABLE_MESSAGE,
                Some("Press Esc to go back".to_string()),
            ),
        ),
        SessionPhase::Completed => render_status(
            frame,
            chunks[2],
            StatusIndicatorType::success(
                "Lesson complete!",
                Some(format!("+{} XP", LESSON_XP_AWARD)),
            ),
        ),
        SessionPhase::Answering | SessionPhase::Checked(_) => {
            if let Some(question) = session.current_question() {
                render_question(frame, chunks[2], session, question);
                render_footer(frame, chunks[3], session, question);
            }
        }
    }
}

/// Rows below the question: the key hint while answering, the whole
/// feedback sheet plus its top border after a check.
fn footer_height(session: &LessonSession, width: u16) -> u16 {
    match (session.feedback(), session.current_question()) {
        (Some(feedback), Some(question)) => {
            let (_, lines) = feedback_lines(feedback, question);
            wrapped_height(&lines, width).saturating_add(1)
        }
        _ if session.phase() == SessionPhase::Answering => 1,
        _ => 0,
    }
}

/// Rows `lines` occupy when word-wrapped to `width` columns.
pub fn wrapped_height(lines: &[Line], width: u16) -> u16 {
    if width == 0 {
        return lines.len() as u16;
    }
    let rows: usize = lines
        .iter()
        .map(|line| {
            let text: String = line.spans.iter().map(|span| span.content.as_ref()).collect();
            wrapped_rows(&text, width as usize)
        })
        .sum();
    rows.min(u16::MAX as usize) as u16
}

fn wrapped_rows(text: &str, width: usize) -> usize {
    let mut rows = 1;
    let mut used = 0;
    for word in text.split(' ') {
        let word_width = word.width();
        if used > 0 {
            if used + 1 + word_width <= width {
                used += 1 + word_width;
                continue;
            }
            rows += 1;
        }
        // Words wider than a row are broken across rows.
        let extra = word_width.saturating_sub(1) / width;
        rows += extra;
        used = word_width - extra * width;
    }
    rows
}

fn render_progress_row(frame: &mut Frame, area: Rect, session: &LessonSession, hearts: u8) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(10),
            Constraint::Length(10),
        ])
        .split(area);

    frame.render_widget(
        Paragraph::new(Span::styled("esc", Style::default().fg(COLOR_DIM))),
        chunks[0],
    );

    let ratio = (session.progress_percent() / 100.0).clamp(0.0, 1.0);
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(COLOR_PROGRESS).bg(COLOR_PROGRESS_BG))
        .ratio(ratio)
        .label(progress_label(session));
    frame.render_widget(gauge, chunks[1]);

    frame.render_widget(
        Paragraph::new(Line::from(hearts_spans(hearts))).alignment(Alignment::Right),
        chunks[2],
    );
}

/// "current / total", or empty before any questions arrive.
pub fn progress_label(session: &LessonSession) -> String {
    let total = session.questions().len();
    if total == 0 {
        return String::new();
    }
    let shown = match session.phase() {
        SessionPhase::Completed => total,
        _ => session.current_index() + 1,
    };
    format!("{}/{}", shown, total)
}

fn render_status(frame: &mut Frame, area: Rect, indicator: StatusIndicatorType) {
    let lines = render_status_indicator(&indicator);
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn render_question(frame: &mut Frame, area: Rect, session: &LessonSession, question: &Question) {
    let mut lines = vec![
        Line::styled(
            question.kind().instruction(),
            Style::default().fg(COLOR_DIM),
        ),
        Line::from(""),
        Line::styled(
            question.prompt.clone(),
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
    ];

    if question.presents_options() {
        lines.extend(option_lines(session, question));
        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
        return;
    }

    let prompt_height = wrapped_height(&lines, area.width);
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);

    let input_area = Rect {
        y: area.y + prompt_height.min(area.height),
        height: 3.min(area.height.saturating_sub(prompt_height)),
        ..area
    };
    render_text_input(frame, input_area, session);
}

/// Numbered options; after a check the right answer turns green and a wrong pick red.
pub fn option_lines(session: &LessonSession, question: &Question) -> Vec<Line<'static>> {
    let chosen = session.selected_option_index();
    let checked = session.feedback().is_some();

    question
        .options()
        .iter()
        .enumerate()
        .map(|(index, option)| {
            let is_chosen = chosen == Some(index);
            let is_correct = *option == question.correct_answer;
            let style = if checked && is_correct {
                Style::default()
                    .fg(COLOR_CORRECT)
                    .add_modifier(Modifier::BOLD)
            } else if checked && is_chosen {
                Style::default().fg(COLOR_INCORRECT)
            } else if is_chosen {
                Style::default()
                    .fg(COLOR_SELECTED)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(COLOR_ACCENT)
            };
            let marker = if is_chosen { "▸" } else { " " };
            Line::styled(format!("{} {}. {}", marker, index + 1, option), style)
        })
        .collect()
}

fn render_text_input(frame: &mut Frame, area: Rect, session: &LessonSession) {
    if area.height == 0 {
        return;
    }
    let text = visible_tail(session.selection().as_str(), area.width.saturating_sub(3) as usize);
    let mut spans = vec![Span::raw(text.to_string())];
    if session.phase() == SessionPhase::Answering {
        spans.push(Span::styled("█", Style::default().fg(COLOR_DIM)));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .style(Style::default().bg(COLOR_INPUT_BG));
    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

/// The longest suffix of `text` that fits in `width` columns.
pub fn visible_tail(text: &str, width: usize) -> &str {
    if text.width() <= width {
        return text;
    }
    let mut used = 0;
    for (index, c) in text.char_indices().rev() {
        used += c.width().unwrap_or(0);
        if used > width {
            return &text[index + c.len_utf8()..];
        }
    }
    text
}

fn render_footer(frame: &mut Frame, area: Rect, session: &LessonSession, question: &Question) {
    if area.height == 0 {
        return;
    }
    match session.feedback() {
        None => {
            let hint = answering_hint(session.can_check(), question.is_speakable());
            frame.render_widget(
                Paragraph::new(Line::styled(hint, Style::default().fg(COLOR_DIM))),
                area,
            );
        }
        Some(feedback) => {
            let (color, lines) = feedback_lines(feedback, question);
            let block = Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(color));
            frame.render_widget(
                Paragraph::new(lines)
                    .block(block)
                    .wrap(Wrap { trim: false }),
                area,
            );
        }
    }
}

pub fn answering_hint(can_check: bool, speakable: bool) -> String {
    let mut hint = String::new();
    if can_check {
        hint.push_str("enter check   ");
    }
    if speakable {
        hint.push_str("ctrl+s listen   ");
    }
    hint.push_str("esc leave");
    hint
}

/// Text of the feedback sheet. Wrong answers reveal the correct one and the explanation.
pub fn feedback_lines(feedback: Feedback, question: &Question) -> (Color, Vec<Line<'static>>) {
    let continue_hint = Line::styled("enter continue", Style::default().fg(COLOR_DIM));
    match feedback {
        Feedback::Correct => (
            COLOR_CORRECT,
            vec![
                Line::styled(
                    "✓ Excellent!",
                    Style::default()
                        .fg(COLOR_CORRECT)
                        .add_modifier(Modifier::BOLD),
                ),
                Line::from(""),
                continue_hint,
            ],
        ),
        Feedback::Incorrect => {
            let mut lines = vec![Line::from(vec![
                Span::styled(
                    "✗ Correct answer: ",
                    Style::default()
                        .fg(COLOR_INCORRECT)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    question.correct_answer.clone(),
                    Style::default().fg(COLOR_ACCENT),
                ),
            ])];
            if let Some(explanation) = &question.explanation {
                lines.push(Line::styled(
                    explanation.clone(),
                    Style::default().fg(COLOR_DIM),
                ));
            }
            lines.push(Line::from(""));
            lines.push(continue_hint);
            (COLOR_INCORRECT, lines)
        }
    }
}
