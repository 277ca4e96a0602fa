//! Dialog Frame Component
//!
//! A centered dialog frame with rounded borders. Handles background clearing
//! and responsive sizing.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders, Clear},
    Frame,
};

use crate::ui::layout::LayoutContext;
use crate::ui::theme::{COLOR_BORDER, COLOR_DIALOG_BG, COLOR_HEADER};

/// Configuration for rendering a dialog frame
#[derive(Debug, Clone)]
pub struct DialogFrameConfig<'a> {
    /// Title displayed in the border
    pub title: &'a str,
    /// Content height (not including borders)
    pub content_height: u16,
    pub min_width: u16,
    pub max_width: u16,
    /// Border color, dark gray unless overridden
    pub accent: Color,
}

impl<'a> DialogFrameConfig<'a> {
    pub fn new(title: &'a str, content_height: u16) -> Self {
        Self {
            title,
            content_height,
            min_width: 30,
            max_width: 60,
            accent: COLOR_BORDER,
        }
    }

    pub fn min_width(mut self, width: u16) -> Self {
        self.min_width = width;
        self
    }

    pub fn max_width(mut self, width: u16) -> Self {
        self.max_width = width;
        self
    }

    pub fn accent(mut self, color: Color) -> Self {
        self.accent = color;
        self
    }
}

/// Calculate dialog width based on terminal size and configuration
fn calculate_dialog_width(ctx: &LayoutContext, config: &DialogFrameConfig, area_width: u16) -> u16 {
    if ctx.is_extra_small() {
        // Take most of the screen, leave 2 cols margin
        area_width.saturating_sub(4).min(config.max_width)
    } else if ctx.is_narrow() {
        ctx.bounded_width(80, config.min_width, config.max_width)
    } else {
        ctx.bounded_width(50, config.min_width, config.max_width)
    }
}

/// Render a dialog frame centered in `area` and return the inner content area
pub fn render_dialog_frame(
    frame: &mut Frame,
    area: Rect,
    ctx: &LayoutContext,
    config: &DialogFrameConfig,
) -> Rect {
    let dialog_width = calculate_dialog_width(ctx, config, area.width).min(area.width);
    let dialog_height = calculate_total_dialog_height(config.content_height).min(area.height);

    let dialog_area = Rect {
        x: area.x + (area.width.saturating_sub(dialog_width)) / 2,
        y: area.y + (area.height.saturating_sub(dialog_height)) / 2,
        width: dialog_width,
        height: dialog_height,
    };

    frame.render_widget(Clear, dialog_area);

    let title = format!(" {} ", config.title);
    let block = Block::default()
        .title(Span::styled(
            title,
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(config.accent))
        .style(Style::default().bg(COLOR_DIALOG_BG));

    frame.render_widget(block, dialog_area);

    Rect {
        x: dialog_area.x + 1,
        y: dialog_area.y + 1,
        width: dialog_area.width.saturating_sub(2),
        height: dialog_area.height.saturating_sub(2),
    }
}

/// Calculate the total dialog height needed for given content
pub fn calculate_total_dialog_height(content_height: u16) -> u16 {
    content_height + 2
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_dialog_frame_config_new() {
        let config = DialogFrameConfig::new("Test", 10);
        assert_eq!(config.title, "Test");
        assert_eq!(config.content_height, 10);
        assert_eq!(config.min_width, 30);
        assert_eq!(config.max_width, 60);
        assert_eq!(config.accent, COLOR_BORDER);
    }

    #[test]
    fn test_dialog_frame_config_builder() {
        let config = DialogFrameConfig::new("Test", 10)
            .min_width(40)
            .max_width(70)
            .accent(Color::Red);

        assert_eq!(config.min_width, 40);
        assert_eq!(config.max_width, 70);
        assert_eq!(config.accent, Color::Red);
    }

    #[test]
    fn test_calculate_dialog_width_extra_small() {
        let ctx = LayoutContext::new(50, 20);
        let config = DialogFrameConfig::new("Test", 10);
        assert_eq!(calculate_dialog_width(&ctx, &config, 50), 46);
    }

    #[test]
    fn test_calculate_dialog_width_normal() {
        let ctx = LayoutContext::new(100, 40);
        let config = DialogFrameConfig::new("Test", 10);
        assert_eq!(calculate_dialog_width(&ctx, &config, 100), 50);
    }

    #[test]
    fn test_calculate_total_dialog_height() {
        assert_eq!(calculate_total_dialog_height(10), 12);
    }

    #[test]
    fn test_render_returns_inner_area() {
        let backend = TestBackend::new(100, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut inner = Rect::default();

        terminal
            .draw(|f| {
                let area = f.area();
                let ctx = LayoutContext::from_area(area);
                inner = render_dialog_frame(f, area, &ctx, &DialogFrameConfig::new("Hi", 4));
            })
            .unwrap();

        assert_eq!(inner, Rect::new(26, 18, 48, 4));
    }
}
