//! Modal dialog rendering

use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::Line,
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::app::Dialog;
use crate::ui::components::{render_dialog_frame, DialogFrameConfig};
use crate::ui::layout::LayoutContext;
use crate::ui::theme::{COLOR_ACCENT, COLOR_DIM, COLOR_HEART};

/// Draw `dialog` centered over whatever is already in `area`.
pub fn render_dialog(frame: &mut Frame, area: Rect, dialog: Dialog) {
    let ctx = LayoutContext::from_area(area);
    let mut config = DialogFrameConfig::new(dialog.title(), 4);
    if !dialog.is_confirmation() {
        config = config.accent(COLOR_HEART);
    }
    let inner = render_dialog_frame(frame, area, &ctx, &config);

    let lines = vec![
        Line::styled(dialog.message(), Style::default().fg(COLOR_ACCENT)),
        Line::from(""),
        Line::styled(dialog.hint(), Style::default().fg(COLOR_DIM)),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        inner,
    );
}
