//! Responsive Layout System
//!
//! `LayoutContext` wraps the terminal dimensions and answers the sizing
//! questions the render functions ask: how wide a card should be and whether
//! the terminal is too small for the full layout.

// ============================================================================
// Screen Size Breakpoints
// ============================================================================

/// Terminal size breakpoints for responsive layouts
pub mod breakpoints {
    /// Extra small terminal (< 60 columns)
    pub const XS_WIDTH: u16 = 60;
    /// Small terminal (< 80 columns)
    pub const SM_WIDTH: u16 = 80;

    /// Extra small terminal height (< 16 rows)
    pub const XS_HEIGHT: u16 = 16;
    /// Small terminal height (< 24 rows)
    pub const SM_HEIGHT: u16 = 24;
}

// ============================================================================
// Layout Context
// ============================================================================

#[derive(Debug, Clone, Copy)]
pub struct LayoutContext {
    /// Terminal width in columns
    pub width: u16,
    /// Terminal height in rows
    pub height: u16,
}

impl LayoutContext {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Build a context from the frame's full area.
    pub fn from_area(area: ratatui::layout::Rect) -> Self {
        Self::new(area.width, area.height)
    }

    /// Calculate a width as a percentage of terminal width, minimum 1.
    pub fn percent_width(&self, percentage: u16) -> u16 {
        ((self.width as u32 * percentage as u32) / 100).max(1) as u16
    }

    /// Calculate proportional width with min/max bounds.
    pub fn bounded_width(&self, percentage: u16, min: u16, max: u16) -> u16 {
        self.percent_width(percentage).clamp(min, max)
    }

    /// Width of the centered content column, leaving a margin on each side.
    pub fn content_width(&self) -> u16 {
        if self.is_narrow() {
            self.width.saturating_sub(2)
        } else {
            self.bounded_width(70, 60, 90).min(self.width)
        }
    }

    pub fn is_narrow(&self) -> bool {
        self.width < breakpoints::SM_WIDTH
    }

    pub fn is_short(&self) -> bool {
        self.height < breakpoints::SM_HEIGHT
    }

    pub fn is_extra_small(&self) -> bool {
        self.width < breakpoints::XS_WIDTH || self.height < breakpoints::XS_HEIGHT
    }
}

/// Center a column of `width` inside `area`.
pub fn centered_column(area: ratatui::layout::Rect, width: u16) -> ratatui::layout::Rect {
    let width = width.min(area.width);
    ratatui::layout::Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y,
        width,
        height: area.height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::layout::Rect;

    #[test]
    fn test_percent_width() {
        let ctx = LayoutContext::new(100, 40);
        assert_eq!(ctx.percent_width(50), 50);
        assert_eq!(LayoutContext::new(0, 0).percent_width(50), 1);
    }

    #[test]
    fn test_bounded_width() {
        let ctx = LayoutContext::new(200, 40);
        assert_eq!(ctx.bounded_width(50, 30, 60), 60);
        let ctx = LayoutContext::new(40, 40);
        assert_eq!(ctx.bounded_width(50, 30, 60), 30);
    }

    #[test]
    fn test_breakpoints() {
        assert!(LayoutContext::new(50, 40).is_extra_small());
        assert!(LayoutContext::new(100, 10).is_extra_small());
        assert!(LayoutContext::new(70, 40).is_narrow());
        assert!(!LayoutContext::new(120, 40).is_narrow());
        assert!(LayoutContext::new(120, 20).is_short());
    }

    #[test]
    fn test_content_width_fits() {
        assert_eq!(LayoutContext::new(70, 24).content_width(), 68);
        assert_eq!(LayoutContext::new(100, 24).content_width(), 70);
        assert_eq!(LayoutContext::new(200, 24).content_width(), 90);
    }

    #[test]
    fn test_centered_column() {
        let area = Rect::new(0, 0, 100, 20);
        let column = centered_column(area, 60);
        assert_eq!(column.x, 20);
        assert_eq!(column.width, 60);
        assert_eq!(centered_column(area, 150).width, 100);
    }
}
