//! Footer hints for the dashboard

/// Key hints shown under the topic list.
pub fn get_footer_hint(can_start: bool) -> &'static str {
    if can_start {
        "↑/↓ choose   enter start   q quit"
    } else {
        "↑/↓ choose   no hearts left, wait for a refill   q quit"
    }
}

/// Where lessons come from, for the footer's right side.
pub fn provider_label(provider: &str) -> String {
    format!("lessons: {}", provider)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_footer_hint_with_hearts() {
        assert!(get_footer_hint(true).contains("enter start"));
    }

    #[test]
    fn test_footer_hint_without_hearts() {
        assert!(get_footer_hint(false).contains("no hearts left"));
    }

    #[test]
    fn test_provider_label() {
        assert_eq!(provider_label("offline"), "lessons: offline");
    }
}
