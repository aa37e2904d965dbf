//! Status badge component
//!
//! Renders a status as a colored indicator dot plus label. Pulsing
//! statuses blink the dot on the render tick.

use cloud_console_core::types::StatusCategory;
use ratatui::style::Style;
use ratatui::text::Span;

use crate::view::theme::colors;

/// Ticks per blink phase
const PULSE_PERIOD: u64 = 4;

/// Indicator dot for a status category
pub fn dot(category: StatusCategory, pulses: bool, tick: u64) -> Span<'static> {
    let c = colors();
    let glyph = if pulses && (tick / PULSE_PERIOD) % 2 == 0 {
        "○"
    } else {
        "●"
    };
    Span::styled(glyph, Style::default().fg(c.category(category)))
}

/// Dot plus label spans for a status
pub fn badge(
    label: &str,
    category: StatusCategory,
    pulses: bool,
    tick: u64,
) -> Vec<Span<'static>> {
    let c = colors();
    vec![
        dot(category, pulses, tick),
        Span::raw(" "),
        Span::styled(label.to_string(), Style::default().fg(c.category(category))),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pulsing_dot_alternates_with_the_tick() {
        let a = dot(StatusCategory::Warning, true, 0);
        let b = dot(StatusCategory::Warning, true, PULSE_PERIOD);
        assert_ne!(a.content, b.content);
    }

    #[test]
    fn static_dot_ignores_the_tick() {
        let a = dot(StatusCategory::Success, false, 0);
        let b = dot(StatusCategory::Success, false, PULSE_PERIOD);
        assert_eq!(a.content, b.content);
    }
}
