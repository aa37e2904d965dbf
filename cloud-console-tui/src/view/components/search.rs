//! Search bar component

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::view::theme::colors;

/// Renders the search line of a list page.
///
/// Shows the live query while capturing input, the applied query after
/// leaving search mode, and the key hint when idle.
pub fn render(frame: &mut Frame, area: Rect, query: &str, searching: bool, shown: usize) {
    let c = colors();

    let line = if searching {
        Line::from(vec![
            Span::styled(" / ", Style::default().fg(c.highlight).add_modifier(Modifier::BOLD)),
            Span::styled(query.to_string(), Style::default().fg(c.fg)),
            Span::styled("█", Style::default().fg(c.highlight)),
            Span::styled(
                format!("   {shown} match(es) — Enter/Esc done, Ctrl+u clear"),
                Style::default().fg(c.muted),
            ),
        ])
    } else if query.is_empty() {
        Line::from(Span::styled(
            " Press / to search",
            Style::default().fg(c.muted),
        ))
    } else {
        Line::from(vec![
            Span::styled(" Filter: ", Style::default().fg(c.muted)),
            Span::styled(query.to_string(), Style::default().fg(c.fg)),
            Span::styled(
                format!("   {shown} match(es)"),
                Style::default().fg(c.muted),
            ),
        ])
    };

    frame.render_widget(Paragraph::new(line), area);
}
