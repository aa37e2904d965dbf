//! Metric tile component

use cloud_console_core::types::SystemMetric;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::view::theme::colors;

/// Renders one bordered metric tile: value, trend and description
pub fn render(frame: &mut Frame, area: Rect, metric: &SystemMetric) {
    let c = colors();

    let block = Block::default()
        .title(format!(" {} ", metric.title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.border));

    let mut value_line = vec![Span::styled(
        format!("  {}", metric.value),
        Style::default()
            .fg(c.category(metric.status))
            .add_modifier(Modifier::BOLD),
    )];

    if let Some(trend) = metric.trend {
        let (arrow, color) = if trend.positive {
            ("▲", c.success)
        } else {
            ("▼", c.error)
        };
        value_line.push(Span::raw("  "));
        value_line.push(Span::styled(
            format!("{arrow} {}%", trend.value),
            Style::default().fg(color),
        ));
    }

    let content = vec![
        Line::from(""),
        Line::from(value_line),
        Line::from(Span::styled(
            format!("  {}", metric.description),
            Style::default().fg(c.muted),
        )),
    ];

    frame.render_widget(Paragraph::new(content).block(block), area);
}
