//! Modal dialog component

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::model::{App, Modal};
use crate::view::theme::colors;

/// Render the active dialog, if any, above everything else
pub fn render(app: &App, frame: &mut Frame) {
    let Some(ref modal) = app.modal.active else {
        return;
    };

    match modal {
        Modal::Help => render_help(frame),
        Modal::Export {
            filename,
            entry_count,
            bytes,
        } => render_export(frame, filename, *entry_count, *bytes),
    }
}

/// Centered dialog area
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(height),
            Constraint::Min(1),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(width),
            Constraint::Min(1),
        ])
        .split(vertical[1]);

    horizontal[1]
}

fn render_help(frame: &mut Frame) {
    let c = colors();
    let area = centered_rect(52, 16, frame.area());

    let key = |k: &'static str, desc: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {k:10}"), Style::default().fg(c.highlight)),
            Span::styled(desc, Style::default().fg(c.fg)),
        ])
    };

    let content = vec![
        Line::from(""),
        key("Tab", "Switch between panels"),
        key("↑↓ / jk", "Move selection"),
        key("Enter", "Open page / confirm"),
        key("/", "Search the current list"),
        key("f, s", "Cycle audit type / severity"),
        key("←→", "Change value / time range"),
        key("Alt+x", "Export audit logs"),
        key("Alt+r", "Refresh page data"),
        key("Alt+h, ?", "This help"),
        key("Alt+q", "Quit"),
        Line::from(""),
        Line::from(Span::styled(
            "  Press Enter or Esc to close",
            Style::default().fg(c.muted),
        )),
    ];

    let block = Block::default()
        .title(" Help ")
        .title_style(Style::default().fg(c.fg).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.border_focused));

    frame.render_widget(Clear, area);
    frame.render_widget(Paragraph::new(content).block(block), area);
}

fn render_export(frame: &mut Frame, filename: &str, entry_count: usize, bytes: usize) {
    let c = colors();
    let area = centered_rect(56, 9, frame.area());

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  Exported {entry_count} audit entries"),
            Style::default().fg(c.success).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("  File:  ", Style::default().fg(c.muted)),
            Span::styled(filename.to_string(), Style::default().fg(c.fg)),
        ]),
        Line::from(vec![
            Span::styled("  Size:  ", Style::default().fg(c.muted)),
            Span::styled(format!("{bytes} bytes"), Style::default().fg(c.fg)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "  Press Enter or Esc to close",
            Style::default().fg(c.muted),
        )),
    ];

    let block = Block::default()
        .title(" Export ")
        .title_style(Style::default().fg(c.fg).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.border_focused));

    frame.render_widget(Clear, area);
    frame.render_widget(Paragraph::new(content).block(block), area);
}
