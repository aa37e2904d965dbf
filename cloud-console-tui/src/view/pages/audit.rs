//! Audit logs page view

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::model::App;
use crate::view::components::{badge, search};
use crate::view::text::pad;
use crate::view::theme::colors;

/// Render the audit logs page
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // activity summary
            Constraint::Length(1), // search bar
            Constraint::Length(1), // selects
            Constraint::Length(1), // column header
            Constraint::Min(1),    // log list
        ])
        .split(area);

    render_summary(app, frame, layout[0]);

    search::render(
        frame,
        layout[1],
        &app.audit.query,
        app.audit.searching,
        app.audit.visible_len(),
    );

    render_selects(app, frame, layout[2]);

    let c = colors();
    let header = format!(
        "    {} {} {} {} {} {}",
        pad("Time", 17),
        pad("User", 26),
        pad("Action", 22),
        pad("Resource", 18),
        pad("Severity", 9),
        "Status",
    );
    frame.render_widget(
        Paragraph::new(Line::styled(header, Style::default().fg(c.muted))),
        layout[3],
    );

    render_entries(app, frame, layout[4]);
}

fn render_summary(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let spans: Vec<Span> = app
        .audit
        .summary
        .iter()
        .flat_map(|entry| {
            vec![
                Span::styled(format!(" {}", entry.action), Style::default().fg(c.muted)),
                Span::styled(
                    format!(" {}", entry.count),
                    Style::default().fg(c.highlight),
                ),
                Span::styled(" ·", Style::default().fg(c.border)),
            ]
        })
        .collect();
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_selects(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let kind = app.audit.kind_filter.map_or("All", |k| k.label());
    let severity = app.audit.severity_filter.map_or("All", |s| s.label());

    let line = Line::from(vec![
        Span::styled(" Type: ", Style::default().fg(c.muted)),
        Span::styled(kind, Style::default().fg(c.highlight).add_modifier(Modifier::BOLD)),
        Span::styled("  Severity: ", Style::default().fg(c.muted)),
        Span::styled(
            severity,
            Style::default().fg(c.highlight).add_modifier(Modifier::BOLD),
        ),
        Span::styled("  (f / s to cycle, Alt+x to export)", Style::default().fg(c.muted)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_entries(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();

    if app.audit.visible_len() == 0 {
        frame.render_widget(
            Paragraph::new(Line::styled(
                "  No log entries match.",
                Style::default().fg(c.muted),
            )),
            area,
        );
        return;
    }

    let items: Vec<ListItem> = app
        .audit
        .visible()
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let is_selected = i == app.audit.selected;

            let row_style = if is_selected {
                Style::default()
                    .fg(c.selected_fg)
                    .bg(c.selected_bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(c.fg)
            };
            let dim_style = if is_selected {
                row_style
            } else {
                Style::default().fg(c.muted)
            };

            let line = Line::from(vec![
                Span::raw("  "),
                badge::dot(entry.outcome.category(), false, app.tick),
                Span::raw(" "),
                Span::styled(
                    pad(&entry.timestamp.format("%m-%d %H:%M:%S").to_string(), 17),
                    dim_style,
                ),
                Span::styled(pad(&entry.user, 26), dim_style),
                Span::styled(pad(&entry.action, 22), row_style),
                Span::styled(pad(&entry.resource, 18), dim_style),
                Span::styled(pad(entry.severity.label(), 9), dim_style),
                Span::styled(entry.outcome.label(), dim_style),
            ]);

            ListItem::new(line)
        })
        .collect();

    let list = List::new(items);
    let mut state = ListState::default();
    state.select(Some(app.audit.selected));

    frame.render_stateful_widget(list, area, &mut state);
}
