//! Security groups page view

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::model::App;
use crate::view::components::{badge, search};
use crate::view::text::pad;
use crate::view::theme::colors;

/// Render the security page
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let alert_rows = app.security.alerts.len() as u16 + 2;
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),          // search bar
            Constraint::Length(1),          // column header
            Constraint::Min(3),             // group list
            Constraint::Length(alert_rows), // findings
        ])
        .split(area);

    search::render(
        frame,
        layout[0],
        &app.security.query,
        app.security.searching,
        app.security.visible_len(),
    );

    let c = colors();
    let header = format!(
        "    {} {} {} {} {}",
        pad("Name", 16),
        pad("Status", 10),
        pad("Rules", 14),
        pad("Inst", 5),
        "Description",
    );
    frame.render_widget(
        Paragraph::new(Line::styled(header, Style::default().fg(c.muted))),
        layout[1],
    );

    render_groups(app, frame, layout[2]);
    render_alerts(app, frame, layout[3]);
}

fn render_groups(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();

    if app.security.visible_len() == 0 {
        frame.render_widget(
            Paragraph::new(Line::styled(
                "  No security groups match.",
                Style::default().fg(c.muted),
            )),
            area,
        );
        return;
    }

    let items: Vec<ListItem> = app
        .security
        .visible()
        .iter()
        .enumerate()
        .map(|(i, group)| {
            let is_selected = i == app.security.selected;

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

            let (inbound, outbound) = group.rule_counts();
            let rules = format!("{inbound} in / {outbound} out");

            let line = Line::from(vec![
                Span::raw("  "),
                badge::dot(group.status.category(), false, app.tick),
                Span::raw(" "),
                Span::styled(pad(&group.name, 16), row_style),
                Span::styled(pad(group.status.label(), 10), dim_style),
                Span::styled(pad(&rules, 14), dim_style),
                Span::styled(pad(&group.instances.to_string(), 5), dim_style),
                Span::styled(group.description.clone(), dim_style),
            ]);

            ListItem::new(line)
        })
        .collect();

    let list = List::new(items);
    let mut state = ListState::default();
    state.select(Some(app.security.selected));

    frame.render_stateful_widget(list, area, &mut state);
}

fn render_alerts(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();

    let block = Block::default()
        .title(format!(" Security Alerts ({}) ", app.security.alerts.len()))
        .borders(Borders::TOP)
        .border_style(Style::default().fg(c.border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines: Vec<Line> = app
        .security
        .alerts
        .iter()
        .map(|alert| {
            Line::from(vec![
                Span::raw("  "),
                badge::dot(alert.severity.category(), false, app.tick),
                Span::raw(" "),
                Span::styled(pad(alert.severity.label(), 7), Style::default().fg(c.muted)),
                Span::styled(pad(&alert.title, 34), Style::default().fg(c.fg)),
                Span::styled(alert.time.clone(), Style::default().fg(c.muted)),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}
