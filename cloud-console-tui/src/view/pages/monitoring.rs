//! Monitoring page view

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::model::App;
use crate::view::components::{badge, search, tile};
use crate::view::text::pad;
use crate::view::theme::colors;

/// Render the monitoring page
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let health_rows = app.monitoring.health.len() as u16 + 2;
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),           // time range line
            Constraint::Length(5),           // metric tiles
            Constraint::Length(1),           // search bar
            Constraint::Min(3),              // alert list
            Constraint::Length(health_rows), // instance health
        ])
        .split(area);

    render_range(app, frame, layout[0]);
    render_metrics(app, frame, layout[1]);

    search::render(
        frame,
        layout[2],
        &app.monitoring.query,
        app.monitoring.searching,
        app.monitoring.visible_len(),
    );

    render_alerts(app, frame, layout[3]);
    render_health(app, frame, layout[4]);
}

fn render_range(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let line = Line::from(vec![
        Span::styled(" Range: ", Style::default().fg(c.muted)),
        Span::styled(
            app.monitoring.time_range.label(),
            Style::default().fg(c.highlight).add_modifier(Modifier::BOLD),
        ),
        Span::styled("  (←→ to change)", Style::default().fg(c.muted)),
        Span::styled(
            format!("   {} active alert(s)", app.monitoring.active_count()),
            Style::default().fg(c.warning),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_metrics(app: &App, frame: &mut Frame, area: Rect) {
    let count = app.monitoring.metrics.len().max(1) as u32;
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(
            app.monitoring
                .metrics
                .iter()
                .map(|_| Constraint::Ratio(1, count))
                .collect::<Vec<_>>(),
        )
        .split(area);

    for (metric, column) in app.monitoring.metrics.iter().zip(columns.iter()) {
        tile::render(frame, *column, metric);
    }
}

fn render_alerts(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();

    if app.monitoring.visible_len() == 0 {
        frame.render_widget(
            Paragraph::new(Line::styled(
                "  No alerts match.",
                Style::default().fg(c.muted),
            )),
            area,
        );
        return;
    }

    let items: Vec<ListItem> = app
        .monitoring
        .visible()
        .iter()
        .enumerate()
        .map(|(i, alert)| {
            let is_selected = i == app.monitoring.selected;

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
                badge::dot(alert.severity.category(), false, app.tick),
                Span::raw(" "),
                Span::styled(pad(alert.severity.label(), 9), dim_style),
                Span::styled(pad(&alert.title, 22), row_style),
                Span::styled(pad(&alert.instance, 16), dim_style),
                Span::styled(pad(alert.state.label(), 13), dim_style),
                Span::styled(alert.duration.clone(), dim_style),
            ]);

            ListItem::new(line)
        })
        .collect();

    let list = List::new(items);
    let mut state = ListState::default();
    state.select(Some(app.monitoring.selected));

    frame.render_stateful_widget(list, area, &mut state);
}

fn render_health(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();

    let block = Block::default()
        .title(" Instance Performance ")
        .borders(Borders::TOP)
        .border_style(Style::default().fg(c.border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines: Vec<Line> = app
        .monitoring
        .health
        .iter()
        .map(|h| {
            Line::from(vec![
                Span::raw("  "),
                badge::dot(h.status.category(), false, app.tick),
                Span::raw(" "),
                Span::styled(pad(&h.instance, 16), Style::default().fg(c.fg)),
                Span::styled(pad(h.status.label(), 9), Style::default().fg(c.category(h.status.category()))),
                Span::styled(
                    format!(
                        "cpu {:3}%  mem {:3}%  disk {:3}%  net {:.1} GB/s  up {}  alerts {}",
                        h.cpu, h.memory, h.disk, h.network_gbps, h.uptime, h.alerts
                    ),
                    Style::default().fg(c.muted),
                ),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}
