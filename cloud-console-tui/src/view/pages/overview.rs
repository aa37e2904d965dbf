//! Overview (dashboard) page view

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::model::App;
use crate::view::components::{badge, tile};
use crate::view::text::pad;
use crate::view::theme::colors;

/// Render the overview page
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // first KPI row
            Constraint::Length(5), // second KPI row
            Constraint::Min(1),    // recent instances + alerts
        ])
        .split(area);

    render_kpi_row(app, frame, layout[0], 0);
    render_kpi_row(app, frame, layout[1], 3);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(layout[2]);

    render_recent_instances(app, frame, columns[0]);
    render_alerts(app, frame, columns[1]);
}

/// One row of three KPI tiles starting at `offset`
fn render_kpi_row(app: &App, frame: &mut Frame, area: Rect, offset: usize) {
    let tiles: Vec<_> = app.overview.metrics.iter().skip(offset).take(3).collect();
    if tiles.is_empty() {
        return;
    }

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    for (metric, column) in tiles.into_iter().zip(columns.iter()) {
        tile::render(frame, *column, metric);
    }
}

fn render_recent_instances(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();

    let block = Block::default()
        .title(" Recent Instances ")
        .title_style(Style::default().fg(c.fg).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines: Vec<Line> = app
        .overview
        .recent_instances
        .iter()
        .map(|instance| {
            Line::from(vec![
                Span::raw(" "),
                badge::dot(instance.status.category(), instance.status.pulses(), app.tick),
                Span::raw(" "),
                Span::styled(pad(&instance.name, 16), Style::default().fg(c.fg)),
                Span::styled(pad(&instance.flavor, 10), Style::default().fg(c.muted)),
                Span::styled(instance.ip.clone(), Style::default().fg(c.muted)),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_alerts(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();

    let block = Block::default()
        .title(" Alerts ")
        .title_style(Style::default().fg(c.fg).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines: Vec<Line> = app
        .overview
        .alerts
        .iter()
        .map(|alert| {
            Line::from(vec![
                Span::raw(" "),
                badge::dot(alert.severity.category(), false, app.tick),
                Span::raw(" "),
                Span::styled(pad(&alert.message, 36), Style::default().fg(c.fg)),
                Span::styled(alert.time.clone(), Style::default().fg(c.muted)),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}
