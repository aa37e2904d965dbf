//! Storage page view

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::model::App;
use crate::view::components::{badge, search};
use crate::view::text::pad;
use crate::view::theme::colors;

/// Render the storage page
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let snapshot_rows = app.storage.snapshots.len() as u16 + 2;
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),             // usage overview
            Constraint::Length(1),             // search bar
            Constraint::Min(3),                // volume list
            Constraint::Length(snapshot_rows), // snapshots
        ])
        .split(area);

    render_summary(app, frame, layout[0]);

    search::render(
        frame,
        layout[1],
        &app.storage.query,
        app.storage.searching,
        app.storage.visible_len(),
    );

    render_volumes(app, frame, layout[2]);
    render_snapshots(app, frame, layout[3]);
}

/// Usage gauge over the full collection (the search box does not affect it)
fn render_summary(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let summary = app.storage.summary();

    let block = Block::default()
        .title(" Storage Usage Overview ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(inner);

    let label = format!(
        " {} GB used / {} GB total · {} GB available",
        summary.used_gb,
        summary.total_gb,
        summary.available_gb()
    );
    frame.render_widget(
        Paragraph::new(Line::styled(label, Style::default().fg(c.fg))),
        rows[0],
    );

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(c.highlight))
        .percent(u16::from(summary.usage_percent))
        .label(format!("{}%", summary.usage_percent));
    frame.render_widget(gauge, rows[1]);
}

fn render_volumes(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(area);

    let header = format!(
        "    {} {} {} {} {} {} {}",
        pad("Name", 18),
        pad("Status", 10),
        pad("Type", 5),
        pad("Size", 8),
        pad("Used", 10),
        pad("Instance", 14),
        "Enc",
    );
    frame.render_widget(
        Paragraph::new(Line::styled(header, Style::default().fg(c.muted))),
        rows[0],
    );

    if app.storage.visible_len() == 0 {
        frame.render_widget(
            Paragraph::new(Line::styled(
                "  No volumes match.",
                Style::default().fg(c.muted),
            )),
            rows[1],
        );
        return;
    }

    let items: Vec<ListItem> = app
        .storage
        .visible()
        .iter()
        .enumerate()
        .map(|(i, volume)| {
            let is_selected = i == app.storage.selected;

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

            let status = volume.status;
            let used = format!("{} ({}%)", volume.used, volume.usage_percent());

            let line = Line::from(vec![
                Span::raw("  "),
                badge::dot(status.category(), status.pulses(), app.tick),
                Span::raw(" "),
                Span::styled(pad(&volume.name, 18), row_style),
                Span::styled(pad(status.label(), 10), dim_style),
                Span::styled(pad(volume.kind.label(), 5), dim_style),
                Span::styled(pad(&volume.size.to_string(), 8), dim_style),
                Span::styled(pad(&used, 10), dim_style),
                Span::styled(
                    pad(volume.instance.as_deref().unwrap_or("not attached"), 14),
                    dim_style,
                ),
                Span::styled(if volume.encrypted { "yes" } else { "no" }, dim_style),
            ]);

            ListItem::new(line)
        })
        .collect();

    let list = List::new(items);
    let mut state = ListState::default();
    state.select(Some(app.storage.selected));

    frame.render_stateful_widget(list, rows[1], &mut state);
}

fn render_snapshots(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();

    let block = Block::default()
        .title(format!(" Recent Snapshots ({}) ", app.storage.snapshots.len()))
        .borders(Borders::TOP)
        .border_style(Style::default().fg(c.border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines: Vec<Line> = app
        .storage
        .snapshots
        .iter()
        .map(|snapshot| {
            Line::from(vec![
                Span::raw("  "),
                badge::dot(snapshot.status.category(), snapshot.status.pulses(), app.tick),
                Span::raw(" "),
                Span::styled(pad(&snapshot.name, 26), Style::default().fg(c.fg)),
                Span::styled(pad(snapshot.status.label(), 12), Style::default().fg(c.muted)),
                Span::styled(pad(&snapshot.volume, 18), Style::default().fg(c.muted)),
                Span::styled(pad(&snapshot.size.to_string(), 8), Style::default().fg(c.muted)),
                Span::styled(
                    snapshot.created.format("%Y-%m-%d %H:%M").to_string(),
                    Style::default().fg(c.muted),
                ),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}
