//! Instances page view

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

/// Render the instances page
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // search bar
            Constraint::Length(1), // column header
            Constraint::Min(1),    // list
        ])
        .split(area);

    search::render(
        frame,
        layout[0],
        &app.instances.query,
        app.instances.searching,
        app.instances.visible_len(),
    );

    render_header(frame, layout[1]);

    if app.instances.visible_len() == 0 {
        render_empty(frame, layout[2]);
    } else {
        render_list(app, frame, layout[2]);
    }
}

fn render_header(frame: &mut Frame, area: Rect) {
    let c = colors();
    let header = format!(
        "    {} {} {} {} {} {}",
        pad("Name", 16),
        pad("Status", 9),
        pad("Type", 10),
        pad("IP Address", 14),
        pad("Uptime", 8),
        "Resources",
    );
    frame.render_widget(
        Paragraph::new(Line::styled(header, Style::default().fg(c.muted))),
        area,
    );
}

fn render_empty(frame: &mut Frame, area: Rect) {
    let c = colors();
    let content = vec![
        Line::from(""),
        Line::styled("  No instances match.", Style::default().fg(c.muted)),
        Line::styled(
            "  Press Ctrl+u to clear the search.",
            Style::default().fg(c.muted),
        ),
    ];
    frame.render_widget(Paragraph::new(content), area);
}

fn render_list(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let items: Vec<ListItem> = app
        .instances
        .visible()
        .iter()
        .enumerate()
        .map(|(i, instance)| {
            let is_selected = i == app.instances.selected;

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

            let status = instance.status;
            let resources = format!(
                "{} vCPU · {} GB · {} GB",
                instance.vcpus, instance.memory_gb, instance.storage_gb
            );

            let line = Line::from(vec![
                Span::raw("  "),
                badge::dot(status.category(), status.pulses(), app.tick),
                Span::raw(" "),
                Span::styled(pad(&instance.name, 16), row_style),
                Span::styled(pad(status.label(), 9), dim_style),
                Span::styled(pad(&instance.flavor, 10), dim_style),
                Span::styled(pad(&instance.ip, 14), dim_style),
                Span::styled(pad(instance.uptime.as_deref().unwrap_or("-"), 8), dim_style),
                Span::styled(resources, dim_style),
            ]);

            ListItem::new(line)
        })
        .collect();

    let list = List::new(items);
    let mut state = ListState::default();
    state.select(Some(app.instances.selected));

    frame.render_stateful_widget(list, area, &mut state);
}
