//! Networks page view

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

/// Render the networks page
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(1),
        ])
        .split(area);

    search::render(
        frame,
        layout[0],
        &app.networks.query,
        app.networks.searching,
        app.networks.visible_len(),
    );

    let c = colors();
    let header = format!(
        "    {} {} {} {} {} {}",
        pad("Name", 18),
        pad("Status", 12),
        pad("Subnet", 16),
        pad("Gateway", 14),
        pad("Inst", 5),
        "Region",
    );
    frame.render_widget(
        Paragraph::new(Line::styled(header, Style::default().fg(c.muted))),
        layout[1],
    );

    if app.networks.visible_len() == 0 {
        frame.render_widget(
            Paragraph::new(Line::styled(
                "  No networks match.",
                Style::default().fg(c.muted),
            )),
            layout[2],
        );
        return;
    }

    let items: Vec<ListItem> = app
        .networks
        .visible()
        .iter()
        .enumerate()
        .map(|(i, network)| {
            let is_selected = i == app.networks.selected;

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
                badge::dot(network.status.category(), false, app.tick),
                Span::raw(" "),
                Span::styled(pad(&network.name, 18), row_style),
                Span::styled(pad(network.status.label(), 12), dim_style),
                Span::styled(pad(&network.subnet, 16), dim_style),
                Span::styled(pad(&network.gateway, 14), dim_style),
                Span::styled(pad(&network.instances.to_string(), 5), dim_style),
                Span::styled(network.region.clone(), dim_style),
            ]);

            ListItem::new(line)
        })
        .collect();

    let list = List::new(items);
    let mut state = ListState::default();
    state.select(Some(app.networks.selected));

    frame.render_stateful_widget(list, layout[2], &mut state);
}
