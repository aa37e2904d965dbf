//! Users page view

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

/// Render the users page
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // roles overview
            Constraint::Length(1), // search bar
            Constraint::Length(1), // column header
            Constraint::Min(1),    // user list
        ])
        .split(area);

    render_roles(app, frame, layout[0]);

    search::render(
        frame,
        layout[1],
        &app.users.query,
        app.users.searching,
        app.users.visible_len(),
    );

    let c = colors();
    let header = format!(
        "       {} {} {} {} {} {}",
        pad("Name", 18),
        pad("Email", 26),
        pad("Role", 16),
        pad("Status", 9),
        pad("Last Login", 17),
        "Projects",
    );
    frame.render_widget(
        Paragraph::new(Line::styled(header, Style::default().fg(c.muted))),
        layout[2],
    );

    render_users(app, frame, layout[3]);
}

fn render_roles(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();

    let block = Block::default()
        .title(" Roles Overview ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let spans: Vec<Span> = app
        .users
        .roles
        .iter()
        .flat_map(|role| {
            vec![
                Span::raw("  "),
                Span::styled(role.role.label(), Style::default().fg(c.fg)),
                Span::styled(
                    format!(" ({})", role.count),
                    Style::default().fg(c.highlight),
                ),
            ]
        })
        .collect();

    let total: u32 = app.users.roles.iter().map(|r| r.count).sum();
    let content = vec![
        Line::from(spans),
        Line::from(Span::styled(
            format!("  {total} members across {} roles", app.users.roles.len()),
            Style::default().fg(c.muted),
        )),
    ];

    frame.render_widget(Paragraph::new(content), inner);
}

fn render_users(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();

    if app.users.visible_len() == 0 {
        frame.render_widget(
            Paragraph::new(Line::styled(
                "  No users match.",
                Style::default().fg(c.muted),
            )),
            area,
        );
        return;
    }

    let items: Vec<ListItem> = app
        .users
        .visible()
        .iter()
        .enumerate()
        .map(|(i, user)| {
            let is_selected = i == app.users.selected;

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

            let status = user.status;
            let last_login = user
                .last_login
                .map_or_else(|| "Never".to_string(), |t| t.format("%Y-%m-%d %H:%M").to_string());

            let line = Line::from(vec![
                Span::raw("  "),
                badge::dot(status.category(), status.pulses(), app.tick),
                Span::raw(" "),
                Span::styled(pad(&user.initials(), 3), dim_style),
                Span::styled(pad(&user.name, 18), row_style),
                Span::styled(pad(&user.email, 26), dim_style),
                Span::styled(pad(user.role.label(), 16), dim_style),
                Span::styled(pad(status.label(), 9), dim_style),
                Span::styled(pad(&last_login, 17), dim_style),
                Span::styled(user.projects.to_string(), dim_style),
            ]);

            ListItem::new(line)
        })
        .collect();

    let list = List::new(items);
    let mut state = ListState::default();
    state.select(Some(app.users.selected));

    frame.render_stateful_widget(list, area, &mut state);
}
