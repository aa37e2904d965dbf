//! Settings page view

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::model::state::SettingItem;
use crate::model::App;
use crate::view::components::badge;
use crate::view::text::pad;
use crate::view::theme::colors;

/// Render the settings page
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let rows = app.settings.item_count() as u16 + 2;
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(rows), Constraint::Min(1)])
        .split(area);

    render_preferences(app, frame, layout[0]);
    render_sections(app, frame, layout[1]);
}

/// Adjustable rows: theme and notification toggles
fn render_preferences(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();

    let block = Block::default()
        .title(" Preferences ")
        .title_style(Style::default().fg(c.fg).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let items: Vec<ListItem> = SettingItem::all()
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let is_selected = i == app.settings.selected_index;
            let prefix = if is_selected { "▶ " } else { "  " };

            let style = if is_selected {
                Style::default()
                    .bg(c.selected_bg)
                    .fg(c.selected_fg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(c.fg)
            };

            let value = app.settings.value_label(*item);
            let line = Line::from(vec![
                Span::styled(format!("{prefix}{}", pad(item.label(), 24)), style),
                Span::styled(format!("‹ {value} ›"), style),
            ]);

            ListItem::new(line)
        })
        .collect();

    let list = List::new(items);
    let mut state = ListState::default();
    state.select(Some(app.settings.selected_index));

    frame.render_stateful_widget(list, inner, &mut state);
}

/// Read-only configuration sections
fn render_sections(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let count = app.settings.sections.len().max(1) as u32;

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(
            app.settings
                .sections
                .iter()
                .map(|_| Constraint::Ratio(1, count))
                .collect::<Vec<_>>(),
        )
        .split(area);

    for (section, column) in app.settings.sections.iter().zip(columns.iter()) {
        let warnings = section.warning_count();
        let title = if warnings > 0 {
            format!(" {} ({warnings}!) ", section.title)
        } else {
            format!(" {} ", section.title)
        };

        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(c.border));
        let inner = block.inner(*column);
        frame.render_widget(block, *column);

        let mut lines = vec![Line::from(Span::styled(
            format!(" {}", section.description),
            Style::default().fg(c.muted),
        ))];

        for entry in &section.entries {
            lines.push(Line::from(vec![
                Span::raw(" "),
                badge::dot(entry.category(), false, app.tick),
                Span::raw(" "),
                Span::styled(pad(&entry.key, 20), Style::default().fg(c.fg)),
                Span::styled(entry.value.clone(), Style::default().fg(c.muted)),
            ]));
        }

        frame.render_widget(Paragraph::new(lines), inner);
    }
}
