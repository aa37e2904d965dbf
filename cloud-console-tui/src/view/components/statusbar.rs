//! Bottom status bar component

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::model::{App, FocusPanel, Page};
use crate::view::theme::Styles;

/// Render the status bar
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let hints = get_hints(app);

    let mut spans = Vec::new();
    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    if let Some(ref msg) = app.status_message {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(msg.clone(), Style::default().fg(Color::Yellow)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::statusbar());
    frame.render_widget(paragraph, area);
}

/// Key hints for the current focus and page
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let mut hints = Vec::new();

    if app.modal.is_open() {
        hints.push(("Enter/Esc", "Close"));
        return hints;
    }

    if app.is_searching() {
        hints.push(("type", "Filter"));
        hints.push(("Enter/Esc", "Done"));
        hints.push(("Ctrl+u", "Clear"));
        return hints;
    }

    hints.push(("Tab", "Switch Panel"));

    match app.focus {
        FocusPanel::Navigation => {
            hints.push(("↑↓", "Navigate"));
            hints.push(("Enter", "Open"));
        }
        FocusPanel::Content => match app.current_page {
            Page::Overview => {}
            Page::Monitoring => {
                hints.push(("↑↓", "Select"));
                hints.push(("/", "Search"));
                hints.push(("←→", "Range"));
            }
            Page::AuditLogs => {
                hints.push(("↑↓", "Select"));
                hints.push(("/", "Search"));
                hints.push(("f", "Type"));
                hints.push(("s", "Severity"));
                hints.push(("Alt+x", "Export"));
            }
            Page::Settings => {
                hints.push(("↑↓", "Select"));
                hints.push(("←→", "Change"));
            }
            _ => {
                hints.push(("↑↓", "Select"));
                hints.push(("/", "Search"));
            }
        },
    }

    hints.push(("Alt+h", "Help"));
    hints.push(("Alt+q", "Quit"));

    hints
}
