//! Event handling

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, ContentMessage, ModalMessage, NavigationMessage};
use crate::model::{App, Page};

/// Poll for the next terminal event
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Translate a terminal event into a message
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        // Terminal resize redraws automatically on the next frame
        Event::Resize(_, _) => AppMessage::Noop,
        _ => AppMessage::Noop,
    }
}

/// Translate a key event into a message
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // Only Press events; Release/Repeat cause double-firing on Windows
    // terminals.
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // Ctrl+C quits from anywhere, including search mode and dialogs.
    if DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    // An open dialog takes all input.
    if app.modal.is_open() {
        return handle_modal_keys(key);
    }

    // An active search box takes all printable input.
    if app.focus.is_content() && app.is_searching() {
        return handle_search_keys(key);
    }

    // Global shortcuts.
    if DefaultKeymap::HELP.matches(&key)
        || (key.modifiers.is_empty() && key.code == KeyCode::Char('?'))
    {
        return AppMessage::ShowHelp;
    }

    if DefaultKeymap::REFRESH.matches(&key) {
        return AppMessage::Refresh;
    }

    if DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    if DefaultKeymap::BACK.matches(&key) {
        return AppMessage::GoBack;
    }

    // Tab: toggle the focused panel
    if key.modifiers.is_empty() && key.code == KeyCode::Tab {
        return AppMessage::ToggleFocus;
    }

    if app.focus.is_navigation() {
        handle_navigation_keys(key)
    } else {
        handle_content_keys(key, app)
    }
}

/// Keys while the navigation panel is focused
fn handle_navigation_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            AppMessage::Navigation(NavigationMessage::SelectPrevious)
        }
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Navigation(NavigationMessage::SelectNext),
        KeyCode::Enter => AppMessage::Navigation(NavigationMessage::Confirm),
        KeyCode::Home => AppMessage::Navigation(NavigationMessage::SelectFirst),
        KeyCode::End => AppMessage::Navigation(NavigationMessage::SelectLast),
        _ => AppMessage::Noop,
    }
}

/// Keys while the content panel is focused
fn handle_content_keys(key: KeyEvent, app: &App) -> AppMessage {
    if app.current_page.has_search() && DefaultKeymap::SEARCH.matches(&key) {
        return AppMessage::Content(ContentMessage::SearchStart);
    }

    match &app.current_page {
        Page::AuditLogs => handle_audit_keys(key),
        Page::Monitoring => handle_monitoring_keys(key),
        Page::Settings => handle_settings_keys(key),
        _ => handle_list_keys(key),
    }
}

/// Keys while the search box is capturing input
fn handle_search_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::SEARCH_CLEAR.matches(&key) {
        return AppMessage::Content(ContentMessage::SearchClear);
    }

    match key.code {
        // Esc or Enter leaves search mode; the query stays applied.
        KeyCode::Esc | KeyCode::Enter => AppMessage::Content(ContentMessage::SearchExit),
        KeyCode::Backspace => AppMessage::Content(ContentMessage::SearchBackspace),
        // Selection stays reachable without leaving search mode.
        KeyCode::Up => AppMessage::Content(ContentMessage::SelectPrevious),
        KeyCode::Down => AppMessage::Content(ContentMessage::SelectNext),
        KeyCode::Char(ch) if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT => {
            AppMessage::Content(ContentMessage::SearchInput(ch))
        }
        _ => AppMessage::Noop,
    }
}

/// Generic list page keys
fn handle_list_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Content(ContentMessage::SelectPrevious),
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Content(ContentMessage::SelectNext),
        KeyCode::Enter => AppMessage::Content(ContentMessage::Confirm),
        KeyCode::Home => AppMessage::Content(ContentMessage::SelectFirst),
        KeyCode::End => AppMessage::Content(ContentMessage::SelectLast),
        _ => AppMessage::Noop,
    }
}

/// Audit logs page keys
fn handle_audit_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::FILTER_KIND.matches(&key) {
        return AppMessage::Content(ContentMessage::CycleKind);
    }
    if DefaultKeymap::FILTER_SEVERITY.matches(&key) {
        return AppMessage::Content(ContentMessage::CycleSeverity);
    }
    if DefaultKeymap::EXPORT.matches(&key) {
        return AppMessage::Content(ContentMessage::Export);
    }
    handle_list_keys(key)
}

/// Monitoring page keys
fn handle_monitoring_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        // ← →: observation window
        KeyCode::Left => AppMessage::Content(ContentMessage::TogglePrev),
        KeyCode::Right => AppMessage::Content(ContentMessage::ToggleNext),
        _ => handle_list_keys(key),
    }
}

/// Settings page keys
fn handle_settings_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Content(ContentMessage::SelectPrevious),
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Content(ContentMessage::SelectNext),
        KeyCode::Left => AppMessage::Content(ContentMessage::TogglePrev),
        KeyCode::Right | KeyCode::Enter => AppMessage::Content(ContentMessage::ToggleNext),
        _ => AppMessage::Noop,
    }
}

/// Keys while a dialog is open
fn handle_modal_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Enter | KeyCode::Esc => AppMessage::Modal(ModalMessage::Close),
        _ => AppMessage::Noop,
    }
}
