//! Content panel updates

use cloud_console_core::services::export_audit_log;

use crate::message::ContentMessage;
use crate::model::{state::SettingItem, App, Page};

/// Apply a content panel message
pub fn update(app: &mut App, msg: ContentMessage) {
    match msg {
        // ========== List navigation ==========
        ContentMessage::SelectPrevious => handle_select_previous(app),
        ContentMessage::SelectNext => handle_select_next(app),
        ContentMessage::SelectFirst => handle_select_first(app),
        ContentMessage::SelectLast => handle_select_last(app),
        ContentMessage::Confirm => handle_confirm(app),

        // ========== Search box ==========
        ContentMessage::SearchStart => set_searching(app, true),
        ContentMessage::SearchExit => set_searching(app, false),
        ContentMessage::SearchInput(ch) => handle_search_input(app, ch),
        ContentMessage::SearchBackspace => handle_search_backspace(app),
        ContentMessage::SearchClear => handle_search_clear(app),

        // ========== Audit log selects ==========
        ContentMessage::CycleKind => handle_cycle_kind(app),
        ContentMessage::CycleSeverity => handle_cycle_severity(app),
        ContentMessage::Export => handle_export(app),

        // ========== Value toggles ==========
        ContentMessage::TogglePrev => handle_toggle(app, false),
        ContentMessage::ToggleNext => handle_toggle(app, true),
    }
}

// ========== List navigation ==========

fn handle_select_previous(app: &mut App) {
    match app.current_page {
        Page::Instances => app.instances.select_previous(),
        Page::Networks => app.networks.select_previous(),
        Page::Storage => app.storage.select_previous(),
        Page::Security => app.security.select_previous(),
        Page::Users => app.users.select_previous(),
        Page::Monitoring => app.monitoring.select_previous(),
        Page::AuditLogs => app.audit.select_previous(),
        Page::Settings => app.settings.select_previous(),
        Page::Overview => {}
    }
}

fn handle_select_next(app: &mut App) {
    match app.current_page {
        Page::Instances => app.instances.select_next(),
        Page::Networks => app.networks.select_next(),
        Page::Storage => app.storage.select_next(),
        Page::Security => app.security.select_next(),
        Page::Users => app.users.select_next(),
        Page::Monitoring => app.monitoring.select_next(),
        Page::AuditLogs => app.audit.select_next(),
        Page::Settings => app.settings.select_next(),
        Page::Overview => {}
    }
}

fn handle_select_first(app: &mut App) {
    match app.current_page {
        Page::Instances => app.instances.select_first(),
        Page::Networks => app.networks.select_first(),
        Page::Storage => app.storage.select_first(),
        Page::Security => app.security.select_first(),
        Page::Users => app.users.select_first(),
        Page::Monitoring => app.monitoring.select_first(),
        Page::AuditLogs => app.audit.select_first(),
        _ => {}
    }
}

fn handle_select_last(app: &mut App) {
    match app.current_page {
        Page::Instances => app.instances.select_last(),
        Page::Networks => app.networks.select_last(),
        Page::Storage => app.storage.select_last(),
        Page::Security => app.security.select_last(),
        Page::Users => app.users.select_last(),
        Page::Monitoring => app.monitoring.select_last(),
        Page::AuditLogs => app.audit.select_last(),
        _ => {}
    }
}

fn handle_confirm(app: &mut App) {
    // No detail pages; confirming surfaces the selection in the status bar.
    let selection = match app.current_page {
        Page::Instances => app.instances.selected_instance().map(|i| i.name.clone()),
        Page::Networks => app.networks.selected_network().map(|n| n.name.clone()),
        Page::Storage => app.storage.selected_volume().map(|v| v.name.clone()),
        Page::Security => app.security.selected_group().map(|g| g.name.clone()),
        Page::Users => app.users.selected_user().map(|u| u.name.clone()),
        Page::Monitoring => app.monitoring.selected_alert().map(|a| a.title.clone()),
        Page::AuditLogs => app.audit.selected_entry().map(|e| e.action.clone()),
        _ => None,
    };

    if let Some(name) = selection {
        app.set_status(format!("Selected: {name}"));
    }
}

// ========== Search box ==========

fn set_searching(app: &mut App, searching: bool) {
    match app.current_page {
        Page::Instances => app.instances.searching = searching,
        Page::Networks => app.networks.searching = searching,
        Page::Storage => app.storage.searching = searching,
        Page::Security => app.security.searching = searching,
        Page::Users => app.users.searching = searching,
        Page::Monitoring => app.monitoring.searching = searching,
        Page::AuditLogs => app.audit.searching = searching,
        Page::Overview | Page::Settings => {}
    }
}

fn handle_search_input(app: &mut App, ch: char) {
    match app.current_page {
        Page::Instances => app.instances.push_query(ch),
        Page::Networks => app.networks.push_query(ch),
        Page::Storage => app.storage.push_query(ch),
        Page::Security => app.security.push_query(ch),
        Page::Users => app.users.push_query(ch),
        Page::Monitoring => app.monitoring.push_query(ch),
        Page::AuditLogs => app.audit.push_query(ch),
        Page::Overview | Page::Settings => {}
    }
}

fn handle_search_backspace(app: &mut App) {
    match app.current_page {
        Page::Instances => app.instances.pop_query(),
        Page::Networks => app.networks.pop_query(),
        Page::Storage => app.storage.pop_query(),
        Page::Security => app.security.pop_query(),
        Page::Users => app.users.pop_query(),
        Page::Monitoring => app.monitoring.pop_query(),
        Page::AuditLogs => app.audit.pop_query(),
        Page::Overview | Page::Settings => {}
    }
}

fn handle_search_clear(app: &mut App) {
    match app.current_page {
        Page::Instances => app.instances.clear_query(),
        Page::Networks => app.networks.clear_query(),
        Page::Storage => app.storage.clear_query(),
        Page::Security => app.security.clear_query(),
        Page::Users => app.users.clear_query(),
        Page::Monitoring => app.monitoring.clear_query(),
        Page::AuditLogs => app.audit.clear_query(),
        Page::Overview | Page::Settings => {}
    }
}

// ========== Audit log selects ==========

fn handle_cycle_kind(app: &mut App) {
    if matches!(app.current_page, Page::AuditLogs) {
        app.audit.cycle_kind();
        let label = app.audit.kind_filter.map_or("All", |k| k.label());
        app.set_status(format!("Type: {label}"));
    }
}

fn handle_cycle_severity(app: &mut App) {
    if matches!(app.current_page, Page::AuditLogs) {
        app.audit.cycle_severity();
        let label = app.audit.severity_filter.map_or("All", |s| s.label());
        app.set_status(format!("Severity: {label}"));
    }
}

fn handle_export(app: &mut App) {
    if !matches!(app.current_page, Page::AuditLogs) {
        return;
    }

    let visible: Vec<_> = app.audit.visible().into_iter().cloned().collect();
    match export_audit_log(&visible) {
        Ok(response) => {
            app.modal.show_export(
                response.suggested_filename,
                response.entry_count,
                response.content.len(),
            );
            app.clear_status();
        }
        Err(err) => {
            app.set_status(format!("Export failed: {err}"));
        }
    }
}

// ========== Value toggles ==========

fn handle_toggle(app: &mut App, forward: bool) {
    match app.current_page {
        Page::Settings => {
            if forward {
                app.settings.toggle_next();
            } else {
                app.settings.toggle_prev();
            }
            sync_theme(app);
        }
        Page::Monitoring => {
            app.monitoring.time_range = if forward {
                app.monitoring.time_range.next()
            } else {
                app.monitoring.time_range.prev()
            };
            app.set_status(format!("Range: {}", app.monitoring.time_range.label()));
        }
        _ => {}
    }
}

// Keep the view layer's palette in step with the settings page
// (index 0 = Dark, 1 = Light).
fn sync_theme(app: &App) {
    if app.settings.current_item() == Some(SettingItem::Theme) {
        let theme_index = match app.settings.theme {
            crate::model::state::Theme::Dark => 0,
            crate::model::state::Theme::Light => 1,
        };
        crate::view::theme::set_theme_index(theme_index);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cloud_console_core::types::Severity;

    #[test]
    fn export_opens_the_result_dialog() {
        let mut app = App::new();
        app.current_page = Page::AuditLogs;
        handle_export(&mut app);
        assert!(app.modal.is_open());
    }

    #[test]
    fn export_of_an_empty_view_reports_the_error() {
        let mut app = App::new();
        app.current_page = Page::AuditLogs;
        for ch in "zzz".chars() {
            handle_search_input(&mut app, ch);
        }
        // Search is page-scoped, so only the audit query changed
        assert!(app.instances.query.is_empty());

        handle_export(&mut app);
        assert!(!app.modal.is_open());
        assert!(app
            .status_message
            .as_deref()
            .is_some_and(|m| m.starts_with("Export failed")));
    }

    #[test]
    fn severity_cycle_updates_the_view() {
        let mut app = App::new();
        app.current_page = Page::AuditLogs;
        handle_cycle_severity(&mut app);
        assert_eq!(app.audit.severity_filter, Some(Severity::Critical));
        assert_eq!(app.audit.visible_len(), 1);
    }
}
