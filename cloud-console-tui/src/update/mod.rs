//! Update layer: state transitions
//!
//! The only place the model is mutated. Each message variant maps to one
//! state change; page-specific handling lives in the submodules.

mod content;
mod navigation;

use crate::message::{AppMessage, ModalMessage};
use crate::model::{App, Page};

/// Apply a message to the application state
pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::ToggleFocus => {
            // Focus stays put while a dialog is open
            if !app.modal.is_open() {
                app.focus = app.focus.toggle();
            }
        }

        AppMessage::Navigation(nav_msg) => {
            navigation::update(app, nav_msg);
        }

        AppMessage::Content(content_msg) => {
            content::update(app, content_msg);
        }

        AppMessage::Modal(ModalMessage::Close) => {
            app.modal.close();
        }

        AppMessage::GoBack => {
            if app.modal.is_open() {
                app.modal.close();
                app.clear_status();
            }
        }

        AppMessage::Refresh => {
            refresh_current_page(app);
            app.set_status("Refreshed");
        }

        AppMessage::ShowHelp => {
            app.modal.show_help();
        }

        AppMessage::ClearStatus => {
            app.clear_status();
        }

        AppMessage::Noop => {}
    }
}

/// Reload the current page's collections from the inventory
fn refresh_current_page(app: &mut App) {
    match app.current_page {
        Page::Overview => app.overview.reload(),
        Page::Instances => app.instances.reload(),
        Page::Networks => app.networks.reload(),
        Page::Storage => app.storage.reload(),
        Page::Security => app.security.reload(),
        Page::Users => app.users.reload(),
        Page::Monitoring => app.monitoring.reload(),
        Page::AuditLogs => app.audit.reload(),
        Page::Settings => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::{ContentMessage, NavigationMessage};
    use crate::model::FocusPanel;

    #[test]
    fn quit_sets_the_exit_flag() {
        let mut app = App::new();
        update(&mut app, AppMessage::Quit);
        assert!(app.should_quit);
    }

    #[test]
    fn navigation_confirm_switches_pages() {
        let mut app = App::new();
        update(&mut app, AppMessage::Navigation(NavigationMessage::SelectNext));
        update(&mut app, AppMessage::Navigation(NavigationMessage::Confirm));
        assert_eq!(app.current_page, Page::Instances);
    }

    #[test]
    fn search_messages_drive_the_page_query() {
        let mut app = App::new();
        app.current_page = Page::Users;
        app.focus = FocusPanel::Content;

        update(&mut app, AppMessage::Content(ContentMessage::SearchStart));
        assert!(app.users.searching);

        for ch in "chen".chars() {
            update(&mut app, AppMessage::Content(ContentMessage::SearchInput(ch)));
        }
        assert_eq!(app.users.visible_len(), 1);

        update(&mut app, AppMessage::Content(ContentMessage::SearchExit));
        assert!(!app.users.searching);
        // Leaving search mode keeps the filter applied
        assert_eq!(app.users.query, "chen");
    }

    #[test]
    fn go_back_closes_an_open_dialog() {
        let mut app = App::new();
        update(&mut app, AppMessage::ShowHelp);
        assert!(app.modal.is_open());
        update(&mut app, AppMessage::GoBack);
        assert!(!app.modal.is_open());
    }
}
