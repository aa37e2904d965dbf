//! Root application state

use super::{
    AuditState, FocusPanel, InstancesState, ModalState, MonitoringState, NavigationState,
    NetworksState, OverviewState, Page, SecurityState, SettingsState, StorageState, UsersState,
};

/// Root application state
pub struct App {
    /// Whether the main loop should exit
    pub should_quit: bool,

    /// Focused panel
    pub focus: FocusPanel,

    /// Navigation panel state
    pub navigation: NavigationState,

    /// Current page
    pub current_page: Page,

    /// Status bar message
    pub status_message: Option<String>,

    /// Render tick, drives pulsing status dots
    pub tick: u64,

    // === Page states ===
    /// Overview page state
    pub overview: OverviewState,
    /// Instances page state
    pub instances: InstancesState,
    /// Networks page state
    pub networks: NetworksState,
    /// Storage page state
    pub storage: StorageState,
    /// Security page state
    pub security: SecurityState,
    /// Users page state
    pub users: UsersState,
    /// Monitoring page state
    pub monitoring: MonitoringState,
    /// Audit logs page state
    pub audit: AuditState,
    /// Settings page state
    pub settings: SettingsState,

    /// Modal dialog state
    pub modal: ModalState,
}

impl App {
    /// Fresh application state with the demo inventory loaded
    pub fn new() -> Self {
        Self {
            should_quit: false,
            focus: FocusPanel::Navigation,
            navigation: NavigationState::new(),
            current_page: Page::Overview,
            status_message: None,
            tick: 0,
            overview: OverviewState::new(),
            instances: InstancesState::new(),
            networks: NetworksState::new(),
            storage: StorageState::new(),
            security: SecurityState::new(),
            users: UsersState::new(),
            monitoring: MonitoringState::new(),
            audit: AuditState::new(),
            settings: SettingsState::new(),
            modal: ModalState::new(),
        }
    }

    /// Set the status bar message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status bar message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Whether the current page's search box is capturing input
    pub fn is_searching(&self) -> bool {
        match self.current_page {
            Page::Instances => self.instances.searching,
            Page::Networks => self.networks.searching,
            Page::Storage => self.storage.searching,
            Page::Security => self.security.searching,
            Page::Users => self.users.searching,
            Page::Monitoring => self.monitoring.searching,
            Page::AuditLogs => self.audit.searching,
            Page::Overview | Page::Settings => false,
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
