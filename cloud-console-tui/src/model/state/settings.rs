//! Settings page state

use cloud_console_core::inventory;
use cloud_console_core::types::ConfigSection;

/// UI theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            Theme::Dark => "Dark",
            Theme::Light => "Light",
        }
    }

    /// Next theme
    pub fn next(&self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Previous theme
    pub fn prev(&self) -> Theme {
        self.next() // only two options, prev and next coincide
    }
}

/// Adjustable setting row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingItem {
    Theme,
    NotifyEmail,
    NotifySms,
    NotifyPush,
    NotifySecurity,
    NotifyMaintenance,
    NotifyBilling,
}

impl SettingItem {
    /// All rows in display order
    pub fn all() -> &'static [SettingItem] {
        &[
            SettingItem::Theme,
            SettingItem::NotifyEmail,
            SettingItem::NotifySms,
            SettingItem::NotifyPush,
            SettingItem::NotifySecurity,
            SettingItem::NotifyMaintenance,
            SettingItem::NotifyBilling,
        ]
    }

    /// Row label
    pub fn label(&self) -> &'static str {
        match self {
            SettingItem::Theme => "Theme",
            SettingItem::NotifyEmail => "Email Notifications",
            SettingItem::NotifySms => "SMS Notifications",
            SettingItem::NotifyPush => "Push Notifications",
            SettingItem::NotifySecurity => "Security Alerts",
            SettingItem::NotifyMaintenance => "Maintenance Windows",
            SettingItem::NotifyBilling => "Billing Updates",
        }
    }

    /// Row from its display index
    pub fn from_index(index: usize) -> Option<SettingItem> {
        Self::all().get(index).copied()
    }
}

/// Notification channel toggles
#[derive(Debug, Clone, Copy)]
pub struct NotificationPrefs {
    pub email: bool,
    pub sms: bool,
    pub push: bool,
    pub security: bool,
    pub maintenance: bool,
    pub billing: bool,
}

impl Default for NotificationPrefs {
    fn default() -> Self {
        Self {
            email: true,
            sms: false,
            push: true,
            security: true,
            maintenance: false,
            billing: true,
        }
    }
}

/// Settings page state
#[derive(Debug)]
pub struct SettingsState {
    /// Currently selected row index
    pub selected_index: usize,
    /// Current theme
    pub theme: Theme,
    /// Notification toggles
    pub notifications: NotificationPrefs,
    /// Read-only system configuration sections
    pub sections: Vec<ConfigSection>,
}

impl Default for SettingsState {
    fn default() -> Self {
        Self {
            selected_index: 0,
            theme: Theme::default(),
            notifications: NotificationPrefs::default(),
            sections: inventory::config_sections(),
        }
    }
}

impl SettingsState {
    /// Default settings state
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of adjustable rows
    pub fn item_count(&self) -> usize {
        SettingItem::all().len()
    }

    /// Select the previous row (wraps)
    pub fn select_previous(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        } else {
            self.selected_index = self.item_count() - 1;
        }
    }

    /// Select the next row (wraps)
    pub fn select_next(&mut self) {
        if self.selected_index < self.item_count() - 1 {
            self.selected_index += 1;
        } else {
            self.selected_index = 0;
        }
    }

    /// Currently selected row
    pub fn current_item(&self) -> Option<SettingItem> {
        SettingItem::from_index(self.selected_index)
    }

    /// Value display string for a row
    pub fn value_label(&self, item: SettingItem) -> &'static str {
        let on_off = |v: bool| if v { "On" } else { "Off" };
        match item {
            SettingItem::Theme => self.theme.label(),
            SettingItem::NotifyEmail => on_off(self.notifications.email),
            SettingItem::NotifySms => on_off(self.notifications.sms),
            SettingItem::NotifyPush => on_off(self.notifications.push),
            SettingItem::NotifySecurity => on_off(self.notifications.security),
            SettingItem::NotifyMaintenance => on_off(self.notifications.maintenance),
            SettingItem::NotifyBilling => on_off(self.notifications.billing),
        }
    }

    /// Switch the selected row to its next value
    pub fn toggle_next(&mut self) {
        match self.current_item() {
            Some(SettingItem::Theme) => self.theme = self.theme.next(),
            Some(item) => self.flip(item),
            None => {}
        }
    }

    /// Switch the selected row to its previous value
    pub fn toggle_prev(&mut self) {
        match self.current_item() {
            Some(SettingItem::Theme) => self.theme = self.theme.prev(),
            Some(item) => self.flip(item),
            None => {}
        }
    }

    fn flip(&mut self, item: SettingItem) {
        let n = &mut self.notifications;
        match item {
            SettingItem::Theme => {}
            SettingItem::NotifyEmail => n.email = !n.email,
            SettingItem::NotifySms => n.sms = !n.sms,
            SettingItem::NotifyPush => n.push = !n.push,
            SettingItem::NotifySecurity => n.security = !n.security,
            SettingItem::NotifyMaintenance => n.maintenance = !n.maintenance,
            SettingItem::NotifyBilling => n.billing = !n.billing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_wraps_in_both_directions() {
        let mut state = SettingsState::new();
        state.select_previous();
        assert_eq!(state.selected_index, state.item_count() - 1);
        state.select_next();
        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn toggling_flips_the_selected_channel() {
        let mut state = SettingsState::new();
        state.selected_index = 2; // SMS
        assert_eq!(state.value_label(SettingItem::NotifySms), "Off");
        state.toggle_next();
        assert_eq!(state.value_label(SettingItem::NotifySms), "On");
        state.toggle_prev();
        assert_eq!(state.value_label(SettingItem::NotifySms), "Off");
    }

    #[test]
    fn theme_cycles_between_two_values() {
        let mut state = SettingsState::new();
        assert_eq!(state.theme, Theme::Dark);
        state.toggle_next();
        assert_eq!(state.theme, Theme::Light);
        state.toggle_next();
        assert_eq!(state.theme, Theme::Dark);
    }
}
