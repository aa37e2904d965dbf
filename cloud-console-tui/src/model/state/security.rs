//! Security page state

use cloud_console_core::inventory;
use cloud_console_core::types::{SecurityAlert, SecurityGroup};
use cloud_console_core::{filter_view, Searchable};

/// Security page state
#[derive(Debug, Default)]
pub struct SecurityState {
    /// Full security group collection
    pub groups: Vec<SecurityGroup>,
    /// Open security findings
    pub alerts: Vec<SecurityAlert>,
    /// Search box text (groups only)
    pub query: String,
    /// Whether the search box is capturing input
    pub searching: bool,
    /// Selected index into the filtered group view
    pub selected: usize,
}

impl SecurityState {
    /// State with the demo collections loaded
    pub fn new() -> Self {
        Self {
            groups: inventory::security_groups(),
            alerts: inventory::security_alerts(),
            ..Self::default()
        }
    }

    /// Groups matching the current query, in collection order
    pub fn visible(&self) -> Vec<&SecurityGroup> {
        filter_view(&self.groups, &self.query)
    }

    /// Number of visible groups
    pub fn visible_len(&self) -> usize {
        self.groups
            .iter()
            .filter(|g| g.matches(&self.query))
            .count()
    }

    /// Currently selected group
    pub fn selected_group(&self) -> Option<&SecurityGroup> {
        self.visible().into_iter().nth(self.selected)
    }

    /// Select the previous item
    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// Select the next item
    pub fn select_next(&mut self) {
        if self.selected + 1 < self.visible_len() {
            self.selected += 1;
        }
    }

    /// Jump to the first item
    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    /// Jump to the last item
    pub fn select_last(&mut self) {
        self.selected = self.visible_len().saturating_sub(1);
    }

    /// Append a character to the query and re-filter
    pub fn push_query(&mut self, ch: char) {
        self.query.push(ch);
        self.clamp_selection();
    }

    /// Remove the last query character and re-filter
    pub fn pop_query(&mut self) {
        self.query.pop();
        self.clamp_selection();
    }

    /// Clear the query entirely
    pub fn clear_query(&mut self) {
        self.query.clear();
        self.clamp_selection();
    }

    /// Reload the collections from the inventory
    pub fn reload(&mut self) {
        self.groups = inventory::security_groups();
        self.alerts = inventory::security_alerts();
        self.clamp_selection();
    }

    fn clamp_selection(&mut self) {
        self.selected = self.selected.min(self.visible_len().saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn description_is_a_designated_search_field() {
        let mut state = SecurityState::new();
        for ch in "load balancer".chars() {
            state.push_query(ch);
        }
        let view = state.visible();
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].name, "load-balancers");
    }
}
