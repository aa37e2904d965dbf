//! Networks page state

use cloud_console_core::inventory;
use cloud_console_core::types::Network;
use cloud_console_core::{filter_view, Searchable};

/// Networks page state
#[derive(Debug, Default)]
pub struct NetworksState {
    /// Full network collection
    pub networks: Vec<Network>,
    /// Search box text
    pub query: String,
    /// Whether the search box is capturing input
    pub searching: bool,
    /// Selected index into the filtered view
    pub selected: usize,
}

impl NetworksState {
    /// State with the demo collection loaded
    pub fn new() -> Self {
        Self {
            networks: inventory::networks(),
            ..Self::default()
        }
    }

    /// Records matching the current query, in collection order
    pub fn visible(&self) -> Vec<&Network> {
        filter_view(&self.networks, &self.query)
    }

    /// Number of visible records
    pub fn visible_len(&self) -> usize {
        self.networks
            .iter()
            .filter(|n| n.matches(&self.query))
            .count()
    }

    /// Currently selected record
    pub fn selected_network(&self) -> Option<&Network> {
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

    /// Reload the collection from the inventory
    pub fn reload(&mut self) {
        self.networks = inventory::networks();
        self.clamp_selection();
    }

    fn clamp_selection(&mut self) {
        self.selected = self.selected.min(self.visible_len().saturating_sub(1));
    }
}
