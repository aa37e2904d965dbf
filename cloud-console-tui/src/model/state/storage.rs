//! Storage page state

use cloud_console_core::inventory;
use cloud_console_core::types::{Snapshot, Volume};
use cloud_console_core::{filter_view, Searchable, StorageSummary};

/// Storage page state
#[derive(Debug, Default)]
pub struct StorageState {
    /// Full volume collection
    pub volumes: Vec<Volume>,
    /// Recent snapshots
    pub snapshots: Vec<Snapshot>,
    /// Search box text (volumes only)
    pub query: String,
    /// Whether the search box is capturing input
    pub searching: bool,
    /// Selected index into the filtered volume view
    pub selected: usize,
}

impl StorageState {
    /// State with the demo collections loaded
    pub fn new() -> Self {
        Self {
            volumes: inventory::volumes(),
            snapshots: inventory::snapshots(),
            ..Self::default()
        }
    }

    /// Volumes matching the current query, in collection order
    pub fn visible(&self) -> Vec<&Volume> {
        filter_view(&self.volumes, &self.query)
    }

    /// Number of visible volumes
    pub fn visible_len(&self) -> usize {
        self.volumes
            .iter()
            .filter(|v| v.matches(&self.query))
            .count()
    }

    /// Capacity totals over the full, unfiltered collection.
    ///
    /// The usage overview ignores the search box on purpose: the gauge
    /// reports the fleet, not the current view.
    pub fn summary(&self) -> StorageSummary {
        StorageSummary::measure(&self.volumes)
    }

    /// Currently selected volume
    pub fn selected_volume(&self) -> Option<&Volume> {
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
        self.volumes = inventory::volumes();
        self.snapshots = inventory::snapshots();
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
    fn summary_ignores_the_search_filter() {
        let mut state = StorageState::new();
        let before = state.summary();

        for ch in "backup".chars() {
            state.push_query(ch);
        }
        assert!(state.visible_len() < state.volumes.len());
        assert_eq!(state.summary(), before);
        assert_eq!(before.total_gb, 1850);
        assert_eq!(before.used_gb, 414);
        assert_eq!(before.usage_percent, 22);
    }
}
