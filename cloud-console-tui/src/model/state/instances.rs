//! Instances page state

use cloud_console_core::inventory;
use cloud_console_core::types::Instance;
use cloud_console_core::{filter_view, Searchable};

/// Instances page state
#[derive(Debug, Default)]
pub struct InstancesState {
    /// Full instance collection
    pub instances: Vec<Instance>,
    /// Search box text
    pub query: String,
    /// Whether the search box is capturing input
    pub searching: bool,
    /// Selected index into the filtered view
    pub selected: usize,
}

impl InstancesState {
    /// State with the demo collection loaded
    pub fn new() -> Self {
        Self {
            instances: inventory::instances(),
            ..Self::default()
        }
    }

    /// Records matching the current query, in collection order.
    ///
    /// Recomputed on every call; nothing is cached.
    pub fn visible(&self) -> Vec<&Instance> {
        filter_view(&self.instances, &self.query)
    }

    /// Number of visible records
    pub fn visible_len(&self) -> usize {
        self.instances
            .iter()
            .filter(|i| i.matches(&self.query))
            .count()
    }

    /// Currently selected record
    pub fn selected_instance(&self) -> Option<&Instance> {
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
        self.instances = inventory::instances();
        self.clamp_selection();
    }

    // Narrowing the filter can drop the selected row; keep the cursor
    // inside the new view.
    fn clamp_selection(&mut self) {
        self.selected = self.selected.min(self.visible_len().saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typing_narrows_the_view_per_keystroke() {
        let mut state = InstancesState::new();
        assert_eq!(state.visible_len(), 5);

        for ch in "web".chars() {
            state.push_query(ch);
        }
        assert_eq!(state.visible_len(), 1);
        assert_eq!(state.visible()[0].name, "web-server-01");

        state.push_query('z');
        assert_eq!(state.visible_len(), 0);

        state.pop_query();
        assert_eq!(state.visible_len(), 1);
    }

    #[test]
    fn selection_clamps_when_the_view_shrinks() {
        let mut state = InstancesState::new();
        state.select_last();
        assert_eq!(state.selected, 4);

        for ch in "db".chars() {
            state.push_query(ch);
        }
        assert_eq!(state.visible_len(), 1);
        assert_eq!(state.selected, 0);
        assert_eq!(state.selected_instance().map(|i| i.name.as_str()), Some("db-primary"));
    }

    #[test]
    fn clear_query_restores_the_full_view() {
        let mut state = InstancesState::new();
        state.push_query('x');
        state.push_query('y');
        state.clear_query();
        assert_eq!(state.visible_len(), state.instances.len());
    }
}
