//! Audit logs page state

use cloud_console_core::inventory;
use cloud_console_core::types::{ActivitySummary, AuditEntry, ResourceKind, Severity};
use cloud_console_core::Searchable;

/// Audit logs page state
#[derive(Debug, Default)]
pub struct AuditState {
    /// Full audit log collection, newest first
    pub entries: Vec<AuditEntry>,
    /// Activity counters for the summary row
    pub summary: Vec<ActivitySummary>,
    /// Search box text
    pub query: String,
    /// Whether the search box is capturing input
    pub searching: bool,
    /// Selected index into the filtered view
    pub selected: usize,
    /// Resource kind select, `None` = all
    pub kind_filter: Option<ResourceKind>,
    /// Severity select, `None` = all
    pub severity_filter: Option<Severity>,
}

impl AuditState {
    /// State with the demo collections loaded
    pub fn new() -> Self {
        Self {
            entries: inventory::audit_entries(),
            summary: inventory::activity_summary(),
            ..Self::default()
        }
    }

    /// Entries passing the search box and both selects, in collection order.
    ///
    /// The three predicates AND together; each one alone is total.
    pub fn visible(&self) -> Vec<&AuditEntry> {
        self.entries
            .iter()
            .filter(|e| e.matches(&self.query))
            .filter(|e| self.kind_filter.map_or(true, |k| e.kind == k))
            .filter(|e| self.severity_filter.map_or(true, |s| e.severity == s))
            .collect()
    }

    /// Number of visible entries
    pub fn visible_len(&self) -> usize {
        self.visible().len()
    }

    /// Currently selected entry
    pub fn selected_entry(&self) -> Option<&AuditEntry> {
        self.visible().into_iter().nth(self.selected)
    }

    /// Cycle the resource kind select: all -> instance -> ... -> system -> all
    pub fn cycle_kind(&mut self) {
        let kinds = ResourceKind::all();
        self.kind_filter = match self.kind_filter {
            None => kinds.first().copied(),
            Some(current) => kinds
                .iter()
                .position(|k| *k == current)
                .and_then(|i| kinds.get(i + 1))
                .copied(),
        };
        self.clamp_selection();
    }

    /// Cycle the severity select: all -> critical -> warning -> info -> all
    pub fn cycle_severity(&mut self) {
        self.severity_filter = match self.severity_filter {
            None => Some(Severity::Critical),
            Some(Severity::Critical) => Some(Severity::Warning),
            Some(Severity::Warning) => Some(Severity::Info),
            Some(Severity::Info) => None,
        };
        self.clamp_selection();
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
        self.entries = inventory::audit_entries();
        self.summary = inventory::activity_summary();
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
    fn search_matches_user_action_resource_and_details() {
        let mut state = AuditState::new();

        for ch in "sarah".chars() {
            state.push_query(ch);
        }
        assert_eq!(state.visible_len(), 1);

        state.clear_query();
        for ch in "port 8080".chars() {
            state.push_query(ch);
        }
        assert_eq!(state.visible_len(), 1);
    }

    #[test]
    fn selects_and_search_compose_with_and() {
        let mut state = AuditState::new();
        state.severity_filter = Some(Severity::Info);
        let info_only = state.visible_len();
        assert_eq!(info_only, 4);

        state.kind_filter = Some(ResourceKind::Storage);
        assert_eq!(state.visible_len(), 1);

        for ch in "backup".chars() {
            state.push_query(ch);
        }
        assert_eq!(state.visible_len(), 1);

        state.push_query('z');
        assert_eq!(state.visible_len(), 0);
    }

    #[test]
    fn kind_select_cycles_back_to_all() {
        let mut state = AuditState::new();
        assert!(state.kind_filter.is_none());
        for _ in 0..ResourceKind::all().len() {
            state.cycle_kind();
            assert!(state.kind_filter.is_some());
        }
        state.cycle_kind();
        assert!(state.kind_filter.is_none());
    }
}
