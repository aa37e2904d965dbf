//! Users page state

use cloud_console_core::inventory;
use cloud_console_core::types::{RoleSummary, User};
use cloud_console_core::{filter_view, Searchable};

/// Users page state
#[derive(Debug, Default)]
pub struct UsersState {
    /// Full user collection
    pub users: Vec<User>,
    /// Role membership overview
    pub roles: Vec<RoleSummary>,
    /// Search box text
    pub query: String,
    /// Whether the search box is capturing input
    pub searching: bool,
    /// Selected index into the filtered view
    pub selected: usize,
}

impl UsersState {
    /// State with the demo collections loaded
    pub fn new() -> Self {
        Self {
            users: inventory::users(),
            roles: inventory::role_summaries(),
            ..Self::default()
        }
    }

    /// Users matching the current query, in collection order
    pub fn visible(&self) -> Vec<&User> {
        filter_view(&self.users, &self.query)
    }

    /// Number of visible users
    pub fn visible_len(&self) -> usize {
        self.users.iter().filter(|u| u.matches(&self.query)).count()
    }

    /// Currently selected user
    pub fn selected_user(&self) -> Option<&User> {
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
        self.users = inventory::users();
        self.roles = inventory::role_summaries();
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
    fn email_and_username_are_searchable() {
        let mut state = UsersState::new();
        for ch in "chen".chars() {
            state.push_query(ch);
        }
        let view = state.visible();
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].email, "sarah.chen@company.com");

        state.clear_query();
        for ch in "mrodriguez".chars() {
            state.push_query(ch);
        }
        assert_eq!(state.visible_len(), 1);
    }
}
