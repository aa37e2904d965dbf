//! Monitoring page state

use cloud_console_core::inventory;
use cloud_console_core::types::{AlertState, InstanceHealth, MonitorAlert, SystemMetric};
use cloud_console_core::{filter_view, Searchable};

/// Selectable observation window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeRange {
    LastHour,
    #[default]
    Last24h,
    Last7d,
    Last30d,
}

impl TimeRange {
    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            Self::LastHour => "Last Hour",
            Self::Last24h => "Last 24h",
            Self::Last7d => "Last 7 days",
            Self::Last30d => "Last 30 days",
        }
    }

    /// Next window (cycles)
    pub fn next(&self) -> Self {
        match self {
            Self::LastHour => Self::Last24h,
            Self::Last24h => Self::Last7d,
            Self::Last7d => Self::Last30d,
            Self::Last30d => Self::LastHour,
        }
    }

    /// Previous window (cycles)
    pub fn prev(&self) -> Self {
        match self {
            Self::LastHour => Self::Last30d,
            Self::Last24h => Self::LastHour,
            Self::Last7d => Self::Last24h,
            Self::Last30d => Self::Last7d,
        }
    }
}

/// Monitoring page state
#[derive(Debug, Default)]
pub struct MonitoringState {
    /// Metric overview tiles
    pub metrics: Vec<SystemMetric>,
    /// Alert collection
    pub alerts: Vec<MonitorAlert>,
    /// Per-instance utilization
    pub health: Vec<InstanceHealth>,
    /// Search box text (alerts only)
    pub query: String,
    /// Whether the search box is capturing input
    pub searching: bool,
    /// Selected index into the filtered alert view
    pub selected: usize,
    /// Observation window
    pub time_range: TimeRange,
}

impl MonitoringState {
    /// State with the demo collections loaded
    pub fn new() -> Self {
        Self {
            metrics: inventory::system_metrics(),
            alerts: inventory::monitor_alerts(),
            health: inventory::instance_health(),
            ..Self::default()
        }
    }

    /// Alerts matching the current query, in collection order
    pub fn visible(&self) -> Vec<&MonitorAlert> {
        filter_view(&self.alerts, &self.query)
    }

    /// Number of visible alerts
    pub fn visible_len(&self) -> usize {
        self.alerts
            .iter()
            .filter(|a| a.matches(&self.query))
            .count()
    }

    /// Number of alerts currently firing (full collection)
    pub fn active_count(&self) -> usize {
        self.alerts
            .iter()
            .filter(|a| a.state == AlertState::Active)
            .count()
    }

    /// Currently selected alert
    pub fn selected_alert(&self) -> Option<&MonitorAlert> {
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
        self.metrics = inventory::system_metrics();
        self.alerts = inventory::monitor_alerts();
        self.health = inventory::instance_health();
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
    fn alerts_match_on_title_and_instance() {
        let mut state = MonitoringState::new();
        for ch in "redis".chars() {
            state.push_query(ch);
        }
        assert_eq!(state.visible_len(), 1);
        assert_eq!(state.visible()[0].title, "Memory Usage High");
    }

    #[test]
    fn active_count_ignores_the_filter() {
        let mut state = MonitoringState::new();
        assert_eq!(state.active_count(), 2);
        for ch in "zzz".chars() {
            state.push_query(ch);
        }
        assert_eq!(state.visible_len(), 0);
        assert_eq!(state.active_count(), 2);
    }

    #[test]
    fn time_range_cycles_both_ways() {
        let range = TimeRange::default();
        assert_eq!(range.next().prev(), range);
        assert_eq!(TimeRange::Last30d.next(), TimeRange::LastHour);
    }
}
