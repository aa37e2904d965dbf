//! Overview (dashboard) page state

use cloud_console_core::inventory;
use cloud_console_core::types::{Instance, QuickAlert, SystemMetric};

/// Overview page state
#[derive(Debug, Default)]
pub struct OverviewState {
    /// KPI tiles
    pub metrics: Vec<SystemMetric>,
    /// Recently active instances
    pub recent_instances: Vec<Instance>,
    /// Latest alerts
    pub alerts: Vec<QuickAlert>,
}

impl OverviewState {
    /// State with the demo collections loaded
    pub fn new() -> Self {
        Self {
            metrics: inventory::overview_metrics(),
            recent_instances: inventory::instances(),
            alerts: inventory::overview_alerts(),
        }
    }

    /// Reload the collections from the inventory
    pub fn reload(&mut self) {
        self.metrics = inventory::overview_metrics();
        self.recent_instances = inventory::instances();
        self.alerts = inventory::overview_alerts();
    }
}
