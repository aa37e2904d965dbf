//! Monitoring types: metrics, alerts and per-instance health

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::status::{Severity, StatusCategory};
use crate::search::Searchable;

/// Trend attached to a metric tile
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trend {
    /// Percent change against the previous period
    pub value: u32,
    /// Direction of the change
    pub positive: bool,
}

/// One metric tile (dashboard KPIs, monitoring overview)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemMetric {
    /// Tile title ("CPU Usage")
    pub title: String,
    /// Formatted current value ("68%", "1.2 GB/s")
    pub value: String,
    /// Secondary description line
    pub description: String,
    /// Trend against the previous period, if tracked
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trend: Option<Trend>,
    /// Tile accent category
    pub status: StatusCategory,
}

/// Lifecycle state of a monitoring alert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertState {
    Active,
    Acknowledged,
    Resolved,
}

impl AlertState {
    /// Display label
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Acknowledged => "Acknowledged",
            Self::Resolved => "Resolved",
        }
    }

    /// Presentation category
    #[must_use]
    pub fn category(&self) -> StatusCategory {
        match self {
            Self::Active => StatusCategory::Destructive,
            Self::Acknowledged => StatusCategory::Warning,
            Self::Resolved => StatusCategory::Success,
        }
    }
}

/// Monitoring alert
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonitorAlert {
    /// Alert ID
    pub id: String,
    /// Alert severity
    pub severity: Severity,
    /// Short title
    pub title: String,
    /// Detailed description
    pub description: String,
    /// Affected instance name
    pub instance: String,
    /// Time the alert fired
    #[serde(with = "crate::utils::datetime")]
    pub timestamp: NaiveDateTime,
    /// Lifecycle state
    pub state: AlertState,
    /// How long the alert has been open ("1h 5m")
    pub duration: String,
}

impl Searchable for MonitorAlert {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.title, &self.instance]
    }
}

/// Instance health bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Warning,
    Critical,
}

impl HealthStatus {
    /// Display label
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Healthy => "Healthy",
            Self::Warning => "Warning",
            Self::Critical => "Critical",
        }
    }

    /// Presentation category
    #[must_use]
    pub fn category(&self) -> StatusCategory {
        match self {
            Self::Healthy => StatusCategory::Success,
            Self::Warning => StatusCategory::Warning,
            Self::Critical => StatusCategory::Destructive,
        }
    }
}

/// Point-in-time utilization of one instance
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstanceHealth {
    /// Instance name
    pub instance: String,
    /// Overall health bucket
    pub status: HealthStatus,
    /// CPU utilization percent
    pub cpu: u8,
    /// Memory utilization percent
    pub memory: u8,
    /// Disk utilization percent
    pub disk: u8,
    /// Network throughput in GB/s
    pub network_gbps: f32,
    /// Uptime display string
    pub uptime: String,
    /// Open alert count
    pub alerts: u32,
}

/// One-line alert shown on the overview page
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickAlert {
    /// Alert message
    pub message: String,
    /// Alert severity
    pub severity: Severity,
    /// Relative time display string ("2 min ago")
    pub time: String,
}
