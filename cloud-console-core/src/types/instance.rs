//! Compute instance types

use serde::{Deserialize, Serialize};

use super::status::StatusCategory;
use crate::search::Searchable;

/// Instance lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InstanceStatus {
    Running,
    Stopped,
    Error,
    Pending,
    Warning,
}

impl InstanceStatus {
    /// Display label
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Running => "Running",
            Self::Stopped => "Stopped",
            Self::Error => "Error",
            Self::Pending => "Pending",
            Self::Warning => "Warning",
        }
    }

    /// Presentation category
    #[must_use]
    pub fn category(&self) -> StatusCategory {
        match self {
            Self::Running => StatusCategory::Success,
            Self::Stopped => StatusCategory::Default,
            Self::Error => StatusCategory::Destructive,
            Self::Pending | Self::Warning => StatusCategory::Warning,
        }
    }

    /// Whether the indicator dot should pulse (transitional state only)
    #[must_use]
    pub fn pulses(&self) -> bool {
        matches!(self, Self::Pending)
    }
}

/// Compute instance
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Instance {
    /// Instance ID ("i-1a2b3c4d")
    pub id: String,
    /// Instance name
    pub name: String,
    /// Lifecycle status
    pub status: InstanceStatus,
    /// Flavor ("m1.large")
    pub flavor: String,
    /// Boot image
    pub image: String,
    /// Primary IP address
    pub ip: String,
    /// Uptime display string, `None` when not running
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uptime: Option<String>,
    /// Virtual CPU count
    pub vcpus: u8,
    /// Memory in GB
    pub memory_gb: u32,
    /// Root storage in GB
    pub storage_gb: u32,
}

impl Searchable for Instance {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.id]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_categories_are_total() {
        assert_eq!(InstanceStatus::Running.category(), StatusCategory::Success);
        assert_eq!(InstanceStatus::Stopped.category(), StatusCategory::Default);
        assert_eq!(
            InstanceStatus::Error.category(),
            StatusCategory::Destructive
        );
        assert_eq!(InstanceStatus::Pending.category(), StatusCategory::Warning);
        assert_eq!(InstanceStatus::Warning.category(), StatusCategory::Warning);
    }

    #[test]
    fn only_pending_pulses() {
        assert!(InstanceStatus::Pending.pulses());
        assert!(!InstanceStatus::Running.pulses());
        assert!(!InstanceStatus::Warning.pulses());
    }
}
