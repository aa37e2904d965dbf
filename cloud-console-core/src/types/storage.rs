//! Storage volume and snapshot types

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::capacity::Capacity;
use super::status::StatusCategory;
use crate::search::Searchable;

/// Volume attachment status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VolumeStatus {
    Attached,
    Available,
    Error,
    Creating,
}

impl VolumeStatus {
    /// Display label
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Attached => "Attached",
            Self::Available => "Available",
            Self::Error => "Error",
            Self::Creating => "Creating",
        }
    }

    /// Presentation category
    #[must_use]
    pub fn category(&self) -> StatusCategory {
        match self {
            Self::Attached => StatusCategory::Success,
            Self::Available => StatusCategory::Default,
            Self::Error => StatusCategory::Destructive,
            Self::Creating => StatusCategory::Warning,
        }
    }

    /// Whether the indicator dot should pulse
    #[must_use]
    pub fn pulses(&self) -> bool {
        matches!(self, Self::Creating)
    }
}

/// Backing media kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VolumeKind {
    Ssd,
    Hdd,
}

impl VolumeKind {
    /// Display label
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Ssd => "SSD",
            Self::Hdd => "HDD",
        }
    }
}

/// Block storage volume
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Volume {
    /// Volume ID ("vol-1a2b3c4d")
    pub id: String,
    /// Volume name
    pub name: String,
    /// Attachment status
    pub status: VolumeStatus,
    /// Backing media
    pub kind: VolumeKind,
    /// Provisioned size
    pub size: Capacity,
    /// Currently used space
    pub used: Capacity,
    /// Attached instance name, `None` when detached
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance: Option<String>,
    /// Whether the volume is encrypted at rest
    pub encrypted: bool,
    /// Creation date
    pub created: NaiveDate,
    /// Deployment region
    pub region: String,
}

impl Volume {
    /// Used fraction of the provisioned size, rounded to whole percent.
    ///
    /// Zero-sized volumes report 0 rather than dividing by zero.
    #[must_use]
    pub fn usage_percent(&self) -> u8 {
        let size = self.size.gigabytes();
        if size == 0 {
            return 0;
        }
        let pct = self.used.gigabytes() as f64 / size as f64 * 100.0;
        pct.round().clamp(0.0, 100.0) as u8
    }
}

impl Searchable for Volume {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.id]
    }
}

/// Snapshot completion status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SnapshotStatus {
    Completed,
    InProgress,
    Failed,
}

impl SnapshotStatus {
    /// Display label
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Completed => "Completed",
            Self::InProgress => "In progress",
            Self::Failed => "Failed",
        }
    }

    /// Presentation category
    #[must_use]
    pub fn category(&self) -> StatusCategory {
        match self {
            Self::Completed => StatusCategory::Success,
            Self::InProgress => StatusCategory::Warning,
            Self::Failed => StatusCategory::Destructive,
        }
    }

    /// Whether the indicator dot should pulse
    #[must_use]
    pub fn pulses(&self) -> bool {
        matches!(self, Self::InProgress)
    }
}

/// Volume snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// Snapshot ID ("snap-1a2b3c4d")
    pub id: String,
    /// Snapshot name
    pub name: String,
    /// Source volume name
    pub volume: String,
    /// Snapshot size
    pub size: Capacity,
    /// Creation timestamp
    #[serde(with = "crate::utils::datetime")]
    pub created: NaiveDateTime,
    /// Completion status
    pub status: SnapshotStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn volume(size: Capacity, used: Capacity) -> Volume {
        Volume {
            id: "vol-test".to_string(),
            name: "test".to_string(),
            status: VolumeStatus::Attached,
            kind: VolumeKind::Ssd,
            size,
            used,
            instance: None,
            encrypted: false,
            created: NaiveDate::default(),
            region: "us-east-1".to_string(),
        }
    }

    #[test]
    fn usage_percent_rounds() {
        assert_eq!(volume(Capacity::gb(100), Capacity::gb(68)).usage_percent(), 68);
        assert_eq!(volume(Capacity::gb(500), Capacity::gb(245)).usage_percent(), 49);
    }

    #[test]
    fn usage_percent_of_empty_volume_is_zero() {
        assert_eq!(volume(Capacity::gb(0), Capacity::gb(0)).usage_percent(), 0);
    }
}
