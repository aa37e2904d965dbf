//! Storage aggregate computation

use serde::{Deserialize, Serialize};

use crate::types::Volume;

/// Capacity totals across the whole (unfiltered) volume collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageSummary {
    /// Provisioned capacity in GB
    pub total_gb: u64,
    /// Used capacity in GB
    pub used_gb: u64,
    /// Used fraction, rounded to whole percent (0-100)
    pub usage_percent: u8,
}

impl StorageSummary {
    /// Folds the volume collection into capacity totals.
    ///
    /// Works on normalized gigabyte values, so mixed GB/TB sizes sum
    /// correctly. An empty collection yields all zeros.
    #[must_use]
    pub fn measure(volumes: &[Volume]) -> Self {
        let total_gb: u64 = volumes.iter().map(|v| v.size.gigabytes()).sum();
        let used_gb: u64 = volumes.iter().map(|v| v.used.gigabytes()).sum();

        let usage_percent = if total_gb == 0 {
            0
        } else {
            (used_gb as f64 / total_gb as f64 * 100.0).round().clamp(0.0, 100.0) as u8
        };

        Self {
            total_gb,
            used_gb,
            usage_percent,
        }
    }

    /// Unused capacity in GB
    #[must_use]
    pub const fn available_gb(&self) -> u64 {
        self.total_gb.saturating_sub(self.used_gb)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory;
    use crate::types::{Capacity, Volume, VolumeKind, VolumeStatus};
    use chrono::NaiveDate;

    fn volume(size: Capacity, used: Capacity) -> Volume {
        Volume {
            id: "vol-test".to_string(),
            name: "test".to_string(),
            status: VolumeStatus::Available,
            kind: VolumeKind::Hdd,
            size,
            used,
            instance: None,
            encrypted: false,
            created: NaiveDate::default(),
            region: "us-east-1".to_string(),
        }
    }

    #[test]
    fn mixed_units_sum_in_gigabytes() {
        let volumes = vec![
            volume(Capacity::gb(100), Capacity::gb(68)),
            volume(Capacity::gb(500), Capacity::gb(245)),
            volume(Capacity::tb(1), Capacity::gb(0)),
            volume(Capacity::gb(200), Capacity::gb(89)),
            volume(Capacity::gb(50), Capacity::gb(12)),
        ];

        let summary = StorageSummary::measure(&volumes);
        assert_eq!(summary.total_gb, 1850);
        assert_eq!(summary.used_gb, 414);
        assert_eq!(summary.usage_percent, 22);
        assert_eq!(summary.available_gb(), 1436);
    }

    #[test]
    fn empty_collection_is_all_zeros() {
        let summary = StorageSummary::measure(&[]);
        assert_eq!(summary.total_gb, 0);
        assert_eq!(summary.used_gb, 0);
        assert_eq!(summary.usage_percent, 0);
    }

    #[test]
    fn inventory_volumes_match_the_overview_numbers() {
        let summary = StorageSummary::measure(&inventory::volumes());
        assert_eq!(summary.total_gb, 1850);
        assert_eq!(summary.used_gb, 414);
        assert_eq!(summary.usage_percent, 22);
    }
}
