//! Virtual network types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::status::StatusCategory;
use crate::search::Searchable;

/// Network status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkStatus {
    Active,
    Inactive,
    Warning,
    Maintenance,
}

impl NetworkStatus {
    /// Display label
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
            Self::Warning => "Warning",
            Self::Maintenance => "Maintenance",
        }
    }

    /// Presentation category
    #[must_use]
    pub fn category(&self) -> StatusCategory {
        match self {
            Self::Active => StatusCategory::Success,
            Self::Inactive => StatusCategory::Default,
            Self::Warning | Self::Maintenance => StatusCategory::Warning,
        }
    }
}

/// Virtual network
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Network {
    /// Network ID ("net-1a2b3c4d")
    pub id: String,
    /// Network name
    pub name: String,
    /// Network status
    pub status: NetworkStatus,
    /// Network kind ("Virtual Private Cloud", "DMZ Network", ...)
    pub kind: String,
    /// Subnet in CIDR notation
    pub subnet: String,
    /// Gateway address
    pub gateway: String,
    /// Number of connected instances
    pub instances: u32,
    /// Deployment region
    pub region: String,
    /// Creation date
    pub created: NaiveDate,
}

impl Searchable for Network {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.id]
    }
}
