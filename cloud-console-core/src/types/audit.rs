//! Audit log types

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::status::{Severity, StatusCategory};
use crate::search::Searchable;

/// Kind of resource an audit entry touched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Instance,
    User,
    Security,
    Network,
    Storage,
    System,
}

impl ResourceKind {
    /// Display label
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Instance => "Instance",
            Self::User => "User",
            Self::Security => "Security",
            Self::Network => "Network",
            Self::Storage => "Storage",
            Self::System => "System",
        }
    }

    /// All kinds, in filter-cycling order
    #[must_use]
    pub fn all() -> &'static [ResourceKind] {
        &[
            Self::Instance,
            Self::User,
            Self::Security,
            Self::Network,
            Self::Storage,
            Self::System,
        ]
    }
}

/// Outcome of the audited action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuditOutcome {
    Success,
    Failed,
    Blocked,
}

impl AuditOutcome {
    /// Display label
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Failed => "Failed",
            Self::Blocked => "Blocked",
        }
    }

    /// Presentation category
    #[must_use]
    pub fn category(&self) -> StatusCategory {
        match self {
            Self::Success => StatusCategory::Success,
            Self::Failed | Self::Blocked => StatusCategory::Destructive,
        }
    }
}

/// One audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditEntry {
    /// Entry ID ("log-1a2b3c4d")
    pub id: String,
    /// Time of the action
    #[serde(with = "crate::utils::datetime")]
    pub timestamp: NaiveDateTime,
    /// Acting user (email, or "system")
    pub user: String,
    /// Action label ("Instance Created")
    pub action: String,
    /// Affected resource name
    pub resource: String,
    /// Kind of affected resource
    pub kind: ResourceKind,
    /// Entry severity
    pub severity: Severity,
    /// Source IP, or "internal" for service actions
    pub ip: String,
    /// Client user agent
    pub user_agent: String,
    /// Free-form details
    pub details: String,
    /// Action outcome
    pub outcome: AuditOutcome,
}

impl Searchable for AuditEntry {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.user, &self.action, &self.resource, &self.details]
    }
}

/// Per-category activity counter for the summary row
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivitySummary {
    /// Activity group label ("Instance Operations")
    pub action: String,
    /// Event count in the current window
    pub count: u32,
}
