//! Security group and firewall rule types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::status::StatusCategory;
use crate::search::Searchable;

/// Security group status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupStatus {
    Active,
    Inactive,
    Warning,
}

impl GroupStatus {
    /// Display label
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
            Self::Warning => "Warning",
        }
    }

    /// Presentation category
    #[must_use]
    pub fn category(&self) -> StatusCategory {
        match self {
            Self::Active => StatusCategory::Success,
            Self::Inactive => StatusCategory::Default,
            Self::Warning => StatusCategory::Warning,
        }
    }
}

/// Traffic direction of a firewall rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleDirection {
    Inbound,
    Outbound,
}

/// Single firewall rule
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityRule {
    /// Traffic direction
    pub direction: RuleDirection,
    /// Protocol name ("HTTP", "SSH", "All")
    pub protocol: String,
    /// Port or port expression ("443", "All")
    pub port: String,
    /// Source CIDR or referenced group ID
    pub source: String,
}

/// Security group
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityGroup {
    /// Group ID ("sg-1a2b3c4d")
    pub id: String,
    /// Group name
    pub name: String,
    /// Human description
    pub description: String,
    /// Group status
    pub status: GroupStatus,
    /// Number of attached instances
    pub instances: u32,
    /// Firewall rules
    pub rules: Vec<SecurityRule>,
    /// Creation date
    pub created: NaiveDate,
    /// Last modification date
    pub modified: NaiveDate,
}

impl SecurityGroup {
    /// Rule count split by direction: `(inbound, outbound)`
    #[must_use]
    pub fn rule_counts(&self) -> (usize, usize) {
        let inbound = self
            .rules
            .iter()
            .filter(|r| r.direction == RuleDirection::Inbound)
            .count();
        (inbound, self.rules.len() - inbound)
    }
}

impl Searchable for SecurityGroup {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.description]
    }
}

/// Severity of a security finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FindingSeverity {
    High,
    Medium,
    Low,
}

impl FindingSeverity {
    /// Display label
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }

    /// Presentation category
    #[must_use]
    pub fn category(&self) -> StatusCategory {
        match self {
            Self::High => StatusCategory::Destructive,
            Self::Medium => StatusCategory::Warning,
            Self::Low => StatusCategory::Default,
        }
    }
}

/// Security finding raised against a group
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityAlert {
    /// Alert ID
    pub id: String,
    /// Finding severity
    pub severity: FindingSeverity,
    /// Short title
    pub title: String,
    /// Detailed description
    pub description: String,
    /// Affected group name
    pub group: String,
    /// Relative time display string ("2 hours ago")
    pub time: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_counts_split_by_direction() {
        let group = SecurityGroup {
            id: "sg-1".to_string(),
            name: "dev".to_string(),
            description: String::new(),
            status: GroupStatus::Active,
            instances: 0,
            rules: vec![
                SecurityRule {
                    direction: RuleDirection::Inbound,
                    protocol: "All".to_string(),
                    port: "All".to_string(),
                    source: "0.0.0.0/0".to_string(),
                },
                SecurityRule {
                    direction: RuleDirection::Outbound,
                    protocol: "All".to_string(),
                    port: "All".to_string(),
                    source: "0.0.0.0/0".to_string(),
                },
            ],
            created: NaiveDate::default(),
            modified: NaiveDate::default(),
        };
        assert_eq!(group.rule_counts(), (1, 1));
    }
}
