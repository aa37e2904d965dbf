//! User account and role types

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::status::StatusCategory;
use crate::search::Searchable;

/// Assignable role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Administrator,
    ProjectManager,
    Developer,
    SecurityAnalyst,
    Viewer,
}

impl UserRole {
    /// Display label
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Administrator => "Administrator",
            Self::ProjectManager => "Project Manager",
            Self::Developer => "Developer",
            Self::SecurityAnalyst => "Security Analyst",
            Self::Viewer => "Viewer",
        }
    }
}

/// Account status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Active,
    Inactive,
    Pending,
    Suspended,
}

impl UserStatus {
    /// Display label
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
            Self::Pending => "Pending",
            Self::Suspended => "Suspended",
        }
    }

    /// Presentation category
    #[must_use]
    pub fn category(&self) -> StatusCategory {
        match self {
            Self::Active => StatusCategory::Success,
            Self::Inactive => StatusCategory::Default,
            Self::Pending => StatusCategory::Warning,
            Self::Suspended => StatusCategory::Destructive,
        }
    }

    /// Whether the indicator dot should pulse
    #[must_use]
    pub fn pulses(&self) -> bool {
        matches!(self, Self::Pending)
    }
}

/// User account
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// User ID ("user-1a2b3c4d")
    pub id: String,
    /// Full name
    pub name: String,
    /// Email address
    pub email: String,
    /// Login name
    pub username: String,
    /// Assigned role
    pub role: UserRole,
    /// Account status
    pub status: UserStatus,
    /// Last successful login, `None` when the account never logged in
    #[serde(with = "crate::utils::datetime::option")]
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub last_login: Option<NaiveDateTime>,
    /// Account creation date
    pub created: NaiveDate,
    /// Granted permission keys
    pub permissions: Vec<String>,
    /// Number of projects the user belongs to
    pub projects: u32,
}

impl User {
    /// Avatar initials derived from the full name ("Sarah Chen" -> "SC")
    #[must_use]
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }
}

impl Searchable for User {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.email, &self.username]
    }
}

/// Aggregated role membership shown on the roles overview
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleSummary {
    /// The role
    pub role: UserRole,
    /// Number of members holding it
    pub count: u32,
    /// Permission descriptions
    pub permissions: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_from_full_name() {
        let user = User {
            id: "user-1".to_string(),
            name: "Sarah Chen".to_string(),
            email: "sarah.chen@company.com".to_string(),
            username: "schen".to_string(),
            role: UserRole::ProjectManager,
            status: UserStatus::Active,
            last_login: None,
            created: NaiveDate::default(),
            permissions: vec![],
            projects: 3,
        };
        assert_eq!(user.initials(), "SC");
    }

    #[test]
    fn suspended_is_destructive() {
        assert_eq!(
            UserStatus::Suspended.category(),
            StatusCategory::Destructive
        );
        assert!(UserStatus::Pending.pulses());
        assert!(!UserStatus::Active.pulses());
    }
}
