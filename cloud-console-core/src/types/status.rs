//! Presentation categories shared by every resource status enum

use serde::{Deserialize, Serialize};

/// Presentation category a resource status maps to.
///
/// Each status enum owns a total `category()` mapping into this type, so the
/// rendering layer never has to interpret raw status values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusCategory {
    /// Healthy / running / active
    Success,
    /// Degraded, transitional or needs attention
    Warning,
    /// Failed, blocked or dangerous
    Destructive,
    /// Neutral (stopped, informational, unclassified)
    #[default]
    Default,
}

impl StatusCategory {
    /// Classifies a loose status keyword.
    ///
    /// Total over arbitrary input: anything unrecognized lands on
    /// `Default` instead of failing. Used at boundaries that still carry
    /// free-form status strings (settings entries).
    #[must_use]
    pub fn classify(raw: &str) -> Self {
        match raw.to_ascii_lowercase().as_str() {
            "running" | "active" | "attached" | "completed" | "healthy" | "success" => {
                Self::Success
            }
            "pending" | "warning" | "maintenance" | "in_progress" | "acknowledged" => {
                Self::Warning
            }
            "error" | "critical" | "failed" | "blocked" => Self::Destructive,
            _ => Self::Default,
        }
    }
}

/// Shared event severity (monitoring alerts, audit entries).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    Warning,
    Info,
}

impl Severity {
    /// Display label
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Critical => "Critical",
            Self::Warning => "Warning",
            Self::Info => "Info",
        }
    }

    /// Presentation category
    #[must_use]
    pub fn category(&self) -> StatusCategory {
        match self {
            Self::Critical => StatusCategory::Destructive,
            Self::Warning => StatusCategory::Warning,
            Self::Info => StatusCategory::Default,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_known_keywords() {
        assert_eq!(StatusCategory::classify("running"), StatusCategory::Success);
        assert_eq!(StatusCategory::classify("Pending"), StatusCategory::Warning);
        assert_eq!(
            StatusCategory::classify("critical"),
            StatusCategory::Destructive
        );
        assert_eq!(StatusCategory::classify("stopped"), StatusCategory::Default);
    }

    #[test]
    fn classify_unknown_falls_back_to_default() {
        assert_eq!(
            StatusCategory::classify("unknown-value"),
            StatusCategory::Default
        );
        assert_eq!(StatusCategory::classify(""), StatusCategory::Default);
    }

    #[test]
    fn severity_categories() {
        assert_eq!(Severity::Critical.category(), StatusCategory::Destructive);
        assert_eq!(Severity::Warning.category(), StatusCategory::Warning);
        assert_eq!(Severity::Info.category(), StatusCategory::Default);
    }
}
