//! System configuration display types

use serde::{Deserialize, Serialize};

use super::status::StatusCategory;

/// One configuration entry inside a section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigEntry {
    /// Setting name ("Session Timeout")
    pub key: String,
    /// Current value display string
    pub value: String,
    /// Loose status keyword ("configured", "active", "warning")
    pub status: String,
}

impl ConfigEntry {
    /// Presentation category of the loose status keyword.
    ///
    /// Falls back to `Default` for anything unrecognized.
    #[must_use]
    pub fn category(&self) -> StatusCategory {
        StatusCategory::classify(&self.status)
    }
}

/// Group of related configuration entries
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigSection {
    /// Section title ("Network Configuration")
    pub title: String,
    /// Section description
    pub description: String,
    /// Entries in display order
    pub entries: Vec<ConfigEntry>,
}

impl ConfigSection {
    /// Number of entries whose status classifies as `Warning`
    #[must_use]
    pub fn warning_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| e.category() == StatusCategory::Warning)
            .count()
    }
}
