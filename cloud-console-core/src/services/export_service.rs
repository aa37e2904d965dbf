//! Audit log export
//!
//! Serializes a selection of audit entries into a self-describing JSON
//! document. The caller decides what to do with the bytes; nothing here
//! touches the filesystem.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{CoreError, CoreResult};
use crate::types::AuditEntry;

/// Export file format version
const EXPORT_VERSION: u32 = 1;

/// Export document header
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportHeader {
    /// File format version
    pub version: u32,
    /// Unique identifier of this export
    pub export_id: String,
    /// Export timestamp (RFC3339)
    pub exported_at: String,
    /// Application version that produced the file
    pub app_version: String,
    /// Number of entries in the payload
    pub entry_count: usize,
}

/// Complete export document
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditExport {
    /// Document header
    pub header: ExportHeader,
    /// Exported entries, in their display order
    pub data: Vec<AuditEntry>,
}

/// Result handed back to the frontend
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportResponse {
    /// Serialized JSON document
    pub content: String,
    /// Suggested filename
    pub suggested_filename: String,
    /// Number of exported entries
    pub entry_count: usize,
}

/// Exports the given audit entries as a pretty-printed JSON document.
///
/// An empty selection is rejected rather than producing an empty file.
pub fn export_audit_log(entries: &[AuditEntry]) -> CoreResult<ExportResponse> {
    if entries.is_empty() {
        return Err(CoreError::NothingToExport);
    }

    let now = Utc::now();
    let document = AuditExport {
        header: ExportHeader {
            version: EXPORT_VERSION,
            export_id: Uuid::new_v4().to_string(),
            exported_at: now.to_rfc3339(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            entry_count: entries.len(),
        },
        data: entries.to_vec(),
    };

    let content = serde_json::to_string_pretty(&document)
        .map_err(|e| CoreError::SerializationError(e.to_string()))?;

    let suggested_filename = format!("audit-log-{}.json", now.format("%Y%m%d-%H%M%S"));

    log::info!(
        "Exported {} audit entries to {}",
        entries.len(),
        suggested_filename
    );

    Ok(ExportResponse {
        content,
        suggested_filename,
        entry_count: entries.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory;

    #[test]
    fn export_round_trips_through_json() {
        let entries = inventory::audit_entries();
        let response = export_audit_log(&entries).unwrap();

        assert_eq!(response.entry_count, entries.len());
        assert!(response.suggested_filename.starts_with("audit-log-"));
        assert!(response.suggested_filename.ends_with(".json"));

        let parsed: AuditExport = serde_json::from_str(&response.content).unwrap();
        assert_eq!(parsed.header.version, EXPORT_VERSION);
        assert_eq!(parsed.header.entry_count, entries.len());
        assert_eq!(parsed.data.len(), entries.len());
        assert_eq!(parsed.data[0].id, entries[0].id);
    }

    #[test]
    fn empty_selection_is_rejected() {
        let err = export_audit_log(&[]).unwrap_err();
        assert!(matches!(err, CoreError::NothingToExport));
        assert!(err.is_expected());
    }
}
