//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// A formatted quantity could not be parsed ("100 GB", "1 TB")
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Validation error
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Nothing matched the export selection
    #[error("No entries selected for export")]
    NothingToExport,

    /// Export error
    #[error("Export error: {0}")]
    ExportError(String),
}

impl CoreError {
    /// Whether it is expected behavior (user input, empty selection, etc.), used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::InvalidQuantity(_) | Self::ValidationError(_) | Self::NothingToExport
        )
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
