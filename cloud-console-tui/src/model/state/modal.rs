//! Modal dialog state

/// Active modal dialog, with its data
#[derive(Debug, Clone)]
pub enum Modal {
    /// Key binding help
    Help,
    /// Result of an audit log export
    Export {
        /// Suggested filename
        filename: String,
        /// Exported entry count
        entry_count: usize,
        /// Serialized document size in bytes
        bytes: usize,
    },
}

/// Modal container: at most one dialog at a time
#[derive(Debug, Default)]
pub struct ModalState {
    /// `None` = no dialog open
    pub active: Option<Modal>,
}

impl ModalState {
    /// Empty modal state
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a dialog is open
    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    /// Open the help dialog
    pub fn show_help(&mut self) {
        self.active = Some(Modal::Help);
    }

    /// Open the export result dialog
    pub fn show_export(&mut self, filename: String, entry_count: usize, bytes: usize) {
        self.active = Some(Modal::Export {
            filename,
            entry_count,
            bytes,
        });
    }

    /// Close the current dialog
    pub fn close(&mut self) {
        self.active = None;
    }
}
