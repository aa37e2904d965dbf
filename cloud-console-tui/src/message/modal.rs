//! Modal dialog messages

/// Modal dialog message
#[derive(Debug, Clone)]
pub enum ModalMessage {
    /// Close the active dialog
    Close,
}
