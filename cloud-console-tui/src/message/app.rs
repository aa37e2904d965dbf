//! Root message enumeration

use super::{ContentMessage, ModalMessage, NavigationMessage};

/// Root application message
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// Quit the application
    Quit,

    /// Toggle the focused panel (left/right)
    ToggleFocus,

    /// Navigation panel messages
    Navigation(NavigationMessage),

    /// Content panel messages
    Content(ContentMessage),

    /// Modal dialog messages
    Modal(ModalMessage),

    /// Leave the current context (close dialog, exit search)
    GoBack,

    /// Reload the current page's collections
    Refresh,

    /// Open the help dialog
    ShowHelp,

    /// Clear the status bar message
    ClearStatus,

    /// No operation (unhandled event)
    Noop,
}
