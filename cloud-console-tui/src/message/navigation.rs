//! Navigation panel messages

/// Navigation panel message
#[derive(Debug, Clone)]
pub enum NavigationMessage {
    /// Select the previous item
    SelectPrevious,
    /// Select the next item
    SelectNext,
    /// Jump to the first item
    SelectFirst,
    /// Jump to the last item
    SelectLast,
    /// Open the selected page
    Confirm,
}
