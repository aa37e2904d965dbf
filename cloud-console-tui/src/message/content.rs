//! Content panel messages
//!
//! Covers list navigation, search box editing and the page-local toggles.

/// Content panel message
#[derive(Debug, Clone)]
pub enum ContentMessage {
    // ========== List navigation ==========
    /// Select the previous item
    SelectPrevious,
    /// Select the next item
    SelectNext,
    /// Jump to the first item
    SelectFirst,
    /// Jump to the last item
    SelectLast,
    /// Act on the selected item
    Confirm,

    // ========== Search box ==========
    /// Start capturing search input
    SearchStart,
    /// Append a character to the query
    SearchInput(char),
    /// Delete the last query character
    SearchBackspace,
    /// Clear the query while staying in search mode
    SearchClear,
    /// Stop capturing search input (the query stays applied)
    SearchExit,

    // ========== Audit log selects ==========
    /// Cycle the resource kind select
    CycleKind,
    /// Cycle the severity select
    CycleSeverity,
    /// Export the filtered audit entries
    Export,

    // ========== Value toggles (settings, monitoring window) ==========
    /// Switch the selected row to its previous value
    TogglePrev,
    /// Switch the selected row to its next value
    ToggleNext,
}
