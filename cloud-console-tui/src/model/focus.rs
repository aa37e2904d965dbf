//! Focus state

/// Focused panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPanel {
    /// Left navigation panel
    #[default]
    Navigation,
    /// Right content panel
    Content,
}

impl FocusPanel {
    /// Switch to the other panel
    pub fn toggle(&self) -> Self {
        match self {
            FocusPanel::Navigation => FocusPanel::Content,
            FocusPanel::Content => FocusPanel::Navigation,
        }
    }

    /// Whether the navigation panel is focused
    pub fn is_navigation(&self) -> bool {
        matches!(self, FocusPanel::Navigation)
    }

    /// Whether the content panel is focused
    pub fn is_content(&self) -> bool {
        matches!(self, FocusPanel::Content)
    }
}
