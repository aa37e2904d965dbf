//! Navigation panel state

/// Navigation item ID
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavItemId {
    Overview,
    Instances,
    Networks,
    Storage,
    Users,
    Security,
    Monitoring,
    AuditLogs,
    Settings,
}

/// Navigation item
#[derive(Debug, Clone)]
pub struct NavItem {
    pub id: NavItemId,
    pub label: &'static str,
    pub icon: &'static str,
}

/// Navigation panel state
pub struct NavigationState {
    /// Items in display order
    pub items: Vec<NavItem>,
    /// Currently selected index
    pub selected: usize,
}

impl NavigationState {
    /// Default navigation layout
    pub fn new() -> Self {
        Self {
            items: vec![
                NavItem {
                    id: NavItemId::Overview,
                    label: "Dashboard",
                    icon: "⌂",
                },
                NavItem {
                    id: NavItemId::Instances,
                    label: "Instances",
                    icon: "□",
                },
                NavItem {
                    id: NavItemId::Networks,
                    label: "Networks",
                    icon: "≋",
                },
                NavItem {
                    id: NavItemId::Storage,
                    label: "Storage",
                    icon: "▤",
                },
                NavItem {
                    id: NavItemId::Users,
                    label: "Users & Roles",
                    icon: "@",
                },
                NavItem {
                    id: NavItemId::Security,
                    label: "Security Groups",
                    icon: "◆",
                },
                NavItem {
                    id: NavItemId::Monitoring,
                    label: "Monitoring",
                    icon: "∿",
                },
                NavItem {
                    id: NavItemId::AuditLogs,
                    label: "Audit Logs",
                    icon: "!",
                },
                NavItem {
                    id: NavItemId::Settings,
                    label: "Settings",
                    icon: "≡",
                },
            ],
            selected: 0,
        }
    }

    /// Select the previous item
    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// Select the next item
    pub fn select_next(&mut self) {
        if self.selected < self.items.len().saturating_sub(1) {
            self.selected += 1;
        }
    }

    /// Currently selected item
    pub fn current_item(&self) -> Option<&NavItem> {
        self.items.get(self.selected)
    }

    /// ID of the currently selected item
    pub fn current_id(&self) -> Option<NavItemId> {
        self.current_item().map(|item| item.id)
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new()
    }
}
