//! Page routing state

/// Console page enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    /// Overview dashboard
    #[default]
    Overview,
    /// Compute instances
    Instances,
    /// Virtual networks
    Networks,
    /// Volumes and snapshots
    Storage,
    /// Security groups
    Security,
    /// Users and roles
    Users,
    /// Monitoring
    Monitoring,
    /// Audit logs
    AuditLogs,
    /// Settings
    Settings,
}

impl Page {
    /// Page title
    pub fn title(&self) -> &'static str {
        match self {
            Page::Overview => "Dashboard",
            Page::Instances => "Instances",
            Page::Networks => "Networks",
            Page::Storage => "Storage",
            Page::Security => "Security Groups",
            Page::Users => "Users & Roles",
            Page::Monitoring => "Monitoring",
            Page::AuditLogs => "Audit Logs",
            Page::Settings => "Settings",
        }
    }

    /// Whether the page has a search box
    pub fn has_search(&self) -> bool {
        !matches!(self, Page::Overview | Page::Settings)
    }
}
