//! Model layer: application state definitions
//!
//! The model is the single source of truth. It holds pure data structures
//! only; every change goes through the update layer, and the view layer
//! reads it without mutating anything.
//!
//! `Page` and the `state/` modules both describe pages, but differently:
//! `Page` is a plain enum saying *which* page is shown, while each state
//! type carries that page's data (collection, search query, selection).

mod app;
mod focus;
mod navigation;
mod page;

pub mod state;

pub use app::App;
pub use focus::FocusPanel;
pub use navigation::{NavItem, NavItemId, NavigationState};
pub use page::Page;
pub use state::{
    AuditState, InstancesState, Modal, ModalState, MonitoringState, NetworksState, OverviewState,
    SecurityState, SettingsState, StorageState, TimeRange, UsersState,
};
