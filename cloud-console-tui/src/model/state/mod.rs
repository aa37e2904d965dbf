//! Per-page data states
//!
//! Each page owns its collection, its search query and its selection; the
//! query is created with the page state and never shared across pages. The
//! filtered view is recomputed on demand instead of being stored.

mod audit;
mod instances;
mod modal;
mod monitoring;
mod networks;
mod overview;
mod security;
mod settings;
mod storage;
mod users;

pub use audit::AuditState;
pub use instances::InstancesState;
pub use modal::{Modal, ModalState};
pub use monitoring::{MonitoringState, TimeRange};
pub use networks::NetworksState;
pub use overview::OverviewState;
pub use security::SecurityState;
pub use settings::{NotificationPrefs, SettingItem, SettingsState, Theme};
pub use storage::StorageState;
pub use users::UsersState;
