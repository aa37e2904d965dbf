//! Core type definitions
//!
//! One module per resource kind, mirroring the console pages. Every record
//! carries an opaque `id`, a `name` and a closed status enum with a total
//! mapping into [`status::StatusCategory`].

pub mod audit;
pub mod capacity;
pub mod instance;
pub mod monitoring;
pub mod network;
pub mod security;
pub mod settings;
pub mod status;
pub mod storage;
pub mod user;

pub use audit::{ActivitySummary, AuditEntry, AuditOutcome, ResourceKind};
pub use capacity::{Capacity, CapacityUnit};
pub use instance::{Instance, InstanceStatus};
pub use monitoring::{
    AlertState, HealthStatus, InstanceHealth, MonitorAlert, QuickAlert, SystemMetric, Trend,
};
pub use network::{Network, NetworkStatus};
pub use security::{
    FindingSeverity, GroupStatus, RuleDirection, SecurityAlert, SecurityGroup, SecurityRule,
};
pub use settings::{ConfigEntry, ConfigSection};
pub use status::{Severity, StatusCategory};
pub use storage::{Snapshot, SnapshotStatus, Volume, VolumeKind, VolumeStatus};
pub use user::{RoleSummary, User, UserRole, UserStatus};
