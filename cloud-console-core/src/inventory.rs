//! Static demo inventory
//!
//! Every collection the console displays, constructed in code. This module
//! is the fetch boundary: a deployment backed by a real control plane would
//! replace these constructors with API calls returning the same shapes.
//! Collections are ordered; insertion order is display order.

use chrono::{NaiveDate, NaiveDateTime};

use crate::types::{
    ActivitySummary, AlertState, AuditEntry, AuditOutcome, Capacity, ConfigEntry, ConfigSection,
    FindingSeverity, GroupStatus, HealthStatus, Instance, InstanceHealth, InstanceStatus,
    MonitorAlert, Network, NetworkStatus, QuickAlert, ResourceKind, RoleSummary, RuleDirection,
    SecurityAlert, SecurityGroup, SecurityRule, Severity, Snapshot, SnapshotStatus, StatusCategory,
    SystemMetric, Trend, User, UserRole, UserStatus, Volume, VolumeKind, VolumeStatus,
};
use crate::utils::datetime;

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap_or_default()
}

fn ts(s: &str) -> NaiveDateTime {
    datetime::parse(s).unwrap_or_default()
}

/// Compute instances
#[must_use]
pub fn instances() -> Vec<Instance> {
    vec![
        Instance {
            id: "i-1a2b3c4d".to_string(),
            name: "web-server-01".to_string(),
            status: InstanceStatus::Running,
            flavor: "m1.large".to_string(),
            image: "Ubuntu 20.04 LTS".to_string(),
            ip: "192.168.1.10".to_string(),
            uptime: Some("5d 12h".to_string()),
            vcpus: 2,
            memory_gb: 8,
            storage_gb: 80,
        },
        Instance {
            id: "i-2b3c4d5e".to_string(),
            name: "db-primary".to_string(),
            status: InstanceStatus::Running,
            flavor: "m1.xlarge".to_string(),
            image: "CentOS 8".to_string(),
            ip: "192.168.1.20".to_string(),
            uptime: Some("12d 8h".to_string()),
            vcpus: 4,
            memory_gb: 16,
            storage_gb: 160,
        },
        Instance {
            id: "i-3c4d5e6f".to_string(),
            name: "worker-node-03".to_string(),
            status: InstanceStatus::Stopped,
            flavor: "m1.medium".to_string(),
            image: "Ubuntu 18.04 LTS".to_string(),
            ip: "192.168.1.30".to_string(),
            uptime: None,
            vcpus: 2,
            memory_gb: 4,
            storage_gb: 40,
        },
        Instance {
            id: "i-4d5e6f7g".to_string(),
            name: "cache-redis".to_string(),
            status: InstanceStatus::Pending,
            flavor: "m1.small".to_string(),
            image: "Redis 6.2".to_string(),
            ip: "192.168.1.40".to_string(),
            uptime: None,
            vcpus: 1,
            memory_gb: 2,
            storage_gb: 20,
        },
        Instance {
            id: "i-5e6f7g8h".to_string(),
            name: "api-gateway".to_string(),
            status: InstanceStatus::Error,
            flavor: "m1.large".to_string(),
            image: "Ubuntu 20.04 LTS".to_string(),
            ip: "192.168.1.50".to_string(),
            uptime: None,
            vcpus: 2,
            memory_gb: 8,
            storage_gb: 80,
        },
    ]
}

/// Virtual networks
#[must_use]
pub fn networks() -> Vec<Network> {
    vec![
        Network {
            id: "net-1a2b3c4d".to_string(),
            name: "production-vpc".to_string(),
            status: NetworkStatus::Active,
            kind: "Virtual Private Cloud".to_string(),
            subnet: "10.0.0.0/16".to_string(),
            gateway: "10.0.0.1".to_string(),
            instances: 42,
            region: "us-east-1".to_string(),
            created: date("2024-01-15"),
        },
        Network {
            id: "net-2b3c4d5e".to_string(),
            name: "staging-network".to_string(),
            status: NetworkStatus::Active,
            kind: "Public Network".to_string(),
            subnet: "192.168.1.0/24".to_string(),
            gateway: "192.168.1.1".to_string(),
            instances: 8,
            region: "us-east-1".to_string(),
            created: date("2024-02-01"),
        },
        Network {
            id: "net-3c4d5e6f".to_string(),
            name: "dev-subnet".to_string(),
            status: NetworkStatus::Inactive,
            kind: "Private Network".to_string(),
            subnet: "172.16.0.0/24".to_string(),
            gateway: "172.16.0.1".to_string(),
            instances: 0,
            region: "us-west-2".to_string(),
            created: date("2024-01-28"),
        },
        Network {
            id: "net-4d5e6f7g".to_string(),
            name: "dmz-network".to_string(),
            status: NetworkStatus::Active,
            kind: "DMZ Network".to_string(),
            subnet: "203.0.113.0/24".to_string(),
            gateway: "203.0.113.1".to_string(),
            instances: 5,
            region: "us-east-1".to_string(),
            created: date("2024-02-10"),
        },
        Network {
            id: "net-5e6f7g8h".to_string(),
            name: "backup-network".to_string(),
            status: NetworkStatus::Maintenance,
            kind: "Storage Network".to_string(),
            subnet: "10.1.0.0/24".to_string(),
            gateway: "10.1.0.1".to_string(),
            instances: 12,
            region: "us-west-2".to_string(),
            created: date("2024-01-20"),
        },
    ]
}

/// Block storage volumes
#[must_use]
pub fn volumes() -> Vec<Volume> {
    vec![
        Volume {
            id: "vol-1a2b3c4d".to_string(),
            name: "web-server-root".to_string(),
            status: VolumeStatus::Attached,
            kind: VolumeKind::Ssd,
            size: Capacity::gb(100),
            used: Capacity::gb(68),
            instance: Some("web-server-01".to_string()),
            encrypted: true,
            created: date("2024-01-15"),
            region: "us-east-1".to_string(),
        },
        Volume {
            id: "vol-2b3c4d5e".to_string(),
            name: "database-storage".to_string(),
            status: VolumeStatus::Attached,
            kind: VolumeKind::Ssd,
            size: Capacity::gb(500),
            used: Capacity::gb(245),
            instance: Some("db-primary".to_string()),
            encrypted: true,
            created: date("2024-01-18"),
            region: "us-east-1".to_string(),
        },
        Volume {
            id: "vol-3c4d5e6f".to_string(),
            name: "backup-volume".to_string(),
            status: VolumeStatus::Available,
            kind: VolumeKind::Hdd,
            size: Capacity::tb(1),
            used: Capacity::gb(0),
            instance: None,
            encrypted: false,
            created: date("2024-02-01"),
            region: "us-west-2".to_string(),
        },
        Volume {
            id: "vol-4d5e6f7g".to_string(),
            name: "logs-storage".to_string(),
            status: VolumeStatus::Attached,
            kind: VolumeKind::Ssd,
            size: Capacity::gb(200),
            used: Capacity::gb(89),
            instance: Some("log-server".to_string()),
            encrypted: true,
            created: date("2024-01-25"),
            region: "us-east-1".to_string(),
        },
        Volume {
            id: "vol-5e6f7g8h".to_string(),
            name: "temp-storage".to_string(),
            status: VolumeStatus::Error,
            kind: VolumeKind::Hdd,
            size: Capacity::gb(50),
            used: Capacity::gb(12),
            instance: None,
            encrypted: false,
            created: date("2024-02-05"),
            region: "us-west-2".to_string(),
        },
    ]
}

/// Volume snapshots
#[must_use]
pub fn snapshots() -> Vec<Snapshot> {
    vec![
        Snapshot {
            id: "snap-1a2b3c4d".to_string(),
            name: "web-server-backup-daily".to_string(),
            volume: "web-server-root".to_string(),
            size: Capacity::gb(68),
            created: ts("2024-02-15 08:00"),
            status: SnapshotStatus::Completed,
        },
        Snapshot {
            id: "snap-2b3c4d5e".to_string(),
            name: "database-backup-weekly".to_string(),
            volume: "database-storage".to_string(),
            size: Capacity::gb(245),
            created: ts("2024-02-14 02:00"),
            status: SnapshotStatus::Completed,
        },
        Snapshot {
            id: "snap-3c4d5e6f".to_string(),
            name: "logs-backup-monthly".to_string(),
            volume: "logs-storage".to_string(),
            size: Capacity::gb(89),
            created: ts("2024-02-13 23:30"),
            status: SnapshotStatus::InProgress,
        },
    ]
}

/// Security groups
#[must_use]
pub fn security_groups() -> Vec<SecurityGroup> {
    let rule = |direction, protocol: &str, port: &str, source: &str| SecurityRule {
        direction,
        protocol: protocol.to_string(),
        port: port.to_string(),
        source: source.to_string(),
    };

    vec![
        SecurityGroup {
            id: "sg-1a2b3c4d".to_string(),
            name: "web-servers".to_string(),
            description: "Security group for web server instances".to_string(),
            status: GroupStatus::Active,
            instances: 8,
            rules: vec![
                rule(RuleDirection::Inbound, "HTTP", "80", "0.0.0.0/0"),
                rule(RuleDirection::Inbound, "HTTPS", "443", "0.0.0.0/0"),
                rule(RuleDirection::Inbound, "SSH", "22", "10.0.0.0/8"),
            ],
            created: date("2024-01-15"),
            modified: date("2024-02-10"),
        },
        SecurityGroup {
            id: "sg-2b3c4d5e".to_string(),
            name: "database-tier".to_string(),
            description: "Database servers security group".to_string(),
            status: GroupStatus::Active,
            instances: 3,
            rules: vec![
                rule(RuleDirection::Inbound, "MySQL", "3306", "sg-1a2b3c4d"),
                rule(RuleDirection::Inbound, "SSH", "22", "10.0.0.0/8"),
            ],
            created: date("2024-01-18"),
            modified: date("2024-02-05"),
        },
        SecurityGroup {
            id: "sg-3c4d5e6f".to_string(),
            name: "load-balancers".to_string(),
            description: "Load balancer security group".to_string(),
            status: GroupStatus::Active,
            instances: 2,
            rules: vec![
                rule(RuleDirection::Inbound, "HTTP", "80", "0.0.0.0/0"),
                rule(RuleDirection::Inbound, "HTTPS", "443", "0.0.0.0/0"),
            ],
            created: date("2024-01-20"),
            modified: date("2024-01-25"),
        },
        SecurityGroup {
            id: "sg-4d5e6f7g".to_string(),
            name: "monitoring".to_string(),
            description: "Monitoring and logging services".to_string(),
            status: GroupStatus::Inactive,
            instances: 0,
            rules: vec![
                rule(RuleDirection::Inbound, "Custom", "9090", "10.0.0.0/8"),
                rule(RuleDirection::Inbound, "Custom", "3000", "10.0.0.0/8"),
            ],
            created: date("2024-02-01"),
            modified: date("2024-02-01"),
        },
        SecurityGroup {
            id: "sg-5e6f7g8h".to_string(),
            name: "development".to_string(),
            description: "Development environment security group".to_string(),
            status: GroupStatus::Warning,
            instances: 5,
            rules: vec![
                rule(RuleDirection::Inbound, "All", "All", "0.0.0.0/0"),
                rule(RuleDirection::Outbound, "All", "All", "0.0.0.0/0"),
            ],
            created: date("2024-02-05"),
            modified: date("2024-02-14"),
        },
    ]
}

/// Open security findings
#[must_use]
pub fn security_alerts() -> Vec<SecurityAlert> {
    vec![
        SecurityAlert {
            id: "alert-1".to_string(),
            severity: FindingSeverity::High,
            title: "Overly Permissive Rule Detected".to_string(),
            description: "Security group 'development' allows all traffic from anywhere"
                .to_string(),
            group: "development".to_string(),
            time: "2 hours ago".to_string(),
        },
        SecurityAlert {
            id: "alert-2".to_string(),
            severity: FindingSeverity::Medium,
            title: "Unused Security Group".to_string(),
            description: "Security group 'monitoring' has no attached instances".to_string(),
            group: "monitoring".to_string(),
            time: "1 day ago".to_string(),
        },
        SecurityAlert {
            id: "alert-3".to_string(),
            severity: FindingSeverity::Low,
            title: "Rule Modification".to_string(),
            description: "Security group 'web-servers' rules were updated".to_string(),
            group: "web-servers".to_string(),
            time: "3 days ago".to_string(),
        },
    ]
}

/// User accounts
#[must_use]
pub fn users() -> Vec<User> {
    let perms = |keys: &[&str]| keys.iter().map(|k| (*k).to_string()).collect();

    vec![
        User {
            id: "user-1a2b3c4d".to_string(),
            name: "John Anderson".to_string(),
            email: "john.anderson@company.com".to_string(),
            username: "janderson".to_string(),
            role: UserRole::Administrator,
            status: UserStatus::Active,
            last_login: Some(ts("2024-02-15 14:30")),
            created: date("2024-01-15"),
            permissions: perms(&["full_access", "user_management", "system_config"]),
            projects: 8,
        },
        User {
            id: "user-2b3c4d5e".to_string(),
            name: "Sarah Chen".to_string(),
            email: "sarah.chen@company.com".to_string(),
            username: "schen".to_string(),
            role: UserRole::ProjectManager,
            status: UserStatus::Active,
            last_login: Some(ts("2024-02-15 16:45")),
            created: date("2024-01-20"),
            permissions: perms(&["project_access", "instance_management", "network_read"]),
            projects: 3,
        },
        User {
            id: "user-3c4d5e6f".to_string(),
            name: "Michael Rodriguez".to_string(),
            email: "m.rodriguez@company.com".to_string(),
            username: "mrodriguez".to_string(),
            role: UserRole::Developer,
            status: UserStatus::Inactive,
            last_login: Some(ts("2024-02-10 09:15")),
            created: date("2024-01-25"),
            permissions: perms(&["instance_read", "storage_read"]),
            projects: 2,
        },
        User {
            id: "user-4d5e6f7g".to_string(),
            name: "Emma Thompson".to_string(),
            email: "emma.t@company.com".to_string(),
            username: "ethompson".to_string(),
            role: UserRole::SecurityAnalyst,
            status: UserStatus::Active,
            last_login: Some(ts("2024-02-15 11:20")),
            created: date("2024-02-01"),
            permissions: perms(&["security_management", "audit_access", "monitoring_read"]),
            projects: 5,
        },
        User {
            id: "user-5e6f7g8h".to_string(),
            name: "David Kim".to_string(),
            email: "david.kim@company.com".to_string(),
            username: "dkim".to_string(),
            role: UserRole::Viewer,
            status: UserStatus::Pending,
            last_login: None,
            created: date("2024-02-14"),
            permissions: perms(&["read_only"]),
            projects: 0,
        },
    ]
}

/// Role membership overview
#[must_use]
pub fn role_summaries() -> Vec<RoleSummary> {
    let perms = |keys: &[&str]| keys.iter().map(|k| (*k).to_string()).collect();

    vec![
        RoleSummary {
            role: UserRole::Administrator,
            count: 2,
            permissions: perms(&[
                "Full system access",
                "User management",
                "System configuration",
            ]),
        },
        RoleSummary {
            role: UserRole::ProjectManager,
            count: 3,
            permissions: perms(&["Project management", "Instance control", "Network access"]),
        },
        RoleSummary {
            role: UserRole::Developer,
            count: 8,
            permissions: perms(&["Instance access", "Storage access", "Limited network"]),
        },
        RoleSummary {
            role: UserRole::SecurityAnalyst,
            count: 2,
            permissions: perms(&["Security management", "Audit logs", "Monitoring"]),
        },
        RoleSummary {
            role: UserRole::Viewer,
            count: 3,
            permissions: perms(&["Read-only access"]),
        },
    ]
}

/// KPI tiles for the overview page
#[must_use]
pub fn overview_metrics() -> Vec<SystemMetric> {
    let metric = |title: &str,
                  value: &str,
                  description: &str,
                  trend: Option<Trend>,
                  status: StatusCategory| SystemMetric {
        title: title.to_string(),
        value: value.to_string(),
        description: description.to_string(),
        trend,
        status,
    };

    vec![
        metric(
            "Total Instances",
            "142",
            "Active virtual machines",
            Some(Trend {
                value: 12,
                positive: true,
            }),
            StatusCategory::Success,
        ),
        metric(
            "CPU Usage",
            "68%",
            "Cluster average",
            Some(Trend {
                value: 5,
                positive: false,
            }),
            StatusCategory::Warning,
        ),
        metric(
            "Memory Usage",
            "45%",
            "Total RAM utilization",
            Some(Trend {
                value: 2,
                positive: true,
            }),
            StatusCategory::Success,
        ),
        metric(
            "Storage Used",
            "2.3TB",
            "of 4.5TB total storage",
            Some(Trend {
                value: 8,
                positive: false,
            }),
            StatusCategory::Default,
        ),
        metric(
            "Networks",
            "24",
            "Virtual networks",
            None,
            StatusCategory::Success,
        ),
        metric(
            "Active Users",
            "18",
            "Logged in users",
            None,
            StatusCategory::Default,
        ),
    ]
}

/// Quick alerts for the overview page
#[must_use]
pub fn overview_alerts() -> Vec<QuickAlert> {
    vec![
        QuickAlert {
            message: "High CPU usage on web-server-01".to_string(),
            severity: Severity::Warning,
            time: "2 min ago".to_string(),
        },
        QuickAlert {
            message: "Disk space low on vol-001".to_string(),
            severity: Severity::Critical,
            time: "5 min ago".to_string(),
        },
        QuickAlert {
            message: "Network latency spike detected".to_string(),
            severity: Severity::Warning,
            time: "10 min ago".to_string(),
        },
    ]
}

/// Metric tiles for the monitoring page
#[must_use]
pub fn system_metrics() -> Vec<SystemMetric> {
    vec![
        SystemMetric {
            title: "CPU Usage".to_string(),
            value: "68%".to_string(),
            description: "Average across all nodes".to_string(),
            trend: Some(Trend {
                value: 5,
                positive: false,
            }),
            status: StatusCategory::Warning,
        },
        SystemMetric {
            title: "Memory Usage".to_string(),
            value: "45%".to_string(),
            description: "Total RAM utilization".to_string(),
            trend: Some(Trend {
                value: 2,
                positive: true,
            }),
            status: StatusCategory::Success,
        },
        SystemMetric {
            title: "Disk I/O".to_string(),
            value: "234 MB/s".to_string(),
            description: "Combined read/write".to_string(),
            trend: Some(Trend {
                value: 12,
                positive: true,
            }),
            status: StatusCategory::Default,
        },
        SystemMetric {
            title: "Network Traffic".to_string(),
            value: "1.2 GB/s".to_string(),
            description: "Total bandwidth usage".to_string(),
            trend: Some(Trend {
                value: 8,
                positive: false,
            }),
            status: StatusCategory::Success,
        },
    ]
}

/// Monitoring alerts
#[must_use]
pub fn monitor_alerts() -> Vec<MonitorAlert> {
    vec![
        MonitorAlert {
            id: "alert-1".to_string(),
            severity: Severity::Critical,
            title: "High CPU Usage".to_string(),
            description: "CPU usage on node-03 has exceeded 90% for 15 minutes".to_string(),
            instance: "web-server-01".to_string(),
            timestamp: ts("2024-02-15 14:30:00"),
            state: AlertState::Active,
            duration: "15m".to_string(),
        },
        MonitorAlert {
            id: "alert-2".to_string(),
            severity: Severity::Warning,
            title: "Disk Space Low".to_string(),
            description: "Available disk space below 20% on volume vol-001".to_string(),
            instance: "db-primary".to_string(),
            timestamp: ts("2024-02-15 13:45:00"),
            state: AlertState::Acknowledged,
            duration: "1h 5m".to_string(),
        },
        MonitorAlert {
            id: "alert-3".to_string(),
            severity: Severity::Info,
            title: "Network Latency".to_string(),
            description: "Increased response time detected on network interface".to_string(),
            instance: "api-gateway".to_string(),
            timestamp: ts("2024-02-15 12:20:00"),
            state: AlertState::Resolved,
            duration: "2h 30m".to_string(),
        },
        MonitorAlert {
            id: "alert-4".to_string(),
            severity: Severity::Warning,
            title: "Memory Usage High".to_string(),
            description: "Memory usage approaching threshold on cache server".to_string(),
            instance: "cache-redis".to_string(),
            timestamp: ts("2024-02-15 11:15:00"),
            state: AlertState::Active,
            duration: "3h 15m".to_string(),
        },
    ]
}

/// Per-instance utilization snapshot
#[must_use]
pub fn instance_health() -> Vec<InstanceHealth> {
    let health = |instance: &str,
                  status,
                  cpu,
                  memory,
                  disk,
                  network_gbps,
                  uptime: &str,
                  alerts| InstanceHealth {
        instance: instance.to_string(),
        status,
        cpu,
        memory,
        disk,
        network_gbps,
        uptime: uptime.to_string(),
        alerts,
    };

    vec![
        health("web-server-01", HealthStatus::Healthy, 72, 58, 34, 1.2, "5d 12h", 1),
        health("db-primary", HealthStatus::Warning, 45, 78, 89, 0.8, "12d 8h", 1),
        health("api-gateway", HealthStatus::Healthy, 35, 42, 23, 2.1, "8d 16h", 0),
        health("cache-redis", HealthStatus::Critical, 89, 92, 45, 0.3, "3d 4h", 2),
        health("worker-node-03", HealthStatus::Healthy, 28, 35, 67, 0.5, "15d 2h", 0),
    ]
}

/// Audit log entries, newest first
#[must_use]
pub fn audit_entries() -> Vec<AuditEntry> {
    vec![
        AuditEntry {
            id: "log-1a2b3c4d".to_string(),
            timestamp: ts("2024-02-15 14:35:22"),
            user: "john.anderson@company.com".to_string(),
            action: "Instance Created".to_string(),
            resource: "web-server-04".to_string(),
            kind: ResourceKind::Instance,
            severity: Severity::Info,
            ip: "192.168.1.100".to_string(),
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64)".to_string(),
            details: "Created new instance with flavor m1.large".to_string(),
            outcome: AuditOutcome::Success,
        },
        AuditEntry {
            id: "log-2b3c4d5e".to_string(),
            timestamp: ts("2024-02-15 14:28:15"),
            user: "sarah.chen@company.com".to_string(),
            action: "Security Group Modified".to_string(),
            resource: "web-servers".to_string(),
            kind: ResourceKind::Security,
            severity: Severity::Warning,
            ip: "192.168.1.101".to_string(),
            user_agent: "Mozilla/5.0 (macOS; Intel Mac OS X 10_15_7)".to_string(),
            details: "Added new inbound rule for port 8080".to_string(),
            outcome: AuditOutcome::Success,
        },
        AuditEntry {
            id: "log-3c4d5e6f".to_string(),
            timestamp: ts("2024-02-15 14:15:08"),
            user: "system".to_string(),
            action: "Failed Login Attempt".to_string(),
            resource: "authentication".to_string(),
            kind: ResourceKind::Security,
            severity: Severity::Critical,
            ip: "203.0.113.45".to_string(),
            user_agent: "curl/7.68.0".to_string(),
            details: "Multiple failed login attempts from suspicious IP".to_string(),
            outcome: AuditOutcome::Blocked,
        },
        AuditEntry {
            id: "log-4d5e6f7g".to_string(),
            timestamp: ts("2024-02-15 13:58:44"),
            user: "emma.t@company.com".to_string(),
            action: "User Role Changed".to_string(),
            resource: "david.kim@company.com".to_string(),
            kind: ResourceKind::User,
            severity: Severity::Warning,
            ip: "192.168.1.102".to_string(),
            user_agent: "Mozilla/5.0 (Ubuntu; Linux x86_64)".to_string(),
            details: "Changed user role from Viewer to Developer".to_string(),
            outcome: AuditOutcome::Success,
        },
        AuditEntry {
            id: "log-5e6f7g8h".to_string(),
            timestamp: ts("2024-02-15 13:45:12"),
            user: "michael.rodriguez@company.com".to_string(),
            action: "Volume Deleted".to_string(),
            resource: "temp-volume-001".to_string(),
            kind: ResourceKind::Storage,
            severity: Severity::Warning,
            ip: "192.168.1.103".to_string(),
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64)".to_string(),
            details: "Permanently deleted volume temp-volume-001 (50GB)".to_string(),
            outcome: AuditOutcome::Success,
        },
        AuditEntry {
            id: "log-6f7g8h9i".to_string(),
            timestamp: ts("2024-02-15 13:32:30"),
            user: "system".to_string(),
            action: "Network Configuration".to_string(),
            resource: "production-vpc".to_string(),
            kind: ResourceKind::Network,
            severity: Severity::Info,
            ip: "internal".to_string(),
            user_agent: "Cloud Service".to_string(),
            details: "Automatic network configuration update".to_string(),
            outcome: AuditOutcome::Success,
        },
        AuditEntry {
            id: "log-7g8h9i0j".to_string(),
            timestamp: ts("2024-02-15 12:55:18"),
            user: "john.anderson@company.com".to_string(),
            action: "Settings Updated".to_string(),
            resource: "system-config".to_string(),
            kind: ResourceKind::System,
            severity: Severity::Info,
            ip: "192.168.1.100".to_string(),
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64)".to_string(),
            details: "Updated system backup configuration".to_string(),
            outcome: AuditOutcome::Success,
        },
        AuditEntry {
            id: "log-8h9i0j1k".to_string(),
            timestamp: ts("2024-02-15 12:20:45"),
            user: "system".to_string(),
            action: "Backup Completed".to_string(),
            resource: "database-backup-daily".to_string(),
            kind: ResourceKind::Storage,
            severity: Severity::Info,
            ip: "internal".to_string(),
            user_agent: "Backup Service".to_string(),
            details: "Daily database backup completed successfully".to_string(),
            outcome: AuditOutcome::Success,
        },
    ]
}

/// Activity counters for the audit summary row
#[must_use]
pub fn activity_summary() -> Vec<ActivitySummary> {
    let entry = |action: &str, count| ActivitySummary {
        action: action.to_string(),
        count,
    };

    vec![
        entry("Instance Operations", 45),
        entry("User Management", 12),
        entry("Security Changes", 8),
        entry("Network Operations", 23),
        entry("Storage Operations", 18),
        entry("System Configuration", 6),
    ]
}

/// System configuration sections for the settings page
#[must_use]
pub fn config_sections() -> Vec<ConfigSection> {
    let entry = |key: &str, value: &str, status: &str| ConfigEntry {
        key: key.to_string(),
        value: value.to_string(),
        status: status.to_string(),
    };

    vec![
        ConfigSection {
            title: "System Configuration".to_string(),
            description: "Core system settings and preferences".to_string(),
            entries: vec![
                entry("System Timezone", "UTC", "configured"),
                entry("Default Language", "English", "configured"),
                entry("Session Timeout", "30 minutes", "configured"),
                entry("Max Instances per User", "100", "configured"),
            ],
        },
        ConfigSection {
            title: "Network Configuration".to_string(),
            description: "Network and connectivity settings".to_string(),
            entries: vec![
                entry("DNS Servers", "8.8.8.8, 8.8.4.4", "configured"),
                entry("Default Gateway", "10.0.0.1", "configured"),
                entry("DHCP Range", "10.0.0.100-200", "configured"),
                entry("Load Balancer", "Enabled", "active"),
            ],
        },
        ConfigSection {
            title: "Security Settings".to_string(),
            description: "Security policies and authentication".to_string(),
            entries: vec![
                entry("Two-Factor Authentication", "Required", "active"),
                entry("Password Policy", "Strong", "configured"),
                entry("Failed Login Threshold", "5 attempts", "configured"),
                entry("SSL Certificate", "Valid until 2025-03-15", "warning"),
            ],
        },
        ConfigSection {
            title: "Storage Configuration".to_string(),
            description: "Storage and backup settings".to_string(),
            entries: vec![
                entry("Default Storage Type", "SSD", "configured"),
                entry("Auto Backup", "Enabled", "active"),
                entry("Backup Retention", "90 days", "configured"),
                entry("Encryption", "AES-256", "active"),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_unique_ids<T>(items: &[T], id: impl Fn(&T) -> &str) {
        let mut seen: Vec<&str> = items.iter().map(id).collect();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), items.len(), "duplicate id in collection");
    }

    #[test]
    fn collection_sizes_match_the_console() {
        assert_eq!(instances().len(), 5);
        assert_eq!(networks().len(), 5);
        assert_eq!(volumes().len(), 5);
        assert_eq!(snapshots().len(), 3);
        assert_eq!(security_groups().len(), 5);
        assert_eq!(users().len(), 5);
        assert_eq!(monitor_alerts().len(), 4);
        assert_eq!(audit_entries().len(), 8);
        assert_eq!(config_sections().len(), 4);
    }

    #[test]
    fn ids_are_unique_within_each_collection() {
        assert_unique_ids(&instances(), |i| i.id.as_str());
        assert_unique_ids(&networks(), |n| n.id.as_str());
        assert_unique_ids(&volumes(), |v| v.id.as_str());
        assert_unique_ids(&security_groups(), |g| g.id.as_str());
        assert_unique_ids(&users(), |u| u.id.as_str());
        assert_unique_ids(&audit_entries(), |e| e.id.as_str());
    }

    #[test]
    fn mock_timestamps_parse() {
        // A failed parse falls back to the epoch; none of the baked-in
        // values should hit that path.
        for entry in audit_entries() {
            assert!(entry.timestamp > NaiveDateTime::default());
        }
    }
}
