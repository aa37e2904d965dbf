//! Core services

pub mod export_service;

pub use export_service::{export_audit_log, AuditExport, ExportHeader, ExportResponse};
