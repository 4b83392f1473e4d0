//! Stable DTOs and IDs used across the caguard workspace.
//!
//! This crate is intentionally boring:
//! - the Conditional Access policy wire model
//! - data types for the emitted audit report
//! - the five-key export projection
//! - stable rule ID strings
//! - explain registry for remediation guidance

#![forbid(unsafe_code)]

pub mod explain;
pub mod export;
pub mod ids;
pub mod policy;
pub mod report;

pub use explain::{lookup_explanation, ExamplePair, Explanation};
pub use export::{ExportPolicy, SCHEMA_EXPORT_V1};
pub use policy::{ApplicationScope, Conditions, Policy, PolicyState, UserScope};
pub use report::{
    AuditCounts, AuditData, AuditReport, Finding, PolicyAuditRecord, RuleId, Severity, ToolMeta,
    SCHEMA_REPORT_V1,
};
