//! The audit use case: evaluate a policy snapshot and assemble the report
//! envelope.

use caguard_domain::config::EffectiveConfig;
use caguard_domain::report::ReportModel;
use caguard_types::{
    AuditData, AuditReport, Policy, PolicyAuditRecord, ToolMeta, SCHEMA_REPORT_V1,
};
use time::OffsetDateTime;

/// Output from the audit use case.
#[derive(Clone, Debug)]
pub struct AuditOutput {
    /// In-memory model, fetch order preserved.
    pub model: ReportModel,
    /// The persisted envelope built from it.
    pub report: AuditReport,
}

/// Evaluate the snapshot and build the report envelope.
pub fn run_audit(policies: &[Policy], cfg: &EffectiveConfig) -> AuditOutput {
    let started_at = OffsetDateTime::now_utc();
    let model = caguard_domain::evaluate_all(policies, cfg);
    let finished_at = OffsetDateTime::now_utc();

    let report = AuditReport {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "caguard".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at,
        finished_at,
        data: AuditData {
            profile: model.profile.clone(),
            policies_scanned: model.entries.len() as u32,
            findings_total: model.findings_total(),
            counts: model.counts.clone(),
        },
        policies: model
            .entries
            .iter()
            .map(|entry| PolicyAuditRecord::from_policy(&entry.policy, entry.findings.clone()))
            .collect(),
    };

    AuditOutput { model, report }
}
