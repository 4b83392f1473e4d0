//! Envelope (de)serialization and conversion into the render model.

use anyhow::Context;
use caguard_render::{RenderableFinding, RenderablePolicy, RenderableReport, RenderableSeverity};
use caguard_types::{AuditReport, Severity, SCHEMA_REPORT_V1};
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

pub fn parse_report_json(text: &str) -> anyhow::Result<AuditReport> {
    let report: AuditReport = serde_json::from_str(text).context("parse report json")?;
    if report.schema != SCHEMA_REPORT_V1 {
        anyhow::bail!("unknown report schema: {}", report.schema);
    }
    Ok(report)
}

pub fn serialize_report(report: &AuditReport) -> anyhow::Result<Vec<u8>> {
    serde_json::to_vec_pretty(report).context("serialize report")
}

/// Convert the envelope into the renderer-facing model. Used both for live
/// reports and for reports re-read from disk, so the two render
/// identically.
pub fn report_to_renderable(report: &AuditReport) -> RenderableReport {
    RenderableReport {
        generated_at: rfc3339(report.finished_at),
        findings_total: report.data.findings_total,
        policies: report
            .policies
            .iter()
            .map(|record| RenderablePolicy {
                display_name: record.display_name.clone(),
                state: record.state.as_str().to_string(),
                created: record.created_date_time.map(rfc3339),
                modified: record.modified_date_time.map(rfc3339),
                include_users: record.include_users.clone(),
                exclude_users: record.exclude_users.clone(),
                findings: record
                    .findings
                    .iter()
                    .map(|f| RenderableFinding {
                        severity: match f.severity {
                            Severity::Info => RenderableSeverity::Info,
                            Severity::Warning => RenderableSeverity::Warning,
                            Severity::Error => RenderableSeverity::Error,
                        },
                        rule: f.rule.as_str().to_string(),
                        message: f.message.clone(),
                    })
                    .collect(),
            })
            .collect(),
    }
}

fn rfc3339(ts: OffsetDateTime) -> String {
    ts.format(&Rfc3339).unwrap_or_else(|_| ts.to_string())
}
