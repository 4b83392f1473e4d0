use caguard_types::{AuditCounts, Finding, Policy, Severity};

/// One policy together with the findings its evaluation produced.
#[derive(Clone, Debug)]
pub struct PolicyAudit {
    pub policy: Policy,
    pub findings: Vec<Finding>,
}

/// Ordered aggregate of per-policy findings, preserving fetch order.
///
/// Owned by the orchestrator for the duration of one run; renderers
/// borrow it and never mutate it.
#[derive(Clone, Debug)]
pub struct ReportModel {
    pub profile: String,
    pub entries: Vec<PolicyAudit>,
    pub counts: AuditCounts,
}

impl ReportModel {
    pub fn new(profile: String, entries: Vec<PolicyAudit>) -> Self {
        let mut counts = AuditCounts::default();
        for entry in &entries {
            for f in &entry.findings {
                match f.severity {
                    Severity::Info => counts.info += 1,
                    Severity::Warning => counts.warning += 1,
                    Severity::Error => counts.error += 1,
                }
            }
        }
        ReportModel {
            profile,
            entries,
            counts,
        }
    }

    pub fn findings_total(&self) -> u32 {
        self.entries.iter().map(|e| e.findings.len() as u32).sum()
    }

    pub fn is_clean(&self) -> bool {
        self.entries.iter().all(|e| e.findings.is_empty())
    }
}
