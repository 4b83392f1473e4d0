use crate::policy::{Policy, PolicyState};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use time::OffsetDateTime;

/// Stable schema identifier for the caguard audit report.
pub const SCHEMA_REPORT_V1: &str = "caguard.report.v1";

/// Severity is informational in this tool: nothing automated acts on it,
/// but it still maps cleanly to how operators triage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// Identifies which rule produced a finding. Serialized as the stable
/// dotted rule ID, matching [`crate::ids`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum RuleId {
    #[serde(rename = "policy.disabled_state")]
    DisabledPolicy,
    #[serde(rename = "policy.no_application_scope")]
    NoApplicationScope,
    #[serde(rename = "policy.no_break_glass_exclusion")]
    NoBreakGlassExclusion,
}

impl RuleId {
    /// Rule-table order. This is an observable contract: findings for one
    /// policy are always emitted in this order.
    pub const ALL: [RuleId; 3] = [
        RuleId::DisabledPolicy,
        RuleId::NoApplicationScope,
        RuleId::NoBreakGlassExclusion,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RuleId::DisabledPolicy => crate::ids::RULE_DISABLED_POLICY,
            RuleId::NoApplicationScope => crate::ids::RULE_NO_APPLICATION_SCOPE,
            RuleId::NoBreakGlassExclusion => crate::ids::RULE_NO_BREAK_GLASS_EXCLUSION,
        }
    }
}

/// One rule observation for one policy.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Finding {
    pub severity: Severity,
    pub rule: RuleId,
    /// Foreign key to `Policy::id`.
    pub policy_id: String,
    pub message: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,

    /// Rule-specific structured payload (kept open-ended for forward
    /// compatibility).
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub data: JsonValue,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AuditCounts {
    pub info: u32,
    pub warning: u32,
    pub error: u32,
}

/// Caguard-specific summary payload for the report.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AuditData {
    pub profile: String,
    pub policies_scanned: u32,
    pub findings_total: u32,
    pub counts: AuditCounts,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

/// Per-policy slice of the report: the policy identity plus the findings
/// its evaluation produced, in rule-table order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PolicyAuditRecord {
    pub policy_id: String,
    pub display_name: String,
    pub state: PolicyState,
    #[schemars(with = "Option<String>")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde(with = "time::serde::rfc3339::option")]
    pub created_date_time: Option<OffsetDateTime>,
    #[schemars(with = "Option<String>")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde(with = "time::serde::rfc3339::option")]
    pub modified_date_time: Option<OffsetDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_users: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude_users: Option<Vec<String>>,
    pub findings: Vec<Finding>,
}

impl PolicyAuditRecord {
    pub fn from_policy(policy: &Policy, findings: Vec<Finding>) -> Self {
        PolicyAuditRecord {
            policy_id: policy.id.clone(),
            display_name: policy.display_name.clone(),
            state: policy.state,
            created_date_time: policy.created_date_time,
            modified_date_time: policy.modified_date_time,
            include_users: policy.included_users().map(|u| u.to_vec()),
            exclude_users: policy.excluded_users().map(|u| u.to_vec()),
            findings,
        }
    }
}

/// The persisted audit report envelope.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AuditReport {
    /// Versioned schema identifier for the envelope shape.
    pub schema: String,
    pub tool: ToolMeta,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub finished_at: OffsetDateTime,
    pub data: AuditData,
    /// One record per fetched policy, preserving fetch order.
    pub policies: Vec<PolicyAuditRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_id_serializes_as_dotted_id() {
        for rule in RuleId::ALL {
            let value = serde_json::to_value(rule).unwrap();
            assert_eq!(value, serde_json::Value::String(rule.as_str().to_string()));
        }
    }

    #[test]
    fn finding_omits_empty_optional_fields() {
        let finding = Finding {
            severity: Severity::Warning,
            rule: RuleId::DisabledPolicy,
            policy_id: "p1".to_string(),
            message: "disabled".to_string(),
            help: None,
            data: serde_json::Value::Null,
        };
        let value = serde_json::to_value(&finding).unwrap();
        let obj = value.as_object().unwrap();
        assert!(!obj.contains_key("help"));
        assert!(!obj.contains_key("data"));
    }
}
