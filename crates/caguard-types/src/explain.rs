//! Explain registry for audit rules.
//!
//! Maps rule IDs to human-readable explanations with remediation guidance.

use crate::ids;

/// Explanation entry for a rule.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Short description of the rule.
    pub title: &'static str,
    /// What the rule looks for and why it exists.
    pub description: &'static str,
    /// How to address findings.
    pub remediation: &'static str,
    /// Before/after policy examples.
    pub examples: ExamplePair,
}

/// Before and after policy examples (abbreviated Graph JSON).
#[derive(Debug, Clone)]
pub struct ExamplePair {
    /// A policy shape that would trigger a finding.
    pub before: &'static str,
    /// A policy shape that passes the rule.
    pub after: &'static str,
}

/// Look up an explanation by rule ID.
///
/// Returns `None` if the identifier is not recognized.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    match identifier {
        ids::RULE_DISABLED_POLICY => Some(explain_disabled_state()),
        ids::RULE_NO_APPLICATION_SCOPE => Some(explain_no_application_scope()),
        ids::RULE_NO_BREAK_GLASS_EXCLUSION => Some(explain_no_break_glass_exclusion()),
        _ => None,
    }
}

/// List all known rule IDs.
pub fn all_rule_ids() -> &'static [&'static str] {
    &[
        ids::RULE_DISABLED_POLICY,
        ids::RULE_NO_APPLICATION_SCOPE,
        ids::RULE_NO_BREAK_GLASS_EXCLUSION,
    ]
}

fn explain_disabled_state() -> Explanation {
    Explanation {
        title: "Disabled Policy",
        description: "\
Flags Conditional Access policies whose state is `disabled`.

A disabled policy provides no protection but still shows up in every
review, and stale disabled policies tend to accumulate until nobody
remembers why they exist.",
        remediation: "\
Either enable the policy (consider `enabledForReportingButNotEnforced`
first to measure impact) or delete it if it is no longer needed.",
        examples: ExamplePair {
            before: r#"{ "displayName": "Require MFA", "state": "disabled" }"#,
            after: r#"{ "displayName": "Require MFA", "state": "enabled" }"#,
        },
    }
}

fn explain_no_application_scope() -> Explanation {
    Explanation {
        title: "No Application Scope",
        description: "\
Flags policies with no `includeApplications` list configured at all.

A policy without an application scope does not apply to any sign-in, so
it silently does nothing. An *empty* list is treated as a deliberate
configuration and is not flagged.",
        remediation: "\
Review the intended scope and set `conditions.applications.includeApplications`,
typically to `[\"All\"]` or a specific application list.",
        examples: ExamplePair {
            before: r#"{ "conditions": { "users": { "includeUsers": ["All"] } } }"#,
            after: r#"{ "conditions": { "applications": { "includeApplications": ["All"] } } }"#,
        },
    }
}

fn explain_no_break_glass_exclusion() -> Explanation {
    Explanation {
        title: "No Break-Glass Exclusion",
        description: "\
Flags policies that exclude neither users nor groups.

Without an excluded emergency-access (break-glass) account, a
misconfigured policy can lock every administrator out of the tenant at
once.",
        remediation: "\
Add the break-glass account or group to `excludeUsers`/`excludeGroups`
on every blocking or MFA-enforcing policy.",
        examples: ExamplePair {
            before: r#"{ "conditions": { "users": { "includeUsers": ["All"] } } }"#,
            after: r#"{ "conditions": { "users": { "includeUsers": ["All"], "excludeGroups": ["BreakGlass"] } } }"#,
        },
    }
}
