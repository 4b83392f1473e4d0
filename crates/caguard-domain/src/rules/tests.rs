use super::{disabled_state, no_application_scope, no_break_glass_exclusion};
use crate::test_support::{policy, policy_with_conditions, standard_config};
use caguard_types::{PolicyState, RuleId};
use serde_json::json;

#[test]
fn disabled_state_fires_only_for_disabled() {
    let cfg = standard_config();

    for (state, expect) in [
        (PolicyState::Disabled, 1),
        (PolicyState::Enabled, 0),
        (PolicyState::EnabledForReportingButNotEnforced, 0),
    ] {
        let mut out = Vec::new();
        disabled_state::run(&policy("p", "P", state), &cfg, &mut out);
        assert_eq!(out.len(), expect, "state {:?}", state);
    }
}

#[test]
fn disabled_state_finding_names_the_policy() {
    let cfg = standard_config();
    let mut out = Vec::new();
    disabled_state::run(
        &policy("p9", "Block legacy auth", PolicyState::Disabled),
        &cfg,
        &mut out,
    );
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].rule, RuleId::DisabledPolicy);
    assert_eq!(out[0].policy_id, "p9");
    assert!(out[0].message.contains("Block legacy auth"));
    assert!(out[0].help.is_some());
}

#[test]
fn no_application_scope_absent_vs_empty() {
    let cfg = standard_config();

    // Wholly unset: fires.
    let mut out = Vec::new();
    no_application_scope::run(&policy("p", "P", PolicyState::Enabled), &cfg, &mut out);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].rule, RuleId::NoApplicationScope);

    // Applications block present but no include list: still absent, fires.
    let p = policy_with_conditions("p", "P", PolicyState::Enabled, json!({ "applications": {} }));
    let mut out = Vec::new();
    no_application_scope::run(&p, &cfg, &mut out);
    assert_eq!(out.len(), 1);

    // Present but empty: configured with zero entries, does not fire.
    let p = policy_with_conditions(
        "p",
        "P",
        PolicyState::Enabled,
        json!({ "applications": { "includeApplications": [] } }),
    );
    let mut out = Vec::new();
    no_application_scope::run(&p, &cfg, &mut out);
    assert!(out.is_empty());
}

#[test]
fn no_break_glass_exclusion_requires_both_absent() {
    let cfg = standard_config();

    let cases = [
        (json!({ "users": {} }), 1),
        (json!({ "users": { "excludeUsers": ["admin1"] } }), 0),
        (json!({ "users": { "excludeGroups": ["BreakGlass"] } }), 0),
        // Explicitly-empty exclusion lists count as configured.
        (json!({ "users": { "excludeUsers": [] } }), 0),
        (json!({ "users": { "excludeGroups": [] } }), 0),
    ];

    for (conditions, expect) in cases {
        let p = policy_with_conditions("p", "P", PolicyState::Enabled, conditions.clone());
        let mut out = Vec::new();
        no_break_glass_exclusion::run(&p, &cfg, &mut out);
        assert_eq!(out.len(), expect, "conditions {conditions}");
    }
}

#[test]
fn no_break_glass_exclusion_fires_without_conditions() {
    let cfg = standard_config();
    let mut out = Vec::new();
    no_break_glass_exclusion::run(&policy("p", "P", PolicyState::Enabled), &cfg, &mut out);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].rule, RuleId::NoBreakGlassExclusion);
}

// End-to-end scenario from the audit contract: P1 fires everything, P2 is
// clean.
#[test]
fn two_policy_scenario() {
    let cfg = standard_config();

    let p1 = policy("P1", "Unscoped disabled policy", PolicyState::Disabled);
    let p2 = policy_with_conditions(
        "P2",
        "Scoped policy",
        PolicyState::Enabled,
        json!({
            "users": { "excludeUsers": ["admin1"] },
            "applications": { "includeApplications": ["App1"] }
        }),
    );

    let rules: Vec<RuleId> = crate::evaluate(&p1, &cfg).iter().map(|f| f.rule).collect();
    assert_eq!(
        rules,
        vec![
            RuleId::DisabledPolicy,
            RuleId::NoApplicationScope,
            RuleId::NoBreakGlassExclusion,
        ]
    );
    assert!(crate::evaluate(&p2, &cfg).is_empty());
}
