//! Property-based tests for the rule engine.
//!
//! These verify the invariants the renderers and report envelope depend on:
//! - evaluation never panics, whatever the policy shape
//! - findings are idempotent across repeated evaluation
//! - findings follow rule-table order
//! - a disabled policy always yields exactly one disabled-state finding

use crate::engine::evaluate;
use crate::test_support::standard_config;
use caguard_types::{
    ApplicationScope, Conditions, Policy, PolicyState, RuleId, UserScope,
};
use proptest::prelude::*;

fn arb_state() -> impl Strategy<Value = PolicyState> {
    prop_oneof![
        Just(PolicyState::Enabled),
        Just(PolicyState::Disabled),
        Just(PolicyState::EnabledForReportingButNotEnforced),
    ]
}

/// Identifier-ish strings plus the `All` sentinel and hostile free text.
fn arb_entry() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("All".to_string()),
        prop::string::string_regex("[a-f0-9]{8}").unwrap(),
        Just("<script>alert(1)</script>".to_string()),
    ]
}

fn arb_entries() -> impl Strategy<Value = Option<Vec<String>>> {
    prop::option::of(prop::collection::vec(arb_entry(), 0..4))
}

fn arb_user_scope() -> impl Strategy<Value = Option<UserScope>> {
    prop::option::of((arb_entries(), arb_entries(), arb_entries()).prop_map(
        |(include_users, exclude_users, exclude_groups)| UserScope {
            include_users,
            exclude_users,
            exclude_groups,
            extra: serde_json::Map::new(),
        },
    ))
}

fn arb_application_scope() -> impl Strategy<Value = Option<ApplicationScope>> {
    prop::option::of(arb_entries().prop_map(|include_applications| ApplicationScope {
        include_applications,
        extra: serde_json::Map::new(),
    }))
}

fn arb_conditions() -> impl Strategy<Value = Option<Conditions>> {
    prop::option::of((arb_user_scope(), arb_application_scope()).prop_map(
        |(users, applications)| Conditions {
            users,
            applications,
            extra: serde_json::Map::new(),
        },
    ))
}

prop_compose! {
    fn arb_policy()(
        id in "[a-z0-9-]{1,16}",
        display_name in ".{0,40}",
        state in arb_state(),
        conditions in arb_conditions(),
    ) -> Policy {
        Policy {
            id,
            display_name,
            state,
            created_date_time: None,
            modified_date_time: None,
            conditions,
            grant_controls: None,
            session_controls: None,
        }
    }
}

fn rule_rank(rule: RuleId) -> usize {
    RuleId::ALL
        .iter()
        .position(|r| *r == rule)
        .expect("rule in table")
}

proptest! {
    #[test]
    fn evaluation_is_idempotent(policy in arb_policy()) {
        let cfg = standard_config();
        let first = evaluate(&policy, &cfg);
        let second = evaluate(&policy, &cfg);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn findings_follow_rule_table_order(policy in arb_policy()) {
        let cfg = standard_config();
        let findings = evaluate(&policy, &cfg);
        let ranks: Vec<usize> = findings.iter().map(|f| rule_rank(f.rule)).collect();
        let mut sorted = ranks.clone();
        sorted.sort_unstable();
        sorted.dedup();
        prop_assert_eq!(ranks, sorted, "each rule fires at most once, in order");
    }

    #[test]
    fn disabled_policies_always_get_exactly_one_disabled_finding(policy in arb_policy()) {
        let cfg = standard_config();
        let findings = evaluate(&policy, &cfg);
        let disabled = findings
            .iter()
            .filter(|f| f.rule == RuleId::DisabledPolicy)
            .count();
        if policy.state == PolicyState::Disabled {
            prop_assert_eq!(disabled, 1);
        } else {
            prop_assert_eq!(disabled, 0);
        }
    }

    #[test]
    fn findings_reference_the_evaluated_policy(policy in arb_policy()) {
        let cfg = standard_config();
        for finding in evaluate(&policy, &cfg) {
            prop_assert_eq!(&finding.policy_id, &policy.id);
        }
    }
}
