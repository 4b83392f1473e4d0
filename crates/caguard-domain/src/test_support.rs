use crate::config::{EffectiveConfig, RulePolicy};
use caguard_types::{ids, Conditions, Policy, PolicyState, Severity};
use std::collections::BTreeMap;

/// Config with every rule enabled at `Warning`.
pub fn standard_config() -> EffectiveConfig {
    let mut rules = BTreeMap::new();
    for id in [
        ids::RULE_DISABLED_POLICY,
        ids::RULE_NO_APPLICATION_SCOPE,
        ids::RULE_NO_BREAK_GLASS_EXCLUSION,
    ] {
        rules.insert(id.to_string(), RulePolicy::enabled(Severity::Warning));
    }
    EffectiveConfig {
        profile: "standard".to_string(),
        rules,
    }
}

/// Bare policy with no conditions configured at all.
pub fn policy(id: &str, display_name: &str, state: PolicyState) -> Policy {
    Policy {
        id: id.to_string(),
        display_name: display_name.to_string(),
        state,
        created_date_time: None,
        modified_date_time: None,
        conditions: None,
        grant_controls: None,
        session_controls: None,
    }
}

/// Policy with conditions supplied as Graph-shaped JSON.
pub fn policy_with_conditions(
    id: &str,
    display_name: &str,
    state: PolicyState,
    conditions: serde_json::Value,
) -> Policy {
    let conditions: Conditions =
        serde_json::from_value(conditions).expect("test conditions must deserialize");
    Policy {
        conditions: Some(conditions),
        ..policy(id, display_name, state)
    }
}
