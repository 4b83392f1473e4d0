use crate::config::EffectiveConfig;
use caguard_types::{ids, Finding, Policy, PolicyState, RuleId};
use serde_json::json;

pub fn run(policy: &Policy, cfg: &EffectiveConfig, out: &mut Vec<Finding>) {
    let Some(rule) = cfg.rule_policy(ids::RULE_DISABLED_POLICY) else {
        return;
    };

    if policy.state != PolicyState::Disabled {
        return;
    }

    out.push(Finding {
        severity: rule.severity,
        rule: RuleId::DisabledPolicy,
        policy_id: policy.id.clone(),
        message: format!("policy '{}' is disabled", policy.display_name),
        help: Some(
            "Enable the policy (report-only first to measure impact) or remove it.".to_string(),
        ),
        data: json!({ "state": policy.state.as_str() }),
    });
}
