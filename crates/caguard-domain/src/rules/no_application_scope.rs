use crate::config::EffectiveConfig;
use caguard_types::{ids, Finding, Policy, RuleId};
use serde_json::Value;

pub fn run(policy: &Policy, cfg: &EffectiveConfig, out: &mut Vec<Finding>) {
    let Some(rule) = cfg.rule_policy(ids::RULE_NO_APPLICATION_SCOPE) else {
        return;
    };

    // Absent at any level counts; an empty list is a deliberate
    // configuration and does not fire.
    if policy.included_applications().is_some() {
        return;
    }

    out.push(Finding {
        severity: rule.severity,
        rule: RuleId::NoApplicationScope,
        policy_id: policy.id.clone(),
        message: format!(
            "policy '{}' has no application scope configured",
            policy.display_name
        ),
        help: Some(
            "Review the intended scope and set conditions.applications.includeApplications."
                .to_string(),
        ),
        data: Value::Null,
    });
}
