use crate::config::EffectiveConfig;
use caguard_types::{ids, Finding, Policy, RuleId};
use serde_json::json;

pub fn run(policy: &Policy, cfg: &EffectiveConfig, out: &mut Vec<Finding>) {
    let Some(rule) = cfg.rule_policy(ids::RULE_NO_BREAK_GLASS_EXCLUSION) else {
        return;
    };

    // Either exclusion list being configured (even empty) is enough to
    // treat exclusions as considered.
    let users_absent = policy.excluded_users().is_none();
    let groups_absent = policy.excluded_groups().is_none();
    if !(users_absent && groups_absent) {
        return;
    }

    out.push(Finding {
        severity: rule.severity,
        rule: RuleId::NoBreakGlassExclusion,
        policy_id: policy.id.clone(),
        message: format!(
            "policy '{}' excludes no users or groups; break-glass accounts are not protected",
            policy.display_name
        ),
        help: Some(
            "Add the emergency-access account or group to excludeUsers/excludeGroups."
                .to_string(),
        ),
        data: json!({
            "exclude_users": "absent",
            "exclude_groups": "absent",
        }),
    });
}
