use crate::config::EffectiveConfig;
use crate::report::{PolicyAudit, ReportModel};
use crate::rules;
use caguard_types::{Finding, Policy};

/// Evaluate one policy against the rule table.
///
/// Stateless and pure: the same policy value always yields the same
/// findings, in rule-table order. Evaluation never fails; a policy with
/// missing optional sub-structures still produces a verdict for every
/// rule.
pub fn evaluate(policy: &Policy, cfg: &EffectiveConfig) -> Vec<Finding> {
    let mut findings: Vec<Finding> = Vec::new();
    rules::run_all(policy, cfg, &mut findings);
    findings
}

/// Evaluate a fetched snapshot, preserving fetch order.
pub fn evaluate_all(policies: &[Policy], cfg: &EffectiveConfig) -> ReportModel {
    let entries = policies
        .iter()
        .map(|policy| PolicyAudit {
            policy: policy.clone(),
            findings: evaluate(policy, cfg),
        })
        .collect();

    ReportModel::new(cfg.profile.clone(), entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{policy, policy_with_conditions, standard_config};
    use caguard_types::{PolicyState, RuleId, Severity};
    use serde_json::json;

    #[test]
    fn clean_policy_produces_no_findings() {
        let cfg = standard_config();
        let p = policy_with_conditions(
            "p2",
            "Baseline",
            PolicyState::Enabled,
            json!({
                "users": { "includeUsers": ["All"], "excludeUsers": ["admin1"] },
                "applications": { "includeApplications": ["App1"] }
            }),
        );
        assert!(evaluate(&p, &cfg).is_empty());
    }

    #[test]
    fn worst_case_policy_fires_all_rules_in_table_order() {
        let cfg = standard_config();
        let p = policy("p1", "Legacy block", PolicyState::Disabled);

        let findings = evaluate(&p, &cfg);
        let rules: Vec<RuleId> = findings.iter().map(|f| f.rule).collect();
        assert_eq!(
            rules,
            vec![
                RuleId::DisabledPolicy,
                RuleId::NoApplicationScope,
                RuleId::NoBreakGlassExclusion,
            ]
        );
        assert!(findings.iter().all(|f| f.policy_id == "p1"));
    }

    #[test]
    fn disabled_rule_drops_its_findings_without_reordering() {
        let mut cfg = standard_config();
        cfg.rules
            .get_mut(caguard_types::ids::RULE_NO_APPLICATION_SCOPE)
            .unwrap()
            .enabled = false;

        let p = policy("p1", "Legacy block", PolicyState::Disabled);
        let rules: Vec<RuleId> = evaluate(&p, &cfg).iter().map(|f| f.rule).collect();
        assert_eq!(
            rules,
            vec![RuleId::DisabledPolicy, RuleId::NoBreakGlassExclusion]
        );
    }

    #[test]
    fn evaluate_all_preserves_fetch_order_and_counts() {
        let cfg = standard_config();
        let policies = vec![
            policy("b", "Second fetched first", PolicyState::Disabled),
            policy_with_conditions(
                "a",
                "Clean",
                PolicyState::Enabled,
                json!({
                    "users": { "excludeGroups": ["BreakGlass"] },
                    "applications": { "includeApplications": ["All"] }
                }),
            ),
        ];

        let model = evaluate_all(&policies, &cfg);
        assert_eq!(model.entries.len(), 2);
        assert_eq!(model.entries[0].policy.id, "b");
        assert_eq!(model.entries[1].policy.id, "a");
        assert_eq!(model.findings_total(), 3);
        assert_eq!(model.counts.warning, 3);
        assert!(!model.is_clean());
    }

    #[test]
    fn severity_comes_from_the_rule_policy() {
        let mut cfg = standard_config();
        cfg.rules
            .get_mut(caguard_types::ids::RULE_DISABLED_POLICY)
            .unwrap()
            .severity = Severity::Error;

        let p = policy("p1", "Old", PolicyState::Disabled);
        let findings = evaluate(&p, &cfg);
        assert_eq!(findings[0].severity, Severity::Error);
    }
}
