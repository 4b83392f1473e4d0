use caguard_domain::config::{EffectiveConfig, RulePolicy};
use caguard_types::{ids, Severity};
use std::collections::BTreeMap;

/// Preset profiles are opinionated defaults.
///
/// Keep these small and readable. Anything finer-grained goes into the
/// per-rule config.
pub fn preset(profile: &str) -> EffectiveConfig {
    match profile {
        "strict" => strict_profile(),
        "info" => info_profile(),
        // default
        _ => standard_profile(),
    }
}

fn standard_profile() -> EffectiveConfig {
    EffectiveConfig {
        profile: "standard".to_string(),
        rules: default_rules(Severity::Warning),
    }
}

fn strict_profile() -> EffectiveConfig {
    EffectiveConfig {
        profile: "strict".to_string(),
        rules: default_rules(Severity::Error),
    }
}

fn info_profile() -> EffectiveConfig {
    EffectiveConfig {
        profile: "info".to_string(),
        rules: default_rules(Severity::Info),
    }
}

fn default_rules(default_severity: Severity) -> BTreeMap<String, RulePolicy> {
    let mut m = BTreeMap::new();
    m.insert(
        ids::RULE_DISABLED_POLICY.to_string(),
        RulePolicy::enabled(default_severity),
    );
    m.insert(
        ids::RULE_NO_APPLICATION_SCOPE.to_string(),
        RulePolicy::enabled(default_severity),
    );
    m.insert(
        ids::RULE_NO_BREAK_GLASS_EXCLUSION.to_string(),
        RulePolicy::enabled(default_severity),
    );
    m
}
