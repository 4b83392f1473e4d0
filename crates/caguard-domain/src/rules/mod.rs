use crate::config::EffectiveConfig;
use caguard_types::{Finding, Policy};

mod disabled_state;
mod no_application_scope;
mod no_break_glass_exclusion;

#[cfg(test)]
mod tests;

/// Run every rule against one policy, appending findings in rule-table
/// order. The order is an observable contract: renderers and the report
/// envelope rely on it, so new rules go at the end and nothing here sorts.
pub fn run_all(policy: &Policy, cfg: &EffectiveConfig, out: &mut Vec<Finding>) {
    disabled_state::run(policy, cfg, out);
    no_application_scope::run(policy, cfg, out);
    no_break_glass_exclusion::run(policy, cfg, out);
}
