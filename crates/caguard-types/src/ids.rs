//! Stable identifiers for audit rules.
//!
//! A rule ID is a dotted namespace. These strings are the contract between
//! the engine, the config file, the report, and the explain registry.

pub const RULE_DISABLED_POLICY: &str = "policy.disabled_state";
pub const RULE_NO_APPLICATION_SCOPE: &str = "policy.no_application_scope";
pub const RULE_NO_BREAK_GLASS_EXCLUSION: &str = "policy.no_break_glass_exclusion";
