use assert_cmd::Command;
use predicates::prelude::*;

#[allow(deprecated)]
fn caguard_cmd() -> Command {
    Command::cargo_bin("caguard").unwrap()
}

#[test]
fn explain_known_rule_prints_remediation() {
    caguard_cmd()
        .args(["explain", "policy.no_break_glass_exclusion"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Remediation"))
        .stdout(predicate::str::contains("```json"));
}

#[test]
fn explain_unknown_rule_fails_and_lists_ids() {
    caguard_cmd()
        .args(["explain", "policy.not_a_rule"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown rule ID"))
        .stderr(predicate::str::contains("policy.disabled_state"))
        .stderr(predicate::str::contains("policy.no_application_scope"))
        .stderr(predicate::str::contains("policy.no_break_glass_exclusion"));
}
