use crate::RenderableReport;

/// Render the fixed-format terminal block.
///
/// Pure string producer; the CLI owns the actual stdout write. Never fails
/// on a well-formed report.
pub fn render_terminal(report: &RenderableReport) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "Conditional Access policies ({}), {} finding(s)\n",
        report.policies.len(),
        report.findings_total
    ));

    for policy in &report.policies {
        out.push('\n');
        out.push_str(&format!("Name:     {}\n", policy.display_name));
        out.push_str(&format!("State:    {}\n", policy.state));
        if let Some(created) = &policy.created {
            out.push_str(&format!("Created:  {}\n", created));
        }
        if let Some(modified) = &policy.modified {
            out.push_str(&format!("Modified: {}\n", modified));
        }
        if let Some(users) = &policy.include_users {
            out.push_str(&format!("Include users: {}\n", format_list(users)));
        }
        if let Some(users) = &policy.exclude_users {
            out.push_str(&format!("Exclude users: {}\n", format_list(users)));
        }

        if policy.findings.is_empty() {
            out.push_str("Findings: none\n");
        } else {
            out.push_str("Findings:\n");
            for f in &policy.findings {
                out.push_str(&format!(
                    "  [{}] {}: {}\n",
                    f.severity.tag(),
                    f.rule,
                    f.message
                ));
            }
        }
    }

    out
}

fn format_list(entries: &[String]) -> String {
    if entries.is_empty() {
        "(empty)".to_string()
    } else {
        entries.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{RenderableFinding, RenderablePolicy, RenderableSeverity};

    fn sample() -> RenderableReport {
        RenderableReport {
            generated_at: "2025-06-01T00:00:00Z".to_string(),
            findings_total: 1,
            policies: vec![
                RenderablePolicy {
                    display_name: "Require MFA".to_string(),
                    state: "enabled".to_string(),
                    created: Some("2024-01-01T00:00:00Z".to_string()),
                    modified: None,
                    include_users: Some(vec!["All".to_string()]),
                    exclude_users: Some(vec!["admin1".to_string(), "admin2".to_string()]),
                    findings: Vec::new(),
                },
                RenderablePolicy {
                    display_name: "Old policy".to_string(),
                    state: "disabled".to_string(),
                    created: None,
                    modified: None,
                    include_users: None,
                    exclude_users: None,
                    findings: vec![RenderableFinding {
                        severity: RenderableSeverity::Warning,
                        rule: "policy.disabled_state".to_string(),
                        message: "policy 'Old policy' is disabled".to_string(),
                    }],
                },
            ],
        }
    }

    #[test]
    fn renders_one_block_per_policy() {
        let text = render_terminal(&sample());
        assert!(text.starts_with("Conditional Access policies (2), 1 finding(s)"));
        assert!(text.contains("Name:     Require MFA"));
        assert!(text.contains("Exclude users: admin1, admin2"));
        assert!(text.contains("Findings: none"));
        assert!(text.contains("[WARN] policy.disabled_state"));
    }

    #[test]
    fn unconfigured_lists_are_not_printed() {
        let text = render_terminal(&sample());
        let old_block = text.split("Name:     Old policy").nth(1).unwrap();
        assert!(!old_block.contains("Include users:"));
        assert!(!old_block.contains("Exclude users:"));
        assert!(!old_block.contains("Created:"));
    }

    #[test]
    fn empty_configured_list_is_visible() {
        let mut report = sample();
        report.policies[0].exclude_users = Some(Vec::new());
        let text = render_terminal(&report);
        assert!(text.contains("Exclude users: (empty)"));
    }
}
