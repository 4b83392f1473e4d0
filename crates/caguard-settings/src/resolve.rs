use crate::{model::CaguardConfigV1, presets};
use anyhow::Context;
use caguard_domain::config::{EffectiveConfig, RulePolicy};
use caguard_types::Severity;

/// Default scope for app-only Graph access.
pub const DEFAULT_SCOPE: &str = "https://graph.microsoft.com/.default";

const DEFAULT_OUTPUT_DIR: &str = "artifacts/caguard";

#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub profile: Option<String>,
    pub tenant_id: Option<String>,
    pub client_id: Option<String>,
    pub output_dir: Option<String>,
}

/// Connection settings for the directory service boundary.
#[derive(Clone, Debug)]
pub struct RemoteSettings {
    pub tenant_id: Option<String>,
    pub client_id: Option<String>,
    pub scopes: Vec<String>,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub effective: EffectiveConfig,
    pub remote: RemoteSettings,
    pub output_dir: String,
}

pub fn resolve_config(
    cfg: CaguardConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    let profile = overrides
        .profile
        .clone()
        .or(cfg.profile.clone())
        .unwrap_or_else(|| "standard".to_string());

    let mut effective = presets::preset(&profile);

    // per-rule overrides
    for (rule_id, rc) in cfg.rules.iter() {
        let entry = effective
            .rules
            .entry(rule_id.clone())
            .or_insert_with(RulePolicy::disabled);

        if let Some(enabled) = rc.enabled {
            entry.enabled = enabled;
        }
        if let Some(sev) = rc.severity.as_deref() {
            entry.severity =
                parse_severity(sev).with_context(|| format!("invalid severity for {rule_id}"))?;
        }
    }

    let scopes = if cfg.scopes.is_empty() {
        vec![DEFAULT_SCOPE.to_string()]
    } else {
        cfg.scopes.clone()
    };

    let remote = RemoteSettings {
        tenant_id: overrides.tenant_id.or(cfg.tenant_id),
        client_id: overrides.client_id.or(cfg.client_id),
        scopes,
    };

    let output_dir = overrides
        .output_dir
        .or(cfg.output_dir)
        .unwrap_or_else(|| DEFAULT_OUTPUT_DIR.to_string());

    Ok(ResolvedConfig {
        effective,
        remote,
        output_dir,
    })
}

fn parse_severity(v: &str) -> anyhow::Result<Severity> {
    match v {
        "info" => Ok(Severity::Info),
        "warning" | "warn" => Ok(Severity::Warning),
        "error" => Ok(Severity::Error),
        other => anyhow::bail!("unknown severity: {other} (expected info|warning|error)"),
    }
}
