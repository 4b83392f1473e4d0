//! Config parsing and profile/preset resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration
//! provided as strings. Reading `caguard.toml` from disk is the CLI's job.

#![forbid(unsafe_code)]

mod model;
mod presets;
mod resolve;

pub use model::{CaguardConfigV1, RuleConfig};
pub use resolve::{Overrides, RemoteSettings, ResolvedConfig};

/// Parse `caguard.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<CaguardConfigV1> {
    let cfg: CaguardConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the effective config used by the engine and the remote client
/// (profiles + overrides + per-rule config).
pub fn resolve_config(
    cfg: CaguardConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}
