//! The interactive mode loop.
//!
//! One fetched snapshot is reused across every render in the session; no
//! mode mutates remote state, so there is no re-fetch. Fatal errors
//! (auth/fetch) never originate here: render and write failures are
//! reported to the operator and control returns to the menu.

use crate::audit::{run_audit, AuditOutput};
use crate::report::{report_to_renderable, serialize_report};
use caguard_domain::config::EffectiveConfig;
use caguard_render::{export_json, render_html, render_terminal, ExportError, Selection};
use caguard_types::Policy;

/// Operator command, produced by the interaction boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    ShowTerminal,
    GenerateReport,
    ExportJson,
    Quit,
}

/// Export target selection. `Index` is the operator-facing 1-based index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportTarget {
    All,
    Back,
    Index(usize),
}

/// Operator interaction boundary. The CLI backs this with stdin/stdout;
/// tests script it.
pub trait Operator {
    fn select_mode(&mut self) -> anyhow::Result<Mode>;
    fn select_export_target(&mut self, policy_count: usize) -> anyhow::Result<ExportTarget>;
    fn confirm_continue(&mut self) -> anyhow::Result<bool>;
    /// Primary output (the terminal render).
    fn print(&mut self, text: &str);
    /// Status and error messages.
    fn notify(&mut self, message: &str);
}

/// Filesystem boundary for generated documents. Path construction and
/// directory handling are the implementor's concern; the returned string
/// is shown to the operator.
pub trait Artifacts {
    fn write_report(&mut self, bytes: &[u8]) -> anyhow::Result<String>;
    fn write_html(&mut self, document: &str) -> anyhow::Result<String>;
    fn write_export(&mut self, bytes: &[u8]) -> anyhow::Result<String>;
}

/// Drive mode selection until the operator quits.
pub fn run_modes(
    policies: &[Policy],
    cfg: &EffectiveConfig,
    operator: &mut impl Operator,
    artifacts: &mut impl Artifacts,
) -> anyhow::Result<()> {
    // Evaluated lazily, once: export mode never needs findings.
    let mut audit: Option<AuditOutput> = None;

    loop {
        match operator.select_mode()? {
            Mode::Quit => return Ok(()),
            Mode::ShowTerminal => {
                let output = audit.get_or_insert_with(|| run_audit(policies, cfg));
                operator.print(&render_terminal(&report_to_renderable(&output.report)));
            }
            Mode::GenerateReport => {
                let output = audit.get_or_insert_with(|| run_audit(policies, cfg));
                match serialize_report(&output.report)
                    .and_then(|bytes| artifacts.write_report(&bytes))
                {
                    Ok(path) => operator.notify(&format!("JSON report written to {path}")),
                    Err(err) => operator.notify(&format!("report write failed: {err:#}")),
                }
                let html = render_html(&report_to_renderable(&output.report));
                match artifacts.write_html(&html) {
                    Ok(path) => operator.notify(&format!("HTML report written to {path}")),
                    Err(err) => operator.notify(&format!("report generation failed: {err:#}")),
                }
            }
            Mode::ExportJson => run_export(policies, operator, artifacts)?,
        }

        if !operator.confirm_continue()? {
            return Ok(());
        }
    }
}

/// Export sub-loop: re-prompt on invalid selection, back out on request.
fn run_export(
    policies: &[Policy],
    operator: &mut impl Operator,
    artifacts: &mut impl Artifacts,
) -> anyhow::Result<()> {
    loop {
        let selection = match operator.select_export_target(policies.len())? {
            ExportTarget::Back => return Ok(()),
            ExportTarget::All => Selection::All,
            ExportTarget::Index(0) => {
                operator.notify(&format!(
                    "invalid selection 0: choose 1..{} or 'all'",
                    policies.len()
                ));
                continue;
            }
            ExportTarget::Index(n) => Selection::Single(n - 1),
        };

        match export_json(policies, selection) {
            Ok(bytes) => {
                match artifacts.write_export(&bytes) {
                    Ok(path) => operator.notify(&format!("JSON export written to {path}")),
                    Err(err) => operator.notify(&format!("export write failed: {err:#}")),
                }
                return Ok(());
            }
            Err(ExportError::InvalidSelection { index, count }) => {
                operator.notify(&format!(
                    "invalid selection {}: choose 1..{count} or 'all'",
                    index + 1
                ));
            }
            Err(err) => {
                operator.notify(&format!("export failed: {err:#}"));
                return Ok(());
            }
        }
    }
}
