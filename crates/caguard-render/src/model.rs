//! Render-local report model.
//!
//! Renderers do not depend on the domain or envelope types; the app layer
//! converts into this model so both live reports and reports re-read from
//! disk render identically.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderableSeverity {
    Info,
    Warning,
    Error,
}

impl RenderableSeverity {
    pub fn tag(self) -> &'static str {
        match self {
            RenderableSeverity::Info => "INFO",
            RenderableSeverity::Warning => "WARN",
            RenderableSeverity::Error => "ERROR",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableFinding {
    pub severity: RenderableSeverity,
    /// Stable dotted rule ID.
    pub rule: String,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderablePolicy {
    pub display_name: String,
    pub state: String,
    /// Preformatted timestamps; `None` when the remote omitted them.
    pub created: Option<String>,
    pub modified: Option<String>,
    /// `None` when the list is not configured on the policy.
    pub include_users: Option<Vec<String>>,
    pub exclude_users: Option<Vec<String>>,
    pub findings: Vec<RenderableFinding>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableReport {
    /// Preformatted generation timestamp.
    pub generated_at: String,
    pub findings_total: u32,
    pub policies: Vec<RenderablePolicy>,
}
