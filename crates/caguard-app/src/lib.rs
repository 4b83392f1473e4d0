//! Use case orchestration for caguard.
//!
//! This crate provides the application layer: use cases that coordinate the
//! domain, graph, and render layers. It is intentionally thin and delegates
//! heavy lifting to the appropriate layers.
//!
//! The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod audit;
mod explain;
mod report;
mod run;
mod session;

pub use audit::{run_audit, AuditOutput};
pub use explain::{format_explanation, format_not_found, run_explain, ExplainOutput};
pub use report::{parse_report_json, report_to_renderable, serialize_report};
pub use run::{run_modes, Artifacts, ExportTarget, Mode, Operator};
pub use session::{with_session, Directory, GraphDirectory};
