//! Rendering utilities for the audit output surfaces (terminal, HTML,
//! JSON export).

#![forbid(unsafe_code)]

mod export;
mod html;
mod model;
mod terminal;

pub use export::{export_json, ExportError, Selection};
pub use html::{escape_html, render_html};
pub use model::{RenderableFinding, RenderablePolicy, RenderableReport, RenderableSeverity};
pub use terminal::render_terminal;
