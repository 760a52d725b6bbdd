//! Snippet highlighting.
//!
//! Two halves:
//!
//! - [`registry`] - process-wide, read-only tables of supported language and
//!   style identifiers, enumerated from syntect's default registries on first
//!   use (never hard-coded)
//! - [`renderer`] - the pure function that turns a snippet's source fields
//!   into a complete, self-contained HTML document

pub mod registry;
pub mod renderer;

pub use registry::{language_choices, resolve_language, resolve_style, style_choices};
pub use renderer::render_document;
