//! # snippetbin
//!
//! Service core for a code snippet management application.
//!
//! The centerpiece is the snippet highlight pipeline: every create or update
//! of a [`apps::snippets::models::Snippet`] renders a complete, self-contained
//! HTML document from the snippet's source fields and commits it together
//! with the record, so the stored `highlighted` column is never stale. The
//! render and the store write are an explicit two-phase sequence; a render
//! failure aborts the save before anything touches the database.
//!
//! The crate deliberately stops at the service seam. HTTP routing, content
//! negotiation, authentication and admin surfaces belong to whatever web
//! layer embeds this crate; the managers in [`apps`] are the API such a layer
//! binds to.
//!
//! ## Layout
//!
//! - [`highlight`] - language/style registries (queried from syntect once per
//!   process) and the document renderer
//! - [`apps`] - one module per application: `snippets`, `users`, `tasks`,
//!   `pizzas`, `articles`
//! - [`db`] - SQLite pool construction and schema setup
//! - [`config`] - profile-aware settings loading
//! - [`error`] - the crate-wide error type

pub mod apps;
pub mod config;
pub mod db;
pub mod error;
pub mod highlight;

pub use error::{Error, Result};
