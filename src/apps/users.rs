//! Users application.
//!
//! Minimal owner records. Authentication, credentials and token issuance
//! belong to the embedding layer; snippets only need a row to own them and a
//! cascade to follow when it disappears.

pub mod manager;
pub mod models;
