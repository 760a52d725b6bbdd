//! Articles application: articles with cascading tags.

pub mod manager;
pub mod models;
