//! Project configuration.

pub mod settings;

pub use settings::{Settings, get_settings};
