//! Applications.
//!
//! One module per app, each with its models and a pool-backed manager:
//!
//! - [`snippets`] - the highlight pipeline and snippet store
//! - [`users`] - minimal owner records (no credentials, no tokens)
//! - [`tasks`] - plain task records
//! - [`pizzas`] - pizzas and toppings with a many-to-many link
//! - [`articles`] - articles and their cascading tags

pub mod articles;
pub mod pizzas;
pub mod snippets;
pub mod tasks;
pub mod users;
