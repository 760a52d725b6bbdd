use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User record a snippet can be owned by.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
	pub id: i64,
	pub username: String,
	pub created: DateTime<Utc>,
}

impl std::fmt::Display for User {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.username)
	}
}
