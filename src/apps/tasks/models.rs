use serde::{Deserialize, Serialize};

/// Task record: a title and a blob of code, nothing derived.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Task {
	pub id: i64,
	pub title: String,
	pub code: String,
}
