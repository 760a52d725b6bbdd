//! Store operations for user records.

use chrono::Utc;
use sqlx::SqlitePool;

use super::models::User;
use crate::error::{Error, Result};

/// Pool-backed manager for [`User`] rows.
#[derive(Debug, Clone)]
pub struct UserManager {
	pool: SqlitePool,
}

impl UserManager {
	pub fn new(pool: SqlitePool) -> Self {
		Self { pool }
	}

	/// Insert a new user.
	pub async fn create(&self, username: &str) -> Result<User> {
		let user: User = sqlx::query_as(
			r#"
			INSERT INTO users (username, created)
			VALUES ($1, $2)
			RETURNING id, username, created
			"#,
		)
		.bind(username)
		.bind(Utc::now())
		.fetch_one(&self.pool)
		.await?;

		tracing::debug!("Created user {} ({})", user.id, user.username);
		Ok(user)
	}

	pub async fn get(&self, id: i64) -> Result<User> {
		sqlx::query_as(
			r#"
			SELECT id, username, created
			FROM users
			WHERE id = $1
			"#,
		)
		.bind(id)
		.fetch_optional(&self.pool)
		.await?
		.ok_or(Error::NotFound { what: "user", id })
	}

	/// Delete a user. Owned snippets go with it (FK cascade).
	pub async fn delete(&self, id: i64) -> Result<()> {
		let affected = sqlx::query("DELETE FROM users WHERE id = $1")
			.bind(id)
			.execute(&self.pool)
			.await?
			.rows_affected();

		if affected == 0 {
			return Err(Error::NotFound { what: "user", id });
		}
		tracing::debug!("Deleted user {}", id);
		Ok(())
	}
}
