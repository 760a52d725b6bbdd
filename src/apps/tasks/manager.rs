//! Store operations for task records.

use sqlx::SqlitePool;

use super::models::Task;
use crate::error::{Error, Result};

/// Pool-backed manager for [`Task`] rows.
#[derive(Debug, Clone)]
pub struct TaskManager {
	pool: SqlitePool,
}

impl TaskManager {
	pub fn new(pool: SqlitePool) -> Self {
		Self { pool }
	}

	pub async fn create(&self, title: &str, code: &str) -> Result<Task> {
		Ok(sqlx::query_as(
			r#"
			INSERT INTO tasks (title, code)
			VALUES ($1, $2)
			RETURNING id, title, code
			"#,
		)
		.bind(title)
		.bind(code)
		.fetch_one(&self.pool)
		.await?)
	}

	pub async fn get(&self, id: i64) -> Result<Task> {
		sqlx::query_as(
			r#"
			SELECT id, title, code
			FROM tasks
			WHERE id = $1
			"#,
		)
		.bind(id)
		.fetch_optional(&self.pool)
		.await?
		.ok_or(Error::NotFound { what: "task", id })
	}

	pub async fn list(&self) -> Result<Vec<Task>> {
		Ok(sqlx::query_as(
			r#"
			SELECT id, title, code
			FROM tasks
			ORDER BY id
			"#,
		)
		.fetch_all(&self.pool)
		.await?)
	}

	pub async fn update(&self, id: i64, title: &str, code: &str) -> Result<Task> {
		sqlx::query_as(
			r#"
			UPDATE tasks
			SET title = $1, code = $2
			WHERE id = $3
			RETURNING id, title, code
			"#,
		)
		.bind(title)
		.bind(code)
		.bind(id)
		.fetch_optional(&self.pool)
		.await?
		.ok_or(Error::NotFound { what: "task", id })
	}

	pub async fn delete(&self, id: i64) -> Result<()> {
		let affected = sqlx::query("DELETE FROM tasks WHERE id = $1")
			.bind(id)
			.execute(&self.pool)
			.await?
			.rows_affected();

		if affected == 0 {
			return Err(Error::NotFound { what: "task", id });
		}
		Ok(())
	}
}
