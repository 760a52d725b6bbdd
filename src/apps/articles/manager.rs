//! Store operations for articles and tags.

use sqlx::SqlitePool;

use super::models::{Article, Tag};
use crate::error::{Error, Result};

/// Pool-backed manager for [`Article`] and [`Tag`] rows.
#[derive(Debug, Clone)]
pub struct ArticleManager {
	pool: SqlitePool,
}

impl ArticleManager {
	pub fn new(pool: SqlitePool) -> Self {
		Self { pool }
	}

	pub async fn create(&self, name: &str) -> Result<Article> {
		Ok(sqlx::query_as(
			r#"
			INSERT INTO articles (name)
			VALUES ($1)
			RETURNING id, name
			"#,
		)
		.bind(name)
		.fetch_one(&self.pool)
		.await?)
	}

	pub async fn get(&self, id: i64) -> Result<Article> {
		sqlx::query_as("SELECT id, name FROM articles WHERE id = $1")
			.bind(id)
			.fetch_optional(&self.pool)
			.await?
			.ok_or(Error::NotFound { what: "article", id })
	}

	pub async fn list(&self) -> Result<Vec<Article>> {
		Ok(sqlx::query_as("SELECT id, name FROM articles ORDER BY id")
			.fetch_all(&self.pool)
			.await?)
	}

	/// Delete an article; its tags go with it (FK cascade).
	pub async fn delete(&self, id: i64) -> Result<()> {
		let affected = sqlx::query("DELETE FROM articles WHERE id = $1")
			.bind(id)
			.execute(&self.pool)
			.await?
			.rows_affected();

		if affected == 0 {
			return Err(Error::NotFound { what: "article", id });
		}
		Ok(())
	}

	pub async fn add_tag(&self, article_id: i64, name: &str) -> Result<Tag> {
		Ok(sqlx::query_as(
			r#"
			INSERT INTO tags (article_id, name)
			VALUES ($1, $2)
			RETURNING id, article_id, name
			"#,
		)
		.bind(article_id)
		.bind(name)
		.fetch_one(&self.pool)
		.await?)
	}

	pub async fn tags(&self, article_id: i64) -> Result<Vec<Tag>> {
		Ok(sqlx::query_as(
			r#"
			SELECT id, article_id, name
			FROM tags
			WHERE article_id = $1
			ORDER BY id
			"#,
		)
		.bind(article_id)
		.fetch_all(&self.pool)
		.await?)
	}

	/// Articles carrying at least one tag with the given name (the reverse
	/// tag filter).
	pub async fn with_tag_named(&self, name: &str) -> Result<Vec<Article>> {
		Ok(sqlx::query_as(
			r#"
			SELECT DISTINCT a.id, a.name
			FROM articles a
			JOIN tags t ON t.article_id = a.id
			WHERE t.name = $1
			ORDER BY a.id
			"#,
		)
		.bind(name)
		.fetch_all(&self.pool)
		.await?)
	}
}
