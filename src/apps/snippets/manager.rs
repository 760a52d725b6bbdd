//! Store operations for snippets.
//!
//! Every write goes through the same two-phase pipeline: render the full
//! highlight document from the in-flight fields, then commit the row in a
//! single statement carrying the rendered output. The render happens before
//! the store is touched, so a failed render never leaves a partial write;
//! concurrent saves of the same row resolve to last-committed-write-wins
//! under SQLite's row-level isolation, with no extra locking here.

use chrono::Utc;
use sqlx::SqlitePool;
use validator::Validate;

use super::models::Snippet;
use super::serializers::{SnippetInput, SnippetPatch};
use crate::error::{Error, Result};

const RETURNING: &str = "id, created, title, code, linenos, language, style, owner_id, highlighted";

/// Pool-backed manager for [`Snippet`] rows.
#[derive(Debug, Clone)]
pub struct SnippetManager {
	pool: SqlitePool,
}

impl SnippetManager {
	pub fn new(pool: SqlitePool) -> Self {
		Self { pool }
	}

	/// Create a snippet: validate, render, insert.
	pub async fn create(&self, input: &SnippetInput, owner_id: i64) -> Result<Snippet> {
		input.validate()?;

		let mut snippet = Snippet {
			id: 0,
			created: Utc::now(),
			title: input.title.clone(),
			code: input.code.clone(),
			linenos: input.linenos,
			language: input.language.clone(),
			style: input.style.clone(),
			owner_id,
			highlighted: String::new(),
		};
		snippet.highlighted = snippet.render()?;

		let stored: Snippet = sqlx::query_as(&format!(
			r#"
			INSERT INTO snippets (created, title, code, linenos, language, style, owner_id, highlighted)
			VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
			RETURNING {RETURNING}
			"#
		))
		.bind(snippet.created)
		.bind(&snippet.title)
		.bind(&snippet.code)
		.bind(snippet.linenos)
		.bind(&snippet.language)
		.bind(&snippet.style)
		.bind(snippet.owner_id)
		.bind(&snippet.highlighted)
		.fetch_one(&self.pool)
		.await?;

		tracing::debug!("Created snippet {} ({})", stored.id, stored.language);
		Ok(stored)
	}

	pub async fn get(&self, id: i64) -> Result<Snippet> {
		sqlx::query_as(&format!(
			r#"
			SELECT {RETURNING}
			FROM snippets
			WHERE id = $1
			"#
		))
		.bind(id)
		.fetch_optional(&self.pool)
		.await?
		.ok_or(Error::NotFound { what: "snippet", id })
	}

	/// All snippets, oldest first.
	pub async fn list(&self) -> Result<Vec<Snippet>> {
		Ok(sqlx::query_as(&format!(
			r#"
			SELECT {RETURNING}
			FROM snippets
			ORDER BY created, id
			"#
		))
		.fetch_all(&self.pool)
		.await?)
	}

	/// One owner's snippets, oldest first.
	pub async fn list_for_owner(&self, owner_id: i64) -> Result<Vec<Snippet>> {
		Ok(sqlx::query_as(&format!(
			r#"
			SELECT {RETURNING}
			FROM snippets
			WHERE owner_id = $1
			ORDER BY created, id
			"#
		))
		.bind(owner_id)
		.fetch_all(&self.pool)
		.await?)
	}

	/// Replace every caller-settable field, re-rendering the document.
	/// `created` and `owner_id` are immutable.
	pub async fn update(&self, id: i64, input: &SnippetInput) -> Result<Snippet> {
		input.validate()?;

		let mut snippet = self.get(id).await?;
		snippet.title = input.title.clone();
		snippet.code = input.code.clone();
		snippet.linenos = input.linenos;
		snippet.language = input.language.clone();
		snippet.style = input.style.clone();
		snippet.highlighted = snippet.render()?;

		self.commit_update(&snippet).await
	}

	/// Merge the provided fields onto the stored row, then re-render. The
	/// recompute is unconditional: even a patch that changes nothing goes
	/// through the full pipeline.
	pub async fn patch(&self, id: i64, patch: &SnippetPatch) -> Result<Snippet> {
		let mut snippet = self.get(id).await?;
		patch.apply(&mut snippet);
		SnippetInput::from(&snippet).validate()?;
		snippet.highlighted = snippet.render()?;

		self.commit_update(&snippet).await
	}

	pub async fn delete(&self, id: i64) -> Result<()> {
		let affected = sqlx::query("DELETE FROM snippets WHERE id = $1")
			.bind(id)
			.execute(&self.pool)
			.await?
			.rows_affected();

		if affected == 0 {
			return Err(Error::NotFound { what: "snippet", id });
		}
		tracing::debug!("Deleted snippet {}", id);
		Ok(())
	}

	/// The stored rendered document, as served by a highlight endpoint.
	pub async fn highlight_document(&self, id: i64) -> Result<String> {
		Ok(self.get(id).await?.highlighted)
	}

	async fn commit_update(&self, snippet: &Snippet) -> Result<Snippet> {
		sqlx::query_as(&format!(
			r#"
			UPDATE snippets
			SET title = $1, code = $2, linenos = $3, language = $4, style = $5, highlighted = $6
			WHERE id = $7
			RETURNING {RETURNING}
			"#
		))
		.bind(&snippet.title)
		.bind(&snippet.code)
		.bind(snippet.linenos)
		.bind(&snippet.language)
		.bind(&snippet.style)
		.bind(&snippet.highlighted)
		.bind(snippet.id)
		.fetch_optional(&self.pool)
		.await?
		.ok_or(Error::NotFound {
			what: "snippet",
			id: snippet.id,
		})
	}
}
