//! SQLite pool construction and schema setup.
//!
//! Schema migration tooling is out of scope for this crate; embedders and
//! test fixtures call [`create_schema`] once against an empty database.

use std::str::FromStr;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use crate::config::settings::DatabaseSettings;
use crate::error::Result;

/// DDL for every table the managers operate on.
///
/// Foreign keys carry `ON DELETE CASCADE` where the data model requires it:
/// deleting a user removes their snippets, deleting an article removes its
/// tags, deleting either end of a pizza-topping link removes the link row.
const SCHEMA: &[&str] = &[
	r#"
	CREATE TABLE IF NOT EXISTS users (
		id INTEGER PRIMARY KEY AUTOINCREMENT,
		username VARCHAR(150) NOT NULL UNIQUE,
		created DATETIME NOT NULL
	)
	"#,
	r#"
	CREATE TABLE IF NOT EXISTS snippets (
		id INTEGER PRIMARY KEY AUTOINCREMENT,
		created DATETIME NOT NULL,
		title VARCHAR(100) NOT NULL DEFAULT '',
		code TEXT NOT NULL,
		linenos BOOLEAN NOT NULL DEFAULT 0,
		language VARCHAR(50) NOT NULL DEFAULT 'python',
		style VARCHAR(50) NOT NULL DEFAULT 'inspiredgithub',
		owner_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
		highlighted TEXT NOT NULL
	)
	"#,
	r#"
	CREATE TABLE IF NOT EXISTS tasks (
		id INTEGER PRIMARY KEY AUTOINCREMENT,
		title VARCHAR(100) NOT NULL DEFAULT '',
		code TEXT NOT NULL
	)
	"#,
	r#"
	CREATE TABLE IF NOT EXISTS toppings (
		id INTEGER PRIMARY KEY AUTOINCREMENT,
		name VARCHAR(200) NOT NULL,
		created DATE NOT NULL
	)
	"#,
	r#"
	CREATE TABLE IF NOT EXISTS pizzas (
		id INTEGER PRIMARY KEY AUTOINCREMENT,
		name VARCHAR(255) NOT NULL
	)
	"#,
	r#"
	CREATE TABLE IF NOT EXISTS pizza_toppings (
		pizza_id INTEGER NOT NULL REFERENCES pizzas(id) ON DELETE CASCADE,
		topping_id INTEGER NOT NULL REFERENCES toppings(id) ON DELETE CASCADE,
		PRIMARY KEY (pizza_id, topping_id)
	)
	"#,
	r#"
	CREATE TABLE IF NOT EXISTS articles (
		id INTEGER PRIMARY KEY AUTOINCREMENT,
		name VARCHAR(200) NOT NULL
	)
	"#,
	r#"
	CREATE TABLE IF NOT EXISTS tags (
		id INTEGER PRIMARY KEY AUTOINCREMENT,
		article_id INTEGER NOT NULL REFERENCES articles(id) ON DELETE CASCADE,
		name VARCHAR(255) NOT NULL
	)
	"#,
];

/// Open a connection pool against the configured SQLite database.
///
/// Foreign-key enforcement is switched on for every connection; the cascade
/// rules in the schema depend on it.
pub async fn connect(settings: &DatabaseSettings) -> Result<SqlitePool> {
	let options = SqliteConnectOptions::from_str(&settings.url)?
		.create_if_missing(true)
		.foreign_keys(true);

	let pool = SqlitePoolOptions::new()
		.max_connections(settings.max_connections)
		.connect_with(options)
		.await?;

	tracing::debug!("Connected to {}", settings.url);
	Ok(pool)
}

/// Create every table this crate operates on. Idempotent.
pub async fn create_schema(pool: &SqlitePool) -> Result<()> {
	for statement in SCHEMA {
		sqlx::query(statement).execute(pool).await?;
	}
	tracing::debug!("Schema ready ({} tables)", SCHEMA.len());
	Ok(())
}
