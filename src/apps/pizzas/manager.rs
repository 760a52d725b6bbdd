//! Store operations for pizzas, toppings and their links.

use chrono::Utc;
use sqlx::SqlitePool;

use super::models::{Pizza, Topping};
use crate::error::{Error, Result};

/// Pool-backed manager for [`Pizza`] and [`Topping`] rows.
#[derive(Debug, Clone)]
pub struct PizzaManager {
	pool: SqlitePool,
}

impl PizzaManager {
	pub fn new(pool: SqlitePool) -> Self {
		Self { pool }
	}

	pub async fn create(&self, name: &str) -> Result<Pizza> {
		Ok(sqlx::query_as(
			r#"
			INSERT INTO pizzas (name)
			VALUES ($1)
			RETURNING id, name
			"#,
		)
		.bind(name)
		.fetch_one(&self.pool)
		.await?)
	}

	pub async fn get(&self, id: i64) -> Result<Pizza> {
		sqlx::query_as("SELECT id, name FROM pizzas WHERE id = $1")
			.bind(id)
			.fetch_optional(&self.pool)
			.await?
			.ok_or(Error::NotFound { what: "pizza", id })
	}

	pub async fn list(&self) -> Result<Vec<Pizza>> {
		Ok(sqlx::query_as("SELECT id, name FROM pizzas ORDER BY id")
			.fetch_all(&self.pool)
			.await?)
	}

	/// Delete a pizza; its topping links go with it, the toppings stay.
	pub async fn delete(&self, id: i64) -> Result<()> {
		let affected = sqlx::query("DELETE FROM pizzas WHERE id = $1")
			.bind(id)
			.execute(&self.pool)
			.await?
			.rows_affected();

		if affected == 0 {
			return Err(Error::NotFound { what: "pizza", id });
		}
		Ok(())
	}

	pub async fn create_topping(&self, name: &str) -> Result<Topping> {
		Ok(sqlx::query_as(
			r#"
			INSERT INTO toppings (name, created)
			VALUES ($1, $2)
			RETURNING id, name, created
			"#,
		)
		.bind(name)
		.bind(Utc::now().date_naive())
		.fetch_one(&self.pool)
		.await?)
	}

	pub async fn list_toppings(&self) -> Result<Vec<Topping>> {
		Ok(
			sqlx::query_as("SELECT id, name, created FROM toppings ORDER BY id")
				.fetch_all(&self.pool)
				.await?,
		)
	}

	/// Link one topping to a pizza. Linking twice is a no-op.
	pub async fn add_topping(&self, pizza_id: i64, topping_id: i64) -> Result<()> {
		sqlx::query(
			r#"
			INSERT OR IGNORE INTO pizza_toppings (pizza_id, topping_id)
			VALUES ($1, $2)
			"#,
		)
		.bind(pizza_id)
		.bind(topping_id)
		.execute(&self.pool)
		.await?;
		Ok(())
	}

	/// Replace a pizza's topping set atomically.
	pub async fn set_toppings(&self, pizza_id: i64, topping_ids: &[i64]) -> Result<()> {
		let mut tx = self.pool.begin().await?;

		sqlx::query("DELETE FROM pizza_toppings WHERE pizza_id = $1")
			.bind(pizza_id)
			.execute(&mut *tx)
			.await?;
		for topping_id in topping_ids {
			sqlx::query(
				r#"
				INSERT OR IGNORE INTO pizza_toppings (pizza_id, topping_id)
				VALUES ($1, $2)
				"#,
			)
			.bind(pizza_id)
			.bind(topping_id)
			.execute(&mut *tx)
			.await?;
		}

		tx.commit().await?;
		Ok(())
	}

	/// A pizza's toppings, in link order.
	pub async fn toppings(&self, pizza_id: i64) -> Result<Vec<Topping>> {
		Ok(sqlx::query_as(
			r#"
			SELECT t.id, t.name, t.created
			FROM toppings t
			JOIN pizza_toppings pt ON pt.topping_id = t.id
			WHERE pt.pizza_id = $1
			ORDER BY t.id
			"#,
		)
		.bind(pizza_id)
		.fetch_all(&self.pool)
		.await?)
	}
}
