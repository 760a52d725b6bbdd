use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Topping record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Topping {
	pub id: i64,
	pub name: String,
	pub created: NaiveDate,
}

impl std::fmt::Display for Topping {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.name)
	}
}

/// Pizza record; its toppings live in the join table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Pizza {
	pub id: i64,
	pub name: String,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_topping_displays_as_name() {
		let topping = Topping {
			id: 1,
			name: "Mushroom".to_string(),
			created: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
		};
		assert_eq!(topping.to_string(), "Mushroom");
	}
}
