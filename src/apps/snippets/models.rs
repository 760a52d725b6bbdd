use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::highlight;

/// Language applied when a payload omits one.
pub const DEFAULT_LANGUAGE: &str = "python";

/// Style applied when a payload omits one.
pub const DEFAULT_STYLE: &str = "inspiredgithub";

/// Snippet record.
///
/// `highlighted` is derived state: at the end of any successful save it is
/// exactly the renderer's output for the current
/// `(code, language, style, title, linenos)` tuple. Callers never set it;
/// the manager recomputes it on every create and update. `created` is set
/// once at insert and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Snippet {
	pub id: i64,
	pub created: DateTime<Utc>,
	pub title: String,
	pub code: String,
	pub linenos: bool,
	pub language: String,
	pub style: String,
	pub owner_id: i64,
	pub highlighted: String,
}

impl Snippet {
	/// Render phase of the save pipeline: produce the full HTML document for
	/// the record's current source fields.
	///
	/// Unknown `language` or `style` identifiers fail here, which aborts the
	/// save before the store is touched.
	pub fn render(&self) -> Result<String> {
		highlight::render_document(
			&self.code,
			&self.language,
			&self.style,
			&self.title,
			self.linenos,
		)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	fn snippet(language: &str) -> Snippet {
		Snippet {
			id: 0,
			created: Utc::now(),
			title: String::new(),
			code: "print(1)".to_string(),
			linenos: false,
			language: language.to_string(),
			style: DEFAULT_STYLE.to_string(),
			owner_id: 1,
			highlighted: String::new(),
		}
	}

	#[rstest]
	fn test_render_produces_full_document() {
		let html = snippet(DEFAULT_LANGUAGE).render().expect("should render");
		assert!(html.contains("<!DOCTYPE html>"));
		assert!(html.contains("print"));
	}

	#[rstest]
	fn test_render_rejects_unknown_language() {
		// No plain-text fallback: the save must fail instead.
		assert!(snippet("not-a-real-language").render().is_err());
	}
}
