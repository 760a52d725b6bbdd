//! Error types for the snippetbin crate.

use thiserror::Error;

/// Errors surfaced by managers, the highlight renderer and the settings
/// loader.
#[derive(Debug, Error)]
pub enum Error {
	/// The requested language identifier is not in the lexer registry.
	#[error("Unsupported language: {0}")]
	UnsupportedLanguage(String),

	/// The requested style identifier is not in the theme registry.
	#[error("Unsupported style: {0}")]
	UnsupportedStyle(String),

	/// Input payload failed validation rules.
	#[error("Validation error: {0}")]
	Validation(#[from] validator::ValidationErrors),

	/// No row with the given id.
	#[error("{what} not found: {id}")]
	NotFound {
		/// Kind of record that was looked up.
		what: &'static str,
		/// Primary key used for the lookup.
		id: i64,
	},

	/// Store-level failure, surfaced unchanged (includes integrity errors
	/// such as a missing owner reference).
	#[error("Database error: {0}")]
	Database(#[from] sqlx::Error),

	/// The highlighting backend failed while formatting. Rendering is
	/// deterministic, so this is never retried.
	#[error("Render error: {0}")]
	Render(String),

	/// Settings could not be loaded or deserialized.
	#[error("Settings error: {0}")]
	Settings(String),
}

/// Result type alias for snippetbin operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_error_display() {
		let err = Error::UnsupportedLanguage("brainfuck".to_string());
		assert_eq!(err.to_string(), "Unsupported language: brainfuck");

		let err = Error::NotFound {
			what: "snippet",
			id: 42,
		};
		assert_eq!(err.to_string(), "snippet not found: 42");
	}
}
