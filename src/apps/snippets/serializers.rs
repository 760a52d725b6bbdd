use serde::{Deserialize, Serialize};
use validator::Validate;

use super::models::{DEFAULT_LANGUAGE, DEFAULT_STYLE, Snippet};

/// Payload for creating or fully replacing a snippet.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SnippetInput {
	#[serde(default)]
	#[validate(length(max = 100, message = "Title must be at most 100 characters"))]
	pub title: String,

	#[validate(length(min = 1, message = "Code cannot be empty"))]
	pub code: String,

	#[serde(default = "default_language")]
	#[validate(length(
		min = 1,
		max = 50,
		message = "Language must be between 1 and 50 characters"
	))]
	pub language: String,

	#[serde(default = "default_style")]
	#[validate(length(
		min = 1,
		max = 50,
		message = "Style must be between 1 and 50 characters"
	))]
	pub style: String,

	#[serde(default)]
	pub linenos: bool,
}

fn default_language() -> String {
	DEFAULT_LANGUAGE.to_string()
}

fn default_style() -> String {
	DEFAULT_STYLE.to_string()
}

impl From<&Snippet> for SnippetInput {
	fn from(snippet: &Snippet) -> Self {
		Self {
			title: snippet.title.clone(),
			code: snippet.code.clone(),
			language: snippet.language.clone(),
			style: snippet.style.clone(),
			linenos: snippet.linenos,
		}
	}
}

/// Partial-update payload; absent fields keep their stored values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SnippetPatch {
	pub title: Option<String>,
	pub code: Option<String>,
	pub language: Option<String>,
	pub style: Option<String>,
	pub linenos: Option<bool>,
}

impl SnippetPatch {
	/// Overlay the provided fields onto a stored record.
	pub fn apply(&self, snippet: &mut Snippet) {
		if let Some(title) = &self.title {
			snippet.title = title.clone();
		}
		if let Some(code) = &self.code {
			snippet.code = code.clone();
		}
		if let Some(language) = &self.language {
			snippet.language = language.clone();
		}
		if let Some(style) = &self.style {
			snippet.style = style.clone();
		}
		if let Some(linenos) = self.linenos {
			snippet.linenos = linenos;
		}
	}
}
