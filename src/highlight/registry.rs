//! Language and style registries.
//!
//! The sets of valid `language` and `style` identifiers are enumerated from
//! syntect's bundled registries the first time either table is touched, and
//! are read-only afterwards. Identifiers are slugs: lowercase, spaces turned
//! into `-`, parentheses dropped, so `"Solarized (dark)"` is addressed as
//! `solarized-dark` and `"Python"` as `python`. A syntax's file extensions
//! are registered as aliases where they do not collide with a name slug.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use syntect::highlighting::{Theme, ThemeSet};
use syntect::parsing::{SyntaxReference, SyntaxSet};

use crate::error::{Error, Result};

static SYNTAX_SET: Lazy<SyntaxSet> = Lazy::new(SyntaxSet::load_defaults_newlines);
static THEME_SET: Lazy<ThemeSet> = Lazy::new(ThemeSet::load_defaults);

/// Slug -> canonical syntax name, one entry per non-hidden syntax plus one
/// per unclaimed file extension.
static LANGUAGES: Lazy<BTreeMap<String, String>> = Lazy::new(|| {
	let mut table = BTreeMap::new();
	for syntax in SYNTAX_SET.syntaxes() {
		if syntax.hidden {
			continue;
		}
		table.insert(slugify(&syntax.name), syntax.name.clone());
	}
	// Extensions never override a name slug.
	for syntax in SYNTAX_SET.syntaxes() {
		if syntax.hidden {
			continue;
		}
		for extension in &syntax.file_extensions {
			table
				.entry(slugify(extension))
				.or_insert_with(|| syntax.name.clone());
		}
	}
	tracing::debug!("Loaded {} language identifiers", table.len());
	table
});

/// Slug -> canonical theme key.
static STYLES: Lazy<BTreeMap<String, String>> = Lazy::new(|| {
	let mut table = BTreeMap::new();
	for key in THEME_SET.themes.keys() {
		table.insert(slugify(key), key.clone());
	}
	tracing::debug!("Loaded {} style identifiers", table.len());
	table
});

fn slugify(raw: &str) -> String {
	raw.to_lowercase()
		.chars()
		.map(|c| if c == ' ' { '-' } else { c })
		.filter(|c| *c != '(' && *c != ')')
		.collect()
}

/// The shared syntax set backing every lookup and render.
pub fn syntax_set() -> &'static SyntaxSet {
	&SYNTAX_SET
}

/// Resolve a language identifier to its syntax definition.
pub fn resolve_language(token: &str) -> Result<&'static SyntaxReference> {
	let name = LANGUAGES
		.get(&slugify(token))
		.ok_or_else(|| Error::UnsupportedLanguage(token.to_string()))?;
	SYNTAX_SET
		.find_syntax_by_name(name)
		.ok_or_else(|| Error::UnsupportedLanguage(token.to_string()))
}

/// Resolve a style identifier to its theme.
pub fn resolve_style(token: &str) -> Result<&'static Theme> {
	let key = STYLES
		.get(&slugify(token))
		.ok_or_else(|| Error::UnsupportedStyle(token.to_string()))?;
	THEME_SET
		.themes
		.get(key)
		.ok_or_else(|| Error::UnsupportedStyle(token.to_string()))
}

/// Whether `token` names a known language.
pub fn is_supported_language(token: &str) -> bool {
	LANGUAGES.contains_key(&slugify(token))
}

/// Whether `token` names a known style.
pub fn is_supported_style(token: &str) -> bool {
	STYLES.contains_key(&slugify(token))
}

/// Sorted `(identifier, display name)` pairs for every supported language.
pub fn language_choices() -> Vec<(&'static str, &'static str)> {
	LANGUAGES
		.iter()
		.map(|(slug, name)| (slug.as_str(), name.as_str()))
		.collect()
}

/// Sorted `(identifier, theme key)` pairs for every supported style.
pub fn style_choices() -> Vec<(&'static str, &'static str)> {
	STYLES
		.iter()
		.map(|(slug, name)| (slug.as_str(), name.as_str()))
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_default_identifiers_are_registered() {
		assert!(is_supported_language("python"));
		assert!(is_supported_style("inspiredgithub"));
	}

	#[rstest]
	fn test_lookup_is_case_insensitive() {
		assert!(is_supported_language("Python"));
		assert!(is_supported_language("RUST"));
	}

	#[rstest]
	fn test_extension_aliases_resolve() {
		// "rs" is the Rust file extension, not a syntax name.
		let syntax = resolve_language("rs").expect("extension alias should resolve");
		assert_eq!(syntax.name, "Rust");
	}

	#[rstest]
	fn test_unknown_identifiers_are_rejected() {
		assert!(matches!(
			resolve_language("not-a-real-language"),
			Err(Error::UnsupportedLanguage(_))
		));
		assert!(matches!(
			resolve_style("not-a-real-style"),
			Err(Error::UnsupportedStyle(_))
		));
	}

	#[rstest]
	fn test_choices_are_sorted_and_nonempty() {
		let languages = language_choices();
		assert!(!languages.is_empty());
		let mut sorted = languages.clone();
		sorted.sort();
		assert_eq!(languages, sorted);

		let styles = style_choices();
		assert!(!styles.is_empty());
		let mut sorted = styles.clone();
		sorted.sort();
		assert_eq!(styles, sorted);
	}

	#[rstest]
	fn test_theme_slugs_drop_parentheses() {
		assert!(is_supported_style("solarized-dark"));
		assert!(is_supported_style("solarized-light"));
	}
}
