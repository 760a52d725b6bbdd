//! Profile-aware settings loading.
//!
//! Sources are merged lowest priority first: built-in defaults, then
//! `SNIPPETBIN_*` environment variables, then `settings/base.toml`, then
//! `settings/{profile}.toml`. The profile comes from `SNIPPETBIN_ENV`,
//! falling back to `ci` when a CI environment is detected and `local`
//! otherwise.

use std::env;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use toml::{Table, Value};

use crate::error::{Error, Result};
use crate::highlight::registry;

/// Typed settings for the whole crate.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
	pub debug: bool,
	pub database: DatabaseSettings,
	pub highlight: HighlightSettings,
}

impl Default for Settings {
	fn default() -> Self {
		Self {
			debug: true,
			database: DatabaseSettings::default(),
			highlight: HighlightSettings::default(),
		}
	}
}

/// Connection settings for the SQLite store.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseSettings {
	pub url: String,
	pub max_connections: u32,
}

impl Default for DatabaseSettings {
	fn default() -> Self {
		Self {
			url: "sqlite://snippetbin.db?mode=rwc".to_string(),
			max_connections: 5,
		}
	}
}

/// Defaults applied to snippet payloads that omit a language or style.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HighlightSettings {
	pub default_language: String,
	pub default_style: String,
}

impl Default for HighlightSettings {
	fn default() -> Self {
		Self {
			default_language: "python".to_string(),
			default_style: "inspiredgithub".to_string(),
		}
	}
}

/// Resolve the active profile name.
pub fn profile() -> String {
	env::var("SNIPPETBIN_ENV").unwrap_or_else(|_| {
		if env::var("CI").is_ok() {
			"ci".to_string()
		} else {
			"local".to_string()
		}
	})
}

/// Load settings from `./settings` for the active profile.
pub fn get_settings() -> Result<Settings> {
	let base_dir = env::current_dir().map_err(|e| Error::Settings(e.to_string()))?;
	load_from_dir(&base_dir.join("settings"), &profile())
}

/// Load settings from an explicit directory and profile.
pub fn load_from_dir(settings_dir: &Path, profile: &str) -> Result<Settings> {
	let mut merged = Table::new();

	apply_env_overrides(&mut merged);

	for path in [
		settings_dir.join("base.toml"),
		settings_dir.join(format!("{}.toml", profile)),
	] {
		if path.exists() {
			let text = fs::read_to_string(&path).map_err(|e| Error::Settings(e.to_string()))?;
			let table: Table = toml::from_str(&text)
				.map_err(|e| Error::Settings(format!("{}: {}", path.display(), e)))?;
			merge_into(&mut merged, table);
		}
	}

	let rendered = toml::to_string(&merged).map_err(|e| Error::Settings(e.to_string()))?;
	let settings: Settings =
		toml::from_str(&rendered).map_err(|e| Error::Settings(e.to_string()))?;

	// A default that the registry cannot resolve would make every
	// defaulted save fail; reject it at load time instead.
	if !registry::is_supported_language(&settings.highlight.default_language) {
		return Err(Error::UnsupportedLanguage(
			settings.highlight.default_language,
		));
	}
	if !registry::is_supported_style(&settings.highlight.default_style) {
		return Err(Error::UnsupportedStyle(settings.highlight.default_style));
	}

	tracing::debug!("Settings loaded for profile {}", profile);
	Ok(settings)
}

/// Recursively overlay `incoming` onto `target`; scalar values from
/// `incoming` win, nested tables merge key by key.
fn merge_into(target: &mut Table, incoming: Table) {
	for (key, value) in incoming {
		match (target.get_mut(&key), value) {
			(Some(Value::Table(existing)), Value::Table(incoming)) => {
				merge_into(existing, incoming);
			}
			(_, value) => {
				target.insert(key, value);
			}
		}
	}
}

/// Low-priority environment overrides, below any settings file.
fn apply_env_overrides(target: &mut Table) {
	if let Ok(raw) = env::var("SNIPPETBIN_DEBUG") {
		if let Ok(debug) = raw.parse::<bool>() {
			target.insert("debug".to_string(), Value::Boolean(debug));
		}
	}
	if let Ok(url) = env::var("SNIPPETBIN_DATABASE_URL") {
		nested(target, "database").insert("url".to_string(), Value::String(url));
	}
	if let Ok(raw) = env::var("SNIPPETBIN_DATABASE_MAX_CONNECTIONS") {
		if let Ok(n) = raw.parse::<i64>() {
			nested(target, "database").insert("max_connections".to_string(), Value::Integer(n));
		}
	}
	if let Ok(language) = env::var("SNIPPETBIN_DEFAULT_LANGUAGE") {
		nested(target, "highlight").insert("default_language".to_string(), Value::String(language));
	}
	if let Ok(style) = env::var("SNIPPETBIN_DEFAULT_STYLE") {
		nested(target, "highlight").insert("default_style".to_string(), Value::String(style));
	}
}

fn nested<'a>(target: &'a mut Table, key: &str) -> &'a mut Table {
	let entry = target
		.entry(key.to_string())
		.or_insert_with(|| Value::Table(Table::new()));
	match entry {
		Value::Table(table) => table,
		other => {
			*other = Value::Table(Table::new());
			match other {
				Value::Table(table) => table,
				_ => unreachable!(),
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_defaults() {
		let settings = Settings::default();
		assert!(settings.debug);
		assert_eq!(settings.database.max_connections, 5);
		assert_eq!(settings.highlight.default_language, "python");
		assert_eq!(settings.highlight.default_style, "inspiredgithub");
	}

	#[rstest]
	fn test_missing_directory_yields_defaults() {
		let dir = tempfile::tempdir().expect("Failed to create temp dir");
		let settings =
			load_from_dir(&dir.path().join("does-not-exist"), "local").expect("should load");
		assert_eq!(settings.database.max_connections, 5);
	}

	#[rstest]
	fn test_profile_file_overrides_base() {
		let dir = tempfile::tempdir().expect("Failed to create temp dir");
		fs::write(
			dir.path().join("base.toml"),
			"debug = true\n[database]\nurl = \"sqlite://base.db\"\nmax_connections = 3\n",
		)
		.unwrap();
		fs::write(
			dir.path().join("ci.toml"),
			"debug = false\n[database]\nurl = \"sqlite://ci.db\"\n",
		)
		.unwrap();

		let settings = load_from_dir(dir.path(), "ci").expect("should load");
		assert!(!settings.debug);
		assert_eq!(settings.database.url, "sqlite://ci.db");
		// Untouched nested keys survive the overlay.
		assert_eq!(settings.database.max_connections, 3);
	}

	#[rstest]
	fn test_unsupported_default_language_is_rejected() {
		let dir = tempfile::tempdir().expect("Failed to create temp dir");
		fs::write(
			dir.path().join("base.toml"),
			"[highlight]\ndefault_language = \"not-a-real-language\"\n",
		)
		.unwrap();

		assert!(matches!(
			load_from_dir(dir.path(), "local"),
			Err(Error::UnsupportedLanguage(_))
		));
	}

	#[rstest]
	fn test_merge_into_overlays_scalars_and_merges_tables() {
		let mut target: Table = toml::from_str("a = 1\n[t]\nx = 1\ny = 2\n").unwrap();
		let incoming: Table = toml::from_str("a = 2\n[t]\ny = 3\n").unwrap();
		merge_into(&mut target, incoming);

		assert_eq!(target.get("a"), Some(&Value::Integer(2)));
		let t = match target.get("t") {
			Some(Value::Table(t)) => t,
			other => panic!("expected table, got {:?}", other),
		};
		assert_eq!(t.get("x"), Some(&Value::Integer(1)));
		assert_eq!(t.get("y"), Some(&Value::Integer(3)));
	}
}
