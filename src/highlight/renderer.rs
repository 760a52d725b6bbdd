//! Full-document snippet renderer.
//!
//! Pure function from a snippet's source fields to a complete, self-contained
//! HTML document. Deterministic for a fixed input tuple: the registries are
//! loaded once per process and only read afterwards, and syntect's
//! highlighting carries no state across calls.

use syntect::easy::HighlightLines;
use syntect::highlighting::{Color, Style};
use syntect::html::{IncludeBackground, styled_line_to_highlighted_html};
use syntect::util::LinesWithEndings;

use crate::error::{Error, Result};
use crate::highlight::registry;

/// Render `code` as a standalone HTML document.
///
/// - `language` and `style` must name entries in the registries; unknown
///   identifiers fail with [`Error::UnsupportedLanguage`] /
///   [`Error::UnsupportedStyle`] and are never papered over with a
///   plain-text fallback.
/// - A non-empty `title` becomes the document heading; an empty one is
///   omitted entirely.
/// - `linenos` selects a two-column gutter table instead of a bare `<pre>`.
pub fn render_document(
	code: &str,
	language: &str,
	style: &str,
	title: &str,
	linenos: bool,
) -> Result<String> {
	let syntax = registry::resolve_language(language)?;
	let theme = registry::resolve_style(style)?;

	let mut highlighter = HighlightLines::new(syntax, theme);
	let mut lines = Vec::new();
	for line in LinesWithEndings::from(code) {
		let ranges: Vec<(Style, &str)> = highlighter
			.highlight_line(line, registry::syntax_set())
			.map_err(|e| Error::Render(e.to_string()))?;
		let line_html = styled_line_to_highlighted_html(&ranges[..], IncludeBackground::No)
			.map_err(|e| Error::Render(e.to_string()))?;
		lines.push(line_html);
	}

	let background = hex(theme.settings.background.unwrap_or(Color::WHITE));
	let foreground = hex(theme.settings.foreground.unwrap_or(Color::BLACK));

	let mut body = String::new();
	if !title.is_empty() {
		body.push_str("<h1 class=\"title\">");
		body.push_str(&escape(title));
		body.push_str("</h1>\n");
	}
	if linenos {
		let gutter: Vec<String> = (1..=lines.len()).map(|n| n.to_string()).collect();
		body.push_str("<table class=\"highlighttable\"><tr><td class=\"linenos\"><pre>");
		body.push_str(&gutter.join("\n"));
		body.push_str("</pre></td><td class=\"code\"><pre>");
		body.push_str(&lines.concat());
		body.push_str("</pre></td></tr></table>\n");
	} else {
		body.push_str("<pre class=\"highlight\">");
		body.push_str(&lines.concat());
		body.push_str("</pre>\n");
	}

	Ok(format!(
		"<!DOCTYPE html>\n\
		<html>\n\
		<head>\n\
		<meta charset=\"utf-8\"/>\n\
		<title>{title}</title>\n\
		<style>\n\
		body {{ background-color: {background}; color: {foreground}; margin: 0; padding: 1em; }}\n\
		pre {{ font-family: monospace; margin: 0; }}\n\
		td.linenos {{ text-align: right; padding-right: 0.8em; opacity: 0.6; }}\n\
		h1.title {{ font-family: sans-serif; font-size: 1.2em; }}\n\
		</style>\n\
		</head>\n\
		<body>\n\
		{body}\
		</body>\n\
		</html>\n",
		title = escape(title),
		background = background,
		foreground = foreground,
		body = body,
	))
}

fn hex(color: Color) -> String {
	format!("#{:02x}{:02x}{:02x}", color.r, color.g, color.b)
}

fn escape(raw: &str) -> String {
	let mut escaped = String::with_capacity(raw.len());
	for c in raw.chars() {
		match c {
			'&' => escaped.push_str("&amp;"),
			'<' => escaped.push_str("&lt;"),
			'>' => escaped.push_str("&gt;"),
			'"' => escaped.push_str("&quot;"),
			'\'' => escaped.push_str("&#39;"),
			_ => escaped.push(c),
		}
	}
	escaped
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	const CODE: &str = "def hello():\n    print('Hello!')\n";

	#[rstest]
	fn test_renders_complete_document() {
		let html = render_document(CODE, "python", "inspiredgithub", "", false)
			.expect("python/inspiredgithub should render");

		assert!(html.starts_with("<!DOCTYPE html>"));
		assert!(html.ends_with("</html>\n"));
		assert!(html.contains("<span"), "expected syntax-colored spans");
		assert!(html.contains("def"));
	}

	#[rstest]
	fn test_rendering_is_deterministic() {
		let first = render_document(CODE, "python", "base16-ocean.dark", "T", true).unwrap();
		let second = render_document(CODE, "python", "base16-ocean.dark", "T", true).unwrap();
		assert_eq!(first, second);
	}

	#[rstest]
	fn test_linenos_toggle_gutter() {
		let with = render_document(CODE, "python", "inspiredgithub", "", true).unwrap();
		assert!(with.contains("class=\"linenos\""));
		assert!(with.contains("<table"));
		// One gutter entry per source line.
		assert!(with.contains(">1\n2<"));

		let without = render_document(CODE, "python", "inspiredgithub", "", false).unwrap();
		assert!(!without.contains("class=\"linenos\""));
		assert!(!without.contains("<table"));
	}

	#[rstest]
	fn test_title_heading() {
		let titled = render_document(CODE, "python", "inspiredgithub", "Example", false).unwrap();
		assert!(titled.contains("<h1 class=\"title\">Example</h1>"));

		let untitled = render_document(CODE, "python", "inspiredgithub", "", false).unwrap();
		assert!(!untitled.contains("<h1"));
	}

	#[rstest]
	fn test_title_is_escaped() {
		let html =
			render_document(CODE, "python", "inspiredgithub", "<script>alert(1)</script>", false)
				.unwrap();
		assert!(!html.contains("<script>"));
		assert!(html.contains("&lt;script&gt;"));
	}

	#[rstest]
	fn test_unknown_identifiers_fail() {
		assert!(matches!(
			render_document(CODE, "not-a-real-language", "inspiredgithub", "", false),
			Err(Error::UnsupportedLanguage(_))
		));
		assert!(matches!(
			render_document(CODE, "python", "not-a-real-style", "", false),
			Err(Error::UnsupportedStyle(_))
		));
	}

	#[rstest]
	fn test_every_style_choice_renders() {
		for (slug, _) in registry::style_choices() {
			let html = render_document(CODE, "python", slug, "", false)
				.unwrap_or_else(|e| panic!("style {} failed: {}", slug, e));
			assert!(html.contains("<!DOCTYPE html>"));
			assert!(html.contains("</html>"));
		}
	}

	#[rstest]
	fn test_every_language_choice_renders() {
		for (slug, _) in registry::language_choices() {
			let html = render_document("print(1)\n", slug, "inspiredgithub", "", false)
				.unwrap_or_else(|e| panic!("language {} failed: {}", slug, e));
			assert!(!html.is_empty());
			assert!(html.contains("<!DOCTYPE html>"));
		}
	}

	#[rstest]
	fn test_python_scenario() {
		let html = render_document("print(1)", "python", "inspiredgithub", "", false).unwrap();
		assert!(html.contains("print"));
		assert!(html.contains("<span"));
		assert!(!html.contains("<table"));
	}
}
