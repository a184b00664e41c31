//! Escaping helpers for markup and embedded JSON.

/// Escapes text for HTML content and attribute values.
///
/// Replaces `&`, `<`, `>`, `"` and `'`.
pub fn escape_html(s: &str) -> String {
	let mut escaped = String::with_capacity(s.len());
	for c in s.chars() {
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

/// Escapes JSON content for safe embedding in HTML script tags.
///
/// Replaces `</` with `<\/` so that a `</script>` inside a JSON string cannot
/// close the surrounding tag. JSON parsers read `<\/` back as `</`.
pub fn escape_json_for_script(json: &str) -> String {
	json.replace("</", "<\\/")
}

/// Converts a camelCase style key into a hyphenated CSS property name.
pub(super) fn hyphenate(key: &str) -> String {
	let mut css = String::with_capacity(key.len() + 4);
	for c in key.chars() {
		if c.is_ascii_uppercase() {
			css.push('-');
			css.push(c.to_ascii_lowercase());
		} else {
			css.push(c);
		}
	}
	css
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("plain", "plain")]
	#[case("<b>\"Tom\" & 'Jerry'</b>", "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;")]
	#[case("&amp;", "&amp;amp;")]
	fn test_escape_html(#[case] input: &str, #[case] expected: &str) {
		assert_eq!(escape_html(input), expected);
	}

	#[rstest]
	fn test_escape_json_for_script() {
		let json = r#"{"html":"</script><script>alert(1)</script>"}"#;

		let escaped = escape_json_for_script(json);

		assert!(!escaped.contains("</script>"));
		assert_eq!(
			serde_json::from_str::<serde_json::Value>(&escaped).unwrap(),
			serde_json::from_str::<serde_json::Value>(json).unwrap()
		);
	}

	#[rstest]
	#[case("backgroundColor", "background-color")]
	#[case("borderTopLeftRadius", "border-top-left-radius")]
	#[case("color", "color")]
	fn test_hyphenate(#[case] key: &str, #[case] expected: &str) {
		assert_eq!(hyphenate(key), expected);
	}
}
