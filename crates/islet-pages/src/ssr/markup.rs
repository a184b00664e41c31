//! Payload → HTML markup.

use super::escape::{escape_html, hyphenate};
use super::markers::placeholder_markup;
use islet_payload::{ElementNode, Node, Payload, PropMap};
use serde_json::{Map, Value};

/// Elements rendered as `<tag ... />` with no children.
const VOID_ELEMENTS: [&str; 13] = [
	"area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
	"wbr",
];

/// Prop keys that never become attributes.
const SKIPPED_PROPS: [&str; 4] = ["children", "key", "ref", "dangerouslySetInnerHTML"];

/// Returns `true` if `name` can be written as a tag name: an ASCII letter
/// followed by ASCII letters, digits or hyphens.
pub fn is_valid_tag_name(name: &str) -> bool {
	let mut chars = name.chars();
	chars.next().is_some_and(|c| c.is_ascii_alphabetic())
		&& chars.all(|c| c.is_ascii_alphanumeric() || c == '-')
}

/// Returns `true` if `name` can be written as an attribute name.
pub fn is_valid_attribute_name(name: &str) -> bool {
	!name.is_empty()
		&& !name.chars().any(|c| {
			c.is_whitespace() || c.is_control() || matches!(c, '"' | '\'' | '<' | '>' | '/' | '=' | '&')
		})
}

/// Returns `true` if `tag` is an HTML void element.
pub fn is_void_element(tag: &str) -> bool {
	VOID_ELEMENTS.contains(&tag)
}

/// Renders a payload's tree to an HTML fragment.
///
/// Consumer-side placeholders become empty mount points. No document
/// scaffolding is emitted.
///
/// ```
/// use islet_payload::{Node, Payload};
///
/// let payload = Payload::new(
/// 	vec![Node::placeholder("Counter_0", "components/Counter", Default::default())],
/// 	[("Counter_0".to_string(), "components/Counter".to_string())].into_iter().collect(),
/// );
///
/// assert_eq!(
/// 	islet_pages::ssr::render(&payload),
/// 	r#"<div data-rsc-placeholder="Counter_0"></div>"#
/// );
/// ```
pub fn render(payload: &Payload) -> String {
	render_nodes(payload.tree())
}

/// Renders a node sequence to an HTML fragment.
pub fn render_nodes(nodes: &[Node]) -> String {
	let mut output = String::new();
	for node in nodes {
		render_node(node, &mut output);
	}
	output
}

fn render_node(node: &Node, output: &mut String) {
	match node {
		Node::Text(text) => output.push_str(&escape_html(&text.content)),
		Node::Fragment(fragment) => {
			for child in &fragment.children {
				render_node(child, output);
			}
		}
		Node::Element(element) => render_element(element, output),
		Node::ClientPlaceholder(placeholder) => {
			output.push_str(&placeholder_markup(&placeholder.id))
		}
	}
}

fn render_element(element: &ElementNode, output: &mut String) {
	if !is_valid_tag_name(&element.tag) {
		tracing::warn!("Invalid tag name, rendering children only: {:?}", element.tag);
		for child in &element.children {
			render_node(child, output);
		}
		return;
	}

	output.push('<');
	output.push_str(&element.tag);
	output.push_str(&attributes(&element.props));

	if is_void_element(&element.tag) {
		output.push_str(" />");
		return;
	}

	output.push('>');
	for child in &element.children {
		render_node(child, output);
	}
	output.push_str("</");
	output.push_str(&element.tag);
	output.push('>');
}

fn attributes(props: &PropMap) -> String {
	let mut attrs = Vec::new();

	for (key, value) in props {
		if SKIPPED_PROPS.contains(&key.as_str()) {
			continue;
		}
		let name = if key == "className" { "class" } else { key.as_str() };
		if !is_valid_attribute_name(name) {
			tracing::warn!("Invalid attribute name, skipping: {:?}", name);
			continue;
		}

		match value {
			Value::Object(style) if key == "style" => {
				let css = style_declarations(style);
				if !css.is_empty() {
					attrs.push(format!("style=\"{}\"", escape_html(&css)));
				}
			}
			Value::Bool(true) => attrs.push(name.to_string()),
			Value::Bool(false) | Value::Null => {}
			other => attrs.push(format!("{}=\"{}\"", name, escape_html(&display(other)))),
		}
	}

	if attrs.is_empty() {
		String::new()
	} else {
		format!(" {}", attrs.join(" "))
	}
}

fn style_declarations(style: &Map<String, Value>) -> String {
	style
		.iter()
		.filter(|(_, value)| !value.is_null())
		.map(|(key, value)| format!("{}: {}", hyphenate(key), display(value)))
		.collect::<Vec<_>>()
		.join("; ")
}

/// String form of a prop value as it appears in markup.
fn display(value: &Value) -> String {
	match value {
		Value::Null => String::new(),
		Value::Bool(b) => b.to_string(),
		Value::Number(n) => n.to_string(),
		Value::String(s) => s.clone(),
		Value::Array(items) => items.iter().map(display).collect::<Vec<_>>().join(","),
		Value::Object(_) => value.to_string(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	fn element(tag: &str, props: Value, children: Vec<Node>) -> Node {
		Node::element(tag, serde_json::from_value(props).unwrap(), children)
	}

	#[rstest]
	fn test_element_with_text_child() {
		let html = render_nodes(&[element(
			"div",
			json!({}),
			vec![Node::text("hello")],
		)]);

		assert_eq!(html, "<div>hello</div>");
	}

	#[rstest]
	#[case("img", json!({"src": "/a.png", "alt": "A"}), r#"<img src="/a.png" alt="A" />"#)]
	#[case("br", json!({}), "<br />")]
	#[case("wbr", json!({}), "<wbr />")]
	#[case("source", json!({"srcset": "x.webp"}), r#"<source srcset="x.webp" />"#)]
	fn test_void_elements_self_close(#[case] tag: &str, #[case] props: Value, #[case] expected: &str) {
		assert_eq!(render_nodes(&[element(tag, props, vec![])]), expected);
	}

	#[rstest]
	fn test_attribute_rules() {
		let html = render_nodes(&[element(
			"input",
			json!({
				"className": "field",
				"disabled": true,
				"hidden": false,
				"placeholder": null,
				"key": "k",
				"dangerouslySetInnerHTML": {"__html": "<b>x</b>"},
				"value": "a \"quoted\" <value>",
				"tabIndex": 2
			}),
			vec![],
		)]);

		assert_eq!(
			html,
			r#"<input class="field" disabled value="a &quot;quoted&quot; &lt;value&gt;" tabIndex="2" />"#
		);
	}

	#[rstest]
	fn test_style_map_becomes_declarations() {
		let html = render_nodes(&[element(
			"p",
			json!({"style": {"backgroundColor": "#fff", "marginTop": 0, "color": null}}),
			vec![],
		)]);

		assert_eq!(html, r#"<p style="background-color: #fff; margin-top: 0"></p>"#);
	}

	#[rstest]
	fn test_empty_style_is_omitted() {
		let html = render_nodes(&[element("p", json!({"style": {"color": null}}), vec![])]);

		assert_eq!(html, "<p></p>");
	}

	#[rstest]
	fn test_lists_and_maps_in_attributes() {
		let html = render_nodes(&[element(
			"div",
			json!({"data-items": ["a", 1, null], "data-config": {"k": "v"}}),
			vec![],
		)]);

		assert_eq!(
			html,
			r#"<div data-items="a,1," data-config="{&quot;k&quot;:&quot;v&quot;}"></div>"#
		);
	}

	#[rstest]
	fn test_fragments_and_placeholders() {
		let html = render_nodes(&[Node::fragment(vec![
			Node::text("a < b"),
			Node::placeholder("Counter_0", "components/Counter", PropMap::new()),
		])]);

		assert_eq!(
			html,
			r#"a &lt; b<div data-rsc-placeholder="Counter_0"></div>"#
		);
	}

	#[rstest]
	fn test_placeholder_children_are_not_rendered() {
		let placeholder = Node::placeholder(
			"InteractiveCard_0",
			"components/InteractiveCard",
			serde_json::from_value(json!({"children": [{"$$type": "text", "content": "x"}]})).unwrap(),
		);

		assert_eq!(
			render_nodes(&[placeholder]),
			r#"<div data-rsc-placeholder="InteractiveCard_0"></div>"#
		);
	}

	#[rstest]
	#[case::attribute_injection("img src=x onerror=alert(1)")]
	#[case::closing_bracket("div>")]
	#[case::empty("")]
	#[case::leading_digit("1div")]
	fn test_invalid_tag_renders_children_only(#[case] tag: &str) {
		let html = render_nodes(&[element(tag, json!({"id": "x"}), vec![Node::text("a & b")])]);

		assert_eq!(html, "a &amp; b");
	}

	#[rstest]
	fn test_invalid_attribute_names_are_skipped() {
		let html = render_nodes(&[element(
			"div",
			json!({
				"x\" onmouseover=\"alert(1)": "v",
				"a b": "v",
				"a/b": 1,
				"data-ok": "kept",
				"aria-label": "Close"
			}),
			vec![],
		)]);

		assert_eq!(html, r#"<div data-ok="kept" aria-label="Close"></div>"#);
	}

	#[rstest]
	#[case("div", true)]
	#[case("my-widget", true)]
	#[case("h1", true)]
	#[case("-x", false)]
	#[case("a b", false)]
	#[case("a/b", false)]
	fn test_tag_name_validation(#[case] name: &str, #[case] valid: bool) {
		assert_eq!(is_valid_tag_name(name), valid);
	}
}
