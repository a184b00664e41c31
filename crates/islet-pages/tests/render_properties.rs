//! Property-based tests for the static renderer.

use islet_pages::ssr::{escape_html, render, render_nodes};
use islet_payload::{Node, Payload, PropMap};
use proptest::prelude::*;
use serde_json::json;

fn text_strategy() -> impl Strategy<Value = String> {
	prop_oneof![
		"[a-zA-Z0-9 ]{0,20}",
		"[<>&\"' a-z]{0,20}",
		any::<String>(),
	]
}

fn node_strategy() -> impl Strategy<Value = Node> {
	let leaf = prop_oneof![
		text_strategy().prop_map(Node::text),
		"[A-Z][a-z]{0,6}_[0-9]".prop_map(|id| Node::placeholder(
			id.clone(),
			format!("components/{}", id),
			PropMap::new()
		)),
	];
	leaf.prop_recursive(4, 32, 4, |inner| {
		prop_oneof![
			(
				prop::sample::select(vec!["div", "span", "p", "ul", "li"]),
				text_strategy(),
				prop::collection::vec(inner.clone(), 0..4)
			)
				.prop_map(|(tag, title, children)| {
					let mut props = PropMap::new();
					props.insert("title".to_string(), json!(title));
					Node::element(tag, props, children)
				}),
			prop::collection::vec(inner, 0..4).prop_map(Node::fragment),
		]
	})
}

proptest! {
	/// Rendering the same payload twice yields the same markup.
	#[test]
	fn prop_render_is_idempotent(tree in prop::collection::vec(node_strategy(), 0..4)) {
		let payload = Payload::new(tree, Default::default());

		prop_assert_eq!(render(&payload), render(&payload));
	}

	/// Decoding an encoded payload does not change its markup.
	#[test]
	fn prop_render_survives_wire_format(tree in prop::collection::vec(node_strategy(), 0..4)) {
		let payload = Payload::new(tree, Default::default());
		let decoded = Payload::from_json(&payload.to_json().unwrap()).unwrap();

		prop_assert_eq!(render(&payload), render(&decoded));
	}

	/// Escaped text never contains raw markup characters.
	#[test]
	fn prop_escaped_text_has_no_markup(text in text_strategy()) {
		let escaped = escape_html(&text);

		prop_assert!(!escaped.contains('<'));
		prop_assert!(!escaped.contains('>'));
		prop_assert!(!escaped.contains('"'));
		prop_assert!(!escaped.contains('\''));
	}

	/// Text nodes render as their escaped content and nothing else.
	#[test]
	fn prop_text_node_renders_escaped(text in text_strategy()) {
		prop_assert_eq!(render_nodes(&[Node::text(text.clone())]), escape_html(&text));
	}

	/// A fragment renders as the concatenation of its children.
	#[test]
	fn prop_fragment_is_concatenation(children in prop::collection::vec(node_strategy(), 0..4)) {
		let expected: String = children.iter().map(|child| render_nodes(std::slice::from_ref(child))).collect();

		prop_assert_eq!(render_nodes(&[Node::fragment(children)]), expected);
	}
}
