//! End-to-end properties of serialize → render → rebuild.

mod common;

use common::*;
use islet_pages::component::{Component, Props, View};
use islet_pages::hydration::{ComponentRegistry, LiveNode, rebuild};
use islet_pages::rsc::{
	self, DEFAULT_MAX_DEPTH, SerializationContext, SerializeError, Serializer, SerializerOptions,
};
use islet_pages::ssr;
use islet_payload::{MAX_ENCODED_DEPTH, Node, Payload};
use rstest::*;
use serde_json::json;
use std::time::Duration;

#[fixture]
async fn home_payload() -> Payload {
	rsc::create_payload(&home(), Props::new()).await.unwrap()
}

#[rstest]
#[tokio::test]
async fn test_example_payload_shape() {
	let root: View = View::element("div")
		.child("hello")
		.child(counter().view(Props::new().with("initial", 0)))
		.into();

	let payload = Serializer::new().serialize_to_payload(root).await.unwrap();

	let expected = json!({
		"version": "1.0",
		"tree": [{
			"$$type": "element",
			"tag": "div",
			"props": {},
			"children": [
				{"$$type": "text", "content": "hello"},
				{
					"$$type": "client-placeholder",
					"id": "Counter_0",
					"componentPath": "components/Counter",
					"props": {"initial": 0}
				}
			]
		}],
		"clientComponents": {"Counter_0": "components/Counter"}
	});
	assert_eq!(serde_json::to_value(&payload).unwrap(), expected);
}

#[rstest]
#[tokio::test]
async fn test_sibling_instances_get_sequential_ids() {
	let root: View = View::element("div")
		.child(counter().view(Props::new()))
		.child(counter().view(Props::new()))
		.into();
	let mut context = SerializationContext::new();

	let tree = rsc::serialize(root, &mut context).await.unwrap();

	let ids: Vec<_> = tree[0]
		.as_element()
		.unwrap()
		.children
		.iter()
		.map(|node| node.as_placeholder().unwrap().id.clone())
		.collect();
	assert_eq!(ids, vec!["Counter_0", "Counter_1"]);
	assert_eq!(context.discovered().len(), 2);
}

#[rstest]
#[tokio::test]
async fn test_registry_keys_match_reachable_placeholders(#[future] home_payload: Payload) {
	let payload = home_payload.await;

	let mut keys: Vec<_> = payload.client_components().keys().cloned().collect();
	let mut ids = payload.placeholder_ids();
	keys.sort();
	ids.sort();

	assert_eq!(keys, ids);
	assert_eq!(keys, vec!["Counter_0", "Counter_1", "InteractiveCard_0"]);
	payload.validate().unwrap();
}

#[rstest]
#[tokio::test]
async fn test_nested_client_components_are_both_registered(#[future] home_payload: Payload) {
	let payload = home_payload.await;

	let main = payload.tree()[0].as_element().unwrap();
	let card = main.children[2].as_placeholder().unwrap();
	let nested = card.child_nodes().unwrap();

	assert_eq!(card.id, "InteractiveCard_0");
	assert_eq!(card.props["title"], "Card");
	assert_eq!(nested.len(), 1);
	let inner = nested[0].as_placeholder().unwrap();
	assert_eq!(inner.id, "Counter_1");
	assert_eq!(inner.props["initial"], 5);
	assert_eq!(
		payload.client_components().get("Counter_1").map(String::as_str),
		Some("components/Counter")
	);
}

#[rstest]
#[tokio::test]
async fn test_render_is_idempotent(#[future] home_payload: Payload) {
	let payload = home_payload.await;

	let first = ssr::render(&payload);
	let second = ssr::render(&payload);

	assert_eq!(first, second);
	assert_eq!(
		first,
		concat!(
			r#"<main class="home"><h1>Welcome</h1>"#,
			r#"<div data-rsc-placeholder="Counter_0"></div>"#,
			r#"<div data-rsc-placeholder="InteractiveCard_0"></div>"#,
			"</main>"
		)
	);
}

#[rstest]
fn test_lone_placeholder_render() {
	let payload = Payload::new(
		vec![Node::placeholder("Counter_0", "components/Counter", Default::default())],
		[("Counter_0".to_string(), "components/Counter".to_string())]
			.into_iter()
			.collect(),
	);

	assert_eq!(
		ssr::render(&payload),
		r#"<div data-rsc-placeholder="Counter_0"></div>"#
	);
}

#[rstest]
#[tokio::test]
async fn test_structural_round_trip(#[future] home_payload: Payload) {
	let payload = Payload::from_json(&home_payload.await.to_json().unwrap()).unwrap();

	let tree = rebuild(&payload, &full_registry());

	let main = tree.as_element().unwrap();
	assert_eq!(main.tag, "main");
	assert_eq!(main.props["className"], "home");
	assert_eq!(main.children.len(), 3);
	assert_eq!(main.children[0].as_element().unwrap().tag, "h1");
	assert_eq!(tree.text_content(), "Welcome05");

	let islands: Vec<_> = tree
		.islands()
		.iter()
		.map(|island| island.id.as_str())
		.collect();
	assert_eq!(islands, vec!["Counter_0", "InteractiveCard_0", "Counter_1"]);

	let card = main.children[2].as_island().unwrap();
	let section = card.root.as_element().unwrap();
	assert_eq!(section.tag, "section");
	assert_eq!(section.props["title"], "Card");
	assert!(!section.props.contains_key("children"));
}

#[rstest]
#[tokio::test]
async fn test_rebuild_without_entry_yields_diagnostic() {
	let root: View = View::element("div")
		.child("hello")
		.child(counter().view(Props::new().with("initial", 0)))
		.into();
	let payload = Serializer::new().serialize_to_payload(root).await.unwrap();

	let tree = rebuild(&payload, &ComponentRegistry::new());

	let div = tree.as_element().unwrap();
	assert_eq!(div.children[0], LiveNode::text("hello"));
	let diagnostic = div.children[1].as_element().unwrap();
	assert_eq!(diagnostic.props["data-rsc-error"], "Counter_0");
	assert!(div.children[1].text_content().contains("Counter_0"));
}

#[rstest]
#[tokio::test]
async fn test_failing_producer_leaves_siblings_intact() {
	let root: View = View::element("ul")
		.child(View::element("li").child("before"))
		.child(broken().view(Props::new()))
		.child(View::element("li").child("after"))
		.into();

	let payload = Serializer::new().serialize_to_payload(root).await.unwrap();

	assert_eq!(
		ssr::render(&payload),
		"<ul><li>before</li>[Error: Broken]<li>after</li></ul>"
	);
}

#[rstest]
#[tokio::test]
async fn test_fragment_list_renders_inline() {
	let root: View = View::element("ul").child(fragment_list().view(Props::new())).into();

	let payload = Serializer::new().serialize_to_payload(root).await.unwrap();

	assert_eq!(ssr::render(&payload), "<ul><li>one</li><li>two</li></ul>");
	let tree = rebuild(&payload, &ComponentRegistry::new());
	assert_eq!(tree.as_element().unwrap().children.len(), 2);
}

#[rstest]
#[tokio::test]
async fn test_slow_sibling_does_not_reorder_output() {
	let root: View = View::element("div")
		.child(async_data(Duration::from_millis(50)).view(Props::new().with("label", "slow")))
		.child(counter().view(Props::new()))
		.child(async_data(Duration::ZERO).view(Props::new().with("label", "fast")))
		.child(counter().view(Props::new()))
		.into();

	let payload = Serializer::new().serialize_to_payload(root).await.unwrap();

	assert_eq!(
		ssr::render(&payload),
		concat!(
			"<div>",
			r#"<span class="async">slow</span>"#,
			r#"<div data-rsc-placeholder="Counter_0"></div>"#,
			r#"<span class="async">fast</span>"#,
			r#"<div data-rsc-placeholder="Counter_1"></div>"#,
			"</div>"
		)
	);
}

fn recursive() -> Component {
	Component::server("Recursive", |_| {
		Ok(View::element("div").child(recursive().view(Props::new())).into())
	})
}

fn nested_divs(levels: usize) -> View {
	(0..levels).fold(View::text("leaf"), |inner, _| View::element("div").child(inner).into())
}

#[rstest]
#[tokio::test]
async fn test_self_recursive_component_hits_default_depth_guard() {
	let result = Serializer::new().create_payload(&recursive(), Props::new()).await;

	assert!(matches!(
		result,
		Err(SerializeError::DepthExceeded { max_depth: DEFAULT_MAX_DEPTH })
	));
}

#[rstest]
#[tokio::test]
async fn test_self_recursive_component_hits_configured_depth_guard() {
	let serializer = Serializer::new().with_options(SerializerOptions {
		max_depth: 8,
		..Default::default()
	});

	let result = serializer.create_payload(&recursive(), Props::new()).await;

	assert!(matches!(
		result,
		Err(SerializeError::DepthExceeded { max_depth: 8 })
	));
}

#[rstest]
#[tokio::test]
async fn test_tree_at_default_depth_limit_decodes() {
	let payload = Serializer::new()
		.serialize_to_payload(nested_divs(DEFAULT_MAX_DEPTH))
		.await
		.unwrap();

	let decoded = Payload::from_json(&payload.to_json().unwrap()).unwrap();

	assert!(payload.encoded_depth() <= MAX_ENCODED_DEPTH);
	assert_eq!(decoded, payload);
	assert_eq!(ssr::render(&decoded), ssr::render(&payload));
}

#[rstest]
#[tokio::test]
async fn test_tree_past_default_depth_limit_fails() {
	let result = Serializer::new()
		.serialize_to_payload(nested_divs(DEFAULT_MAX_DEPTH + 1))
		.await;

	assert!(matches!(result, Err(SerializeError::DepthExceeded { .. })));
}

#[rstest]
#[tokio::test]
async fn test_undecodable_nesting_is_rejected_by_the_producer() {
	let deep = (0..MAX_ENCODED_DEPTH).fold(json!(1), |inner, _| json!([inner]));
	let view = View::element("div").prop("data-deep", deep).into();

	let result = Serializer::new().serialize_to_payload(view).await;

	assert!(matches!(
		result,
		Err(SerializeError::EncodedDepthExceeded { limit: MAX_ENCODED_DEPTH, .. })
	));
}
