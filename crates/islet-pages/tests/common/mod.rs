//! Demo components shared by the integration tests.

#![allow(dead_code)]

use islet_pages::component::{Component, Props, View};
use islet_pages::hydration::{ClientComponent, ClientProps, ComponentRegistry, LiveNode};
use islet_payload::PropMap;
use serde_json::json;
use std::time::Duration;

/// Consumer-side counter.
pub fn counter() -> Component {
	Component::client("Counter", "components/Counter")
}

/// Consumer-side card wrapping arbitrary children.
pub fn interactive_card() -> Component {
	Component::client("InteractiveCard", "components/InteractiveCard")
}

/// Producer-side component that resolves after `delay`.
pub fn async_data(delay: Duration) -> Component {
	Component::server_async("AsyncData", move |props: Props| async move {
		tokio::time::sleep(delay).await;
		let label = props
			.get("label")
			.and_then(|value| value.as_str())
			.unwrap_or("data")
			.to_string();
		Ok(View::element("span").prop("className", "async").child(label).into())
	})
}

/// Producer-side list rendered as a fragment of items.
pub fn fragment_list() -> Component {
	Component::server("FragmentList", |_| {
		Ok(View::fragment(vec![
			View::element("li").child("one"),
			View::element("li").child("two"),
		]))
	})
}

/// Producer-side component that always fails.
pub fn broken() -> Component {
	Component::server("Broken", |_| Err(anyhow::anyhow!("database unavailable")))
}

/// Home page: a heading, a counter and a card holding a second counter.
pub fn home() -> Component {
	Component::server("Home", |_| {
		Ok(View::element("main")
			.prop("className", "home")
			.child(View::element("h1").child("Welcome"))
			.child(counter().view(Props::new().with("initial", 0)))
			.child(
				interactive_card().view(
					Props::new()
						.with("title", "Card")
						.with("children", counter().view(Props::new().with("initial", 5))),
				),
			)
			.into())
	})
}

/// Live counter: a button showing its initial value.
pub fn live_counter() -> ClientComponent {
	ClientComponent::new("Counter", |props: ClientProps| {
		let initial = props.get("initial").cloned().unwrap_or(json!(0));
		LiveNode::element("button", PropMap::new(), vec![LiveNode::text(initial.to_string())])
	})
}

/// Live card: a section holding its rebuilt children.
pub fn live_card() -> ClientComponent {
	ClientComponent::new("InteractiveCard", |props: ClientProps| {
		let values = props.values().clone();
		LiveNode::element("section", values, props.into_children())
	})
}

/// Registry resolving every demo consumer-side component by path.
pub fn full_registry() -> ComponentRegistry {
	ComponentRegistry::new()
		.with("components/Counter", live_counter())
		.with("components/InteractiveCard", live_card())
}
