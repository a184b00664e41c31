//! Prop sanitization.
//!
//! Converts authoring [`Props`] into the plain JSON [`PropMap`] carried by
//! payload nodes. Callbacks, handles and element-valued content never
//! survive; inside lists they become `null` so positions are kept.

use crate::component::{PropValue, Props, View};
use islet_payload::{CHILDREN_PROP, PropMap};
use serde_json::{Map, Value};

const RESERVED_KEYS: [&str; 3] = [CHILDREN_PROP, "key", "ref"];

/// Sanitizes host element props.
pub fn host_props(props: Props) -> PropMap {
	sanitize_map(props)
}

/// Sanitizes consumer-side component props, returning the nested content
/// found under `children` separately so it can be serialized into nodes.
pub fn client_props(mut props: Props) -> (PropMap, Option<View>) {
	let children = props.remove(CHILDREN_PROP).and_then(children_view);
	(sanitize_map(props), children)
}

fn sanitize_map(props: impl IntoIterator<Item = (String, PropValue)>) -> PropMap {
	props
		.into_iter()
		.filter(|(key, _)| !RESERVED_KEYS.contains(&key.as_str()))
		.filter_map(|(key, value)| sanitize_value(value).map(|value| (key, value)))
		.collect()
}

fn sanitize_value(value: PropValue) -> Option<Value> {
	match value {
		PropValue::Null => Some(Value::Null),
		PropValue::Bool(b) => Some(Value::Bool(b)),
		PropValue::Number(n) => Some(Value::Number(n)),
		PropValue::String(s) => Some(Value::String(s)),
		PropValue::List(items) => Some(Value::Array(
			items
				.into_iter()
				.map(|item| sanitize_value(item).unwrap_or(Value::Null))
				.collect(),
		)),
		PropValue::Map(map) => Some(Value::Object(
			sanitize_map(map).into_iter().collect::<Map<String, Value>>(),
		)),
		PropValue::Callback(_) | PropValue::Handle(_) | PropValue::View(_) => None,
	}
}

fn children_view(value: PropValue) -> Option<View> {
	let view = match value {
		PropValue::View(view) => *view,
		PropValue::String(s) => View::text(s),
		PropValue::Number(n) => View::Number(n),
		PropValue::List(items) => View::List(items.into_iter().filter_map(children_view).collect()),
		PropValue::Null
		| PropValue::Bool(_)
		| PropValue::Map(_)
		| PropValue::Callback(_)
		| PropValue::Handle(_) => return None,
	};
	Some(view)
}
