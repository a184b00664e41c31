//! Payload node shapes.
//!
//! A payload tree is made of four node kinds, distinguished on the wire by the
//! `$$type` field:
//!
//! | `$$type`             | Rust type       | Meaning                                   |
//! |----------------------|-----------------|-------------------------------------------|
//! | `element`            | [`ElementNode`] | Host-renderable element                   |
//! | `text`               | [`TextNode`]    | Literal text                              |
//! | `fragment`           | [`FragmentNode`]| Grouping without an element of its own    |
//! | `client-placeholder` | [`Placeholder`] | Deferred consumer-side component instance |

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Ordered property map carried by element and placeholder nodes.
///
/// Values are plain JSON: executable values and opaque handles never reach
/// this map.
pub type PropMap = IndexMap<String, Value>;

/// The property key under which nested content is carried.
pub const CHILDREN_PROP: &str = "children";

/// A single node of a payload tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "$$type", rename_all = "kebab-case")]
pub enum Node {
	/// A host-renderable element.
	Element(ElementNode),
	/// Literal text.
	Text(TextNode),
	/// A grouping construct with no rendering identity of its own.
	Fragment(FragmentNode),
	/// A deferred consumer-side component.
	ClientPlaceholder(Placeholder),
}

/// A host element such as `div` or `span`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementNode {
	/// Tag name.
	pub tag: String,
	/// Sanitized properties.
	#[serde(default)]
	pub props: PropMap,
	/// Child nodes in document order.
	#[serde(default)]
	pub children: Vec<Node>,
}

/// Literal text content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextNode {
	/// The unescaped text.
	pub content: String,
}

/// Children rendered inline without a wrapper.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FragmentNode {
	/// Child nodes in document order.
	#[serde(default)]
	pub children: Vec<Node>,
}

/// Reference to a consumer-side component and the props it is instantiated with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Placeholder {
	/// Instance id, `<DisplayName>_<n>`, unique within one payload.
	pub id: String,
	/// Identity of the component module on the consumer side.
	#[serde(rename = "componentPath")]
	pub component_path: String,
	/// Sanitized instantiation props. Nested content, if any, is a node array
	/// under [`CHILDREN_PROP`].
	#[serde(default)]
	pub props: PropMap,
}

impl Placeholder {
	/// Decodes the node array carried under `props.children`.
	///
	/// Returns `None` when there is no `children` prop or when it holds a plain
	/// value rather than serialized nodes.
	pub fn child_nodes(&self) -> Option<Vec<Node>> {
		let children = self.props.get(CHILDREN_PROP)?;
		if !children.is_array() {
			return None;
		}
		Vec::<Node>::deserialize(children).ok()
	}
}

impl Node {
	/// Creates an element node.
	pub fn element(tag: impl Into<String>, props: PropMap, children: Vec<Node>) -> Self {
		Self::Element(ElementNode {
			tag: tag.into(),
			props,
			children,
		})
	}

	/// Creates a text node.
	pub fn text(content: impl Into<String>) -> Self {
		Self::Text(TextNode {
			content: content.into(),
		})
	}

	/// Creates a fragment node.
	pub fn fragment(children: Vec<Node>) -> Self {
		Self::Fragment(FragmentNode { children })
	}

	/// Creates a placeholder node.
	pub fn placeholder(
		id: impl Into<String>,
		component_path: impl Into<String>,
		props: PropMap,
	) -> Self {
		Self::ClientPlaceholder(Placeholder {
			id: id.into(),
			component_path: component_path.into(),
			props,
		})
	}

	/// Returns the wire discriminant of this node.
	pub fn type_name(&self) -> &'static str {
		match self {
			Self::Element(_) => "element",
			Self::Text(_) => "text",
			Self::Fragment(_) => "fragment",
			Self::ClientPlaceholder(_) => "client-placeholder",
		}
	}

	/// Returns `true` for element nodes.
	pub fn is_element(&self) -> bool {
		matches!(self, Self::Element(_))
	}

	/// Returns `true` for text nodes.
	pub fn is_text(&self) -> bool {
		matches!(self, Self::Text(_))
	}

	/// Returns `true` for fragment nodes.
	pub fn is_fragment(&self) -> bool {
		matches!(self, Self::Fragment(_))
	}

	/// Returns `true` for placeholder nodes.
	pub fn is_placeholder(&self) -> bool {
		matches!(self, Self::ClientPlaceholder(_))
	}

	/// Returns the element if this is an element node.
	pub fn as_element(&self) -> Option<&ElementNode> {
		match self {
			Self::Element(element) => Some(element),
			_ => None,
		}
	}

	/// Returns the text content if this is a text node.
	pub fn as_text(&self) -> Option<&str> {
		match self {
			Self::Text(text) => Some(&text.content),
			_ => None,
		}
	}

	/// Returns the placeholder if this is a placeholder node.
	pub fn as_placeholder(&self) -> Option<&Placeholder> {
		match self {
			Self::ClientPlaceholder(placeholder) => Some(placeholder),
			_ => None,
		}
	}

	/// Returns how many levels of JSON objects and arrays this node's
	/// encoding nests, counting its own object.
	pub fn encoded_depth(&self) -> usize {
		1 + match self {
			Self::Text(_) => 0,
			Self::Element(element) => {
				props_depth(&element.props).max(children_depth(&element.children))
			}
			Self::Fragment(fragment) => children_depth(&fragment.children),
			Self::ClientPlaceholder(placeholder) => props_depth(&placeholder.props),
		}
	}

	/// Visits every placeholder reachable from this node in pre-order,
	/// including placeholders nested in another placeholder's children.
	pub fn visit_placeholders(&self, visit: &mut impl FnMut(&Placeholder)) {
		match self {
			Self::Element(element) => {
				for child in &element.children {
					child.visit_placeholders(visit);
				}
			}
			Self::Fragment(fragment) => {
				for child in &fragment.children {
					child.visit_placeholders(visit);
				}
			}
			Self::ClientPlaceholder(placeholder) => {
				visit(placeholder);
				for child in placeholder.child_nodes().unwrap_or_default() {
					child.visit_placeholders(visit);
				}
			}
			Self::Text(_) => {}
		}
	}
}

fn children_depth(children: &[Node]) -> usize {
	1 + children.iter().map(Node::encoded_depth).max().unwrap_or(0)
}

fn props_depth(props: &PropMap) -> usize {
	1 + props.values().map(value_depth).max().unwrap_or(0)
}

fn value_depth(value: &Value) -> usize {
	match value {
		Value::Array(items) => 1 + items.iter().map(value_depth).max().unwrap_or(0),
		Value::Object(map) => 1 + map.values().map(value_depth).max().unwrap_or(0),
		_ => 0,
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	fn test_element_wire_shape() {
		let node = Node::element("div", PropMap::new(), vec![Node::text("hello")]);

		let value = serde_json::to_value(&node).unwrap();

		assert_eq!(
			value,
			json!({
				"$$type": "element",
				"tag": "div",
				"props": {},
				"children": [{"$$type": "text", "content": "hello"}]
			})
		);
	}

	#[rstest]
	fn test_placeholder_wire_shape() {
		let mut props = PropMap::new();
		props.insert("initial".to_string(), json!(0));
		let node = Node::placeholder("Counter_0", "components/Counter", props);

		let value = serde_json::to_value(&node).unwrap();

		assert_eq!(
			value,
			json!({
				"$$type": "client-placeholder",
				"id": "Counter_0",
				"componentPath": "components/Counter",
				"props": {"initial": 0}
			})
		);
	}

	#[rstest]
	fn test_decode_fragment_without_children_field() {
		let node: Node = serde_json::from_value(json!({"$$type": "fragment"})).unwrap();

		assert!(node.is_fragment());
		assert_eq!(node, Node::fragment(Vec::new()));
	}

	#[rstest]
	fn test_decode_unknown_type_fails() {
		let result = serde_json::from_value::<Node>(json!({"$$type": "portal", "children": []}));

		assert!(result.is_err());
	}

	#[rstest]
	#[case(Node::text("a"), "text")]
	#[case(Node::fragment(vec![]), "fragment")]
	#[case(Node::element("p", PropMap::new(), vec![]), "element")]
	#[case(Node::placeholder("X_0", "x", PropMap::new()), "client-placeholder")]
	fn test_type_name(#[case] node: Node, #[case] expected: &str) {
		assert_eq!(node.type_name(), expected);
	}

	#[rstest]
	fn test_child_nodes_decodes_nested_nodes() {
		let mut props = PropMap::new();
		props.insert(
			CHILDREN_PROP.to_string(),
			json!([{"$$type": "text", "content": "inside"}]),
		);
		let placeholder = Placeholder {
			id: "Card_0".to_string(),
			component_path: "components/Card".to_string(),
			props,
		};

		assert_eq!(placeholder.child_nodes(), Some(vec![Node::text("inside")]));
	}

	#[rstest]
	fn test_child_nodes_ignores_plain_values() {
		let mut props = PropMap::new();
		props.insert(CHILDREN_PROP.to_string(), json!("label"));
		let placeholder = Placeholder {
			id: "Card_0".to_string(),
			component_path: "components/Card".to_string(),
			props,
		};

		assert_eq!(placeholder.child_nodes(), None);
	}

	#[rstest]
	fn test_visit_placeholders_reaches_nested_children() {
		let inner = Node::placeholder("Counter_0", "components/Counter", PropMap::new());
		let mut props = PropMap::new();
		props.insert(
			CHILDREN_PROP.to_string(),
			serde_json::to_value(vec![inner]).unwrap(),
		);
		let outer = Node::placeholder("Card_0", "components/Card", props);
		let tree = Node::element("main", PropMap::new(), vec![Node::fragment(vec![outer])]);

		let mut ids = Vec::new();
		tree.visit_placeholders(&mut |p| ids.push(p.id.clone()));

		assert_eq!(ids, vec!["Card_0", "Counter_0"]);
	}
}
