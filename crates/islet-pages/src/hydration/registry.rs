//! Consumer-side component registry.

use super::live::LiveNode;
use islet_payload::PropMap;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Props a consumer-side component is instantiated with.
#[derive(Debug, Clone, Default)]
pub struct ClientProps {
	values: PropMap,
	children: Vec<LiveNode>,
}

impl ClientProps {
	/// Creates props from plain values and rebuilt children.
	pub fn new(values: PropMap, children: Vec<LiveNode>) -> Self {
		Self { values, children }
	}

	/// Returns a plain prop value.
	pub fn get(&self, key: &str) -> Option<&Value> {
		self.values.get(key)
	}

	/// Returns every plain prop value.
	pub fn values(&self) -> &PropMap {
		&self.values
	}

	/// Returns the rebuilt nested content.
	pub fn children(&self) -> &[LiveNode] {
		&self.children
	}

	/// Takes ownership of the nested content.
	pub fn into_children(self) -> Vec<LiveNode> {
		self.children
	}
}

/// Type alias for consumer-side render functions.
pub type ClientRenderFn = Arc<dyn Fn(ClientProps) -> LiveNode + Send + Sync + 'static>;

/// A live consumer-side component.
#[derive(Clone)]
pub struct ClientComponent {
	name: String,
	render: ClientRenderFn,
}

impl ClientComponent {
	/// Wraps a render function.
	pub fn new<F>(name: impl Into<String>, render: F) -> Self
	where
		F: Fn(ClientProps) -> LiveNode + Send + Sync + 'static,
	{
		Self {
			name: name.into(),
			render: Arc::new(render),
		}
	}

	/// Returns the component name.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Instantiates the component.
	pub fn instantiate(&self, props: ClientProps) -> LiveNode {
		(self.render)(props)
	}
}

impl fmt::Debug for ClientComponent {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ClientComponent")
			.field("name", &self.name)
			.finish_non_exhaustive()
	}
}

/// Flat mapping from placeholder ids or component paths to components.
///
/// ```
/// use islet_pages::hydration::{ClientComponent, ComponentRegistry, LiveNode};
///
/// let counter = ClientComponent::new("Counter", |_| LiveNode::text("0"));
/// let registry = ComponentRegistry::new()
/// 	.with("Counter_0", counter.clone())
/// 	.with("components/Counter", counter);
///
/// assert!(registry.resolve("Counter_7", "components/Counter").is_some());
/// assert!(registry.resolve("Card_0", "components/Card").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ComponentRegistry {
	entries: HashMap<String, ClientComponent>,
}

impl ComponentRegistry {
	/// Creates an empty registry.
	pub fn new() -> Self {
		Self::default()
	}

	/// Registers a component, builder style.
	pub fn with(mut self, key: impl Into<String>, component: ClientComponent) -> Self {
		self.register(key, component);
		self
	}

	/// Registers a component under an id or a component path.
	pub fn register(&mut self, key: impl Into<String>, component: ClientComponent) {
		self.entries.insert(key.into(), component);
	}

	/// Looks a component up by placeholder id, then by component path.
	pub fn resolve(&self, id: &str, component_path: &str) -> Option<&ClientComponent> {
		self.entries
			.get(id)
			.or_else(|| self.entries.get(component_path))
	}

	/// Returns every registered key, sorted.
	pub fn keys(&self) -> Vec<&str> {
		let mut keys: Vec<&str> = self.entries.keys().map(String::as_str).collect();
		keys.sort_unstable();
		keys
	}

	/// Returns the number of entries.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Returns `true` if nothing is registered.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

impl FromIterator<(String, ClientComponent)> for ComponentRegistry {
	fn from_iter<I: IntoIterator<Item = (String, ClientComponent)>>(iter: I) -> Self {
		Self {
			entries: iter.into_iter().collect(),
		}
	}
}
