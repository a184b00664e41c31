//! Payload → live tree reconstruction.

use super::live::{Island, LiveNode};
use super::registry::{ClientProps, ComponentRegistry};
use crate::ssr::ERROR_ATTR;
use islet_payload::{CHILDREN_PROP, Node, PAYLOAD_VERSION, Payload, Placeholder, PropMap};
use serde_json::json;

/// Rebuilds a payload into a live tree using the default [`Rebuilder`].
pub fn rebuild(payload: &Payload, registry: &ComponentRegistry) -> LiveNode {
	Rebuilder::new(registry).rebuild(payload)
}

/// Reconstructs live trees from payloads.
///
/// Placeholders are instantiated from the registry. Unresolved placeholders
/// become a visible diagnostic element instead of failing the rebuild.
#[derive(Debug)]
pub struct Rebuilder<'r> {
	registry: &'r ComponentRegistry,
	expected_version: String,
}

impl<'r> Rebuilder<'r> {
	/// Creates a rebuilder expecting the current payload version.
	pub fn new(registry: &'r ComponentRegistry) -> Self {
		Self {
			registry,
			expected_version: PAYLOAD_VERSION.to_string(),
		}
	}

	/// Sets the payload version this rebuilder understands.
	pub fn with_expected_version(mut self, version: impl Into<String>) -> Self {
		self.expected_version = version.into();
		self
	}

	/// Rebuilds the whole payload.
	///
	/// A single root node is returned as is. Zero or several roots are
	/// wrapped in a `div`.
	pub fn rebuild(&self, payload: &Payload) -> LiveNode {
		if payload.version() != self.expected_version {
			tracing::warn!(
				"Unknown payload version: {} (expected {})",
				payload.version(),
				self.expected_version
			);
		}

		let mut roots = self.rebuild_nodes(payload.tree());
		if roots.len() == 1
			&& let Some(root) = roots.pop()
		{
			return root;
		}
		LiveNode::element("div", PropMap::new(), roots)
	}

	/// Rebuilds a node sequence, splicing fragments into it.
	pub fn rebuild_nodes(&self, nodes: &[Node]) -> Vec<LiveNode> {
		let mut live = Vec::with_capacity(nodes.len());
		for node in nodes {
			self.rebuild_into(node, &mut live);
		}
		live
	}

	fn rebuild_into(&self, node: &Node, out: &mut Vec<LiveNode>) {
		match node {
			Node::Text(text) => out.push(LiveNode::text(text.content.clone())),
			Node::Fragment(fragment) => {
				for child in &fragment.children {
					self.rebuild_into(child, out);
				}
			}
			Node::Element(element) => out.push(LiveNode::element(
				element.tag.clone(),
				element.props.clone(),
				self.rebuild_nodes(&element.children),
			)),
			Node::ClientPlaceholder(placeholder) => out.push(self.instantiate(placeholder)),
		}
	}

	fn instantiate(&self, placeholder: &Placeholder) -> LiveNode {
		let Some(component) = self
			.registry
			.resolve(&placeholder.id, &placeholder.component_path)
		else {
			tracing::error!(
				"Client component not found: {} (path: {}), available: {:?}",
				placeholder.id,
				placeholder.component_path,
				self.registry.keys()
			);
			return missing_component(&placeholder.id);
		};

		let props = match placeholder.child_nodes() {
			Some(children) => {
				let mut values = placeholder.props.clone();
				values.shift_remove(CHILDREN_PROP);
				ClientProps::new(values, self.rebuild_nodes(&children))
			}
			None => ClientProps::new(placeholder.props.clone(), Vec::new()),
		};

		LiveNode::Island(Island {
			id: placeholder.id.clone(),
			component_path: placeholder.component_path.clone(),
			root: Box::new(component.instantiate(props)),
		})
	}
}

/// Diagnostic element substituted for an unresolved placeholder.
fn missing_component(id: &str) -> LiveNode {
	let mut props = PropMap::new();
	props.insert(
		"style".to_string(),
		json!({"color": "red", "padding": "1rem", "border": "1px solid red"}),
	);
	props.insert(ERROR_ATTR.to_string(), json!(id));
	LiveNode::element(
		"div",
		props,
		vec![LiveNode::text(format!("[Error: component not found {}]", id))],
	)
}
