//! Live tree produced by the rebuilder.

use islet_payload::PropMap;

/// A node of the reconstructed, attachable tree.
#[derive(Debug, Clone, PartialEq)]
pub enum LiveNode {
	/// Literal text.
	Text(String),
	/// A host element.
	Element(LiveElement),
	/// An instantiated consumer-side component.
	Island(Island),
}

/// A host element of the live tree.
#[derive(Debug, Clone, PartialEq)]
pub struct LiveElement {
	/// Tag name.
	pub tag: String,
	/// Properties, as carried by the payload.
	pub props: PropMap,
	/// Child nodes in document order.
	pub children: Vec<LiveNode>,
}

/// A consumer-side component instance and the tree it rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct Island {
	/// Placeholder id the instance was created from.
	pub id: String,
	/// Component module identity.
	pub component_path: String,
	/// The rendered tree.
	pub root: Box<LiveNode>,
}

impl LiveNode {
	/// Creates a text node.
	pub fn text(content: impl Into<String>) -> Self {
		Self::Text(content.into())
	}

	/// Creates an element node.
	pub fn element(tag: impl Into<String>, props: PropMap, children: Vec<LiveNode>) -> Self {
		Self::Element(LiveElement {
			tag: tag.into(),
			props,
			children,
		})
	}

	/// Returns the element if this is an element node.
	pub fn as_element(&self) -> Option<&LiveElement> {
		match self {
			Self::Element(element) => Some(element),
			_ => None,
		}
	}

	/// Returns the island if this is an island node.
	pub fn as_island(&self) -> Option<&Island> {
		match self {
			Self::Island(island) => Some(island),
			_ => None,
		}
	}

	/// Concatenates every text node beneath this node.
	pub fn text_content(&self) -> String {
		let mut content = String::new();
		self.collect_text(&mut content);
		content
	}

	fn collect_text(&self, out: &mut String) {
		match self {
			Self::Text(text) => out.push_str(text),
			Self::Element(element) => {
				for child in &element.children {
					child.collect_text(out);
				}
			}
			Self::Island(island) => island.root.collect_text(out),
		}
	}

	/// Returns every island beneath this node, in pre-order.
	pub fn islands(&self) -> Vec<&Island> {
		let mut islands = Vec::new();
		self.collect_islands(&mut islands);
		islands
	}

	fn collect_islands<'a>(&'a self, out: &mut Vec<&'a Island>) {
		match self {
			Self::Text(_) => {}
			Self::Element(element) => {
				for child in &element.children {
					child.collect_islands(out);
				}
			}
			Self::Island(island) => {
				out.push(island);
				island.root.collect_islands(out);
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_text_content_and_islands() {
		let counter = LiveNode::Island(Island {
			id: "Counter_0".to_string(),
			component_path: "components/Counter".to_string(),
			root: Box::new(LiveNode::element(
				"button",
				PropMap::new(),
				vec![LiveNode::text("0")],
			)),
		});
		let tree = LiveNode::element(
			"div",
			PropMap::new(),
			vec![LiveNode::text("count: "), counter],
		);

		assert_eq!(tree.text_content(), "count: 0");
		let ids: Vec<_> = tree.islands().iter().map(|i| i.id.as_str()).collect();
		assert_eq!(ids, vec!["Counter_0"]);
	}
}
