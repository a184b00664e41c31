//! The payload envelope.

use crate::error::{PayloadError, Result, Violation};
use crate::node::Node;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// The payload format version produced and understood by this crate.
pub const PAYLOAD_VERSION: &str = "1.0";

/// Deepest object and array nesting [`Payload::from_json`] and
/// [`Payload::from_slice`] decode.
pub const MAX_ENCODED_DEPTH: usize = 127;

/// A versioned, JSON-encodable serialization of a node tree plus its
/// deferred-component registry.
///
/// A payload is immutable once produced: fields are only reachable through
/// accessors.
///
/// ```
/// use islet_payload::{Node, Payload};
///
/// let payload = Payload::new(vec![Node::text("hi")], Default::default());
/// let json = payload.to_json().unwrap();
/// assert_eq!(json, r#"{"version":"1.0","tree":[{"$$type":"text","content":"hi"}],"clientComponents":{}}"#);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payload {
	version: String,
	tree: Vec<Node>,
	client_components: IndexMap<String, String>,
}

impl Payload {
	/// Creates a payload stamped with [`PAYLOAD_VERSION`].
	pub fn new(tree: Vec<Node>, client_components: IndexMap<String, String>) -> Self {
		Self::with_version(PAYLOAD_VERSION, tree, client_components)
	}

	/// Creates a payload with an explicit version string.
	pub fn with_version(
		version: impl Into<String>,
		tree: Vec<Node>,
		client_components: IndexMap<String, String>,
	) -> Self {
		Self {
			version: version.into(),
			tree,
			client_components,
		}
	}

	/// Returns the version string.
	pub fn version(&self) -> &str {
		&self.version
	}

	/// Returns the root node sequence.
	pub fn tree(&self) -> &[Node] {
		&self.tree
	}

	/// Returns the placeholder id → component path registry.
	pub fn client_components(&self) -> &IndexMap<String, String> {
		&self.client_components
	}

	/// Returns `true` if the payload carries [`PAYLOAD_VERSION`].
	pub fn is_current_version(&self) -> bool {
		self.version == PAYLOAD_VERSION
	}

	/// Returns how many levels of JSON objects and arrays the payload's
	/// encoding nests, counting the envelope.
	///
	/// Payloads deeper than [`MAX_ENCODED_DEPTH`] cannot be decoded.
	pub fn encoded_depth(&self) -> usize {
		2 + self.tree.iter().map(Node::encoded_depth).max().unwrap_or(0)
	}

	/// Decodes a payload from a JSON string.
	pub fn from_json(json: &str) -> Result<Self> {
		serde_json::from_str(json).map_err(PayloadError::Decode)
	}

	/// Decodes a payload from JSON bytes.
	pub fn from_slice(bytes: &[u8]) -> Result<Self> {
		serde_json::from_slice(bytes).map_err(PayloadError::Decode)
	}

	/// Encodes the payload as compact JSON.
	pub fn to_json(&self) -> Result<String> {
		serde_json::to_string(self).map_err(PayloadError::Encode)
	}

	/// Encodes the payload as pretty-printed JSON.
	pub fn to_json_pretty(&self) -> Result<String> {
		serde_json::to_string_pretty(self).map_err(PayloadError::Encode)
	}

	/// Returns every placeholder id reachable in the tree, in pre-order.
	pub fn placeholder_ids(&self) -> Vec<String> {
		let mut ids = Vec::new();
		for node in &self.tree {
			node.visit_placeholders(&mut |placeholder| ids.push(placeholder.id.clone()));
		}
		ids
	}

	/// Lists every breach of the registry invariant.
	///
	/// Each placeholder id must appear once in the tree and have exactly one
	/// `clientComponents` entry, and every entry must belong to a placeholder.
	pub fn violations(&self) -> Vec<Violation> {
		let mut violations = Vec::new();
		let mut seen = HashSet::new();

		for id in self.placeholder_ids() {
			if !seen.insert(id.clone()) {
				violations.push(Violation::DuplicateId(id));
			} else if !self.client_components.contains_key(&id) {
				violations.push(Violation::UnregisteredPlaceholder(id));
			}
		}

		for id in self.client_components.keys() {
			if !seen.contains(id) {
				violations.push(Violation::OrphanEntry(id.clone()));
			}
		}

		violations
	}

	/// Checks the registry invariant.
	pub fn validate(&self) -> Result<()> {
		let violations = self.violations();
		if violations.is_empty() {
			Ok(())
		} else {
			Err(PayloadError::Invalid(violations))
		}
	}
}
