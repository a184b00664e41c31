//! Per-call serialization state.

use indexmap::IndexMap;
use std::collections::HashMap;

/// Identity allocation and consumer-side registry for one serialize call.
///
/// A context is owned by exactly one in-flight call. Ids take the form
/// `<DisplayName>_<n>`, with `n` counting from 0 separately for every
/// display name.
#[derive(Debug, Default)]
pub struct SerializationContext {
	counters: HashMap<String, usize>,
	discovered: IndexMap<String, String>,
}

impl SerializationContext {
	/// Creates an empty context.
	pub fn new() -> Self {
		Self::default()
	}

	/// Allocates the next id for `name`.
	pub fn allocate_id(&mut self, name: &str) -> String {
		let counter = self.counters.entry(name.to_string()).or_insert(0);
		let id = format!("{}_{}", name, counter);
		*counter += 1;
		id
	}

	/// Records that placeholder `id` refers to `component_path`.
	pub fn register(&mut self, id: impl Into<String>, component_path: impl Into<String>) {
		self.discovered.insert(id.into(), component_path.into());
	}

	/// Returns the id → component path registry built so far.
	pub fn discovered(&self) -> &IndexMap<String, String> {
		&self.discovered
	}

	/// Consumes the context, returning the registry.
	pub fn into_discovered(self) -> IndexMap<String, String> {
		self.discovered
	}
}
