//! Attaching live trees to a consumer environment.

use super::live::LiveNode;
use std::collections::HashMap;
use thiserror::Error;

/// Errors raised while mounting.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MountError {
	/// The attachment point does not exist.
	#[error("Mount point not found: #{0}")]
	RootNotFound(String),
}

/// An environment live trees can be attached to.
pub trait MountTarget {
	/// Returns `true` if an attachment point with this id exists.
	fn has_mount_point(&self, id: &str) -> bool;

	/// Attaches `tree` at the attachment point `id`, replacing its content.
	fn attach(&mut self, id: &str, tree: LiveNode);
}

/// Attaches `tree` to `target` at `root_id`.
pub fn mount<T>(target: &mut T, root_id: &str, tree: LiveNode) -> Result<(), MountError>
where
	T: MountTarget + ?Sized,
{
	if !target.has_mount_point(root_id) {
		tracing::error!("Mount point not found: #{}", root_id);
		return Err(MountError::RootNotFound(root_id.to_string()));
	}
	target.attach(root_id, tree);
	tracing::debug!("Mounted live tree at #{}", root_id);
	Ok(())
}

/// An in-memory document: a set of attachment points identified by element
/// id, and the trees mounted on them.
#[derive(Debug, Clone, Default)]
pub struct StaticDocument {
	mount_points: Vec<String>,
	mounted: HashMap<String, LiveNode>,
}

impl StaticDocument {
	/// Creates a document with no attachment points.
	pub fn new() -> Self {
		Self::default()
	}

	/// Collects the `id` attribute of every start tag in `html` as an
	/// attachment point.
	///
	/// Double-quoted, single-quoted and unquoted values are recognized.
	/// Comments and end tags are skipped.
	pub fn from_html(html: &str) -> Self {
		let mut document = Self::new();
		let mut rest = html;
		while let Some(open) = rest.find('<') {
			rest = &rest[open + 1..];
			if let Some(comment) = rest.strip_prefix("!--") {
				rest = comment.find("-->").map_or("", |end| &comment[end + 3..]);
				continue;
			}

			let end = start_tag_end(rest);
			let tag = &rest[..end];
			if tag.starts_with(|c: char| c.is_ascii_alphabetic())
				&& let Some(id) = id_attribute(tag)
				&& !id.is_empty()
			{
				document.mount_points.push(id.to_string());
			}
			rest = rest.get(end + 1..).unwrap_or("");
		}
		document
	}

	/// Adds an attachment point.
	pub fn with_mount_point(mut self, id: impl Into<String>) -> Self {
		self.mount_points.push(id.into());
		self
	}

	/// Returns the tree mounted at `id`.
	pub fn mounted(&self, id: &str) -> Option<&LiveNode> {
		self.mounted.get(id)
	}
}

impl MountTarget for StaticDocument {
	fn has_mount_point(&self, id: &str) -> bool {
		self.mount_points.iter().any(|point| point == id)
	}

	fn attach(&mut self, id: &str, tree: LiveNode) {
		self.mounted.insert(id.to_string(), tree);
	}
}

/// Offset of the `>` closing a tag, ignoring quoted attribute values.
fn start_tag_end(input: &str) -> usize {
	let mut quote = None;
	for (i, c) in input.char_indices() {
		match (quote, c) {
			(None, '"' | '\'') => quote = Some(c),
			(Some(open), c) if c == open => quote = None,
			(None, '>') => return i,
			_ => {}
		}
	}
	input.len()
}

/// Value of the `id` attribute inside a start tag.
fn id_attribute(tag: &str) -> Option<&str> {
	let mut rest = tag.trim_start_matches(|c: char| !c.is_whitespace() && c != '/');
	loop {
		rest = rest.trim_start_matches(|c: char| c.is_whitespace() || c == '/');
		let name_end = rest
			.find(|c: char| c.is_whitespace() || c == '=' || c == '/')
			.unwrap_or(rest.len());
		if name_end == 0 {
			return None;
		}
		let name = &rest[..name_end];
		rest = rest[name_end..].trim_start();

		let value = match rest.strip_prefix('=') {
			Some(after) => {
				let (value, remainder) = attribute_value(after.trim_start());
				rest = remainder;
				value
			}
			None => "",
		};
		if name.eq_ignore_ascii_case("id") {
			return Some(value);
		}
	}
}

/// Splits a quoted or unquoted attribute value from what follows it.
fn attribute_value(input: &str) -> (&str, &str) {
	match input.chars().next() {
		Some(quote @ ('"' | '\'')) => {
			let body = &input[1..];
			match body.find(quote) {
				Some(end) => (&body[..end], &body[end + 1..]),
				None => (body, ""),
			}
		}
		_ => {
			let end = input.find(char::is_whitespace).unwrap_or(input.len());
			(&input[..end], &input[end..])
		}
	}
}
