//! Static rendering of payloads.
//!
//! [`render`] turns a payload into an HTML fragment for the initial,
//! non-interactive paint. Consumer-side placeholders become empty mount
//! points marked with [`PLACEHOLDER_ATTR`]. [`DocumentTemplate`] wraps the
//! fragment in a full document.
//!
//! Rendering is pure: the same payload always yields the same string.

mod document;
mod escape;
mod markers;
mod markup;

pub use document::DocumentTemplate;
pub use escape::{escape_html, escape_json_for_script};
pub use markers::{
	ERROR_ATTR, PAYLOAD_SCRIPT_ID, PAYLOAD_URL_ATTR, PLACEHOLDER_ATTR, placeholder_markup,
};
pub use markup::{
	is_valid_attribute_name, is_valid_tag_name, is_void_element, render, render_nodes,
};
