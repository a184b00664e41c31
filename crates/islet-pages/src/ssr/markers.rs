//! Attribute markers shared by the static renderer, the document template
//! and the rebuilder.

use super::escape::escape_html;

/// Attribute marking where a consumer-side component will be mounted.
pub const PLACEHOLDER_ATTR: &str = "data-rsc-placeholder";

/// Attribute marking the inline diagnostic for an unresolved placeholder.
pub const ERROR_ATTR: &str = "data-rsc-error";

/// Attribute on the mount point carrying the payload URL.
pub const PAYLOAD_URL_ATTR: &str = "data-rsc-payload";

/// Id of the script element holding an inlined payload.
pub const PAYLOAD_SCRIPT_ID: &str = "__RSC_PAYLOAD__";

/// Generates the empty mount point emitted for a placeholder.
pub fn placeholder_markup(id: &str) -> String {
	format!("<div {}=\"{}\"></div>", PLACEHOLDER_ATTR, escape_html(id))
}
