//! Full HTML document around rendered markup.

use super::escape::{escape_html, escape_json_for_script};
use super::markers::{PAYLOAD_SCRIPT_ID, PAYLOAD_URL_ATTR};
use islet_conf::BuildSettings;

/// Wraps rendered markup in a complete HTML document with a mount point for
/// hydration.
///
/// ```
/// use islet_pages::ssr::DocumentTemplate;
///
/// let html = DocumentTemplate::new()
/// 	.title("Home")
/// 	.payload_url("/index.rsc.json")
/// 	.script("/assets/client.js")
/// 	.wrap("<p>hi</p>");
///
/// assert!(html.starts_with("<!DOCTYPE html>"));
/// assert!(html.contains(r#"<div id="root" data-rsc-payload="/index.rsc.json"><p>hi</p></div>"#));
/// assert!(html.contains(r#"<script type="module" src="/assets/client.js"></script>"#));
/// ```
#[derive(Debug, Clone)]
pub struct DocumentTemplate {
	lang: String,
	title: Option<String>,
	mount_id: String,
	payload_url: Option<String>,
	inline_payload: Option<String>,
	scripts: Vec<String>,
}

impl Default for DocumentTemplate {
	fn default() -> Self {
		Self {
			lang: "en".to_string(),
			title: None,
			mount_id: "root".to_string(),
			payload_url: None,
			inline_payload: None,
			scripts: Vec::new(),
		}
	}
}

impl DocumentTemplate {
	/// Creates a template with default language and mount id.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a template from `[build]` settings.
	pub fn from_settings(settings: &BuildSettings) -> Self {
		Self {
			lang: settings.lang.clone(),
			title: settings.title.clone(),
			mount_id: settings.mount_id.clone(),
			payload_url: None,
			inline_payload: None,
			scripts: settings.scripts.clone(),
		}
	}

	/// Sets the language.
	pub fn lang(mut self, lang: impl Into<String>) -> Self {
		self.lang = lang.into();
		self
	}

	/// Sets the title.
	pub fn title(mut self, title: impl Into<String>) -> Self {
		self.title = Some(title.into());
		self
	}

	/// Sets the title if none is set yet.
	pub fn default_title(mut self, title: impl Into<String>) -> Self {
		if self.title.is_none() {
			self.title = Some(title.into());
		}
		self
	}

	/// Sets the id of the mount-point element.
	pub fn mount_id(mut self, id: impl Into<String>) -> Self {
		self.mount_id = id.into();
		self
	}

	/// Sets the URL the consumer side retrieves the payload from.
	pub fn payload_url(mut self, url: impl Into<String>) -> Self {
		self.payload_url = Some(url.into());
		self
	}

	/// Embeds a payload's JSON in a script element.
	pub fn inline_payload(mut self, json: impl Into<String>) -> Self {
		self.inline_payload = Some(json.into());
		self
	}

	/// Appends a module script.
	pub fn script(mut self, src: impl Into<String>) -> Self {
		self.scripts.push(src.into());
		self
	}

	/// Returns the mount-point id.
	pub fn mount_point(&self) -> &str {
		&self.mount_id
	}

	/// Wraps `content` in the document.
	pub fn wrap(&self, content: &str) -> String {
		let mut html = String::with_capacity(content.len() + 512);

		html.push_str("<!DOCTYPE html>\n");
		html.push_str(&format!("<html lang=\"{}\">\n", escape_html(&self.lang)));

		html.push_str("<head>\n");
		html.push_str("<meta charset=\"UTF-8\">\n");
		html.push_str(
			"<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
		);
		if let Some(ref title) = self.title {
			html.push_str(&format!("<title>{}</title>\n", escape_html(title)));
		}
		html.push_str("</head>\n");

		html.push_str("<body>\n");
		html.push_str(&format!("<div id=\"{}\"", escape_html(&self.mount_id)));
		if let Some(ref url) = self.payload_url {
			html.push_str(&format!(" {}=\"{}\"", PAYLOAD_URL_ATTR, escape_html(url)));
		}
		html.push('>');
		html.push_str(content);
		html.push_str("</div>\n");

		if let Some(ref json) = self.inline_payload {
			html.push_str(&format!(
				"<script id=\"{}\" type=\"application/json\">{}</script>\n",
				PAYLOAD_SCRIPT_ID,
				escape_json_for_script(json)
			));
		}
		for src in &self.scripts {
			html.push_str(&format!(
				"<script type=\"module\" src=\"{}\"></script>\n",
				escape_html(src)
			));
		}

		html.push_str("</body>\n");
		html.push_str("</html>");
		html
	}
}
