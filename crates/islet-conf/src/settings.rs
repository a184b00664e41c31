//! The settings schema.

use crate::builder::SettingsBuilder;
use crate::error::Result;
use crate::sources::{DefaultSource, EnvSource, TomlFileSource};
use islet_payload::PAYLOAD_VERSION;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Prefix of environment variables read by [`Settings::load`].
pub const ENV_PREFIX: &str = "ISLET_";

/// Separator between section and key in environment variable names.
pub const ENV_SEPARATOR: &str = "__";

/// File read by [`Settings::load`] when no explicit path is given.
pub const CONFIG_FILE_NAME: &str = "islet.toml";

/// Complete settings for serializing, rendering and building pages.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
	/// `[payload]`
	pub payload: PayloadSettings,
	/// `[boundary]`
	pub boundary: BoundarySettings,
	/// `[serializer]`
	pub serializer: SerializerSettings,
	/// `[build]`
	pub build: BuildSettings,
}

impl Settings {
	/// Loads settings from defaults, a TOML file and `ISLET_*` environment
	/// variables, in increasing priority.
	///
	/// With `Some(path)` the file must exist. With `None`, `islet.toml` in the
	/// current directory is read if present.
	pub fn load(config_path: Option<&Path>) -> Result<Self> {
		let file = match config_path {
			Some(path) => TomlFileSource::new(path).required(),
			None => TomlFileSource::new(CONFIG_FILE_NAME),
		};

		SettingsBuilder::new()
			.add_source(DefaultSource::new())
			.add_source(file)
			.add_source(
				EnvSource::new()
					.with_prefix(ENV_PREFIX)
					.with_separator(ENV_SEPARATOR),
			)
			.build()
	}
}

/// Payload envelope settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PayloadSettings {
	/// Version string stamped on produced payloads and expected by the
	/// rebuilder.
	pub version: String,
}

impl Default for PayloadSettings {
	fn default() -> Self {
		Self {
			version: PAYLOAD_VERSION.to_string(),
		}
	}
}

/// Markers used to classify components that carry no explicit directive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoundarySettings {
	/// Substring of a display name that marks a consumer-side component.
	pub name_marker: String,
	/// Substring of a path tag that marks a consumer-side component.
	pub path_marker: String,
	/// Directory prefix for the fallback component path.
	pub component_dir: String,
}

impl Default for BoundarySettings {
	fn default() -> Self {
		Self {
			name_marker: "client".to_string(),
			path_marker: ".client.".to_string(),
			component_dir: "components".to_string(),
		}
	}
}

/// Serializer limits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SerializerSettings {
	/// Maximum nesting depth before serialization fails.
	pub max_depth: usize,
}

impl Default for SerializerSettings {
	fn default() -> Self {
		Self { max_depth: 32 }
	}
}

/// Static site output settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildSettings {
	/// Directory receiving `.rsc.json` and `.html` files.
	pub out_dir: PathBuf,
	/// Id of the mount-point element in generated documents.
	pub mount_id: String,
	/// `lang` attribute of generated documents.
	pub lang: String,
	/// Document title. Defaults to the route path when unset.
	pub title: Option<String>,
	/// Module scripts appended to generated documents.
	pub scripts: Vec<String>,
	/// Embed the payload in the document instead of only linking it.
	pub inline_payload: bool,
}

impl Default for BuildSettings {
	fn default() -> Self {
		Self {
			out_dir: PathBuf::from("dist"),
			mount_id: "root".to_string(),
			lang: "en".to_string(),
			title: None,
			scripts: Vec::new(),
			inline_payload: false,
		}
	}
}
