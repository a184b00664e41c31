//! Configuration sources for the layered settings system.
//!
//! Sources are merged in priority order (environment variables > TOML file >
//! defaults). Every source yields a map of top-level keys to JSON values;
//! nested sections are JSON objects.

use crate::settings::Settings;
use indexmap::IndexMap;
use serde_json::{Map, Value};
use std::fs;
use std::path::PathBuf;

/// Trait for configuration sources
pub trait ConfigSource: Send + Sync {
	/// Load configuration from this source
	fn load(&self) -> Result<IndexMap<String, Value>, SourceError>;

	/// Get the priority of this source (higher = more important)
	fn priority(&self) -> u8;

	/// Get a description of this source
	fn description(&self) -> String;
}

/// Error type for configuration sources
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
	/// Reading the source failed.
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),

	/// The TOML document is malformed.
	#[error("TOML error: {0}")]
	Toml(#[from] toml::de::Error),

	/// Conversion through JSON failed.
	#[error("JSON error: {0}")]
	Json(#[from] serde_json::Error),

	/// A required file does not exist.
	#[error("Configuration file not found: {}", .0.display())]
	NotFound(PathBuf),
}

/// Environment variable configuration source
///
/// `PREFIX_SECTION__KEY=value` becomes `{"section": {"key": "value"}}`. Values
/// are kept as strings; [`SettingsBuilder`](crate::SettingsBuilder) coerces
/// them to the type of the value they override.
pub struct EnvSource {
	prefix: Option<String>,
	separator: String,
}

impl EnvSource {
	/// Create a source reading every environment variable
	pub fn new() -> Self {
		Self {
			prefix: None,
			separator: "__".to_string(),
		}
	}

	/// Only read variables starting with `prefix`, and strip it from keys
	///
	/// # Examples
	///
	/// ```
	/// use islet_conf::EnvSource;
	///
	/// let source = EnvSource::new().with_prefix("ISLET_");
	/// ```
	pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
		self.prefix = Some(prefix.into());
		self
	}

	/// Set the separator between nested key segments
	pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
		self.separator = separator.into();
		self
	}

	fn key_path(&self, key: &str) -> Option<Vec<String>> {
		let clean_key = match &self.prefix {
			Some(prefix) => key.strip_prefix(prefix.as_str())?,
			None => key,
		};
		if clean_key.is_empty() {
			return None;
		}

		let segments: Vec<String> = clean_key
			.split(self.separator.as_str())
			.map(str::to_lowercase)
			.collect();
		if segments.iter().any(String::is_empty) {
			return None;
		}
		Some(segments)
	}
}

impl Default for EnvSource {
	fn default() -> Self {
		Self::new()
	}
}

impl ConfigSource for EnvSource {
	fn load(&self) -> Result<IndexMap<String, Value>, SourceError> {
		let mut config = Map::new();

		for (key, value) in std::env::vars() {
			let Some(path) = self.key_path(&key) else {
				continue;
			};
			insert_path(&mut config, &path, Value::String(value));
		}

		Ok(config.into_iter().collect())
	}

	fn priority(&self) -> u8 {
		100
	}

	fn description(&self) -> String {
		match &self.prefix {
			Some(prefix) => format!("Environment variables ({}*)", prefix),
			None => "Environment variables".to_string(),
		}
	}
}

fn insert_path(map: &mut Map<String, Value>, path: &[String], value: Value) {
	let Some((head, rest)) = path.split_first() else {
		return;
	};
	if rest.is_empty() {
		map.insert(head.clone(), value);
		return;
	}

	let entry = map
		.entry(head.clone())
		.or_insert_with(|| Value::Object(Map::new()));
	if !entry.is_object() {
		*entry = Value::Object(Map::new());
	}
	if let Value::Object(nested) = entry {
		insert_path(nested, rest, value);
	}
}

/// TOML file configuration source
pub struct TomlFileSource {
	path: PathBuf,
	required: bool,
}

impl TomlFileSource {
	/// Create a source for an optional TOML file
	///
	/// A missing file loads as an empty map.
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self {
			path: path.into(),
			required: false,
		}
	}

	/// Fail with [`SourceError::NotFound`] when the file is missing
	pub fn required(mut self) -> Self {
		self.required = true;
		self
	}
}

impl ConfigSource for TomlFileSource {
	fn load(&self) -> Result<IndexMap<String, Value>, SourceError> {
		if !self.path.exists() {
			if self.required {
				return Err(SourceError::NotFound(self.path.clone()));
			}
			return Ok(IndexMap::new());
		}

		let content = fs::read_to_string(&self.path)?;
		let table: toml::Table = toml::from_str(&content)?;

		table
			.into_iter()
			.map(|(key, value)| Ok((key, serde_json::to_value(value)?)))
			.collect()
	}

	fn priority(&self) -> u8 {
		50
	}

	fn description(&self) -> String {
		format!("TOML file: {}", self.path.display())
	}
}

/// Built-in default values
pub struct DefaultSource {
	values: IndexMap<String, Value>,
}

impl DefaultSource {
	/// Create a source holding [`Settings::default`]
	pub fn new() -> Self {
		let values = match serde_json::to_value(Settings::default()) {
			Ok(Value::Object(map)) => map.into_iter().collect(),
			_ => IndexMap::new(),
		};
		Self { values }
	}

	/// Create a source with no values
	pub fn empty() -> Self {
		Self {
			values: IndexMap::new(),
		}
	}

	/// Set a top-level value
	pub fn with_value(mut self, key: impl Into<String>, value: Value) -> Self {
		self.values.insert(key.into(), value);
		self
	}
}

impl Default for DefaultSource {
	fn default() -> Self {
		Self::new()
	}
}

impl ConfigSource for DefaultSource {
	fn load(&self) -> Result<IndexMap<String, Value>, SourceError> {
		Ok(self.values.clone())
	}

	fn priority(&self) -> u8 {
		0
	}

	fn description(&self) -> String {
		"Default values".to_string()
	}
}
