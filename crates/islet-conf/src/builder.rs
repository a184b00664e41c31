//! Merges configuration sources into [`Settings`].

use crate::error::{Result, SettingsError};
use crate::settings::Settings;
use crate::sources::ConfigSource;
use serde_json::{Map, Value};

/// Collects [`ConfigSource`]s and merges them by priority.
///
/// Objects merge key by key; any other value replaces what a lower-priority
/// source set. A string overriding a boolean, number or list is parsed into
/// that type first, so `ISLET_SERIALIZER__MAX_DEPTH=64` lands as a number and
/// `ISLET_BUILD__SCRIPTS=/a.js,/b.js` as a list.
#[derive(Default)]
pub struct SettingsBuilder {
	sources: Vec<Box<dyn ConfigSource>>,
}

impl SettingsBuilder {
	/// Creates a builder with no sources.
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds a source. Insertion order breaks priority ties.
	pub fn add_source(mut self, source: impl ConfigSource + 'static) -> Self {
		self.sources.push(Box::new(source));
		self
	}

	/// Merges every source into one JSON object.
	pub fn build_value(&self) -> Result<Value> {
		let mut ordered: Vec<&dyn ConfigSource> = self.sources.iter().map(|s| s.as_ref()).collect();
		ordered.sort_by_key(|source| source.priority());

		let mut merged = Value::Object(Map::new());
		for source in ordered {
			let values = source.load().map_err(|source_error| SettingsError::Source {
				description: source.description(),
				source: source_error,
			})?;
			tracing::debug!(
				"Merging {} key(s) from {}",
				values.len(),
				source.description()
			);
			merge(&mut merged, Value::Object(values.into_iter().collect()));
		}

		Ok(merged)
	}

	/// Merges every source and deserializes the result.
	pub fn build(&self) -> Result<Settings> {
		let value = self.build_value()?;
		Ok(serde_json::from_value(value)?)
	}
}

fn merge(base: &mut Value, overlay: Value) {
	match (base, overlay) {
		(Value::Object(base_map), Value::Object(overlay_map)) => {
			for (key, value) in overlay_map {
				match base_map.get_mut(&key) {
					Some(existing) => merge(existing, value),
					None => {
						base_map.insert(key, value);
					}
				}
			}
		}
		(base, Value::String(raw)) => {
			*base = coerce(base, raw);
		}
		(base, overlay) => *base = overlay,
	}
}

fn coerce(existing: &Value, raw: String) -> Value {
	match existing {
		Value::Bool(_) => match raw.trim().to_lowercase().as_str() {
			"true" | "1" | "yes" | "on" => Value::Bool(true),
			"false" | "0" | "no" | "off" => Value::Bool(false),
			_ => Value::String(raw),
		},
		Value::Number(_) => {
			let trimmed = raw.trim();
			if let Ok(int) = trimmed.parse::<i64>() {
				Value::from(int)
			} else if let Ok(float) = trimmed.parse::<f64>() {
				Value::from(float)
			} else {
				Value::String(raw)
			}
		}
		Value::Array(_) => Value::Array(
			raw.split(',')
				.map(str::trim)
				.filter(|item| !item.is_empty())
				.map(|item| Value::String(item.to_string()))
				.collect(),
		),
		_ => Value::String(raw),
	}
}
