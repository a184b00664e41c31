//! Layered settings for islet builds.
//!
//! Settings are merged from several [`ConfigSource`]s in priority order:
//! built-in defaults, then an optional TOML file, then environment variables
//! prefixed with `ISLET_` (nested keys separated by `__`).
//!
//! ```
//! use islet_conf::{DefaultSource, SettingsBuilder};
//!
//! let settings = SettingsBuilder::new()
//! 	.add_source(DefaultSource::new().with_value("serializer", serde_json::json!({"max_depth": 64})))
//! 	.build()
//! 	.unwrap();
//!
//! assert_eq!(settings.serializer.max_depth, 64);
//! assert_eq!(settings.build.mount_id, "root");
//! ```

#![warn(missing_docs)]

pub mod builder;
pub mod error;
pub mod settings;
pub mod sources;

pub use builder::SettingsBuilder;
pub use error::{Result, SettingsError};
pub use settings::{
	BoundarySettings, BuildSettings, CONFIG_FILE_NAME, ENV_PREFIX, ENV_SEPARATOR, PayloadSettings,
	SerializerSettings, Settings,
};
pub use sources::{ConfigSource, DefaultSource, EnvSource, SourceError, TomlFileSource};
