//! Settings errors.

use crate::sources::SourceError;
use thiserror::Error;

/// Result type for settings operations.
pub type Result<T> = std::result::Result<T, SettingsError>;

/// Errors raised while assembling [`Settings`](crate::Settings).
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum SettingsError {
	/// A source failed to load.
	#[error("Failed to load {description}: {source}")]
	Source {
		/// Human-readable name of the failing source.
		description: String,
		/// The underlying failure.
		#[source]
		source: SourceError,
	},

	/// The merged configuration does not match the settings schema.
	#[error("Invalid settings: {0}")]
	Deserialize(#[from] serde_json::Error),
}
