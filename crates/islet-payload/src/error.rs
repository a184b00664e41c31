//! Error types for payload encoding, decoding and validation.

use std::fmt;
use thiserror::Error;

/// Result type for payload operations.
pub type Result<T> = std::result::Result<T, PayloadError>;

/// Errors raised while encoding, decoding or validating a payload.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum PayloadError {
	/// The input is not a well-formed payload document.
	#[error("Failed to decode payload: {0}")]
	Decode(#[source] serde_json::Error),

	/// The payload could not be encoded.
	#[error("Failed to encode payload: {0}")]
	Encode(#[source] serde_json::Error),

	/// The registry invariant does not hold.
	#[error("Payload registry is inconsistent: {}", list(.0))]
	Invalid(Vec<Violation>),
}

/// A single breach of the placeholder/registry invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
	/// A placeholder id with no `clientComponents` entry.
	UnregisteredPlaceholder(String),
	/// A `clientComponents` entry with no placeholder in the tree.
	OrphanEntry(String),
	/// The same placeholder id used more than once.
	DuplicateId(String),
}

impl fmt::Display for Violation {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::UnregisteredPlaceholder(id) => {
				write!(f, "placeholder '{}' has no clientComponents entry", id)
			}
			Self::OrphanEntry(id) => {
				write!(f, "clientComponents entry '{}' has no placeholder", id)
			}
			Self::DuplicateId(id) => write!(f, "placeholder id '{}' is used more than once", id),
		}
	}
}

fn list(violations: &[Violation]) -> String {
	violations
		.iter()
		.map(ToString::to_string)
		.collect::<Vec<_>>()
		.join("; ")
}
