//! Payload retrieval over HTTP.

use islet_payload::{Payload, PayloadError};
use reqwest::StatusCode;
use thiserror::Error;

/// Errors raised while retrieving a payload. All of them are fatal; nothing
/// is retried.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum FetchError {
	/// The request could not be sent or its body could not be read.
	#[error("Failed to request payload from {url}: {source}")]
	Request {
		/// Requested URL.
		url: String,
		/// Underlying transport error.
		#[source]
		source: reqwest::Error,
	},

	/// The server answered with a non-success status.
	#[error("Failed to load payload from {url}: {status}")]
	Status {
		/// Requested URL.
		url: String,
		/// Response status.
		status: StatusCode,
	},

	/// The response body is not a valid payload.
	#[error("Malformed payload from {url}: {source}")]
	Decode {
		/// Requested URL.
		url: String,
		/// Decoding failure.
		#[source]
		source: PayloadError,
	},
}

/// Retrieves and decodes the payload at `url` with a fresh HTTP client.
pub async fn fetch_payload(url: &str) -> Result<Payload, FetchError> {
	fetch_payload_with(&reqwest::Client::new(), url).await
}

/// Retrieves and decodes the payload at `url` with the given client.
pub async fn fetch_payload_with(client: &reqwest::Client, url: &str) -> Result<Payload, FetchError> {
	let request_error = |source| FetchError::Request {
		url: url.to_string(),
		source,
	};

	let response = client.get(url).send().await.map_err(request_error)?;
	let status = response.status();
	if !status.is_success() {
		tracing::error!("Failed to load payload from {}: {}", url, status);
		return Err(FetchError::Status {
			url: url.to_string(),
			status,
		});
	}

	let body = response.bytes().await.map_err(request_error)?;
	let payload = Payload::from_slice(&body).map_err(|source| {
		tracing::error!("Malformed payload from {}: {}", url, source);
		FetchError::Decode {
			url: url.to_string(),
			source,
		}
	})?;

	tracing::info!(
		"Loaded payload from {}: version {}, {} root node(s), {} client component(s)",
		url,
		payload.version(),
		payload.tree().len(),
		payload.client_components().len()
	);
	Ok(payload)
}
