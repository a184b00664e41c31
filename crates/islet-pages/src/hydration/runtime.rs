//! Retrieve → rebuild → mount.

use super::fetch::{FetchError, fetch_payload_with};
use super::mount::{MountError, MountTarget, mount};
use super::rebuild::Rebuilder;
use super::registry::ComponentRegistry;
use islet_conf::Settings;
use islet_payload::{PAYLOAD_VERSION, Payload};
use thiserror::Error;

/// Errors raised while hydrating a page.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum HydrationError {
	/// The payload could not be retrieved.
	#[error(transparent)]
	Fetch(#[from] FetchError),

	/// The rebuilt tree could not be attached.
	#[error(transparent)]
	Mount(#[from] MountError),
}

/// Consumer-side entry point.
///
/// Owns the component registry and the attachment point id, and drives the
/// retrieve, rebuild and mount steps.
#[derive(Debug, Clone)]
pub struct HydrationRuntime {
	registry: ComponentRegistry,
	root_id: String,
	client: reqwest::Client,
	expected_version: String,
}

impl HydrationRuntime {
	/// Creates a runtime mounting at `root`.
	pub fn new(registry: ComponentRegistry) -> Self {
		Self {
			registry,
			root_id: "root".to_string(),
			client: reqwest::Client::new(),
			expected_version: PAYLOAD_VERSION.to_string(),
		}
	}

	/// Creates a runtime using the mount id and payload version from
	/// `settings`.
	pub fn from_settings(registry: ComponentRegistry, settings: &Settings) -> Self {
		Self::new(registry)
			.with_root_id(settings.build.mount_id.clone())
			.with_expected_version(settings.payload.version.clone())
	}

	/// Sets the attachment point id.
	pub fn with_root_id(mut self, id: impl Into<String>) -> Self {
		self.root_id = id.into();
		self
	}

	/// Sets the payload version this runtime understands.
	pub fn with_expected_version(mut self, version: impl Into<String>) -> Self {
		self.expected_version = version.into();
		self
	}

	/// Uses `client` for payload retrieval.
	pub fn with_client(mut self, client: reqwest::Client) -> Self {
		self.client = client;
		self
	}

	/// Returns the attachment point id.
	pub fn root_id(&self) -> &str {
		&self.root_id
	}

	/// Returns the registry.
	pub fn registry(&self) -> &ComponentRegistry {
		&self.registry
	}

	/// Rebuilds `payload` and mounts the result on `target`.
	pub fn hydrate<T>(&self, target: &mut T, payload: &Payload) -> Result<(), HydrationError>
	where
		T: MountTarget + ?Sized,
	{
		let tree = Rebuilder::new(&self.registry)
			.with_expected_version(self.expected_version.clone())
			.rebuild(payload);
		mount(target, &self.root_id, tree)?;
		Ok(())
	}

	/// Retrieves the payload at `url`, then rebuilds and mounts it.
	pub async fn hydrate_from_url<T>(&self, target: &mut T, url: &str) -> Result<(), HydrationError>
	where
		T: MountTarget + ?Sized,
	{
		let payload = fetch_payload_with(&self.client, url).await?;
		self.hydrate(target, &payload)
	}
}
