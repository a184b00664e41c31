//! Static site generation.
//!
//! A [`SiteBuilder`] holds a route table. Building serializes every route's
//! page into a payload, renders it, and writes two files per route under the
//! output directory:
//!
//! - `<path>.rsc.json`: the payload, for hydration
//! - `<path>.html`: the rendered document, pointing at the payload
//!
//! The root route `/` is written as `index`.

use crate::component::{Component, Props};
use crate::rsc::{SerializeError, Serializer};
use crate::ssr::{self, DocumentTemplate};
use islet_conf::Settings;
use islet_payload::PayloadError;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use thiserror::Error;
use tokio::fs;

/// Errors raised while building a site. Each names the route or file
/// involved; the first failure aborts the build.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum SiteError {
	/// A route's page could not be serialized.
	#[error("Failed to serialize route {route}: {source}")]
	Serialize {
		/// Route path.
		route: String,
		/// Serialization failure.
		#[source]
		source: SerializeError,
	},

	/// A route's payload could not be encoded.
	#[error("Failed to encode payload for route {route}: {source}")]
	Encode {
		/// Route path.
		route: String,
		/// Encoding failure.
		#[source]
		source: PayloadError,
	},

	/// A file or directory could not be written.
	#[error("Failed to write {}: {source}", path.display())]
	Io {
		/// Path being written.
		path: PathBuf,
		/// I/O failure.
		#[source]
		source: std::io::Error,
	},

	/// Two routes map to the same output file.
	#[error("Duplicate route: {0}")]
	DuplicateRoute(String),
}

/// Result type for site builds.
pub type Result<T> = std::result::Result<T, SiteError>;

/// A page and the path it is published under.
#[derive(Debug, Clone)]
pub struct Route {
	path: String,
	page: Component,
	props: Props,
}

impl Route {
	/// Creates a route rendering `page` with no props.
	pub fn new(path: impl Into<String>, page: Component) -> Self {
		Self {
			path: path.into(),
			page,
			props: Props::new(),
		}
	}

	/// Sets the props the page is instantiated with.
	pub fn with_props(mut self, props: Props) -> Self {
		self.props = props;
		self
	}

	/// Returns the route path.
	pub fn path(&self) -> &str {
		&self.path
	}

	/// Output file stem relative to the output directory.
	pub fn file_stem(&self) -> String {
		let trimmed = self.path.trim_matches('/');
		if trimmed.is_empty() {
			"index".to_string()
		} else {
			trimmed.to_string()
		}
	}

	/// URL the rendered document retrieves its payload from.
	pub fn payload_url(&self) -> String {
		format!("/{}.rsc.json", self.file_stem())
	}
}

/// Files written for one route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltPage {
	/// Route path.
	pub route: String,
	/// Payload file.
	pub payload_path: PathBuf,
	/// Document file.
	pub html_path: PathBuf,
	/// Number of consumer-side components in the payload.
	pub client_components: usize,
}

/// Summary of a finished build.
#[derive(Debug, Clone)]
pub struct BuildReport {
	/// Pages in route order.
	pub pages: Vec<BuiltPage>,
	/// Wall-clock build time.
	pub elapsed: Duration,
}

impl BuildReport {
	/// Returns every file written, in route order.
	pub fn files(&self) -> Vec<&Path> {
		self.pages
			.iter()
			.flat_map(|page| [page.payload_path.as_path(), page.html_path.as_path()])
			.collect()
	}
}

/// Builds a static site from a route table.
#[derive(Debug, Clone)]
pub struct SiteBuilder {
	routes: Vec<Route>,
	out_dir: PathBuf,
	serializer: Serializer,
	template: DocumentTemplate,
	inline_payload: bool,
}

impl Default for SiteBuilder {
	fn default() -> Self {
		Self::from_settings(&Settings::default())
	}
}

impl SiteBuilder {
	/// Creates a builder writing to `out_dir` with default settings.
	pub fn new(out_dir: impl Into<PathBuf>) -> Self {
		Self::default().out_dir(out_dir)
	}

	/// Creates a builder from settings: output directory, document template
	/// and serializer options all follow them.
	pub fn from_settings(settings: &Settings) -> Self {
		Self {
			routes: Vec::new(),
			out_dir: settings.build.out_dir.clone(),
			serializer: Serializer::from_settings(settings),
			template: DocumentTemplate::from_settings(&settings.build),
			inline_payload: settings.build.inline_payload,
		}
	}

	/// Sets the output directory.
	pub fn out_dir(mut self, out_dir: impl Into<PathBuf>) -> Self {
		self.out_dir = out_dir.into();
		self
	}

	/// Replaces the serializer.
	pub fn serializer(mut self, serializer: Serializer) -> Self {
		self.serializer = serializer;
		self
	}

	/// Replaces the document template.
	pub fn template(mut self, template: DocumentTemplate) -> Self {
		self.template = template;
		self
	}

	/// Embeds each payload in its document as well as writing it out.
	pub fn inline_payload(mut self, inline: bool) -> Self {
		self.inline_payload = inline;
		self
	}

	/// Adds a route.
	pub fn route(mut self, route: Route) -> Self {
		self.routes.push(route);
		self
	}

	/// Adds a route rendering `page` with no props.
	pub fn page(self, path: impl Into<String>, page: Component) -> Self {
		self.route(Route::new(path, page))
	}

	/// Returns the route table.
	pub fn routes(&self) -> &[Route] {
		&self.routes
	}

	/// Builds every route.
	pub async fn build(&self) -> Result<BuildReport> {
		let started = Instant::now();
		self.check_routes()?;

		fs::create_dir_all(&self.out_dir)
			.await
			.map_err(|source| SiteError::Io {
				path: self.out_dir.clone(),
				source,
			})?;

		let mut pages = Vec::with_capacity(self.routes.len());
		for route in &self.routes {
			pages.push(self.build_route(route).await?);
		}

		let report = BuildReport {
			pages,
			elapsed: started.elapsed(),
		};
		tracing::info!(
			"Built {} page(s) into {} in {:?}",
			report.pages.len(),
			self.out_dir.display(),
			report.elapsed
		);
		Ok(report)
	}

	async fn build_route(&self, route: &Route) -> Result<BuiltPage> {
		let payload = self
			.serializer
			.create_payload(&route.page, route.props.clone())
			.await
			.map_err(|source| SiteError::Serialize {
				route: route.path.clone(),
				source,
			})?;
		let json = payload.to_json().map_err(|source| SiteError::Encode {
			route: route.path.clone(),
			source,
		})?;

		let mut template = self
			.template
			.clone()
			.default_title(route.page.name())
			.payload_url(route.payload_url());
		if self.inline_payload {
			template = template.inline_payload(json.clone());
		}
		let html = template.wrap(&ssr::render(&payload));

		let stem = route.file_stem();
		let payload_path = self.out_dir.join(format!("{}.rsc.json", stem));
		let html_path = self.out_dir.join(format!("{}.html", stem));
		write_file(&payload_path, json.as_bytes()).await?;
		write_file(&html_path, html.as_bytes()).await?;

		tracing::debug!("Built route {} -> {}", route.path, html_path.display());
		Ok(BuiltPage {
			route: route.path.clone(),
			payload_path,
			html_path,
			client_components: payload.client_components().len(),
		})
	}

	fn check_routes(&self) -> Result<()> {
		let mut seen = std::collections::HashSet::new();
		for route in &self.routes {
			if !seen.insert(route.file_stem()) {
				return Err(SiteError::DuplicateRoute(route.path.clone()));
			}
		}
		Ok(())
	}
}

async fn write_file(path: &Path, content: &[u8]) -> Result<()> {
	let io_error = |source| SiteError::Io {
		path: path.to_path_buf(),
		source,
	};
	if let Some(parent) = path.parent() {
		fs::create_dir_all(parent).await.map_err(io_error)?;
	}
	fs::write(path, content).await.map_err(io_error)
}
