//! Producer/consumer boundary classification.

use super::definition::{Component, Directive, RenderFn};
use islet_conf::BoundarySettings;
use std::borrow::Cow;

/// Which side of the boundary a component falls on.
pub enum Boundary<'a> {
	/// Evaluate now with this render function.
	Producer(&'a RenderFn),
	/// Defer to the consumer side under this component path.
	Consumer {
		/// Component module identity.
		path: Cow<'a, str>,
	},
}

impl Boundary<'_> {
	/// Returns `true` for consumer-side components.
	pub fn is_consumer(&self) -> bool {
		matches!(self, Self::Consumer { .. })
	}
}

/// Decides whether a component is evaluated now or deferred.
///
/// Components carrying an explicit [`Directive::Server`] or
/// [`Directive::Client`] are classified by that directive alone. For
/// [`Directive::Unmarked`] components the classifier falls back to naming:
/// the component is consumer-side when its display name contains the name
/// marker (`"client"`) or its path tag contains the path marker
/// (`".client."`).
///
/// The name check is a plain substring match, so an unmarked producer-side
/// component whose name happens to contain the marker is deferred. Give such
/// components an explicit directive.
#[derive(Debug, Clone)]
pub struct BoundaryClassifier {
	name_marker: String,
	path_marker: String,
	component_dir: String,
}

impl Default for BoundaryClassifier {
	fn default() -> Self {
		Self::from_settings(&BoundarySettings::default())
	}
}

impl BoundaryClassifier {
	/// Creates a classifier from `[boundary]` settings.
	pub fn from_settings(settings: &BoundarySettings) -> Self {
		Self {
			name_marker: settings.name_marker.clone(),
			path_marker: settings.path_marker.clone(),
			component_dir: settings.component_dir.trim_end_matches('/').to_string(),
		}
	}

	/// Classifies a component.
	pub fn classify<'a>(&self, component: &'a Component) -> Boundary<'a> {
		match component.directive() {
			Directive::Server(render) => Boundary::Producer(render),
			Directive::Client { path } => Boundary::Consumer {
				path: Cow::Borrowed(path),
			},
			Directive::Unmarked { render, path_tag } => {
				let tagged = path_tag
					.as_deref()
					.is_some_and(|tag| tag.contains(self.path_marker.as_str()));
				if !tagged && !component.name().contains(self.name_marker.as_str()) {
					return Boundary::Producer(render);
				}

				let path = match path_tag {
					Some(tag) => Cow::Borrowed(tag.as_str()),
					None => Cow::Owned(self.fallback_path(component.name())),
				};
				tracing::debug!(
					"Classified unmarked component {} as consumer-side ({})",
					component.name(),
					path
				);
				Boundary::Consumer { path }
			}
		}
	}

	fn fallback_path(&self, name: &str) -> String {
		if self.component_dir.is_empty() {
			name.to_string()
		} else {
			format!("{}/{}", self.component_dir, name)
		}
	}
}
