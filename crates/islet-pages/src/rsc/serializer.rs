//! View tree → payload serialization.
//!
//! Serialization runs in two passes. The first pass walks the view tree
//! asynchronously, invoking producer-side components (sibling subtrees are
//! resolved concurrently) and classifying consumer-side ones. The second
//! pass is synchronous and pre-order: it allocates placeholder ids and fills
//! the registry, so ids depend only on document order and never on which
//! producer finished first.

use super::context::SerializationContext;
use super::sanitize;
use crate::component::{Boundary, BoundaryClassifier, Component, ComponentView, Props, View};
use futures::future::{BoxFuture, FutureExt, try_join_all};
use islet_conf::Settings;
use islet_payload::{CHILDREN_PROP, MAX_ENCODED_DEPTH, Node, PAYLOAD_VERSION, Payload, PropMap};
use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use thiserror::Error;

/// Default nesting limit.
pub const DEFAULT_MAX_DEPTH: usize = 32;

/// Result type for serialization.
pub type Result<T> = std::result::Result<T, SerializeError>;

/// Fatal serialization errors.
///
/// Failures of individual producer components are not errors: they are
/// replaced by inline diagnostic text.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum SerializeError {
	/// The view tree nests deeper than the configured limit, typically
	/// because a component renders itself.
	#[error("View tree exceeds the maximum depth of {max_depth}")]
	DepthExceeded {
		/// The configured limit.
		max_depth: usize,
	},

	/// The produced payload nests deeper than decoders accept, usually
	/// because of deeply nested prop values.
	#[error("Payload nests {depth} levels deep, decoders accept at most {limit}")]
	EncodedDepthExceeded {
		/// Nesting of the produced payload.
		depth: usize,
		/// [`MAX_ENCODED_DEPTH`].
		limit: usize,
	},

	/// Nested consumer-side content could not be encoded.
	#[error("Failed to encode nested content: {0}")]
	Encode(#[from] serde_json::Error),
}

/// Serializer configuration.
#[derive(Debug, Clone)]
pub struct SerializerOptions {
	/// Maximum nesting depth.
	pub max_depth: usize,
	/// Version stamped on produced payloads.
	pub version: String,
}

impl Default for SerializerOptions {
	fn default() -> Self {
		Self {
			max_depth: DEFAULT_MAX_DEPTH,
			version: PAYLOAD_VERSION.to_string(),
		}
	}
}

/// Converts view trees into payload nodes.
///
/// ```
/// use islet_pages::component::{Component, Props, View};
/// use islet_pages::rsc::Serializer;
///
/// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
/// let counter = Component::client("Counter", "components/Counter");
/// let page = Component::server("Home", move |_| {
/// 	Ok(View::element("div")
/// 		.child("hello")
/// 		.child(counter.view(Props::new().with("initial", 0)))
/// 		.into())
/// });
///
/// let payload = Serializer::new().create_payload(&page, Props::new()).await.unwrap();
///
/// assert_eq!(payload.client_components()["Counter_0"], "components/Counter");
/// # });
/// ```
#[derive(Debug, Clone, Default)]
pub struct Serializer {
	classifier: BoundaryClassifier,
	options: SerializerOptions,
}

/// A view tree with every producer-side component evaluated.
enum Resolved {
	Empty,
	Text(String),
	List(Vec<Resolved>),
	Fragment(Vec<Resolved>),
	Element {
		tag: String,
		props: PropMap,
		children: Vec<Resolved>,
	},
	Consumer {
		name: String,
		path: String,
		props: PropMap,
		children: Option<Box<Resolved>>,
	},
}

impl Serializer {
	/// Creates a serializer with default classification and limits.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a serializer from `[boundary]`, `[serializer]` and `[payload]`
	/// settings.
	pub fn from_settings(settings: &Settings) -> Self {
		Self {
			classifier: BoundaryClassifier::from_settings(&settings.boundary),
			options: SerializerOptions {
				max_depth: settings.serializer.max_depth,
				version: settings.payload.version.clone(),
			},
		}
	}

	/// Replaces the boundary classifier.
	pub fn with_classifier(mut self, classifier: BoundaryClassifier) -> Self {
		self.classifier = classifier;
		self
	}

	/// Replaces the options.
	pub fn with_options(mut self, options: SerializerOptions) -> Self {
		self.options = options;
		self
	}

	/// Returns the options.
	pub fn options(&self) -> &SerializerOptions {
		&self.options
	}

	/// Serializes `root` into a node sequence, allocating ids and registering
	/// consumer-side components in `context`.
	pub async fn serialize(
		&self,
		root: View,
		context: &mut SerializationContext,
	) -> Result<Vec<Node>> {
		let resolved = self.resolve(root, 0).await?;
		let mut nodes = Vec::new();
		emit(resolved, context, &mut nodes)?;
		Ok(nodes)
	}

	/// Serializes `root` with a fresh context into a complete payload.
	pub async fn serialize_to_payload(&self, root: View) -> Result<Payload> {
		let mut context = SerializationContext::new();
		let tree = self.serialize(root, &mut context).await?;
		tracing::debug!(
			"Serialized {} root node(s), {} client component(s)",
			tree.len(),
			context.discovered().len()
		);
		let payload = Payload::with_version(
			self.options.version.clone(),
			tree,
			context.into_discovered(),
		);

		let depth = payload.encoded_depth();
		if depth > MAX_ENCODED_DEPTH {
			return Err(SerializeError::EncodedDepthExceeded {
				depth,
				limit: MAX_ENCODED_DEPTH,
			});
		}
		Ok(payload)
	}

	/// Instantiates `page` with `props` and serializes it into a payload.
	pub async fn create_payload(&self, page: &Component, props: Props) -> Result<Payload> {
		self.serialize_to_payload(page.view(props)).await
	}

	fn resolve(&self, view: View, depth: usize) -> BoxFuture<'_, Result<Resolved>> {
		async move {
			if depth > self.options.max_depth {
				return Err(SerializeError::DepthExceeded {
					max_depth: self.options.max_depth,
				});
			}

			let resolved = match view {
				View::Empty => Resolved::Empty,
				View::Text(text) => Resolved::Text(text.into_owned()),
				View::Number(number) => Resolved::Text(number.to_string()),
				View::List(items) => Resolved::List(self.resolve_all(items, depth).await?),
				View::Fragment(children) => {
					Resolved::Fragment(self.resolve_all(children, depth).await?)
				}
				View::Element(element) => {
					let (tag, props, children) = element.into_parts();
					Resolved::Element {
						tag: tag.into_owned(),
						props: sanitize::host_props(props),
						children: self.resolve_all(children, depth).await?,
					}
				}
				View::Component(instance) => self.resolve_component(instance, depth).await?,
				View::Opaque(value) => {
					tracing::warn!("Unknown view value, rendering as text: {}", value);
					Resolved::Text(value)
				}
			};
			Ok(resolved)
		}
		.boxed()
	}

	async fn resolve_all(&self, views: Vec<View>, depth: usize) -> Result<Vec<Resolved>> {
		try_join_all(views.into_iter().map(|view| self.resolve(view, depth + 1))).await
	}

	async fn resolve_component(&self, instance: ComponentView, depth: usize) -> Result<Resolved> {
		let (component, props) = instance.into_parts();
		let name = component.name().to_string();

		let render = match self.classifier.classify(&component) {
			Boundary::Consumer { path } => {
				let path = path.into_owned();
				let (props, children) = sanitize::client_props(props);
				let children = match children {
					Some(view) => Some(Box::new(self.resolve(view, depth + 1).await?)),
					None => None,
				};
				return Ok(Resolved::Consumer {
					name,
					path,
					props,
					children,
				});
			}
			Boundary::Producer(render) => Arc::clone(render),
		};

		let outcome = AssertUnwindSafe(async move { render(props).await })
			.catch_unwind()
			.await;
		match outcome {
			Ok(Ok(view)) => self.resolve(view, depth + 1).await,
			Ok(Err(error)) => {
				tracing::error!("Error rendering server component {}: {:#}", name, error);
				Ok(Resolved::Text(error_text(&name)))
			}
			Err(panic) => {
				tracing::error!(
					"Server component {} panicked: {}",
					name,
					panic_message(panic.as_ref())
				);
				Ok(Resolved::Text(error_text(&name)))
			}
		}
	}
}

fn emit(
	resolved: Resolved,
	context: &mut SerializationContext,
	out: &mut Vec<Node>,
) -> Result<()> {
	match resolved {
		Resolved::Empty => {}
		Resolved::Text(content) => out.push(Node::text(content)),
		Resolved::List(items) => {
			for item in items {
				emit(item, context, out)?;
			}
		}
		Resolved::Fragment(children) => out.push(Node::fragment(emit_all(children, context)?)),
		Resolved::Element {
			tag,
			props,
			children,
		} => out.push(Node::element(tag, props, emit_all(children, context)?)),
		Resolved::Consumer {
			name,
			path,
			mut props,
			children,
		} => {
			let id = context.allocate_id(&name);
			context.register(id.clone(), path.clone());
			if let Some(children) = children {
				let mut nested = Vec::new();
				emit(*children, context, &mut nested)?;
				if !nested.is_empty() {
					props.insert(CHILDREN_PROP.to_string(), serde_json::to_value(&nested)?);
				}
			}
			out.push(Node::placeholder(id, path, props));
		}
	}
	Ok(())
}

fn emit_all(items: Vec<Resolved>, context: &mut SerializationContext) -> Result<Vec<Node>> {
	let mut nodes = Vec::new();
	for item in items {
		emit(item, context, &mut nodes)?;
	}
	Ok(nodes)
}

fn error_text(name: &str) -> String {
	format!("[Error: {}]", name)
}

fn panic_message(panic: &(dyn Any + Send)) -> &str {
	if let Some(message) = panic.downcast_ref::<&str>() {
		message
	} else if let Some(message) = panic.downcast_ref::<String>() {
		message
	} else {
		"non-string panic payload"
	}
}
