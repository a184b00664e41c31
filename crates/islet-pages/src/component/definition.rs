//! Component definitions and authoring directives.

use super::props::Props;
use super::view::{ComponentView, View};
use futures::future::{self, BoxFuture, FutureExt};
use std::borrow::Cow;
use std::fmt;
use std::future::Future;
use std::sync::Arc;

/// The future returned by a producer-side render function.
pub type RenderFuture = BoxFuture<'static, anyhow::Result<View>>;

/// A producer-side render function.
pub type RenderFn = Arc<dyn Fn(Props) -> RenderFuture + Send + Sync + 'static>;

/// How a component was authored to run.
#[derive(Clone)]
pub enum Directive {
	/// Evaluated on the producer side.
	Server(RenderFn),
	/// Deferred to the consumer side, identified by `path`.
	Client {
		/// Component module identity on the consumer side.
		path: String,
	},
	/// No explicit directive. The classifier falls back to naming
	/// conventions.
	Unmarked {
		/// Render function used when classified as producer-side.
		render: RenderFn,
		/// Out-of-band module path, if known.
		path_tag: Option<String>,
	},
}

impl fmt::Debug for Directive {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Server(_) => f.write_str("Server"),
			Self::Client { path } => f.debug_struct("Client").field("path", path).finish(),
			Self::Unmarked { path_tag, .. } => f
				.debug_struct("Unmarked")
				.field("path_tag", path_tag)
				.finish(),
		}
	}
}

/// A named, reusable component.
///
/// ```
/// use islet_pages::component::{Component, Props, View};
///
/// let greeting = Component::server("Greeting", |props: Props| {
/// 	let name = props.get("name").and_then(|v| v.as_str()).unwrap_or("world").to_string();
/// 	Ok(View::element("p").child(format!("Hello, {}!", name)).into())
/// });
/// let counter = Component::client("Counter", "components/Counter");
///
/// assert_eq!(greeting.name(), "Greeting");
/// assert!(counter.render_fn().is_none());
/// ```
#[derive(Clone)]
pub struct Component {
	name: Cow<'static, str>,
	directive: Directive,
}

impl Component {
	/// Creates a producer-side component with a synchronous render function.
	pub fn server<F>(name: impl Into<Cow<'static, str>>, render: F) -> Self
	where
		F: Fn(Props) -> anyhow::Result<View> + Send + Sync + 'static,
	{
		Self {
			name: name.into(),
			directive: Directive::Server(sync_render(render)),
		}
	}

	/// Creates a producer-side component with an asynchronous render function.
	pub fn server_async<F, Fut>(name: impl Into<Cow<'static, str>>, render: F) -> Self
	where
		F: Fn(Props) -> Fut + Send + Sync + 'static,
		Fut: Future<Output = anyhow::Result<View>> + Send + 'static,
	{
		Self {
			name: name.into(),
			directive: Directive::Server(async_render(render)),
		}
	}

	/// Creates a consumer-side component identified by `path`.
	pub fn client(name: impl Into<Cow<'static, str>>, path: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			directive: Directive::Client { path: path.into() },
		}
	}

	/// Creates a component without a directive.
	///
	/// Its side is decided by [`BoundaryClassifier`](super::BoundaryClassifier)
	/// from the name and the optional path tag.
	pub fn unmarked<F>(name: impl Into<Cow<'static, str>>, render: F) -> Self
	where
		F: Fn(Props) -> anyhow::Result<View> + Send + Sync + 'static,
	{
		Self {
			name: name.into(),
			directive: Directive::Unmarked {
				render: sync_render(render),
				path_tag: None,
			},
		}
	}

	/// Creates an asynchronous component without a directive.
	pub fn unmarked_async<F, Fut>(name: impl Into<Cow<'static, str>>, render: F) -> Self
	where
		F: Fn(Props) -> Fut + Send + Sync + 'static,
		Fut: Future<Output = anyhow::Result<View>> + Send + 'static,
	{
		Self {
			name: name.into(),
			directive: Directive::Unmarked {
				render: async_render(render),
				path_tag: None,
			},
		}
	}

	/// Attaches an out-of-band module path. Has no effect on components with
	/// an explicit directive.
	pub fn with_path_tag(mut self, tag: impl Into<String>) -> Self {
		if let Directive::Unmarked { path_tag, .. } = &mut self.directive {
			*path_tag = Some(tag.into());
		}
		self
	}

	/// Returns the display name.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Returns the authoring directive.
	pub fn directive(&self) -> &Directive {
		&self.directive
	}

	/// Returns the render function, if the component has one.
	pub fn render_fn(&self) -> Option<&RenderFn> {
		match &self.directive {
			Directive::Server(render) | Directive::Unmarked { render, .. } => Some(render),
			Directive::Client { .. } => None,
		}
	}

	/// Instantiates the component with `props`.
	pub fn view(&self, props: Props) -> View {
		View::Component(ComponentView::new(self.clone(), props))
	}
}

impl fmt::Debug for Component {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Component")
			.field("name", &self.name)
			.field("directive", &self.directive)
			.finish()
	}
}

fn sync_render<F>(render: F) -> RenderFn
where
	F: Fn(Props) -> anyhow::Result<View> + Send + Sync + 'static,
{
	Arc::new(move |props| future::ready(render(props)).boxed())
}

fn async_render<F, Fut>(render: F) -> RenderFn
where
	F: Fn(Props) -> Fut + Send + Sync + 'static,
	Fut: Future<Output = anyhow::Result<View>> + Send + 'static,
{
	Arc::new(move |props| render(props).boxed())
}
