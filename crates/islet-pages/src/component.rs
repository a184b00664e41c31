//! Component system for islet pages.
//!
//! This module provides the authoring model the serializer walks:
//!
//! - [`View`]: renderable content (elements, text, fragments, component
//!   instances)
//! - [`Props`]: ordered component and element properties
//! - [`Component`]: a named render function tagged with a [`Directive`]
//! - [`BoundaryClassifier`]: decides whether a component is evaluated on the
//!   producer side or deferred to the consumer side
//!
//! ## Usage
//!
//! ```
//! use islet_pages::component::{Component, Props, View};
//!
//! let counter = Component::client("Counter", "components/Counter");
//! let page = Component::server("Home", move |_props: Props| {
//! 	Ok(View::element("main")
//! 		.child(View::element("h1").child("Hello"))
//! 		.child(counter.view(Props::new().with("initial", 0)))
//! 		.into())
//! });
//!
//! assert_eq!(page.name(), "Home");
//! ```

mod boundary;
mod definition;
mod props;
mod view;

pub use boundary::{Boundary, BoundaryClassifier};
pub use definition::{Component, Directive, RenderFn, RenderFuture};
pub use props::{Callback, CallbackFn, Handle, PropValue, Props};
pub use view::{ComponentView, ElementView, IntoView, View};
