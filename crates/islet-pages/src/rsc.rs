//! Component payload serialization.
//!
//! Walks a [`View`] tree, evaluating producer-side components and replacing
//! consumer-side ones with placeholders, and produces a [`Payload`].
//!
//! ## Example
//!
//! ```
//! use islet_pages::component::{Component, Props, View};
//! use islet_pages::rsc;
//!
//! # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
//! let counter = Component::client("Counter", "components/Counter");
//! let root: View = View::element("div")
//! 	.child("hello")
//! 	.child(counter.view(Props::new().with("initial", 0)))
//! 	.into();
//!
//! let mut context = rsc::SerializationContext::new();
//! let tree = rsc::serialize(root, &mut context).await.unwrap();
//!
//! assert_eq!(tree.len(), 1);
//! assert_eq!(context.discovered()["Counter_0"], "components/Counter");
//! # });
//! ```

mod context;
mod sanitize;
mod serializer;

pub use context::SerializationContext;
pub use sanitize::{client_props, host_props};
pub use serializer::{
	DEFAULT_MAX_DEPTH, Result, SerializeError, Serializer, SerializerOptions,
};

use crate::component::{Component, Props, View};
use islet_payload::{Node, Payload};

/// Serializes `root` with the default [`Serializer`].
pub async fn serialize(root: View, context: &mut SerializationContext) -> Result<Vec<Node>> {
	Serializer::new().serialize(root, context).await
}

/// Serializes `page` instantiated with `props` into a payload with the
/// default [`Serializer`].
pub async fn create_payload(page: &Component, props: Props) -> Result<Payload> {
	Serializer::new().create_payload(page, props).await
}
