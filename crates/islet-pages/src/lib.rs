//! Islet Pages - producer/consumer component payloads
//!
//! Server-rendered pages with interactive islands. A page is a tree of
//! components split across a boundary: producer-side components run once at
//! build time, consumer-side components ship as placeholders and are brought
//! back to life on the consumer.
//!
//! ## Architecture
//!
//! - [`component`]: Views, props and component definitions with explicit
//!   server/client directives
//! - [`rsc`]: Serializer turning a view tree into a [`Payload`]
//! - [`ssr`]: Static HTML rendering of payloads and the document template
//! - [`hydration`]: Payload retrieval, live tree reconstruction and mounting
//! - [`site`]: Static site generation from a route table
//!
//! ## Example
//!
//! ```
//! use islet_pages::component::{Component, Props, View};
//! use islet_pages::hydration::{ClientComponent, ComponentRegistry, LiveNode, rebuild};
//! use islet_pages::{rsc, ssr};
//!
//! # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
//! let counter = Component::client("Counter", "components/Counter");
//! let home = Component::server("Home", move |_| {
//! 	Ok(View::element("div")
//! 		.child("hello")
//! 		.child(counter.view(Props::new().with("initial", 0)))
//! 		.into())
//! });
//!
//! let payload = rsc::create_payload(&home, Props::new()).await.unwrap();
//! assert_eq!(
//! 	ssr::render(&payload),
//! 	r#"<div>hello<div data-rsc-placeholder="Counter_0"></div></div>"#
//! );
//!
//! let registry = ComponentRegistry::new().with(
//! 	"components/Counter",
//! 	ClientComponent::new("Counter", |props| {
//! 		LiveNode::text(props.get("initial").map(|v| v.to_string()).unwrap_or_default())
//! 	}),
//! );
//! assert_eq!(rebuild(&payload, &registry).text_content(), "hello0");
//! # });
//! ```

pub mod component;
pub mod hydration;
pub mod rsc;
pub mod site;
pub mod ssr;

pub use islet_payload::{Node, PAYLOAD_VERSION, Payload, PayloadError};

pub use component::{Component, IntoView, Props, View};
pub use hydration::{ComponentRegistry, HydrationRuntime, LiveNode, rebuild};
pub use rsc::{SerializationContext, Serializer, create_payload, serialize};
pub use site::{BuildReport, Route, SiteBuilder};
pub use ssr::{DocumentTemplate, render};
