//! # Islet
//!
//! Server-rendered pages with interactive islands.
//!
//! A page is a tree of components split by a boundary. Producer-side (server)
//! components run once when the page is built; consumer-side (client)
//! components are replaced by placeholders in a portable JSON payload and
//! brought back to life by the hydration runtime.
//!
//! ## Crates
//!
//! - [`payload`]: the wire format (`islet-payload`)
//! - [`conf`]: layered settings (`islet-conf`)
//! - [`pages`]: serializer, static renderer, hydration and site builder
//!   (`islet-pages`, feature `pages`)
//!
//! ## Feature Flags
//!
//! - `minimal` - Wire format and settings only
//! - `pages` - Serializer, renderer, hydration and site builder
//! - `full` (default) - Everything
//!
//! ## Quick Example
//!
//! ```rust
//! use islet::prelude::*;
//!
//! # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
//! let counter = Component::client("Counter", "components/Counter");
//! let home = Component::server("Home", move |_| {
//!     Ok(View::element("div")
//!         .child("hello")
//!         .child(counter.view(Props::new().with("initial", 0)))
//!         .into())
//! });
//!
//! let payload = Serializer::new().create_payload(&home, Props::new()).await.unwrap();
//! assert_eq!(payload.client_components()["Counter_0"], "components/Counter");
//! assert_eq!(
//!     render(&payload),
//!     r#"<div>hello<div data-rsc-placeholder="Counter_0"></div></div>"#
//! );
//! # });
//! ```

pub mod conf;
#[cfg(feature = "pages")]
pub mod pages;
pub mod payload;

pub use islet_conf::{Settings, SettingsError};
pub use islet_payload::{Node, PAYLOAD_VERSION, Payload, PayloadError};

#[cfg(feature = "pages")]
pub use islet_pages::{
	BuildReport, Component, ComponentRegistry, DocumentTemplate, HydrationRuntime, IntoView,
	LiveNode, Props, Route, Serializer, SiteBuilder, View, rebuild, render,
};

/// Commonly used types.
pub mod prelude {
	pub use crate::{Node, PAYLOAD_VERSION, Payload, PayloadError, Settings, SettingsError};

	#[cfg(feature = "pages")]
	pub use crate::{
		BuildReport, Component, ComponentRegistry, DocumentTemplate, HydrationRuntime, IntoView,
		LiveNode, Props, Route, Serializer, SiteBuilder, View, rebuild, render,
	};

	#[cfg(feature = "pages")]
	pub use islet_pages::hydration::{ClientComponent, ClientProps, StaticDocument};
}
