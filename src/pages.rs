//! Server components, static rendering and hydration
//!
//! This module provides access to islet-pages: the serializer that turns a
//! component tree into a payload, the static renderer, the consumer-side
//! rebuilder and the static site builder.
//!
//! ## Example
//!
//! ```rust
//! use islet::pages::component::{Component, Props, View};
//! use islet::pages::site::SiteBuilder;
//!
//! let home = Component::server("Home", |_| {
//!     Ok(View::element("h1").child("Welcome").into())
//! });
//! let counter = Component::client("Counter", "components/Counter");
//!
//! let site = SiteBuilder::new("dist").page("/", home).page("/counter", counter);
//! assert_eq!(site.routes().len(), 2);
//! ```

// Re-export all islet-pages functionality
pub use islet_pages::*;
