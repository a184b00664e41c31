//! Consumer-side reconstruction.
//!
//! A payload is retrieved ([`fetch_payload`]), rebuilt into a [`LiveNode`]
//! tree against a [`ComponentRegistry`] ([`rebuild()`]), and attached to a
//! [`MountTarget`] ([`mount()`]). [`HydrationRuntime`] runs the three steps.

mod fetch;
mod live;
mod mount;
mod rebuild;
mod registry;
mod runtime;

pub use fetch::{FetchError, fetch_payload, fetch_payload_with};
pub use live::{Island, LiveElement, LiveNode};
pub use mount::{MountError, MountTarget, StaticDocument, mount};
pub use rebuild::{Rebuilder, rebuild};
pub use registry::{ClientComponent, ClientProps, ClientRenderFn, ComponentRegistry};
pub use runtime::{HydrationError, HydrationRuntime};
