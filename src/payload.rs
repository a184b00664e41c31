//! Payload wire format
//!
//! Node model, payload envelope and the registry invariant shared by the
//! producer and consumer sides.

pub use islet_payload::*;
