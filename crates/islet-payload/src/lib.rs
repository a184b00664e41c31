//! Islet payload wire format.
//!
//! A payload is the portable boundary between the producer side, which
//! evaluates server components at build time, and the consumer side, which
//! mounts interactive client components. Both consumers of a payload (the
//! static markup renderer and the tree rebuilder) depend only on the types in
//! this crate.
//!
//! ## Wire format
//!
//! ```json
//! {
//!   "version": "1.0",
//!   "tree": [
//!     {"$$type": "element", "tag": "div", "props": {}, "children": [
//!       {"$$type": "text", "content": "hello"},
//!       {"$$type": "client-placeholder", "id": "Counter_0",
//!        "componentPath": "components/Counter", "props": {"initial": 0}}
//!     ]}
//!   ],
//!   "clientComponents": {"Counter_0": "components/Counter"}
//! }
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod node;
pub mod payload;

pub use error::{PayloadError, Result, Violation};
pub use node::{CHILDREN_PROP, ElementNode, FragmentNode, Node, Placeholder, PropMap, TextNode};
pub use payload::{MAX_ENCODED_DEPTH, PAYLOAD_VERSION, Payload};
