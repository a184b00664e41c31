//! Layered settings (defaults, `islet.toml`, `ISLET_*` environment variables)

pub use islet_conf::*;
