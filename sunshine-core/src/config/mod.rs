//! Configuration types
//!
//! Board-agnostic face configuration. Platforms load it however they
//! like (the simulator reads TOML); with the `serde` feature every type
//! here deserializes with per-field defaults.

pub mod types;

pub use types::*;
