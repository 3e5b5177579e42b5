//! Simulator configuration
//!
//! One TOML file carries both the face configuration and the simulated
//! session. A default is compiled in; `SUNSHINE_FACE_CONFIG` points at
//! an override.

pub mod loader;
pub mod scenario;

pub use loader::{load, LoadError, CONFIG_ENV};
pub use scenario::{CompanionUpdate, HostCall, ScriptedEvent, ScriptedStep, SimConfig, Simulation};
