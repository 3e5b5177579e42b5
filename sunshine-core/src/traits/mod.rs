//! Collaborator traits
//!
//! These traits define the interface between the face logic and the
//! watch platform: wall clock, wake-up timer, icon assets and the host
//! callbacks the engine needs.

pub mod assets;
pub mod clock;
pub mod host;
pub mod timer;

pub use assets::{AssetError, IconAssets, IconTable, KNOWN_CONDITIONS};
pub use clock::Clock;
pub use host::FaceHost;
pub use timer::TimerHost;
