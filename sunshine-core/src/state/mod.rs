//! Display state and lifecycle
//!
//! `DisplayState` is the one record the renderer reads. The lifecycle
//! stage and the visibility/ambient flags together resolve to a
//! [`FacePhase`], which decides whether the interactive timer runs.

pub mod display;
pub mod events;
pub mod machine;

pub use display::{DisplayFlags, DisplayState, Forecast, ZoneId, DEFAULT_ZONE, MAX_ZONE_LEN};
pub use events::{DisplayProperties, LifecycleEvent, TapCommand, WindowInsets};
pub use machine::{FacePhase, Stage};
