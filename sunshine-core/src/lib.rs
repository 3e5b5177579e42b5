//! Board-agnostic core logic for the Sunshine watch face
//!
//! This crate contains all face logic that does not depend on a specific
//! watch platform:
//!
//! - Collaborator traits (clock, timer, icon assets, host callbacks)
//! - Display state and the lifecycle/power state machine
//! - Redraw scheduler for the per-second interactive timer
//! - Inbound update channel fed by the companion transport
//! - Face renderer
//! - Configuration type definitions
//!
//! [`engine::WatchFaceEngine`] ties these together behind the callback
//! surface a watch host drives. All of its methods run on one serialized
//! context; the only thing other contexts touch is
//! [`inbound::UpdateChannel::deliver`].

#![no_std]
#![deny(unsafe_code)]

extern crate alloc;

cfg_if::cfg_if! {
    if #[cfg(feature = "log")] {
        #[allow(unused_imports)]
        pub(crate) use log::{debug, error, info, trace, warn};
    } else {
        macro_rules! trace {
            ($($arg:tt)*) => {{}};
        }
        macro_rules! debug {
            ($($arg:tt)*) => {{}};
        }
        macro_rules! info {
            ($($arg:tt)*) => {{}};
        }
        macro_rules! warn {
            ($($arg:tt)*) => {{}};
        }
        macro_rules! error {
            ($($arg:tt)*) => {{}};
        }
        #[allow(unused_imports)]
        pub(crate) use {debug, error, info, trace, warn};
    }
}

pub mod config;
pub mod engine;
pub mod inbound;
pub mod render;
pub mod scheduler;
pub mod state;
pub mod traits;

pub use engine::{UpdateOutcome, WatchFaceEngine};
