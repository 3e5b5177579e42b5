//! Redraw scheduler
//!
//! Keeps the interactive per-second wake-up armed exactly while the face
//! is visible and interactive.

pub mod redraw;

pub use redraw::{
    aligned_delay_ms, FireOutcome, RedrawScheduler, TimerToken, INTERACTIVE_UPDATE_RATE_MS,
};
