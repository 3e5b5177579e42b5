//! Face renderer
//!
//! Draws one frame from a [`DisplayState`](crate::state::DisplayState)
//! onto any [`DrawSurface`](sunshine_display::DrawSurface). The renderer
//! never writes display state.

pub mod format;
pub mod paints;
pub mod renderer;

pub use format::{format_date, format_temperature, format_time, DateText, TemperatureText, TimeText};
pub use paints::PaintSet;
pub use renderer::{FrameReport, IconOutcome, Renderer};
