//! Host callbacks

use super::{Clock, IconAssets, TimerHost};

/// Everything the engine needs from the watch platform
pub trait FaceHost: Clock + TimerHost + IconAssets {
    /// Request one frame; the platform calls `draw` later on the same
    /// context
    fn invalidate(&mut self);

    /// Start delivering time zone change notifications
    fn register_time_zone_observer(&mut self);

    /// Stop delivering time zone change notifications
    fn unregister_time_zone_observer(&mut self);
}
