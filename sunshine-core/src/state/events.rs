//! Events delivered by the watch host

use sunshine_protocol::TapKind;

use super::display::ZoneId;

/// Display capabilities reported by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayProperties {
    pub low_bit_ambient: bool,
    pub burn_in_protection: bool,
}

/// Window shape, captured once when insets are applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WindowInsets {
    pub is_round: bool,
}

/// A touch reported by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TapCommand {
    pub kind: TapKind,
    pub x: i32,
    pub y: i32,
    /// Host uptime of the touch
    pub event_time_ms: u64,
}

impl TapCommand {
    pub const fn new(kind: TapKind, x: i32, y: i32, event_time_ms: u64) -> Self {
        Self {
            kind,
            x,
            y,
            event_time_ms,
        }
    }
}

/// Lifecycle notifications
///
/// These never carry weather data; forecasts arrive through the
/// inbound update channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LifecycleEvent {
    /// Face instantiated by the host
    Created,
    /// Face shown or hidden
    VisibilityChanged(bool),
    /// Capability flags reported
    PropertiesChanged(DisplayProperties),
    /// Entered or left ambient mode
    AmbientModeChanged(bool),
    /// Device time zone changed
    TimeZoneChanged(ZoneId),
    /// Once-per-minute tick from the host
    TimeTick,
    /// Window shape known
    WindowInsets(WindowInsets),
    /// Touch input
    TapGesture(TapCommand),
    /// Face torn down
    Destroyed,
}

impl LifecycleEvent {
    /// Check if this event ends the face's life
    pub fn is_terminal(&self) -> bool {
        matches!(self, LifecycleEvent::Destroyed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_destroy_is_terminal() {
        assert!(LifecycleEvent::Destroyed.is_terminal());
        assert!(!LifecycleEvent::Created.is_terminal());
        assert!(!LifecycleEvent::TapGesture(TapCommand::new(TapKind::Tap, 1, 2, 3)).is_terminal());
        assert!(!LifecycleEvent::WindowInsets(WindowInsets { is_round: true }).is_terminal());
        assert!(!LifecycleEvent::TimeZoneChanged(ZoneId::new()).is_terminal());
    }
}
