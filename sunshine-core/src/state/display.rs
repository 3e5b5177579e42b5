//! Shared display state
//!
//! Written only by the engine (lifecycle callbacks, inbound updates and
//! the clock refresh before a frame); read by the renderer.

use jiff::civil::DateTime;
use sunshine_protocol::{ConditionId, WeatherUpdate};

/// Longest time zone identifier kept
pub const MAX_ZONE_LEN: usize = 48;

/// IANA time zone identifier ("Europe/Oslo")
pub type ZoneId = heapless::String<MAX_ZONE_LEN>;

/// Zone assumed until the host reports one
pub const DEFAULT_ZONE: &str = "UTC";

/// Last forecast received from the companion
///
/// Always replaced as a whole so a frame never pairs a new high with an
/// old low or condition.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Forecast {
    pub high: f64,
    pub low: f64,
    /// `None` means "no icon"
    pub condition: Option<ConditionId>,
}

impl From<WeatherUpdate> for Forecast {
    fn from(update: WeatherUpdate) -> Self {
        let condition = if update.condition.is_empty() {
            None
        } else {
            Some(update.condition)
        };
        Self {
            high: update.high,
            low: update.low,
            condition,
        }
    }
}

/// Power, visibility and capability flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayFlags {
    pub visible: bool,
    pub ambient: bool,
    /// Display has fewer bits per colour in ambient mode
    pub low_bit_ambient: bool,
    /// Display needs burn-in protection in ambient mode
    pub burn_in_protection: bool,
}

/// Everything a frame is drawn from
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayState {
    forecast: Forecast,
    flags: DisplayFlags,
    tap_count: u32,
    zone_id: ZoneId,
    now: DateTime,
}

impl Default for DisplayState {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayState {
    /// Fresh state: no forecast, hidden, interactive, UTC
    pub fn new() -> Self {
        let mut zone_id = ZoneId::new();
        let _ = zone_id.push_str(DEFAULT_ZONE);
        Self {
            forecast: Forecast::default(),
            flags: DisplayFlags::default(),
            tap_count: 0,
            zone_id,
            now: DateTime::default(),
        }
    }

    pub fn forecast(&self) -> &Forecast {
        &self.forecast
    }

    pub fn high_temp(&self) -> f64 {
        self.forecast.high
    }

    pub fn low_temp(&self) -> f64 {
        self.forecast.low
    }

    pub fn condition_id(&self) -> Option<&str> {
        self.forecast.condition.as_ref().map(|c| c.as_str())
    }

    pub fn flags(&self) -> DisplayFlags {
        self.flags
    }

    pub fn is_visible(&self) -> bool {
        self.flags.visible
    }

    pub fn is_ambient(&self) -> bool {
        self.flags.ambient
    }

    pub fn tap_count(&self) -> u32 {
        self.tap_count
    }

    /// Odd tap counts select the alternate interactive background
    pub fn uses_alternate_background(&self) -> bool {
        self.tap_count % 2 == 1
    }

    pub fn zone_id(&self) -> &str {
        self.zone_id.as_str()
    }

    /// Local time as of the last clock refresh
    pub fn now(&self) -> DateTime {
        self.now
    }

    pub(crate) fn apply_forecast(&mut self, forecast: Forecast) {
        self.forecast = forecast;
    }

    pub(crate) fn set_visible(&mut self, visible: bool) {
        self.flags.visible = visible;
    }

    pub(crate) fn set_ambient(&mut self, ambient: bool) {
        self.flags.ambient = ambient;
    }

    pub(crate) fn set_capabilities(&mut self, low_bit_ambient: bool, burn_in_protection: bool) {
        self.flags.low_bit_ambient = low_bit_ambient;
        self.flags.burn_in_protection = burn_in_protection;
    }

    pub(crate) fn record_tap(&mut self) -> u32 {
        self.tap_count = self.tap_count.wrapping_add(1);
        self.tap_count
    }

    pub(crate) fn set_zone(&mut self, zone_id: ZoneId) {
        self.zone_id = zone_id;
    }

    pub(crate) fn set_now(&mut self, now: DateTime) {
        self.now = now;
    }

    pub(crate) fn reset_flags(&mut self) {
        self.flags.visible = false;
        self.flags.ambient = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let state = DisplayState::new();
        assert_eq!(state.high_temp(), 0.0);
        assert_eq!(state.low_temp(), 0.0);
        assert_eq!(state.condition_id(), None);
        assert!(!state.is_visible());
        assert!(!state.is_ambient());
        assert_eq!(state.zone_id(), "UTC");
    }

    #[test]
    fn test_forecast_from_update() {
        let update = WeatherUpdate::new(72.0, 58.0, "clear").unwrap();
        let forecast = Forecast::from(update);
        assert_eq!(forecast.high, 72.0);
        assert_eq!(forecast.low, 58.0);
        assert_eq!(forecast.condition.as_deref(), Some("clear"));

        let empty = Forecast::from(WeatherUpdate::new(1.0, 0.0, "").unwrap());
        assert!(empty.condition.is_none());
    }

    #[test]
    fn test_forecast_replaced_whole() {
        let mut state = DisplayState::new();
        state.apply_forecast(Forecast::from(
            WeatherUpdate::new(80.0, 65.0, "storm").unwrap(),
        ));
        state.apply_forecast(Forecast::from(WeatherUpdate::new(50.0, 40.0, "").unwrap()));
        assert_eq!(state.high_temp(), 50.0);
        assert_eq!(state.low_temp(), 40.0);
        assert_eq!(state.condition_id(), None);
    }

    #[test]
    fn test_tap_parity() {
        let mut state = DisplayState::new();
        assert!(!state.uses_alternate_background());
        state.record_tap();
        assert!(state.uses_alternate_background());
        state.record_tap();
        assert!(!state.uses_alternate_background());
        assert_eq!(state.tap_count(), 2);
    }
}
