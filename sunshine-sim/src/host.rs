//! Simulated watch platform
//!
//! Wall clock and zones come from the machine running the simulator.
//! The wake-up timer is the timer task; frame requests set a flag the
//! engine task checks after every event.

use embassy_time::{Duration, Instant};
use jiff::civil::DateTime;
use jiff::tz::TimeZone;
use jiff::Timestamp;
use log::{debug, info, warn};

use sunshine_core::scheduler::TimerToken;
use sunshine_core::state::{ZoneId, DEFAULT_ZONE};
use sunshine_core::traits::{AssetError, Clock, FaceHost, IconAssets, IconTable, TimerHost};
use sunshine_display::IconHandle;

use crate::channels::{TimerCommand, TIMER_CMD};

pub struct SimHost {
    /// Fixed device zone; `None` follows the machine's zone
    zone_override: Option<ZoneId>,
    icons: IconTable,
    dirty: bool,
}

impl SimHost {
    pub fn new(zone_override: Option<&str>, missing_icons: &[String]) -> Self {
        let zone_override = zone_override.and_then(|zone| match ZoneId::try_from(zone) {
            Ok(zone) => Some(zone),
            Err(()) => {
                warn!("Time zone {:?} too long, using system zone", zone);
                None
            }
        });
        let icons = missing_icons
            .iter()
            .fold(IconTable::complete(), |table, id| table.without(id));
        Self {
            zone_override,
            icons,
            dirty: false,
        }
    }

    /// Whether a frame was requested since the last call
    pub fn take_dirty(&mut self) -> bool {
        core::mem::take(&mut self.dirty)
    }
}

impl Clock for SimHost {
    fn now_ms(&self) -> u64 {
        Timestamp::now().as_millisecond().max(0) as u64
    }

    fn system_zone(&self) -> ZoneId {
        if let Some(zone) = &self.zone_override {
            return zone.clone();
        }
        let system = TimeZone::system();
        system
            .iana_name()
            .and_then(|name| ZoneId::try_from(name).ok())
            .or_else(|| ZoneId::try_from(DEFAULT_ZONE).ok())
            .unwrap_or_default()
    }

    fn local_time(&self, zone: &str, epoch_ms: u64) -> DateTime {
        let tz = TimeZone::get(zone).unwrap_or_else(|e| {
            warn!("Unknown time zone {}: {}, using UTC", zone, e);
            TimeZone::UTC
        });
        match Timestamp::from_millisecond(epoch_ms as i64) {
            Ok(ts) => ts.to_zoned(tz).datetime(),
            Err(e) => {
                warn!("Clock out of range: {}", e);
                DateTime::default()
            }
        }
    }
}

impl TimerHost for SimHost {
    fn schedule(&mut self, token: TimerToken, delay_ms: u64) {
        let deadline = Instant::now() + Duration::from_millis(delay_ms);
        debug!("Wake-up {} in {} ms", token.0, delay_ms);
        TIMER_CMD.signal(TimerCommand::Arm { token, deadline });
    }

    fn cancel(&mut self, token: TimerToken) {
        TIMER_CMD.signal(TimerCommand::Cancel(token));
    }
}

impl IconAssets for SimHost {
    fn icon_for(&self, condition_id: &str) -> Result<IconHandle, AssetError> {
        self.icons.icon_for(condition_id)
    }
}

impl FaceHost for SimHost {
    fn invalidate(&mut self) {
        self.dirty = true;
    }

    fn register_time_zone_observer(&mut self) {
        info!("Time zone observer registered");
    }

    fn unregister_time_zone_observer(&mut self) {
        info!("Time zone observer unregistered");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_override() {
        let host = SimHost::new(Some("Asia/Tokyo"), &[]);
        assert_eq!(host.system_zone().as_str(), "Asia/Tokyo");
    }

    #[test]
    fn test_local_time_in_zone() {
        let host = SimHost::new(None, &[]);
        // 2026-10-16T12:00:00Z
        let epoch_ms = 1_792_152_000_000;
        let utc = host.local_time("UTC", epoch_ms);
        assert_eq!((utc.hour(), utc.minute()), (12, 0));
        let tokyo = host.local_time("Asia/Tokyo", epoch_ms);
        assert_eq!(tokyo.hour(), 21);
    }

    #[test]
    fn test_unknown_zone_falls_back_to_utc() {
        let host = SimHost::new(None, &[]);
        let epoch_ms = 1_792_152_000_000;
        assert_eq!(
            host.local_time("Nowhere/Special", epoch_ms),
            host.local_time("UTC", epoch_ms)
        );
    }

    #[test]
    fn test_missing_icons_and_dirty_flag() {
        let mut host = SimHost::new(None, &["fog".to_string()]);
        assert_eq!(host.icon_for("fog"), Err(AssetError::Missing));
        assert!(host.icon_for("clear").is_ok());

        assert!(!host.take_dirty());
        host.invalidate();
        assert!(host.take_dirty());
        assert!(!host.take_dirty());
    }
}
