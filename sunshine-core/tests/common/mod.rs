//! Recording host shared by the engine tests

#![allow(dead_code)]

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use jiff::civil::{date, DateTime};
use sunshine_core::inbound::UpdateChannel;
use sunshine_core::scheduler::TimerToken;
use sunshine_core::state::ZoneId;
use sunshine_core::traits::{AssetError, Clock, FaceHost, IconAssets, IconTable, TimerHost};
use sunshine_core::WatchFaceEngine;
use sunshine_display::IconHandle;

pub type TestChannel = UpdateChannel<CriticalSectionRawMutex, 4>;
pub type TestEngine<'ch> = WatchFaceEngine<'ch, MockHost, CriticalSectionRawMutex, 4>;

/// Host that records every call the engine makes
#[derive(Debug)]
pub struct MockHost {
    pub now_ms: u64,
    pub local: DateTime,
    pub zone: ZoneId,
    pub icons: IconTable,
    pub invalidations: usize,
    pub scheduled: Vec<(TimerToken, u64)>,
    pub cancelled: Vec<TimerToken>,
    pub registrations: usize,
    pub unregistrations: usize,
}

impl Default for MockHost {
    fn default() -> Self {
        Self {
            now_ms: 1_700_000_000_250,
            local: date(2026, 10, 16).at(9, 5, 3, 0),
            zone: ZoneId::try_from("Europe/Oslo").unwrap(),
            icons: IconTable::complete(),
            invalidations: 0,
            scheduled: Vec::new(),
            cancelled: Vec::new(),
            registrations: 0,
            unregistrations: 0,
        }
    }
}

impl MockHost {
    pub fn observer_registered(&self) -> bool {
        self.registrations > self.unregistrations
    }
}

impl Clock for MockHost {
    fn now_ms(&self) -> u64 {
        self.now_ms
    }

    fn system_zone(&self) -> ZoneId {
        self.zone.clone()
    }

    fn local_time(&self, _zone: &str, _epoch_ms: u64) -> DateTime {
        self.local
    }
}

impl TimerHost for MockHost {
    fn schedule(&mut self, token: TimerToken, delay_ms: u64) {
        self.scheduled.push((token, delay_ms));
    }

    fn cancel(&mut self, token: TimerToken) {
        self.cancelled.push(token);
    }
}

impl IconAssets for MockHost {
    fn icon_for(&self, condition_id: &str) -> Result<IconHandle, AssetError> {
        self.icons.icon_for(condition_id)
    }
}

impl FaceHost for MockHost {
    fn invalidate(&mut self) {
        self.invalidations += 1;
    }

    fn register_time_zone_observer(&mut self) {
        self.registrations += 1;
    }

    fn unregister_time_zone_observer(&mut self) {
        self.unregistrations += 1;
    }
}

/// Engine over a default host and config, already created
pub fn created_engine(channel: &TestChannel) -> TestEngine<'_> {
    let mut engine = WatchFaceEngine::new(
        MockHost::default(),
        channel,
        &sunshine_core::config::FaceConfig::default(),
    );
    engine.on_create();
    engine
}
