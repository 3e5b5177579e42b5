//! Time tick task
//!
//! Stands in for the platform's once-a-minute tick, which is the only
//! thing that redraws the face in ambient mode.

use embassy_time::{Duration, Ticker};
use log::info;

use sunshine_core::state::LifecycleEvent;

use crate::channels::{HostEvent, HOST_EVENTS};
use crate::config::HostCall;

/// Tick task - sends a time tick every `period_secs`
#[embassy_executor::task]
pub async fn tick_task(period_secs: u64) {
    info!("Tick task started ({} s)", period_secs);

    let mut ticker = Ticker::every(Duration::from_secs(period_secs));

    loop {
        ticker.next().await;
        HOST_EVENTS
            .send(HostEvent::Call(HostCall::Lifecycle(LifecycleEvent::TimeTick)))
            .await;
    }
}
