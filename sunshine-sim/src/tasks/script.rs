//! Scripted host callbacks
//!
//! Replays the session's steps at their offsets, then destroys the face
//! when the session runs out.

use embassy_time::{Duration, Instant, Timer};
use log::{info, warn};

use sunshine_core::state::LifecycleEvent;

use crate::channels::{HostEvent, HOST_EVENTS};
use crate::config::{HostCall, ScriptedStep};

/// Script task - sends each step when it comes due
#[embassy_executor::task]
pub async fn script_task(steps: &'static [ScriptedStep], run_for_secs: u64) {
    info!("Script task started with {} steps", steps.len());

    let start = Instant::now();

    for step in steps {
        // Past offsets (out-of-order steps) fire immediately
        Timer::at(start + Duration::from_millis(step.at_ms)).await;
        match step.event.to_host_call() {
            Some(call) => HOST_EVENTS.send(HostEvent::Call(call)).await,
            None => warn!("Step at {} ms skipped: {:?}", step.at_ms, step.event),
        }
    }

    Timer::at(start + Duration::from_secs(run_for_secs)).await;
    info!("Session over after {} s", run_for_secs);
    HOST_EVENTS
        .send(HostEvent::Call(HostCall::Lifecycle(LifecycleEvent::Destroyed)))
        .await;
}
