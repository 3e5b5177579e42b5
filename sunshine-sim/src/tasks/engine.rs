//! Watch face engine task
//!
//! The one serialized context: every host callback, timer fire and
//! companion message is applied here, and frames are drawn here.

use embassy_futures::select::{select, Either};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_time::Instant;
use log::{info, trace, warn};

use sunshine_core::WatchFaceEngine;
use sunshine_display::Bounds;

use crate::channels::{HostEvent, HOST_EVENTS, UPDATES, UPDATE_QUEUE_SIZE};
use crate::config::{HostCall, SimConfig};
use crate::host::SimHost;
use crate::surface::TerminalSurface;

type Engine = WatchFaceEngine<'static, SimHost, CriticalSectionRawMutex, UPDATE_QUEUE_SIZE>;

/// Engine task - owns the face and the draw surface
#[embassy_executor::task]
pub async fn engine_task(config: &'static SimConfig) {
    info!("Engine task started");

    let sim = &config.simulation;
    let host = SimHost::new(sim.time_zone.as_deref(), &sim.missing_icons);
    let mut engine: Engine = WatchFaceEngine::new(host, &UPDATES, &config.face);
    let mut surface = TerminalSurface::new();
    let bounds = Bounds::new(sim.width, sim.height);

    loop {
        match select(HOST_EVENTS.receive(), UPDATES.receive()).await {
            Either::First(HostEvent::Call(call)) => apply_call(&mut engine, call),
            Either::First(HostEvent::TimerFired(token)) => {
                let outcome = engine.on_timer_fired(token);
                trace!("Timer {} -> {:?}", token.0, outcome);
            }
            Either::Second(message) => {
                engine.on_message(&message.topic, &message.payload);
            }
        }

        // Anything else the companion queued meanwhile
        engine.pump_inbound();

        if engine.host_mut().take_dirty() {
            surface.begin_frame();
            match engine.draw(&mut surface, bounds) {
                Ok(report) => surface.present(&report),
                Err(e) => warn!("Frame not drawn: {}", e),
            }
        }

        if engine.phase().is_terminal() {
            info!("Face destroyed after {} frames, exiting", surface.frames());
            std::process::exit(0);
        }
    }
}

fn apply_call(engine: &mut Engine, call: HostCall) {
    match call {
        HostCall::Lifecycle(event) => engine.handle_event(event),
        HostCall::Tap { code, x, y } => {
            engine.on_tap_command(code, x, y, Instant::now().as_millis())
        }
    }
}
