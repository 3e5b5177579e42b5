//! Sunshine watch face simulator
//!
//! Runs the face engine on the host under the Embassy std executor:
//! - Scripted host callbacks (create, visibility, ambient, taps, zones)
//! - A wake-up timer task backing the interactive redraw timer
//! - A periodic time tick standing in for the platform's minute tick
//! - A companion thread delivering forecasts through the update channel
//!
//! Frames are printed to the log one line each. Set `RUST_LOG` to change
//! verbosity and `SUNSHINE_FACE_CONFIG` to run another session file.

mod channels;
mod companion;
mod config;
mod host;
mod surface;
mod tasks;

use embassy_executor::Spawner;
use env_logger::{Builder, Env};
use log::{error, info};
use static_cell::StaticCell;

use crate::config::SimConfig;

static CONFIG: StaticCell<SimConfig> = StaticCell::new();

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    Builder::from_env(Env::default().default_filter_or("info")).init();
    info!("Sunshine simulator starting...");

    let config = match config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Configuration rejected: {}", e);
            std::process::exit(1);
        }
    };
    let config: &'static SimConfig = CONFIG.init(config);
    let sim = &config.simulation;
    info!(
        "Session: {} s, {}x{}, {} steps, {} companion updates",
        sim.run_for_secs,
        sim.width,
        sim.height,
        sim.steps.len(),
        sim.updates.len()
    );

    companion::start(&sim.updates);

    spawner.spawn(tasks::timer_task()).unwrap();
    spawner.spawn(tasks::tick_task(sim.time_tick_secs)).unwrap();
    spawner.spawn(tasks::engine_task(config)).unwrap();
    spawner
        .spawn(tasks::script_task(&sim.steps, sim.run_for_secs))
        .unwrap();

    info!("All tasks spawned, simulator running");
}
