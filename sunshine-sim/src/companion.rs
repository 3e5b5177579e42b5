//! Simulated companion phone
//!
//! Runs on its own OS thread, like a real transport callback, and only
//! ever touches the face through the update channel.

use std::thread;
use std::time::{Duration, Instant};

use log::{debug, error, info, warn};
use sunshine_protocol::{WeatherUpdate, WEATHER_TOPIC};

use crate::channels::UPDATES;
use crate::config::CompanionUpdate;

/// Start sending `updates` on a background thread
pub fn start(updates: &'static [CompanionUpdate]) {
    if updates.is_empty() {
        return;
    }
    let spawned = thread::Builder::new()
        .name("companion".into())
        .spawn(move || run(updates));
    if let Err(e) = spawned {
        error!("Failed to start companion thread: {}", e);
    }
}

fn run(updates: &[CompanionUpdate]) {
    info!("Companion started with {} updates", updates.len());
    let start = Instant::now();

    for update in updates {
        let due = start + Duration::from_millis(update.at_ms);
        if let Some(wait) = due.checked_duration_since(Instant::now()) {
            thread::sleep(wait);
        }

        let Some(payload) = payload_for(update) else {
            continue;
        };
        let topic = update.topic.as_deref().unwrap_or(WEATHER_TOPIC);
        debug!("Companion -> {} ({} bytes)", topic, payload.len());
        if let Err(e) = UPDATES.deliver(topic, &payload) {
            warn!("Companion delivery on {} failed: {}", topic, e);
        }
    }
}

/// Raw text as-is, otherwise the encoded forecast
fn payload_for(update: &CompanionUpdate) -> Option<Vec<u8>> {
    if let Some(raw) = &update.raw {
        return Some(raw.clone().into_bytes());
    }
    let (Some(high), Some(low)) = (update.high, update.low) else {
        warn!("Companion update at {} ms has no forecast", update.at_ms);
        return None;
    };
    match WeatherUpdate::new(high, low, &update.condition).and_then(|u| u.encode()) {
        Ok(payload) => Some(payload),
        Err(e) => {
            warn!("Cannot encode forecast at {} ms: {}", update.at_ms, e);
            None
        }
    }
}
