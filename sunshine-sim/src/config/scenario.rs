//! Simulated session description

use serde::Deserialize;
use sunshine_core::config::FaceConfig;
use sunshine_core::state::{DisplayProperties, LifecycleEvent, WindowInsets, ZoneId};

/// Whole simulator file
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub face: FaceConfig,
    pub simulation: Simulation,
}

/// Session parameters
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Simulation {
    /// Session length; the face is destroyed when it runs out
    pub run_for_secs: u64,
    /// Period of the host tick that keeps ambient mode current
    pub time_tick_secs: u64,
    pub width: u32,
    pub height: u32,
    /// Device time zone; the system zone when absent
    pub time_zone: Option<String>,
    /// Condition ids whose bitmaps are treated as missing
    pub missing_icons: Vec<String>,
    pub steps: Vec<ScriptedStep>,
    pub updates: Vec<CompanionUpdate>,
}

impl Default for Simulation {
    fn default() -> Self {
        Self {
            run_for_secs: 10,
            time_tick_secs: 60,
            width: 320,
            height: 320,
            time_zone: None,
            missing_icons: Vec::new(),
            steps: Vec::new(),
            updates: Vec::new(),
        }
    }
}

/// A host callback at a point in the session
#[derive(Debug, Clone, Deserialize)]
pub struct ScriptedStep {
    /// Offset from session start
    pub at_ms: u64,
    #[serde(flatten)]
    pub event: ScriptedEvent,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ScriptedEvent {
    Created,
    Visibility { visible: bool },
    Properties {
        #[serde(default)]
        low_bit_ambient: bool,
        #[serde(default)]
        burn_in_protection: bool,
    },
    Ambient { ambient: bool },
    TimeZone { zone: String },
    Insets { round: bool },
    /// Tap with its raw wire code
    Tap {
        kind: u8,
        #[serde(default)]
        x: i32,
        #[serde(default)]
        y: i32,
    },
    Destroyed,
}

/// What the engine task is handed for one scripted step
#[derive(Debug, Clone, PartialEq)]
pub enum HostCall {
    Lifecycle(LifecycleEvent),
    Tap { code: u8, x: i32, y: i32 },
}

impl ScriptedEvent {
    /// Convert to a host call; `None` for a zone id that does not fit
    pub fn to_host_call(&self) -> Option<HostCall> {
        let event = match self {
            ScriptedEvent::Created => LifecycleEvent::Created,
            ScriptedEvent::Visibility { visible } => LifecycleEvent::VisibilityChanged(*visible),
            ScriptedEvent::Properties {
                low_bit_ambient,
                burn_in_protection,
            } => LifecycleEvent::PropertiesChanged(DisplayProperties {
                low_bit_ambient: *low_bit_ambient,
                burn_in_protection: *burn_in_protection,
            }),
            ScriptedEvent::Ambient { ambient } => LifecycleEvent::AmbientModeChanged(*ambient),
            ScriptedEvent::TimeZone { zone } => {
                LifecycleEvent::TimeZoneChanged(ZoneId::try_from(zone.as_str()).ok()?)
            }
            ScriptedEvent::Insets { round } => {
                LifecycleEvent::WindowInsets(WindowInsets { is_round: *round })
            }
            ScriptedEvent::Tap { kind, x, y } => {
                return Some(HostCall::Tap {
                    code: *kind,
                    x: *x,
                    y: *y,
                })
            }
            ScriptedEvent::Destroyed => LifecycleEvent::Destroyed,
        };
        Some(HostCall::Lifecycle(event))
    }
}

/// A message sent by the simulated companion
///
/// Either a forecast that is encoded the normal way, or a raw payload
/// sent as-is (for exercising malformed or legacy input).
#[derive(Debug, Clone, Deserialize)]
pub struct CompanionUpdate {
    pub at_ms: u64,
    /// Defaults to the weather topic
    pub topic: Option<String>,
    pub high: Option<f64>,
    pub low: Option<f64>,
    #[serde(default)]
    pub condition: String,
    pub raw: Option<String>,
}
