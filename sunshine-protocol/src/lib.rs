//! Sunshine Companion Protocol
//!
//! This crate defines what the paired phone sends to the watch face and
//! how the watch face decodes it. The transport that moves the bytes is
//! not part of this crate; it only sees `(topic, payload)` pairs.
//!
//! # Protocol Overview
//!
//! Weather updates are published on [`WEATHER_TOPIC`] as a JSON object:
//! ```text
//! {"high": 72.0, "low": 58.0, "conditionId": "clear"}
//! ```
//!
//! Updates are best-effort and last-write-wins. A payload that does not
//! decode is dropped by the receiver; nothing is acknowledged or retried.

#![no_std]
#![deny(unsafe_code)]

extern crate alloc;

pub mod events;
pub mod messages;

pub use events::TapKind;
pub use messages::{
    ConditionId, ParseError, WeatherUpdate, MAX_CONDITION_LEN, WEATHER_TOPIC,
};
