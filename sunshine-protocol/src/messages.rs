//! Weather update payloads
//!
//! Older companions send the temperatures as decimal strings and name the
//! condition field `art`. Both spellings decode to the same
//! [`WeatherUpdate`].

use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

/// Topic the companion publishes forecasts on
pub const WEATHER_TOPIC: &str = "/weather";

/// Longest condition id accepted from the companion
pub const MAX_CONDITION_LEN: usize = 24;

/// Symbolic weather condition key ("clear", "storm", ...)
pub type ConditionId = heapless::String<MAX_CONDITION_LEN>;

/// Errors that can occur while decoding or encoding an update
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// Not JSON, wrong shape, or a required field is missing
    #[error("malformed payload: {0}")]
    Malformed(serde_json::Error),
    /// A temperature string did not hold a number
    #[error("temperature `{field}` is not a number")]
    NonNumericTemperature { field: &'static str },
    /// A temperature decoded to NaN or infinity
    #[error("temperature `{field}` is not finite")]
    NonFiniteTemperature { field: &'static str },
    /// Condition id does not fit in [`ConditionId`]
    #[error("condition id is {len} bytes, limit is {limit}")]
    ConditionTooLong { len: usize, limit: usize },
}

/// A decoded forecast update
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherUpdate {
    /// Forecast high
    pub high: f64,
    /// Forecast low
    pub low: f64,
    /// Condition key; empty means the companion sent no condition
    pub condition: ConditionId,
}

#[derive(Deserialize)]
struct RawUpdate {
    high: RawTemperature,
    low: RawTemperature,
    #[serde(rename = "conditionId", alias = "art")]
    condition_id: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTemperature {
    Number(f64),
    Text(String),
}

impl RawTemperature {
    fn into_value(self, field: &'static str) -> Result<f64, ParseError> {
        let value = match self {
            RawTemperature::Number(value) => value,
            RawTemperature::Text(text) => text
                .trim()
                .parse::<f64>()
                .map_err(|_| ParseError::NonNumericTemperature { field })?,
        };
        check_finite(value, field)
    }
}

#[derive(Serialize)]
struct WireUpdate<'a> {
    high: f64,
    low: f64,
    #[serde(rename = "conditionId")]
    condition_id: &'a str,
}

fn check_finite(value: f64, field: &'static str) -> Result<f64, ParseError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ParseError::NonFiniteTemperature { field })
    }
}

fn bounded_condition(condition: &str) -> Result<ConditionId, ParseError> {
    let mut id = ConditionId::new();
    id.push_str(condition)
        .map_err(|_| ParseError::ConditionTooLong {
            len: condition.len(),
            limit: MAX_CONDITION_LEN,
        })?;
    Ok(id)
}

impl WeatherUpdate {
    /// Build an update, applying the same checks as [`WeatherUpdate::parse`]
    pub fn new(high: f64, low: f64, condition: &str) -> Result<Self, ParseError> {
        Ok(Self {
            high: check_finite(high, "high")?,
            low: check_finite(low, "low")?,
            condition: bounded_condition(condition.trim())?,
        })
    }

    /// Decode a payload received on [`WEATHER_TOPIC`]
    ///
    /// Either every field decodes or an error is returned; there is no
    /// partially decoded update.
    pub fn parse(payload: &[u8]) -> Result<Self, ParseError> {
        let raw: RawUpdate = serde_json::from_slice(payload).map_err(ParseError::Malformed)?;

        let high = raw.high.into_value("high")?;
        let low = raw.low.into_value("low")?;
        let condition = bounded_condition(raw.condition_id.trim())?;

        Ok(Self {
            high,
            low,
            condition,
        })
    }

    /// Encode this update the way current companions send it
    pub fn encode(&self) -> Result<Vec<u8>, ParseError> {
        let wire = WireUpdate {
            high: self.high,
            low: self.low,
            condition_id: self.condition.as_str(),
        };
        serde_json::to_vec(&wire).map_err(ParseError::Malformed)
    }

    /// Condition key, or `None` when the companion sent an empty one
    pub fn condition_id(&self) -> Option<&str> {
        if self.condition.is_empty() {
            None
        } else {
            Some(self.condition.as_str())
        }
    }
}
