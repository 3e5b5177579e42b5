//! Configuration type definitions
//!
//! Colours are 32-bit ARGB, sizes and offsets are surface pixels. Element
//! offsets are relative to the time string's origin.

use heapless::String;
use sunshine_display::Color;

use crate::scheduler::INTERACTIVE_UPDATE_RATE_MS;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maximum temperature suffix length in bytes
pub const MAX_SUFFIX_LEN: usize = 8;

/// Maximum decimal places shown for temperatures
pub const MAX_TEMPERATURE_DECIMALS: u8 = 3;

/// Configuration validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    #[error("interactive update period must be non-zero")]
    ZeroUpdatePeriod,
    #[error("text size `{field}` must be positive")]
    NonPositiveTextSize { field: &'static str },
    #[error("icon box must have a positive size")]
    EmptyIconBox,
    #[error("{decimals} temperature decimals requested, at most {limit} supported")]
    TooManyDecimals { decimals: u8, limit: u8 },
    #[error("temperature suffix of {len} bytes exceeds {limit}")]
    SuffixTooLong { len: usize, limit: usize },
}

/// Face colours
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Palette {
    /// Interactive background after an even number of taps
    pub background: u32,
    /// Interactive background after an odd number of taps
    pub background_alt: u32,
    pub ambient_background: u32,
    pub time_text: u32,
    pub date_text: u32,
    pub date_text_ambient: u32,
    pub high_text: u32,
    pub high_text_ambient: u32,
    pub low_text: u32,
    pub low_text_ambient: u32,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: 0xFF03_A9F4,
            background_alt: 0xFF02_88D1,
            ambient_background: 0xFF00_0000,
            time_text: 0xFFFF_FFFF,
            date_text: 0xFFB3_E5FC,
            date_text_ambient: 0xFFAA_AAAA,
            high_text: 0xFFFF_FFFF,
            high_text_ambient: 0xFFCC_CCCC,
            low_text: 0xFFB3_E5FC,
            low_text_ambient: 0xFF99_9999,
        }
    }
}

impl Palette {
    /// Background for the given power mode and tap parity
    pub fn background_for(&self, ambient: bool, alternate: bool) -> Color {
        match (ambient, alternate) {
            (true, _) => Color(self.ambient_background),
            (false, false) => Color(self.background),
            (false, true) => Color(self.background_alt),
        }
    }
}

/// Position relative to another element
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Offset {
    pub x: f32,
    pub y: f32,
}

impl Offset {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Element placement and text sizes
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Layout {
    /// Baseline of the time string
    pub y_offset: f32,
    /// Left edge of the time string on square screens
    pub x_offset: f32,
    /// Left edge of the time string on round screens
    pub x_offset_round: f32,
    pub time_text_size: f32,
    pub time_text_size_round: f32,
    pub date_text_size: f32,
    pub temperature_text_size: f32,
    pub date: Offset,
    pub high: Offset,
    pub low: Offset,
    /// Top-left corner of the icon box
    pub icon: Offset,
    pub icon_width: f32,
    pub icon_height: f32,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            y_offset: 80.0,
            x_offset: 15.0,
            x_offset_round: 35.0,
            time_text_size: 40.0,
            time_text_size_round: 45.0,
            date_text_size: 25.0,
            temperature_text_size: 35.0,
            date: Offset::new(0.0, 40.0),
            high: Offset::new(0.0, 90.0),
            low: Offset::new(80.0, 90.0),
            icon: Offset::new(160.0, 45.0),
            icon_width: 70.0,
            icon_height: 55.0,
        }
    }
}

impl Layout {
    /// Time string left edge for the window shape
    pub fn x_offset_for(&self, is_round: bool) -> f32 {
        if is_round {
            self.x_offset_round
        } else {
            self.x_offset
        }
    }

    /// Time text size for the window shape
    pub fn time_text_size_for(&self, is_round: bool) -> f32 {
        if is_round {
            self.time_text_size_round
        } else {
            self.time_text_size
        }
    }
}

/// How high/low temperatures are printed
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TemperatureFormat {
    /// Digits after the decimal point
    pub decimals: u8,
    /// Appended after the number
    pub suffix: String<MAX_SUFFIX_LEN>,
}

impl Default for TemperatureFormat {
    fn default() -> Self {
        let mut suffix = String::new();
        let _ = suffix.push('°');
        Self {
            decimals: 0,
            suffix,
        }
    }
}

impl TemperatureFormat {
    /// Create a format, checking the suffix fits
    pub fn new(decimals: u8, suffix: &str) -> Result<Self, ConfigError> {
        let suffix = String::try_from(suffix).map_err(|_| ConfigError::SuffixTooLong {
            len: suffix.len(),
            limit: MAX_SUFFIX_LEN,
        })?;
        let format = Self { decimals, suffix };
        format.validate()?;
        Ok(format)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.decimals > MAX_TEMPERATURE_DECIMALS {
            return Err(ConfigError::TooManyDecimals {
                decimals: self.decimals,
                limit: MAX_TEMPERATURE_DECIMALS,
            });
        }
        Ok(())
    }
}

/// Complete face configuration
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FaceConfig {
    pub palette: Palette,
    pub layout: Layout,
    pub temperature: TemperatureFormat,
    /// Interactive redraw period
    pub interactive_update_ms: u64,
}

impl Default for FaceConfig {
    fn default() -> Self {
        Self {
            palette: Palette::default(),
            layout: Layout::default(),
            temperature: TemperatureFormat::default(),
            interactive_update_ms: INTERACTIVE_UPDATE_RATE_MS,
        }
    }
}

impl FaceConfig {
    /// Check the configuration is usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.interactive_update_ms == 0 {
            return Err(ConfigError::ZeroUpdatePeriod);
        }

        let sizes = [
            ("time_text_size", self.layout.time_text_size),
            ("time_text_size_round", self.layout.time_text_size_round),
            ("date_text_size", self.layout.date_text_size),
            ("temperature_text_size", self.layout.temperature_text_size),
        ];
        for (field, size) in sizes {
            if size.is_nan() || size <= 0.0 {
                return Err(ConfigError::NonPositiveTextSize { field });
            }
        }

        let (width, height) = (self.layout.icon_width, self.layout.icon_height);
        if width.is_nan() || height.is_nan() || width <= 0.0 || height <= 0.0 {
            return Err(ConfigError::EmptyIconBox);
        }

        self.temperature.validate()
    }
}
