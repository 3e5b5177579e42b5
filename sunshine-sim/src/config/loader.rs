//! Configuration loading
//!
//! Reads the override file named by [`CONFIG_ENV`] when set, otherwise
//! the embedded default. Either way the face configuration is validated
//! before anything is started.

use std::path::PathBuf;

use log::info;
use sunshine_core::config::ConfigError;

use super::scenario::SimConfig;

/// Embedded default configuration (compiled into the binary)
const EMBEDDED_CONFIG: &str = include_str!("../../face.toml");

/// Environment variable naming an override file
pub const CONFIG_ENV: &str = "SUNSHINE_FACE_CONFIG";

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid face configuration: {0}")]
    Invalid(#[from] ConfigError),
    #[error("time tick period must be non-zero")]
    ZeroTimeTick,
}

/// Load the configuration the simulator should run with
pub fn load() -> Result<SimConfig, LoadError> {
    match std::env::var_os(CONFIG_ENV) {
        Some(path) => {
            let path = PathBuf::from(path);
            info!("Loading configuration from {}", path.display());
            let text = std::fs::read_to_string(&path)
                .map_err(|source| LoadError::Io { path, source })?;
            parse_config(&text)
        }
        None => {
            info!("Using embedded configuration");
            parse_config(EMBEDDED_CONFIG)
        }
    }
}

/// Parse and validate a configuration file
pub fn parse_config(text: &str) -> Result<SimConfig, LoadError> {
    let config: SimConfig = toml::from_str(text)?;
    config.face.validate()?;
    if config.simulation.time_tick_secs == 0 {
        return Err(LoadError::ZeroTimeTick);
    }
    Ok(config)
}
