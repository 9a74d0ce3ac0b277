//! Driver settings
//!
//! Loaded from an optional JSON file next to the level set. Missing fields
//! fall back to the defaults.

use serde::{Deserialize, Serialize};

use crate::consts::SIM_DT;
use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Fixed timestep per tick (seconds)
    pub dt: f32,
    /// Tick cap for a single headless level run
    pub max_ticks: u64,
    /// Seed for the level parser RNG
    pub seed: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dt: SIM_DT,
            // One minute of simulated time at the default timestep
            max_ticks: 60 * 60,
            seed: 0,
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Settings = serde_json::from_str(json)?;
        if !(settings.dt.is_finite() && settings.dt > 0.0) {
            return Err(Error::InvalidTimestep(settings.dt));
        }
        log::info!("Loaded settings: {:?}", settings);
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Read settings from `path`, using defaults if the file doesn't exist
    pub fn load(path: &std::path::Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(json) => Self::from_json(&json),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("Using default settings");
                Ok(Self::default())
            }
            Err(e) => Err(e.into()),
        }
    }
}
