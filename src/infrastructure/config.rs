//! Configuration management

use crate::domain::Coords;
use crate::error::{Result, TrackerError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_ZOOM_LEVEL: u8 = 13;
pub const MAX_ZOOM_LEVEL: u8 = 19;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_zoom_level")]
    pub zoom_level: u8,
    /// Position used when no live position is available
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home: Option<Coords>,
    pub created: DateTime<Utc>,
}

fn default_zoom_level() -> u8 {
    DEFAULT_ZOOM_LEVEL
}

impl Default for Config {
    fn default() -> Self {
        Config {
            zoom_level: DEFAULT_ZOOM_LEVEL,
            home: None,
            created: Utc::now(),
        }
    }
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from .wtrack/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(".wtrack").join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                TrackerError::NotTrackerDirectory(path.to_path_buf())
            } else {
                TrackerError::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&contents)
            .map_err(|e| TrackerError::Config(format!("Failed to parse config.toml: {}", e)))?;
        validate_zoom_level(config.zoom_level)?;
        Ok(config)
    }

    /// Save config to .wtrack/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let tracker_dir = path.join(".wtrack");
        let config_path = tracker_dir.join("config.toml");

        if !tracker_dir.exists() {
            fs::create_dir(&tracker_dir)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(&config_path, contents)?;

        Ok(())
    }
}

/// Zoom levels follow the usual web map tile range
pub fn validate_zoom_level(zoom: u8) -> Result<u8> {
    if (1..=MAX_ZOOM_LEVEL).contains(&zoom) {
        Ok(zoom)
    } else {
        Err(TrackerError::Config(format!(
            "Invalid zoom level: {}. Must be between 1 and {}",
            zoom, MAX_ZOOM_LEVEL
        )))
    }
}
