//! Current position lookup

use crate::domain::Coords;
use crate::error::{Result, TrackerError};
use crate::infrastructure::Config;

pub const POSITION_ENV: &str = "WTRACK_POSITION";

/// Source of the user's current position
pub trait PositionProvider {
    fn current_position(&self) -> Result<Coords>;
}

/// Position from `WTRACK_POSITION`, falling back to the configured home
#[derive(Debug, Clone, Default)]
pub struct ConfiguredPosition {
    live: Option<String>,
    home: Option<Coords>,
}

impl ConfiguredPosition {
    pub fn new(live: Option<String>, home: Option<Coords>) -> Self {
        ConfiguredPosition { live, home }
    }

    pub fn from_env(config: &Config) -> Self {
        Self::new(std::env::var(POSITION_ENV).ok(), config.home)
    }
}

impl PositionProvider for ConfiguredPosition {
    fn current_position(&self) -> Result<Coords> {
        if let Some(raw) = &self.live {
            return raw
                .parse()
                .map_err(|e| TrackerError::Config(format!("{}: {}", POSITION_ENV, e)));
        }

        self.home.ok_or_else(|| {
            TrackerError::Geolocation("Unable to get your current location".to_string())
        })
    }
}
