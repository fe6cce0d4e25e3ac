//! Config management use case

use crate::domain::Coords;
use crate::error::{Result, TrackerError};
use crate::infrastructure::config::validate_zoom_level;
use crate::infrastructure::{Config, FileSystemRepository, TrackerRepository};

/// Service for managing tracker configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "zoom_level" => Ok(config.zoom_level.to_string()),
            "home" => Ok(format_home(config.home)),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(TrackerError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: zoom_level, home, created",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "zoom_level" => {
                let zoom: u8 = value.parse().map_err(|_| {
                    TrackerError::Config(format!("Invalid zoom level: {}", value))
                })?;
                config.zoom_level = validate_zoom_level(zoom)?;
            }
            "home" => {
                config.home = if value.eq_ignore_ascii_case("none") {
                    None
                } else {
                    Some(value.parse::<Coords>().map_err(TrackerError::Config)?)
                };
            }
            "created" => {
                return Err(TrackerError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(TrackerError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: zoom_level, home",
                    key
                )));
            }
        }

        self.repository.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}

/// "lat,lng" or "none"
pub fn format_home(home: Option<Coords>) -> String {
    match home {
        Some(c) => format!("{},{}", c.lat, c.lng),
        None => "none".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn service(temp: &TempDir) -> ConfigService {
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        repo.initialize().unwrap();
        repo.save_config(&Config::new()).unwrap();
        ConfigService::new(repo)
    }

    #[test]
    fn test_get_defaults() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);

        assert_eq!(service.get("zoom_level").unwrap(), "13");
        assert_eq!(service.get("home").unwrap(), "none");
        assert!(service.get("created").is_ok());
        assert!(service.get("colour").is_err());
    }

    #[test]
    fn test_set_zoom_level() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);

        service.set("zoom_level", "16").unwrap();
        assert_eq!(service.get("zoom_level").unwrap(), "16");

        assert!(service.set("zoom_level", "25").is_err());
        assert!(service.set("zoom_level", "far").is_err());
        assert_eq!(service.get("zoom_level").unwrap(), "16");
    }

    #[test]
    fn test_set_and_clear_home() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);

        service.set("home", "51.5,-0.12").unwrap();
        assert_eq!(service.get("home").unwrap(), "51.5,-0.12");

        service.set("home", "none").unwrap();
        assert_eq!(service.get("home").unwrap(), "none");
    }

    #[test]
    fn test_created_is_read_only() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);

        let err = service.set("created", "2025-01-01T00:00:00Z").unwrap_err();
        assert!(err.to_string().contains("read-only"));
    }
}
