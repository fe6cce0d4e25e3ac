//! Initialize tracker use case

use crate::domain::Coords;
use crate::error::Result;
use crate::infrastructure::config::validate_zoom_level;
use crate::infrastructure::{Config, FileSystemRepository, TrackerRepository};
use std::fs;
use std::path::Path;
use tracing::info;

pub struct InitService;

impl InitService {
    /// Create `.wtrack/` with a fresh config at `path`, creating `path` if needed
    pub fn execute(path: &Path, zoom_level: u8, home: Option<Coords>) -> Result<Config> {
        validate_zoom_level(zoom_level)?;

        if !path.exists() {
            fs::create_dir_all(path)?;
        }

        let repo = FileSystemRepository::new(path.to_path_buf());
        repo.initialize()?;

        let config = Config {
            zoom_level,
            home,
            ..Config::new()
        };
        repo.save_config(&config)?;

        info!(path = %path.display(), "tracker initialized");
        Ok(config)
    }
}
