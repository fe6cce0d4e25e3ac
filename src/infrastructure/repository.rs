//! File system repository

use crate::error::{Result, TrackerError};
use crate::infrastructure::{Config, FileStorage};
use std::fs;
use std::path::{Path, PathBuf};

pub const ROOT_ENV: &str = "WTRACK_ROOT";
const TRACKER_DIR: &str = ".wtrack";

/// Abstract repository for tracker operations
pub trait TrackerRepository {
    /// Get the root directory of this repository
    fn root(&self) -> &Path;

    /// Load configuration from .wtrack/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .wtrack/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .wtrack directory exists
    fn is_initialized(&self) -> bool;

    /// Create .wtrack directory structure
    fn initialize(&self) -> Result<()>;
}

/// File system implementation of TrackerRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover tracker root by walking up from current directory
    /// First checks WTRACK_ROOT environment variable, then falls back to discovery
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var(ROOT_ENV) {
            let path = PathBuf::from(root_path);
            if Self::has_tracker_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(TrackerError::Config(format!(
                    "WTRACK_ROOT is set to '{}' but no .wtrack directory found. \
                    Run 'wtrack init' in that directory or unset WTRACK_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover tracker root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_tracker_dir(&current) {
                return Ok(FileSystemRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Err(TrackerError::NotTrackerDirectory(start.to_path_buf())),
            }
        }
    }

    /// Storage holding the workout collection
    pub fn storage(&self) -> FileStorage {
        FileStorage::new(self.root.join(TRACKER_DIR).join("storage"))
    }

    fn has_tracker_dir(path: &Path) -> bool {
        path.join(TRACKER_DIR).is_dir()
    }
}

impl TrackerRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_tracker_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let tracker_dir = self.root.join(TRACKER_DIR);

        if tracker_dir.exists() {
            return Err(TrackerError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&tracker_dir)?;
        Ok(())
    }
}
