//! Error types for wtrack

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for wtrack application
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("Not a wtrack directory: {0}")]
    NotTrackerDirectory(PathBuf),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Workout not found: {0}")]
    WorkoutNotFound(String),

    #[error("Geolocation error: {0}")]
    Geolocation(String),

    #[error("No location selected on the map")]
    NoLocationSelected,

    #[error("Map is not loaded")]
    MapNotLoaded,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl TrackerError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            TrackerError::NotTrackerDirectory(_) => 2,
            TrackerError::InvalidInput(_) | TrackerError::NoLocationSelected => 3,
            TrackerError::WorkoutNotFound(_) => 4,
            TrackerError::Geolocation(_) | TrackerError::MapNotLoaded => 5,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            TrackerError::NotTrackerDirectory(path) => {
                format!(
                    "Not a wtrack directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'wtrack init' in this directory to start tracking\n\
                    • Navigate to an existing wtrack directory\n\
                    • Set WTRACK_ROOT environment variable to your tracker path",
                    path.display()
                )
            }
            TrackerError::InvalidInput(msg) => {
                format!(
                    "{}\n\n\
                    Distance and duration must be positive numbers.\n\
                    Running also needs a positive cadence; cycling needs a numeric elevation.\n\
                    Example: wtrack add running --at 51.5,-0.12 --distance 5 --duration 25 --cadence 180",
                    msg
                )
            }
            TrackerError::NoLocationSelected => {
                "No location selected on the map\n\n\
                Pass the workout location with --at LAT,LNG"
                    .to_string()
            }
            TrackerError::WorkoutNotFound(id) => {
                format!(
                    "No workout with id '{}'\n\n\
                    Suggestions:\n\
                    • Use 'wtrack list' to see recorded workouts and their ids",
                    id
                )
            }
            TrackerError::Geolocation(msg) | TrackerError::Config(msg)
                if msg.contains("location") =>
            {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Set WTRACK_POSITION to your position (e.g., export WTRACK_POSITION=51.5,-0.12)\n\
                    • Configure a home position: wtrack config home 51.5,-0.12",
                    msg
                )
            }
            TrackerError::MapNotLoaded => {
                "Map is not loaded\n\n\
                The map needs your current position; set WTRACK_POSITION or configure 'home'"
                    .to_string()
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using TrackerError
pub type Result<T> = std::result::Result<T, TrackerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_tracker_directory_suggestion() {
        let err = TrackerError::NotTrackerDirectory(PathBuf::from("/tmp/test"));
        let msg = err.display_with_suggestions();
        assert!(msg.contains("wtrack init"));
        assert!(msg.contains("WTRACK_ROOT"));
        assert!(msg.contains("Suggestions"));
    }

    #[test]
    fn test_invalid_input_example() {
        let err = TrackerError::InvalidInput("Inputs have to be positive numbers !".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.starts_with("Inputs have to be positive numbers !"));
        assert!(msg.contains("wtrack add running"));
    }

    #[test]
    fn test_workout_not_found_suggestions() {
        let err = TrackerError::WorkoutNotFound("abc".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("'abc'"));
        assert!(msg.contains("wtrack list"));
    }

    #[test]
    fn test_geolocation_suggestions() {
        let err = TrackerError::Geolocation("Unable to get your current location".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("WTRACK_POSITION"));
        assert!(msg.contains("wtrack config home"));
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(TrackerError::NotTrackerDirectory(PathBuf::new()).exit_code(), 2);
        assert_eq!(TrackerError::InvalidInput(String::new()).exit_code(), 3);
        assert_eq!(TrackerError::WorkoutNotFound(String::new()).exit_code(), 4);
        assert_eq!(TrackerError::Geolocation(String::new()).exit_code(), 5);
        assert_eq!(TrackerError::Config(String::new()).exit_code(), 1);
    }

    #[test]
    fn test_other_errors_fallback() {
        let err = TrackerError::Config("bad zoom".to_string());
        let msg = err.display_with_suggestions();
        assert_eq!(msg, "Configuration error: bad zoom");
    }
}
