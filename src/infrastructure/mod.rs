//! Infrastructure layer - Storage, configuration and external collaborators

pub mod config;
pub mod geolocation;
pub mod map;
pub mod repository;
pub mod storage;
pub mod store;

pub use config::Config;
pub use geolocation::{ConfiguredPosition, PositionProvider};
pub use map::{MapView, Marker, MarkerLayer};
pub use repository::{FileSystemRepository, TrackerRepository};
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage};
pub use store::{WorkoutStore, WORKOUTS_KEY};
