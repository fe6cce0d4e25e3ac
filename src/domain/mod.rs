//! Domain layer - Workout records and their derived metrics

pub mod coords;
pub mod form;
pub mod workout;

pub use coords::Coords;
pub use form::WorkoutForm;
pub use workout::{Cycling, Metric, Running, Workout, WorkoutBase, WorkoutKind};
