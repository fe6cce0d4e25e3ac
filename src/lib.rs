//! wtrack - Map-based workout tracker
//!
//! Records running and cycling workouts at map locations, derives pace or
//! speed, and keeps the collection in local storage between sessions.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::TrackerError;
