//! Workout entry form: raw field values and their validation

use crate::domain::{Coords, Workout, WorkoutKind};
use crate::error::{Result, TrackerError};

const INVALID_INPUTS: &str = "Inputs have to be positive numbers !";

/// Values typed into the workout form, as entered
#[derive(Debug, Clone)]
pub struct WorkoutForm {
    pub kind: WorkoutKind,
    pub distance: String,
    pub duration: String,
    pub cadence: String,
    pub elevation: String,
}

impl WorkoutForm {
    pub fn new(kind: WorkoutKind) -> Self {
        WorkoutForm {
            kind,
            distance: String::new(),
            duration: String::new(),
            cadence: String::new(),
            elevation: String::new(),
        }
    }

    pub fn distance(mut self, value: impl Into<String>) -> Self {
        self.distance = value.into();
        self
    }

    pub fn duration(mut self, value: impl Into<String>) -> Self {
        self.duration = value.into();
        self
    }

    pub fn cadence(mut self, value: impl Into<String>) -> Self {
        self.cadence = value.into();
        self
    }

    pub fn elevation(mut self, value: impl Into<String>) -> Self {
        self.elevation = value.into();
        self
    }

    /// Validate the fields and build a workout at `coords`.
    ///
    /// Running needs distance, duration and cadence to be finite and positive.
    /// Cycling needs all three numbers finite, but elevation may be zero or negative.
    pub fn submit(&self, coords: Coords) -> Result<Workout> {
        let distance = read_number(&self.distance);
        let duration = read_number(&self.duration);

        match self.kind {
            WorkoutKind::Running => {
                let cadence = read_number(&self.cadence);
                if !all_finite(&[distance, duration, cadence])
                    || !all_positive(&[distance, duration, cadence])
                {
                    return Err(TrackerError::InvalidInput(INVALID_INPUTS.to_string()));
                }
                Ok(Workout::create_running(coords, distance, duration, cadence))
            }
            WorkoutKind::Cycling => {
                let elevation = read_number(&self.elevation);
                if !all_finite(&[distance, duration, elevation])
                    || !all_positive(&[distance, duration])
                {
                    return Err(TrackerError::InvalidInput(INVALID_INPUTS.to_string()));
                }
                Ok(Workout::create_cycling(coords, distance, duration, elevation))
            }
        }
    }
}

/// Numeric reading of a form field: blank is 0, anything unparseable is NaN
fn read_number(raw: &str) -> f64 {
    let raw = raw.trim();
    if raw.is_empty() {
        return 0.0;
    }
    raw.parse().unwrap_or(f64::NAN)
}

fn all_finite(values: &[f64]) -> bool {
    values.iter().all(|v| v.is_finite())
}

fn all_positive(values: &[f64]) -> bool {
    values.iter().all(|v| *v > 0.0)
}
