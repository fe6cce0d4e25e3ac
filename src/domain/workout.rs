//! Workout records and their derived metrics

use crate::domain::Coords;
use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Kind of activity a workout records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutKind {
    Running,
    Cycling,
}

impl WorkoutKind {
    /// Capitalized name used in descriptions
    pub fn label(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "Running",
            WorkoutKind::Cycling => "Cycling",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "🏃‍♂️",
            WorkoutKind::Cycling => "🚴‍♂️",
        }
    }
}

impl fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            WorkoutKind::Running => "running",
            WorkoutKind::Cycling => "cycling",
        })
    }
}

impl FromStr for WorkoutKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "running" => Ok(WorkoutKind::Running),
            "cycling" => Ok(WorkoutKind::Cycling),
            _ => Err(format!(
                "Invalid workout type: '{}'. Valid types are: running, cycling",
                s
            )),
        }
    }
}

/// Fields shared by every workout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutBase {
    pub id: String,
    pub date: DateTime<Utc>,
    pub coords: Coords,
    /// Kilometers
    pub distance: f64,
    /// Minutes
    pub duration: f64,
    pub description: String,
}

impl WorkoutBase {
    fn new(
        kind: WorkoutKind,
        coords: Coords,
        distance: f64,
        duration: f64,
        date: DateTime<Utc>,
    ) -> Self {
        WorkoutBase {
            id: Uuid::new_v4().to_string(),
            date,
            coords,
            distance,
            duration,
            description: describe(kind, date),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Running {
    #[serde(flatten)]
    pub base: WorkoutBase,
    /// Steps per minute
    pub cadence: f64,
    /// Minutes per kilometer
    #[serde(deserialize_with = "lossy_f64")]
    pub pace: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cycling {
    #[serde(flatten)]
    pub base: WorkoutBase,
    /// Meters
    pub elevation_gain: f64,
    /// Kilometers per hour
    #[serde(deserialize_with = "lossy_f64")]
    pub speed: f64,
}

/// A recorded workout.
///
/// Derived fields (`pace`, `speed`, `description`) are computed once at
/// construction and stored as plain fields, so records read back from
/// storage keep whatever values were persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Workout {
    Running(Running),
    Cycling(Cycling),
}

/// The derived performance metric of a workout
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Metric {
    Pace(f64),
    Speed(f64),
}

impl Metric {
    pub fn value(&self) -> f64 {
        match self {
            Metric::Pace(v) | Metric::Speed(v) => *v,
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            Metric::Pace(_) => "min/km",
            Metric::Speed(_) => "km/h",
        }
    }
}

impl Workout {
    /// Create a running workout dated now. No validation is performed.
    pub fn create_running(coords: Coords, distance: f64, duration: f64, cadence: f64) -> Self {
        Self::running_at(coords, distance, duration, cadence, Utc::now())
    }

    /// Create a cycling workout dated now. No validation is performed.
    pub fn create_cycling(
        coords: Coords,
        distance: f64,
        duration: f64,
        elevation_gain: f64,
    ) -> Self {
        Self::cycling_at(coords, distance, duration, elevation_gain, Utc::now())
    }

    pub fn running_at(
        coords: Coords,
        distance: f64,
        duration: f64,
        cadence: f64,
        date: DateTime<Utc>,
    ) -> Self {
        let base = WorkoutBase::new(WorkoutKind::Running, coords, distance, duration, date);
        Workout::Running(Running {
            base,
            cadence,
            pace: duration / distance,
        })
    }

    pub fn cycling_at(
        coords: Coords,
        distance: f64,
        duration: f64,
        elevation_gain: f64,
        date: DateTime<Utc>,
    ) -> Self {
        let base = WorkoutBase::new(WorkoutKind::Cycling, coords, distance, duration, date);
        Workout::Cycling(Cycling {
            base,
            elevation_gain,
            speed: distance / (duration / 60.0),
        })
    }

    pub fn base(&self) -> &WorkoutBase {
        match self {
            Workout::Running(r) => &r.base,
            Workout::Cycling(c) => &c.base,
        }
    }

    pub fn kind(&self) -> WorkoutKind {
        match self {
            Workout::Running(_) => WorkoutKind::Running,
            Workout::Cycling(_) => WorkoutKind::Cycling,
        }
    }

    pub fn id(&self) -> &str {
        &self.base().id
    }

    pub fn date(&self) -> DateTime<Utc> {
        self.base().date
    }

    pub fn coords(&self) -> Coords {
        self.base().coords
    }

    pub fn distance(&self) -> f64 {
        self.base().distance
    }

    pub fn duration(&self) -> f64 {
        self.base().duration
    }

    pub fn description(&self) -> &str {
        &self.base().description
    }

    pub fn metric(&self) -> Metric {
        match self {
            Workout::Running(r) => Metric::Pace(r.pace),
            Workout::Cycling(c) => Metric::Speed(c.speed),
        }
    }
}

/// JSON has no representation for infinity or NaN and writes them as `null`;
/// such values read back as NaN
fn lossy_f64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
}

/// "Running on April 14", using the local calendar day of `date`
fn describe(kind: WorkoutKind, date: DateTime<Utc>) -> String {
    let local = date.with_timezone(&Local);
    format!("{} on {}", kind.label(), local.format("%B %-d"))
}
