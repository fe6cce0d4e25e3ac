//! Map display: a view center and the markers placed on it

use crate::domain::{Coords, Workout};

/// A marker with its popup
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub coords: Coords,
    pub popup: String,
    pub class_name: String,
}

impl Marker {
    /// Marker for a workout, e.g. popup "🏃‍♂️ Running on April 14" styled `running-popup`
    pub fn for_workout(workout: &Workout) -> Self {
        let kind = workout.kind();
        Marker {
            coords: workout.coords(),
            popup: format!("{} {}", kind.icon(), workout.description()),
            class_name: format!("{}-popup", kind),
        }
    }
}

/// Operations the application needs from a map widget
pub trait MapView {
    /// Center the view on `center` at `zoom`
    fn set_view(&mut self, center: Coords, zoom: u8);

    /// Place a marker with its popup open
    fn add_marker(&mut self, marker: Marker);

    fn clear_markers(&mut self);
}

/// In-memory map that records its view and markers
#[derive(Debug, Clone, Default)]
pub struct MarkerLayer {
    center: Option<Coords>,
    zoom: u8,
    markers: Vec<Marker>,
}

impl MarkerLayer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn center(&self) -> Option<Coords> {
        self.center
    }

    pub fn zoom(&self) -> u8 {
        self.zoom
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }
}

impl MapView for MarkerLayer {
    fn set_view(&mut self, center: Coords, zoom: u8) {
        self.center = Some(center);
        self.zoom = zoom;
    }

    fn add_marker(&mut self, marker: Marker) {
        self.markers.push(marker);
    }

    fn clear_markers(&mut self) {
        self.markers.clear();
    }
}
