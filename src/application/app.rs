//! Application controller: workouts, the map and the entry form

use crate::domain::{Coords, Workout, WorkoutForm};
use crate::error::{Result, TrackerError};
use crate::infrastructure::{
    KeyValueStorage, MapView, Marker, PositionProvider, WorkoutStore,
};
use tracing::{debug, info};

/// Holds the workout collection and its map projection.
///
/// Workouts are available as soon as the app is created; the map only
/// exists after `load_map` succeeds, at which point markers are drawn for
/// every workout already in the collection.
pub struct App<S: KeyValueStorage, M: MapView> {
    store: WorkoutStore<S>,
    map: Option<M>,
    pending: Option<Coords>,
    zoom_level: u8,
}

impl<S: KeyValueStorage, M: MapView> App<S, M> {
    /// Create the app, restoring any stored workouts
    pub fn new(storage: S, zoom_level: u8) -> Result<Self> {
        let store = WorkoutStore::open(storage)?;
        debug!(count = store.len(), "app started");
        Ok(App {
            store,
            map: None,
            pending: None,
            zoom_level,
        })
    }

    /// Center `map` on the current position and draw the stored workouts.
    ///
    /// When no position is available the map stays unloaded.
    pub fn load_map<P: PositionProvider>(&mut self, position: &P, mut map: M) -> Result<()> {
        let center = position.current_position()?;
        map.set_view(center, self.zoom_level);
        for workout in self.store.workouts() {
            map.add_marker(Marker::for_workout(workout));
        }
        debug!(%center, markers = self.store.len(), "map loaded");
        self.map = Some(map);
        Ok(())
    }

    pub fn map(&self) -> Option<&M> {
        self.map.as_ref()
    }

    /// Remember the clicked map location for the next submitted form
    pub fn show_form(&mut self, coords: Coords) {
        self.pending = Some(coords);
    }

    pub fn pending_location(&self) -> Option<Coords> {
        self.pending
    }

    /// Validate the form and record a workout at the clicked location.
    ///
    /// Invalid input leaves the collection and the pending location untouched.
    pub fn new_workout(&mut self, form: &WorkoutForm) -> Result<&Workout> {
        let coords = self.pending.ok_or(TrackerError::NoLocationSelected)?;
        let workout = form.submit(coords)?;
        let marker = Marker::for_workout(&workout);

        self.store.add(workout)?;

        if let Some(map) = self.map.as_mut() {
            map.add_marker(marker);
        }
        self.pending = None;

        let index = self.store.len() - 1;
        let workout = &self.store.workouts()[index];
        info!(id = workout.id(), kind = %workout.kind(), "workout created");
        Ok(workout)
    }

    /// Re-center the map on the workout with `id`
    pub fn move_to_popup(&mut self, id: &str) -> Result<&Workout> {
        let workout = self
            .store
            .find(id)
            .ok_or_else(|| TrackerError::WorkoutNotFound(id.to_string()))?;
        let map = self.map.as_mut().ok_or(TrackerError::MapNotLoaded)?;
        map.set_view(workout.coords(), self.zoom_level);
        Ok(workout)
    }

    /// Delete the workout with `id` and redraw the markers.
    /// Returns the first removed record when the id was stored more than once.
    pub fn remove_workout(&mut self, id: &str) -> Result<Workout> {
        let removed = self
            .store
            .remove(id)?
            .into_iter()
            .next()
            .ok_or_else(|| TrackerError::WorkoutNotFound(id.to_string()))?;
        info!(id, "workout removed");
        self.render_markers();
        Ok(removed)
    }

    /// Delete every workout from storage and the map
    pub fn reset(&mut self) -> Result<()> {
        self.store.reset()?;
        info!("workouts reset");
        self.render_markers();
        Ok(())
    }

    pub fn workouts(&self) -> &[Workout] {
        self.store.workouts()
    }

    pub fn zoom_level(&self) -> u8 {
        self.zoom_level
    }

    pub fn into_storage(self) -> S {
        self.store.into_storage()
    }

    fn render_markers(&mut self) {
        if let Some(map) = self.map.as_mut() {
            map.clear_markers();
            for workout in self.store.workouts() {
                map.add_marker(Marker::for_workout(workout));
            }
        }
    }
}
