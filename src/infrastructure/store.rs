//! Ordered workout collection kept in sync with storage

use crate::domain::Workout;
use crate::error::Result;
use crate::infrastructure::KeyValueStorage;
use serde_json::Value;
use tracing::{debug, warn};

/// Storage key holding the serialized collection
pub const WORKOUTS_KEY: &str = "workouts";

/// In-memory workouts in insertion order, mirrored to a single storage key.
///
/// Every mutation rewrites the whole collection; storage is never patched.
#[derive(Debug)]
pub struct WorkoutStore<S: KeyValueStorage> {
    storage: S,
    workouts: Vec<Workout>,
}

impl<S: KeyValueStorage> WorkoutStore<S> {
    /// Create a store over `storage` and load whatever it holds
    pub fn open(storage: S) -> Result<Self> {
        let mut store = WorkoutStore {
            storage,
            workouts: Vec::new(),
        };
        store.restore()?;
        Ok(store)
    }

    /// Replace the in-memory collection with the stored one.
    ///
    /// An absent or unparseable value leaves the collection empty; a record
    /// that cannot be read is skipped and the others are kept.
    /// Records are taken as stored; derived fields are not recomputed.
    pub fn restore(&mut self) -> Result<()> {
        self.workouts.clear();

        let Some(raw) = self.storage.get_item(WORKOUTS_KEY)? else {
            debug!("no stored workouts");
            return Ok(());
        };

        let records = match serde_json::from_str::<Vec<Value>>(&raw) {
            Ok(records) => records,
            Err(e) => {
                warn!(error = %e, "ignoring unreadable stored workouts");
                return Ok(());
            }
        };

        for (index, record) in records.into_iter().enumerate() {
            match serde_json::from_value::<Workout>(record) {
                Ok(workout) => self.workouts.push(workout),
                Err(e) => warn!(index, error = %e, "skipping unreadable stored workout"),
            }
        }
        debug!(count = self.workouts.len(), "restored workouts");

        Ok(())
    }

    /// Write the full collection to storage, replacing the previous value
    pub fn persist(&mut self) -> Result<()> {
        let json = serde_json::to_string(&self.workouts)?;
        self.storage.set_item(WORKOUTS_KEY, &json)?;
        debug!(count = self.workouts.len(), "persisted workouts");
        Ok(())
    }

    /// Append a workout and persist.
    ///
    /// If the write fails the workout is not kept in memory either.
    pub fn add(&mut self, workout: Workout) -> Result<&Workout> {
        self.workouts.push(workout);
        if let Err(e) = self.persist() {
            self.workouts.pop();
            return Err(e);
        }
        let index = self.workouts.len() - 1;
        Ok(&self.workouts[index])
    }

    /// Drop every workout with `id` and persist, keeping the order of the rest.
    /// Returns the removed workouts.
    pub fn remove(&mut self, id: &str) -> Result<Vec<Workout>> {
        let (removed, kept): (Vec<Workout>, Vec<Workout>) = std::mem::take(&mut self.workouts)
            .into_iter()
            .partition(|w| w.id() == id);
        self.workouts = kept;
        self.persist()?;
        Ok(removed)
    }

    /// Clear storage and the in-memory collection
    pub fn reset(&mut self) -> Result<()> {
        self.storage.remove_item(WORKOUTS_KEY)?;
        self.workouts.clear();
        Ok(())
    }

    pub fn find(&self, id: &str) -> Option<&Workout> {
        self.workouts.iter().find(|w| w.id() == id)
    }

    pub fn workouts(&self) -> &[Workout] {
        &self.workouts
    }

    pub fn len(&self) -> usize {
        self.workouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workouts.is_empty()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }
}
