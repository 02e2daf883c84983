//! Workout repository contract and in-memory store.
//!
//! # Responsibility
//! - Provide the list/append contract the rest of the workspace codes
//!   against.
//! - Own the in-session collection for the process lifetime.
//!
//! # Invariants
//! - Insertion order is preserved; `add` is the only mutation.
//! - `list` returns a snapshot, so callers cannot reach the live
//!   collection and mutate it behind the store's back.
//! - Records are stored exactly as supplied; no field validation and no
//!   duplicate-id check happen here.

use crate::model::workout::{seed_records, WorkoutRecord};
use log::info;

/// Data access contract for the workout collection.
///
/// Both operations are total: there is no failure mode for an in-memory
/// append or read, so the contract returns plain values.
pub trait WorkoutRepository {
    /// Returns a snapshot of the collection in insertion order.
    fn list(&self) -> Vec<WorkoutRecord>;

    /// Appends `record` to the end of the collection.
    fn add(&mut self, record: WorkoutRecord);
}

/// In-memory workout store, the single source of truth for one session.
///
/// Constructed explicitly and owned by its consumer; the collection is
/// discarded with the process. There is no ambient/global instance.
#[derive(Debug, Clone)]
pub struct WorkoutStore {
    records: Vec<WorkoutRecord>,
}

impl WorkoutStore {
    /// Creates a store seeded with the three fixed sample entries.
    pub fn new() -> Self {
        Self::from_records(seed_records())
    }

    /// Creates a store over an explicit starting collection.
    pub fn from_records(records: Vec<WorkoutRecord>) -> Self {
        Self { records }
    }

    /// Number of records currently held.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for WorkoutStore {
    fn default() -> Self {
        Self::new()
    }
}

impl WorkoutRepository for WorkoutStore {
    fn list(&self) -> Vec<WorkoutRecord> {
        self.records.clone()
    }

    fn add(&mut self, record: WorkoutRecord) {
        info!(
            "event=workout_add module=repo status=ok id={} minutes={} total={}",
            record.id,
            record.minutes,
            self.records.len() + 1
        );
        self.records.push(record);
    }
}
