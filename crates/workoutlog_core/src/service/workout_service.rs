//! Workout use-case service.
//!
//! # Responsibility
//! - Provide the two entry points the presentation layer calls: list the
//!   collection, log a new workout.
//! - Delegate storage to whichever `WorkoutRepository` it owns.
//!
//! # Invariants
//! - The service never bypasses the repository contract; every mutation
//!   goes through `add`.
//! - The service layer remains storage-agnostic.

use crate::model::workout::WorkoutRecord;
use crate::repo::workout_repo::WorkoutRepository;

/// Use-case wrapper over a workout repository.
pub struct WorkoutService<R: WorkoutRepository> {
    repo: R,
}

impl<R: WorkoutRepository> WorkoutService<R> {
    /// Creates a service owning the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Lists the current collection in insertion order.
    ///
    /// # Contract
    /// - Reflects every prior `log_workout` call.
    /// - Returns a snapshot; repeated calls without intervening writes
    ///   return equal sequences.
    pub fn list_workouts(&self) -> Vec<WorkoutRecord> {
        self.repo.list()
    }

    /// Appends one workout record.
    ///
    /// # Contract
    /// - Accepts the record as-is; field validation is out of scope.
    /// - After this returns, `list_workouts` includes `record` as the
    ///   last element.
    pub fn log_workout(&mut self, record: WorkoutRecord) {
        self.repo.add(record);
    }

    /// Hands the repository back to the caller.
    pub fn into_repo(self) -> R {
        self.repo
    }
}
