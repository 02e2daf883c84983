//! Repository layer: the storage seam and its in-memory implementation.
//!
//! # Responsibility
//! - Define the data access contract consumed by the service layer.
//! - Keep collection ownership details behind one seam.
//!
//! # Invariants
//! - Repository reads hand out snapshots; the live collection is never
//!   exposed to callers.

pub mod workout_repo;
