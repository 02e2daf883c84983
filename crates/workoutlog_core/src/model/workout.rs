//! Workout record domain model.
//!
//! # Responsibility
//! - Define the one record shape the whole workspace agrees on.
//! - Keep the external JSON field naming of the original data
//!   (`type` for the category).
//!
//! # Invariants
//! - `id` is supplied by the caller; the model neither generates nor
//!   checks it for uniqueness.
//! - `name` is an opaque free-text label. The seed data happens to hold
//!   person names; nothing may interpret the field beyond displaying it.

use serde::{Deserialize, Serialize};

/// One logged activity entry.
///
/// Fields are accepted as-is: there is deliberately no validation layer,
/// so a record is exactly what the caller assembled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutRecord {
    /// Caller-supplied identifier, intended unique within one collection.
    pub id: i64,
    /// Free-text label.
    pub name: String,
    /// Free-text category such as "Running" or "Yoga".
    /// Serialized as `type` to match the external record shape.
    #[serde(rename = "type")]
    pub kind: String,
    /// Duration in minutes.
    pub minutes: u32,
}

impl WorkoutRecord {
    /// Assembles a record from its four fields.
    pub fn new(id: i64, name: impl Into<String>, kind: impl Into<String>, minutes: u32) -> Self {
        Self {
            id,
            name: name.into(),
            kind: kind.into(),
            minutes,
        }
    }
}

/// The three fixed entries every fresh store starts with.
///
/// Values are part of the store contract: order and field values are
/// observable through `list` on a fresh store.
pub fn seed_records() -> Vec<WorkoutRecord> {
    vec![
        WorkoutRecord::new(1, "John Doe", "Running", 30),
        WorkoutRecord::new(2, "Jane Smith", "Cycling", 45),
        WorkoutRecord::new(3, "Mike Johnson", "Yoga", 50),
    ]
}
