//! Domain model for the workout log.
//!
//! # Responsibility
//! - Define the canonical workout record shared by store, service and CLI.
//!
//! # Invariants
//! - `WorkoutRecord` carries caller-supplied identity; nothing in this
//!   module generates or deduplicates ids.

pub mod workout;
