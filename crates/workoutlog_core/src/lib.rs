//! Core domain logic for the workout log.
//! This crate is the single source of truth for the in-session collection.

pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::workout::{seed_records, WorkoutRecord};
pub use repo::workout_repo::{WorkoutRepository, WorkoutStore};
pub use service::workout_service::WorkoutService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
