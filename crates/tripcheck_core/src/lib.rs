//! Core domain logic for TripCheck.
//! This crate is the single source of truth for business invariants.

pub mod logging;
pub mod model;
pub mod progress;
pub mod roster;
pub mod schedule;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::template::{onboarding_task_template, TaskDefinition};
pub use model::traveler::{Task, TaskCompletion, TaskId, Traveler, TravelerId};
pub use progress::{progress, traveler_status, urgent_task_count, TaskProgress, TravelerStatus};
pub use roster::{
    filter_travelers, roster_stats, roster_view, sort_travelers, ParseSortError, RosterFilter,
    RosterStats, SortDirection, SortField, SortSpec,
};
pub use schedule::{classify, due_date, is_past, DueStatus, ParseDueStatusError};
pub use store::{
    AddTravelerRequest, NewTraveler, StoreError, StoreResult, TravelerStore, ValidationError,
    TRAVEL_DATE_FORMAT,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
