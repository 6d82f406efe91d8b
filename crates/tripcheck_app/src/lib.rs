//! Session and presentation layer for TripCheck hosts.
//! Wraps `tripcheck_core` behind a string-typed, never-panicking facade.

pub mod display;
pub mod session;

pub use display::{
    format_date, progress_tier, salesperson_bucket, ProgressTier, SALESPERSON_BUCKET_COUNT,
};
pub use session::{
    local_today, ActionResponse, RosterSession, RosterSnapshot, TaskRow, TravelerRow,
};
