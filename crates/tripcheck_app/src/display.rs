//! Presentation helpers for roster rendering.
//!
//! # Responsibility
//! - Format calendar dates for list display.
//! - Map salespeople to a stable accent-color bucket.
//! - Map completion percentages to a progress-bar tier.
//!
//! # Invariants
//! - Bucket assignment depends only on the salesperson string, so a
//!   salesperson keeps the same accent color across sessions.
//! - Tier thresholds are inclusive lower bounds.

use chrono::NaiveDate;

/// Number of accent-color buckets available to the roster UI.
pub const SALESPERSON_BUCKET_COUNT: u32 = 8;

/// Formats a date as e.g. `Jun 3, 2024` for list display.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Hashes a salesperson name into an accent-color bucket.
///
/// Wrapping 31-multiplier over the name's code points, folded into
/// [`SALESPERSON_BUCKET_COUNT`] buckets. An empty name lands in bucket zero.
pub fn salesperson_bucket(name: &str) -> u32 {
    let mut hash: i32 = 0;
    for ch in name.chars() {
        hash = hash
            .wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(ch as i32);
    }
    hash.unsigned_abs() % SALESPERSON_BUCKET_COUNT
}

/// Progress-bar tier derived from a completion percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressTier {
    Full,
    High,
    Mid,
    Low,
}

impl ProgressTier {
    /// Stable string key used across the presentation boundary.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::High => "high",
            Self::Mid => "mid",
            Self::Low => "low",
        }
    }
}

/// Maps a completion percentage onto its display tier.
///
/// 100 and up is full, 66 and up high, 33 and up mid, anything below low.
pub fn progress_tier(percentage: f64) -> ProgressTier {
    if percentage >= 100.0 {
        ProgressTier::Full
    } else if percentage >= 66.0 {
        ProgressTier::High
    } else if percentage >= 33.0 {
        ProgressTier::Mid
    } else {
        ProgressTier::Low
    }
}
