//! Due-date arithmetic and date-only urgency classification.
//!
//! # Responsibility
//! - Derive task due dates by offsetting from a travel date.
//! - Classify a due date against an injected "today".
//!
//! # Invariants
//! - All functions are pure; "today" is always a parameter, never read from
//!   the ambient clock.
//! - Comparisons are date-only (`NaiveDate`), so time-of-day skew between a
//!   wall-clock "now" and a date input cannot occur.
//! - Offset arithmetic rolls over month and year boundaries and never yields
//!   an invalid date.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Upper bound of the due-soon window, in days after today (inclusive).
const DUE_SOON_WINDOW_DAYS: i64 = 2;

/// Urgency classification of one task due date relative to "today".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DueStatus {
    /// No due date; the task can be completed anytime.
    Anytime,
    /// Due date is strictly before today.
    Overdue,
    /// Due date equals today.
    DueToday,
    /// Due date falls in `[today+1, today+2]`.
    DueSoon,
    /// Due date is three or more days out.
    Upcoming,
}

impl DueStatus {
    /// Stable string key used across the presentation boundary.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Anytime => "anytime",
            Self::Overdue => "overdue",
            Self::DueToday => "due-today",
            Self::DueSoon => "due-soon",
            Self::Upcoming => "upcoming",
        }
    }

    /// User-facing display label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Anytime => "Anytime",
            Self::Overdue => "Overdue",
            Self::DueToday => "Due Today",
            Self::DueSoon => "Due Soon",
            Self::Upcoming => "Upcoming",
        }
    }

    /// Parses one stable status key back into its variant.
    pub fn parse(value: &str) -> Result<Self, ParseDueStatusError> {
        match value.trim() {
            "anytime" => Ok(Self::Anytime),
            "overdue" => Ok(Self::Overdue),
            "due-today" => Ok(Self::DueToday),
            "due-soon" => Ok(Self::DueSoon),
            "upcoming" => Ok(Self::Upcoming),
            other => Err(ParseDueStatusError(other.to_string())),
        }
    }

    /// Returns whether this status makes an incomplete task urgent.
    pub fn is_urgent(self) -> bool {
        matches!(self, Self::Overdue | Self::DueToday)
    }
}

/// Error for unrecognized due-status keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDueStatusError(pub String);

impl Display for ParseDueStatusError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unrecognized due status `{}`", self.0)
    }
}

impl Error for ParseDueStatusError {}

/// Computes a task due date as `travel_date` minus `days_before` days.
///
/// Month and year boundaries roll over through calendar arithmetic; an
/// offset larger than the day-of-month simply lands in an earlier month.
pub fn due_date(travel_date: NaiveDate, days_before: u32) -> NaiveDate {
    travel_date - Duration::days(i64::from(days_before))
}

/// Classifies an optional due date against an injected "today".
///
/// `None` always classifies as [`DueStatus::Anytime`]. The due-soon window
/// is `[today+1, today+2]` inclusive; day three and later is upcoming.
pub fn classify(due: Option<NaiveDate>, today: NaiveDate) -> DueStatus {
    let Some(due) = due else {
        return DueStatus::Anytime;
    };

    if due < today {
        DueStatus::Overdue
    } else if due == today {
        DueStatus::DueToday
    } else if due <= today + Duration::days(DUE_SOON_WINDOW_DAYS) {
        DueStatus::DueSoon
    } else {
        DueStatus::Upcoming
    }
}

/// Returns whether `date` is strictly before `today`.
pub fn is_past(date: NaiveDate, today: NaiveDate) -> bool {
    date < today
}

#[cfg(test)]
mod tests {
    use super::{classify, due_date, is_past, DueStatus, ParseDueStatusError};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
    }

    #[test]
    fn due_date_subtracts_whole_days() {
        assert_eq!(due_date(date(2024, 7, 1), 7), date(2024, 6, 24));
        assert_eq!(due_date(date(2024, 7, 1), 0), date(2024, 7, 1));
    }

    #[test]
    fn due_date_rolls_over_month_and_year_boundaries() {
        assert_eq!(due_date(date(2024, 3, 2), 5), date(2024, 2, 26));
        assert_eq!(due_date(date(2024, 1, 10), 30), date(2023, 12, 11));
        // Leap day: 2024-03-01 minus one day.
        assert_eq!(due_date(date(2024, 3, 1), 1), date(2024, 2, 29));
    }

    #[test]
    fn classify_covers_every_bucket_at_the_boundaries() {
        let today = date(2024, 6, 10);
        assert_eq!(classify(Some(date(2024, 6, 9)), today), DueStatus::Overdue);
        assert_eq!(classify(Some(date(2024, 6, 10)), today), DueStatus::DueToday);
        assert_eq!(classify(Some(date(2024, 6, 11)), today), DueStatus::DueSoon);
        assert_eq!(classify(Some(date(2024, 6, 12)), today), DueStatus::DueSoon);
        assert_eq!(classify(Some(date(2024, 6, 13)), today), DueStatus::Upcoming);
        assert_eq!(classify(None, today), DueStatus::Anytime);
    }

    #[test]
    fn is_past_is_strict() {
        let today = date(2024, 6, 10);
        assert!(is_past(date(2024, 6, 9), today));
        assert!(!is_past(today, today));
        assert!(!is_past(date(2024, 6, 11), today));
    }

    #[test]
    fn status_keys_round_trip_and_labels_match_display_text() {
        for status in [
            DueStatus::Anytime,
            DueStatus::Overdue,
            DueStatus::DueToday,
            DueStatus::DueSoon,
            DueStatus::Upcoming,
        ] {
            assert_eq!(DueStatus::parse(status.as_str()), Ok(status));
        }
        assert_eq!(DueStatus::DueToday.label(), "Due Today");
        assert_eq!(
            DueStatus::parse("someday"),
            Err(ParseDueStatusError("someday".to_string()))
        );
    }

    #[test]
    fn only_overdue_and_due_today_are_urgent() {
        assert!(DueStatus::Overdue.is_urgent());
        assert!(DueStatus::DueToday.is_urgent());
        assert!(!DueStatus::DueSoon.is_urgent());
        assert!(!DueStatus::Upcoming.is_urgent());
        assert!(!DueStatus::Anytime.is_urgent());
    }
}
