//! Roster view engine: traveler filtering, sorting and summary counts.
//!
//! # Responsibility
//! - Filter travelers by search text and the hide-past toggle.
//! - Sort the filtered view by a chosen field and direction.
//!
//! # Invariants
//! - Composition is always filter-then-sort over the full collection; there
//!   is no incremental view maintenance.
//! - Search is case-insensitive substring matching over traveler name and
//!   salesperson; an empty query matches everything.
//! - Sorting is stable; order among equal keys follows source order but is
//!   not contractual.

use crate::model::traveler::Traveler;
use crate::schedule;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Filter parameters for the roster view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterFilter {
    /// Substring matched against traveler name and salesperson.
    pub search: String,
    /// When set, travelers with past travel dates are excluded.
    pub hide_past: bool,
}

/// Sortable roster columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortField {
    Name,
    Salesperson,
    TravelDate,
}

impl SortField {
    /// Stable string key used across the presentation boundary.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Salesperson => "salesperson",
            Self::TravelDate => "travel-date",
        }
    }

    /// Parses one stable field key back into its variant.
    pub fn parse(value: &str) -> Result<Self, ParseSortError> {
        match value.trim() {
            "name" => Ok(Self::Name),
            "salesperson" => Ok(Self::Salesperson),
            "travel-date" => Ok(Self::TravelDate),
            other => Err(ParseSortError::UnknownField(other.to_string())),
        }
    }
}

impl Default for SortField {
    fn default() -> Self {
        Self::Salesperson
    }
}

/// Sort direction for the roster view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    /// Stable string key used across the presentation boundary.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    /// Parses one stable direction key back into its variant.
    pub fn parse(value: &str) -> Result<Self, ParseSortError> {
        match value.trim() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(ParseSortError::UnknownDirection(other.to_string())),
        }
    }

    /// Returns the opposite direction.
    pub fn flipped(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

impl Default for SortDirection {
    fn default() -> Self {
        Self::Asc
    }
}

/// Sort parameters for the roster view.
///
/// Defaults to salesperson ascending, the roster's initial presentation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortSpec {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortSpec {
    /// Applies a column selection: picking the active field flips the
    /// direction, picking a new field resets to ascending.
    pub fn toggle(&mut self, field: SortField) {
        if self.field == field {
            self.direction = self.direction.flipped();
        } else {
            self.field = field;
            self.direction = SortDirection::Asc;
        }
    }
}

/// Error for unrecognized sort keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseSortError {
    UnknownField(String),
    UnknownDirection(String),
}

impl Display for ParseSortError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownField(value) => write!(f, "unrecognized sort field `{value}`"),
            Self::UnknownDirection(value) => {
                write!(f, "unrecognized sort direction `{value}`")
            }
        }
    }
}

impl Error for ParseSortError {}

/// Roster-level summary counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterStats {
    /// All travelers in the store.
    pub total: usize,
    /// Travelers whose travel date is today or later.
    pub active: usize,
}

/// Keeps travelers matching the search text and the hide-past rule.
pub fn filter_travelers<'a>(
    travelers: &'a [Traveler],
    filter: &RosterFilter,
    today: NaiveDate,
) -> Vec<&'a Traveler> {
    let needle = filter.search.to_lowercase();
    travelers
        .iter()
        .filter(|traveler| {
            let matches_search = needle.is_empty()
                || traveler.name.to_lowercase().contains(&needle)
                || traveler.salesperson.to_lowercase().contains(&needle);
            let visible = !filter.hide_past || !schedule::is_past(traveler.travel_date, today);
            matches_search && visible
        })
        .collect()
}

/// Stable-sorts a roster view in place by the given spec.
pub fn sort_travelers(view: &mut [&Traveler], spec: SortSpec) {
    view.sort_by(|a, b| {
        let ordering = compare_by_field(a, b, spec.field);
        match spec.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
}

/// Filter-then-sort composition, recomputed fully from the collection.
pub fn roster_view<'a>(
    travelers: &'a [Traveler],
    filter: &RosterFilter,
    sort: SortSpec,
    today: NaiveDate,
) -> Vec<&'a Traveler> {
    let mut view = filter_travelers(travelers, filter, today);
    sort_travelers(&mut view, sort);
    view
}

/// Counts the full collection and its not-yet-past subset.
pub fn roster_stats(travelers: &[Traveler], today: NaiveDate) -> RosterStats {
    let active = travelers
        .iter()
        .filter(|traveler| !schedule::is_past(traveler.travel_date, today))
        .count();
    RosterStats {
        total: travelers.len(),
        active,
    }
}

fn compare_by_field(a: &Traveler, b: &Traveler, field: SortField) -> Ordering {
    match field {
        SortField::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        SortField::Salesperson => a.salesperson.to_lowercase().cmp(&b.salesperson.to_lowercase()),
        SortField::TravelDate => a.travel_date.cmp(&b.travel_date),
    }
}
