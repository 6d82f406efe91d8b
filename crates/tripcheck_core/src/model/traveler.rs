//! Traveler domain model.
//!
//! # Responsibility
//! - Define the canonical traveler record and its owned task checklist.
//! - Materialize the fixed onboarding template at traveler creation time.
//!
//! # Invariants
//! - `id` is stable for the session and never reused for another traveler.
//! - `tasks` has the template's length and order, always.
//! - `due_date` is `None` exactly when `days_before_travel` is `None`.

use crate::model::template::{onboarding_task_template, TaskDefinition};
use crate::schedule;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a traveler.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TravelerId = Uuid;

/// Stable identifier for one task owned by one traveler.
pub type TaskId = Uuid;

/// Completion state for one onboarding task.
///
/// Serialized as `yes`/`no` to match the values the presentation layer
/// round-trips through its completion selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskCompletion {
    /// Task has been done.
    Yes,
    /// Task is still open.
    No,
}

impl TaskCompletion {
    /// Stable string value used across the presentation boundary.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Yes => "yes",
            Self::No => "no",
        }
    }

    /// Parses the boundary string value, rejecting anything else.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "yes" => Some(Self::Yes),
            "no" => Some(Self::No),
            _ => None,
        }
    }

    /// Returns whether this state counts toward completed totals.
    pub fn is_done(self) -> bool {
        matches!(self, Self::Yes)
    }
}

/// One onboarding task materialized for one traveler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Stable task ID, unique within the session.
    pub id: TaskId,
    /// Display name copied from the template definition.
    pub name: String,
    /// Offset in days before travel; `None` means completable anytime.
    pub days_before_travel: Option<u32>,
    /// Concrete due date; `None` exactly when there is no offset.
    pub due_date: Option<NaiveDate>,
    /// Completion state, mutated only through the store.
    pub completed: TaskCompletion,
}

impl Task {
    /// Materializes one task from a template definition and a travel date.
    ///
    /// # Invariants
    /// - `due_date` is derived once here and never recomputed later.
    /// - New tasks start as `TaskCompletion::No`.
    pub fn from_definition(definition: &TaskDefinition, travel_date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: definition.name.to_string(),
            days_before_travel: definition.days_before_travel,
            due_date: definition
                .days_before_travel
                .map(|days| schedule::due_date(travel_date, days)),
            completed: TaskCompletion::No,
        }
    }

    /// Returns whether this task carries a concrete due date.
    pub fn has_due_date(&self) -> bool {
        self.due_date.is_some()
    }
}

/// Canonical traveler record with its owned onboarding checklist.
///
/// Travelers are created through [`Traveler::new`] only, so every instance
/// starts with a full template materialization. Later template changes would
/// not retroactively affect existing travelers; the checklist is a copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Traveler {
    /// Stable global ID used for lookups and deletion.
    pub id: TravelerId,
    /// Traveler display name.
    pub name: String,
    /// Assigned salesperson display name.
    pub salesperson: String,
    /// Travel date all task due dates are derived from.
    pub travel_date: NaiveDate,
    /// Materialized checklist, template length and order.
    pub tasks: Vec<Task>,
}

impl Traveler {
    /// Creates a traveler with a generated stable ID and a freshly
    /// materialized checklist.
    pub fn new(
        name: impl Into<String>,
        salesperson: impl Into<String>,
        travel_date: NaiveDate,
    ) -> Self {
        Self::with_id(Uuid::new_v4(), name, salesperson, travel_date)
    }

    /// Creates a traveler with a caller-provided stable ID.
    ///
    /// Used by tests that need deterministic ordering across ids.
    pub fn with_id(
        id: TravelerId,
        name: impl Into<String>,
        salesperson: impl Into<String>,
        travel_date: NaiveDate,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            salesperson: salesperson.into(),
            travel_date,
            tasks: onboarding_task_template()
                .iter()
                .map(|definition| Task::from_definition(definition, travel_date))
                .collect(),
        }
    }

    /// Finds one owned task by its stable ID.
    pub fn find_task(&self, task_id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == task_id)
    }
}
