//! Session facade for roster screens.
//!
//! # Responsibility
//! - Own one traveler store plus the view state a roster screen needs.
//! - Expose string-typed commands that never panic toward the host UI.
//! - Serve display-ready snapshots, cached per store revision and view state.
//!
//! # Invariants
//! - Command functions return envelopes instead of panicking or throwing.
//! - A snapshot is recomputed only when store revision, filter, sort, or the
//!   observation date changed.
//! - Ids cross the boundary as strings and are parsed exactly once, here.

use crate::display::{format_date, progress_tier, salesperson_bucket};
use chrono::{Local, NaiveDate};
use log::debug;
use tripcheck_core::{
    classify, is_past, progress, roster_stats, roster_view, traveler_status, urgent_task_count,
    AddTravelerRequest, RosterFilter, SortField, SortSpec, Task, TaskCompletion, Traveler,
    TravelerStore,
};
use uuid::Uuid;

/// Returns today's date in the host's local timezone.
///
/// The facade touches the clock only here; everything below takes the date
/// as a value.
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Generic action envelope for session commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionResponse {
    /// Whether the command succeeded.
    pub ok: bool,
    /// Created or affected traveler ID in string form.
    pub traveler_id: Option<String>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl ActionResponse {
    fn success(message: impl Into<String>) -> Self {
        Self {
            ok: true,
            traveler_id: None,
            message: message.into(),
        }
    }

    fn success_with_id(message: impl Into<String>, traveler_id: String) -> Self {
        Self {
            ok: true,
            traveler_id: Some(traveler_id),
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            traveler_id: None,
            message: message.into(),
        }
    }
}

/// One task prepared for checklist display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRow {
    /// Stable task ID in string form.
    pub task_id: String,
    pub name: String,
    /// Formatted due date; `None` for anytime tasks.
    pub due_date: Option<String>,
    /// Stable due-status key (`anytime|overdue|due-today|due-soon|upcoming`).
    pub due_status: String,
    /// Short badge text for the due status.
    pub due_label: String,
    pub completed: bool,
}

/// One traveler prepared for roster display.
#[derive(Debug, Clone, PartialEq)]
pub struct TravelerRow {
    /// Stable traveler ID in string form.
    pub traveler_id: String,
    pub name: String,
    pub salesperson: String,
    /// Accent-color bucket for the salesperson chip.
    pub salesperson_bucket: u32,
    /// Formatted travel date, e.g. `Jul 1, 2024`.
    pub travel_date: String,
    /// Whether the travel date is strictly in the past.
    pub is_past: bool,
    /// Stable status key (`urgent|complete|in-progress`).
    pub status: String,
    /// Badge text for the status.
    pub status_label: String,
    /// Incomplete tasks that are overdue or due today.
    pub urgent_count: usize,
    pub completed_tasks: usize,
    pub total_tasks: usize,
    pub percentage: f64,
    /// Progress-bar tier key (`full|high|mid|low`).
    pub progress_tier: String,
    pub tasks: Vec<TaskRow>,
}

/// Display-ready roster view plus header counts.
#[derive(Debug, Clone, PartialEq)]
pub struct RosterSnapshot {
    /// Travelers after filtering and sorting, in display order.
    pub rows: Vec<TravelerRow>,
    /// All travelers in the store, ignoring filters.
    pub total: usize,
    /// Travelers whose travel date has not passed, ignoring filters.
    pub active: usize,
    /// Date the snapshot was computed against.
    pub today: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct SnapshotKey {
    revision: u64,
    filter: RosterFilter,
    sort: SortSpec,
    today: NaiveDate,
}

#[derive(Debug)]
struct CachedSnapshot {
    key: SnapshotKey,
    snapshot: RosterSnapshot,
}

/// Holds one traveler store plus roster view state for a host UI.
#[derive(Debug, Default)]
pub struct RosterSession {
    store: TravelerStore,
    filter: RosterFilter,
    sort: SortSpec,
    cache: Option<CachedSnapshot>,
}

impl RosterSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates input and adds a traveler with a fresh checklist.
    ///
    /// # Contract
    /// - Never panics; validation problems come back in the envelope.
    /// - Returns the new traveler ID on success.
    pub fn add_traveler(
        &mut self,
        name: &str,
        salesperson: &str,
        travel_date: &str,
    ) -> ActionResponse {
        let request = AddTravelerRequest {
            name: name.to_string(),
            salesperson: salesperson.to_string(),
            travel_date: travel_date.to_string(),
        };
        match self.store.add_traveler(&request) {
            Ok(id) => ActionResponse::success_with_id("Traveler added.", id.to_string()),
            Err(err) => ActionResponse::failure(format!("add_traveler failed: {err}")),
        }
    }

    /// Deletes a traveler and their checklist.
    ///
    /// # Contract
    /// - Never panics; unknown or malformed ids come back in the envelope.
    /// - Not undoable; hosts are expected to confirm with the user first.
    pub fn delete_traveler(&mut self, traveler_id: &str) -> ActionResponse {
        let id = match parse_id(traveler_id) {
            Ok(id) => id,
            Err(response) => return response,
        };
        match self.store.delete_traveler(id) {
            Ok(()) => ActionResponse::success_with_id("Traveler removed.", id.to_string()),
            Err(err) => ActionResponse::failure(format!("delete_traveler failed: {err}")),
        }
    }

    /// Sets one task's completion state from its boundary string value.
    ///
    /// # Contract
    /// - Never panics; `completed` must be `yes` or `no`.
    pub fn set_task_completion(
        &mut self,
        traveler_id: &str,
        task_id: &str,
        completed: &str,
    ) -> ActionResponse {
        let traveler = match parse_id(traveler_id) {
            Ok(id) => id,
            Err(response) => return response,
        };
        let task = match parse_id(task_id) {
            Ok(id) => id,
            Err(response) => return response,
        };
        let Some(completion) = TaskCompletion::parse(completed) else {
            return ActionResponse::failure(format!(
                "completion must be `yes` or `no`, got `{completed}`"
            ));
        };
        match self.store.set_task_completion(traveler, task, completion) {
            Ok(()) => ActionResponse::success("Task updated."),
            Err(err) => ActionResponse::failure(format!("set_task_completion failed: {err}")),
        }
    }

    /// Replaces the roster search text.
    pub fn set_search(&mut self, search: &str) {
        self.filter.search = search.to_string();
    }

    /// Shows or hides travelers whose travel date has passed.
    pub fn set_hide_past(&mut self, hide_past: bool) {
        self.filter.hide_past = hide_past;
    }

    /// Applies a sort-column selection using its boundary key.
    ///
    /// Selecting the active column flips direction; a new column sorts
    /// ascending.
    pub fn sort_by(&mut self, field: &str) -> ActionResponse {
        match SortField::parse(field) {
            Ok(field) => {
                self.sort.toggle(field);
                ActionResponse::success(format!(
                    "Sorted by {} ({}).",
                    self.sort.field.as_str(),
                    self.sort.direction.as_str()
                ))
            }
            Err(err) => ActionResponse::failure(format!("sort_by failed: {err}")),
        }
    }

    pub fn filter(&self) -> &RosterFilter {
        &self.filter
    }

    pub fn sort(&self) -> SortSpec {
        self.sort
    }

    pub fn store(&self) -> &TravelerStore {
        &self.store
    }

    /// Builds the roster snapshot for the host's local today.
    pub fn roster(&mut self) -> RosterSnapshot {
        self.roster_at(local_today())
    }

    /// Builds the roster snapshot for an explicit observation date.
    ///
    /// Snapshots are cached; a repeat call with unchanged store revision,
    /// filter, sort, and date serves the cached copy without recomputing.
    pub fn roster_at(&mut self, today: NaiveDate) -> RosterSnapshot {
        let key = SnapshotKey {
            revision: self.store.revision(),
            filter: self.filter.clone(),
            sort: self.sort,
            today,
        };
        if let Some(cached) = self.cache.as_ref() {
            if cached.key == key {
                debug!(
                    "event=roster_snapshot module=session status=ok cache=hit revision={}",
                    key.revision
                );
                return cached.snapshot.clone();
            }
        }

        let snapshot = build_snapshot(&self.store, &self.filter, self.sort, today);
        debug!(
            "event=roster_snapshot module=session status=ok cache=miss revision={} rows={}",
            key.revision,
            snapshot.rows.len()
        );
        self.cache = Some(CachedSnapshot {
            key,
            snapshot: snapshot.clone(),
        });
        snapshot
    }
}

fn parse_id(value: &str) -> Result<Uuid, ActionResponse> {
    Uuid::parse_str(value.trim())
        .map_err(|_| ActionResponse::failure(format!("`{value}` is not a valid id")))
}

fn build_snapshot(
    store: &TravelerStore,
    filter: &RosterFilter,
    sort: SortSpec,
    today: NaiveDate,
) -> RosterSnapshot {
    let stats = roster_stats(store.travelers(), today);
    let rows = roster_view(store.travelers(), filter, sort, today)
        .into_iter()
        .map(|traveler| to_traveler_row(traveler, today))
        .collect();
    RosterSnapshot {
        rows,
        total: stats.total,
        active: stats.active,
        today,
    }
}

fn to_traveler_row(traveler: &Traveler, today: NaiveDate) -> TravelerRow {
    let task_progress = progress(&traveler.tasks);
    let status = traveler_status(&traveler.tasks, today);
    TravelerRow {
        traveler_id: traveler.id.to_string(),
        name: traveler.name.clone(),
        salesperson: traveler.salesperson.clone(),
        salesperson_bucket: salesperson_bucket(&traveler.salesperson),
        travel_date: format_date(traveler.travel_date),
        is_past: is_past(traveler.travel_date, today),
        status: status.as_str().to_string(),
        status_label: status.label().to_string(),
        urgent_count: urgent_task_count(&traveler.tasks, today),
        completed_tasks: task_progress.completed,
        total_tasks: task_progress.total,
        percentage: task_progress.percentage,
        progress_tier: progress_tier(task_progress.percentage).as_str().to_string(),
        tasks: traveler
            .tasks
            .iter()
            .map(|task| to_task_row(task, today))
            .collect(),
    }
}

fn to_task_row(task: &Task, today: NaiveDate) -> TaskRow {
    let due = classify(task.due_date, today);
    TaskRow {
        task_id: task.id.to_string(),
        name: task.name.clone(),
        due_date: task.due_date.map(format_date),
        due_status: due.as_str().to_string(),
        due_label: due.label().to_string(),
        completed: task.completed.is_done(),
    }
}
