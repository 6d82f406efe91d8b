//! Per-traveler progress aggregation and status badge derivation.
//!
//! # Responsibility
//! - Aggregate a task checklist into completed/total counts and a
//!   percentage.
//! - Count urgent tasks and derive the traveler-level status badge.
//!
//! # Invariants
//! - All functions are pure over one task-list snapshot; repeated calls on
//!   an unmutated checklist yield identical results.
//! - Urgency requires a concrete due date; anytime tasks never count.

use crate::model::traveler::Task;
use crate::schedule;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Aggregated completion counts for one traveler's checklist.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskProgress {
    /// Tasks marked complete.
    pub completed: usize,
    /// Checklist length (template length in practice).
    pub total: usize,
    /// `100 * completed / total`; `0.0` for an empty checklist.
    pub percentage: f64,
}

impl TaskProgress {
    /// Returns whether every task is complete.
    ///
    /// An empty checklist is never complete; it cannot happen under the
    /// template invariant but is defined anyway.
    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.completed == self.total
    }
}

/// Traveler-level status badge derived from the same task snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TravelerStatus {
    /// At least one incomplete task is overdue or due today.
    Urgent,
    /// Every task is complete and nothing is urgent.
    Complete,
    /// Anything else.
    InProgress,
}

impl TravelerStatus {
    /// Stable string key used across the presentation boundary.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Urgent => "urgent",
            Self::Complete => "complete",
            Self::InProgress => "in-progress",
        }
    }

    /// User-facing display label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Urgent => "Urgent",
            Self::Complete => "Complete",
            Self::InProgress => "In Progress",
        }
    }
}

/// Aggregates one checklist into completion counts and a percentage.
pub fn progress(tasks: &[Task]) -> TaskProgress {
    let completed = tasks.iter().filter(|task| task.completed.is_done()).count();
    let total = tasks.len();
    let percentage = if total == 0 {
        0.0
    } else {
        100.0 * completed as f64 / total as f64
    };

    TaskProgress {
        completed,
        total,
        percentage,
    }
}

/// Counts tasks that are incomplete, dated, and overdue or due today.
pub fn urgent_task_count(tasks: &[Task], today: NaiveDate) -> usize {
    tasks
        .iter()
        .filter(|task| {
            !task.completed.is_done()
                && task.has_due_date()
                && schedule::classify(task.due_date, today).is_urgent()
        })
        .count()
}

/// Derives the traveler badge with fixed precedence: urgency dominates,
/// then full completion, else in progress.
pub fn traveler_status(tasks: &[Task], today: NaiveDate) -> TravelerStatus {
    if urgent_task_count(tasks, today) > 0 {
        TravelerStatus::Urgent
    } else if progress(tasks).is_complete() {
        TravelerStatus::Complete
    } else {
        TravelerStatus::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::{progress, traveler_status, urgent_task_count, TravelerStatus};
    use crate::model::traveler::{TaskCompletion, Traveler};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
    }

    #[test]
    fn progress_counts_completed_over_total() {
        let mut traveler = Traveler::new("Ana", "Lee", date(2024, 7, 1));
        traveler.tasks[0].completed = TaskCompletion::Yes;
        traveler.tasks[2].completed = TaskCompletion::Yes;

        let summary = progress(&traveler.tasks);
        assert_eq!(summary.completed, 2);
        assert_eq!(summary.total, 4);
        assert_eq!(summary.percentage, 50.0);
        assert!(!summary.is_complete());
    }

    #[test]
    fn progress_is_idempotent_and_exact_at_full_completion() {
        let mut traveler = Traveler::new("Ana", "Lee", date(2024, 7, 1));
        for task in &mut traveler.tasks {
            task.completed = TaskCompletion::Yes;
        }

        let first = progress(&traveler.tasks);
        let second = progress(&traveler.tasks);
        assert_eq!(first, second);
        assert_eq!(first.percentage, 100.0);
        assert!(first.is_complete());
    }

    #[test]
    fn empty_checklist_yields_zero_percent() {
        let summary = progress(&[]);
        assert_eq!(summary.completed, 0);
        assert_eq!(summary.total, 0);
        assert_eq!(summary.percentage, 0.0);
        assert!(!summary.is_complete());
    }

    #[test]
    fn urgent_count_ignores_anytime_tasks() {
        // Travel far in the future: every dated task is upcoming, and the
        // only incomplete task left is the anytime one.
        let mut traveler = Traveler::new("Ana", "Lee", date(2024, 12, 1));
        for task in &mut traveler.tasks {
            if task.has_due_date() {
                task.completed = TaskCompletion::Yes;
            }
        }

        assert_eq!(urgent_task_count(&traveler.tasks, date(2024, 6, 1)), 0);
    }

    #[test]
    fn urgent_count_includes_overdue_and_due_today_only() {
        // Travel 2024-07-01: offsets 30/7/3 give due dates 06-01, 06-24,
        // 06-28. With today 2024-06-24 the first is overdue, the second due
        // today, the third upcoming.
        let traveler = Traveler::new("Ana", "Lee", date(2024, 7, 1));
        assert_eq!(urgent_task_count(&traveler.tasks, date(2024, 6, 24)), 2);
    }

    #[test]
    fn badge_precedence_is_urgent_then_complete_then_in_progress() {
        let today = date(2024, 6, 24);
        let mut traveler = Traveler::new("Ana", "Lee", date(2024, 7, 1));
        assert_eq!(
            traveler_status(&traveler.tasks, today),
            TravelerStatus::Urgent
        );

        for task in &mut traveler.tasks {
            task.completed = TaskCompletion::Yes;
        }
        assert_eq!(
            traveler_status(&traveler.tasks, today),
            TravelerStatus::Complete
        );

        traveler.tasks[0].completed = TaskCompletion::No;
        // The anytime task is the only one open; nothing is urgent.
        assert_eq!(
            traveler_status(&traveler.tasks, today),
            TravelerStatus::InProgress
        );
    }

    #[test]
    fn badge_keys_and_labels_are_stable() {
        assert_eq!(TravelerStatus::Urgent.as_str(), "urgent");
        assert_eq!(TravelerStatus::InProgress.as_str(), "in-progress");
        assert_eq!(TravelerStatus::InProgress.label(), "In Progress");
        assert_eq!(TravelerStatus::Complete.label(), "Complete");
    }
}
