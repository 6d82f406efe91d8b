//! In-memory traveler store and mutation API.
//!
//! # Responsibility
//! - Own the session's traveler collection as the single mutation point.
//! - Validate add requests before any state change.
//! - Track a revision counter so derived views can cache safely.
//!
//! # Invariants
//! - Insertion order is preserved; deletion compacts without reordering.
//! - Every successful mutation bumps `revision`; failed calls leave the
//!   store untouched.
//! - Log lines carry ids and counts only, never traveler names.

use crate::model::traveler::{TaskCompletion, TaskId, Traveler, TravelerId};
use chrono::NaiveDate;
use log::{error, info};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Wire format for travel dates entered at the boundary.
pub const TRAVEL_DATE_FORMAT: &str = "%Y-%m-%d";

pub type StoreResult<T> = Result<T, StoreError>;

/// Raw add-traveler form fields, validated by [`AddTravelerRequest::validate`].
///
/// The travel date stays a string here; parsing it is part of validation so
/// the boundary layer never handles calendar types.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddTravelerRequest {
    pub name: String,
    pub salesperson: String,
    pub travel_date: String,
}

/// Validated, typed form of an add-traveler request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTraveler {
    pub name: String,
    pub salesperson: String,
    pub travel_date: NaiveDate,
}

impl AddTravelerRequest {
    /// Checks required fields and parses the travel date.
    ///
    /// Name and salesperson are trimmed; whitespace-only input counts as
    /// missing. The travel date must match [`TRAVEL_DATE_FORMAT`].
    pub fn validate(&self) -> Result<NewTraveler, ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::MissingName);
        }

        let salesperson = self.salesperson.trim();
        if salesperson.is_empty() {
            return Err(ValidationError::MissingSalesperson);
        }

        let raw_date = self.travel_date.trim();
        if raw_date.is_empty() {
            return Err(ValidationError::MissingTravelDate);
        }
        let travel_date = NaiveDate::parse_from_str(raw_date, TRAVEL_DATE_FORMAT).map_err(|_| {
            ValidationError::InvalidTravelDate {
                value: raw_date.to_string(),
            }
        })?;

        Ok(NewTraveler {
            name: name.to_string(),
            salesperson: salesperson.to_string(),
            travel_date,
        })
    }
}

/// Rejection reasons for an add-traveler request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    MissingName,
    MissingSalesperson,
    MissingTravelDate,
    InvalidTravelDate { value: String },
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingName => write!(f, "traveler name is required"),
            Self::MissingSalesperson => write!(f, "salesperson is required"),
            Self::MissingTravelDate => write!(f, "travel date is required"),
            Self::InvalidTravelDate { value } => {
                write!(f, "travel date `{value}` is not a valid YYYY-MM-DD date")
            }
        }
    }
}

impl Error for ValidationError {}

/// Store mutation error.
#[derive(Debug)]
pub enum StoreError {
    Validation(ValidationError),
    TravelerNotFound(TravelerId),
    TaskNotFound {
        traveler_id: TravelerId,
        task_id: TaskId,
    },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::TravelerNotFound(id) => write!(f, "traveler not found: {id}"),
            Self::TaskNotFound {
                traveler_id,
                task_id,
            } => write!(f, "task {task_id} not found on traveler {traveler_id}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::TravelerNotFound(_) => None,
            Self::TaskNotFound { .. } => None,
        }
    }
}

impl From<ValidationError> for StoreError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

/// In-memory traveler collection for one session.
#[derive(Debug, Default)]
pub struct TravelerStore {
    travelers: Vec<Traveler>,
    revision: u64,
}

impl TravelerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates the request and appends a traveler with a freshly
    /// materialized checklist.
    ///
    /// # Side effects
    /// - Emits `traveler_add` logging events.
    pub fn add_traveler(&mut self, request: &AddTravelerRequest) -> StoreResult<TravelerId> {
        let new_traveler = match request.validate() {
            Ok(valid) => valid,
            Err(err) => {
                error!(
                    "event=traveler_add module=store status=error error_code=validation_failed error={err}"
                );
                return Err(err.into());
            }
        };

        let traveler = Traveler::new(
            new_traveler.name,
            new_traveler.salesperson,
            new_traveler.travel_date,
        );
        let id = traveler.id;
        let task_count = traveler.tasks.len();
        self.travelers.push(traveler);
        self.revision += 1;
        info!(
            "event=traveler_add module=store status=ok traveler_id={id} task_count={task_count} roster_size={}",
            self.travelers.len()
        );
        Ok(id)
    }

    /// Removes a traveler and their checklist.
    ///
    /// # Side effects
    /// - Emits `traveler_delete` logging events.
    pub fn delete_traveler(&mut self, id: TravelerId) -> StoreResult<()> {
        let Some(index) = self.travelers.iter().position(|t| t.id == id) else {
            error!(
                "event=traveler_delete module=store status=error error_code=traveler_not_found traveler_id={id}"
            );
            return Err(StoreError::TravelerNotFound(id));
        };

        self.travelers.remove(index);
        self.revision += 1;
        info!(
            "event=traveler_delete module=store status=ok traveler_id={id} roster_size={}",
            self.travelers.len()
        );
        Ok(())
    }

    /// Sets one task's completion state.
    ///
    /// # Side effects
    /// - Emits `task_toggle` logging events.
    pub fn set_task_completion(
        &mut self,
        traveler_id: TravelerId,
        task_id: TaskId,
        completed: TaskCompletion,
    ) -> StoreResult<()> {
        let Some(traveler) = self.travelers.iter_mut().find(|t| t.id == traveler_id) else {
            error!(
                "event=task_toggle module=store status=error error_code=traveler_not_found traveler_id={traveler_id}"
            );
            return Err(StoreError::TravelerNotFound(traveler_id));
        };
        let Some(task) = traveler.tasks.iter_mut().find(|t| t.id == task_id) else {
            error!(
                "event=task_toggle module=store status=error error_code=task_not_found traveler_id={traveler_id} task_id={task_id}"
            );
            return Err(StoreError::TaskNotFound {
                traveler_id,
                task_id,
            });
        };

        task.completed = completed;
        self.revision += 1;
        info!(
            "event=task_toggle module=store status=ok traveler_id={traveler_id} task_id={task_id} completed={}",
            completed.as_str()
        );
        Ok(())
    }

    /// All travelers in insertion order.
    pub fn travelers(&self) -> &[Traveler] {
        &self.travelers
    }

    /// Looks up one traveler by ID.
    pub fn get(&self, id: TravelerId) -> Option<&Traveler> {
        self.travelers.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.travelers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.travelers.is_empty()
    }

    /// Monotonic counter bumped on every successful mutation.
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

#[cfg(test)]
mod tests {
    use super::{AddTravelerRequest, ValidationError};
    use chrono::NaiveDate;

    fn request(name: &str, salesperson: &str, travel_date: &str) -> AddTravelerRequest {
        AddTravelerRequest {
            name: name.to_string(),
            salesperson: salesperson.to_string(),
            travel_date: travel_date.to_string(),
        }
    }

    #[test]
    fn validate_trims_and_parses() {
        let valid = request("  Ana  ", " Lee ", " 2024-07-01 ")
            .validate()
            .expect("request should pass validation");
        assert_eq!(valid.name, "Ana");
        assert_eq!(valid.salesperson, "Lee");
        assert_eq!(
            valid.travel_date,
            NaiveDate::from_ymd_opt(2024, 7, 1).expect("valid test date")
        );
    }

    #[test]
    fn validate_rejects_blank_fields_in_order() {
        assert_eq!(
            request("   ", "Lee", "2024-07-01").validate(),
            Err(ValidationError::MissingName)
        );
        assert_eq!(
            request("Ana", "", "2024-07-01").validate(),
            Err(ValidationError::MissingSalesperson)
        );
        assert_eq!(
            request("Ana", "Lee", "  ").validate(),
            Err(ValidationError::MissingTravelDate)
        );
    }

    #[test]
    fn validate_rejects_malformed_dates_with_the_raw_value() {
        assert_eq!(
            request("Ana", "Lee", "07/01/2024").validate(),
            Err(ValidationError::InvalidTravelDate {
                value: "07/01/2024".to_string()
            })
        );
        assert_eq!(
            request("Ana", "Lee", "2024-02-30").validate(),
            Err(ValidationError::InvalidTravelDate {
                value: "2024-02-30".to_string()
            })
        );
    }
}
