//! Fixed onboarding task template.
//!
//! # Responsibility
//! - Define the canonical ordered set of onboarding task kinds.
//! - Expose the template as immutable, process-lifetime data.
//!
//! # Invariants
//! - The template has exactly four definitions in display order.
//! - Template data never changes at runtime; travelers copy it on creation.

use serde::{Deserialize, Serialize};

/// One onboarding task kind with its scheduling offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDefinition {
    /// Display name shown for every materialized copy of this task.
    pub name: &'static str,
    /// Days before the travel date the task is due; `None` means the task
    /// has no due date and can be completed anytime.
    pub days_before_travel: Option<u32>,
}

/// The welcome-form task is deliberately first and has no due date.
const ONBOARDING_TASK_TEMPLATE: &[TaskDefinition] = &[
    TaskDefinition {
        name: "Send the Colombia Welcome Form",
        days_before_travel: None,
    },
    TaskDefinition {
        name: "Tarjeta de agradecimiento",
        days_before_travel: Some(30),
    },
    TaskDefinition {
        name: "Welcome guide",
        days_before_travel: Some(7),
    },
    TaskDefinition {
        name: "Guide profiles with map of route and pro tip/fun fact",
        days_before_travel: Some(3),
    },
];

/// Returns the fixed ordered onboarding task definitions.
pub fn onboarding_task_template() -> &'static [TaskDefinition] {
    ONBOARDING_TASK_TEMPLATE
}

#[cfg(test)]
mod tests {
    use super::onboarding_task_template;

    #[test]
    fn template_has_four_definitions_in_display_order() {
        let template = onboarding_task_template();
        assert_eq!(template.len(), 4);

        let offsets: Vec<_> = template
            .iter()
            .map(|definition| definition.days_before_travel)
            .collect();
        assert_eq!(offsets, vec![None, Some(30), Some(7), Some(3)]);
    }

    #[test]
    fn only_the_first_definition_is_anytime() {
        let template = onboarding_task_template();
        assert!(template[0].days_before_travel.is_none());
        assert!(template[1..]
            .iter()
            .all(|definition| definition.days_before_travel.is_some()));
    }

    #[test]
    fn definition_names_are_unique_and_non_empty() {
        let template = onboarding_task_template();
        for (index, definition) in template.iter().enumerate() {
            assert!(!definition.name.trim().is_empty());
            assert!(template[index + 1..]
                .iter()
                .all(|other| other.name != definition.name));
        }
    }
}
