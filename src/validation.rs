//! Input validation for rostering problems.
//!
//! Checks structural integrity of the week, roster and task catalog
//! before scheduling. Detects:
//! - Duplicate day labels, person names and task names
//! - Day references outside the week
//! - Broken task pairings
//!
//! Run settings (band ratio) are checked when the configuration is loaded.

use crate::models::{Task, TaskRule};
use crate::scheduler::RosterRequest;
use std::collections::{HashMap, HashSet};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The week has no days.
    EmptyWeek,
    /// Two entities share the same identifier.
    DuplicateId,
    /// A task or person references a day that is not in the week.
    UnknownDay,
    /// A paired task names a companion that does not exist.
    UnknownCompanion,
    /// A pairing is structurally invalid (self-pairing, shared or
    /// rule-carrying companion, companion day without primary).
    InvalidPairing,
    /// A run setting is out of range.
    InvalidSetting,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validates a rostering request.
///
/// Checks:
/// 1. The week has at least one day, and no duplicate labels
/// 2. No duplicate person names
/// 3. No duplicate task names
/// 4. Task occurrence days and person unavailable days belong to the week
/// 5. Paired companions exist, differ from the primary, carry no rule of
///    their own, are claimed by one primary only, and occur only on days the
///    primary occurs
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_request(request: &RosterRequest) -> ValidationResult {
    let mut errors = Vec::new();

    if request.week.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyWeek,
            "Week has no days",
        ));
    }

    let mut days = HashSet::new();
    for day in request.week.days() {
        if !days.insert(day.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate day label: {day}"),
            ));
        }
    }

    let mut people = HashSet::new();
    for person in &request.people {
        if !people.insert(person.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate person name: {}", person.name),
            ));
        }
        for day in &person.unavailable {
            if !days.contains(day.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownDay,
                    format!(
                        "Person '{}' is unavailable on unknown day '{}'",
                        person.name, day
                    ),
                ));
            }
        }
    }

    let mut tasks = HashMap::new();
    for task in &request.tasks {
        if tasks.insert(task.name.as_str(), task).is_some() {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate task name: {}", task.name),
            ));
        }
        for day in &task.days {
            if !days.contains(day.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownDay,
                    format!("Task '{}' occurs on unknown day '{}'", task.name, day),
                ));
            }
        }
    }

    check_pairings(request, &tasks, &mut errors);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_pairings(
    request: &RosterRequest,
    tasks: &HashMap<&str, &Task>,
    errors: &mut Vec<ValidationError>,
) {
    let mut claimed: HashMap<&str, &str> = HashMap::new();

    for task in &request.tasks {
        let Some(name) = task.companion() else {
            continue;
        };

        if name == task.name {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidPairing,
                format!("Task '{}' is paired with itself", task.name),
            ));
            continue;
        }

        let Some(companion) = tasks.get(name) else {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownCompanion,
                format!(
                    "Task '{}' is paired with unknown task '{}'",
                    task.name, name
                ),
            ));
            continue;
        };

        if companion.rule != TaskRule::None {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidPairing,
                format!(
                    "Companion '{}' of task '{}' has its own rule '{}'",
                    name, task.name, companion.rule
                ),
            ));
        }

        if let Some(first) = claimed.insert(name, task.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidPairing,
                format!(
                    "Companion '{}' is claimed by both '{}' and '{}'",
                    name, first, task.name
                ),
            ));
        }

        for (_, day) in request.week.iter() {
            if companion.occurs_on(day) && !task.occurs_on(day) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidPairing,
                    format!(
                        "Companion '{}' occurs on '{}' but task '{}' does not",
                        name, day, task.name
                    ),
                ));
            }
        }
    }
}
