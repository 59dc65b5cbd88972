//! Rotation guard.
//!
//! Discourages the same person from repeating a task on the same day in
//! consecutive periods, or on adjacent days within the current period.
//! The guard is soft: the builder drops it for a slot when it would leave
//! no candidate at all.

use serde::{Deserialize, Serialize};

use crate::models::{AssignmentTable, Slot, Week};

/// Which rotation check a candidate failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationViolation {
    /// Same person held this task on this day in the prior period.
    SameDayLastPeriod,
    /// Same person holds this task on the preceding day of this period.
    ConsecutiveDay,
}

/// No-repeat filter applied before selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RotationGuard {
    /// Check against the prior period's table.
    pub across_periods: bool,
    /// Check against the preceding day of the table being built.
    pub consecutive_days: bool,
}

impl RotationGuard {
    /// Guard with both checks enabled.
    pub fn new() -> Self {
        Self {
            across_periods: true,
            consecutive_days: true,
        }
    }

    /// Guard with both checks disabled.
    pub fn disabled() -> Self {
        Self {
            across_periods: false,
            consecutive_days: false,
        }
    }

    /// Whether any check is enabled.
    pub fn is_active(&self) -> bool {
        self.across_periods || self.consecutive_days
    }

    /// Returns the first rotation check `person` would fail for `slot`.
    ///
    /// Checks are evaluated in order: prior period first, then the
    /// preceding day in week order.
    pub fn violation(
        &self,
        person: &str,
        slot: Slot,
        week: &Week,
        current: &AssignmentTable,
        prior: Option<&AssignmentTable>,
    ) -> Option<RotationViolation> {
        if self.across_periods {
            if let (Some(prior), Some(day), Some(task)) =
                (prior, week.day(slot.day), current.tasks().get(slot.task))
            {
                if prior.lookup(day, task) == Some(person) {
                    return Some(RotationViolation::SameDayLastPeriod);
                }
            }
        }

        if self.consecutive_days {
            if let Some(prev) = week.previous(slot.day) {
                if current.get(Slot::new(prev, slot.task)) == Some(person) {
                    return Some(RotationViolation::ConsecutiveDay);
                }
            }
        }

        None
    }

    /// Whether assigning `person` to `slot` would break rotation.
    pub fn violates(
        &self,
        person: &str,
        slot: Slot,
        week: &Week,
        current: &AssignmentTable,
        prior: Option<&AssignmentTable>,
    ) -> bool {
        self.violation(person, slot, week, current, prior).is_some()
    }
}

impl Default for RotationGuard {
    fn default() -> Self {
        Self::new()
    }
}
