//! Hard eligibility predicate.

use crate::models::{Person, Task};

/// Whether `person` may perform `task` on `day`.
///
/// True iff the person holds every skill the task requires and is not
/// marked unavailable on that day. A task with no requirements accepts
/// anyone who is available.
pub fn is_eligible(person: &Person, task: &Task, day: &str) -> bool {
    has_required_skills(person, task) && person.is_available_on(day)
}

/// Whether `person` holds every skill `task` requires, ignoring availability.
pub fn has_required_skills(person: &Person, task: &Task) -> bool {
    task.requires.iter().all(|skill| person.has_skill(skill))
}
