//! Person model.
//!
//! People are the resources of a roster. Each person holds a set of skill
//! tags, a set of days on which they are unavailable, and an optional cap
//! on how many tasks they may receive in one run.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A person who can be assigned to tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Unique person identifier (display name).
    pub name: String,
    /// Skill tags held.
    #[serde(default)]
    pub skills: HashSet<String>,
    /// Day labels on which this person cannot be scheduled.
    #[serde(default)]
    pub unavailable: HashSet<String>,
    /// Maximum number of tasks assigned in a single run. `None` = no cap.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_load: Option<usize>,
}

impl Person {
    /// Creates a person with no skills and full availability.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            skills: HashSet::new(),
            unavailable: HashSet::new(),
            max_load: None,
        }
    }

    /// Adds a skill tag.
    pub fn with_skill(mut self, skill: impl Into<String>) -> Self {
        self.skills.insert(skill.into());
        self
    }

    /// Marks the person unavailable on a day.
    pub fn unavailable_on(mut self, day: impl Into<String>) -> Self {
        self.unavailable.insert(day.into());
        self
    }

    /// Caps the number of tasks assigned in one run.
    pub fn with_max_load(mut self, max_load: usize) -> Self {
        self.max_load = Some(max_load);
        self
    }

    /// Whether this person holds a given skill.
    pub fn has_skill(&self, skill: &str) -> bool {
        self.skills.contains(skill)
    }

    /// Whether this person can work on the given day.
    pub fn is_available_on(&self, day: &str) -> bool {
        !self.unavailable.contains(day)
    }

    /// Whether `additional` more tasks fit under the cap, given the number
    /// already assigned in this run.
    pub fn has_capacity_for(&self, assigned_in_run: usize, additional: usize) -> bool {
        match self.max_load {
            None => true,
            Some(cap) => assigned_in_run + additional <= cap,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_person_builder() {
        let p = Person::new("Alice")
            .with_skill("forklift")
            .with_skill("first-aid")
            .unavailable_on("Friday")
            .with_max_load(3);

        assert_eq!(p.name, "Alice");
        assert!(p.has_skill("forklift"));
        assert!(!p.has_skill("welding"));
        assert!(p.is_available_on("Monday"));
        assert!(!p.is_available_on("Friday"));
        assert_eq!(p.max_load, Some(3));
    }

    #[test]
    fn test_capacity() {
        let capped = Person::new("A").with_max_load(2);
        assert!(capped.has_capacity_for(0, 2));
        assert!(capped.has_capacity_for(1, 1));
        assert!(!capped.has_capacity_for(2, 1));
        assert!(!capped.has_capacity_for(0, 3));

        let free = Person::new("B");
        assert!(free.has_capacity_for(1000, 1000));
    }

    #[test]
    fn test_deserialize_defaults() {
        let p: Person = serde_json::from_str(r#"{"name":"Bob"}"#).unwrap();
        assert!(p.skills.is_empty());
        assert!(p.unavailable.is_empty());
        assert!(p.max_load.is_none());
    }
}
