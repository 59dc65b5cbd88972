//! Task model.
//!
//! A task is a recurring duty that needs exactly one person on each day it
//! occurs. Tasks carry a skill requirement, an occurrence list, and an
//! optional special rule.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// A recurring task to be staffed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique task identifier (display name).
    pub name: String,
    /// Skill tags a person must hold all of. Empty = anyone qualifies.
    #[serde(default)]
    pub requires: HashSet<String>,
    /// Day labels on which the task occurs. Empty = every day of the week.
    #[serde(default)]
    pub days: Vec<String>,
    /// Special assignment rule.
    #[serde(default)]
    pub rule: TaskRule,
}

/// Special assignment behaviour of a task.
///
/// Written in configuration as `"none"`, `"same-person-all-period"` or
/// `"paired-with:<task name>"`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TaskRule {
    /// Staffed day by day in the general pass.
    #[default]
    None,
    /// One person covers every occurrence of the task in the period.
    SamePersonAllPeriod,
    /// The assignee of this task is mirrored onto the named companion.
    PairedWith(String),
}

const PAIRED_PREFIX: &str = "paired-with:";

impl Task {
    /// Creates a task with no requirements that occurs every day.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            requires: HashSet::new(),
            days: Vec::new(),
            rule: TaskRule::None,
        }
    }

    /// Adds a required skill tag.
    pub fn requiring(mut self, skill: impl Into<String>) -> Self {
        self.requires.insert(skill.into());
        self
    }

    /// Sets the occurrence days.
    pub fn on_days<I, S>(mut self, days: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.days = days.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the special rule.
    pub fn with_rule(mut self, rule: TaskRule) -> Self {
        self.rule = rule;
        self
    }

    /// Marks the task as staffed by one person for the whole period.
    pub fn same_person_all_period(self) -> Self {
        self.with_rule(TaskRule::SamePersonAllPeriod)
    }

    /// Pairs this task with a companion that mirrors its assignee.
    pub fn paired_with(self, companion: impl Into<String>) -> Self {
        self.with_rule(TaskRule::PairedWith(companion.into()))
    }

    /// Whether the task occurs on the given day.
    pub fn occurs_on(&self, day: &str) -> bool {
        self.days.is_empty() || self.days.iter().any(|d| d == day)
    }

    /// Name of the companion task, for paired tasks.
    pub fn companion(&self) -> Option<&str> {
        match &self.rule {
            TaskRule::PairedWith(other) => Some(other),
            _ => None,
        }
    }
}

impl fmt::Display for TaskRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskRule::None => f.write_str("none"),
            TaskRule::SamePersonAllPeriod => f.write_str("same-person-all-period"),
            TaskRule::PairedWith(other) => write!(f, "{PAIRED_PREFIX}{other}"),
        }
    }
}

impl FromStr for TaskRule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s {
            "" | "none" => Ok(TaskRule::None),
            "same-person-all-period" => Ok(TaskRule::SamePersonAllPeriod),
            _ => match s.strip_prefix(PAIRED_PREFIX).map(str::trim) {
                Some(other) if !other.is_empty() => Ok(TaskRule::PairedWith(other.to_string())),
                Some(_) => Err(format!("task rule '{s}' names no companion task")),
                None => Err(format!("unknown task rule '{s}'")),
            },
        }
    }
}

impl TryFrom<String> for TaskRule {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TaskRule> for String {
    fn from(rule: TaskRule) -> Self {
        rule.to_string()
    }
}
