//! Assignment table (solution) model.
//!
//! A dense day × task grid addressed by index pairs. The row and column
//! orders are fixed at construction from the week and the task catalog, so
//! every traversal of the table is deterministic and follows declaration
//! order rather than map iteration order.

use std::collections::HashMap;

use super::{Task, Week};

/// Index pair addressing one cell of an [`AssignmentTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Slot {
    /// Day index in week order.
    pub day: usize,
    /// Task index in catalog order.
    pub task: usize,
}

impl Slot {
    /// Creates a slot.
    pub fn new(day: usize, task: usize) -> Self {
        Self { day, task }
    }
}

/// Day × task grid of assigned person names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssignmentTable {
    days: Vec<String>,
    tasks: Vec<String>,
    day_index: HashMap<String, usize>,
    task_index: HashMap<String, usize>,
    cells: Vec<Option<String>>,
}

impl AssignmentTable {
    /// Creates an empty table with the given row/column labels.
    pub fn new<D, T>(days: D, tasks: T) -> Self
    where
        D: IntoIterator,
        D::Item: Into<String>,
        T: IntoIterator,
        T::Item: Into<String>,
    {
        let days: Vec<String> = days.into_iter().map(Into::into).collect();
        let tasks: Vec<String> = tasks.into_iter().map(Into::into).collect();
        let day_index = index_labels(&days);
        let task_index = index_labels(&tasks);
        let cells = vec![None; days.len() * tasks.len()];
        Self {
            days,
            tasks,
            day_index,
            task_index,
            cells,
        }
    }

    /// Creates an empty table shaped after a week and a task catalog.
    pub fn for_catalog(week: &Week, tasks: &[Task]) -> Self {
        Self::new(week.days().iter().cloned(), tasks.iter().map(|t| t.name.clone()))
    }

    /// Day labels in row order.
    pub fn days(&self) -> &[String] {
        &self.days
    }

    /// Task names in column order.
    pub fn tasks(&self) -> &[String] {
        &self.tasks
    }

    /// Index of a day label.
    pub fn day_index(&self, day: &str) -> Option<usize> {
        self.day_index.get(day).copied()
    }

    /// Index of a task name.
    pub fn task_index(&self, task: &str) -> Option<usize> {
        self.task_index.get(task).copied()
    }

    /// Person assigned to a slot.
    pub fn get(&self, slot: Slot) -> Option<&str> {
        self.offset(slot)
            .and_then(|i| self.cells[i].as_deref())
    }

    /// Person assigned to `(day, task)`, addressed by labels.
    ///
    /// Unknown labels read as unfilled, which lets a prior period with a
    /// different catalog be queried safely.
    pub fn lookup(&self, day: &str, task: &str) -> Option<&str> {
        let slot = Slot::new(self.day_index(day)?, self.task_index(task)?);
        self.get(slot)
    }

    /// Writes a person into a slot, returning the previous occupant.
    ///
    /// Out-of-range slots are ignored and return `None`.
    pub fn set(&mut self, slot: Slot, person: impl Into<String>) -> Option<String> {
        let i = self.offset(slot)?;
        self.cells[i].replace(person.into())
    }

    /// Writes a person into `(day, task)`, addressed by labels.
    ///
    /// Returns `false` if either label is unknown.
    pub fn assign(&mut self, day: &str, task: &str, person: impl Into<String>) -> bool {
        match (self.day_index(day), self.task_index(task)) {
            (Some(d), Some(t)) => {
                self.set(Slot::new(d, t), person);
                true
            }
            _ => false,
        }
    }

    /// Whether a slot holds a person.
    pub fn is_filled(&self, slot: Slot) -> bool {
        self.get(slot).is_some()
    }

    /// Number of filled cells.
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Number of cells naming a person.
    pub fn count_for(&self, person: &str) -> usize {
        self.cells
            .iter()
            .filter(|c| c.as_deref() == Some(person))
            .count()
    }

    /// Per-person cell counts.
    pub fn counts(&self) -> HashMap<String, usize> {
        let mut counts = HashMap::new();
        for person in self.cells.iter().flatten() {
            *counts.entry(person.clone()).or_insert(0) += 1;
        }
        counts
    }

    /// Filled cells in day-major order.
    pub fn iter_filled(&self) -> impl Iterator<Item = (Slot, &str)> {
        let width = self.tasks.len();
        self.cells.iter().enumerate().filter_map(move |(i, cell)| {
            cell.as_deref()
                .map(|person| (Slot::new(i / width, i % width), person))
        })
    }

    fn offset(&self, slot: Slot) -> Option<usize> {
        (slot.day < self.days.len() && slot.task < self.tasks.len())
            .then(|| slot.day * self.tasks.len() + slot.task)
    }
}

fn index_labels(labels: &[String]) -> HashMap<String, usize> {
    let mut index = HashMap::with_capacity(labels.len());
    for (i, label) in labels.iter().enumerate() {
        // First occurrence wins; duplicates are rejected by validation.
        index.entry(label.clone()).or_insert(i);
    }
    index
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> AssignmentTable {
        AssignmentTable::new(["Mon", "Tue", "Wed"], ["Clean", "Cook"])
    }

    #[test]
    fn test_set_and_get() {
        let mut table = sample();
        assert!(table.set(Slot::new(1, 0), "Alice").is_none());
        assert_eq!(table.get(Slot::new(1, 0)), Some("Alice"));
        assert_eq!(table.lookup("Tue", "Clean"), Some("Alice"));
        assert_eq!(table.get(Slot::new(0, 0)), None);

        let previous = table.set(Slot::new(1, 0), "Bob");
        assert_eq!(previous.as_deref(), Some("Alice"));
    }

    #[test]
    fn test_unknown_labels_read_as_unfilled() {
        let mut table = sample();
        table.set(Slot::new(0, 1), "Alice");
        assert_eq!(table.lookup("Sun", "Cook"), None);
        assert_eq!(table.lookup("Mon", "Sweep"), None);
        assert!(!table.assign("Sun", "Cook", "Bob"));
        assert!(table.set(Slot::new(7, 0), "Bob").is_none());
        assert_eq!(table.filled_count(), 1);
    }

    #[test]
    fn test_counts() {
        let mut table = sample();
        table.assign("Mon", "Clean", "Alice");
        table.assign("Tue", "Clean", "Alice");
        table.assign("Tue", "Cook", "Bob");

        assert_eq!(table.filled_count(), 3);
        assert_eq!(table.count_for("Alice"), 2);
        assert_eq!(table.count_for("Carol"), 0);
        let counts = table.counts();
        assert_eq!(counts["Alice"], 2);
        assert_eq!(counts["Bob"], 1);
    }

    #[test]
    fn test_iter_filled_is_day_major() {
        let mut table = sample();
        table.assign("Wed", "Clean", "C");
        table.assign("Mon", "Cook", "B");
        table.assign("Mon", "Clean", "A");

        let order: Vec<_> = table.iter_filled().map(|(_, p)| p).collect();
        assert_eq!(order, vec!["A", "B", "C"]);
    }
}
