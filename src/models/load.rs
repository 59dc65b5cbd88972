//! Per-person workload counter.

use std::collections::HashMap;

/// Cumulative task counts per person.
///
/// The count of a person is the sum of a seeded (historical) portion and
/// the assignments made during the current run. Counts only ever grow.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadTracker {
    seeded: HashMap<String, usize>,
    assigned: HashMap<String, usize>,
}

impl LoadTracker {
    /// Creates a tracker with every count at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a tracker seeded with historical counts.
    pub fn seeded<I, S>(history: I) -> Self
    where
        I: IntoIterator<Item = (S, usize)>,
        S: Into<String>,
    {
        let mut seeded = HashMap::new();
        for (person, count) in history {
            *seeded.entry(person.into()).or_insert(0) += count;
        }
        Self {
            seeded,
            assigned: HashMap::new(),
        }
    }

    /// Total load of a person (0 if unseen).
    pub fn count(&self, person: &str) -> usize {
        self.seeded_count(person) + self.run_count(person)
    }

    /// Historical portion of a person's load.
    pub fn seeded_count(&self, person: &str) -> usize {
        self.seeded.get(person).copied().unwrap_or(0)
    }

    /// Assignments made to a person during the current run.
    pub fn run_count(&self, person: &str) -> usize {
        self.assigned.get(person).copied().unwrap_or(0)
    }

    /// Records `by` new assignments for a person.
    pub fn increment(&mut self, person: &str, by: usize) {
        if by == 0 {
            return;
        }
        *self.assigned.entry(person.to_string()).or_insert(0) += by;
    }

    /// Total assignments made during the current run, across everyone.
    pub fn total_run_count(&self) -> usize {
        self.assigned.values().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unseen_person_is_zero() {
        let load = LoadTracker::new();
        assert_eq!(load.count("nobody"), 0);
    }

    #[test]
    fn test_seeded_and_run_counts() {
        let mut load = LoadTracker::seeded([("Alice", 3), ("Bob", 1), ("Alice", 1)]);
        assert_eq!(load.count("Alice"), 4);
        assert_eq!(load.run_count("Alice"), 0);

        load.increment("Alice", 1);
        load.increment("Carol", 5);
        assert_eq!(load.count("Alice"), 5);
        assert_eq!(load.seeded_count("Alice"), 4);
        assert_eq!(load.run_count("Alice"), 1);
        assert_eq!(load.count("Carol"), 5);
        assert_eq!(load.total_run_count(), 6);
    }

    #[test]
    fn test_increment_is_monotonic() {
        let mut load = LoadTracker::new();
        let mut last = 0;
        for by in [1, 0, 2, 1] {
            load.increment("Dana", by);
            assert!(load.count("Dana") >= last);
            last = load.count("Dana");
        }
        assert_eq!(last, 4);
    }
}
