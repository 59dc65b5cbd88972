//! Prior-period history.

use std::collections::HashMap;

use super::AssignmentTable;

/// What is known about the previous period.
///
/// A prior period may carry a full table (enabling the cross-period
/// rotation check) or only per-person counts (enough to seed loads).
/// An empty prior period is the normal state of a first run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PriorPeriod {
    /// Previous period's assignment table, if it was recorded.
    pub table: Option<AssignmentTable>,
    /// Tasks held per person in the previous period.
    pub counts: HashMap<String, usize>,
}

impl PriorPeriod {
    /// No history.
    pub fn empty() -> Self {
        Self::default()
    }

    /// History from a full table; counts are one per filled cell.
    pub fn from_table(table: AssignmentTable) -> Self {
        let counts = table.counts();
        Self {
            table: Some(table),
            counts,
        }
    }

    /// History from per-person counts only.
    pub fn from_counts(counts: HashMap<String, usize>) -> Self {
        Self {
            table: None,
            counts,
        }
    }

    /// Whether nothing is known about the previous period.
    pub fn is_empty(&self) -> bool {
        self.table.is_none() && self.counts.is_empty()
    }

    /// Historical task count of a person.
    pub fn count(&self, person: &str) -> usize {
        self.counts.get(person).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_derived_from_table() {
        let mut table = AssignmentTable::new(["Mon", "Tue"], ["Clean", "Cook"]);
        table.assign("Mon", "Clean", "Alice");
        table.assign("Tue", "Clean", "Alice");
        table.assign("Tue", "Cook", "Bob");

        let prior = PriorPeriod::from_table(table);
        assert!(!prior.is_empty());
        assert_eq!(prior.count("Alice"), 2);
        assert_eq!(prior.count("Bob"), 1);
        assert_eq!(prior.count("Carol"), 0);
    }

    #[test]
    fn test_empty() {
        assert!(PriorPeriod::empty().is_empty());
        let counts_only = PriorPeriod::from_counts(HashMap::from([("A".to_string(), 1)]));
        assert!(!counts_only.is_empty());
        assert!(counts_only.table.is_none());
    }
}
