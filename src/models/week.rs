//! Week model.
//!
//! The week is the ordered sequence of day labels making up one period.
//! It fixes the iteration order of the builder, the column order of the
//! output, and the "previous day" relation used by the rotation guard.

use serde::{Deserialize, Serialize};

/// Ordered day labels of one scheduling period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Week {
    days: Vec<String>,
}

impl Week {
    /// Creates a week from ordered day labels.
    pub fn new<I, S>(days: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            days: days.into_iter().map(Into::into).collect(),
        }
    }

    /// Monday through Friday.
    pub fn work_week() -> Self {
        Self::new(["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"])
    }

    /// Day labels in week order.
    pub fn days(&self) -> &[String] {
        &self.days
    }

    /// Number of days.
    #[inline]
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Whether the week has no days.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Label of the day at `index`.
    pub fn day(&self, index: usize) -> Option<&str> {
        self.days.get(index).map(String::as_str)
    }

    /// Position of a day label in week order.
    pub fn index_of(&self, day: &str) -> Option<usize> {
        self.days.iter().position(|d| d == day)
    }

    /// Whether the label belongs to this week.
    pub fn contains(&self, day: &str) -> bool {
        self.index_of(day).is_some()
    }

    /// Index of the day immediately preceding `index`, if any.
    ///
    /// The first day of the week has no predecessor: rotation does not wrap
    /// around into the previous period.
    pub fn previous(&self, index: usize) -> Option<usize> {
        index.checked_sub(1).filter(|&i| i < self.days.len())
    }

    /// Iterates `(index, label)` pairs in week order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> {
        self.days.iter().enumerate().map(|(i, d)| (i, d.as_str()))
    }
}

impl Default for Week {
    fn default() -> Self {
        Self::work_week()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_week_order_is_declaration_order() {
        // Deliberately not alphabetical
        let week = Week::new(["Wed", "Mon", "Fri"]);
        assert_eq!(week.index_of("Wed"), Some(0));
        assert_eq!(week.index_of("Mon"), Some(1));
        assert_eq!(week.index_of("Fri"), Some(2));
        assert_eq!(week.day(2), Some("Fri"));
        assert!(!week.contains("Tue"));
    }

    #[test]
    fn test_previous_day() {
        let week = Week::work_week();
        assert_eq!(week.previous(0), None);
        assert_eq!(week.previous(1), Some(0));
        assert_eq!(week.previous(4), Some(3));
        assert_eq!(week.previous(9), None);
    }

    #[test]
    fn test_serde_as_plain_list() {
        let week: Week = serde_json::from_str(r#"["Mon","Tue"]"#).unwrap();
        assert_eq!(week.len(), 2);
        assert_eq!(serde_json::to_string(&week).unwrap(), r#"["Mon","Tue"]"#);
    }
}
