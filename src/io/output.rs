//! Roster writer.

use std::io::Write;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{Result, RosterError};
use crate::models::{AssignmentTable, Slot};

/// Row orientation of a written table.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum Orientation {
    /// Header `Day`; one row per day, one column per task.
    #[default]
    DayRows,
    /// Header `Task`; one row per task, one column per day.
    TaskRows,
}

/// Lays a table out as CSV rows, header first.
///
/// Rows and columns follow the table's day and task order. Empty cells are
/// written as blanks.
pub fn table_rows(table: &AssignmentTable, orientation: Orientation) -> Vec<Vec<String>> {
    let cell = |day: usize, task: usize| {
        table
            .get(Slot::new(day, task))
            .unwrap_or_default()
            .to_string()
    };

    let mut rows = Vec::new();
    match orientation {
        Orientation::DayRows => {
            rows.push(header("Day", table.tasks()));
            for (d, day) in table.days().iter().enumerate() {
                let mut row = vec![day.clone()];
                row.extend((0..table.tasks().len()).map(|t| cell(d, t)));
                rows.push(row);
            }
        }
        Orientation::TaskRows => {
            rows.push(header("Task", table.days()));
            for (t, task) in table.tasks().iter().enumerate() {
                let mut row = vec![task.clone()];
                row.extend((0..table.days().len()).map(|d| cell(d, t)));
                rows.push(row);
            }
        }
    }
    rows
}

fn header(corner: &str, labels: &[String]) -> Vec<String> {
    std::iter::once(corner.to_string())
        .chain(labels.iter().cloned())
        .collect()
}

/// Writes a table as CSV to any sink.
pub fn write_table<W: Write>(
    table: &AssignmentTable,
    orientation: Orientation,
    sink: W,
) -> csv::Result<()> {
    let mut wtr = csv::Writer::from_writer(sink);
    for row in table_rows(table, orientation) {
        wtr.write_record(&row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Writes a table as CSV to a file, replacing it.
pub fn save_table(table: &AssignmentTable, orientation: Orientation, path: &Path) -> Result<()> {
    let to_error = |source: csv::Error| RosterError::Output {
        path: path.to_path_buf(),
        source,
    };
    let file = std::fs::File::create(path).map_err(|e| to_error(e.into()))?;
    write_table(table, orientation, file).map_err(to_error)?;
    info!(path = %path.display(), ?orientation, "roster written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::history::parse_prior;

    fn sample() -> AssignmentTable {
        let mut table = AssignmentTable::new(["Mon", "Tue"], ["Clean", "Cook"]);
        table.assign("Mon", "Clean", "Alice");
        table.assign("Tue", "Cook", "Bob");
        table
    }

    fn render(orientation: Orientation) -> String {
        let mut buf = Vec::new();
        write_table(&sample(), orientation, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_day_rows() {
        assert_eq!(
            render(Orientation::DayRows),
            "Day,Clean,Cook\nMon,Alice,\nTue,,Bob\n"
        );
    }

    #[test]
    fn test_task_rows() {
        assert_eq!(
            render(Orientation::TaskRows),
            "Task,Mon,Tue\nClean,Alice,\nCook,,Bob\n"
        );
    }

    #[test]
    fn test_output_is_readable_as_history() {
        for orientation in [Orientation::DayRows, Orientation::TaskRows] {
            let text = render(orientation);
            let prior = parse_prior(text.as_bytes(), Path::new("out.csv")).unwrap();
            let table = prior.table.unwrap();
            assert_eq!(table.lookup("Mon", "Clean"), Some("Alice"));
            assert_eq!(table.lookup("Tue", "Cook"), Some("Bob"));
            assert_eq!(table.filled_count(), 2);
        }
    }

    #[test]
    fn test_save_to_unwritable_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("out.csv");
        let err = save_table(&sample(), Orientation::DayRows, &path).unwrap_err();
        assert!(matches!(err, RosterError::Output { .. }));
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_orientation_serde() {
        let o: Orientation = serde_json::from_str(r#""task-rows""#).unwrap();
        assert_eq!(o, Orientation::TaskRows);
        assert_eq!(
            serde_json::to_string(&Orientation::DayRows).unwrap(),
            r#""day-rows""#
        );
    }
}
