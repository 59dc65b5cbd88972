//! Prior-period reader.
//!
//! Three CSV layouts are recognised by the first header cell:
//!
//! | Header | Rows | Yields |
//! |--------|------|--------|
//! | `Task, <day>...` | one per task | table + counts |
//! | `Day, <task>...` | one per day | table + counts |
//! | `Day, Person` | one per assignment | counts only |

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::debug;

use crate::error::{Result, RosterError};
use crate::models::{AssignmentTable, PriorPeriod};

/// Reads a prior-period file.
pub fn load_prior(path: &Path) -> Result<PriorPeriod> {
    let file = std::fs::File::open(path).map_err(|e| RosterError::HistoryRead {
        path: path.to_path_buf(),
        source: e.into(),
    })?;
    let prior = parse_prior(file, path)?;
    debug!(
        path = %path.display(),
        has_table = prior.table.is_some(),
        people = prior.counts.len(),
        "prior period loaded"
    );
    Ok(prior)
}

/// Parses a prior period from any CSV source. `path` is used for errors only.
pub fn parse_prior<R: Read>(reader: R, path: &Path) -> Result<PriorPeriod> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let records = rdr
        .records()
        .collect::<std::result::Result<Vec<StringRecord>, _>>()
        .map_err(|source| RosterError::HistoryRead {
            path: path.to_path_buf(),
            source,
        })?;

    let Some((header, rows)) = records.split_first() else {
        return Err(format_error(path, "file is empty"));
    };

    let first = header
        .get(0)
        .unwrap_or_default()
        .trim_start_matches('\u{feff}');
    let labels: Vec<&str> = header.iter().skip(1).collect();

    if first.eq_ignore_ascii_case("task") {
        Ok(PriorPeriod::from_table(task_rows(&labels, rows)))
    } else if first.eq_ignore_ascii_case("day") {
        if labels.len() == 1 && labels[0].eq_ignore_ascii_case("person") {
            Ok(PriorPeriod::from_counts(flat_counts(rows)))
        } else {
            Ok(PriorPeriod::from_table(day_rows(&labels, rows)))
        }
    } else {
        Err(format_error(
            path,
            format!("expected header starting with 'Task' or 'Day', found '{first}'"),
        ))
    }
}

/// `Task, <day>...` layout.
fn task_rows(days: &[&str], rows: &[StringRecord]) -> AssignmentTable {
    let tasks: Vec<&str> = rows.iter().map(|r| r.get(0).unwrap_or_default()).collect();
    let mut table = AssignmentTable::new(days.iter().copied(), tasks);
    for row in rows {
        let task = row.get(0).unwrap_or_default();
        for (day, person) in days.iter().zip(row.iter().skip(1)) {
            if !person.is_empty() {
                table.assign(day, task, person);
            }
        }
    }
    table
}

/// `Day, <task>...` layout.
fn day_rows(tasks: &[&str], rows: &[StringRecord]) -> AssignmentTable {
    let days: Vec<&str> = rows.iter().map(|r| r.get(0).unwrap_or_default()).collect();
    let mut table = AssignmentTable::new(days, tasks.iter().copied());
    for row in rows {
        let day = row.get(0).unwrap_or_default();
        for (task, person) in tasks.iter().zip(row.iter().skip(1)) {
            if !person.is_empty() {
                table.assign(day, task, person);
            }
        }
    }
    table
}

/// `Day, Person` layout: one count per row.
fn flat_counts(rows: &[StringRecord]) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for person in rows.iter().filter_map(|r| r.get(1)).filter(|p| !p.is_empty()) {
        *counts.entry(person.to_string()).or_insert(0) += 1;
    }
    counts
}

fn format_error(path: &Path, reason: impl Into<String>) -> RosterError {
    RosterError::HistoryFormat {
        path: path.to_path_buf(),
        reason: reason.into(),
    }
}
