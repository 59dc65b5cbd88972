//! Error types.
//!
//! Only startup and output failures are errors. A slot nobody can fill is
//! reported through [`crate::scheduler::UnfilledSlot`] instead, and a broken
//! history file is downgraded to an empty history by the caller.

use std::path::PathBuf;

use thiserror::Error;

use crate::validation::ValidationError;

/// Result alias for fallible roster operations.
pub type Result<T> = std::result::Result<T, RosterError>;

/// Errors raised while loading inputs or writing the roster.
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("failed to read config {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {}: {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid roster configuration: {}", join_messages(.0))]
    Invalid(Vec<ValidationError>),
    #[error("failed to read history {}: {source}", .path.display())]
    HistoryRead {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("unrecognised history layout in {}: {reason}", .path.display())]
    HistoryFormat { path: PathBuf, reason: String },
    #[error("failed to write roster {}: {source}", .path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

impl RosterError {
    /// Whether the run may continue after this error.
    ///
    /// History problems are recoverable: the run proceeds without history.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            RosterError::HistoryRead { .. } | RosterError::HistoryFormat { .. }
        )
    }

    /// Whether the history file simply does not exist.
    pub fn is_missing_history(&self) -> bool {
        match self {
            RosterError::HistoryRead { source, .. } => matches!(
                source.kind(),
                csv::ErrorKind::Io(e) if e.kind() == std::io::ErrorKind::NotFound
            ),
            _ => false,
        }
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
