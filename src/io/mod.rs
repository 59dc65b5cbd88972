//! File boundaries of a run.
//!
//! - **`config`**: JSON roster document (fatal on any failure)
//! - **`history`**: prior-period CSV (failures are recoverable)
//! - **`output`**: roster CSV in either orientation (fatal on failure)

pub mod config;
pub mod history;
pub mod output;

pub use config::{load_config, HistorySettings, OutputSettings, RosterConfig};
pub use history::{load_prior, parse_prior};
pub use output::{save_table, table_rows, write_table, Orientation};
