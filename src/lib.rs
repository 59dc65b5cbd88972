//! Weekly duty rostering for the U-Engine ecosystem.
//!
//! Assigns recurring tasks to people over one week, subject to skill
//! requirements, availability, rotation preferences and load balance.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Person`, `Task`, `Week`, `AssignmentTable`,
//!   `LoadTracker`, `PriorPeriod`
//! - **`rules`**: Eligibility predicate, rotation guard, band selector
//! - **`scheduler`**: Category-ordered roster builder and KPIs
//! - **`validation`**: Input integrity checks (duplicate ids, unknown days,
//!   broken pairings)
//! - **`io`**: JSON configuration, CSV history and CSV output
//!
//! # References
//!
//! - Ernst et al. (2004), "Staff scheduling and rostering: A review of
//!   applications, methods and models"
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 13

pub mod error;
pub mod io;
pub mod models;
pub mod rules;
pub mod scheduler;
pub mod validation;

pub use error::{Result, RosterError};
