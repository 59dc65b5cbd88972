//! Rostering domain models.
//!
//! Provides the core data types for representing a weekly rostering
//! problem and its solution.
//!
//! # Domain Mappings
//!
//! | u-roster | Office | Clinic | Warehouse |
//! |----------|--------|--------|-----------|
//! | Person | Staff member | Nurse | Operator |
//! | Task | Kitchen duty | Triage desk | Forklift shift |
//! | Week | Work week | Rota period | Shift cycle |
//! | AssignmentTable | Duty sheet | Rota | Shift plan |

mod load;
mod person;
mod prior;
mod table;
mod task;
mod week;

pub use load::LoadTracker;
pub use person::Person;
pub use prior::PriorPeriod;
pub use table::{AssignmentTable, Slot};
pub use task::{Task, TaskRule};
pub use week::Week;
