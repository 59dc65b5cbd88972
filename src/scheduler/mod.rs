//! Roster builder and KPI evaluation.
//!
//! # Algorithm
//!
//! `RosterScheduler` resolves tasks in three phases: same-person-all-period
//! tasks, then paired tasks, then everything else. Within a phase it is a
//! greedy, slot-by-slot heuristic with randomized near-minimum tie-breaking.
//! It is not optimal, but keeps loads balanced and rotation varied.
//!
//! # Randomness
//!
//! Every entry point takes an explicit `&mut impl Rng`. Production callers
//! pass a time-seeded generator; tests pass a seeded `StdRng`.
//!
//! # KPI
//!
//! `RosterKpi` computes fill rate and load distribution metrics.

mod builder;
mod kpi;
mod special;

pub use builder::{
    categorize, RosterOutcome, RosterRequest, RosterRun, RosterScheduler, TaskCategory,
    UnfilledReason, UnfilledSlot,
};
pub use kpi::RosterKpi;
