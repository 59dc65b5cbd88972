//! Roster quality metrics (KPIs).
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Fill rate | Filled slots / total slots |
//! | Relaxed slots | Slots staffed only after dropping rotation |
//! | Load spread | Max − min tasks assigned this run, across the roster |
//! | Avg load | Mean tasks assigned this run per person |

use super::{RosterOutcome, RosterRequest};

/// Roster performance indicators.
///
/// Loads count only assignments made in this run, not seeded history.
#[derive(Debug, Clone)]
pub struct RosterKpi {
    /// Slots that needed a person.
    pub total_slots: usize,
    /// Slots that received a person.
    pub filled_slots: usize,
    /// Fraction of slots filled (0.0..1.0).
    pub fill_rate: f64,
    /// Slots staffed by relaxing rotation.
    pub relaxed_slots: usize,
    /// Tasks assigned this run, per person in roster order.
    pub load_by_person: Vec<(String, usize)>,
    /// Smallest per-person load.
    pub min_load: usize,
    /// Largest per-person load.
    pub max_load: usize,
    /// Mean per-person load.
    pub avg_load: f64,
}

impl RosterKpi {
    /// Computes KPIs from a finished run and its request.
    pub fn calculate(outcome: &RosterOutcome, request: &RosterRequest) -> Self {
        let total_slots = request.slot_count();
        let filled_slots = outcome.table.filled_count();

        let load_by_person: Vec<(String, usize)> = request
            .people
            .iter()
            .map(|p| (p.name.clone(), outcome.load.run_count(&p.name)))
            .collect();

        let min_load = load_by_person.iter().map(|(_, n)| *n).min().unwrap_or(0);
        let max_load = load_by_person.iter().map(|(_, n)| *n).max().unwrap_or(0);
        let avg_load = if load_by_person.is_empty() {
            0.0
        } else {
            load_by_person.iter().map(|(_, n)| *n).sum::<usize>() as f64
                / load_by_person.len() as f64
        };

        let fill_rate = if total_slots == 0 {
            1.0
        } else {
            filled_slots as f64 / total_slots as f64
        };

        Self {
            total_slots,
            filled_slots,
            fill_rate,
            relaxed_slots: outcome.relaxed.len(),
            load_by_person,
            min_load,
            max_load,
            avg_load,
        }
    }

    /// Difference between the busiest and the least busy person.
    pub fn load_spread(&self) -> usize {
        self.max_load - self.min_load
    }

    /// Whether the roster meets the given quality thresholds.
    pub fn meets_thresholds(&self, min_fill_rate: f64, max_spread: usize) -> bool {
        self.fill_rate >= min_fill_rate && self.load_spread() <= max_spread
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Person, Task, Week};
    use crate::scheduler::RosterScheduler;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_kpi_full_roster() {
        let request = RosterRequest::new(
            Week::work_week(),
            vec![Person::new("A"), Person::new("B")],
            vec![Task::new("Dishes"), Task::new("Trash")],
        );
        let mut rng = StdRng::seed_from_u64(8);
        let outcome = RosterScheduler::new().schedule(&request, None, &mut rng);
        let kpi = RosterKpi::calculate(&outcome, &request);

        assert_eq!(kpi.total_slots, 10);
        assert_eq!(kpi.filled_slots, 10);
        assert!((kpi.fill_rate - 1.0).abs() < 1e-10);
        assert!((kpi.avg_load - 5.0).abs() < 1e-10);
        assert_eq!(kpi.load_by_person[0].0, "A");
        assert_eq!(
            kpi.load_by_person.iter().map(|(_, n)| n).sum::<usize>(),
            10
        );
    }

    #[test]
    fn test_kpi_partial_fill() {
        let request = RosterRequest::new(
            Week::new(["Mon", "Tue"]),
            vec![Person::new("A").unavailable_on("Tue")],
            vec![Task::new("Dishes")],
        );
        let mut rng = StdRng::seed_from_u64(0);
        let outcome = RosterScheduler::new().schedule(&request, None, &mut rng);
        let kpi = RosterKpi::calculate(&outcome, &request);

        assert_eq!(kpi.filled_slots, 1);
        assert!((kpi.fill_rate - 0.5).abs() < 1e-10);
        assert!(!kpi.meets_thresholds(0.9, 10));
        assert!(kpi.meets_thresholds(0.5, 0));
    }

    #[test]
    fn test_kpi_empty() {
        let request = RosterRequest::new(Week::new(["Mon"]), vec![], vec![]);
        let mut rng = StdRng::seed_from_u64(0);
        let outcome = RosterScheduler::new().schedule(&request, None, &mut rng);
        let kpi = RosterKpi::calculate(&outcome, &request);

        assert_eq!(kpi.total_slots, 0);
        assert!((kpi.fill_rate - 1.0).abs() < 1e-10);
        assert_eq!(kpi.load_spread(), 0);
        assert!((kpi.avg_load - 0.0).abs() < 1e-10);
    }
}
