//! Pre-pass handlers for tasks with fixed semantics.
//!
//! - **Same person all period**: one skill-qualified person, picked at
//!   random, holds every occurrence of the task. Availability is not
//!   checked since the assignment spans the whole period. The holder's load
//!   grows by the length of the week, however many days the task occurs.
//! - **Paired**: each day's primary assignee is mirrored onto the companion
//!   task. The companion is never staffed on its own.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, info};

use super::builder::{RosterRun, TaskCategory, UnfilledReason};
use crate::models::{Person, Slot};
use crate::rules::has_required_skills;

impl RosterRun<'_> {
    /// Resolves every same-person-all-period task.
    pub fn fill_whole_period<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let request = self.request;
        for (t, task) in request.tasks.iter().enumerate() {
            if self.categories[t] != TaskCategory::WholePeriod || self.resolved[t] {
                continue;
            }
            self.resolved[t] = true;

            let days = request.occurrence_days(task);
            if days.is_empty() {
                continue;
            }

            let bulk = request.week.len();
            let mut qualified: Vec<&Person> = request
                .people
                .iter()
                .filter(|p| has_required_skills(p, task))
                .filter(|p| p.has_capacity_for(self.load.run_count(&p.name), bulk))
                .collect();
            qualified.shuffle(rng);

            match qualified.first() {
                Some(person) => {
                    for &d in &days {
                        self.table.set(Slot::new(d, t), person.name.clone());
                    }
                    self.load.increment(&person.name, bulk);
                    info!(
                        task = %task.name,
                        person = %person.name,
                        days = days.len(),
                        load = bulk,
                        "assigned for the whole period"
                    );
                }
                None => {
                    for &d in &days {
                        self.report_unfilled(Slot::new(d, t), UnfilledReason::NoQualifiedForPeriod);
                    }
                }
            }
        }
    }

    /// Resolves every paired primary together with its companion.
    pub fn fill_paired<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let request = self.request;
        for (t, task) in request.tasks.iter().enumerate() {
            if self.categories[t] != TaskCategory::PairedPrimary || self.resolved[t] {
                continue;
            }
            let Some(c) = self.companions[t] else {
                continue;
            };
            let companion = &request.tasks[c];
            debug!(task = %task.name, companion = %companion.name, "staffing paired task");

            for (d, day) in request.week.iter() {
                let primary_occurs = task.occurs_on(day);
                let companion_occurs = companion.occurs_on(day);
                if !primary_occurs {
                    if companion_occurs {
                        self.report_unfilled(Slot::new(d, c), UnfilledReason::PrimaryUnfilled);
                    }
                    continue;
                }

                let slot = Slot::new(d, t);
                let mirror = companion_occurs.then_some(c);
                match self.pick(slot, mirror, rng) {
                    Some(person) => {
                        self.place(slot, person);
                        if companion_occurs {
                            self.place(Slot::new(d, c), person);
                        }
                    }
                    None => {
                        self.report_unfilled(slot, UnfilledReason::NoEligibleCandidate);
                        if companion_occurs {
                            self.report_unfilled(
                                Slot::new(d, c),
                                UnfilledReason::PrimaryUnfilled,
                            );
                        }
                    }
                }
            }

            self.resolved[t] = true;
            self.resolved[c] = true;
        }
    }
}
