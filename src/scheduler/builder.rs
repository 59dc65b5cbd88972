//! Category-ordered roster builder.
//!
//! # Algorithm
//!
//! 1. Classify every task into exactly one category.
//! 2. Resolve same-person-all-period tasks.
//! 3. Resolve paired tasks, mirroring each primary's assignee onto its
//!    companion, in catalog order and week order.
//! 4. Resolve the remaining tasks in catalog order, day by day in week order:
//!    eligible candidates → rotation filter → band selection. When rotation
//!    leaves nobody, retry the slot without it; if still nobody, leave the
//!    slot empty and report it.
//!
//! # Complexity
//! O(t * d * p) where t=tasks, d=days, p=people.

use std::fmt;

use rand::Rng;
use tracing::{debug, info, warn};

use crate::models::{
    AssignmentTable, LoadTracker, Person, PriorPeriod, Slot, Task, TaskRule, Week,
};
use crate::rules::{is_eligible, BandSelector, RotationGuard};

/// Input container for one rostering run.
#[derive(Debug, Clone)]
pub struct RosterRequest {
    /// Ordered day labels of the period.
    pub week: Week,
    /// Roster of people.
    pub people: Vec<Person>,
    /// Task catalog, in precedence order.
    pub tasks: Vec<Task>,
}

impl RosterRequest {
    /// Creates a new request.
    pub fn new(week: Week, people: Vec<Person>, tasks: Vec<Task>) -> Self {
        Self {
            week,
            people,
            tasks,
        }
    }

    /// Adds a person.
    pub fn with_person(mut self, person: Person) -> Self {
        self.people.push(person);
        self
    }

    /// Adds a task.
    pub fn with_task(mut self, task: Task) -> Self {
        self.tasks.push(task);
        self
    }

    /// Day indices on which a task occurs, in week order.
    pub fn occurrence_days(&self, task: &Task) -> Vec<usize> {
        self.week
            .iter()
            .filter(|(_, day)| task.occurs_on(day))
            .map(|(i, _)| i)
            .collect()
    }

    /// Total number of slots to staff.
    pub fn slot_count(&self) -> usize {
        self.tasks.iter().map(|t| self.occurrence_days(t).len()).sum()
    }
}

/// Processing phase a task is resolved in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskCategory {
    /// One person for every occurrence in the period.
    WholePeriod,
    /// Staffed day by day; assignee mirrored onto a companion.
    PairedPrimary,
    /// Mirrors a paired primary; never staffed on its own.
    Companion,
    /// Staffed day by day in the general pass.
    General,
}

/// Why a slot ended up empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnfilledReason {
    /// Nobody was eligible (skills, availability or cap).
    NoEligibleCandidate,
    /// Nobody qualified to hold the task for the whole period.
    NoQualifiedForPeriod,
    /// The paired primary had no assignee to mirror on that day.
    PrimaryUnfilled,
}

/// Diagnostic for a slot left empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnfilledSlot {
    /// Task name.
    pub task: String,
    /// Day label.
    pub day: String,
    /// Why nobody was assigned.
    pub reason: UnfilledReason,
}

impl fmt::Display for UnfilledReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnfilledReason::NoEligibleCandidate => f.write_str("no eligible candidate"),
            UnfilledReason::NoQualifiedForPeriod => {
                f.write_str("nobody qualified for the whole period")
            }
            UnfilledReason::PrimaryUnfilled => f.write_str("paired task has no assignee"),
        }
    }
}

impl fmt::Display for UnfilledSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} on {}: {}", self.task, self.day, self.reason)
    }
}

/// Result of a rostering run.
#[derive(Debug, Clone)]
pub struct RosterOutcome {
    /// Completed assignment table.
    pub table: AssignmentTable,
    /// Final loads (history seed plus this run).
    pub load: LoadTracker,
    /// Slots left empty, in the order they were resolved.
    pub unfilled: Vec<UnfilledSlot>,
    /// Slots staffed only after dropping the rotation guard.
    pub relaxed: Vec<Slot>,
}

impl RosterOutcome {
    /// Whether every slot was staffed.
    pub fn is_complete(&self) -> bool {
        self.unfilled.is_empty()
    }
}

/// Weekly roster scheduler.
///
/// # Example
///
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use u_roster::models::{Person, Task, Week};
/// use u_roster::scheduler::{RosterRequest, RosterScheduler};
///
/// let request = RosterRequest::new(
///     Week::new(["Mon", "Tue"]),
///     vec![
///         Person::new("Alice").with_skill("X"),
///         Person::new("Bob").with_skill("X").unavailable_on("Tue"),
///     ],
///     vec![Task::new("Clean").requiring("X")],
/// );
///
/// let mut rng = StdRng::seed_from_u64(1);
/// let outcome = RosterScheduler::new().schedule(&request, None, &mut rng);
/// assert_eq!(outcome.table.lookup("Tue", "Clean"), Some("Alice"));
/// assert!(outcome.is_complete());
/// ```
#[derive(Debug, Clone)]
pub struct RosterScheduler {
    selector: BandSelector,
    rotation: RotationGuard,
    seed_load_from_history: bool,
}

impl RosterScheduler {
    /// Creates a scheduler with the default band, full rotation guard and
    /// history-seeded loads.
    pub fn new() -> Self {
        Self {
            selector: BandSelector::new(),
            rotation: RotationGuard::new(),
            seed_load_from_history: true,
        }
    }

    /// Sets the candidate selector.
    pub fn with_selector(mut self, selector: BandSelector) -> Self {
        self.selector = selector;
        self
    }

    /// Sets the rotation guard.
    pub fn with_rotation(mut self, rotation: RotationGuard) -> Self {
        self.rotation = rotation;
        self
    }

    /// Whether loads start from the prior period's counts (default) or zero.
    pub fn with_history_seeding(mut self, enabled: bool) -> Self {
        self.seed_load_from_history = enabled;
        self
    }

    /// Starts a run without resolving anything.
    pub fn start<'a>(
        &self,
        request: &'a RosterRequest,
        prior: Option<&'a PriorPeriod>,
    ) -> RosterRun<'a> {
        let load = match prior {
            Some(p) if self.seed_load_from_history => {
                LoadTracker::seeded(p.counts.iter().map(|(k, v)| (k.clone(), *v)))
            }
            _ => LoadTracker::new(),
        };
        let (categories, companions) = categorize(&request.tasks);

        RosterRun {
            request,
            prior: prior.and_then(|p| p.table.as_ref()),
            selector: self.selector,
            rotation: self.rotation,
            categories,
            companions,
            resolved: vec![false; request.tasks.len()],
            table: AssignmentTable::for_catalog(&request.week, &request.tasks),
            load,
            unfilled: Vec::new(),
            relaxed: Vec::new(),
        }
    }

    /// Builds a complete roster.
    pub fn schedule<R: Rng + ?Sized>(
        &self,
        request: &RosterRequest,
        prior: Option<&PriorPeriod>,
        rng: &mut R,
    ) -> RosterOutcome {
        let mut run = self.start(request, prior);
        run.fill_whole_period(rng);
        run.fill_paired(rng);
        run.fill_general(rng);
        let outcome = run.finish();

        info!(
            filled = outcome.table.filled_count(),
            unfilled = outcome.unfilled.len(),
            relaxed = outcome.relaxed.len(),
            "roster complete"
        );
        outcome
    }
}

impl Default for RosterScheduler {
    fn default() -> Self {
        Self::new()
    }
}

/// Classifies tasks into categories and resolves companion indices.
///
/// A paired task only becomes a primary when its companion exists, is a
/// different task, carries no rule of its own, and is not already claimed.
/// Otherwise it falls back to the general pass.
pub fn categorize(tasks: &[Task]) -> (Vec<TaskCategory>, Vec<Option<usize>>) {
    let mut categories: Vec<TaskCategory> = tasks
        .iter()
        .map(|t| match t.rule {
            TaskRule::SamePersonAllPeriod => TaskCategory::WholePeriod,
            _ => TaskCategory::General,
        })
        .collect();
    let mut companions = vec![None; tasks.len()];

    for (i, task) in tasks.iter().enumerate() {
        let Some(name) = task.companion() else {
            continue;
        };
        match tasks.iter().position(|t| t.name == name) {
            Some(j)
                if j != i
                    && tasks[j].rule == TaskRule::None
                    && categories[j] == TaskCategory::General =>
            {
                categories[i] = TaskCategory::PairedPrimary;
                categories[j] = TaskCategory::Companion;
                companions[i] = Some(j);
            }
            _ => warn!(
                task = %task.name,
                companion = name,
                "companion cannot be paired; staffing task on its own"
            ),
        }
    }

    (categories, companions)
}

/// In-progress rostering run.
///
/// Owns the table and load counter being built. Each fill phase marks the
/// tasks it resolves, so calling a phase again is a no-op.
#[derive(Debug)]
pub struct RosterRun<'a> {
    pub(super) request: &'a RosterRequest,
    pub(super) prior: Option<&'a AssignmentTable>,
    pub(super) selector: BandSelector,
    pub(super) rotation: RotationGuard,
    pub(super) categories: Vec<TaskCategory>,
    pub(super) companions: Vec<Option<usize>>,
    pub(super) resolved: Vec<bool>,
    pub(super) table: AssignmentTable,
    pub(super) load: LoadTracker,
    pub(super) unfilled: Vec<UnfilledSlot>,
    pub(super) relaxed: Vec<Slot>,
}

impl<'a> RosterRun<'a> {
    /// Category assigned to each task, in catalog order.
    pub fn categories(&self) -> &[TaskCategory] {
        &self.categories
    }

    /// Table built so far.
    pub fn table(&self) -> &AssignmentTable {
        &self.table
    }

    /// Loads so far.
    pub fn load(&self) -> &LoadTracker {
        &self.load
    }

    /// Whether a task has been resolved by some phase.
    pub fn is_resolved(&self, task: usize) -> bool {
        self.resolved.get(task).copied().unwrap_or(false)
    }

    /// Staffs every unresolved general task.
    pub fn fill_general<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let request = self.request;
        for (t, task) in request.tasks.iter().enumerate() {
            if self.categories[t] != TaskCategory::General || self.resolved[t] {
                continue;
            }
            debug!(task = %task.name, "staffing task");

            for d in request.occurrence_days(task) {
                let slot = Slot::new(d, t);
                match self.pick(slot, None, rng) {
                    Some(person) => self.place(slot, person),
                    None => self.report_unfilled(slot, UnfilledReason::NoEligibleCandidate),
                }
            }
            self.resolved[t] = true;
        }
    }

    /// Finishes the run.
    pub fn finish(self) -> RosterOutcome {
        RosterOutcome {
            table: self.table,
            load: self.load,
            unfilled: self.unfilled,
            relaxed: self.relaxed,
        }
    }

    /// Chooses a person for `slot`.
    ///
    /// `mirror` names a companion task the chosen person will also hold on
    /// the same day; candidates must then be eligible for it as well.
    pub(super) fn pick<R: Rng + ?Sized>(
        &mut self,
        slot: Slot,
        mirror: Option<usize>,
        rng: &mut R,
    ) -> Option<&'a Person> {
        let request = self.request;
        let task = &request.tasks[slot.task];
        let day = request.week.day(slot.day)?;
        let mirrored = mirror.map(|c| &request.tasks[c]);
        let needed = 1 + usize::from(mirrored.is_some());

        let candidates: Vec<&'a Person> = request
            .people
            .iter()
            .filter(|p| is_eligible(p, task, day))
            .filter(|p| mirrored.map_or(true, |c| is_eligible(p, c, day)))
            .filter(|p| p.has_capacity_for(self.load.run_count(&p.name), needed))
            .collect();

        if candidates.is_empty() {
            return None;
        }

        if self.rotation.is_active() {
            let compliant: Vec<&'a Person> = candidates
                .iter()
                .copied()
                .filter(|p| {
                    !self
                        .rotation
                        .violates(&p.name, slot, &request.week, &self.table, self.prior)
                })
                .collect();
            if let Some(person) = self.selector.select(&compliant, &self.load, rng) {
                return Some(person);
            }
            warn!(
                task = %task.name,
                day,
                "no rotation-compliant candidate; relaxing rotation"
            );
            self.relaxed.push(slot);
        }

        self.selector.select(&candidates, &self.load, rng)
    }

    /// Writes a person into a slot and counts it.
    pub(super) fn place(&mut self, slot: Slot, person: &Person) {
        debug!(
            task = %self.request.tasks[slot.task].name,
            day = self.request.week.day(slot.day).unwrap_or_default(),
            person = %person.name,
            "assigned"
        );
        self.table.set(slot, person.name.clone());
        self.load.increment(&person.name, 1);
    }

    /// Records an empty slot.
    pub(super) fn report_unfilled(&mut self, slot: Slot, reason: UnfilledReason) {
        let task = self.request.tasks[slot.task].name.clone();
        let day = self
            .request
            .week
            .day(slot.day)
            .unwrap_or_default()
            .to_string();
        debug!(task = %task, day = %day, %reason, "slot left unfilled");
        self.unfilled.push(UnfilledSlot { task, day, reason });
    }
}
