//! Candidate filtering and selection rules.
//!
//! Each slot of the roster is staffed by narrowing the roster in three
//! steps:
//!
//! 1. **Eligibility** (hard): required skills held and not unavailable.
//! 2. **Rotation** (soft): no repeat of last period's holder on the same day,
//!    no repeat of yesterday's holder in this period.
//! 3. **Selection**: random pick within a band above the minimum load.
//!
//! # Usage
//!
//! ```
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use u_roster::models::{LoadTracker, Person, Task};
//! use u_roster::rules::{is_eligible, BandSelector};
//!
//! let people = vec![Person::new("Alice").with_skill("X"), Person::new("Bob")];
//! let task = Task::new("Clean").requiring("X");
//! let candidates: Vec<&Person> = people
//!     .iter()
//!     .filter(|p| is_eligible(p, &task, "Monday"))
//!     .collect();
//!
//! let mut rng = StdRng::seed_from_u64(0);
//! let chosen = BandSelector::new().select(&candidates, &LoadTracker::new(), &mut rng);
//! assert_eq!(chosen.map(|p| p.name.as_str()), Some("Alice"));
//! ```
//!
//! # References
//!
//! - Ernst et al. (2004), "Staff scheduling and rostering: A review of
//!   applications, methods and models"

mod eligibility;
mod rotation;
mod selector;

pub use eligibility::{has_required_skills, is_eligible};
pub use rotation::{RotationGuard, RotationViolation};
pub use selector::{BandSelector, DEFAULT_BAND_RATIO};
