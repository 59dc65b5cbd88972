//! Near-minimum band selection.
//!
//! # Algorithm
//!
//! 1. Find the minimum load among the candidates.
//! 2. Widen it by `floor(len * band_ratio)` to form the band ceiling.
//! 3. Pick uniformly at random among candidates at or below the ceiling.
//!
//! Loads include history when the run was seeded from it. The band is
//! recomputed for every slot.

use rand::seq::IndexedRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::models::{LoadTracker, Person};

/// Default band width as a fraction of the candidate count.
pub const DEFAULT_BAND_RATIO: f64 = 0.3;

/// Load-aware randomized selector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BandSelector {
    /// Band width as a fraction of the candidate count (0.0 = strict minimum).
    pub band_ratio: f64,
}

impl BandSelector {
    /// Creates a selector with the default band ratio.
    pub fn new() -> Self {
        Self {
            band_ratio: DEFAULT_BAND_RATIO,
        }
    }

    /// Sets the band ratio, clamped to `0.0..=1.0`. Non-finite values fall
    /// back to 0.
    pub fn with_band_ratio(mut self, band_ratio: f64) -> Self {
        self.band_ratio = clamp_ratio(band_ratio);
        self
    }

    /// Band width for a candidate pool of the given size. Never exceeds the
    /// pool size.
    pub fn band_width(&self, candidates: usize) -> usize {
        (candidates as f64 * clamp_ratio(self.band_ratio)).floor() as usize
    }

    /// Candidates whose load lies within the band above the minimum.
    pub fn pool<'p>(&self, candidates: &[&'p Person], load: &LoadTracker) -> Vec<&'p Person> {
        let Some(min_load) = candidates.iter().map(|p| load.count(&p.name)).min() else {
            return Vec::new();
        };
        let ceiling = min_load.saturating_add(self.band_width(candidates.len()));
        candidates
            .iter()
            .copied()
            .filter(|p| load.count(&p.name) <= ceiling)
            .collect()
    }

    /// Picks one candidate, or `None` if there are none.
    pub fn select<'p, R: Rng + ?Sized>(
        &self,
        candidates: &[&'p Person],
        load: &LoadTracker,
        rng: &mut R,
    ) -> Option<&'p Person> {
        self.pool(candidates, load).choose(rng).copied()
    }
}

fn clamp_ratio(ratio: f64) -> f64 {
    if ratio.is_finite() {
        ratio.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

impl Default for BandSelector {
    fn default() -> Self {
        Self::new()
    }
}
