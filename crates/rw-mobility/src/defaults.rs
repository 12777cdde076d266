//! Shared default-parameter cache.
//!
//! # Why this exists
//!
//! Most models in a run use identical parameters.  Handing every model its
//! own heap copy would waste memory and, worse, invite callers to mutate a
//! "default" in place and silently reconfigure unrelated models.  Instead
//! the embedding application owns one `WalkDefaults`, and every model built
//! from it shares a single immutable `Arc<WalkParameters>` snapshot.
//!
//! Invalidation is value-based, not push-based: a setter only mutates the
//! current default values, and the next [`snapshot`][WalkDefaults::snapshot]
//! call notices the drift and builds a fresh `Arc`.  Models constructed
//! earlier keep the snapshot they were built with.

use std::sync::Arc;

use rw_core::SimTime;

use crate::{MobilityResult, WalkMode, WalkParameters};

/// The current default walk parameters plus one cached shared snapshot.
///
/// Owned by the application (typically inside `rw_sim::Sim`); there is no
/// process-wide registry and no ambient lookup.
pub struct WalkDefaults {
    current: WalkParameters,
    cached: Arc<WalkParameters>,
}

impl Default for WalkDefaults {
    fn default() -> Self {
        let current = WalkParameters::default();
        let cached = Arc::new(current.clone());
        Self { current, cached }
    }
}

impl WalkDefaults {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from explicit defaults instead of the built-in ones.
    pub fn with_parameters(params: WalkParameters) -> MobilityResult<Self> {
        params.validate()?;
        let cached = Arc::new(params.clone());
        Ok(Self { current: params, cached })
    }

    /// The current default values.
    pub fn current(&self) -> &WalkParameters {
        &self.current
    }

    /// A shared snapshot of the current defaults.
    ///
    /// Returns the cached `Arc` as long as it still value-equals the current
    /// defaults, so every model constructed between two default changes
    /// shares one allocation.  After a setter has drifted the defaults, the
    /// first `snapshot` call rebuilds the cache.
    pub fn snapshot(&mut self) -> Arc<WalkParameters> {
        if *self.cached != self.current {
            self.cached = Arc::new(self.current.clone());
        }
        Arc::clone(&self.cached)
    }

    // ── Setters ───────────────────────────────────────────────────────────
    //
    // Each setter validates the candidate value set and leaves the defaults
    // untouched on error.  None of them touch the cached snapshot; models
    // already holding it are unaffected.

    pub fn set_speed_bounds(&mut self, min: f64, max: f64) -> MobilityResult<()> {
        let mut candidate = self.current.clone();
        candidate.min_speed = min;
        candidate.max_speed = max;
        self.commit(candidate)
    }

    pub fn set_mode(&mut self, mode: WalkMode) -> MobilityResult<()> {
        let mut candidate = self.current.clone();
        candidate.mode = mode;
        self.commit(candidate)
    }

    pub fn set_mode_distance(&mut self, metres: f64) -> MobilityResult<()> {
        let mut candidate = self.current.clone();
        candidate.mode_distance = metres;
        self.commit(candidate)
    }

    pub fn set_mode_time(&mut self, interval: SimTime) -> MobilityResult<()> {
        let mut candidate = self.current.clone();
        candidate.mode_time = interval;
        self.commit(candidate)
    }

    fn commit(&mut self, candidate: WalkParameters) -> MobilityResult<()> {
        candidate.validate()?;
        self.current = candidate;
        Ok(())
    }
}
