//! Walk parameters and their validation rules.

use rw_core::SimTime;

use crate::{MobilityError, MobilityResult};

// ── WalkMode ──────────────────────────────────────────────────────────────────

/// The trigger condition for re-randomizing a walker's velocity.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WalkMode {
    /// Resample after covering a fixed distance at the current speed.
    Distance,
    /// Resample after a fixed interval of simulated time.
    Time,
}

impl std::fmt::Display for WalkMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WalkMode::Distance => write!(f, "distance"),
            WalkMode::Time => write!(f, "time"),
        }
    }
}

// ── WalkParameters ────────────────────────────────────────────────────────────

/// Tunables for one random-walk model.
///
/// A plain value type: models receive an immutable shared snapshot
/// (`Arc<WalkParameters>`) from [`WalkDefaults`][crate::WalkDefaults], and a
/// caller that wants different bounds for one model builds a private copy
/// via [`set_speed_bounds`][Self::set_speed_bounds].  The shared snapshot
/// itself can never be mutated in place.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WalkParameters {
    /// Lower speed bound, m/s.  Speeds are drawn uniformly from
    /// `[min_speed, max_speed]`.
    pub min_speed: f64,

    /// Upper speed bound, m/s.
    pub max_speed: f64,

    /// Which trigger re-randomizes the velocity.
    pub mode: WalkMode,

    /// Distance to cover before resampling, metres.  Only read in
    /// [`WalkMode::Distance`].
    pub mode_distance: f64,

    /// Time to walk before resampling.  Only read in [`WalkMode::Time`].
    pub mode_time: SimTime,
}

impl Default for WalkParameters {
    /// A slow pedestrian wander: 0.1–0.5 m/s, new heading every 10 m.
    fn default() -> Self {
        Self {
            min_speed:     0.1,
            max_speed:     0.5,
            mode:          WalkMode::Distance,
            mode_distance: 10.0,
            mode_time:     SimTime::from_secs(1),
        }
    }
}

impl WalkParameters {
    /// Check every configuration invariant.
    ///
    /// All failures here are configuration defects to surface immediately —
    /// letting them through would corrupt the event schedule with `Inf`/`NaN`
    /// delays or panic inside the uniform draw.
    pub fn validate(&self) -> MobilityResult<()> {
        if !self.min_speed.is_finite() || self.min_speed < 0.0 {
            return Err(MobilityError::NegativeSpeed(self.min_speed));
        }
        if !self.max_speed.is_finite() || self.max_speed < 0.0 {
            return Err(MobilityError::NegativeSpeed(self.max_speed));
        }
        if self.min_speed > self.max_speed {
            return Err(MobilityError::SpeedBoundsOutOfOrder {
                min: self.min_speed,
                max: self.max_speed,
            });
        }
        match self.mode {
            WalkMode::Distance => {
                // A zero min bound can draw speed == 0, which turns the
                // distance trigger into a divide-by-zero.  Rejected here
                // rather than clamped at the draw site.
                if self.min_speed <= 0.0 {
                    return Err(MobilityError::ZeroMinSpeedDistanceMode);
                }
                if !self.mode_distance.is_finite() || self.mode_distance <= 0.0 {
                    return Err(MobilityError::InvalidModeDistance(self.mode_distance));
                }
            }
            WalkMode::Time => {
                if self.mode_time == SimTime::ZERO {
                    return Err(MobilityError::ZeroModeTime);
                }
            }
        }
        Ok(())
    }

    /// Overwrite the speed bounds on this value only.
    ///
    /// Re-validates the whole parameter set; on error the value is left
    /// unchanged.  Shared default snapshots are unaffected — this method is
    /// for building a private per-model copy.
    pub fn set_speed_bounds(&mut self, min: f64, max: f64) -> MobilityResult<()> {
        let mut candidate = self.clone();
        candidate.min_speed = min;
        candidate.max_speed = max;
        candidate.validate()?;
        *self = candidate;
        Ok(())
    }
}
