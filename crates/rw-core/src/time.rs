//! Simulated time model.
//!
//! # Design
//!
//! `SimTime` represents both instants and durations as a count of integer
//! nanoseconds.  Using an integer as the canonical unit means event-queue
//! keys are `Ord`, timestamp comparisons are exact, and repeated
//! add/subtract cycles cannot drift the way `f64` seconds would.
//!
//! Velocity integration works in `f64` seconds; `from_secs_f64` /
//! `as_secs_f64` convert at the boundary.  Nanosecond resolution keeps the
//! round-trip error below anything a metres-per-second walk can observe.

use std::fmt;

/// A simulated instant or duration, in nanoseconds since simulation start.
///
/// Stored as `u64`: at nanosecond resolution a `u64` covers ~584 years of
/// simulated time, far longer than any conceivable run.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimTime(pub u64);

const NANOS_PER_SEC: u64 = 1_000_000_000;

impl SimTime {
    pub const ZERO: SimTime = SimTime(0);

    #[inline]
    pub const fn from_nanos(ns: u64) -> SimTime {
        SimTime(ns)
    }

    #[inline]
    pub const fn from_millis(ms: u64) -> SimTime {
        SimTime(ms * 1_000_000)
    }

    #[inline]
    pub const fn from_secs(s: u64) -> SimTime {
        SimTime(s * NANOS_PER_SEC)
    }

    /// Convert a non-negative, finite second count to a `SimTime`, rounding
    /// to the nearest nanosecond.
    ///
    /// # Panics
    /// Panics in debug mode if `secs` is negative, NaN, or infinite.  Callers
    /// must reject those upstream (they are configuration errors, not values
    /// this type can represent).
    #[inline]
    pub fn from_secs_f64(secs: f64) -> SimTime {
        debug_assert!(secs.is_finite() && secs >= 0.0, "bad duration: {secs}");
        SimTime((secs * NANOS_PER_SEC as f64).round() as u64)
    }

    #[inline]
    pub fn as_secs_f64(self) -> f64 {
        self.0 as f64 / NANOS_PER_SEC as f64
    }

    #[inline]
    pub const fn as_nanos(self) -> u64 {
        self.0
    }

    /// Duration elapsed from `earlier` to `self`.
    ///
    /// # Panics
    /// Panics in debug mode if `earlier > self`.
    #[inline]
    pub fn since(self, earlier: SimTime) -> SimTime {
        SimTime(self.0 - earlier.0)
    }
}

impl std::ops::Add for SimTime {
    type Output = SimTime;
    #[inline]
    fn add(self, rhs: SimTime) -> SimTime {
        SimTime(self.0 + rhs.0)
    }
}

impl std::ops::AddAssign for SimTime {
    #[inline]
    fn add_assign(&mut self, rhs: SimTime) {
        self.0 += rhs.0;
    }
}

impl std::ops::Sub for SimTime {
    type Output = SimTime;
    #[inline]
    fn sub(self, rhs: SimTime) -> SimTime {
        SimTime(self.0 - rhs.0)
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 % NANOS_PER_SEC == 0 {
            write!(f, "{}s", self.0 / NANOS_PER_SEC)
        } else {
            write!(f, "{}s", self.as_secs_f64())
        }
    }
}
