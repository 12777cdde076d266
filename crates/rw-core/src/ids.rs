//! Strongly typed, zero-cost identifier wrappers.
//!
//! Both IDs are `Copy + Ord + Hash` so they can be used as map keys and sorted
//! collection elements without ceremony.  The inner integer is `pub` to allow
//! direct indexing into per-model `Vec`s via `id.0 as usize`, but callers
//! should prefer `.index()` for clarity.

use std::fmt;

/// Index of a mobility model registered with the simulation driver.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModelId(pub u32);

impl ModelId {
    /// Sentinel meaning "no valid model".
    pub const INVALID: ModelId = ModelId(u32::MAX);

    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl Default for ModelId {
    /// Returns the `INVALID` sentinel so uninitialized IDs are visibly invalid.
    #[inline(always)]
    fn default() -> Self {
        Self::INVALID
    }
}

impl fmt::Display for ModelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ModelId({})", self.0)
    }
}

impl TryFrom<usize> for ModelId {
    type Error = std::num::TryFromIntError;
    fn try_from(n: usize) -> Result<ModelId, Self::Error> {
        u32::try_from(n).map(ModelId)
    }
}

/// Monotone sequence number assigned to a scheduled event.
///
/// Besides identifying an event for cancellation, the sequence number breaks
/// timestamp ties: two events scheduled for the same instant fire in the
/// order they were scheduled.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EventId(pub u64);

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EventId({})", self.0)
    }
}
