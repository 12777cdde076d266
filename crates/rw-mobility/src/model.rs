//! The `MobilityModel` trait and the random-walk implementation.

use std::sync::Arc;

use rw_core::{ModelRng, Position, SimTime, Velocity};

use crate::{MobilityError, MobilityResult, WalkMode, WalkParameters};

// ── MobilityModel ─────────────────────────────────────────────────────────────

/// A node's position as a function of simulated time.
///
/// The driver (`rw-sim`) is generic over this trait the way an engine is
/// generic over a routing algorithm: swap the model type at compile time
/// with no runtime overhead.
///
/// # Contract
///
/// Implementations integrate lazily — the stored position is accurate only
/// as of the last touch, and both [`position`][Self::position] and
/// [`set_position`][Self::set_position] must bring the model up to `now`
/// before doing anything else.  The driver guarantees `now` never decreases
/// across calls (single-threaded cooperative event processing).
pub trait MobilityModel {
    /// Integrate pending motion up to `now`, then return the position.
    fn position(&mut self, now: SimTime) -> Position;

    /// Force the position to `target` at `now`.
    ///
    /// The comparison against the old value is made **before** integration,
    /// matching write-wins semantics: whatever motion was pending is
    /// discarded, not flushed.  Returns `true` when the stored value
    /// actually changed, which is the caller's cue to fire a course-change
    /// notification.  Velocity and any pending resample are untouched.
    fn set_position(&mut self, target: Position, now: SimTime) -> bool;

    /// The current velocity (valid until the next resample).
    fn velocity(&self) -> Velocity;

    /// Integrate up to `now`, draw a fresh velocity, and return the delay
    /// until the next resample is due.
    ///
    /// The caller schedules the follow-up event and fires the course-change
    /// notification — a resample always changes course.
    fn resample(&mut self, now: SimTime, rng: &mut ModelRng) -> MobilityResult<SimTime>;
}

// ── RandomWalkModel ───────────────────────────────────────────────────────────

/// 2-D random walk: velocity re-randomized on a distance or time trigger.
///
/// Between resamples the node moves in a straight line at constant speed.
/// At each resample a new speed is drawn uniformly from
/// `[min_speed, max_speed]` and a new heading uniformly from `[0, 2π)`.
/// The walk is unbounded; `z` stays 0.
pub struct RandomWalkModel {
    position: Position,
    velocity: Velocity,
    /// `position` is accurate only as of this instant.
    last_update: SimTime,
    params: Arc<WalkParameters>,
}

impl RandomWalkModel {
    /// Create a stationary walker at `origin`.
    ///
    /// Rejects invalid parameter sets up front; a model never exists with a
    /// configuration its resample could choke on.  The initial velocity is
    /// zero — the driver performs the first resample when the model is
    /// registered.
    pub fn new(
        params: Arc<WalkParameters>,
        origin: Position,
        now: SimTime,
    ) -> MobilityResult<Self> {
        params.validate()?;
        Ok(Self {
            position:    origin,
            velocity:    Velocity::ZERO,
            last_update: now,
            params,
        })
    }

    /// The parameter snapshot this model was built from.
    pub fn parameters(&self) -> &Arc<WalkParameters> {
        &self.params
    }

    /// Flush pending motion: `position += velocity × (now − last_update)`.
    ///
    /// Idempotent between events — a second call with the same `now` is a
    /// no-op.
    fn update(&mut self, now: SimTime) {
        debug_assert!(now >= self.last_update, "time went backwards");
        let elapsed = now.since(self.last_update).as_secs_f64();
        self.position.advance(self.velocity, elapsed);
        self.last_update = now;
    }
}

impl MobilityModel for RandomWalkModel {
    fn position(&mut self, now: SimTime) -> Position {
        self.update(now);
        self.position
    }

    fn set_position(&mut self, target: Position, now: SimTime) -> bool {
        // Planar model: any z in the target is discarded.
        let target = Position::new(target.x, target.y);
        let changed = self.position != target;
        self.position = target;
        self.last_update = now;
        changed
    }

    fn velocity(&self) -> Velocity {
        self.velocity
    }

    fn resample(&mut self, now: SimTime, rng: &mut ModelRng) -> MobilityResult<SimTime> {
        self.update(now);

        let speed = rng.uniform(self.params.min_speed, self.params.max_speed);
        let direction = rng.direction();
        self.velocity = Velocity::from_polar(speed, direction);

        match self.params.mode {
            WalkMode::Time => Ok(self.params.mode_time),
            WalkMode::Distance => {
                // Validation keeps min_speed > 0 in this mode, so a zero
                // draw means the parameters were corrupted after the fact.
                if speed <= 0.0 {
                    return Err(MobilityError::ZeroSpeed);
                }
                Ok(SimTime::from_secs_f64(self.params.mode_distance / speed))
            }
        }
    }
}
