//! The `Sim` struct and its event loop.

use rw_core::{ModelId, ModelRng, Position, SimTime, Velocity};
use rw_event::{EventHandle, EventQueue};
use rw_mobility::MobilityModel;

use crate::{CourseChangeObserver, SimError, SimResult};

/// The simulation driver.
///
/// `Sim<M>` owns the clock, the event queue, and one slot per registered
/// model (parallel `Vec`s indexed by `ModelId`).  It drives the
/// self-perpetuating resample chain:
///
/// 1. [`add_model`][Self::add_model] performs the model's initial resample,
///    schedules the follow-up event, and keeps the cancellation handle —
///    the model enters **Pending**.
/// 2. [`run_until`][Self::run_until] pops due events in time order; each one
///    resamples its model, reschedules, and notifies observers, re-entering
///    **Pending**.  The chain has no terminal state of its own.
/// 3. [`dispose`][Self::dispose] cancels the pending event via the stored
///    handle and drops the model — the only way out of the chain, and it
///    leaves no dangling callback behind.
///
/// # Type parameter
///
/// `M` must implement [`MobilityModel`] (e.g.
/// [`rw_mobility::RandomWalkModel`]).  Swap it at compile time for a
/// different mobility pattern with no runtime overhead.
pub struct Sim<M: MobilityModel> {
    /// Global RNG seed; each model's RNG is derived from it deterministically.
    seed: u64,

    /// Current simulated time.  Never decreases.
    now: SimTime,

    /// Pending resample events, payload = which model is due.
    queue: EventQueue<ModelId>,

    /// Model slots.  `None` marks a disposed model; the id is never reused.
    models: Vec<Option<M>>,

    /// Per-model deterministic RNGs, parallel to `models`.
    rngs: Vec<ModelRng>,

    /// Cancellation handle for each model's pending resample event.
    pending: Vec<Option<EventHandle>>,

    /// Registered course-change observers, notified in registration order.
    observers: Vec<Box<dyn CourseChangeObserver>>,
}

impl<M: MobilityModel> Sim<M> {
    /// An empty simulation at time zero.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            now:       SimTime::ZERO,
            queue:     EventQueue::new(),
            models:    Vec::new(),
            rngs:      Vec::new(),
            pending:   Vec::new(),
            observers: Vec::new(),
        }
    }

    /// Current simulated time.
    #[inline]
    pub fn now(&self) -> SimTime {
        self.now
    }

    /// Register an observer.  Course changes from models added later AND
    /// earlier both reach it; registration order is notification order.
    pub fn register_observer(&mut self, observer: Box<dyn CourseChangeObserver>) {
        self.observers.push(observer);
    }

    // ── Model registration and access ─────────────────────────────────────

    /// Register `model` and start its resample chain.
    ///
    /// Performs the initial resample immediately (the model is never
    /// observable with a stale velocity), schedules the follow-up event,
    /// and fires the course-change notification.
    pub fn add_model(&mut self, model: M) -> SimResult<ModelId> {
        let id = ModelId(self.models.len() as u32);
        self.models.push(Some(model));
        self.rngs.push(ModelRng::new(self.seed, id));
        self.pending.push(None);

        self.resample_and_reschedule(id)?;
        Ok(id)
    }

    /// Shared access to a live model.
    pub fn model(&self, id: ModelId) -> SimResult<&M> {
        self.models
            .get(id.index())
            .ok_or(SimError::UnknownModel(id))?
            .as_ref()
            .ok_or(SimError::ModelDisposed(id))
    }

    /// IDs of all models that have not been disposed.
    pub fn live_ids(&self) -> impl Iterator<Item = ModelId> + '_ {
        self.models
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_some())
            .map(|(i, _)| ModelId(i as u32))
    }

    // ── Position interface ────────────────────────────────────────────────

    /// The model's position at the current time (forces integration).
    pub fn position(&mut self, id: ModelId) -> SimResult<Position> {
        let now = self.now;
        Ok(self.live_mut(id)?.position(now))
    }

    /// Force the model's position to `target` at the current time.
    ///
    /// Fires the course-change notification only when the stored value
    /// actually changed.  Velocity and the pending resample are untouched.
    pub fn set_position(&mut self, id: ModelId, target: Position) -> SimResult<()> {
        let now = self.now;
        let model = self.live_mut(id)?;
        if model.set_position(target, now) {
            let position = model.position(now);
            let velocity = model.velocity();
            self.notify(id, position, velocity);
        }
        Ok(())
    }

    /// The model's current velocity.
    pub fn velocity(&self, id: ModelId) -> SimResult<Velocity> {
        Ok(self.model(id)?.velocity())
    }

    // ── Disposal ──────────────────────────────────────────────────────────

    /// Dispose a model: cancel its pending resample event and drop it,
    /// releasing its parameter snapshot.  Terminal — every later operation
    /// on `id` fails with [`SimError::ModelDisposed`].
    pub fn dispose(&mut self, id: ModelId) -> SimResult<()> {
        let slot = self
            .models
            .get_mut(id.index())
            .ok_or(SimError::UnknownModel(id))?;
        if slot.is_none() {
            return Err(SimError::ModelDisposed(id));
        }
        if let Some(handle) = self.pending[id.index()].take() {
            self.queue.cancel(&handle);
        }
        *slot = None;
        Ok(())
    }

    // ── Event loop ────────────────────────────────────────────────────────

    /// Deliver the next pending event, if any.  Returns its firing time.
    pub fn step(&mut self) -> SimResult<Option<SimTime>> {
        let Some((fire_at, id)) = self.queue.pop_next() else {
            return Ok(None);
        };
        debug_assert!(fire_at >= self.now, "event queue delivered out of order");
        self.now = fire_at;
        // Disposal cancels its event; an event for a dead slot is skipped.
        if self.models[id.index()].is_some() {
            self.resample_and_reschedule(id)?;
        }
        Ok(Some(fire_at))
    }

    /// Deliver every event due at or before `until`, then advance the clock
    /// to exactly `until`.
    pub fn run_until(&mut self, until: SimTime) -> SimResult<()> {
        debug_assert!(until >= self.now, "run_until into the past");
        while let Some(next) = self.queue.peek_time() {
            if next > until {
                break;
            }
            self.step()?;
        }
        self.now = until;
        Ok(())
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn live_mut(&mut self, id: ModelId) -> SimResult<&mut M> {
        self.models
            .get_mut(id.index())
            .ok_or(SimError::UnknownModel(id))?
            .as_mut()
            .ok_or(SimError::ModelDisposed(id))
    }

    /// One link of the chain: resample the model, schedule the next link,
    /// store the cancellation handle, notify observers unconditionally.
    fn resample_and_reschedule(&mut self, id: ModelId) -> SimResult<()> {
        let now = self.now;
        // Split borrows: model slot and RNG are disjoint fields.
        let model = self.models[id.index()]
            .as_mut()
            .ok_or(SimError::ModelDisposed(id))?;
        let rng = &mut self.rngs[id.index()];

        let delay = model.resample(now, rng)?;
        let position = model.position(now);
        let velocity = model.velocity();

        let handle = self.queue.schedule_at(now + delay, id);
        self.pending[id.index()] = Some(handle);

        self.notify(id, position, velocity);
        Ok(())
    }

    fn notify(&mut self, id: ModelId, position: Position, velocity: Velocity) {
        let now = self.now;
        for observer in &mut self.observers {
            observer.on_course_change(id, now, position, velocity);
        }
    }
}
