//! `EventQueue` — sparse, cancellable future-event queue.
//!
//! # Why this exists
//!
//! A random-walk model perpetually reschedules itself: every velocity
//! resample arranges the next one.  The simulation therefore needs a queue
//! that (a) delivers events in non-decreasing simulated-time order and
//! (b) hands back a handle so a disposed model can revoke its pending event
//! instead of leaving a dangling callback.
//!
//! # Ordering
//!
//! Events are keyed by `(fire_at, EventId)`.  `EventId` is a monotone
//! sequence number, so two events scheduled for the same instant fire in
//! the order they were scheduled — the pop order is fully deterministic.
//!
//! # Performance note
//!
//! `BTreeMap` gives O(log W) insert, pop, and cancel where W = pending
//! events.  One pending event per live model keeps W tiny; cancellation by
//! exact key needs no tombstones or lazy deletion.

use std::collections::BTreeMap;

use rw_core::{EventId, SimTime};

/// Cancellation handle for a scheduled event.
///
/// Returned by [`EventQueue::schedule_at`]; pass it to
/// [`EventQueue::cancel`] to revoke the event before it fires.  A handle
/// for an event that already fired is harmless — cancelling it is a no-op.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct EventHandle {
    /// The instant the event is due to fire.
    pub fire_at: SimTime,
    /// The event's sequence number, unique within one queue.
    pub id: EventId,
}

/// A future-event queue mapping simulated instants to payloads.
///
/// `E` is the payload delivered when the event fires — typically a
/// `ModelId` naming the model whose resample is due.
#[derive(Default)]
pub struct EventQueue<E> {
    inner: BTreeMap<(SimTime, EventId), E>,
    next_id: u64,
}

impl<E> EventQueue<E> {
    pub fn new() -> Self {
        Self { inner: BTreeMap::new(), next_id: 0 }
    }

    /// Schedule `payload` to fire at the absolute instant `fire_at`.
    ///
    /// The queue does not know "now"; callers must not schedule into their
    /// own past or the non-decreasing delivery guarantee is lost.
    pub fn schedule_at(&mut self, fire_at: SimTime, payload: E) -> EventHandle {
        let id = EventId(self.next_id);
        self.next_id += 1;
        self.inner.insert((fire_at, id), payload);
        EventHandle { fire_at, id }
    }

    /// Revoke a pending event.
    ///
    /// Returns `true` if the event was still pending, `false` if it already
    /// fired or was previously cancelled.
    pub fn cancel(&mut self, handle: &EventHandle) -> bool {
        self.inner.remove(&(handle.fire_at, handle.id)).is_some()
    }

    /// Remove and return the earliest pending event as `(fire_at, payload)`.
    ///
    /// Successive pops yield non-decreasing `fire_at` values.
    pub fn pop_next(&mut self) -> Option<(SimTime, E)> {
        let ((fire_at, _), payload) = self.inner.pop_first()?;
        Some((fire_at, payload))
    }

    /// The instant of the earliest pending event, or `None` if empty.
    pub fn peek_time(&self) -> Option<SimTime> {
        self.inner.keys().next().map(|&(t, _)| t)
    }

    /// Number of pending events.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
