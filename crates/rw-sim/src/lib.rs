//! `rw-sim` — the simulation driver for `rust_rw` mobility models.
//!
//! # Crate layout
//!
//! | Module       | Contents                                           |
//! |--------------|----------------------------------------------------|
//! | [`sim`]      | `Sim<M>` — event loop, model slots, disposal       |
//! | [`observer`] | `CourseChangeObserver`, `NoopObserver`             |
//! | [`error`]    | `SimError`, `SimResult<T>`                         |
//!
//! # Execution model
//!
//! Single-threaded, cooperative, discrete-event: every state transition runs
//! to completion on the caller's thread, in non-decreasing simulated-time
//! order.  A model's scheduled resample is not a concurrent callback — it is
//! a deferred direct call the [`Sim`] delivers when its event pops.

pub mod error;
pub mod observer;
pub mod sim;

#[cfg(test)]
mod tests;

pub use error::{SimError, SimResult};
pub use observer::{CourseChangeObserver, NoopObserver};
pub use sim::Sim;
