//! `rw-event` — the discrete-event queue driving the simulation.
//!
//! # Crate layout
//!
//! | Module    | Contents                                          |
//! |-----------|---------------------------------------------------|
//! | [`queue`] | `EventQueue<E>`, `EventHandle` — scheduling core  |

pub mod queue;


pub use queue::{EventHandle, EventQueue};
