//! `rw-core` — foundational types for the `rust_rw` mobility simulator.
//!
//! This crate is a dependency of every other `rw-*` crate.  It intentionally
//! has no `rw-*` dependencies and minimal external ones (only `rand`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                    |
//! |------------|---------------------------------------------|
//! | [`ids`]    | `ModelId`, `EventId`                        |
//! | [`time`]   | `SimTime` — nanosecond simulated time       |
//! | [`motion`] | `Position`, `Velocity`                      |
//! | [`rng`]    | `ModelRng` (per-model deterministic RNG)    |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod ids;
pub mod motion;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use ids::{EventId, ModelId};
pub use motion::{Position, Velocity};
pub use rng::ModelRng;
pub use time::SimTime;
