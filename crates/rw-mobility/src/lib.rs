//! `rw-mobility` — the random-walk mobility model and its configuration.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                    |
//! |--------------|-------------------------------------------------------------|
//! | [`params`]   | `WalkParameters`, `WalkMode` — validated tunables           |
//! | [`defaults`] | `WalkDefaults` — shared snapshot cache with invalidation    |
//! | [`model`]    | `MobilityModel` trait, `RandomWalkModel`                    |
//! | [`error`]    | `MobilityError`, `MobilityResult<T>`                        |
//!
//! # Movement model (lazy integration)
//!
//! A model stores `(position, velocity, last_update)` and integrates lazily:
//! the stored position is accurate only as of `last_update`, and every read
//! first advances it by `velocity × elapsed`.  Velocity is re-randomized at
//! **resample** points — either every fixed interval of simulated time or
//! every fixed distance travelled, depending on [`WalkMode`].  Each resample
//! reports the delay until the next one; the driver crate (`rw-sim`) turns
//! that delay into a scheduled event, forming a self-perpetuating chain.

pub mod defaults;
pub mod error;
pub mod model;
pub mod params;


pub use defaults::WalkDefaults;
pub use error::{MobilityError, MobilityResult};
pub use model::{MobilityModel, RandomWalkModel};
pub use params::{WalkMode, WalkParameters};
