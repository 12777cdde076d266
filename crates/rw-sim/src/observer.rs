//! Course-change observer trait for trace collection and logging.

use rw_core::{ModelId, Position, SimTime, Velocity};

/// Callback fired whenever a model's course changes.
///
/// A course change is either a velocity resample (fired unconditionally —
/// a resample always redraws the velocity) or an externally forced position
/// write that actually moved the model.  Position reads never fire it.
///
/// # Example — movement printer
///
/// ```rust,ignore
/// struct Printer;
///
/// impl CourseChangeObserver for Printer {
///     fn on_course_change(&mut self, model: ModelId, time: SimTime, pos: Position, vel: Velocity) {
///         println!("{time} {model}: at {pos}, heading {vel}");
///     }
/// }
/// ```
pub trait CourseChangeObserver {
    fn on_course_change(
        &mut self,
        _model:    ModelId,
        _time:     SimTime,
        _position: Position,
        _velocity: Velocity,
    ) {
    }
}

/// A [`CourseChangeObserver`] that does nothing.
pub struct NoopObserver;

impl CourseChangeObserver for NoopObserver {}
