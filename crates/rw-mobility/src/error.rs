use thiserror::Error;

#[derive(Debug, Error)]
pub enum MobilityError {
    #[error("min speed {min} exceeds max speed {max}")]
    SpeedBoundsOutOfOrder { min: f64, max: f64 },

    #[error("negative speed bound {0}")]
    NegativeSpeed(f64),

    #[error("distance mode requires min speed > 0 (a zero draw would never cover the leg)")]
    ZeroMinSpeedDistanceMode,

    #[error("mode distance must be positive and finite, got {0}")]
    InvalidModeDistance(f64),

    #[error("mode time must be non-zero")]
    ZeroModeTime,

    #[error("drawn speed is zero under distance mode")]
    ZeroSpeed,
}

pub type MobilityResult<T> = Result<T, MobilityError>;
