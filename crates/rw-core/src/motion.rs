//! Planar position and velocity types.
//!
//! Coordinates are `f64` metres on an unbounded plane.  `Position` carries a
//! `z` component for compatibility with 3-D consumers, but the walk model
//! never moves off the `z = 0` plane.

/// A point in simulation space, metres.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: f64,
    pub y: f64,
    /// Always 0 for planar models.
    pub z: f64,
}

impl Position {
    pub const ORIGIN: Position = Position { x: 0.0, y: 0.0, z: 0.0 };

    /// A planar position at `z = 0`.
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, z: 0.0 }
    }

    /// Displace by `velocity` applied for `secs` seconds.  `z` is untouched.
    #[inline]
    pub fn advance(&mut self, velocity: Velocity, secs: f64) {
        self.x += velocity.dx * secs;
        self.y += velocity.dy * secs;
    }

    /// Planar Euclidean distance to `other`, metres.
    pub fn distance_to(self, other: Position) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.2}, {:.2}, {:.2})", self.x, self.y, self.z)
    }
}

/// A planar velocity, metres per second.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Velocity {
    pub dx: f64,
    pub dy: f64,
}

impl Velocity {
    pub const ZERO: Velocity = Velocity { dx: 0.0, dy: 0.0 };

    /// Build from a `(speed, direction)` polar pair.  `direction` is radians
    /// counter-clockwise from the positive x axis.
    #[inline]
    pub fn from_polar(speed: f64, direction: f64) -> Self {
        Self {
            dx: direction.cos() * speed,
            dy: direction.sin() * speed,
        }
    }

    /// Scalar speed, `sqrt(dx² + dy²)`.
    #[inline]
    pub fn speed(self) -> f64 {
        (self.dx * self.dx + self.dy * self.dy).sqrt()
    }
}

impl std::fmt::Display for Velocity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.2}, {:.2}) m/s", self.dx, self.dy)
    }
}
