//! Ball state: one struct per ball, owned by a fixed-length set
//!
//! `BallSet` is the single shared arena of mutable state. Resolvers and the
//! integrator mutate balls through it by index; nothing else writes to a
//! ball after construction. Indices are stable for the set's lifetime.

use nalgebra::{Point2, Vector2};
use thiserror::Error;

/// Construction-time validation failure for a [`BallSet`]
///
/// Raised only by [`BallSet::new`]; once a set exists its shape invariants
/// hold for its whole lifetime.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShapeError {
    #[error("expected {expected} positions, got {actual}")]
    PositionCount { expected: usize, actual: usize },
    #[error("expected {expected} velocities, got {actual}")]
    VelocityCount { expected: usize, actual: usize },
    #[error("expected {expected} radii, got {actual}")]
    RadiusCount { expected: usize, actual: usize },
    #[error("ball {index} has non-positive radius {radius}")]
    NonPositiveRadius { index: usize, radius: f64 },
}

/// A circular rigid body on the table
///
/// Radius and mass are fixed at construction; mass is always `radius³`
/// (proportional to the volume of the equivalent sphere) and is never set
/// independently.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub position: Point2<f64>,
    pub velocity: Vector2<f64>,
    radius: f64,
    mass: f64,
}

impl Ball {
    fn new(position: Point2<f64>, velocity: Vector2<f64>, radius: f64) -> Self {
        Ball {
            position,
            velocity,
            radius,
            mass: radius.powi(3),
        }
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn momentum(&self) -> Vector2<f64> {
        self.velocity * self.mass
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity.magnitude_squared()
    }

    /// True when both velocity components are exactly zero
    pub fn is_stationary(&self) -> bool {
        self.velocity.x == 0.0 && self.velocity.y == 0.0
    }

    pub fn distance_squared_to(&self, other: &Ball) -> f64 {
        (self.position - other.position).magnitude_squared()
    }
}

/// An ordered, fixed-length collection of balls
///
/// The set is created once with explicit positions, velocities, and radii —
/// random generation, if desired, happens before construction, on the
/// caller's side. Balls are never added, removed, or reordered afterward:
/// index `i` names the same logical ball for the set's lifetime.
///
/// # Examples
///
/// ```
/// use billiards::BallSet;
/// use nalgebra::{Point2, Vector2};
///
/// let set = BallSet::new(
///     2,
///     vec![Point2::new(0.0, 0.0), Point2::new(10.0, 0.0)],
///     vec![Vector2::new(5.0, 0.0), Vector2::new(0.0, 0.0)],
///     vec![6.0, 6.0],
/// )
/// .unwrap();
///
/// assert_eq!(set.len(), 2);
/// assert_eq!(set.ball(0).mass(), 216.0);
/// ```
#[derive(Debug, Clone)]
pub struct BallSet {
    balls: Vec<Ball>,
}

impl BallSet {
    /// Creates a set of `count` balls with explicit state
    ///
    /// # Errors
    ///
    /// Returns a [`ShapeError`] when any input length differs from `count`
    /// or any radius is zero or negative. A failed construction is never
    /// retried internally.
    pub fn new(
        count: usize,
        positions: Vec<Point2<f64>>,
        velocities: Vec<Vector2<f64>>,
        radii: Vec<f64>,
    ) -> Result<Self, ShapeError> {
        if positions.len() != count {
            return Err(ShapeError::PositionCount {
                expected: count,
                actual: positions.len(),
            });
        }
        if velocities.len() != count {
            return Err(ShapeError::VelocityCount {
                expected: count,
                actual: velocities.len(),
            });
        }
        if radii.len() != count {
            return Err(ShapeError::RadiusCount {
                expected: count,
                actual: radii.len(),
            });
        }
        if let Some((index, &radius)) = radii.iter().enumerate().find(|(_, r)| **r <= 0.0) {
            return Err(ShapeError::NonPositiveRadius { index, radius });
        }

        let balls = positions
            .into_iter()
            .zip(velocities)
            .zip(radii)
            .map(|((position, velocity), radius)| Ball::new(position, velocity, radius))
            .collect();

        Ok(BallSet { balls })
    }

    pub fn len(&self) -> usize {
        self.balls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.balls.is_empty()
    }

    pub fn ball(&self, index: usize) -> &Ball {
        &self.balls[index]
    }

    pub(crate) fn ball_mut(&mut self, index: usize) -> &mut Ball {
        &mut self.balls[index]
    }

    pub fn balls(&self) -> &[Ball] {
        &self.balls
    }

    pub(crate) fn balls_mut(&mut self) -> &mut [Ball] {
        &mut self.balls
    }

    /// Position of ball `index`, for drawing
    pub fn position(&self, index: usize) -> Point2<f64> {
        self.balls[index].position
    }

    /// Radius of ball `index`, for drawing
    pub fn radius(&self, index: usize) -> f64 {
        self.balls[index].radius
    }

    /// Total momentum over all balls
    ///
    /// Useful for checking numerical drift: cushion bounces change it, but
    /// an isolated pair collision must conserve it.
    pub fn total_momentum(&self) -> Vector2<f64> {
        self.balls
            .iter()
            .map(|b| b.momentum())
            .fold(Vector2::zeros(), |acc, p| acc + p)
    }

    /// Total kinetic energy over all balls
    pub fn total_kinetic_energy(&self) -> f64 {
        self.balls.iter().map(|b| b.kinetic_energy()).sum()
    }
}
