//! Elastic collision resolution along the line of centers
//!
//! The impulse formula conserves momentum and kinetic energy for the pair,
//! treating the contact as instantaneous and frictionless and ignoring all
//! other balls. Before the impulse, each ball steps back by twice its
//! velocity — a crude separation heuristic that assumes the overlap was
//! created entirely by this tick's move and undoes it. When the overlap
//! predates the tick the heuristic over- or under-separates; that inaccuracy
//! is part of the model.

use nalgebra::{Point2, Vector2};
use thiserror::Error;

use crate::particles::BallSet;

/// Two balls with coincident centers cannot be resolved
///
/// The collision axis is the line of centers; with zero separation its
/// direction is undefined and the impulse would divide by zero. The guard
/// turns what would be NaN velocities into an explicit error.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("coincident centers at ({x}, {y}): collision axis is undefined")]
pub struct DegenerateCollisionError {
    pub x: f64,
    pub y: f64,
}

/// Post-collision velocities for a 2D elastic collision
///
/// With `dx = x1 - x2`, `dv = v1 - v2`, `M = m1 + m2`:
///
/// ```text
/// Δv1 =  (2·m2 / M) · (dv·dx / dx·dx) · dx
/// Δv2 = -(2·m1 / M) · (dv·dx / dx·dx) · dx
/// ```
///
/// and the new velocities are `v1 - Δv1` and `v2 - Δv2`.
///
/// # Errors
///
/// Returns [`DegenerateCollisionError`] when `dx·dx == 0`.
///
/// # Examples
///
/// ```
/// use billiards::elastic_collision;
/// use nalgebra::{Point2, Vector2};
///
/// // Equal masses head-on: the balls swap velocities.
/// let (v1, v2) = elastic_collision(
///     Vector2::new(1.0, 0.0),
///     Vector2::new(0.0, 0.0),
///     Point2::new(0.0, 0.0),
///     Point2::new(1.0, 0.0),
///     1.0,
///     1.0,
/// )
/// .unwrap();
///
/// assert_eq!(v1, Vector2::new(0.0, 0.0));
/// assert_eq!(v2, Vector2::new(1.0, 0.0));
/// ```
pub fn elastic_collision(
    v1: Vector2<f64>,
    v2: Vector2<f64>,
    x1: Point2<f64>,
    x2: Point2<f64>,
    m1: f64,
    m2: f64,
) -> Result<(Vector2<f64>, Vector2<f64>), DegenerateCollisionError> {
    let dx = x1 - x2;
    let separation_squared = dx.magnitude_squared();
    if separation_squared == 0.0 {
        return Err(DegenerateCollisionError { x: x1.x, y: x1.y });
    }

    let mass_sum = m1 + m2;
    let dv_dot_dx = (v1 - v2).dot(&dx);

    let delta_v1 = dx * ((2.0 * m2 / mass_sum) * (dv_dot_dx / separation_squared));
    let delta_v2 = dx * (-(2.0 * m1 / mass_sum) * (dv_dot_dx / separation_squared));

    Ok((v1 - delta_v1, v2 - delta_v2))
}

/// Resolves a detected collision between balls `i` and `j` in place
///
/// Steps both balls back by twice their current velocities, then applies
/// the elastic impulse using the stepped-back positions. Both balls'
/// positions and velocities are written back through the set.
///
/// Indices must be in range and distinct; the integrator is responsible for
/// that precondition.
///
/// # Errors
///
/// Returns [`DegenerateCollisionError`] when the stepped-back centers
/// coincide. The pair is left in its stepped-back state.
pub fn resolve(set: &mut BallSet, i: usize, j: usize) -> Result<(), DegenerateCollisionError> {
    {
        let a = set.ball_mut(i);
        a.position -= a.velocity * 2.0;
    }
    {
        let b = set.ball_mut(j);
        b.position -= b.velocity * 2.0;
    }

    let a = *set.ball(i);
    let b = *set.ball(j);

    let (v1, v2) = elastic_collision(
        a.velocity,
        b.velocity,
        a.position,
        b.position,
        a.mass(),
        b.mass(),
    )?;

    set.ball_mut(i).velocity = v1;
    set.ball_mut(j).velocity = v2;
    Ok(())
}
