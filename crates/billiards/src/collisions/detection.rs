//! Single-step geometric collision test
//!
//! Two balls collide when their squared center distance is at or below the
//! squared sum of their radii — tangency counts, matching the inclusive
//! cushion test. A pair that is stationary on both sides never collides no
//! matter how it overlaps: resting contact is not a collision event, and
//! exempting it keeps a permanently overlapping resting pair from firing an
//! impulse every tick.

use crate::particles::Ball;

/// Whether two balls are currently colliding
///
/// Symmetric in its arguments. This is a per-tick snapshot test: two fast
/// balls that fully pass through each other within one tick are not
/// detected, by design.
///
/// # Examples
///
/// ```
/// use billiards::BallSet;
/// use billiards::colliding;
/// use nalgebra::{Point2, Vector2};
///
/// let set = BallSet::new(
///     2,
///     vec![Point2::new(0.0, 0.0), Point2::new(10.0, 0.0)],
///     vec![Vector2::new(5.0, 0.0), Vector2::new(0.0, 0.0)],
///     vec![5.0, 5.0],
/// )
/// .unwrap();
///
/// // Exactly touching counts.
/// assert!(colliding(set.ball(0), set.ball(1)));
/// ```
pub fn colliding(a: &Ball, b: &Ball) -> bool {
    if a.is_stationary() && b.is_stationary() {
        return false;
    }

    let radius_sum = a.radius() + b.radius();
    a.distance_squared_to(b) <= radius_sum * radius_sum
}

/// Iterates every unordered index pair `(i, j)` with `i < j` exactly once
///
/// The integrator walks pairs in this fixed order — ascending `i`, then
/// ascending `j` — and order matters: resolving a pair mutates both balls,
/// which can change whether a later pair collides in the same tick. Each
/// contact receives a single impulse per tick.
pub fn unordered_pairs(count: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..count).flat_map(move |i| ((i + 1)..count).map(move |j| (i, j)))
}
