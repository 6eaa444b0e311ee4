//! Discrete-time integration
//!
//! One tick, in strict order:
//!
//! 1. Advance every ball's position by its velocity (unit timestep).
//! 2. For every ball, classify and resolve cushion contact.
//! 3. For every unordered pair `(i, j)`, `i < j`, test and resolve the
//!    collision.
//!
//! Pair detection must see post-bounce positions, so step 2 always completes
//! before step 3 begins. The whole set is written by exactly one tick at a
//! time; there is no suspension point inside a tick.

use log::{trace, warn};

use crate::boundary::{self, Table, WallContact};
use crate::collisions::{DegenerateCollisionError, colliding, resolve, unordered_pairs};
use crate::particles::BallSet;

/// Advances a ball set through discrete ticks
pub trait Integrator: Send + Sync {
    /// Advance the set by one tick against the given table bounds
    ///
    /// # Errors
    ///
    /// Returns [`DegenerateCollisionError`] when a colliding pair has
    /// coincident centers after separation; the tick is abandoned at that
    /// pair and the set keeps whatever writes already happened this tick.
    fn step(&self, set: &mut BallSet, table: &Table) -> Result<(), DegenerateCollisionError>;

    /// Advance the set by `n_steps` ticks, stopping at the first failure
    fn run(
        &self,
        set: &mut BallSet,
        table: &Table,
        n_steps: usize,
    ) -> Result<(), DegenerateCollisionError> {
        for _ in 0..n_steps {
            self.step(set, table)?;
        }
        Ok(())
    }
}

/// The naive unit-timestep Euler tick
///
/// Positions advance by one full velocity per tick with no sub-stepping.
/// Cheap and simple; the price is that a ball can cross deep past a cushion
/// or another ball between snapshots.
///
/// # Examples
///
/// ```
/// use billiards::{BallSet, Euler, Integrator, Span, Table};
/// use nalgebra::{Point2, Vector2};
///
/// let table = Table::new(Span::new(0.0, 100.0), Span::new(0.0, 100.0));
/// let mut set = BallSet::new(
///     1,
///     vec![Point2::new(20.0, 20.0)],
///     vec![Vector2::new(10.0, 5.0)],
///     vec![9.0],
/// )
/// .unwrap();
///
/// Euler.step(&mut set, &table).unwrap();
/// assert_eq!(set.position(0), Point2::new(30.0, 25.0));
/// ```
pub struct Euler;

impl Integrator for Euler {
    fn step(&self, set: &mut BallSet, table: &Table) -> Result<(), DegenerateCollisionError> {
        for ball in set.balls_mut() {
            ball.position += ball.velocity;
        }

        let mut bounces = 0;
        for ball in set.balls_mut() {
            if boundary::resolve(ball, table) != WallContact::None {
                bounces += 1;
            }
        }

        let mut contacts = 0;
        for (i, j) in unordered_pairs(set.len()) {
            if colliding(set.ball(i), set.ball(j)) {
                if let Err(err) = resolve(set, i, j) {
                    warn!("abandoning tick: balls {i} and {j} are coincident");
                    return Err(err);
                }
                contacts += 1;
            }
        }

        trace!("tick complete: {bounces} cushion bounces, {contacts} ball contacts");
        Ok(())
    }
}
