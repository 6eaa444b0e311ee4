//! Naive discrete-step 2D billiards physics
//!
//! A fixed-size collection of circular balls moves inside a rectangular
//! table. Each tick advances every ball by its velocity, reflects balls off
//! the cushions, then resolves pairwise elastic collisions. The integration
//! is deliberately naive (unit timestep, single-step overlap tests); fast
//! balls can tunnel through each other or a cushion within one tick, and
//! that is an accepted property of the model, not a defect.

pub mod boundary;
pub mod collisions;
pub mod integrator;
pub mod particles;

#[cfg(test)]
mod boundary_test;

pub use boundary::{Span, Table, WallContact};
pub use collisions::{DegenerateCollisionError, colliding, elastic_collision, unordered_pairs};
pub use integrator::{Euler, Integrator};
pub use particles::{Ball, BallSet, ShapeError};
