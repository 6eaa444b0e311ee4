//! Initial-condition generation for the billiards engine
//!
//! The physics core only accepts explicit positions, velocities, and radii;
//! everything random lives here, on the caller's side, driven by a seeded
//! RNG so runs are reproducible.

pub mod generation;


pub use generation::{ScatterSettings, break_setup, scatter, triangle_rack};
