//! Pairwise ball collisions: detection and elastic resolution
//!
//! Detection is a single-step geometric overlap test; resolution applies the
//! 2D elastic impulse along the line of centers. Both operate on one pair at
//! a time through the shared ball set, because resolving a pair changes
//! whether later pairs in the same tick collide.

pub mod detection;
pub mod resolution;

#[cfg(test)]
mod detection_test;

pub use detection::{colliding, unordered_pairs};
pub use resolution::{DegenerateCollisionError, elastic_collision, resolve};
