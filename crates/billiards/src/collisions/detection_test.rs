use nalgebra::{Point2, Vector2};

use crate::collisions::detection::{colliding, unordered_pairs};
use crate::particles::BallSet;

fn pair(radii: [f64; 2], velocities: [Vector2<f64>; 2]) -> BallSet {
    BallSet::new(
        2,
        vec![Point2::new(0.0, 0.0), Point2::new(10.0, 0.0)],
        velocities.to_vec(),
        radii.to_vec(),
    )
    .unwrap()
}

#[test]
fn test_overlapping_pair_collides() {
    let set = pair([6.0, 6.0], [Vector2::new(5.0, 0.0), Vector2::new(0.0, 0.0)]);
    assert!(colliding(set.ball(0), set.ball(1)));
}

#[test]
fn test_touching_pair_collides() {
    // Radii sum exactly to the separation.
    let set = pair([5.0, 5.0], [Vector2::new(5.0, 0.0), Vector2::new(0.0, 0.0)]);
    assert!(colliding(set.ball(0), set.ball(1)));
}

#[test]
fn test_separated_pair_does_not_collide() {
    let set = pair([3.0, 3.0], [Vector2::new(5.0, 0.0), Vector2::new(0.0, 0.0)]);
    assert!(!colliding(set.ball(0), set.ball(1)));
}

#[test]
fn test_symmetric() {
    let set = pair([6.0, 6.0], [Vector2::new(5.0, 0.0), Vector2::new(0.0, 0.0)]);
    assert_eq!(
        colliding(set.ball(0), set.ball(1)),
        colliding(set.ball(1), set.ball(0))
    );

    let apart = pair([3.0, 3.0], [Vector2::new(5.0, 0.0), Vector2::new(0.0, 0.0)]);
    assert_eq!(
        colliding(apart.ball(0), apart.ball(1)),
        colliding(apart.ball(1), apart.ball(0))
    );
}

#[test]
fn test_stationary_pair_never_collides() {
    // Heavily overlapping, but both at rest: resting contact is not a
    // collision event.
    let set = pair([9.0, 9.0], [Vector2::new(0.0, 0.0), Vector2::new(0.0, 0.0)]);
    assert!(!colliding(set.ball(0), set.ball(1)));
}

#[test]
fn test_one_moving_ball_is_enough() {
    let set = pair([9.0, 9.0], [Vector2::new(0.0, 0.0), Vector2::new(0.0, 0.1)]);
    assert!(colliding(set.ball(0), set.ball(1)));
}

#[test]
fn test_unordered_pairs_visits_each_pair_once() {
    let pairs: Vec<(usize, usize)> = unordered_pairs(4).collect();

    assert_eq!(pairs, vec![(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)]);
    assert!(pairs.iter().all(|&(i, j)| i < j));
}

#[test]
fn test_unordered_pairs_small_counts() {
    assert_eq!(unordered_pairs(0).count(), 0);
    assert_eq!(unordered_pairs(1).count(), 0);
    assert_eq!(unordered_pairs(2).collect::<Vec<_>>(), vec![(0, 1)]);
}
