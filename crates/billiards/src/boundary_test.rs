use nalgebra::{Point2, Vector2};

use crate::boundary::{Span, Table, WallContact, classify, resolve};
use crate::particles::BallSet;

fn table() -> Table {
    Table::new(Span::new(0.0, 100.0), Span::new(0.0, 100.0))
}

fn single_ball(position: Point2<f64>, velocity: Vector2<f64>, radius: f64) -> BallSet {
    BallSet::new(1, vec![position], vec![velocity], vec![radius]).unwrap()
}

#[test]
fn test_contact_bits_compose() {
    assert_eq!(WallContact::X | WallContact::Y, WallContact::Corner);
    assert_eq!(WallContact::None | WallContact::X, WallContact::X);
    assert_eq!(WallContact::Corner.bits(), 3);

    assert!(WallContact::Corner.hits_x());
    assert!(WallContact::Corner.hits_y());
    assert!(WallContact::X.hits_x());
    assert!(!WallContact::X.hits_y());
    assert!(!WallContact::None.hits_x());
    assert!(!WallContact::None.hits_y());
}

#[test]
fn test_classify_no_contact() {
    let set = single_ball(Point2::new(20.0, 20.0), Vector2::new(10.0, 5.0), 9.0);
    assert_eq!(classify(set.ball(0), &table()), WallContact::None);
}

#[test]
fn test_classify_left_and_right_cushions() {
    let set = BallSet::new(
        2,
        vec![Point2::new(20.0, 50.0), Point2::new(80.0, 50.0)],
        vec![Vector2::new(0.0, 1.0), Vector2::new(0.0, 1.0)],
        vec![21.0, 21.0],
    )
    .unwrap();

    assert_eq!(classify(set.ball(0), &table()), WallContact::X);
    assert_eq!(classify(set.ball(1), &table()), WallContact::X);
}

#[test]
fn test_classify_top_and_bottom_cushions() {
    let set = BallSet::new(
        2,
        vec![Point2::new(50.0, 20.0), Point2::new(50.0, 80.0)],
        vec![Vector2::new(0.0, 1.0), Vector2::new(0.0, 1.0)],
        vec![21.0, 21.0],
    )
    .unwrap();

    assert_eq!(classify(set.ball(0), &table()), WallContact::Y);
    assert_eq!(classify(set.ball(1), &table()), WallContact::Y);
}

#[test]
fn test_classify_tangent_counts_as_contact() {
    // Edge exactly on the left cushion: 20 - 20 == 0
    let set = single_ball(Point2::new(20.0, 30.0), Vector2::new(10.0, 5.0), 20.0);
    assert_eq!(classify(set.ball(0), &table()), WallContact::X);
}

#[test]
fn test_classify_corner() {
    // Overlapping both, overlapping one and tangent to the other, tangent to both.
    let set = BallSet::new(
        3,
        vec![
            Point2::new(19.0, 19.0),
            Point2::new(19.0, 20.0),
            Point2::new(20.0, 20.0),
        ],
        vec![
            Vector2::new(1.0, 1.0),
            Vector2::new(1.0, 1.0),
            Vector2::new(1.0, 1.0),
        ],
        vec![20.0, 20.0, 20.0],
    )
    .unwrap();

    for i in 0..3 {
        assert_eq!(classify(set.ball(i), &table()), WallContact::Corner);
    }
}

#[test]
fn test_resolve_right_cushion() {
    // Edge at 105 + 10 = 115, depth 15 past the right cushion.
    let mut set = single_ball(Point2::new(105.0, 50.0), Vector2::new(10.0, 0.0), 10.0);

    let contact = resolve(set.ball_mut(0), &table());

    assert_eq!(contact, WallContact::X);
    assert_eq!(set.position(0), Point2::new(75.0, 50.0));
    assert_eq!(set.ball(0).velocity, Vector2::new(-10.0, 0.0));
}

#[test]
fn test_resolve_left_cushion() {
    // Edge at -5 - 10 = -15, depth 15 past the left cushion.
    let mut set = single_ball(Point2::new(-5.0, 50.0), Vector2::new(-10.0, 0.0), 10.0);

    let contact = resolve(set.ball_mut(0), &table());

    assert_eq!(contact, WallContact::X);
    assert_eq!(set.position(0), Point2::new(25.0, 50.0));
    assert_eq!(set.ball(0).velocity, Vector2::new(10.0, 0.0));
}

#[test]
fn test_resolve_tangent_flips_velocity_without_moving() {
    let mut set = single_ball(Point2::new(20.0, 50.0), Vector2::new(-3.0, 1.0), 20.0);

    let contact = resolve(set.ball_mut(0), &table());

    assert_eq!(contact, WallContact::X);
    assert_eq!(set.position(0), Point2::new(20.0, 50.0));
    assert_eq!(set.ball(0).velocity, Vector2::new(3.0, 1.0));
}

#[test]
fn test_resolve_corner_flips_both_components() {
    // Depth 5 past the left cushion and 5 past the bottom cushion.
    let mut set = single_ball(Point2::new(5.0, 5.0), Vector2::new(-2.0, -3.0), 10.0);

    let contact = resolve(set.ball_mut(0), &table());

    assert_eq!(contact, WallContact::Corner);
    assert_eq!(set.position(0), Point2::new(15.0, 15.0));
    assert_eq!(set.ball(0).velocity, Vector2::new(2.0, 3.0));
}

#[test]
fn test_resolve_no_contact_leaves_ball_alone() {
    let mut set = single_ball(Point2::new(50.0, 50.0), Vector2::new(1.0, 1.0), 5.0);

    let contact = resolve(set.ball_mut(0), &table());

    assert_eq!(contact, WallContact::None);
    assert_eq!(set.position(0), Point2::new(50.0, 50.0));
    assert_eq!(set.ball(0).velocity, Vector2::new(1.0, 1.0));
}
