//! Cue ball into two object balls
//!
//! Demonstrates the full tick cycle: drift, cushion bounces, and elastic
//! ball contacts, with momentum and energy printed so the conservation
//! behavior is visible.
//!
//! Run with: cargo run --package billiards --example break_shot

use billiards::{BallSet, Euler, Integrator, Span, Table};
use nalgebra::{Point2, Vector2};

fn main() {
    env_logger::init();

    let table = Table::new(Span::new(0.0, 200.0), Span::new(0.0, 100.0));

    // A cue ball aimed at two touching object balls near the far cushion.
    let mut set = BallSet::new(
        3,
        vec![
            Point2::new(40.0, 50.0),
            Point2::new(140.0, 50.0),
            Point2::new(150.0, 50.0),
        ],
        vec![
            Vector2::new(8.0, 0.0),
            Vector2::new(0.0, 0.0),
            Vector2::new(0.0, 0.0),
        ],
        vec![5.0, 5.0, 5.0],
    )
    .expect("explicit construction with matching shapes");

    println!("Break shot on a {}x{} table", table.x.max, table.y.max);
    println!(
        "{:>5} {:>24} {:>24} {:>24} {:>12}",
        "tick", "cue", "object 1", "object 2", "energy"
    );

    for tick in 0..40 {
        if let Err(err) = Euler.step(&mut set, &table) {
            eprintln!("tick {tick} failed: {err}");
            break;
        }

        if tick % 4 == 0 {
            println!(
                "{:>5} {:>24} {:>24} {:>24} {:>12.2}",
                tick,
                format_position(&set, 0),
                format_position(&set, 1),
                format_position(&set, 2),
                set.total_kinetic_energy(),
            );
        }
    }

    let momentum = set.total_momentum();
    println!("\nFinal momentum: ({:.2}, {:.2})", momentum.x, momentum.y);
    println!("Final kinetic energy: {:.2}", set.total_kinetic_energy());
}

fn format_position(set: &BallSet, index: usize) -> String {
    let p = set.position(index);
    format!("({:7.2}, {:7.2})", p.x, p.y)
}
