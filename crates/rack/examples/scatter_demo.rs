//! Seeded scatter rolling around the table
//!
//! Run with: cargo run --package rack --example scatter_demo

use billiards::{Euler, Integrator, Span, Table};
use rack::{ScatterSettings, scatter};
use rand::SeedableRng;
use rand_chacha::ChaChaRng;

fn main() {
    env_logger::init();

    let table = Table::new(Span::new(0.0, 700.0), Span::new(0.0, 500.0));
    let mut rng = ChaChaRng::seed_from_u64(2026);

    let mut set = scatter(&mut rng, &table, &ScatterSettings::default())
        .expect("scatter settings produce a valid set");

    println!(
        "Scattered {} balls on a {}x{} table",
        set.len(),
        table.x.max,
        table.y.max
    );
    println!("Initial kinetic energy: {:.2}", set.total_kinetic_energy());

    for tick in 1..=200 {
        if let Err(err) = Euler.step(&mut set, &table) {
            eprintln!("tick {tick} failed: {err}");
            return;
        }
        if tick % 50 == 0 {
            println!(
                "tick {tick:>3}: kinetic energy {:.2}",
                set.total_kinetic_energy()
            );
        }
    }

    println!("Done; every ball is still on the table:");
    for i in 0..set.len() {
        let p = set.position(i);
        println!("  ball {i:>2} at ({:7.2}, {:7.2})", p.x, p.y);
    }
}
