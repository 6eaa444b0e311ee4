//! Scatter and rack generation
//!
//! Free sampling functions over a caller-owned `ChaChaRng`, so the same
//! seed always produces the same table. Generated states go through the
//! core's validating constructor like any hand-written ones.

use billiards::{BallSet, ShapeError, Table};
use nalgebra::{Point2, Vector2};
use rand::Rng;
use rand_chacha::ChaChaRng;

/// How many placements to attempt before accepting an overlap
///
/// Rejection sampling keeps scattered balls separated on sparse tables; on
/// a crowded table a placement eventually goes through overlapping, which
/// the engine tolerates (a resting overlap is not a collision event).
const MAX_PLACEMENT_ATTEMPTS: usize = 64;

/// Parameters for a random scatter
#[derive(Debug, Clone)]
pub struct ScatterSettings {
    /// Number of balls to place
    pub count: usize,
    /// Radius shared by every ball
    pub radius: f64,
    /// Velocity components are drawn uniformly from `[-max_speed, max_speed]`
    pub max_speed: f64,
}

impl Default for ScatterSettings {
    fn default() -> Self {
        Self {
            count: 10,
            radius: 5.0,
            max_speed: 4.0,
        }
    }
}

fn sample_range(rng: &mut ChaChaRng, min: f64, max: f64) -> f64 {
    min + rng.random::<f64>() * (max - min)
}

fn sample_position(rng: &mut ChaChaRng, table: &Table, radius: f64) -> Point2<f64> {
    Point2::new(
        sample_range(rng, table.x.min + radius, table.x.max - radius),
        sample_range(rng, table.y.min + radius, table.y.max - radius),
    )
}

/// Scatters balls uniformly over the table
///
/// Positions are inset by one radius from every cushion so no ball starts
/// in contact with a wall. Velocities are uniform in
/// `[-max_speed, max_speed]` on both axes.
///
/// # Errors
///
/// Propagates [`ShapeError`] from the core constructor (only reachable with
/// a non-positive `radius` in the settings).
///
/// # Examples
///
/// ```
/// use billiards::{Span, Table};
/// use rack::{ScatterSettings, scatter};
/// use rand::SeedableRng;
/// use rand_chacha::ChaChaRng;
///
/// let table = Table::new(Span::new(0.0, 700.0), Span::new(0.0, 500.0));
/// let mut rng = ChaChaRng::seed_from_u64(7);
///
/// let set = scatter(&mut rng, &table, &ScatterSettings::default()).unwrap();
/// assert_eq!(set.len(), 10);
/// ```
pub fn scatter(
    rng: &mut ChaChaRng,
    table: &Table,
    settings: &ScatterSettings,
) -> Result<BallSet, ShapeError> {
    let mut positions: Vec<Point2<f64>> = Vec::with_capacity(settings.count);

    for _ in 0..settings.count {
        let mut candidate = sample_position(rng, table, settings.radius);
        for _ in 0..MAX_PLACEMENT_ATTEMPTS {
            let clear = positions
                .iter()
                .all(|p| (candidate - *p).magnitude_squared() > (2.0 * settings.radius).powi(2));
            if clear {
                break;
            }
            candidate = sample_position(rng, table, settings.radius);
        }
        positions.push(candidate);
    }

    let velocities = (0..settings.count)
        .map(|_| {
            Vector2::new(
                sample_range(rng, -settings.max_speed, settings.max_speed),
                sample_range(rng, -settings.max_speed, settings.max_speed),
            )
        })
        .collect();

    let radii = vec![settings.radius; settings.count];
    BallSet::new(settings.count, positions, velocities, radii)
}

/// Centers for the fifteen-ball triangle rack
///
/// The apex ball sits at `apex`; rows extend in +x, each ball touching its
/// neighbors exactly (adjacent centers `2·radius` apart).
pub fn triangle_rack(apex: Point2<f64>, radius: f64) -> Vec<Point2<f64>> {
    let row_spacing = radius * 3.0_f64.sqrt();

    (0..5)
        .flat_map(|row| {
            (0..=row).map(move |slot| {
                Point2::new(
                    apex.x + row as f64 * row_spacing,
                    apex.y + (2 * slot - row) as f64 * radius,
                )
            })
        })
        .collect()
}

/// A racked triangle plus a cue ball rolling into it
///
/// The rack's apex sits at two thirds of the table width, centered
/// vertically; the cue ball starts at one quarter width moving straight at
/// the apex with speed `cue_speed`. The object balls start at rest, so the
/// touching rack fires no impulses until the cue arrives.
///
/// # Errors
///
/// Propagates [`ShapeError`] from the core constructor.
pub fn break_setup(table: &Table, radius: f64, cue_speed: f64) -> Result<BallSet, ShapeError> {
    let center_y = (table.y.min + table.y.max) / 2.0;
    let apex = Point2::new(
        table.x.min + (table.x.max - table.x.min) * 2.0 / 3.0,
        center_y,
    );

    let mut positions = vec![Point2::new(
        table.x.min + (table.x.max - table.x.min) / 4.0,
        center_y,
    )];
    positions.extend(triangle_rack(apex, radius));

    let count = positions.len();
    let mut velocities = vec![Vector2::new(0.0, 0.0); count];
    velocities[0] = Vector2::new(cue_speed, 0.0);

    BallSet::new(count, positions, velocities, vec![radius; count])
}
