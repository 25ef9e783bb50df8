//! Test-only fixtures shared by unit and behaviour tests across the workspace.
//!
//! Available under `cfg(test)` and the `test-support` feature.

use geo::Coord;

use crate::{DistanceTable, Waypoint};

/// Construct a fixed waypoint at the origin named after its id.
#[must_use]
pub fn waypoint(id: u64) -> Waypoint {
    Waypoint::new(id, format!("wp{id}"), "", Coord { x: 0.0, y: 0.0 })
}

/// Build a complete symmetric table for `ids` using `measure`.
///
/// # Panics
/// Panics when `measure` yields a negative or non-finite distance or when
/// `ids` contains the current-location sentinel.
#[must_use]
#[expect(
    clippy::expect_used,
    reason = "fixtures fail loudly on malformed test data"
)]
pub fn complete_table<F>(ids: &[u64], measure: F) -> DistanceTable
where
    F: Fn(u64, u64) -> f64,
{
    let mut table = DistanceTable::new();
    for (offset, &a) in ids.iter().enumerate() {
        for &b in ids.iter().skip(offset + 1) {
            table
                .insert(a, b, measure(a, b))
                .expect("fixture distances must be valid");
        }
    }
    table
}

/// Waypoints placed on a number line, with distances `|x_a - x_b|`.
///
/// `positions` pairs each id with its coordinate on the line.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "line distances are absolute coordinate differences"
)]
pub fn line_instance(positions: &[(u64, f64)]) -> (Vec<Waypoint>, DistanceTable) {
    let places = positions.iter().map(|&(id, _)| waypoint(id)).collect();
    let ids: Vec<u64> = positions.iter().map(|&(id, _)| id).collect();
    let position = |id: u64| {
        positions
            .iter()
            .find(|&&(candidate, _)| candidate == id)
            .map_or(0.0, |&(_, x)| x)
    };
    let table = complete_table(&ids, |a, b| (position(a) - position(b)).abs());
    (places, table)
}

/// Corners of a unit square, ids `1..=4` in perimeter order.
///
/// Adjacent corners are `1.0` apart and opposite corners `√2`.
#[must_use]
pub fn unit_square() -> (Vec<Waypoint>, DistanceTable) {
    let corners = vec![
        Waypoint::new(1, "south-west", "", Coord { x: 0.0, y: 0.0 }),
        Waypoint::new(2, "south-east", "", Coord { x: 1.0, y: 0.0 }),
        Waypoint::new(3, "north-east", "", Coord { x: 1.0, y: 1.0 }),
        Waypoint::new(4, "north-west", "", Coord { x: 0.0, y: 1.0 }),
    ];
    let table = complete_table(&[1, 2, 3, 4], |a, b| {
        if a.abs_diff(b) == 2 {
            std::f64::consts::SQRT_2
        } else {
            1.0
        }
    });
    (corners, table)
}
