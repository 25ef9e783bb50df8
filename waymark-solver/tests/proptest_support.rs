//! Proptest strategies for solver property-based tests.
//!
//! Instances are points in the plane with a complete Euclidean distance
//! table, so every leg between fixed waypoints resolves.

use geo::Coord;
use proptest::prelude::*;
use waymark_core::{DistanceTable, Waypoint};

/// A generated routing instance: places (the first is the start) and a table.
#[derive(Debug, Clone)]
pub struct Instance {
    /// Waypoints with ids `1..=n`; the first one is the start.
    pub places: Vec<Waypoint>,
    /// Complete Euclidean distances between all places.
    pub table: DistanceTable,
}

impl Instance {
    /// The start waypoint.
    #[must_use]
    #[expect(clippy::expect_used, reason = "instances are never empty")]
    pub fn start(&self) -> &Waypoint {
        self.places.first().expect("instance has at least one place")
    }

    /// Every place except the start.
    #[must_use]
    pub fn stops(&self) -> &[Waypoint] {
        self.places.get(1..).unwrap_or_default()
    }
}

/// Strategy for instances with `min_count..=max_count` places.
pub fn instance_strategy(min_count: usize, max_count: usize) -> impl Strategy<Value = Instance> {
    (min_count..=max_count).prop_flat_map(|count| {
        proptest::collection::vec((0.0_f64..100.0, 0.0_f64..100.0), count).prop_map(build_instance)
    })
}

#[expect(
    clippy::float_arithmetic,
    reason = "Euclidean distances between generated points"
)]
#[expect(clippy::expect_used, reason = "generated distances are always valid")]
fn build_instance(points: Vec<(f64, f64)>) -> Instance {
    let places: Vec<Waypoint> = (1_u64..)
        .zip(&points)
        .map(|(id, &(x, y))| Waypoint::new(id, format!("p{id}"), "", Coord { x, y }))
        .collect();
    let mut table = DistanceTable::new();
    for (offset, a) in places.iter().enumerate() {
        for b in places.iter().skip(offset + 1) {
            let km = (a.location.x - b.location.x).hypot(a.location.y - b.location.y);
            table.insert(a.id, b.id, km).expect("finite non-negative distance");
        }
    }
    Instance { places, table }
}

/// Sorted ids of `route`.
#[must_use]
pub fn sorted_ids(route: &[Waypoint]) -> Vec<u64> {
    let mut ids: Vec<u64> = route.iter().map(|w| w.id).collect();
    ids.sort_unstable();
    ids
}
