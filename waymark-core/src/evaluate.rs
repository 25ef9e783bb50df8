//! Route length evaluation.

use crate::{DistanceError, DistanceTable, Waypoint, distance};

/// Sum of the legs between consecutive waypoints of `route`, in kilometres.
///
/// Routes with fewer than two waypoints have length zero. No return leg to
/// the first waypoint is added.
///
/// # Errors
/// Propagates the first [`DistanceError`] met along the route.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use waymark_core::{DistanceTable, Waypoint, total_distance};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let origin = Coord { x: 0.0, y: 0.0 };
/// let route = [
///     Waypoint::new(1, "A", "", origin),
///     Waypoint::new(2, "B", "", origin),
///     Waypoint::new(3, "C", "", origin),
/// ];
/// let mut table = DistanceTable::new();
/// table.insert(1, 2, 1.5)?;
/// table.insert(2, 3, 2.0)?;
///
/// assert_eq!(total_distance(&route, &table)?, 3.5);
/// # Ok(())
/// # }
/// ```
#[expect(
    clippy::float_arithmetic,
    reason = "route length is a floating-point sum of leg distances"
)]
pub fn total_distance(route: &[Waypoint], table: &DistanceTable) -> Result<f64, DistanceError> {
    route.windows(2).try_fold(0.0, |total, leg| match leg {
        [from, to] => Ok(total + distance(from, to, table)?),
        _ => Ok(total),
    })
}
