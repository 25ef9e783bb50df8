//! Resolve the travel distance between two waypoints.
//!
//! Fixed waypoints are looked up in a [`DistanceTable`]. The current-location
//! sentinel never appears in the table, so any pair involving it falls back
//! to the great-circle distance.

use geo::Coord;
use thiserror::Error;

use crate::{DistanceTable, Waypoint};

/// Mean Earth radius used by [`haversine_km`], in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Errors from [`distance`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DistanceError {
    /// The table holds neither ordering of the pair.
    #[error("distance between waypoints {from} and {to} not found")]
    NotFound {
        /// Waypoint the leg starts from.
        from: u64,
        /// Waypoint the leg ends at.
        to: u64,
    },
    /// The great-circle distance between the pair is not a finite number.
    #[error("distance between waypoints {from} and {to} is not finite")]
    NonFinite {
        /// Waypoint the leg starts from.
        from: u64,
        /// Waypoint the leg ends at.
        to: u64,
    },
}

/// Great-circle distance between two WGS84 coordinates, in kilometres.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use waymark_core::haversine_km;
///
/// let km = haversine_km(Coord { x: 0.0, y: 0.0 }, Coord { x: 1.0, y: 0.0 });
/// assert!((km - 111.19).abs() < 0.5);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "the haversine formula is floating-point trigonometry"
)]
pub fn haversine_km(from: Coord<f64>, to: Coord<f64>) -> f64 {
    let lat1 = from.y.to_radians();
    let lat2 = to.y.to_radians();
    let half_dlat = (to.y - from.y).to_radians() / 2.0;
    let half_dlon = (to.x - from.x).to_radians() / 2.0;

    // Rounding can push `h` just past 1 for antipodal points.
    let h = (half_dlat.sin().powi(2) + lat1.cos() * lat2.cos() * half_dlon.sin().powi(2))
        .clamp(0.0, 1.0);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_KM * c
}

/// Distance in kilometres between `a` and `b`.
///
/// Identical ids short-circuit to zero. Pairs involving the current location
/// use [`haversine_km`]; every other pair must be present in `table`.
///
/// # Errors
/// Returns [`DistanceError::NotFound`] when a fixed pair is missing from the
/// table in both orderings, and [`DistanceError::NonFinite`] when a
/// great-circle leg is not a finite number (for example from NaN
/// coordinates).
///
/// # Examples
/// ```
/// use geo::Coord;
/// use waymark_core::{DistanceError, DistanceTable, Waypoint, distance};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let a = Waypoint::new(1, "A", "", Coord { x: 0.0, y: 0.0 });
/// let b = Waypoint::new(2, "B", "", Coord { x: 0.0, y: 0.0 });
/// let c = Waypoint::new(3, "C", "", Coord { x: 0.0, y: 0.0 });
/// let mut table = DistanceTable::new();
/// table.insert(1, 2, 4.0)?;
///
/// assert_eq!(distance(&b, &a, &table)?, 4.0);
/// assert_eq!(
///     distance(&a, &c, &table),
///     Err(DistanceError::NotFound { from: 1, to: 3 }),
/// );
/// # Ok(())
/// # }
/// ```
pub fn distance(a: &Waypoint, b: &Waypoint, table: &DistanceTable) -> Result<f64, DistanceError> {
    if a.id == b.id {
        return Ok(0.0);
    }
    if a.is_current_location() || b.is_current_location() {
        let km = haversine_km(a.location, b.location);
        if !km.is_finite() {
            log::warn!(
                "great-circle distance between {} (id {}) and {} (id {}) is {km}",
                a.name,
                a.id,
                b.name,
                b.id
            );
            return Err(DistanceError::NonFinite {
                from: a.id,
                to: b.id,
            });
        }
        return Ok(km);
    }
    table.get(a.id, b.id).ok_or_else(|| {
        log::warn!(
            "distance between {} (id {}) and {} (id {}) not found in either ordering",
            a.name,
            a.id,
            b.name,
            b.id
        );
        DistanceError::NotFound {
            from: a.id,
            to: b.id,
        }
    })
}
