//! Ordered routes through waypoints.
//!
//! Aggregates the visiting order with its total length.

use crate::Waypoint;

/// An open path through waypoints with its total length in kilometres.
///
/// The first waypoint is the start; no return leg is included.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use waymark_core::{Route, Waypoint};
///
/// let start = Waypoint::current_location(0.0, 0.0);
/// let stop = Waypoint::new(1, "Museum", "", Coord { x: 0.01, y: 0.0 });
/// let route = Route::new(vec![start, stop], 1.11);
///
/// assert_eq!(route.ids(), vec![0, 1]);
/// assert_eq!(route.start().map(|w| w.id), Some(0));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    waypoints: Vec<Waypoint>,
    total_distance_km: f64,
}

impl Route {
    /// Construct a route from an ordered list and its length.
    #[must_use]
    pub const fn new(waypoints: Vec<Waypoint>, total_distance_km: f64) -> Self {
        Self {
            waypoints,
            total_distance_km,
        }
    }

    /// Route consisting of the start alone.
    ///
    /// # Examples
    /// ```
    /// use waymark_core::{Route, Waypoint};
    ///
    /// let route = Route::trivial(Waypoint::current_location(1.0, 2.0));
    /// assert_eq!(route.len(), 1);
    /// assert_eq!(route.total_distance_km(), 0.0);
    /// ```
    #[must_use]
    pub fn trivial(start: Waypoint) -> Self {
        Self::new(vec![start], 0.0)
    }

    /// Waypoints in visiting order.
    #[must_use]
    pub fn waypoints(&self) -> &[Waypoint] {
        &self.waypoints
    }

    /// Consume the route, returning the ordered waypoints.
    #[must_use]
    pub fn into_waypoints(self) -> Vec<Waypoint> {
        self.waypoints
    }

    /// The first waypoint, if any.
    #[must_use]
    pub fn start(&self) -> Option<&Waypoint> {
        self.waypoints.first()
    }

    /// Total length in kilometres.
    #[must_use]
    pub const fn total_distance_km(&self) -> f64 {
        self.total_distance_km
    }

    /// Waypoint ids in visiting order.
    #[must_use]
    pub fn ids(&self) -> Vec<u64> {
        self.waypoints.iter().map(|w| w.id).collect()
    }

    /// Number of waypoints, including the start.
    #[must_use]
    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    /// Whether the route has no waypoints.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }
}
