use geo::Coord;

/// Identifier reserved for the transient "current location" waypoint.
///
/// A waypoint carrying this id never appears in a [`DistanceTable`] and is
/// always resolved geodesically.
///
/// [`DistanceTable`]: crate::DistanceTable
pub const CURRENT_LOCATION_ID: u64 = 0;

/// A place the visitor wants to stop at.
///
/// Coordinates are WGS84 with `x = longitude` and `y = latitude`.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use waymark_core::Waypoint;
///
/// let park = Waypoint::new(3, "Park", "1 Main St", Coord { x: 28.83, y: 47.02 });
///
/// assert_eq!(park.id, 3);
/// assert_eq!(park.latitude(), 47.02);
/// assert!(!park.is_current_location());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "WaypointRecord", from = "WaypointRecord")
)]
pub struct Waypoint {
    /// Stable identifier; `0` marks the current location.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Postal address, possibly empty.
    pub address: String,
    /// Geographic position.
    pub location: Coord<f64>,
}

impl Waypoint {
    /// Construct a waypoint.
    pub fn new(
        id: u64,
        name: impl Into<String>,
        address: impl Into<String>,
        location: Coord<f64>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            address: address.into(),
            location,
        }
    }

    /// Construct the ephemeral current-location waypoint.
    ///
    /// # Examples
    /// ```
    /// use waymark_core::Waypoint;
    ///
    /// let here = Waypoint::current_location(47.0105, 28.8638);
    /// assert!(here.is_current_location());
    /// assert_eq!(here.longitude(), 28.8638);
    /// ```
    pub fn current_location(latitude: f64, longitude: f64) -> Self {
        Self::new(
            CURRENT_LOCATION_ID,
            "Current location",
            "",
            Coord {
                x: longitude,
                y: latitude,
            },
        )
    }

    /// Latitude in degrees.
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.location.y
    }

    /// Longitude in degrees.
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.location.x
    }

    /// Whether this is the current-location sentinel.
    #[must_use]
    pub const fn is_current_location(&self) -> bool {
        self.id == CURRENT_LOCATION_ID
    }
}

/// Flat wire shape used when `serde` is enabled.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct WaypointRecord {
    id: u64,
    #[serde(default)]
    name: String,
    #[serde(default)]
    address: String,
    latitude: f64,
    longitude: f64,
}

#[cfg(feature = "serde")]
impl From<Waypoint> for WaypointRecord {
    fn from(waypoint: Waypoint) -> Self {
        Self {
            id: waypoint.id,
            name: waypoint.name,
            address: waypoint.address,
            latitude: waypoint.location.y,
            longitude: waypoint.location.x,
        }
    }
}

#[cfg(feature = "serde")]
impl From<WaypointRecord> for Waypoint {
    fn from(record: WaypointRecord) -> Self {
        Self::new(
            record.id,
            record.name,
            record.address,
            Coord {
                x: record.longitude,
                y: record.latitude,
            },
        )
    }
}
