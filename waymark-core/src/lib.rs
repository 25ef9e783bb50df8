//! Core domain types for the Waymark route optimizer.
//!
//! The crate models waypoints, the precomputed distance table and routes,
//! resolves leg distances, measures routes, and defines the [`Optimizer`]
//! seam that solver crates implement. Nothing here performs I/O.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod distance;
mod distance_table;
mod evaluate;
mod optimizer;
mod route;
mod waypoint;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use distance::{DistanceError, EARTH_RADIUS_KM, distance, haversine_km};
pub use distance_table::{DistanceTable, DistanceTableError};
pub use evaluate::total_distance;
pub use optimizer::{
    Diagnostics, OptimizeError, OptimizeRequest, OptimizeResponse, Optimizer, Strategy,
};
pub use route::Route;
pub use waypoint::{CURRENT_LOCATION_ID, Waypoint};
