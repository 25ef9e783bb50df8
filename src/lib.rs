//! Facade crate for the Waymark route planner.
//!
//! This crate re-exports the core domain types and exposes the solver and the
//! JSON loaders behind feature flags.

#![forbid(unsafe_code)]

pub use waymark_core::{
    CURRENT_LOCATION_ID, Diagnostics, DistanceError, DistanceTable, DistanceTableError,
    OptimizeError, OptimizeRequest, OptimizeResponse, Optimizer, Route, Strategy, Waypoint,
    distance, haversine_km, total_distance,
};

#[cfg(feature = "solver")]
pub use waymark_solver::{
    ExactSolveError, MAX_EXACT_WAYPOINTS, OptimizerConfig, RouteOptimizer, construct, improve,
    solve_exact,
};

#[cfg(feature = "data")]
pub use waymark_data::{DataError, apply_selection, load_distances, load_places, load_selection};
