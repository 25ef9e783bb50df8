use std::time::Duration;

use thiserror::Error;

use crate::{DistanceError, DistanceTable, Route, Waypoint};

/// Inputs for one optimization call.
///
/// Everything is borrowed; optimizers never retain or mutate the inputs.
///
/// # Examples
/// ```rust
/// use waymark_core::{DistanceTable, OptimizeRequest, Waypoint};
///
/// let start = Waypoint::current_location(47.0, 28.8);
/// let places = vec![start.clone()];
/// let table = DistanceTable::new();
/// let request = OptimizeRequest::new(&places, &start, &table);
/// assert_eq!(request.places.len(), 1);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct OptimizeRequest<'a> {
    /// Candidate waypoints; may or may not contain the start.
    pub places: &'a [Waypoint],
    /// Fixed origin of the route.
    pub start: &'a Waypoint,
    /// Distances between fixed waypoints.
    pub table: &'a DistanceTable,
}

impl<'a> OptimizeRequest<'a> {
    /// Bundle the inputs of an optimization call.
    #[must_use]
    pub const fn new(places: &'a [Waypoint], start: &'a Waypoint, table: &'a DistanceTable) -> Self {
        Self {
            places,
            start,
            table,
        }
    }
}

/// Which algorithm produced a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Strategy {
    /// No stops besides the start.
    Trivial,
    /// Held-Karp dynamic programming.
    Exact,
    /// Nearest neighbour followed by 2-opt.
    Heuristic,
}

impl Strategy {
    /// Return the strategy as a lowercase `&str`.
    ///
    /// # Examples
    /// ```
    /// use waymark_core::Strategy;
    ///
    /// assert_eq!(Strategy::Exact.as_str(), "exact");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trivial => "trivial",
            Self::Exact => "exact",
            Self::Heuristic => "heuristic",
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Timing and effort figures for a single optimization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Diagnostics {
    /// Wall-clock time spent inside the optimizer.
    pub solve_time: Duration,
    /// Number of stops considered, excluding the start.
    pub candidates_evaluated: u64,
}

/// Successful optimization result.
#[derive(Debug, Clone, PartialEq)]
pub struct OptimizeResponse {
    /// Ordered route beginning at the start.
    pub route: Route,
    /// Algorithm that produced `route`.
    pub strategy: Strategy,
    /// Timing and effort figures.
    pub diagnostics: Diagnostics,
}

/// Errors returned by [`Optimizer::optimize`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OptimizeError {
    /// No waypoints were supplied.
    #[error("at least one waypoint is required")]
    EmptyInput,
    /// Fewer stops than the caller requires.
    #[error("at least {required} stop(s) besides the start are required, found {found}")]
    InsufficientWaypoints {
        /// Minimum number of non-start waypoints.
        required: usize,
        /// Number actually supplied.
        found: usize,
    },
    /// The same id appeared more than once.
    #[error("waypoint id {id} appears more than once")]
    DuplicateWaypoint {
        /// Repeated identifier.
        id: u64,
    },
    /// A required distance could not be resolved.
    #[error(transparent)]
    Distance(#[from] DistanceError),
    /// The exact solver was asked to handle too many stops.
    #[error("exact solving supports at most {max} stops, got {count}")]
    TooManyWaypoints {
        /// Number of stops requested.
        count: usize,
        /// Largest supported instance.
        max: usize,
    },
    /// The configured exact threshold exceeds what the exact solver supports.
    #[error("exact threshold {threshold} exceeds the supported maximum of {max}")]
    ExactThresholdTooLarge {
        /// Configured threshold.
        threshold: usize,
        /// Largest supported instance.
        max: usize,
    },
    /// A solver reported a length that disagrees with re-evaluation.
    #[error("solver reported {reported} km but the route measures {recomputed} km")]
    InconsistentTotal {
        /// Length reported by the solver.
        reported: f64,
        /// Length measured by re-evaluating the route.
        recomputed: f64,
    },
    /// The best route found has no finite length.
    #[error("route length {length} km is not finite")]
    NonFiniteLength {
        /// Length that overflowed or was undefined.
        length: f64,
    },
}

/// Order waypoints into a short open route from a fixed start.
///
/// Implementations must be pure with respect to the request and return
/// errors rather than panicking. Optimizers must be `Send + Sync` so
/// independent calls can run on separate threads.
pub trait Optimizer: Send + Sync {
    /// Optimize a request, producing a route or an error.
    ///
    /// # Errors
    /// Returns an [`OptimizeError`] describing why no route was produced.
    fn optimize(&self, request: &OptimizeRequest<'_>) -> Result<OptimizeResponse, OptimizeError>;
}
