//! `RouteOptimizer`: strategy selection between exact and heuristic solving.
//!
//! Small instances go to Held-Karp; larger ones are built greedily and then
//! refined with 2-opt anchored at the start.

use std::collections::HashSet;
use std::time::Instant;

use waymark_core::{
    Diagnostics, OptimizeError, OptimizeRequest, OptimizeResponse, Optimizer, Route, Strategy,
    Waypoint, total_distance,
};

use crate::{MAX_EXACT_WAYPOINTS, construct, improve, solve_exact};

const RELATIVE_TOLERANCE: f64 = 1e-9;

/// Configuration for [`RouteOptimizer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptimizerConfig {
    /// Largest number of stops (excluding the start) solved exactly.
    pub exact_threshold: usize,
    /// Fewest stops (excluding the start) a request must contain.
    pub min_stops: usize,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            exact_threshold: 10,
            min_stops: 0,
        }
    }
}

impl OptimizerConfig {
    /// Check the configuration against the exact solver's limits.
    ///
    /// # Errors
    /// Returns [`OptimizeError::ExactThresholdTooLarge`] when
    /// `exact_threshold` exceeds [`MAX_EXACT_WAYPOINTS`].
    ///
    /// # Examples
    /// ```
    /// use waymark_solver::OptimizerConfig;
    ///
    /// assert!(OptimizerConfig::default().validate().is_ok());
    /// let greedy = OptimizerConfig { exact_threshold: 64, ..OptimizerConfig::default() };
    /// assert!(greedy.validate().is_err());
    /// ```
    pub const fn validate(&self) -> Result<(), OptimizeError> {
        if self.exact_threshold > MAX_EXACT_WAYPOINTS {
            return Err(OptimizeError::ExactThresholdTooLarge {
                threshold: self.exact_threshold,
                max: MAX_EXACT_WAYPOINTS,
            });
        }
        Ok(())
    }
}

/// Default [`Optimizer`] combining Held-Karp with nearest neighbour and 2-opt.
///
/// # Examples
/// ```
/// use waymark_core::test_support::unit_square;
/// use waymark_core::{OptimizeRequest, Optimizer, Strategy};
/// use waymark_solver::RouteOptimizer;
///
/// # fn main() -> Result<(), waymark_core::OptimizeError> {
/// let (corners, table) = unit_square();
/// let start = corners.first().cloned().expect("four corners");
/// let response = RouteOptimizer::new().optimize(&OptimizeRequest::new(&corners, &start, &table))?;
/// assert_eq!(response.strategy, Strategy::Exact);
/// assert!((response.route.total_distance_km() - 3.0).abs() < 1e-12);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct RouteOptimizer {
    config: OptimizerConfig,
}

impl RouteOptimizer {
    /// Construct an optimizer using default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct an optimizer with explicit configuration.
    ///
    /// # Errors
    /// Returns the error from [`OptimizerConfig::validate`].
    pub fn with_config(config: OptimizerConfig) -> Result<Self, OptimizeError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &OptimizerConfig {
        &self.config
    }

    /// Stops to visit: every place except the start, in input order.
    fn remaining_stops(request: &OptimizeRequest<'_>) -> Result<Vec<Waypoint>, OptimizeError> {
        let mut seen = HashSet::with_capacity(request.places.len());
        for place in request.places {
            if !seen.insert(place.id) {
                return Err(OptimizeError::DuplicateWaypoint { id: place.id });
            }
        }
        Ok(request
            .places
            .iter()
            .filter(|place| place.id != request.start.id)
            .cloned()
            .collect())
    }

    fn solve(
        &self,
        remaining: &[Waypoint],
        request: &OptimizeRequest<'_>,
    ) -> Result<(Vec<Waypoint>, Strategy, Option<f64>), OptimizeError> {
        if remaining.is_empty() {
            return Ok((vec![request.start.clone()], Strategy::Trivial, None));
        }
        if remaining.len() <= self.config.exact_threshold {
            let (route, length) = solve_exact(remaining, request.start, request.table)?;
            return Ok((route, Strategy::Exact, Some(length)));
        }
        let mut route = Vec::with_capacity(remaining.len() + 1);
        route.push(request.start.clone());
        route.extend(construct(remaining, request.start, request.table)?);
        let improved = improve(route, request.table)?;
        Ok((improved, Strategy::Heuristic, None))
    }
}

impl Optimizer for RouteOptimizer {
    fn optimize(&self, request: &OptimizeRequest<'_>) -> Result<OptimizeResponse, OptimizeError> {
        if request.places.is_empty() {
            return Err(OptimizeError::EmptyInput);
        }
        let started_at = Instant::now();
        let remaining = Self::remaining_stops(request)?;
        if remaining.len() < self.config.min_stops {
            return Err(OptimizeError::InsufficientWaypoints {
                required: self.config.min_stops,
                found: remaining.len(),
            });
        }

        let (waypoints, strategy, reported) = self.solve(&remaining, request)?;
        let recomputed = total_distance(&waypoints, request.table)?;
        if !recomputed.is_finite() {
            return Err(OptimizeError::NonFiniteLength { length: recomputed });
        }
        if let Some(reported) = reported
            && !agrees(reported, recomputed)
        {
            return Err(OptimizeError::InconsistentTotal {
                reported,
                recomputed,
            });
        }

        let diagnostics = Diagnostics {
            solve_time: started_at.elapsed(),
            candidates_evaluated: u64::try_from(remaining.len()).unwrap_or(u64::MAX),
        };
        log::debug!(
            "{strategy} route through {} stop(s) from {} measures {recomputed:.3} km ({:?})",
            remaining.len(),
            request.start.name,
            diagnostics.solve_time
        );
        Ok(OptimizeResponse {
            route: Route::new(waypoints, recomputed),
            strategy,
            diagnostics,
        })
    }
}

#[expect(
    clippy::float_arithmetic,
    reason = "relative tolerance comparison of route lengths"
)]
fn agrees(reported: f64, recomputed: f64) -> bool {
    (reported - recomputed).abs() <= RELATIVE_TOLERANCE * recomputed.abs().max(1.0)
}
