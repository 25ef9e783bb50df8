//! Exact shortest open paths via Held-Karp subset dynamic programming.
//!
//! `dp[mask][last]` is the length of the shortest path that leaves the start,
//! visits exactly the stops in `mask` and ends at `last`. Time is
//! `O(n² · 2ⁿ)` and memory `O(n · 2ⁿ)`, so instances are capped at
//! [`MAX_EXACT_WAYPOINTS`] stops.

use thiserror::Error;
use waymark_core::{DistanceError, DistanceTable, OptimizeError, Waypoint, distance};

/// Largest number of stops (excluding the start) the exact solver accepts.
pub const MAX_EXACT_WAYPOINTS: usize = 16;

const NO_PREDECESSOR: u8 = u8::MAX;

/// Errors from [`solve_exact`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExactSolveError {
    /// The instance exceeds [`MAX_EXACT_WAYPOINTS`].
    #[error("exact solving supports at most {max} stops, got {count}")]
    TooManyWaypoints {
        /// Number of stops supplied.
        count: usize,
        /// Largest supported instance.
        max: usize,
    },
    /// A leg between two waypoints could not be resolved.
    #[error(transparent)]
    Distance(#[from] DistanceError),
    /// Every complete order has a length that overflows to infinity.
    #[error("shortest route length {length} km is not finite")]
    NonFiniteLength {
        /// Best length found.
        length: f64,
    },
}

impl From<ExactSolveError> for OptimizeError {
    fn from(err: ExactSolveError) -> Self {
        match err {
            ExactSolveError::TooManyWaypoints { count, max } => {
                Self::TooManyWaypoints { count, max }
            }
            ExactSolveError::Distance(source) => Self::Distance(source),
            ExactSolveError::NonFiniteLength { length } => Self::NonFiniteLength { length },
        }
    }
}

/// Leg lengths resolved up front so the DP never touches the table.
struct LegMatrix {
    from_start: Vec<f64>,
    between: Vec<f64>,
    size: usize,
}

impl LegMatrix {
    fn resolve(
        remaining: &[Waypoint],
        start: &Waypoint,
        table: &DistanceTable,
    ) -> Result<Self, DistanceError> {
        let from_start = remaining
            .iter()
            .map(|stop| distance(start, stop, table))
            .collect::<Result<Vec<_>, _>>()?;
        let between = remaining
            .iter()
            .flat_map(|from| remaining.iter().map(move |to| (from, to)))
            .map(|(from, to)| distance(from, to, table))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            from_start,
            between,
            size: remaining.len(),
        })
    }

    #[expect(
        clippy::indexing_slicing,
        reason = "indices are bounded by the number of stops"
    )]
    fn leg(&self, from: usize, to: usize) -> f64 {
        self.between[from * self.size + to]
    }
}

/// Provably shortest open route from `start` through every stop in `remaining`.
///
/// Returns the full route with `start` first, together with its length. Ties
/// between equally short routes resolve towards lower input indices.
///
/// # Errors
/// Returns [`ExactSolveError::TooManyWaypoints`] above
/// [`MAX_EXACT_WAYPOINTS`] stops, and [`ExactSolveError::Distance`] when any
/// leg cannot be resolved. All legs are resolved before the search starts.
/// Returns [`ExactSolveError::NonFiniteLength`] when the shortest order's
/// length overflows; a partial order is never returned.
///
/// # Examples
/// ```
/// use waymark_core::test_support::unit_square;
/// use waymark_solver::solve_exact;
///
/// # fn main() -> Result<(), waymark_solver::ExactSolveError> {
/// let (corners, table) = unit_square();
/// let (start, rest) = corners.split_first().expect("four corners");
/// let (route, length) = solve_exact(rest, start, &table)?;
/// assert_eq!(route.len(), 4);
/// assert!((length - 3.0).abs() < 1e-12);
/// # Ok(())
/// # }
/// ```
#[expect(
    clippy::float_arithmetic,
    clippy::indexing_slicing,
    reason = "dynamic programming over a dense table of path lengths"
)]
pub fn solve_exact(
    remaining: &[Waypoint],
    start: &Waypoint,
    table: &DistanceTable,
) -> Result<(Vec<Waypoint>, f64), ExactSolveError> {
    let n = remaining.len();
    if n == 0 {
        return Ok((vec![start.clone()], 0.0));
    }
    if n > MAX_EXACT_WAYPOINTS {
        return Err(ExactSolveError::TooManyWaypoints {
            count: n,
            max: MAX_EXACT_WAYPOINTS,
        });
    }

    let legs = LegMatrix::resolve(remaining, start, table)?;
    let states = 1_usize << n;
    let mut dp = vec![f64::INFINITY; states * n];
    let mut prev = vec![NO_PREDECESSOR; states * n];

    for (i, &leg) in legs.from_start.iter().enumerate() {
        dp[(1 << i) * n + i] = leg;
    }

    for mask in 1..states {
        for last in (0..n).filter(|&last| mask & (1 << last) != 0) {
            let rest = mask ^ (1 << last);
            if rest == 0 {
                continue;
            }
            for before in (0..n).filter(|&before| rest & (1 << before) != 0) {
                let candidate = dp[rest * n + before] + legs.leg(before, last);
                if candidate < dp[mask * n + last] {
                    dp[mask * n + last] = candidate;
                    prev[mask * n + last] = u8::try_from(before).unwrap_or(NO_PREDECESSOR);
                }
            }
        }
    }

    let full = states - 1;
    let (mut last, best) = (0..n)
        .map(|last| (last, dp[full * n + last]))
        .fold((0, f64::INFINITY), |(best_last, best), (last, length)| {
            if length < best {
                (last, length)
            } else {
                (best_last, best)
            }
        });
    if !best.is_finite() {
        return Err(ExactSolveError::NonFiniteLength { length: best });
    }

    let mut order = Vec::with_capacity(n);
    let mut mask = full;
    loop {
        order.push(last);
        let before = prev[mask * n + last];
        mask ^= 1 << last;
        if before == NO_PREDECESSOR {
            break;
        }
        last = usize::from(before);
    }
    order.reverse();

    let mut route = Vec::with_capacity(n + 1);
    route.push(start.clone());
    route.extend(order.into_iter().map(|index| remaining[index].clone()));
    Ok((route, best))
}
