//! First-improvement 2-opt refinement for open routes.
//!
//! Each candidate move reverses the inclusive segment `route[i..=j]` for
//! `1 <= i` and `i + 2 <= j < route.len()`. The element at index 0 is the
//! anchor and never moves; adjacent pairs (`j == i + 1`) are not tried.
//! Candidates are scored by re-measuring the whole route, and a move is kept
//! only when it is strictly shorter. Sweeps repeat until one accepts nothing.

use waymark_core::{DistanceError, DistanceTable, Waypoint, total_distance};

/// Refine `route` with 2-opt moves, keeping `route[0]` fixed.
///
/// The result is never longer than the input.
///
/// # Errors
/// Propagates any [`DistanceError`] raised while measuring candidates.
///
/// # Examples
/// ```
/// use waymark_core::test_support::line_instance;
/// use waymark_solver::improve;
///
/// # fn main() -> Result<(), waymark_core::DistanceError> {
/// let (places, table) = line_instance(&[(1, 0.0), (4, 3.0), (3, 2.0), (2, 1.0), (5, 4.0)]);
/// let improved = improve(places, &table)?;
/// let ids: Vec<u64> = improved.iter().map(|w| w.id).collect();
/// assert_eq!(ids, vec![1, 2, 3, 4, 5]);
/// # Ok(())
/// # }
/// ```
pub fn improve(
    mut route: Vec<Waypoint>,
    table: &DistanceTable,
) -> Result<Vec<Waypoint>, DistanceError> {
    let len = route.len();
    if len < 4 {
        return Ok(route);
    }

    let mut best = total_distance(&route, table)?;
    let mut improved = true;
    while improved {
        improved = false;
        for i in 1..len - 2 {
            for j in i + 2..len {
                reverse_segment(&mut route, i, j);
                let candidate = total_distance(&route, table)?;
                if candidate < best {
                    log::trace!("2-opt reversed {i}..={j}: {best:.6} -> {candidate:.6} km");
                    best = candidate;
                    improved = true;
                } else {
                    reverse_segment(&mut route, i, j);
                }
            }
        }
    }
    Ok(route)
}

fn reverse_segment(route: &mut [Waypoint], i: usize, j: usize) {
    if let Some(segment) = route.get_mut(i..=j) {
        segment.reverse();
    }
}
