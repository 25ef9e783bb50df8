//! Greedy nearest-neighbour route construction.

use waymark_core::{DistanceError, DistanceTable, Waypoint, distance};

/// Visit `remaining` greedily, always stepping to the closest unvisited stop.
///
/// Ties go to the stop listed first in `remaining`. The returned order
/// excludes `start`; callers prepend it.
///
/// A candidate whose distance cannot be resolved from the current position is
/// passed over for that step. When no candidate can be reached the first
/// failure of that step is returned, so every stop is either visited or the
/// call fails.
///
/// # Errors
/// Returns [`DistanceError::NotFound`] when no unvisited stop is reachable
/// from the current position.
///
/// # Examples
/// ```
/// use waymark_core::test_support::unit_square;
/// use waymark_solver::construct;
///
/// # fn main() -> Result<(), waymark_core::DistanceError> {
/// let (corners, table) = unit_square();
/// let (start, rest) = corners.split_first().expect("four corners");
/// let order: Vec<u64> = construct(rest, start, &table)?.iter().map(|w| w.id).collect();
/// assert_eq!(order, vec![2, 3, 4]);
/// # Ok(())
/// # }
/// ```
pub fn construct(
    remaining: &[Waypoint],
    start: &Waypoint,
    table: &DistanceTable,
) -> Result<Vec<Waypoint>, DistanceError> {
    let mut unvisited: Vec<&Waypoint> = remaining.iter().collect();
    let mut route = Vec::with_capacity(remaining.len());
    let mut current = start;

    while let Some(index) = nearest(current, &unvisited, table)? {
        let next = unvisited.remove(index);
        route.push(next.clone());
        current = next;
    }
    Ok(route)
}

/// Position in `candidates` of the closest reachable candidate.
///
/// `Ok(None)` means there are no candidates left.
fn nearest(
    current: &Waypoint,
    candidates: &[&Waypoint],
    table: &DistanceTable,
) -> Result<Option<usize>, DistanceError> {
    let mut best: Option<(usize, f64)> = None;
    let mut failure: Option<DistanceError> = None;

    for (index, candidate) in candidates.iter().enumerate() {
        match distance(current, candidate, table) {
            Ok(km) => {
                if best.is_none_or(|(_, best_km)| km < best_km) {
                    best = Some((index, km));
                }
            }
            Err(err) => {
                log::warn!(
                    "skipping {} (id {}) as a next stop from {} (id {}): {err}",
                    candidate.name,
                    candidate.id,
                    current.name,
                    current.id
                );
                failure.get_or_insert(err);
            }
        }
    }

    match (best, failure) {
        (Some((index, _)), _) => Ok(Some(index)),
        (None, Some(err)) => Err(err),
        (None, None) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use waymark_core::test_support::{line_instance, unit_square, waypoint};

    fn ids(route: &[Waypoint]) -> Vec<u64> {
        route.iter().map(|w| w.id).collect()
    }

    #[rstest]
    fn empty_remaining_yields_empty_route() {
        let route = construct(&[], &waypoint(1), &DistanceTable::new()).expect("nothing to do");
        assert!(route.is_empty());
    }

    #[rstest]
    fn visits_adjacent_corners_before_the_diagonal() {
        let (corners, table) = unit_square();
        let (start, rest) = corners.split_first().expect("four corners");
        let route = construct(rest, start, &table).expect("complete table");
        assert_eq!(ids(&route), vec![2, 3, 4]);
    }

    #[rstest]
    fn ties_prefer_earlier_input_position() {
        let (places, table) = line_instance(&[(1, 0.0), (2, 1.0), (3, -1.0)]);
        let (start, rest) = places.split_first().expect("three places");
        let route = construct(rest, start, &table).expect("complete table");
        assert_eq!(ids(&route), vec![2, 3]);

        let reversed: Vec<Waypoint> = rest.iter().rev().cloned().collect();
        let route = construct(&reversed, start, &table).expect("complete table");
        assert_eq!(ids(&route), vec![3, 2]);
    }

    #[rstest]
    fn unreachable_candidate_is_deferred_not_dropped() {
        // 1 -> 3 is missing, so 3 must be reached via 2.
        let mut table = DistanceTable::new();
        table.insert(1, 2, 5.0).expect("valid entry");
        table.insert(2, 3, 1.0).expect("valid entry");
        let route = construct(&[waypoint(3), waypoint(2)], &waypoint(1), &table)
            .expect("3 is reachable through 2");
        assert_eq!(ids(&route), vec![2, 3]);
    }

    #[rstest]
    fn fails_when_no_candidate_is_reachable() {
        let mut table = DistanceTable::new();
        table.insert(1, 2, 1.0).expect("valid entry");
        let err = construct(&[waypoint(2), waypoint(3)], &waypoint(1), &table)
            .expect_err("3 is unreachable from 2");
        assert_eq!(err, DistanceError::NotFound { from: 2, to: 3 });
    }

    #[rstest]
    fn current_location_start_uses_geodesic_first_leg() {
        let start = Waypoint::current_location(0.0, 0.0);
        let near = Waypoint::new(1, "near", "", geo::Coord { x: 0.01, y: 0.0 });
        let far = Waypoint::new(2, "far", "", geo::Coord { x: 1.0, y: 0.0 });
        let mut table = DistanceTable::new();
        table.insert(1, 2, 110.0).expect("valid entry");
        let route = construct(&[far, near], &start, &table).expect("complete inputs");
        assert_eq!(ids(&route), vec![1, 2]);
    }
}
