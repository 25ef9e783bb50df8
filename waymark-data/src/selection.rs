//! Selection lists: a JSON array of place ids to visit.

use std::collections::HashSet;

use camino::Utf8Path;
use waymark_core::Waypoint;

use crate::DataError;
use crate::fs::read_utf8_file;

/// Load the selection document at `path`.
///
/// Ids are returned in document order; duplicates are kept for the caller to
/// reject.
///
/// # Errors
/// Returns [`DataError::Read`] or [`DataError::Parse`] when the file cannot
/// be read or is not a JSON array of non-negative integers.
pub fn load_selection(path: &Utf8Path) -> Result<Vec<u64>, DataError> {
    let text = read_utf8_file(path).map_err(|source| DataError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| DataError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Keep the places whose id appears in `selected`, preserving place order.
///
/// Selected ids with no matching place are logged and ignored.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use waymark_core::Waypoint;
/// use waymark_data::apply_selection;
///
/// let places: Vec<Waypoint> = (1..=3)
///     .map(|id| Waypoint::new(id, format!("p{id}"), "", Coord { x: 0.0, y: 0.0 }))
///     .collect();
/// let kept = apply_selection(places, &[3, 1]);
/// let ids: Vec<u64> = kept.iter().map(|w| w.id).collect();
/// assert_eq!(ids, vec![1, 3]);
/// ```
#[must_use]
pub fn apply_selection(places: Vec<Waypoint>, selected: &[u64]) -> Vec<Waypoint> {
    let wanted: HashSet<u64> = selected.iter().copied().collect();
    let known: HashSet<u64> = places.iter().map(|place| place.id).collect();
    for missing in wanted.difference(&known) {
        log::warn!("selected place {missing} is not in the places document");
    }
    places
        .into_iter()
        .filter(|place| wanted.contains(&place.id))
        .collect()
}
