//! Precomputed pairwise distances between fixed waypoints.

use std::collections::HashMap;

use thiserror::Error;

use crate::CURRENT_LOCATION_ID;

/// Errors returned by [`DistanceTable::insert`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DistanceTableError {
    /// The current-location sentinel cannot be a table key.
    #[error("waypoint id 0 is reserved for the current location")]
    ReservedId,
    /// The distance was negative, NaN or infinite.
    #[error("distance between {from} and {to} must be finite and non-negative, got {km}")]
    InvalidDistance {
        /// First waypoint id.
        from: u64,
        /// Second waypoint id.
        to: u64,
        /// Rejected value in kilometres.
        km: f64,
    },
}

/// Symmetric distance lookup keyed by waypoint id pairs, in kilometres.
///
/// Every insert stores both orderings of the pair. Lookups try `(a, b)` and
/// then `(b, a)`; when a caller-supplied table holds differing values for the
/// two orderings, the first one found wins.
///
/// # Examples
/// ```
/// use waymark_core::DistanceTable;
///
/// # fn main() -> Result<(), waymark_core::DistanceTableError> {
/// let mut table = DistanceTable::new();
/// table.insert(1, 2, 3.5)?;
/// assert_eq!(table.get(2, 1), Some(3.5));
/// assert_eq!(table.get(1, 3), None);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DistanceTable {
    entries: HashMap<(u64, u64), f64>,
}

impl DistanceTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the distance between `a` and `b` in both orderings.
    ///
    /// # Errors
    /// Returns [`DistanceTableError::ReservedId`] when either id is the
    /// current-location sentinel and [`DistanceTableError::InvalidDistance`]
    /// for negative or non-finite values.
    pub fn insert(&mut self, a: u64, b: u64, km: f64) -> Result<(), DistanceTableError> {
        if a == CURRENT_LOCATION_ID || b == CURRENT_LOCATION_ID {
            return Err(DistanceTableError::ReservedId);
        }
        if !km.is_finite() || km < 0.0 {
            return Err(DistanceTableError::InvalidDistance {
                from: a,
                to: b,
                km,
            });
        }
        self.entries.insert((a, b), km);
        self.entries.insert((b, a), km);
        Ok(())
    }

    /// Look up the distance between `a` and `b` in either ordering.
    #[must_use]
    pub fn get(&self, a: u64, b: u64) -> Option<f64> {
        self.entries
            .get(&(a, b))
            .or_else(|| self.entries.get(&(b, a)))
            .copied()
    }

    /// Number of stored entries, counting each ordering.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all stored entries, both orderings included.
    pub fn iter(&self) -> impl Iterator<Item = ((u64, u64), f64)> + '_ {
        self.entries.iter().map(|(pair, km)| (*pair, *km))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn insert_stores_both_orderings() {
        let mut table = DistanceTable::new();
        table.insert(3, 7, 1.25).expect("valid entry");
        assert_eq!(table.len(), 2);
        assert_eq!(table.get(3, 7), Some(1.25));
        assert_eq!(table.get(7, 3), Some(1.25));
    }

    #[rstest]
    #[case(0, 5)]
    #[case(5, 0)]
    fn rejects_current_location_keys(#[case] a: u64, #[case] b: u64) {
        let mut table = DistanceTable::new();
        let err = table.insert(a, b, 1.0).expect_err("sentinel id");
        assert_eq!(err, DistanceTableError::ReservedId);
    }

    #[rstest]
    #[case(-1.0)]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    fn rejects_invalid_distances(#[case] km: f64) {
        let mut table = DistanceTable::new();
        let err = table.insert(1, 2, km).expect_err("invalid distance");
        assert!(matches!(
            err,
            DistanceTableError::InvalidDistance { from: 1, to: 2, .. }
        ));
    }
}
