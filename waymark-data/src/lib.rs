//! Loading waypoints and distance tables from JSON documents.
//!
//! Responsibilities:
//! - Read places, distance tables and selection lists from UTF-8 paths.
//! - Tolerate the loose shapes found in exported data: stray keys, `null`
//!   entries and numbers stored as strings are skipped or coerced, never fatal.
//!
//! Boundaries:
//! - Do not encode routing rules (live in `waymark-core` and `waymark-solver`).
//!
//! Invariants:
//! - Loaders never return an empty collection; an empty document is an error.
//! - No global mutable state.

#![forbid(unsafe_code)]

mod distances;
mod error;
pub mod fs;
mod places;
mod selection;

pub use distances::load_distances;
pub use error::DataError;
pub use places::load_places;
pub use selection::{apply_selection, load_selection};
