//! Places documents: a JSON object keyed by decimal id.
//!
//! ```json
//! { "1": { "name": "Park", "address": "...", "latitude": 47.02, "longitude": 28.83 } }
//! ```

use camino::Utf8Path;
use geo::Coord;
use serde::Deserialize;
use serde_json::{Map, Value};
use waymark_core::{CURRENT_LOCATION_ID, Waypoint};

use crate::DataError;
use crate::fs::read_utf8_file;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PlaceRecord {
    name: String,
    address: String,
    latitude: f64,
    longitude: f64,
}

/// Load the places document at `path`, sorted by id.
///
/// Entries whose key is not a decimal id, whose id is the reserved
/// current-location id, or whose value is not a place object are skipped
/// with a warning.
///
/// # Errors
/// Returns [`DataError::Read`] or [`DataError::Parse`] when the file cannot
/// be read or is not a JSON object, and [`DataError::NoPlaces`] when no
/// usable entry remains.
pub fn load_places(path: &Utf8Path) -> Result<Vec<Waypoint>, DataError> {
    let text = read_utf8_file(path).map_err(|source| DataError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let document: Option<Map<String, Value>> =
        serde_json::from_str(&text).map_err(|source| DataError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    let places = document.map(parse_places).unwrap_or_default();
    if places.is_empty() {
        return Err(DataError::NoPlaces {
            path: path.to_path_buf(),
        });
    }
    log::debug!("loaded {} place(s) from {path}", places.len());
    Ok(places)
}

fn parse_places(document: Map<String, Value>) -> Vec<Waypoint> {
    let mut places: Vec<Waypoint> = document
        .into_iter()
        .filter_map(|(key, value)| parse_place(&key, value))
        .collect();
    places.sort_by_key(|place| place.id);
    places
}

fn parse_place(key: &str, value: Value) -> Option<Waypoint> {
    let Ok(id) = key.parse::<u64>() else {
        log::warn!("skipping place with non-numeric key {key:?}");
        return None;
    };
    if id == CURRENT_LOCATION_ID {
        log::warn!("skipping place {key:?}: id {CURRENT_LOCATION_ID} is reserved");
        return None;
    }
    match serde_json::from_value::<PlaceRecord>(value) {
        Ok(record) => Some(Waypoint::new(
            id,
            record.name,
            record.address,
            Coord {
                x: record.longitude,
                y: record.latitude,
            },
        )),
        Err(err) => {
            log::warn!("skipping malformed place {id}: {err}");
            None
        }
    }
}
