//! Distance documents: a JSON object keyed by decimal id.
//!
//! Two value shapes are accepted per key:
//!
//! - a row, `"3": [d1, d2, ...]`, where entry `k` is the distance from id 3 to
//!   id `k + 1`;
//! - a legacy scalar, `"3": d`, meaning the distance between id 1 and id 3.
//!
//! Numbers and numeric strings are both accepted. `null` and unparsable
//! entries are skipped.

use camino::Utf8Path;
use serde_json::{Map, Value};
use waymark_core::DistanceTable;

use crate::DataError;
use crate::fs::read_utf8_file;

/// Id every legacy scalar entry is measured from.
const LEGACY_ORIGIN_ID: u64 = 1;

/// Load the distance document at `path` for places `1..=total_places`.
///
/// Keys outside `1..=total_places` and rows shorter than `total_places` are
/// skipped; only the first `total_places` entries of a row are read. Every
/// distance is stored in both orderings.
///
/// # Errors
/// Returns [`DataError::Read`] or [`DataError::Parse`] when the file cannot
/// be read or is not a JSON object, and [`DataError::NoDistances`] when no
/// distance could be parsed.
pub fn load_distances(path: &Utf8Path, total_places: usize) -> Result<DistanceTable, DataError> {
    let text = read_utf8_file(path).map_err(|source| DataError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let document: Option<Map<String, Value>> =
        serde_json::from_str(&text).map_err(|source| DataError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    let table = document
        .map(|entries| parse_distances(&entries, total_places))
        .unwrap_or_default();
    if table.is_empty() {
        return Err(DataError::NoDistances {
            path: path.to_path_buf(),
        });
    }
    log::debug!("loaded {} directed distance(s) from {path}", table.len());
    Ok(table)
}

fn parse_distances(entries: &Map<String, Value>, total_places: usize) -> DistanceTable {
    let limit = u64::try_from(total_places).unwrap_or(u64::MAX);
    let mut table = DistanceTable::new();
    for (key, value) in entries {
        let Some(from) = key.parse::<u64>().ok().filter(|id| (1..=limit).contains(id)) else {
            log::debug!("skipping distance key {key:?} outside 1..={total_places}");
            continue;
        };
        match value {
            Value::Array(row) => {
                if row.len() < total_places {
                    log::warn!(
                        "skipping distance row {from}: {} entries, expected {total_places}",
                        row.len()
                    );
                    continue;
                }
                for (to, entry) in (1_u64..).zip(row.iter().take(total_places)) {
                    if let Some(km) = numeric(entry) {
                        record(&mut table, from, to, km);
                    }
                }
            }
            Value::Number(_) | Value::String(_) => {
                if let Some(km) = numeric(value) {
                    record(&mut table, LEGACY_ORIGIN_ID, from, km);
                }
            }
            _ => log::warn!("skipping distance entry {from}: unsupported value {value}"),
        }
    }
    table
}

fn numeric(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.parse().ok(),
        _ => None,
    }
}

fn record(table: &mut DistanceTable, from: u64, to: u64, km: f64) {
    if from == to {
        return;
    }
    if let Err(err) = table.insert(from, to, km) {
        log::warn!("skipping distance entry: {err}");
    }
}
