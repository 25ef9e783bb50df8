//! Test helpers for writing places and distances documents to disk.

use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

const PLACES_JSON: &str = r#"{
    "1": {"name": "Cathedral Park", "address": "Stefan cel Mare 1", "latitude": 47.0245, "longitude": 28.8322},
    "2": {"name": "Arch of Triumph", "address": "Piata Marii Adunari 1", "latitude": 47.0249, "longitude": 28.8330},
    "3": {"name": "Organ Hall", "address": "Stefan cel Mare 81", "latitude": 47.0235, "longitude": 28.8340},
    "4": {"name": "National Museum", "address": "31 August 1989 121A", "latitude": 47.0230, "longitude": 28.8320}
}"#;

/// Corners of a unit square in perimeter order, diagonals `1.4142`.
const DISTANCES_JSON: &str = r#"{
    "1": [0, 1, 1.4142, 1],
    "2": [1, 0, 1, 1.4142],
    "3": [1.4142, 1, 0, 1],
    "4": [1, 1.4142, 1, 0]
}"#;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path, contents).expect("write fixture file");
}

/// Places, distances and an optional selection file in a temporary directory.
#[derive(Debug)]
pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        write_utf8(&root.join("places.json"), PLACES_JSON.as_bytes());
        write_utf8(&root.join("distances.json"), DISTANCES_JSON.as_bytes());
        Self { _dir: dir, root }
    }

    pub(super) fn places(&self) -> Utf8PathBuf {
        self.root.join("places.json")
    }

    pub(super) fn distances(&self) -> Utf8PathBuf {
        self.root.join("distances.json")
    }

    pub(super) fn root(&self) -> &Utf8Path {
        &self.root
    }

    pub(super) fn write_selection(&self, ids: &[u64]) -> Utf8PathBuf {
        let path = self.root.join("selection.json");
        let payload = serde_json::to_vec(ids).expect("serialize selection");
        write_utf8(&path, &payload);
        path
    }
}
