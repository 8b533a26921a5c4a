use std::{
    collections::BTreeMap,
    fs, io,
    path::{Path, PathBuf},
};

use thiserror::Error;
use tracing::{debug, warn};

use crate::graphs::{City, Distance};

/// The durable distance record: city -> neighbor -> distance, mirrored in
/// both directions. BTreeMap keeps the serialized document deterministically
/// ordered.
pub type DistanceRecord = BTreeMap<City, BTreeMap<City, Distance>>;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to encode distance record")]
    Encode(#[source] serde_json::Error),
    #[error("failed to write distance record to {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Durable record of the last known distance for every city pair ever
/// written. Independent of the live graph: removing a road does not remove
/// its entry here.
pub struct DistanceStore {
    path: PathBuf,
}

impl DistanceStore {
    pub fn new(path: impl Into<PathBuf>) -> DistanceStore {
        DistanceStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the whole record. A missing or unreadable file yields an empty
    /// record, never an error.
    pub fn load(&self) -> DistanceRecord {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(error) => {
                debug!(path = %self.path.display(), %error, "no distance record, starting empty");
                return DistanceRecord::new();
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(record) => record,
            Err(error) => {
                warn!(path = %self.path.display(), %error, "distance record unreadable, starting empty");
                DistanceRecord::new()
            }
        }
    }

    /// Records the distance between a and b in both directions, rewriting
    /// the whole document.
    pub fn upsert(&self, a: &str, b: &str, distance: Distance) -> Result<(), StoreError> {
        let mut record = self.load();

        record
            .entry(a.to_string())
            .or_default()
            .insert(b.to_string(), distance);
        record
            .entry(b.to_string())
            .or_default()
            .insert(a.to_string(), distance);

        self.persist(&record)
    }

    fn persist(&self, record: &DistanceRecord) -> Result<(), StoreError> {
        let document = serde_json::to_string_pretty(record).map_err(StoreError::Encode)?;

        fs::write(&self.path, document).map_err(|source| StoreError::Write {
            path: self.path.clone(),
            source,
        })
    }
}
