use super::{Catalog, CatalogTables};
use crate::error::SnapshotError;
use bincode::config::standard;
use bincode::serde::{decode_from_slice, encode_to_vec};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{Read, Write};
use tracing::debug;

/// A binary copy of the catalog tables, for shipping a custom catalog
/// without its JSON sources.
#[derive(Serialize, Deserialize)]
pub struct CatalogSnapshot {
    pub tables: CatalogTables,
}

impl CatalogSnapshot {
    pub fn new(tables: CatalogTables) -> Self {
        Self { tables }
    }

    pub fn from_catalog(catalog: &Catalog) -> Self {
        Self::new(catalog.tables().clone())
    }

    /// Serializes the snapshot using the bincode format.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        encode_to_vec(self, standard()).map_err(|e| SnapshotError::Encode(e.to_string()))
    }

    /// Saves the snapshot to a file.
    pub fn save(&self, path: &str) -> Result<(), SnapshotError> {
        let bytes = self.to_bytes()?;
        let io_error = |source| SnapshotError::Io {
            path: path.to_string(),
            source,
        };
        let mut file = fs::File::create(path).map_err(io_error)?;
        file.write_all(&bytes).map_err(io_error)?;
        debug!(path, bytes = bytes.len(), "Wrote catalog snapshot");
        Ok(())
    }

    /// Loads a snapshot from a file.
    pub fn from_file(path: &str) -> Result<Self, SnapshotError> {
        let io_error = |source| SnapshotError::Io {
            path: path.to_string(),
            source,
        };
        let mut file = fs::File::open(path).map_err(io_error)?;
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes).map_err(io_error)?;
        Self::from_bytes(&bytes)
    }

    /// Deserializes a snapshot from a byte slice.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        decode_from_slice(bytes, standard())
            .map(|(snapshot, _)| snapshot) // bincode 2 returns (data, bytes_read)
            .map_err(|e| SnapshotError::Decode(e.to_string()))
    }

    /// Validates the tables and builds a catalog from them.
    pub fn into_catalog(self) -> Result<Catalog, SnapshotError> {
        Ok(Catalog::from_tables(self.tables)?)
    }
}
