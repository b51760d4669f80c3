//! JSON-file collection store.
//!
//! One file per logical collection under a data directory, read and
//! written as whole arrays. The read and write paths are deliberately
//! asymmetric: an absent or corrupt file reads as an empty collection with
//! a warning, while a failed write surfaces to the caller - degraded reads
//! are recoverable, silently dropped writes are not.

use std::fs;
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard};

use log::warn;
use serde::de::DeserializeOwned;
use serde::Serialize;

use cofre_core::errors::{Error, Result, StorageError};

use crate::errors::JsonStorageError;

/// Whole-collection key-value store backed by JSON files.
pub struct CollectionStore {
    dir: PathBuf,
    // serializes whole-collection writes within this process
    write_lock: Mutex<()>,
}

impl CollectionStore {
    /// Opens a store rooted at `dir`, creating the directory if needed.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| {
            Error::Storage(StorageError::Internal(format!(
                "failed to create data directory {}: {}",
                dir.display(),
                e
            )))
        })?;

        Ok(Self {
            dir,
            write_lock: Mutex::new(()),
        })
    }

    /// Reads a whole collection.
    ///
    /// An absent file is an empty collection. A file that cannot be read
    /// or parsed also reads as empty, with a warning - readers degrade
    /// gracefully rather than failing the caller.
    pub fn get_collection<T: DeserializeOwned>(&self, name: &str) -> Vec<T> {
        let path = self.collection_path(name);

        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
            Err(e) => {
                warn!("Failed to read collection '{}': {}", name, e);
                return Vec::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(records) => records,
            Err(e) => {
                warn!("Collection '{}' is corrupt, treating as empty: {}", name, e);
                Vec::new()
            }
        }
    }

    /// Replaces a whole collection.
    ///
    /// The records are written to a temp file first and renamed into
    /// place. Failures propagate to the caller.
    pub fn set_collection<T: Serialize>(&self, name: &str, records: &[T]) -> Result<()> {
        let _guard = self.lock_writes();

        self.write_collection(name, records).map_err(|e| {
            Error::Storage(StorageError::WriteFailed {
                collection: name.to_string(),
                message: e.to_string(),
            })
        })
    }

    fn collection_path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{}.json", name))
    }

    /// Lock the write mutex, recovering from poison if necessary.
    fn lock_writes(&self) -> MutexGuard<'_, ()> {
        self.write_lock.lock().unwrap_or_else(|poisoned| {
            warn!("Collection store write mutex was poisoned, recovering");
            poisoned.into_inner()
        })
    }

    fn write_collection<T: Serialize>(
        &self,
        name: &str,
        records: &[T],
    ) -> std::result::Result<(), JsonStorageError> {
        let raw = serde_json::to_string_pretty(records)?;

        let tmp = self.dir.join(format!("{}.json.tmp", name));
        fs::write(&tmp, raw)?;
        fs::rename(&tmp, self.collection_path(name))?;
        Ok(())
    }
}
