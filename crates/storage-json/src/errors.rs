//! Storage-specific error types for the JSON collection store.
//!
//! This module provides error types that wrap filesystem and serde errors
//! and convert them to the storage-agnostic error types defined in
//! `cofre_core`.

use thiserror::Error;

use cofre_core::errors::{Error, StorageError};

/// Storage-specific errors that wrap io and serde_json types.
///
/// These errors are internal to the storage layer and are converted to
/// `cofre_core::Error` before being returned to callers.
#[derive(Error, Debug)]
pub enum JsonStorageError {
    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization failed: {0}")]
    Serde(#[from] serde_json::Error),
}

impl From<JsonStorageError> for Error {
    fn from(err: JsonStorageError) -> Self {
        match err {
            JsonStorageError::Io(e) => Error::Storage(StorageError::Internal(e.to_string())),
            JsonStorageError::Serde(e) => {
                Error::Storage(StorageError::Serialization(e.to_string()))
            }
        }
    }
}
