//! JSON-file storage implementation for Cofre.
//!
//! This crate persists whole collections as JSON files, one file per
//! logical collection, and implements the repository traits defined in
//! `cofre-core`. It is the only place in the application that touches the
//! filesystem.
//!
//! # Architecture
//!
//! ```text
//! core (domain)
//!       │
//!       ▼
//! storage-json (this crate)
//!       │
//!       ▼
//! <data dir>/accounts.json, investments.json
//! ```
//!
//! Reads of absent or corrupt files degrade to empty collections; writes
//! go through a temp file and rename and fail loudly. Mutating one record
//! means reading, modifying, and rewriting the whole collection - there is
//! no partial-write guarantee and no cross-process locking.

pub mod errors;
pub mod store;

// Repository implementations
pub mod accounts;
pub mod investments;

// Re-export store utilities
pub use store::CollectionStore;

// Re-export storage errors
pub use errors::JsonStorageError;

// Re-export from cofre-core for convenience
pub use cofre_core::errors::{Error, Result, StorageError};
