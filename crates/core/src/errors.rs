//! Core error types for the Cofre application.
//!
//! This module defines storage-agnostic error types. Backend-specific
//! errors (filesystem, serialization) are converted to these types by the
//! storage layer.

use thiserror::Error;

use cofre_market_data::QuoteError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the application.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Storage operation failed: {0}")]
    Storage(#[from] StorageError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// A document of the same kind is already registered. Blocks the whole
    /// create operation, never a partial write.
    #[error("An account with {kind} {document} already exists")]
    DuplicateDocument {
        kind: &'static str,
        document: String,
    },

    #[error("Quote operation failed: {0}")]
    Quote(#[from] QuoteError),

    #[error("Record not found: {0}")]
    NotFound(String),

    #[error("Repository error: {0}")]
    Repository(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Storage-agnostic error type for persistence operations.
///
/// Reads of absent or corrupt collections degrade to an empty collection at
/// the storage layer and never surface here; writes fail loudly through
/// these variants.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Writing a whole collection failed.
    #[error("Failed to write collection '{collection}': {message}")]
    WriteFailed { collection: String, message: String },

    /// A record could not be serialized.
    #[error("Serialization failed: {0}")]
    Serialization(String),

    /// Internal/unexpected storage error.
    #[error("Internal storage error: {0}")]
    Internal(String),
}

/// Validation errors for user input.
///
/// These are field-scoped and recovered locally; one invalid field never
/// blocks validation messages for the others at the presentation layer.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Invalid value for field '{field}': {message}")]
    InvalidField { field: String, message: String },

    #[error("Invalid document number: {0}")]
    InvalidDocument(String),

    #[error("Value out of range for field '{field}': {message}")]
    OutOfRange { field: String, message: String },

    #[error("Failed to parse decimal number: {0}")]
    DecimalParse(#[from] rust_decimal::Error),
}

impl From<rust_decimal::Error> for Error {
    fn from(err: rust_decimal::Error) -> Self {
        Error::Validation(ValidationError::DecimalParse(err))
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
