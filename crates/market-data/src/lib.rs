//! Cofre Market Data Crate
//!
//! This crate provides quote fetching for the Cofre back office: a
//! provider-agnostic trait, the Brapi HTTP provider, and a time-windowed
//! cache that de-duplicates repeated lookups for the same symbol.
//!
//! # Architecture
//!
//! ```text
//! +------------------+
//! |   Domain Layer   |  (accounts, investments)
//! +------------------+
//!          |
//!          v
//! +------------------+
//! | CachedQuoteClient|  (time-windowed cache, lazy expiry)
//! +------------------+
//!          |
//!          v
//! +------------------+
//! |  QuoteProvider   |  (Brapi)
//! +------------------+
//!          |
//!          v
//! +------------------+
//! |  Quote / UsdRate |  (market data)
//! +------------------+
//! ```
//!
//! # Core Types
//!
//! - [`Quote`] - Latest price, change, and name for a ticker symbol
//! - [`UsdRate`] - The USD/BRL exchange rate
//! - [`QuoteProvider`] - Trait implemented by quote sources
//! - [`QuoteCache`] - Windowed cache with lazy expiry and [`CacheStats`]
//! - [`CachedQuoteClient`] - A `QuoteProvider` wrapping another provider
//!   with caching

pub mod cache;
pub mod client;
pub mod errors;
pub mod models;
pub mod provider;

// Re-export all public types from models
pub use models::{Quote, UsdRate};

// Re-export error types
pub use errors::QuoteError;

// Re-export provider types
pub use provider::brapi::BrapiProvider;
pub use provider::QuoteProvider;

// Re-export cache types
pub use cache::{CacheStats, QuoteCache, DEFAULT_CACHE_WINDOW};
pub use client::CachedQuoteClient;
