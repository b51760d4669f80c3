//! Quote provider implementations.

pub mod brapi;
mod traits;

pub use traits::QuoteProvider;
