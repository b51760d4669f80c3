//! Data models for quotes and exchange rates.

mod quote;

pub use quote::{Quote, UsdRate};
