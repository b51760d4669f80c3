//! Quote provider trait definition.

use async_trait::async_trait;

use crate::errors::QuoteError;
use crate::models::{Quote, UsdRate};

/// Trait for quote sources.
///
/// Implement this trait to add support for a new quote API. The cached
/// client wraps any implementation without caring where the data comes
/// from.
#[async_trait]
pub trait QuoteProvider: Send + Sync {
    /// Unique identifier for this provider.
    ///
    /// Should be a constant string like "BRAPI". Used for logging and
    /// error attribution.
    fn id(&self) -> &'static str;

    /// Fetch the latest quote for a ticker symbol.
    async fn get_quote(&self, symbol: &str) -> Result<Quote, QuoteError>;

    /// Fetch the USD exchange rate against the local currency.
    async fn get_usd_rate(&self) -> Result<UsdRate, QuoteError>;
}
