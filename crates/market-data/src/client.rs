//! Cached quote client.
//!
//! Wraps any [`QuoteProvider`] with two [`QuoteCache`]s: one keyed by
//! ticker symbol, one holding the USD rate under a fixed key so symbol
//! lookups can never collide with it.

use std::time::Duration;

use async_trait::async_trait;

use crate::cache::{CacheStats, QuoteCache, DEFAULT_CACHE_WINDOW};
use crate::errors::QuoteError;
use crate::models::{Quote, UsdRate};
use crate::provider::QuoteProvider;

/// Key under which the USD rate is cached.
const USD_RATE_KEY: &str = "USD-BRL";

/// A [`QuoteProvider`] that serves repeated lookups from a time-windowed
/// cache.
///
/// Construct one instance and share it; the cache is explicit state, not a
/// process-wide singleton.
pub struct CachedQuoteClient<P> {
    provider: P,
    quotes: QuoteCache<Quote>,
    usd_rate: QuoteCache<UsdRate>,
}

impl<P: QuoteProvider> CachedQuoteClient<P> {
    /// Wrap `provider` with the default 30-second window.
    pub fn new(provider: P) -> Self {
        Self::with_window(provider, DEFAULT_CACHE_WINDOW)
    }

    /// Wrap `provider` with a custom cache window.
    pub fn with_window(provider: P, window: Duration) -> Self {
        Self {
            provider,
            quotes: QuoteCache::new(window),
            usd_rate: QuoteCache::new(window),
        }
    }

    /// Removes every cached quote and the cached USD rate.
    pub fn clear_cache(&self) {
        self.quotes.clear();
        self.usd_rate.clear();
    }

    /// Combined stats across the symbol and USD-rate caches.
    pub fn cache_stats(&self) -> CacheStats {
        let quotes = self.quotes.stats();
        let usd = self.usd_rate.stats();

        CacheStats {
            total: quotes.total + usd.total,
            valid: quotes.valid + usd.valid,
            expired: quotes.expired + usd.expired,
        }
    }
}

#[async_trait]
impl<P: QuoteProvider> QuoteProvider for CachedQuoteClient<P> {
    fn id(&self) -> &'static str {
        self.provider.id()
    }

    async fn get_quote(&self, symbol: &str) -> Result<Quote, QuoteError> {
        self.quotes
            .fetch_with(symbol, || self.provider.get_quote(symbol))
            .await
    }

    async fn get_usd_rate(&self) -> Result<UsdRate, QuoteError> {
        self.usd_rate
            .fetch_with(USD_RATE_KEY, || self.provider.get_usd_rate())
            .await
    }
}
