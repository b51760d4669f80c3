//! Time-windowed cache for quote lookups.
//!
//! Entries expire lazily: an entry past the window is treated as absent on
//! read but stays in the map until overwritten or cleared. [`CacheStats`]
//! exposes the expired-but-present count so callers can observe the policy.

use std::collections::HashMap;
use std::future::Future;
use std::sync::{Mutex, MutexGuard};
use std::time::{Duration, Instant};

use log::{debug, warn};

/// Default cache window: quotes are served from cache for 30 seconds.
pub const DEFAULT_CACHE_WINDOW: Duration = Duration::from_secs(30);

/// A cached payload with its storage time.
#[derive(Debug, Clone)]
struct CacheEntry<T> {
    payload: T,
    stored_at: Instant,
}

/// Counts reported by [`QuoteCache::stats`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheStats {
    /// Entries currently stored, valid or not.
    pub total: usize,
    /// Entries still inside the window.
    pub valid: usize,
    /// Entries outside the window but not yet purged.
    pub expired: usize,
}

/// A keyed cache that serves entries only while they are inside a fixed
/// time window.
///
/// The cache itself never fails; errors originate only from fetchers passed
/// to [`fetch_with`](Self::fetch_with) and pass through unchanged. There is
/// no in-flight de-duplication: concurrent misses for the same key each
/// invoke their own fetcher.
pub struct QuoteCache<T> {
    entries: Mutex<HashMap<String, CacheEntry<T>>>,
    window: Duration,
}

impl<T: Clone> QuoteCache<T> {
    /// Create a cache with the given validity window.
    pub fn new(window: Duration) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            window,
        }
    }

    /// The configured validity window.
    pub fn window(&self) -> Duration {
        self.window
    }

    /// Lock the entry map, recovering from poison if necessary.
    ///
    /// Serving a quote from a map touched by a panicked thread is at worst
    /// a stale read, which the window already bounds.
    fn lock_entries(&self) -> MutexGuard<'_, HashMap<String, CacheEntry<T>>> {
        self.entries.lock().unwrap_or_else(|poisoned| {
            warn!("Quote cache mutex was poisoned, recovering");
            poisoned.into_inner()
        })
    }

    /// Returns the payload for `key` if it is still inside the window.
    ///
    /// Expired entries read as absent; they are not removed.
    pub fn get(&self, key: &str) -> Option<T> {
        let entries = self.lock_entries();
        entries.get(key).and_then(|entry| {
            if entry.stored_at.elapsed() < self.window {
                Some(entry.payload.clone())
            } else {
                None
            }
        })
    }

    /// Stores `payload` under `key` with the current time, overwriting any
    /// prior entry.
    pub fn set(&self, key: &str, payload: T) {
        let mut entries = self.lock_entries();
        entries.insert(
            key.to_string(),
            CacheEntry {
                payload,
                stored_at: Instant::now(),
            },
        );
    }

    /// Returns the cached payload for `key`, invoking `fetcher` on a miss.
    ///
    /// On fetcher success the payload is stored before being returned. On
    /// fetcher failure the cache is left untouched and the error propagates
    /// to the caller unchanged.
    pub async fn fetch_with<F, Fut, E>(&self, key: &str, fetcher: F) -> Result<T, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        if let Some(payload) = self.get(key) {
            debug!("Quote cache hit for '{}'", key);
            return Ok(payload);
        }

        debug!("Quote cache miss for '{}'", key);
        let payload = fetcher().await?;
        self.set(key, payload.clone());
        Ok(payload)
    }

    /// Removes all entries unconditionally.
    pub fn clear(&self) {
        let mut entries = self.lock_entries();
        entries.clear();
    }

    /// Counts of stored entries, split by window validity.
    pub fn stats(&self) -> CacheStats {
        let entries = self.lock_entries();
        let total = entries.len();
        let valid = entries
            .values()
            .filter(|entry| entry.stored_at.elapsed() < self.window)
            .count();

        CacheStats {
            total,
            valid,
            expired: total - valid,
        }
    }
}

impl<T: Clone> Default for QuoteCache<T> {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_WINDOW)
    }
}
