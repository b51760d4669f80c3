//! Error types for the market data crate.
//!
//! [`QuoteError`] covers every failure a quote lookup can surface. Each
//! variant maps to a distinct user-facing message via
//! [`user_message`](QuoteError::user_message); the cache layer never
//! suppresses or retries these, it passes them through unchanged.

use thiserror::Error;

/// Errors that can occur while fetching quotes.
#[derive(Error, Debug)]
pub enum QuoteError {
    /// The requested symbol was not found by the provider.
    #[error("Symbol not found: {0}")]
    SymbolNotFound(String),

    /// The provider rate limited the request (HTTP 429).
    #[error("Rate limited: {provider}")]
    RateLimited {
        /// The provider that rate limited the request
        provider: String,
    },

    /// The provider rejected the API token (HTTP 401/403).
    #[error("Unauthorized: {provider}")]
    Unauthorized {
        /// The provider that rejected the credentials
        provider: String,
    },

    /// A provider-specific error occurred.
    #[error("Provider error: {provider} - {message}")]
    ProviderError {
        /// The provider that returned the error
        provider: String,
        /// The error message from the provider
        message: String,
    },

    /// A network error occurred while communicating with the provider.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl QuoteError {
    /// Returns the message shown to the user for this failure.
    ///
    /// Quote failures are surfaced as retryable notifications, so every
    /// message tells the user what to do next rather than what broke
    /// internally.
    pub fn user_message(&self) -> String {
        match self {
            Self::SymbolNotFound(symbol) => {
                format!(
                    "No quote found for \"{}\". Check the ticker symbol and try again.",
                    symbol
                )
            }
            Self::RateLimited { .. } => {
                "The quote service is receiving too many requests. Wait a moment and try again."
                    .to_string()
            }
            Self::Unauthorized { .. } => {
                "The quote service rejected the configured API token. Review the token in settings."
                    .to_string()
            }
            Self::ProviderError { .. } => {
                "The quote service returned an unexpected response. Try again later.".to_string()
            }
            Self::Network(_) => {
                "Could not reach the quote service. Check your connection and try again."
                    .to_string()
            }
        }
    }
}
