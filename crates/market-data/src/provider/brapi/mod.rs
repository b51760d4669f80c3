//! Brapi provider implementation.
//!
//! Fetches quotes for B3-listed tickers and the USD/BRL rate from the
//! Brapi API. An API token is optional; without one the public rate
//! limits apply.
//!
//! # API Endpoints
//!
//! - Latest quote: `https://brapi.dev/api/quote/{symbol}`
//! - USD rate: `https://brapi.dev/api/v2/currency?currency=USD-BRL`

mod models;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::warn;
use reqwest::Client;
use rust_decimal::Decimal;
use std::time::Duration;

use crate::errors::QuoteError;
use crate::models::{Quote, UsdRate};
use crate::provider::QuoteProvider;

use models::{CurrencyResponse, QuoteResponse, QuoteResult};

const BASE_URL: &str = "https://brapi.dev/api";
const PROVIDER_ID: &str = "BRAPI";

/// Default HTTP request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Brapi provider for B3 equity quotes and the USD/BRL rate.
///
/// # Example
///
/// ```ignore
/// let provider = BrapiProvider::new(Some("your-api-token".to_string()));
/// let quote = provider.get_quote("PETR4").await?;
/// ```
pub struct BrapiProvider {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl BrapiProvider {
    /// Create a new Brapi provider with an optional API token.
    pub fn new(token: Option<String>) -> Self {
        Self::with_base_url(BASE_URL.to_string(), token)
    }

    /// Create a provider against a custom base URL.
    pub fn with_base_url(base_url: String, token: Option<String>) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url,
            token,
        }
    }

    /// Fetch a URL and map HTTP failures to quote errors.
    async fn fetch(&self, url: &str, symbol: Option<&str>) -> Result<String, QuoteError> {
        let mut request = self.client.get(url);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;

        match response.status() {
            status if status.is_success() => Ok(response.text().await?),
            reqwest::StatusCode::NOT_FOUND => Err(QuoteError::SymbolNotFound(
                symbol.unwrap_or("USD-BRL").to_string(),
            )),
            reqwest::StatusCode::TOO_MANY_REQUESTS => Err(QuoteError::RateLimited {
                provider: PROVIDER_ID.to_string(),
            }),
            reqwest::StatusCode::UNAUTHORIZED | reqwest::StatusCode::FORBIDDEN => {
                Err(QuoteError::Unauthorized {
                    provider: PROVIDER_ID.to_string(),
                })
            }
            status => Err(QuoteError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: format!("HTTP error: {}", status),
            }),
        }
    }

    fn parse_decimal(value: f64) -> Result<Decimal, QuoteError> {
        Decimal::try_from(value).map_err(|e| QuoteError::ProviderError {
            provider: PROVIDER_ID.to_string(),
            message: format!("Invalid numeric value {}: {}", value, e),
        })
    }

    /// Parse an RFC 3339 timestamp, falling back to now on absent or
    /// malformed input.
    fn parse_market_time(raw: Option<&str>) -> DateTime<Utc> {
        raw.and_then(|s| {
            DateTime::parse_from_rfc3339(s)
                .map(|t| t.with_timezone(&Utc))
                .map_err(|e| warn!("Unparseable market time '{}': {}", s, e))
                .ok()
        })
        .unwrap_or_else(Utc::now)
    }

    fn quote_from_result(result: QuoteResult) -> Result<Quote, QuoteError> {
        let name = result
            .short_name
            .or(result.long_name)
            .unwrap_or_else(|| result.symbol.clone());

        Ok(Quote {
            symbol: result.symbol,
            name,
            price: Self::parse_decimal(result.regular_market_price)?,
            change: Self::parse_decimal(result.regular_market_change.unwrap_or(0.0))?,
            change_percent: Self::parse_decimal(
                result.regular_market_change_percent.unwrap_or(0.0),
            )?,
            currency: result.currency.unwrap_or_else(|| "BRL".to_string()),
            market_time: Self::parse_market_time(result.regular_market_time.as_deref()),
        })
    }

    fn parse_decimal_str(raw: &str) -> Result<Decimal, QuoteError> {
        raw.parse().map_err(|e| QuoteError::ProviderError {
            provider: PROVIDER_ID.to_string(),
            message: format!("Invalid numeric value '{}': {}", raw, e),
        })
    }
}

#[async_trait]
impl QuoteProvider for BrapiProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn get_quote(&self, symbol: &str) -> Result<Quote, QuoteError> {
        let url = format!(
            "{}/quote/{}",
            self.base_url,
            urlencoding::encode(symbol.trim())
        );

        let response_text = self.fetch(&url, Some(symbol)).await?;
        let quote_resp: QuoteResponse =
            serde_json::from_str(&response_text).map_err(|e| QuoteError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: format!("Malformed quote response: {}", e),
            })?;

        let result = quote_resp
            .results
            .into_iter()
            .next()
            .ok_or_else(|| QuoteError::SymbolNotFound(symbol.to_string()))?;

        Self::quote_from_result(result)
    }

    async fn get_usd_rate(&self) -> Result<UsdRate, QuoteError> {
        let url = format!("{}/v2/currency?currency=USD-BRL", self.base_url);

        let response_text = self.fetch(&url, None).await?;
        let currency_resp: CurrencyResponse =
            serde_json::from_str(&response_text).map_err(|e| QuoteError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: format!("Malformed currency response: {}", e),
            })?;

        let result = currency_resp
            .currency
            .into_iter()
            .next()
            .ok_or_else(|| QuoteError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: "Currency response carried no pairs".to_string(),
            })?;

        Ok(UsdRate {
            rate: Self::parse_decimal_str(&result.bid_price)?,
            change: result
                .bid_variation
                .as_deref()
                .map(Self::parse_decimal_str)
                .transpose()?
                .unwrap_or(Decimal::ZERO),
            change_percent: result
                .percentage_change
                .as_deref()
                .map(Self::parse_decimal_str)
                .transpose()?
                .unwrap_or(Decimal::ZERO),
            last_update: Self::parse_market_time(result.updated_at_date.as_deref()),
        })
    }
}
