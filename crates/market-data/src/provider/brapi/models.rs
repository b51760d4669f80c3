//! Response models for the Brapi API.

use serde::Deserialize;

/// Response from the quote endpoint.
#[derive(Debug, Deserialize)]
pub(super) struct QuoteResponse {
    #[serde(default)]
    pub results: Vec<QuoteResult>,
}

/// A single quote result.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct QuoteResult {
    pub symbol: String,
    #[serde(default)]
    pub short_name: Option<String>,
    #[serde(default)]
    pub long_name: Option<String>,
    pub regular_market_price: f64,
    #[serde(default)]
    pub regular_market_change: Option<f64>,
    #[serde(default)]
    pub regular_market_change_percent: Option<f64>,
    #[serde(default)]
    pub currency: Option<String>,
    /// RFC 3339 timestamp of the last market update
    #[serde(default)]
    pub regular_market_time: Option<String>,
}

/// Response from the currency endpoint.
#[derive(Debug, Deserialize)]
pub(super) struct CurrencyResponse {
    #[serde(default)]
    pub currency: Vec<CurrencyResult>,
}

/// A single currency pair result. Brapi returns numeric fields as strings
/// on this endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct CurrencyResult {
    pub bid_price: String,
    #[serde(default)]
    pub bid_variation: Option<String>,
    #[serde(default)]
    pub percentage_change: Option<String>,
    #[serde(default)]
    pub updated_at_date: Option<String>,
}
