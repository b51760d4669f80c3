use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Latest market data for a ticker symbol.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    /// Ticker symbol (e.g., "PETR4", "AAPL")
    pub symbol: String,

    /// Display name of the instrument
    pub name: String,

    /// Last traded price
    pub price: Decimal,

    /// Absolute price change for the session
    pub change: Decimal,

    /// Percentage price change for the session
    pub change_percent: Decimal,

    /// Quote currency
    pub currency: String,

    /// Timestamp of the last market update
    pub market_time: DateTime<Utc>,
}

impl Quote {
    /// Create a quote with a flat session (no change data).
    pub fn flat(symbol: String, name: String, price: Decimal, currency: String) -> Self {
        Self {
            symbol,
            name,
            price,
            change: Decimal::ZERO,
            change_percent: Decimal::ZERO,
            currency,
            market_time: Utc::now(),
        }
    }
}

/// The USD exchange rate against the local currency.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsdRate {
    /// Units of local currency per one USD
    pub rate: Decimal,

    /// Absolute rate change for the session
    pub change: Decimal,

    /// Percentage rate change for the session
    pub change_percent: Decimal,

    /// When the provider last updated the rate
    pub last_update: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_quote_flat() {
        let quote = Quote::flat(
            "PETR4".to_string(),
            "Petrobras PN".to_string(),
            dec!(38.42),
            "BRL".to_string(),
        );
        assert_eq!(quote.price, dec!(38.42));
        assert_eq!(quote.change, Decimal::ZERO);
        assert_eq!(quote.change_percent, Decimal::ZERO);
    }

    #[test]
    fn test_quote_serializes_camel_case() {
        let quote = Quote::flat(
            "PETR4".to_string(),
            "Petrobras PN".to_string(),
            dec!(38.42),
            "BRL".to_string(),
        );
        let json = serde_json::to_string(&quote).unwrap();
        assert!(json.contains("\"changePercent\""));
        assert!(json.contains("\"marketTime\""));
    }
}
