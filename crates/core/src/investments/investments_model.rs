//! Investment domain models.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::DISPLAY_DECIMAL_PRECISION;
use crate::errors::{Error, Result, ValidationError};

/// Classification of a tracked investment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InvestmentKind {
    /// Listed equity
    #[default]
    Stock,
    /// Real estate fund
    Fii,
    /// Exchange traded fund
    Etf,
}

/// Domain model representing a stock position held by an account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Investment {
    pub id: String,
    pub account_id: String,
    pub symbol: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: InvestmentKind,
    pub quantity: Decimal,
    pub purchase_price: Decimal,
    /// Last known market price; refreshed through the quote client
    pub current_price: Decimal,
    pub purchase_date: NaiveDateTime,
    pub last_update: NaiveDateTime,
}

impl Investment {
    /// Market value at the last known price.
    pub fn current_value(&self) -> Decimal {
        self.quantity * self.current_price
    }

    /// Value paid at purchase.
    pub fn invested_value(&self) -> Decimal {
        self.quantity * self.purchase_price
    }

    /// Absolute gain or loss since purchase.
    pub fn gain_loss(&self) -> Decimal {
        self.current_value() - self.invested_value()
    }

    /// Percentage gain or loss, zero when nothing was invested.
    pub fn gain_loss_percent(&self) -> Decimal {
        let invested = self.invested_value();
        if invested.is_zero() {
            return Decimal::ZERO;
        }
        ((self.gain_loss() / invested) * Decimal::ONE_HUNDRED)
            .round_dp(DISPLAY_DECIMAL_PRECISION)
    }
}

/// Input model for registering a new investment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewInvestment {
    pub account_id: String,
    pub symbol: String,
    #[serde(rename = "type", default)]
    pub kind: InvestmentKind,
    pub quantity: Decimal,
    pub purchase_price: Decimal,
    /// Defaults to now when absent
    pub purchase_date: Option<NaiveDateTime>,
}

impl NewInvestment {
    /// Validates the new investment data.
    pub fn validate(&self) -> Result<()> {
        if self.account_id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "accountId".to_string(),
            )));
        }
        if self.symbol.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "symbol".to_string(),
            )));
        }
        if self.quantity <= Decimal::ZERO {
            return Err(Error::Validation(ValidationError::OutOfRange {
                field: "quantity".to_string(),
                message: "quantity must be positive".to_string(),
            }));
        }
        if self.purchase_price <= Decimal::ZERO {
            return Err(Error::Validation(ValidationError::OutOfRange {
                field: "purchasePrice".to_string(),
                message: "purchase price must be positive".to_string(),
            }));
        }
        Ok(())
    }

    /// Symbol trimmed and upper-cased, the canonical form for quote
    /// lookups and storage.
    pub fn normalized_symbol(&self) -> String {
        self.symbol.trim().to_uppercase()
    }
}
