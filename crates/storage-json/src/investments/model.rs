//! Persistence model for investment records.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use cofre_core::investments::{Investment, InvestmentKind};

/// Stored form of an investment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentRecord {
    pub id: String,
    pub account_id: String,
    pub symbol: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: InvestmentKind,
    pub quantity: Decimal,
    pub purchase_price: Decimal,
    pub current_price: Decimal,
    pub purchase_date: NaiveDateTime,
    pub last_update: NaiveDateTime,
}

impl From<Investment> for InvestmentRecord {
    fn from(investment: Investment) -> Self {
        Self {
            id: investment.id,
            account_id: investment.account_id,
            symbol: investment.symbol,
            name: investment.name,
            kind: investment.kind,
            quantity: investment.quantity,
            purchase_price: investment.purchase_price,
            current_price: investment.current_price,
            purchase_date: investment.purchase_date,
            last_update: investment.last_update,
        }
    }
}

impl From<InvestmentRecord> for Investment {
    fn from(record: InvestmentRecord) -> Self {
        Self {
            id: record.id,
            account_id: record.account_id,
            symbol: record.symbol,
            name: record.name,
            kind: record.kind,
            quantity: record.quantity,
            purchase_price: record.purchase_price,
            current_price: record.current_price,
            purchase_date: record.purchase_date,
            last_update: record.last_update,
        }
    }
}
