//! Investment repository and service traits.

use async_trait::async_trait;

use super::investments_model::{Investment, NewInvestment};
use crate::errors::Result;

use cofre_market_data::{Quote, UsdRate};

/// Trait defining the contract for Investment repository operations.
#[async_trait]
pub trait InvestmentRepositoryTrait: Send + Sync {
    /// Persists a new investment.
    async fn create(&self, investment: Investment) -> Result<Investment>;

    /// Replaces an existing investment.
    async fn update(&self, investment: Investment) -> Result<Investment>;

    /// Deletes an investment by its ID.
    ///
    /// Returns the number of deleted records.
    async fn delete(&self, investment_id: &str) -> Result<usize>;

    /// Retrieves an investment by its ID.
    fn get_by_id(&self, investment_id: &str) -> Result<Investment>;

    /// Lists the investments held by one account.
    fn list_by_account(&self, account_id: &str) -> Result<Vec<Investment>>;
}

/// Trait defining the contract for Investment service operations.
#[async_trait]
pub trait InvestmentServiceTrait: Send + Sync {
    /// Registers a new investment, seeding its name and current price from
    /// the quote client when the symbol resolves.
    async fn add_investment(&self, new_investment: NewInvestment) -> Result<Investment>;

    /// Refreshes the current price of every holding of an account.
    async fn refresh_prices(&self, account_id: &str) -> Result<Vec<Investment>>;

    /// Deletes an investment by its ID.
    async fn delete_investment(&self, investment_id: &str) -> Result<()>;

    /// Retrieves an investment by its ID.
    fn get_investment(&self, investment_id: &str) -> Result<Investment>;

    /// Lists the investments held by one account.
    fn list_for_account(&self, account_id: &str) -> Result<Vec<Investment>>;

    /// Latest quote for a symbol, served through the cache.
    async fn get_quote(&self, symbol: &str) -> Result<Quote>;

    /// USD exchange rate, served through the cache.
    async fn get_usd_rate(&self) -> Result<UsdRate>;
}
