use chrono::Utc;
use log::{debug, warn};
use std::sync::Arc;

use super::investments_model::{Investment, NewInvestment};
use super::investments_traits::{InvestmentRepositoryTrait, InvestmentServiceTrait};
use crate::errors::Result;

use cofre_market_data::{Quote, QuoteProvider, UsdRate};

/// Service for tracking investments and their market prices.
pub struct InvestmentService {
    repository: Arc<dyn InvestmentRepositoryTrait>,
    quotes: Arc<dyn QuoteProvider>,
}

impl InvestmentService {
    /// Creates a new InvestmentService instance
    pub fn new(
        repository: Arc<dyn InvestmentRepositoryTrait>,
        quotes: Arc<dyn QuoteProvider>,
    ) -> Self {
        Self { repository, quotes }
    }
}

#[async_trait::async_trait]
impl InvestmentServiceTrait for InvestmentService {
    /// Registers a new investment.
    ///
    /// The symbol is resolved through the quote client to seed the display
    /// name and current price. A quote failure degrades to the purchase
    /// price; it never blocks the create.
    async fn add_investment(&self, new_investment: NewInvestment) -> Result<Investment> {
        new_investment.validate()?;

        let symbol = new_investment.normalized_symbol();
        let (name, current_price) = match self.quotes.get_quote(&symbol).await {
            Ok(quote) => (quote.name, quote.price),
            Err(e) => {
                warn!("Quote lookup failed for {}: {}", symbol, e);
                (symbol.clone(), new_investment.purchase_price)
            }
        };

        let now = Utc::now().naive_utc();
        let investment = Investment {
            id: uuid::Uuid::new_v4().to_string(),
            account_id: new_investment.account_id,
            symbol,
            name,
            kind: new_investment.kind,
            quantity: new_investment.quantity,
            purchase_price: new_investment.purchase_price,
            current_price,
            purchase_date: new_investment.purchase_date.unwrap_or(now),
            last_update: now,
        };

        self.repository.create(investment).await
    }

    /// Refreshes every holding of an account against the quote client.
    ///
    /// Symbols that fail to resolve keep their last known price; the
    /// refresh reports what it could and moves on.
    async fn refresh_prices(&self, account_id: &str) -> Result<Vec<Investment>> {
        let holdings = self.repository.list_by_account(account_id)?;
        debug!(
            "Refreshing prices for {} holdings of account {}",
            holdings.len(),
            account_id
        );

        let fetches = holdings
            .iter()
            .map(|investment| self.quotes.get_quote(&investment.symbol));
        let results = futures::future::join_all(fetches).await;

        let now = Utc::now().naive_utc();
        let mut refreshed = Vec::with_capacity(holdings.len());
        for (mut investment, result) in holdings.into_iter().zip(results) {
            match result {
                Ok(quote) => {
                    investment.current_price = quote.price;
                    investment.last_update = now;
                    investment = self.repository.update(investment).await?;
                }
                Err(e) => {
                    warn!("Price refresh failed for {}: {}", investment.symbol, e);
                }
            }
            refreshed.push(investment);
        }

        Ok(refreshed)
    }

    /// Deletes an investment by its ID
    async fn delete_investment(&self, investment_id: &str) -> Result<()> {
        self.repository.delete(investment_id).await?;
        Ok(())
    }

    /// Retrieves an investment by its ID
    fn get_investment(&self, investment_id: &str) -> Result<Investment> {
        self.repository.get_by_id(investment_id)
    }

    /// Lists the investments held by one account
    fn list_for_account(&self, account_id: &str) -> Result<Vec<Investment>> {
        self.repository.list_by_account(account_id)
    }

    async fn get_quote(&self, symbol: &str) -> Result<Quote> {
        Ok(self.quotes.get_quote(symbol).await?)
    }

    async fn get_usd_rate(&self) -> Result<UsdRate> {
        Ok(self.quotes.get_usd_rate().await?)
    }
}
