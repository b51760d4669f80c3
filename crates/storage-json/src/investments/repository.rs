use async_trait::async_trait;
use std::sync::Arc;

use cofre_core::constants::INVESTMENTS_COLLECTION;
use cofre_core::errors::{Error, Result};
use cofre_core::investments::{Investment, InvestmentRepositoryTrait};

use super::model::InvestmentRecord;
use crate::store::CollectionStore;

/// Repository for investment records in the JSON collection store.
pub struct InvestmentRepository {
    store: Arc<CollectionStore>,
}

impl InvestmentRepository {
    /// Creates a new InvestmentRepository instance
    pub fn new(store: Arc<CollectionStore>) -> Self {
        Self { store }
    }

    fn load(&self) -> Vec<InvestmentRecord> {
        self.store.get_collection(INVESTMENTS_COLLECTION)
    }

    fn persist(&self, records: &[InvestmentRecord]) -> Result<()> {
        self.store.set_collection(INVESTMENTS_COLLECTION, records)
    }
}

#[async_trait]
impl InvestmentRepositoryTrait for InvestmentRepository {
    async fn create(&self, investment: Investment) -> Result<Investment> {
        let mut records = self.load();
        records.push(InvestmentRecord::from(investment.clone()));
        self.persist(&records)?;
        Ok(investment)
    }

    async fn update(&self, investment: Investment) -> Result<Investment> {
        let mut records = self.load();
        let slot = records
            .iter_mut()
            .find(|record| record.id == investment.id)
            .ok_or_else(|| Error::NotFound(format!("Investment {} not found", investment.id)))?;

        *slot = InvestmentRecord::from(investment.clone());
        self.persist(&records)?;
        Ok(investment)
    }

    async fn delete(&self, investment_id: &str) -> Result<usize> {
        let mut records = self.load();
        let before = records.len();
        records.retain(|record| record.id != investment_id);

        let removed = before - records.len();
        if removed > 0 {
            self.persist(&records)?;
        }
        Ok(removed)
    }

    fn get_by_id(&self, investment_id: &str) -> Result<Investment> {
        self.load()
            .into_iter()
            .find(|record| record.id == investment_id)
            .map(Investment::from)
            .ok_or_else(|| Error::NotFound(format!("Investment {} not found", investment_id)))
    }

    fn list_by_account(&self, account_id: &str) -> Result<Vec<Investment>> {
        Ok(self
            .load()
            .into_iter()
            .filter(|record| record.account_id == account_id)
            .map(Investment::from)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use cofre_core::investments::InvestmentKind;
    use rust_decimal_macros::dec;

    fn investment(id: &str, account_id: &str, symbol: &str) -> Investment {
        let now = Utc::now().naive_utc();
        Investment {
            id: id.to_string(),
            account_id: account_id.to_string(),
            symbol: symbol.to_string(),
            name: format!("{} S.A.", symbol),
            kind: InvestmentKind::Stock,
            quantity: dec!(100),
            purchase_price: dec!(30.00),
            current_price: dec!(38.50),
            purchase_date: now,
            last_update: now,
        }
    }

    fn repository() -> (tempfile::TempDir, InvestmentRepository) {
        let dir = tempfile::tempdir().unwrap();
        let store = Arc::new(CollectionStore::new(dir.path()).unwrap());
        (dir, InvestmentRepository::new(store))
    }

    #[tokio::test]
    async fn test_create_and_get_round_trips() {
        let (_dir, repository) = repository();
        repository
            .create(investment("inv-1", "acc-1", "PETR4"))
            .await
            .unwrap();

        let read = repository.get_by_id("inv-1").unwrap();
        assert_eq!(read.symbol, "PETR4");
        assert_eq!(read.current_price, dec!(38.50));
    }

    #[tokio::test]
    async fn test_list_by_account_filters() {
        let (_dir, repository) = repository();
        repository
            .create(investment("inv-1", "acc-1", "PETR4"))
            .await
            .unwrap();
        repository
            .create(investment("inv-2", "acc-1", "VALE3"))
            .await
            .unwrap();
        repository
            .create(investment("inv-3", "acc-2", "ITUB4"))
            .await
            .unwrap();

        let holdings = repository.list_by_account("acc-1").unwrap();
        assert_eq!(holdings.len(), 2);
        assert!(holdings.iter().all(|inv| inv.account_id == "acc-1"));
    }

    #[tokio::test]
    async fn test_update_replaces_matching_record() {
        let (_dir, repository) = repository();
        let mut created = repository
            .create(investment("inv-1", "acc-1", "PETR4"))
            .await
            .unwrap();

        created.current_price = dec!(40.00);
        repository.update(created).await.unwrap();

        let read = repository.get_by_id("inv-1").unwrap();
        assert_eq!(read.current_price, dec!(40.00));
    }

    #[tokio::test]
    async fn test_delete_returns_removed_count() {
        let (_dir, repository) = repository();
        repository
            .create(investment("inv-1", "acc-1", "PETR4"))
            .await
            .unwrap();

        assert_eq!(repository.delete("inv-1").await.unwrap(), 1);
        assert_eq!(repository.delete("inv-1").await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_records_serialize_kind_as_type() {
        let dir = tempfile::tempdir().unwrap();
        let store = Arc::new(CollectionStore::new(dir.path()).unwrap());
        let repository = InvestmentRepository::new(store);
        repository
            .create(investment("inv-1", "acc-1", "PETR4"))
            .await
            .unwrap();

        let raw = std::fs::read_to_string(dir.path().join("investments.json")).unwrap();
        assert!(raw.contains("\"type\": \"STOCK\""));
        assert!(raw.contains("\"accountId\": \"acc-1\""));
    }
}
