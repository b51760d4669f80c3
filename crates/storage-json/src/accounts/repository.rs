use async_trait::async_trait;
use std::sync::Arc;

use cofre_core::accounts::{Account, AccountRepositoryTrait};
use cofre_core::constants::ACCOUNTS_COLLECTION;
use cofre_core::errors::{Error, Result};

use super::model::AccountRecord;
use crate::store::CollectionStore;

/// Repository for account records in the JSON collection store.
///
/// Every mutation reads, modifies, and rewrites the whole collection.
pub struct AccountRepository {
    store: Arc<CollectionStore>,
}

impl AccountRepository {
    /// Creates a new AccountRepository instance
    pub fn new(store: Arc<CollectionStore>) -> Self {
        Self { store }
    }

    fn load(&self) -> Vec<AccountRecord> {
        self.store.get_collection(ACCOUNTS_COLLECTION)
    }

    fn persist(&self, records: &[AccountRecord]) -> Result<()> {
        self.store.set_collection(ACCOUNTS_COLLECTION, records)
    }
}

#[async_trait]
impl AccountRepositoryTrait for AccountRepository {
    async fn create(&self, account: Account) -> Result<Account> {
        let mut records = self.load();
        records.push(AccountRecord::from(account.clone()));
        self.persist(&records)?;
        Ok(account)
    }

    async fn update(&self, account: Account) -> Result<Account> {
        let mut records = self.load();
        let slot = records
            .iter_mut()
            .find(|record| record.id == account.id)
            .ok_or_else(|| Error::NotFound(format!("Account {} not found", account.id)))?;

        *slot = AccountRecord::from(account.clone());
        self.persist(&records)?;
        Ok(account)
    }

    async fn delete(&self, account_id: &str) -> Result<usize> {
        let mut records = self.load();
        let before = records.len();
        records.retain(|record| record.id != account_id);

        let removed = before - records.len();
        if removed > 0 {
            self.persist(&records)?;
        }
        Ok(removed)
    }

    fn get_by_id(&self, account_id: &str) -> Result<Account> {
        self.load()
            .into_iter()
            .find(|record| record.id == account_id)
            .map(Account::from)
            .ok_or_else(|| Error::NotFound(format!("Account {} not found", account_id)))
    }

    fn list(&self) -> Result<Vec<Account>> {
        Ok(self.load().into_iter().map(Account::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use cofre_core::accounts::{AccountStatus, AccountType};
    use rust_decimal_macros::dec;

    fn account(id: &str, cpf: &str) -> Account {
        let now = Utc::now().naive_utc();
        Account {
            id: id.to_string(),
            account_number: "01123456042-5".to_string(),
            account_type: AccountType::Checking,
            balance: dec!(100.00),
            customer_name: "Maria Silva".to_string(),
            customer_cpf: cpf.to_string(),
            customer_email: "maria@example.com".to_string(),
            customer_phone: "+55 11 98765-4321".to_string(),
            status: AccountStatus::Active,
            created_at: now,
            updated_at: now,
            business_name: None,
            business_cnpj: None,
        }
    }

    fn repository() -> (tempfile::TempDir, AccountRepository) {
        let dir = tempfile::tempdir().unwrap();
        let store = Arc::new(CollectionStore::new(dir.path()).unwrap());
        (dir, AccountRepository::new(store))
    }

    #[tokio::test]
    async fn test_create_and_get_round_trips() {
        let (_dir, repository) = repository();
        let created = repository
            .create(account("acc-1", "11144477735"))
            .await
            .unwrap();

        let read = repository.get_by_id("acc-1").unwrap();
        assert_eq!(read.id, created.id);
        assert_eq!(read.customer_cpf, "11144477735");
        assert_eq!(read.balance, dec!(100.00));
    }

    #[tokio::test]
    async fn test_create_persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        {
            let store = Arc::new(CollectionStore::new(dir.path()).unwrap());
            let repository = AccountRepository::new(store);
            repository
                .create(account("acc-1", "11144477735"))
                .await
                .unwrap();
        }

        let store = Arc::new(CollectionStore::new(dir.path()).unwrap());
        let repository = AccountRepository::new(store);
        assert_eq!(repository.list().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_update_replaces_matching_record() {
        let (_dir, repository) = repository();
        let mut created = repository
            .create(account("acc-1", "11144477735"))
            .await
            .unwrap();

        created.balance = dec!(250.00);
        repository.update(created).await.unwrap();

        let read = repository.get_by_id("acc-1").unwrap();
        assert_eq!(read.balance, dec!(250.00));
    }

    #[tokio::test]
    async fn test_update_unknown_account_fails() {
        let (_dir, repository) = repository();
        let result = repository.update(account("ghost", "11144477735")).await;
        assert!(matches!(result, Err(Error::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_returns_removed_count() {
        let (_dir, repository) = repository();
        repository
            .create(account("acc-1", "11144477735"))
            .await
            .unwrap();

        assert_eq!(repository.delete("acc-1").await.unwrap(), 1);
        assert_eq!(repository.delete("acc-1").await.unwrap(), 0);
        assert!(repository.list().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get_unknown_account_fails() {
        let (_dir, repository) = repository();
        assert!(matches!(
            repository.get_by_id("ghost"),
            Err(Error::NotFound(_))
        ));
    }
}
