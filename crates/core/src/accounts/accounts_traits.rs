//! Account repository and service traits.
//!
//! These traits define the contract for account operations without any
//! storage-specific types, allowing for different storage implementations.

use async_trait::async_trait;
use rust_decimal::Decimal;

use super::accounts_model::{Account, AccountUpdate, NewAccount};
use crate::errors::Result;

/// Trait defining the contract for Account repository operations.
///
/// Implementations persist whole accounts; business rules (validation,
/// duplicate checks, number generation) live in the service layer.
#[async_trait]
pub trait AccountRepositoryTrait: Send + Sync {
    /// Persists a new account.
    async fn create(&self, account: Account) -> Result<Account>;

    /// Replaces an existing account.
    async fn update(&self, account: Account) -> Result<Account>;

    /// Deletes an account by its ID.
    ///
    /// Returns the number of deleted records.
    async fn delete(&self, account_id: &str) -> Result<usize>;

    /// Retrieves an account by its ID.
    fn get_by_id(&self, account_id: &str) -> Result<Account>;

    /// Lists every stored account.
    fn list(&self) -> Result<Vec<Account>>;
}

/// Trait defining the contract for Account service operations.
///
/// The service layer handles business logic and coordinates between
/// repositories and other services.
#[async_trait]
pub trait AccountServiceTrait: Send + Sync {
    /// Creates a new account with business validation and the
    /// duplicate-document check.
    async fn create_account(&self, new_account: NewAccount) -> Result<Account>;

    /// Updates the mutable fields of an existing account.
    async fn update_account(&self, account_update: AccountUpdate) -> Result<Account>;

    /// Deletes an account by its ID.
    async fn delete_account(&self, account_id: &str) -> Result<()>;

    /// Retrieves an account by ID.
    fn get_account(&self, account_id: &str) -> Result<Account>;

    /// Lists all accounts.
    fn list_accounts(&self) -> Result<Vec<Account>>;

    /// Credits `amount` to the account balance.
    async fn deposit(&self, account_id: &str, amount: Decimal) -> Result<Account>;

    /// Debits `amount` from the account balance.
    async fn withdraw(&self, account_id: &str, amount: Decimal) -> Result<Account>;
}
