use chrono::Utc;
use log::debug;
use rust_decimal::Decimal;
use std::sync::Arc;

use super::account_number::AccountNumberGenerator;
use super::accounts_model::{Account, AccountStatus, AccountUpdate, NewAccount};
use super::accounts_traits::{AccountRepositoryTrait, AccountServiceTrait};
use crate::documents::{self, DocumentKind};
use crate::errors::{Error, Result, ValidationError};

/// Service for managing customer accounts.
pub struct AccountService {
    repository: Arc<dyn AccountRepositoryTrait>,
}

impl AccountService {
    /// Creates a new AccountService instance
    pub fn new(repository: Arc<dyn AccountRepositoryTrait>) -> Self {
        Self { repository }
    }

    /// Rejects the create when a document of the same kind is already
    /// registered. Comparison is on cleaned digits, so formatting
    /// differences in the submitted strings never mask a duplicate.
    fn check_duplicate_documents(&self, cpf: &str, cnpj: Option<&str>) -> Result<()> {
        let existing = self.repository.list()?;

        if existing
            .iter()
            .any(|account| documents::clean(&account.customer_cpf) == cpf)
        {
            return Err(Error::DuplicateDocument {
                kind: "CPF",
                document: documents::format(cpf, DocumentKind::Cpf),
            });
        }

        if let Some(cnpj) = cnpj {
            let duplicate = existing.iter().any(|account| {
                account
                    .business_cnpj
                    .as_deref()
                    .map(documents::clean)
                    .is_some_and(|stored| stored == cnpj)
            });
            if duplicate {
                return Err(Error::DuplicateDocument {
                    kind: "CNPJ",
                    document: documents::format(cnpj, DocumentKind::Cnpj),
                });
            }
        }

        Ok(())
    }

    async fn adjust_balance(&self, account_id: &str, delta: Decimal) -> Result<Account> {
        let mut account = self.repository.get_by_id(account_id)?;

        let balance = account.balance + delta;
        if balance < Decimal::ZERO {
            return Err(Error::Validation(ValidationError::OutOfRange {
                field: "amount".to_string(),
                message: "withdrawal exceeds the available balance".to_string(),
            }));
        }

        account.balance = balance;
        account.updated_at = Utc::now().naive_utc();
        self.repository.update(account).await
    }
}

#[async_trait::async_trait]
impl AccountServiceTrait for AccountService {
    /// Creates a new account: validate, check document uniqueness, generate
    /// the account number, persist. A duplicate document rejects the whole
    /// operation before anything is written.
    async fn create_account(&self, new_account: NewAccount) -> Result<Account> {
        new_account.validate()?;

        let cpf = new_account.cleaned_cpf();
        let cnpj = new_account.cleaned_cnpj();
        debug!("Creating {} account", new_account.account_type.as_str());

        self.check_duplicate_documents(&cpf, cnpj.as_deref())?;

        let now = Utc::now().naive_utc();
        let account = Account {
            id: uuid::Uuid::new_v4().to_string(),
            account_number: AccountNumberGenerator::generate(new_account.account_type),
            account_type: new_account.account_type,
            balance: new_account.opening_balance,
            customer_name: new_account.customer_name,
            customer_cpf: cpf,
            customer_email: new_account.customer_email,
            customer_phone: new_account.customer_phone,
            status: AccountStatus::Active,
            created_at: now,
            updated_at: now,
            business_name: new_account.business_name,
            business_cnpj: cnpj,
        };

        self.repository.create(account).await
    }

    /// Updates contact fields and status of an existing account.
    async fn update_account(&self, account_update: AccountUpdate) -> Result<Account> {
        account_update.validate()?;

        // validate() guarantees the id is present
        let id = account_update.id.as_deref().unwrap_or_default();
        let mut account = self.repository.get_by_id(id)?;

        account.customer_name = account_update.customer_name;
        account.customer_email = account_update.customer_email;
        account.customer_phone = account_update.customer_phone;
        account.status = account_update.status;
        account.updated_at = Utc::now().naive_utc();

        self.repository.update(account).await
    }

    /// Deletes an account by its ID
    async fn delete_account(&self, account_id: &str) -> Result<()> {
        self.repository.delete(account_id).await?;
        Ok(())
    }

    /// Retrieves an account by its ID
    fn get_account(&self, account_id: &str) -> Result<Account> {
        self.repository.get_by_id(account_id)
    }

    /// Lists all accounts
    fn list_accounts(&self) -> Result<Vec<Account>> {
        self.repository.list()
    }

    async fn deposit(&self, account_id: &str, amount: Decimal) -> Result<Account> {
        if amount <= Decimal::ZERO {
            return Err(Error::Validation(ValidationError::OutOfRange {
                field: "amount".to_string(),
                message: "deposit amount must be positive".to_string(),
            }));
        }
        self.adjust_balance(account_id, amount).await
    }

    async fn withdraw(&self, account_id: &str, amount: Decimal) -> Result<Account> {
        if amount <= Decimal::ZERO {
            return Err(Error::Validation(ValidationError::OutOfRange {
                field: "amount".to_string(),
                message: "withdrawal amount must be positive".to_string(),
            }));
        }
        self.adjust_balance(account_id, -amount).await
    }
}
