//! Persistence model for account records.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use cofre_core::accounts::{Account, AccountStatus, AccountType};

/// Stored form of an account.
///
/// Field for field the persisted contract; kept separate from the domain
/// model so the stored shape cannot drift when the domain model grows
/// derived or transient fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountRecord {
    pub id: String,
    pub account_number: String,
    pub account_type: AccountType,
    pub balance: Decimal,
    pub customer_name: String,
    pub customer_cpf: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub status: AccountStatus,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_cnpj: Option<String>,
}

impl From<Account> for AccountRecord {
    fn from(account: Account) -> Self {
        Self {
            id: account.id,
            account_number: account.account_number,
            account_type: account.account_type,
            balance: account.balance,
            customer_name: account.customer_name,
            customer_cpf: account.customer_cpf,
            customer_email: account.customer_email,
            customer_phone: account.customer_phone,
            status: account.status,
            created_at: account.created_at,
            updated_at: account.updated_at,
            business_name: account.business_name,
            business_cnpj: account.business_cnpj,
        }
    }
}

impl From<AccountRecord> for Account {
    fn from(record: AccountRecord) -> Self {
        Self {
            id: record.id,
            account_number: record.account_number,
            account_type: record.account_type,
            balance: record.balance,
            customer_name: record.customer_name,
            customer_cpf: record.customer_cpf,
            customer_email: record.customer_email,
            customer_phone: record.customer_phone,
            status: record.status,
            created_at: record.created_at,
            updated_at: record.updated_at,
            business_name: record.business_name,
            business_cnpj: record.business_cnpj,
        }
    }
}
