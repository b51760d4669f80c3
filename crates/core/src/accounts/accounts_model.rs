//! Account domain models.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::documents::{self, DocumentKind};
use crate::errors::{Error, Result, ValidationError};

/// Category of a customer account - determines the account number prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountType {
    #[default]
    Checking,
    Savings,
    Business,
}

impl AccountType {
    /// Two-digit prefix encoded into generated account numbers.
    pub fn number_prefix(&self) -> &'static str {
        match self {
            AccountType::Checking => "01",
            AccountType::Savings => "02",
            AccountType::Business => "03",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AccountType::Checking => "CHECKING",
            AccountType::Savings => "SAVINGS",
            AccountType::Business => "BUSINESS",
        }
    }
}

/// Lifecycle status of an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountStatus {
    #[default]
    Active,
    Inactive,
    Blocked,
}

/// Domain model representing a customer account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: String,
    /// Generated account number, `<prefix><base><random>-<check digit>`
    pub account_number: String,
    pub account_type: AccountType,
    pub balance: Decimal,
    pub customer_name: String,
    /// Customer CPF, stored as bare digits
    pub customer_cpf: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub status: AccountStatus,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    /// Legal name, business accounts only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_name: Option<String>,
    /// Business CNPJ as bare digits, business accounts only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_cnpj: Option<String>,
}

impl Account {
    /// Customer CPF in display format.
    pub fn formatted_cpf(&self) -> String {
        documents::format(&self.customer_cpf, DocumentKind::Cpf)
    }
}

/// Input model for creating a new account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAccount {
    pub account_type: AccountType,
    pub customer_name: String,
    /// Accepted formatted or as bare digits
    pub customer_cpf: String,
    pub customer_email: String,
    pub customer_phone: String,
    #[serde(default)]
    pub opening_balance: Decimal,
    pub business_name: Option<String>,
    pub business_cnpj: Option<String>,
}

impl NewAccount {
    /// Validates the new account data.
    ///
    /// Every failure is field-scoped; the document checks run on the
    /// cleaned digits, so formatting differences never affect the outcome.
    pub fn validate(&self) -> Result<()> {
        if self.customer_name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "customerName".to_string(),
            )));
        }

        validate_email(&self.customer_email)?;

        if self.customer_phone.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "customerPhone".to_string(),
            )));
        }

        let cpf = self.cleaned_cpf();
        if !documents::validate_cpf(&cpf) {
            return Err(Error::Validation(ValidationError::InvalidDocument(
                format!("\"{}\" is not a valid CPF", self.customer_cpf),
            )));
        }

        if self.opening_balance < Decimal::ZERO {
            return Err(Error::Validation(ValidationError::OutOfRange {
                field: "openingBalance".to_string(),
                message: "opening balance cannot be negative".to_string(),
            }));
        }

        if self.account_type == AccountType::Business {
            if self
                .business_name
                .as_deref()
                .unwrap_or_default()
                .trim()
                .is_empty()
            {
                return Err(Error::Validation(ValidationError::MissingField(
                    "businessName".to_string(),
                )));
            }

            let cnpj = self.cleaned_cnpj().unwrap_or_default();
            if !documents::validate_cnpj(&cnpj) {
                return Err(Error::Validation(ValidationError::InvalidDocument(
                    format!(
                        "\"{}\" is not a valid CNPJ",
                        self.business_cnpj.as_deref().unwrap_or_default()
                    ),
                )));
            }
        }

        Ok(())
    }

    /// Customer CPF reduced to digits, the canonical form for storage and
    /// duplicate checks.
    pub fn cleaned_cpf(&self) -> String {
        documents::clean(&self.customer_cpf)
    }

    /// Business CNPJ reduced to digits, when one was submitted.
    pub fn cleaned_cnpj(&self) -> Option<String> {
        self.business_cnpj
            .as_deref()
            .map(documents::clean)
            .filter(|digits| !digits.is_empty())
    }
}

/// Input model for updating an existing account.
///
/// The customer document and the account number are immutable after
/// creation and are not part of the update surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountUpdate {
    pub id: Option<String>,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub status: AccountStatus,
}

impl AccountUpdate {
    /// Validates the account update data.
    pub fn validate(&self) -> Result<()> {
        if self.id.as_deref().unwrap_or_default().trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "id".to_string(),
            )));
        }
        if self.customer_name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "customerName".to_string(),
            )));
        }
        validate_email(&self.customer_email)?;
        if self.customer_phone.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "customerPhone".to_string(),
            )));
        }
        Ok(())
    }
}

fn validate_email(email: &str) -> Result<()> {
    let email = email.trim();
    if email.is_empty() {
        return Err(Error::Validation(ValidationError::MissingField(
            "customerEmail".to_string(),
        )));
    }

    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && domain.contains('.') => Ok(()),
        _ => Err(Error::Validation(ValidationError::InvalidField {
            field: "customerEmail".to_string(),
            message: format!("\"{}\" is not a valid email address", email),
        })),
    }
}
