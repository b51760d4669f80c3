//! Accounts module - domain models, services, and traits.

mod account_number;
mod accounts_model;
mod accounts_service;
mod accounts_traits;

// Re-export the public interface
pub use account_number::AccountNumberGenerator;
pub use accounts_model::{Account, AccountStatus, AccountType, AccountUpdate, NewAccount};
pub use accounts_service::AccountService;
pub use accounts_traits::{AccountRepositoryTrait, AccountServiceTrait};
