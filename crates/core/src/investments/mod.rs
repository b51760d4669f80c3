//! Investments module - domain models, services, and traits.

mod investments_model;
mod investments_model_tests;
mod investments_service;
mod investments_traits;

// Re-export the public interface
pub use investments_model::{Investment, InvestmentKind, NewInvestment};
pub use investments_service::InvestmentService;
pub use investments_traits::{InvestmentRepositoryTrait, InvestmentServiceTrait};
