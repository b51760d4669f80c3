//! Brazilian taxpayer document validation - CPF and CNPJ.

mod documents_model;
mod documents_validator;
mod documents_validator_tests;

pub use documents_model::DocumentKind;
pub use documents_validator::{clean, format, is_valid, validate_cnpj, validate_cpf};
