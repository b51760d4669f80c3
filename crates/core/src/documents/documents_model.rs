//! Document domain model.

use serde::{Deserialize, Serialize};

/// The two Brazilian taxpayer document formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DocumentKind {
    /// 11-digit personal taxpayer identifier
    Cpf,
    /// 14-digit business taxpayer identifier
    Cnpj,
}

impl DocumentKind {
    /// Number of digits a document of this kind carries, check digits
    /// included.
    pub fn digit_count(&self) -> usize {
        match self {
            DocumentKind::Cpf => 11,
            DocumentKind::Cnpj => 14,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentKind::Cpf => "CPF",
            DocumentKind::Cnpj => "CNPJ",
        }
    }
}
