//! Check-digit validation and formatting for CPF and CNPJ numbers.
//!
//! Both formats end in two check digits computed by weighted modular sums
//! over the preceding digits. CPF uses descending weights with a
//! `(sum * 10) % 11` remainder; CNPJ uses fixed weight cycles with a
//! `sum % 11` remainder. Formatting is cosmetic and never a validity
//! signal.

use super::documents_model::DocumentKind;

/// Weight cycle for the first CNPJ check digit.
const CNPJ_FIRST_WEIGHTS: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// Weight cycle for the second CNPJ check digit.
const CNPJ_SECOND_WEIGHTS: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// Strips every non-digit character. Empty input yields empty output.
pub fn clean(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Validates `digits` as a document of the given kind.
pub fn is_valid(digits: &str, kind: DocumentKind) -> bool {
    match kind {
        DocumentKind::Cpf => validate_cpf(digits),
        DocumentKind::Cnpj => validate_cnpj(digits),
    }
}

/// Validates an 11-digit CPF.
///
/// Inputs of any other length fail; they are never padded or truncated.
/// Known-invalid repeated-digit sequences ("00000000000" through
/// "99999999999") fail regardless of their check digits.
pub fn validate_cpf(digits: &str) -> bool {
    let Some(values) = digit_values(digits) else {
        return false;
    };
    if values.len() != 11 || all_same(&values) {
        return false;
    }

    cpf_check_digit(&values[..9]) == values[9] && cpf_check_digit(&values[..10]) == values[10]
}

/// Validates a 14-digit CNPJ.
pub fn validate_cnpj(digits: &str) -> bool {
    let Some(values) = digit_values(digits) else {
        return false;
    };
    if values.len() != 14 || all_same(&values) {
        return false;
    }

    cnpj_check_digit(&values[..12], &CNPJ_FIRST_WEIGHTS) == values[12]
        && cnpj_check_digit(&values[..13], &CNPJ_SECOND_WEIGHTS) == values[13]
}

/// Renders a digit string in the display format of its kind.
///
/// CPF: `DDD.DDD.DDD-DD`. CNPJ: `DD.DDD.DDD/DDDD-DD`. Returns the input
/// unchanged when its length does not match the kind.
pub fn format(digits: &str, kind: DocumentKind) -> String {
    if digits.len() != kind.digit_count() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return digits.to_string();
    }

    match kind {
        DocumentKind::Cpf => format!(
            "{}.{}.{}-{}",
            &digits[..3],
            &digits[3..6],
            &digits[6..9],
            &digits[9..]
        ),
        DocumentKind::Cnpj => format!(
            "{}.{}.{}/{}-{}",
            &digits[..2],
            &digits[2..5],
            &digits[5..8],
            &digits[8..12],
            &digits[12..]
        ),
    }
}

fn digit_values(digits: &str) -> Option<Vec<u32>> {
    digits.chars().map(|c| c.to_digit(10)).collect()
}

fn all_same(values: &[u32]) -> bool {
    values.windows(2).all(|pair| pair[0] == pair[1])
}

/// CPF check digit over a 9- or 10-digit prefix.
///
/// Weights descend from `len + 1` down to 2; remainders of 10 or 11
/// collapse to 0.
fn cpf_check_digit(values: &[u32]) -> u32 {
    let top_weight = values.len() as u32 + 1;
    let sum: u32 = values
        .iter()
        .enumerate()
        .map(|(i, v)| v * (top_weight - i as u32))
        .sum();

    let remainder = (sum * 10) % 11;
    if remainder >= 10 {
        0
    } else {
        remainder
    }
}

/// CNPJ check digit over a prefix with its weight cycle.
fn cnpj_check_digit(values: &[u32], weights: &[u32]) -> u32 {
    let sum: u32 = values.iter().zip(weights).map(|(v, w)| v * w).sum();

    let remainder = sum % 11;
    if remainder < 2 {
        0
    } else {
        11 - remainder
    }
}
