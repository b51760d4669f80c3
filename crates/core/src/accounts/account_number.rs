//! Account number generation.
//!
//! Generated numbers read `<prefix><base><random>-<check digit>`: a
//! two-digit category prefix, the low six digits of the millisecond clock,
//! a zero-padded three-digit random component, and a weighted-cycle check
//! digit over the eleven payload digits. Two calls in the same millisecond
//! with the same random draw collide; uniqueness at the service layer is
//! enforced on the customer document, not on the account number.

use chrono::Utc;
use rand::Rng;

use super::accounts_model::AccountType;

/// Weight cycle applied left to right across the payload digits.
const CHECK_WEIGHTS: [u32; 8] = [2, 3, 4, 5, 6, 7, 8, 9];

/// Digits taken from the millisecond clock.
const BASE_MODULUS: i64 = 1_000_000;

pub struct AccountNumberGenerator;

impl AccountNumberGenerator {
    /// Generates an account number from the wall clock and the thread RNG.
    ///
    /// Never fails for any category.
    pub fn generate(account_type: AccountType) -> String {
        let epoch_ms = Utc::now().timestamp_millis();
        let random = rand::thread_rng().gen_range(0..1000);
        Self::generate_at(account_type, epoch_ms, random)
    }

    /// Deterministic core: the same inputs always yield the same number.
    pub fn generate_at(account_type: AccountType, epoch_ms: i64, random: u32) -> String {
        let base = epoch_ms.rem_euclid(BASE_MODULUS);
        let payload = format!(
            "{}{:06}{:03}",
            account_type.number_prefix(),
            base,
            random % 1000
        );
        format!("{}-{}", payload, Self::check_digit(&payload))
    }

    /// Check digit over a digit payload: cyclic weights, mod 11, remainders
    /// below two collapse to zero.
    pub fn check_digit(payload: &str) -> u32 {
        let sum: u32 = payload
            .chars()
            .filter_map(|c| c.to_digit(10))
            .enumerate()
            .map(|(i, digit)| digit * CHECK_WEIGHTS[i % CHECK_WEIGHTS.len()])
            .sum();

        let remainder = sum % 11;
        if remainder < 2 {
            0
        } else {
            11 - remainder
        }
    }

    /// Recomputes the trailing check digit of a formatted account number.
    pub fn verify(account_number: &str) -> bool {
        match account_number.split_once('-') {
            Some((payload, check))
                if payload.len() == 11 && payload.chars().all(|c| c.is_ascii_digit()) =>
            {
                check
                    .parse::<u32>()
                    .map(|digit| digit == Self::check_digit(payload))
                    .unwrap_or(false)
            }
            _ => false,
        }
    }
}
