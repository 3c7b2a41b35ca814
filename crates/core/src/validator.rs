// crates/core/src/validator.rs
//! Negative number rejection.
//!
//! Detection is textual: a token is negative when its first character is a
//! minus sign. It runs before any numeric parsing, so `-x` is reported as a
//! negative rather than as a malformed number.

use string_calc_shared_kernel::{CalcResult, CalculatorError};

pub const MINUS_SIGN: char = '-';

#[inline]
#[must_use]
pub fn is_negative(token: &str) -> bool {
    token.starts_with(MINUS_SIGN)
}

/// Collects negative-looking tokens in their original order.
#[must_use]
pub fn find_negatives<'a>(tokens: &[&'a str]) -> Vec<&'a str> {
    tokens.iter().copied().filter(|token| is_negative(token)).collect()
}

/// # Errors
///
/// Returns [`CalculatorError::NegativeNumbers`] listing every offending token.
pub fn ensure_no_negatives(tokens: &[&str]) -> CalcResult<()> {
    let negatives = find_negatives(tokens);
    if negatives.is_empty() {
        Ok(())
    } else {
        Err(CalculatorError::negatives(negatives))
    }
}
