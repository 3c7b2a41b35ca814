// crates/core/src/reducer.rs
//! Parsing tokens and summing the accepted values.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::Serialize;
use string_calc_shared_kernel::{CalcResult, CalculatorError, Sum};

/// Parses one token as a base-10 `i32`.
///
/// An optional leading `+` is accepted; whitespace, empty strings and
/// out-of-range literals are not.
///
/// # Errors
///
/// Returns [`CalculatorError::NumberFormat`] carrying the token verbatim.
pub fn parse_token(token: &str) -> CalcResult<i32> {
    token.parse::<i32>().map_err(|source| CalculatorError::NumberFormat {
        token: token.to_string(),
        source,
    })
}

/// Outcome of summing a token list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Reduction {
    pub sum: Sum,
    /// Values that contributed to the sum, in input order.
    pub accepted: Vec<i32>,
    /// Values above the threshold, in input order.
    pub ignored: Vec<i32>,
}

/// Parses every token, drops values above `threshold` and sums the rest.
///
/// # Errors
///
/// Fails on the first token (in input order) that is not a valid integer.
pub fn reduce(tokens: &[&str], threshold: i32) -> CalcResult<Reduction> {
    let values = parse_all(tokens)?;

    let (accepted, ignored): (Vec<i32>, Vec<i32>) =
        values.into_iter().partition(|&value| value <= threshold);
    let sum: Sum = accepted.iter().copied().sum();

    Ok(Reduction { sum, accepted, ignored })
}

#[cfg(not(feature = "parallel"))]
fn parse_all(tokens: &[&str]) -> CalcResult<Vec<i32>> {
    tokens.iter().map(|token| parse_token(token)).collect()
}

// Results are gathered in order before the first error is picked, so the
// reported token matches the sequential path.
#[cfg(feature = "parallel")]
fn parse_all(tokens: &[&str]) -> CalcResult<Vec<i32>> {
    let parsed: Vec<CalcResult<i32>> = tokens.par_iter().map(|token| parse_token(token)).collect();
    parsed.into_iter().collect()
}
