// crates/core/src/calculator.rs
use serde::Serialize;
use string_calc_shared_kernel::{CalcResult, DelimiterSet, Sum};

use crate::config::CalculatorConfig;
use crate::reducer::{Reduction, reduce};
use crate::tokenizer::tokenize;
use crate::validator::ensure_no_negatives;

/// Sums a delimited list of numbers with the default configuration.
///
/// ```
/// use string_calc_core::add;
///
/// assert_eq!(add(""), Ok(0));
/// assert_eq!(add("5,10\n25,1001"), Ok(40));
/// assert!(add("-1,2").is_err());
/// ```
///
/// # Errors
///
/// See [`Calculator::add`].
pub fn add(input: &str) -> CalcResult<i64> {
    Calculator::default().add(input).map(Sum::value)
}

/// Stateless evaluator; the configuration only carries the threshold.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Calculator {
    config: CalculatorConfig,
}

/// Detailed result of one evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Evaluation {
    pub sum: Sum,
    pub delimiters: DelimiterSet,
    pub tokens: Vec<String>,
    /// Parsed values above the threshold that were left out of the sum.
    pub ignored: Vec<i32>,
}

impl Calculator {
    #[must_use]
    pub const fn new(config: CalculatorConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// # Errors
    ///
    /// - [`CalculatorError::MalformedHeader`] for a `//` header without a
    ///   newline or without any usable delimiter.
    /// - [`CalculatorError::NegativeNumbers`] if any token starts with `-`;
    ///   this is checked before any token is parsed.
    /// - [`CalculatorError::NumberFormat`] for the first token that is not an
    ///   integer, including empty tokens between adjacent delimiters.
    ///
    /// [`CalculatorError::MalformedHeader`]: string_calc_shared_kernel::CalculatorError::MalformedHeader
    /// [`CalculatorError::NegativeNumbers`]: string_calc_shared_kernel::CalculatorError::NegativeNumbers
    /// [`CalculatorError::NumberFormat`]: string_calc_shared_kernel::CalculatorError::NumberFormat
    pub fn add(&self, input: &str) -> CalcResult<Sum> {
        self.evaluate(input).map(|evaluation| evaluation.sum)
    }

    /// Like [`Calculator::add`] but keeps the intermediate results.
    ///
    /// # Errors
    ///
    /// Same as [`Calculator::add`].
    pub fn evaluate(&self, input: &str) -> CalcResult<Evaluation> {
        let tokens = tokenize(input)?;
        ensure_no_negatives(tokens.as_slice())?;
        let Reduction { sum, ignored, .. } = reduce(tokens.as_slice(), self.config.threshold)?;

        Ok(Evaluation {
            sum,
            tokens: tokens.items.iter().map(ToString::to_string).collect(),
            delimiters: tokens.delimiters,
            ignored,
        })
    }
}
