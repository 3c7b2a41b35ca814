// crates/shared-kernel/src/error.rs
use std::fmt;
use std::num::ParseIntError;

use thiserror::Error;

/// Root error type for a single `add` evaluation.
///
/// An evaluation either yields a sum or fails with exactly one of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalculatorError {
    /// One or more tokens start with a minus sign. Tokens are kept verbatim,
    /// in the order they appeared in the input.
    #[error("Negatives not allowed: [{}]", .tokens.join(", "))]
    NegativeNumbers { tokens: Vec<String> },

    #[error("Invalid number '{token}': {source}")]
    NumberFormat {
        token: String,
        #[source]
        source: ParseIntError,
    },

    #[error("Malformed delimiter header '{header}': {defect}")]
    MalformedHeader { header: String, defect: HeaderDefect },
}

pub type CalcResult<T> = std::result::Result<T, CalculatorError>;

/// What is wrong with a `//...` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeaderDefect {
    /// The header is never closed by a newline.
    MissingTerminator,
    /// `//` is directly followed by the newline.
    EmptyDeclaration,
    /// Bracket form without a single `[delimiter]` group.
    NoBracketedDelimiters,
}

impl fmt::Display for HeaderDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::MissingTerminator => "no line terminator after the delimiter declaration",
            Self::EmptyDeclaration => "no delimiter declared",
            Self::NoBracketedDelimiters => "expected one or more [delimiter] groups",
        };
        f.write_str(text)
    }
}

impl CalculatorError {
    pub fn negatives<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::NegativeNumbers { tokens: tokens.into_iter().map(Into::into).collect() }
    }

    pub fn malformed_header(header: impl Into<String>, defect: HeaderDefect) -> Self {
        Self::MalformedHeader { header: header.into(), defect }
    }

    /// Offending tokens of a [`CalculatorError::NegativeNumbers`] error.
    #[must_use]
    pub fn negative_tokens(&self) -> Option<&[String]> {
        match self {
            Self::NegativeNumbers { tokens } => Some(tokens),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_malformed_header(&self) -> bool {
        matches!(self, Self::MalformedHeader { .. })
    }

    /// Short machine-friendly name of the failure kind.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::NegativeNumbers { .. } => "negative_numbers",
            Self::NumberFormat { .. } => "number_format",
            Self::MalformedHeader { .. } => "malformed_header",
        }
    }
}
