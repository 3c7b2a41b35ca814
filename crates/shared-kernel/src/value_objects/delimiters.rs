// crates/shared-kernel/src/value_objects/delimiters.rs
use std::fmt;

use serde::Serialize;

/// Ordered, non-empty list of literal delimiter strings.
///
/// Order matters when two delimiters match at the same position: the one
/// declared first wins.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct DelimiterSet(Vec<String>);

impl DelimiterSet {
    pub const COMMA: &'static str = ",";
    pub const NEWLINE: &'static str = "\n";

    /// Builds a set from literals. Returns `None` for an empty list or when
    /// any literal is the empty string.
    pub fn from_literals<I, S>(literals: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let literals: Vec<String> = literals.into_iter().map(Into::into).collect();
        if literals.is_empty() || literals.iter().any(String::is_empty) {
            return None;
        }
        Some(Self(literals))
    }

    /// A set holding one single-character delimiter.
    #[must_use]
    pub fn single(delimiter: char) -> Self {
        Self(vec![delimiter.to_string()])
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`; kept for clippy's `len_without_is_empty`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for DelimiterSet {
    /// Comma and newline.
    fn default() -> Self {
        Self(vec![Self::COMMA.to_string(), Self::NEWLINE.to_string()])
    }
}

impl fmt::Display for DelimiterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, literal) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "\"{}\"", literal.escape_debug())?;
        }
        f.write_str("]")
    }
}
