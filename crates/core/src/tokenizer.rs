// crates/core/src/tokenizer.rs
//! Splitting input into raw tokens.

use string_calc_shared_kernel::{CalcResult, DelimiterSet};

use crate::header::{has_custom_header, parse_header};

/// Splits text on any literal of a [`DelimiterSet`].
///
/// Delimiters are matched literally, never as patterns. When two delimiters
/// match at the same position the one declared first wins.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    delimiters: DelimiterSet,
}

impl Tokenizer {
    #[must_use]
    pub const fn new(delimiters: DelimiterSet) -> Self {
        Self { delimiters }
    }

    /// Splits `body` into tokens in order of appearance.
    ///
    /// Adjacent, leading and trailing delimiters yield empty tokens; a body
    /// without any delimiter yields itself as the only token.
    #[must_use]
    pub fn split<'a>(&self, body: &'a str) -> Vec<&'a str> {
        let mut tokens = Vec::new();
        let mut start = 0;
        let mut pos = 0;
        while pos < body.len() {
            let rest = &body[pos..];
            if let Some(delimiter) = self.match_at(rest) {
                tokens.push(&body[start..pos]);
                pos += delimiter.len();
                start = pos;
            } else {
                // Step one scalar value so `pos` stays on a char boundary.
                pos += rest.chars().next().map_or(1, char::len_utf8);
            }
        }
        tokens.push(&body[start..]);
        tokens
    }

    fn match_at(&self, rest: &str) -> Option<&str> {
        self.delimiters.iter().find(|delimiter| rest.starts_with(delimiter))
    }
}

/// Tokens of one input together with the delimiter set that produced them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tokens<'a> {
    pub delimiters: DelimiterSet,
    pub items: Vec<&'a str>,
}

impl<'a> Tokens<'a> {
    #[must_use]
    pub fn as_slice(&self) -> &[&'a str] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Resolves the delimiter set for `input` and splits its body.
///
/// Empty input yields zero tokens. Input starting with `//` is split only on
/// the delimiters its header declares; anything else uses comma and newline.
///
/// # Errors
///
/// Propagates header errors from [`parse_header`].
pub fn tokenize(input: &str) -> CalcResult<Tokens<'_>> {
    if input.is_empty() {
        return Ok(Tokens { delimiters: DelimiterSet::default(), items: Vec::new() });
    }

    let (delimiters, body) = if has_custom_header(input) {
        parse_header(input)?
    } else {
        (DelimiterSet::default(), input)
    };

    let tokenizer = Tokenizer::new(delimiters);
    let items = tokenizer.split(body);
    Ok(Tokens { delimiters: tokenizer.delimiters, items })
}
