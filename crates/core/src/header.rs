// crates/core/src/header.rs
//! Custom delimiter headers.
//!
//! An input may start with `//<declaration>\n`. The declaration is either a
//! single character (`//;\n`) or one or more bracketed literals
//! (`//[plus][d]\n`). A header replaces the default comma/newline set entirely.

use std::sync::OnceLock;

use regex::Regex;
use string_calc_shared_kernel::{CalcResult, CalculatorError, DelimiterSet, HeaderDefect};

pub const HEADER_MARKER: &str = "//";
pub const HEADER_TERMINATOR: char = '\n';
const BRACKET_OPEN: char = '[';

fn bracket_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\[([^\]]+)\]").unwrap())
}

/// Returns `true` when the input declares custom delimiters.
#[must_use]
pub fn has_custom_header(input: &str) -> bool {
    input.starts_with(HEADER_MARKER)
}

/// Splits a header-bearing input into its delimiter set and body.
///
/// The body is everything after the first newline; it may be empty.
///
/// # Errors
///
/// Returns [`CalculatorError::MalformedHeader`] when the header has no newline,
/// declares nothing, or uses the bracket form without a complete `[...]` group.
pub fn parse_header(input: &str) -> CalcResult<(DelimiterSet, &str)> {
    let rest = input.strip_prefix(HEADER_MARKER).unwrap_or(input);
    let Some((declaration, body)) = rest.split_once(HEADER_TERMINATOR) else {
        return Err(CalculatorError::malformed_header(rest, HeaderDefect::MissingTerminator));
    };

    Ok((parse_declaration(declaration)?, body))
}

/// Resolves the text between `//` and the newline into a delimiter set.
///
/// # Errors
///
/// See [`parse_header`].
pub fn parse_declaration(declaration: &str) -> CalcResult<DelimiterSet> {
    if declaration.starts_with(BRACKET_OPEN) {
        return parse_bracketed(declaration);
    }

    // Only the first character counts; anything after it is ignored.
    declaration
        .chars()
        .next()
        .map(DelimiterSet::single)
        .ok_or_else(|| CalculatorError::malformed_header(declaration, HeaderDefect::EmptyDeclaration))
}

fn parse_bracketed(declaration: &str) -> CalcResult<DelimiterSet> {
    let literals = bracket_re()
        .captures_iter(declaration)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str());

    DelimiterSet::from_literals(literals).ok_or_else(|| {
        CalculatorError::malformed_header(declaration, HeaderDefect::NoBracketedDelimiters)
    })
}
