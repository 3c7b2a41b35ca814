// src/input.rs
//! Reading the raw expression from the configured source.

use std::io::Read;

use crate::config::Config;
use crate::error::{AppError, Result};
use crate::options::InputSource;

/// Loads the expression text for `config`.
///
/// File and stdin contents lose exactly one trailing line terminator, so a
/// file written by an editor does not end in an empty token.
///
/// # Errors
///
/// Returns an error if the file or stdin cannot be read or is not UTF-8.
pub fn read_expression(config: &Config) -> Result<String> {
    let raw = match &config.source {
        InputSource::Inline(expression) => expression.clone(),
        InputSource::File(path) => {
            log::debug!("reading expression from {}", path.display());
            let bytes = std::fs::read(path).map_err(|source| AppError::FileRead {
                path: path.clone(),
                source,
            })?;
            strip_line_terminator(String::from_utf8(bytes)?)
        }
        InputSource::Stdin => {
            log::debug!("reading expression from stdin");
            let mut bytes = Vec::new();
            std::io::stdin().read_to_end(&mut bytes).map_err(AppError::Stdin)?;
            strip_line_terminator(String::from_utf8(bytes)?)
        }
    };

    Ok(if config.escapes { unescape(&raw) } else { raw })
}

/// Removes one trailing `\n` or `\r\n`.
#[must_use]
pub fn strip_line_terminator(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    text
}

/// Decodes `\n`, `\r`, `\t` and `\\`. Other backslash sequences are kept as-is.
#[must_use]
pub fn unescape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}
