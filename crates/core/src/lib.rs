// crates/core/src/lib.rs
//! Parsing and summation of delimited number lists.
//!
//! The pipeline is `tokenize -> validate -> reduce`:
//!
//! 1. [`tokenizer`] resolves the delimiter set (default or `//` header) and splits the body.
//! 2. [`validator`] rejects any token that starts with a minus sign.
//! 3. [`reducer`] parses the tokens, drops values above the threshold and sums the rest.
//!
//! ```
//! assert_eq!(string_calc_core::add("//[d][plus]\n1plus2plus5d10d12"), Ok(30));
//! ```
#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::multiple_crate_versions)]

pub mod calculator;
pub mod config;
pub mod header;
pub mod reducer;
pub mod tokenizer;
pub mod validator;

pub use calculator::{Calculator, Evaluation, add};
pub use config::{CalculatorConfig, DEFAULT_THRESHOLD};
pub use string_calc_shared_kernel::{CalcResult, CalculatorError, DelimiterSet, HeaderDefect, Sum};
