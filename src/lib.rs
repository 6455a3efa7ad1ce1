//! # tiercalc
//!
//! tiercalc is an arithmetic expression engine written in Rust.
//! It tokenizes integer expressions with context-sensitive operator lexing and
//! evaluates them by precedence-tier splitting, with support for infix, prefix
//! and postfix operators and arbitrarily nested parentheses.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::catalog::STANDARD_CATALOG;

/// Operator and grouping definitions.
///
/// This module declares the data that drives lexing and evaluation: which
/// operators exist, how they are spelled, how tightly they bind, where they
/// sit relative to their operands, and which brackets group sub-expressions.
///
/// # Responsibilities
/// - Defines operator and grouping records and their type tags.
/// - Provides the standard catalog: `+ - * / ^ !`, prefix `-` and `( )`.
/// - Validates arity and notation combinations.
pub mod catalog;
/// Provides error types for tokenization and evaluation.
///
/// This module defines all errors that can be raised while lexing or
/// evaluating an expression, with enough detail (offending input, byte offset,
/// operator name) for user feedback.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, evaluator).
/// - Implements `Display` and `std::error::Error` for reporting.
pub mod error;
/// Orchestrates tokenization and evaluation.
///
/// This module ties together the lexer and the evaluator, the two stages
/// every expression passes through.
pub mod interpreter;
/// Defines the symbols exchanged between lexer and evaluator.
///
/// This module declares the `Symbol` enum, its sentinels and helpers to render
/// and trim symbol slices.
pub mod symbol;

pub use crate::{
    catalog::Catalog,
    interpreter::{evaluator::core::evaluate, lexer::tokenize},
    symbol::Symbol,
};

/// Evaluates an expression written in the standard notation.
///
/// Whitespace is stripped, the remaining text is tokenized against the
/// standard catalog, and the symbols are evaluated.
///
/// # Errors
/// Returns an error if tokenization or evaluation fails.
///
/// # Examples
/// ```
/// use tiercalc::evaluate_str;
///
/// assert_eq!(evaluate_str("2 ^ 3 ^ 2").unwrap(), 512.0);
/// assert_eq!(evaluate_str("(5 - 1)!").unwrap(), 24.0);
///
/// // `%` is not an operator of the standard catalog.
/// assert!(evaluate_str("2 % 5").is_err());
/// ```
pub fn evaluate_str(source: &str) -> Result<f64, Box<dyn std::error::Error>> {
    let source = interpreter::lexer::strip_whitespace(source);
    let symbols = tokenize(&source, &STANDARD_CATALOG)?;
    Ok(evaluate(&symbols, &STANDARD_CATALOG)?)
}
