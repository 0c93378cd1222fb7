//! # intcalc
//!
//! intcalc is an integer arithmetic expression interpreter written in Rust.
//! It evaluates single-line expressions built from integers, `+ - * /`, unary
//! signs and parentheses. Every line is lexed, parsed and evaluated on its
//! own; nothing carries over from one line to the next.

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

use tracing::debug;

use crate::{
    ast::Expr,
    error::{Error, ParseError},
    interpreter::{evaluator::core::Evaluator, lexer::Spanned, parser::core::Parser},
};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and the operator types that represent
/// an expression as a tree. The AST is built by the parser and traversed by
/// the evaluator.
///
/// # Responsibilities
/// - Defines the literal, unary and binary node variants.
/// - Attaches source positions to nodes for error reporting.
/// - Renders trees in a fully parenthesized form.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing, parsing,
/// or evaluating a line, each carrying the character position it refers to.
///
/// # Responsibilities
/// - Defines error enums for every failure mode (lexer, parser, evaluator).
/// - Classifies every error into an `ErrorKind`.
pub mod error;
/// Orchestrates the stages of interpretation.
///
/// This module ties together lexing, parsing and evaluation.
pub mod interpreter;

/// Evaluates a single line and returns its value.
///
/// A fresh lexer, parser and evaluator are created for every call.
///
/// # Errors
/// Returns an error if the line contains an invalid character, does not form
/// exactly one well-formed expression, divides by zero, or overflows.
///
/// # Examples
/// ```
/// use intcalc::{error::ErrorKind, evaluate};
///
/// assert_eq!(evaluate("14 + 2 * 3 - 6 / 2").unwrap(), 17);
/// assert_eq!(evaluate("-+-3").unwrap(), 3);
///
/// let err = evaluate("1 @ 2").unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::InvalidCharacter);
/// ```
pub fn evaluate(source: &str) -> Result<i64, Error> {
    debug!(source, "evaluating line");
    let expr = parse(source)?;
    Ok(Evaluator::new().eval(&expr)?)
}

/// Parses a single line into a syntax tree without evaluating it.
///
/// # Errors
/// Returns a [`ParseError`] for lexical errors and grammar violations.
///
/// # Examples
/// ```
/// use intcalc::parse;
///
/// assert_eq!(parse("2 + 3 * 4").unwrap().to_string(), "(2 + (3 * 4))");
/// assert!(parse("(1 + 2").is_err());
/// ```
pub fn parse(source: &str) -> Result<Expr, ParseError> {
    Parser::new(source)?.parse()
}

/// Splits a single line into tokens, ending with the end-of-input marker.
///
/// # Errors
/// Returns the first lexical error in the line.
pub fn tokenize(source: &str) -> Result<Vec<Spanned>, ParseError> {
    interpreter::lexer::tokenize(source)
}
