/// Parser state and the top-level entry point.
///
/// Holds the lookahead token, pulls new tokens from the lexer, and checks that
/// a complete expression consumes the whole line.
pub mod core;

/// Binary operator parsing.
///
/// Implements the left-associative `expr` and `term` productions.
pub mod binary;

/// Unary and primary parsing.
///
/// Implements the `factor` production: prefix signs, integer literals and
/// parenthesized groups.
pub mod unary;
