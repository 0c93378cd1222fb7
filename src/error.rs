use thiserror::Error;

/// Lexing and parsing errors.
///
/// Defines every failure that can occur before evaluation starts: characters
/// that belong to no token, integer literals that do not fit the value range,
/// and token sequences that do not match the grammar.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the failures raised while evaluating a syntax tree: division by
/// zero and arithmetic overflow.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any failure produced while turning a line of text into a value.
///
/// This is the error type of [`crate::evaluate`]. It wraps the phase-specific
/// error unchanged, so callers can either match on the phase or ask for the
/// coarse [`ErrorKind`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The line could not be tokenized or parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The syntax tree could not be evaluated.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl Error {
    /// Returns the category of this error.
    ///
    /// # Example
    /// ```
    /// use intcalc::{error::ErrorKind, evaluate};
    ///
    /// let err = evaluate("5 / 0").unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::DivisionByZero);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Parse(e) => e.kind(),
            Self::Runtime(e) => e.kind(),
        }
    }

    /// Returns the zero-based character position the error refers to.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::Parse(e) => e.position(),
            Self::Runtime(e) => e.position(),
        }
    }
}

/// Coarse classification of every error the interpreter can report.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A character matched no token rule.
    InvalidCharacter,
    /// The token stream did not match the grammar.
    Syntax,
    /// The right operand of a division evaluated to zero.
    DivisionByZero,
    /// A literal or an intermediate result left the 64-bit integer range.
    Overflow,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::InvalidCharacter => "invalid character",
            Self::Syntax => "syntax error",
            Self::DivisionByZero => "division by zero",
            Self::Overflow => "overflow",
        };
        write!(f, "{name}")
    }
}
