use thiserror::Error;

use crate::{error::ErrorKind, interpreter::lexer::Token};

/// Represents all errors that can occur during lexing or parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A character that does not start any token.
    #[error("Error at position {position}: Invalid character '{character}'.")]
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Zero-based character index in the source line.
        position:  usize,
    },
    /// An integer literal does not fit in 64 bits.
    #[error("Error at position {position}: Literal {literal} is too large.")]
    LiteralTooLarge {
        /// The digits as written.
        literal:  String,
        /// Zero-based character index in the source line.
        position: usize,
    },
    /// The parser needed one kind of token and found another.
    #[error("Error at position {position}: Expected {expected}, found {found}.")]
    UnexpectedToken {
        /// Description of what the grammar allows here.
        expected: String,
        /// The token actually found.
        found:    Token,
        /// Zero-based character index in the source line.
        position: usize,
    },
    /// A complete expression was followed by more input.
    #[error("Error at position {position}: Extra tokens after expression, starting with {found}.")]
    UnexpectedTrailingTokens {
        /// The first token after the expression.
        found:    Token,
        /// Zero-based character index in the source line.
        position: usize,
    },
}

impl ParseError {
    /// Returns the category of this error.
    ///
    /// Oversized literals count as overflow; every grammar violation is a
    /// syntax error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidCharacter { .. } => ErrorKind::InvalidCharacter,
            Self::LiteralTooLarge { .. } => ErrorKind::Overflow,
            Self::UnexpectedToken { .. } | Self::UnexpectedTrailingTokens { .. } => {
                ErrorKind::Syntax
            },
        }
    }

    /// Returns the zero-based character position the error refers to.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::InvalidCharacter { position, .. }
            | Self::LiteralTooLarge { position, .. }
            | Self::UnexpectedToken { position, .. }
            | Self::UnexpectedTrailingTokens { position, .. } => *position,
        }
    }
}
