use thiserror::Error;

use crate::error::ErrorKind;

/// Represents all errors that can occur during evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// Attempted division by zero.
    #[error("Error at position {position}: Division by zero.")]
    DivisionByZero {
        /// Position of the `/` operator.
        position: usize,
    },
    /// Arithmetic operation overflowed.
    #[error("Error at position {position}: Integer overflow while trying to compute result.")]
    Overflow {
        /// Position of the operator whose result overflowed.
        position: usize,
    },
}

impl RuntimeError {
    /// Returns the category of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::DivisionByZero { .. } => ErrorKind::DivisionByZero,
            Self::Overflow { .. } => ErrorKind::Overflow,
        }
    }

    /// Returns the position of the operator that failed.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::DivisionByZero { position } | Self::Overflow { position } => *position,
        }
    }
}
