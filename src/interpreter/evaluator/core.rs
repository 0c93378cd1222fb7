use tracing::debug;

use crate::{ast::Expr, error::RuntimeError};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Walks a syntax tree and computes its integer value.
///
/// The evaluator holds no state between calls: evaluating the same tree twice
/// always gives the same answer.
#[derive(Debug, Default, Clone, Copy)]
pub struct Evaluator;

impl Evaluator {
    /// Creates a new evaluator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// Operands of a binary operation are evaluated left before right. All
    /// arithmetic is checked.
    ///
    /// # Errors
    /// - [`RuntimeError::DivisionByZero`] if a divisor evaluates to zero.
    /// - [`RuntimeError::Overflow`] if any intermediate result leaves the
    ///   `i64` range.
    ///
    /// # Example
    /// ```
    /// use intcalc::{interpreter::evaluator::core::Evaluator, parse};
    ///
    /// let tree = parse("(2 + 3) * 4").unwrap();
    /// assert_eq!(Evaluator::new().eval(&tree).unwrap(), 20);
    /// ```
    pub fn eval(&self, expr: &Expr) -> EvalResult<i64> {
        let value = self.eval_expr(expr)?;
        debug!(value, "evaluated expression");
        Ok(value)
    }

    fn eval_expr(&self, expr: &Expr) -> EvalResult<i64> {
        match expr {
            Expr::Number { value, .. } => Ok(*value),
            Expr::UnaryOp { op, expr, position } => {
                let operand = self.eval_expr(expr)?;
                Self::eval_unary(*op, operand, *position)
            },
            Expr::BinaryOp { left,
                             op,
                             right,
                             position, } => {
                let left = self.eval_expr(left)?;
                let right = self.eval_expr(right)?;
                Self::eval_binary(*op, left, right, *position)
            },
        }
    }
}
