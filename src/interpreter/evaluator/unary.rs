use crate::{
    ast::UnaryOperator,
    error::RuntimeError,
    interpreter::evaluator::core::{EvalResult, Evaluator},
};

impl Evaluator {
    /// Applies a unary operator to an already evaluated operand.
    ///
    /// `Plus` returns the operand unchanged; `Minus` negates it. Negating
    /// `i64::MIN` has no `i64` result and is reported as overflow.
    ///
    /// # Example
    /// ```
    /// use intcalc::{ast::UnaryOperator, interpreter::evaluator::core::Evaluator};
    ///
    /// assert_eq!(Evaluator::eval_unary(UnaryOperator::Minus, 5, 0).unwrap(), -5);
    /// assert_eq!(Evaluator::eval_unary(UnaryOperator::Plus, -5, 0).unwrap(), -5);
    /// assert!(Evaluator::eval_unary(UnaryOperator::Minus, i64::MIN, 0).is_err());
    /// ```
    pub fn eval_unary(op: UnaryOperator, value: i64, position: usize) -> EvalResult<i64> {
        match op {
            UnaryOperator::Plus => Ok(value),
            UnaryOperator::Minus => value.checked_neg()
                                         .ok_or(RuntimeError::Overflow { position }),
        }
    }
}
