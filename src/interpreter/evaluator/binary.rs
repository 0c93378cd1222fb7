use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::evaluator::core::{EvalResult, Evaluator},
};

impl Evaluator {
    /// Evaluates a binary operation between two values.
    ///
    /// Division truncates toward zero, so `7 / 2` is `3` and `-7 / 2` is `-3`.
    /// Division by zero is checked before the overflow check, so `0 / 0` is a
    /// division by zero.
    ///
    /// # Example
    /// ```
    /// use intcalc::{
    ///     ast::BinaryOperator, error::RuntimeError, interpreter::evaluator::core::Evaluator,
    /// };
    ///
    /// assert_eq!(Evaluator::eval_binary(BinaryOperator::Div, -7, 2, 0).unwrap(), -3);
    /// assert_eq!(Evaluator::eval_binary(BinaryOperator::Div, 1, 0, 2),
    ///            Err(RuntimeError::DivisionByZero { position: 2 }));
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: i64,
                       right: i64,
                       position: usize)
                       -> EvalResult<i64> {
        let result = match op {
            BinaryOperator::Add => left.checked_add(right),
            BinaryOperator::Sub => left.checked_sub(right),
            BinaryOperator::Mul => left.checked_mul(right),
            BinaryOperator::Div => {
                if right == 0 {
                    return Err(RuntimeError::DivisionByZero { position });
                }
                left.checked_div(right)
            },
        };

        result.ok_or(RuntimeError::Overflow { position })
    }
}
