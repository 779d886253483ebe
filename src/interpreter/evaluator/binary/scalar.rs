use crate::{
    ast::Operator,
    error::RuntimeError,
    interpreter::evaluator::core::{Context, EvalResult},
    util::num::is_integral,
};

/// Applies `op` to two numbers without any domain checks.
pub(super) fn arithmetic(op: Operator, left: f64, right: f64) -> f64 {
    match op {
        Operator::Add => left + right,
        Operator::Sub => left - right,
        Operator::Mul => left * right,
        Operator::Div => left / right,
        Operator::Mod => left % right,
        Operator::Pow => left.powf(right),
    }
}

impl Context {
    /// Evaluates a scalar arithmetic operation.
    ///
    /// Division and modulo by zero are checked explicitly. Modulo also
    /// requires both operands to be whole numbers.
    ///
    /// # Parameters
    /// - `op`: The arithmetic operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    ///
    /// # Returns
    /// An `EvalResult<f64>` containing the computed scalar.
    ///
    /// # Example
    /// ```
    /// use vecalc::{ast::Operator, interpreter::evaluator::core::Context};
    ///
    /// assert_eq!(Context::eval_scalar_op(Operator::Mod, 7.0, 3.0).unwrap(), 1.0);
    /// assert!(Context::eval_scalar_op(Operator::Mod, 7.5, 2.0).is_err());
    /// assert!(Context::eval_scalar_op(Operator::Div, 1.0, 0.0).is_err());
    /// ```
    pub fn eval_scalar_op(op: Operator, left: f64, right: f64) -> EvalResult<f64> {
        match op {
            Operator::Div if right == 0.0 => Err(RuntimeError::DivisionByZero),
            Operator::Mod if !is_integral(left) || !is_integral(right) => {
                Err(RuntimeError::NonIntegerModulo { left, right })
            },
            Operator::Mod if right == 0.0 => Err(RuntimeError::DivisionByZero),
            _ => Ok(arithmetic(op, left, right)),
        }
    }
}
