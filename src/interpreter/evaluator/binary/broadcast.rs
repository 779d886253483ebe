use crate::{
    ast::Operator,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            binary::{
                core::{mismatch, unsupported},
                scalar::arithmetic,
            },
            core::{Context, EvalResult},
        },
        value::{core::Value, vector::Vector},
    },
};

/// Tests whether any active component or cell of `value` is zero.
fn has_zero(value: &Value) -> bool {
    match value {
        Value::Scalar(s) => *s == 0.0,
        Value::Vector(v) => v.components().contains(&0.0),
        Value::Matrix(m) => m.rows().any(|row| row.contains(&0.0)),
    }
}

impl Context {
    /// Applies an operator between a scalar and a vector or matrix.
    ///
    /// The scalar is combined with every component or cell, keeping the
    /// operand order, so `1 / v` divides one by each component. Only `+`, `-`,
    /// `*` and `/` broadcast.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand; one of the operands must be a scalar.
    /// - `right`: Right operand.
    ///
    /// # Returns
    /// A value of the same shape as the non-scalar operand.
    ///
    /// # Errors
    /// - `UnsupportedOperator` for `%` and `^`.
    /// - `DivisionByZero` if any divisor is zero.
    pub fn eval_broadcast(op: Operator, left: &Value, right: &Value) -> EvalResult<Value> {
        if !matches!(op, Operator::Add | Operator::Sub | Operator::Mul | Operator::Div) {
            return Err(unsupported(op, left, right));
        }
        if op == Operator::Div && has_zero(right) {
            return Err(RuntimeError::DivisionByZero);
        }

        match (left, right) {
            (Value::Scalar(s), shaped) => Ok(shaped.map(|c| arithmetic(op, *s, c))),
            (shaped, Value::Scalar(s)) => Ok(shaped.map(|c| arithmetic(op, c, *s))),
            _ => Err(unsupported(op, left, right)),
        }
    }

    /// Combines two vectors component by component.
    ///
    /// Only `+` and `-` are defined between vectors.
    ///
    /// # Errors
    /// - `UnsupportedOperator` for any other operator.
    /// - `DimensionMismatch` if the vectors differ in size.
    ///
    /// # Example
    /// ```
    /// use vecalc::{
    ///     ast::Operator,
    ///     interpreter::{
    ///         evaluator::core::Context,
    ///         value::{core::Value, vector::Vector},
    ///     },
    /// };
    ///
    /// let a = Vector::from([1.0, 2.0]);
    /// let b = Vector::from([3.0, 5.0]);
    ///
    /// assert_eq!(Context::eval_vector_op(Operator::Sub, &a, &b).unwrap(),
    ///            Value::from(Vector::from([-2.0, -3.0])));
    /// assert!(Context::eval_vector_op(Operator::Mul, &a, &b).is_err());
    /// ```
    pub fn eval_vector_op(op: Operator, left: &Vector, right: &Vector) -> EvalResult<Value> {
        let (l, r) = (Value::Vector(*left), Value::Vector(*right));
        if !matches!(op, Operator::Add | Operator::Sub) {
            return Err(unsupported(op, &l, &r));
        }
        if left.dims() != right.dims() {
            return Err(mismatch(op, &l, &r));
        }

        Ok(Value::Vector(left.zip_with(right, |a, b| arithmetic(op, a, b))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::value::matrix::Matrix;

    #[test]
    fn scalar_divided_by_vector_keeps_operand_order() {
        let result = Context::eval_broadcast(Operator::Div,
                                             &Value::Scalar(12.0),
                                             &Value::from(Vector::from([2.0, 3.0, 4.0])));

        assert_eq!(result.unwrap(), Value::from(Vector::from([6.0, 4.0, 3.0])));
    }

    #[test]
    fn zero_component_divisor_fails() {
        let result = Context::eval_broadcast(Operator::Div,
                                             &Value::Scalar(1.0),
                                             &Value::from(Vector::from([1.0, 0.0])));

        assert_eq!(result, Err(RuntimeError::DivisionByZero));
    }

    #[test]
    fn matrix_scales_by_scalar() {
        let result = Context::eval_broadcast(Operator::Mul,
                                             &Value::from(Matrix::identity(2).unwrap()),
                                             &Value::Scalar(3.0));

        assert_eq!(result.unwrap(),
                   Value::from(Matrix::from([[3.0, 0.0], [0.0, 3.0]])));
    }

    #[test]
    fn power_does_not_broadcast() {
        let result = Context::eval_broadcast(Operator::Pow,
                                             &Value::from(Vector::from([1.0, 2.0])),
                                             &Value::Scalar(2.0));

        assert!(matches!(result, Err(RuntimeError::UnsupportedOperator { op: Operator::Pow, .. })));
    }
}
