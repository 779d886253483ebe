use crate::{
    ast::Operator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Evaluates a binary operation between two values.
    ///
    /// This function routes the operation to specialized handlers depending on
    /// the shapes of both operands. Two scalars use `eval_scalar_op`. A scalar
    /// with a vector or matrix is broadcast by `eval_broadcast`. Two vectors
    /// are combined by `eval_vector_op`. A matrix on the left goes to
    /// `eval_matmul`. A vector times a matrix is not defined.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the evaluated result.
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
    /// let left = Value::Scalar(2.0);
    /// let right = Value::from(Vector::from([1.0, 2.0, 3.0]));
    ///
    /// let result = Context::eval_binary(Operator::Mul, &left, &right);
    /// assert_eq!(result.unwrap(), Value::from(Vector::from([2.0, 4.0, 6.0])));
    /// ```
    pub fn eval_binary(op: Operator, left: &Value, right: &Value) -> EvalResult<Value> {
        use Value::{Matrix, Scalar, Vector};

        match (left, right) {
            (Scalar(a), Scalar(b)) => Ok(Scalar(Self::eval_scalar_op(op, *a, *b)?)),
            (Scalar(_), _) | (_, Scalar(_)) => Self::eval_broadcast(op, left, right),
            (Vector(a), Vector(b)) => Self::eval_vector_op(op, a, b),
            (Matrix(_), _) => Self::eval_matmul(op, left, right),
            (Vector(_), Matrix(_)) => Err(unsupported(op, left, right)),
        }
    }
}

/// Error for an operator that is not defined between the two operand shapes.
pub(super) fn unsupported(op: Operator, left: &Value, right: &Value) -> RuntimeError {
    RuntimeError::UnsupportedOperator { op,
                                        left: left.kind(),
                                        right: right.kind() }
}

/// Error for two operands whose sizes do not fit together.
pub(super) fn mismatch(op: Operator, left: &Value, right: &Value) -> RuntimeError {
    RuntimeError::DimensionMismatch { details: format!("cannot apply '{op}' to {} and {}",
                                                       left.kind(),
                                                       right.kind()) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::value::{matrix::Matrix, vector::Vector};

    #[test]
    fn vector_times_matrix_is_unsupported() {
        let v = Value::from(Vector::from([1.0, 2.0]));
        let m = Value::from(Matrix::identity(2).unwrap());

        assert_eq!(Context::eval_binary(Operator::Mul, &v, &m),
                   Err(RuntimeError::UnsupportedOperator { op:    Operator::Mul,
                                                           left:  "vec2".to_string(),
                                                           right: "mat2".to_string(), }));
    }

    #[test]
    fn vectors_of_different_sizes_do_not_add() {
        let a = Value::from(Vector::from([1.0, 2.0]));
        let b = Value::from(Vector::from([1.0, 2.0, 3.0]));

        assert!(matches!(Context::eval_binary(Operator::Add, &a, &b),
                         Err(RuntimeError::DimensionMismatch { .. })));
    }
}
