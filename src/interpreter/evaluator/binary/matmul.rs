use crate::{
    ast::Operator,
    interpreter::{
        evaluator::{
            binary::core::{mismatch, unsupported},
            core::{Context, EvalResult},
        },
        value::core::Value,
    },
};

impl Context {
    /// Evaluates an operator with a matrix on the left and a vector or
    /// matrix on the right.
    ///
    /// Only `*` is defined. Both operands must have the same size.
    ///
    /// # Shape rules
    /// - `matN * matN` produces the matrix product.
    /// - `matN * vecN` produces a vector, treating the vector as a column.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand, a matrix.
    /// - `right`: Right operand, a matrix or vector.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the product.
    ///
    /// # Example
    /// ```
    /// use vecalc::{
    ///     ast::Operator,
    ///     interpreter::{
    ///         evaluator::core::Context,
    ///         value::{core::Value, matrix::Matrix, vector::Vector},
    ///     },
    /// };
    ///
    /// let m = Value::from(Matrix::from([[1.0, 2.0], [3.0, 4.0]]));
    /// let v = Value::from(Vector::from([1.0, 1.0]));
    ///
    /// let result = Context::eval_matmul(Operator::Mul, &m, &v).unwrap();
    /// assert_eq!(result, Value::from(Vector::from([3.0, 7.0])));
    /// ```
    pub fn eval_matmul(op: Operator, left: &Value, right: &Value) -> EvalResult<Value> {
        if op != Operator::Mul {
            return Err(unsupported(op, left, right));
        }
        if left.dims() != right.dims() {
            return Err(mismatch(op, left, right));
        }

        match (left, right) {
            (Value::Matrix(a), Value::Matrix(b)) => Ok(Value::Matrix(a.product(b))),
            (Value::Matrix(m), Value::Vector(v)) => Ok(Value::Vector(m.apply(v))),
            _ => Err(unsupported(op, left, right)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::RuntimeError, interpreter::value::matrix::Matrix};

    #[test]
    fn product_with_identity_is_unchanged() {
        let m = Value::from(Matrix::from([[1.0, 2.0, 3.0],
                                          [4.0, 5.0, 6.0],
                                          [7.0, 8.0, 9.0]]));
        let id = Value::from(Matrix::identity(3).unwrap());

        assert_eq!(Context::eval_matmul(Operator::Mul, &m, &id).unwrap(), m);
        assert_eq!(Context::eval_matmul(Operator::Mul, &id, &m).unwrap(), m);
    }

    #[test]
    fn matrices_of_different_sizes_do_not_multiply() {
        let a = Value::from(Matrix::identity(2).unwrap());
        let b = Value::from(Matrix::identity(3).unwrap());

        assert!(matches!(Context::eval_matmul(Operator::Mul, &a, &b),
                         Err(RuntimeError::DimensionMismatch { .. })));
    }

    #[test]
    fn matrices_do_not_add() {
        let a = Value::from(Matrix::identity(2).unwrap());

        assert!(matches!(Context::eval_matmul(Operator::Add, &a, &a),
                         Err(RuntimeError::UnsupportedOperator { .. })));
    }
}
