use crate::{
    ast::Function,
    error::RuntimeError,
    interpreter::{
        evaluator::{core::EvalResult, utils::scalar_arg},
        value::{core::Value, matrix::Matrix, vector::Vector},
    },
};

/// Builds a vector from one scalar per component.
///
/// # Parameters
/// - `function`: One of `Vec2`, `Vec3` or `Vec4`; selects the size.
/// - `args`: The components, in order.
///
/// # Example
/// ```
/// use vecalc::{
///     ast::Function,
///     interpreter::{
///         evaluator::function::constructor::vector,
///         value::{core::Value, vector::Vector},
///     },
/// };
///
/// let args = [Value::Scalar(1.0), Value::Scalar(2.0), Value::Scalar(3.0)];
/// assert_eq!(vector(Function::Vec3, &args).unwrap(),
///            Value::from(Vector::from([1.0, 2.0, 3.0])));
///
/// let nested = [Value::from(Vector::from([1.0, 2.0])), Value::Scalar(3.0)];
/// assert!(vector(Function::Vec2, &nested).is_err());
/// ```
pub fn vector(function: Function, args: &[Value]) -> EvalResult<Value> {
    let dims = function.vector_dims()
                       .ok_or_else(|| RuntimeError::UnknownFunction { name: function.name().to_string() })?;
    if args.len() != dims {
        return Err(RuntimeError::ArgumentCountMismatch { expected: dims,
                                                         found:    args.len(), });
    }

    let components = (0..dims).map(|i| scalar_arg(args, i, function.name()))
                              .collect::<EvalResult<Vec<_>>>()?;
    Ok(Value::Vector(Vector::new(&components)?))
}

/// Builds a square matrix.
///
/// - No argument gives the identity.
/// - A scalar gives that value on the diagonal and zero elsewhere.
/// - A matrix of any size is projected: growing pads with identity,
///   shrinking keeps the upper-left block.
///
/// # Errors
/// `TypeMismatch` for a vector argument.
///
/// # Example
/// ```
/// use vecalc::{
///     ast::Function,
///     interpreter::{
///         evaluator::function::constructor::matrix,
///         value::{core::Value, matrix::Matrix},
///     },
/// };
///
/// let diagonal = matrix(Function::Mat2, &[Value::Scalar(3.0)]).unwrap();
/// assert_eq!(diagonal, Value::from(Matrix::from([[3.0, 0.0], [0.0, 3.0]])));
/// ```
pub fn matrix(function: Function, args: &[Value]) -> EvalResult<Value> {
    let dims = function.matrix_dims()
                       .ok_or_else(|| RuntimeError::UnknownFunction { name: function.name().to_string() })?;

    let result = match args {
        [] => Matrix::identity(dims)?,
        [Value::Scalar(s)] => Matrix::diagonal(dims, *s)?,
        [Value::Matrix(m)] => m.resized(dims)?,
        [Value::Vector(v)] => {
            return Err(RuntimeError::TypeMismatch { details: format!("argument 1 of {} must be a scalar or a matrix, found vec{}",
                                                                     function.name(),
                                                                     v.dims()) });
        },
        _ => {
            return Err(RuntimeError::ArgumentCountMismatch { expected: 1,
                                                             found:    args.len(), });
        },
    };
    Ok(Value::Matrix(result))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_constructor_is_identity() {
        assert_eq!(matrix(Function::Mat3, &[]).unwrap(),
                   Value::from(Matrix::identity(3).unwrap()));
    }

    #[test]
    fn shrinking_keeps_upper_left_block() {
        let m = Value::from(Matrix::from([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]));

        assert_eq!(matrix(Function::Mat2, &[m]).unwrap(),
                   Value::from(Matrix::from([[1.0, 2.0], [4.0, 5.0]])));
    }

    #[test]
    fn vector_cannot_become_a_matrix() {
        let v = Value::from(Vector::from([1.0, 2.0]));

        assert!(matches!(matrix(Function::Mat2, &[v]), Err(RuntimeError::TypeMismatch { .. })));
    }

    #[test]
    fn non_constructor_is_rejected() {
        assert_eq!(vector(Function::Sin, &[Value::Scalar(1.0)]),
                   Err(RuntimeError::UnknownFunction { name: "sin".to_string() }));
    }
}
