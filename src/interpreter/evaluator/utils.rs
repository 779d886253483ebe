use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::{core::Value, matrix::Matrix, vector::Vector},
    },
};

/// Checks that a builtin received exactly `expected` arguments.
///
/// # Example
/// ```
/// use vecalc::{
///     error::RuntimeError,
///     interpreter::{evaluator::utils::check_arity, value::core::Value},
/// };
///
/// let args = [Value::Scalar(1.0)];
/// assert!(check_arity(&args, 1).is_ok());
/// assert_eq!(check_arity(&args, 2),
///            Err(RuntimeError::ArgumentCountMismatch { expected: 2,
///                                                      found:    1, }));
/// ```
pub fn check_arity(args: &[Value], expected: usize) -> EvalResult<()> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(RuntimeError::ArgumentCountMismatch { expected,
                                                  found: args.len() })
    }
}

/// Reads argument `index` as a scalar, naming the function on failure.
pub(crate) fn scalar_arg(args: &[Value], index: usize, function: &str) -> EvalResult<f64> {
    args[index].as_scalar(&format!("argument {} of {function}", index + 1))
}

/// Reads argument `index` as a vector of exactly `dims` components.
pub(crate) fn vector_arg(args: &[Value],
                         index: usize,
                         dims: usize,
                         function: &str)
                         -> EvalResult<Vector> {
    let vector = args[index].as_vector(&format!("argument {} of {function}", index + 1))?;
    if vector.dims() != dims {
        return Err(RuntimeError::DimensionMismatch { details: format!("argument {} of {function} must be a vec{dims}, found vec{}",
                                                                      index + 1,
                                                                      vector.dims()) });
    }
    Ok(vector)
}

/// Reads argument `index` as a matrix of exactly `dims` rows.
pub(crate) fn matrix_arg(args: &[Value],
                         index: usize,
                         dims: usize,
                         function: &str)
                         -> EvalResult<Matrix> {
    let matrix = args[index].as_matrix(&format!("argument {} of {function}", index + 1))?;
    if matrix.dims() != dims {
        return Err(RuntimeError::DimensionMismatch { details: format!("argument {} of {function} must be a mat{dims}, found mat{}",
                                                                      index + 1,
                                                                      matrix.dims()) });
    }
    Ok(matrix)
}
