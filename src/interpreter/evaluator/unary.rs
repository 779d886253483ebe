use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{core::EvalResult, utils::check_arity},
        value::core::Value,
    },
    util::num::is_integral,
};

/// Largest `n` for which `n!` is finite as an `f64`.
const MAX_FACTORIAL: f64 = 170.0;

/// Negates a scalar, every vector component or every matrix cell.
///
/// # Example
/// ```
/// use vecalc::interpreter::{
///     evaluator::unary::negate,
///     value::{core::Value, vector::Vector},
/// };
///
/// let v = Value::from(Vector::from([1.0, -2.0]));
/// assert_eq!(negate(&[v]).unwrap(), Value::from(Vector::from([-1.0, 2.0])));
/// ```
pub fn negate(args: &[Value]) -> EvalResult<Value> {
    check_arity(args, 1)?;

    Ok(args[0].map(|x| -x))
}

/// Computes `n!` for a non-negative whole scalar `n`.
///
/// # Errors
/// - `FactorialDomainError` for vectors, matrices, negative or fractional
///   scalars.
/// - `Overflow` if the result does not fit in an `f64`.
///
/// # Example
/// ```
/// use vecalc::interpreter::{evaluator::unary::factorial, value::core::Value};
///
/// assert_eq!(factorial(&[Value::Scalar(5.0)]).unwrap(), Value::Scalar(120.0));
/// assert_eq!(factorial(&[Value::Scalar(0.0)]).unwrap(), Value::Scalar(1.0));
/// assert!(factorial(&[Value::Scalar(-1.0)]).is_err());
/// assert!(factorial(&[Value::Scalar(2.5)]).is_err());
/// ```
pub fn factorial(args: &[Value]) -> EvalResult<Value> {
    check_arity(args, 1)?;

    let n = match args[0] {
        Value::Scalar(n) if is_integral(n) && n >= 0.0 => n,
        Value::Scalar(n) => {
            return Err(RuntimeError::FactorialDomainError { details: format!("found {n}") });
        },
        other => {
            return Err(RuntimeError::FactorialDomainError { details: format!("found a {}",
                                                                             other.kind()) });
        },
    };

    if n > MAX_FACTORIAL {
        return Err(RuntimeError::Overflow);
    }

    let mut product = 1.0;
    let mut k = 2.0;
    while k <= n {
        product *= k;
        k += 1.0;
    }
    Ok(Value::Scalar(product))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn largest_factorial_is_finite() {
        let Value::Scalar(result) = factorial(&[Value::Scalar(170.0)]).unwrap() else {
            panic!("factorial of a scalar must be a scalar");
        };
        assert!(result.is_finite());
        assert_eq!(factorial(&[Value::Scalar(171.0)]), Err(RuntimeError::Overflow));
    }

    #[test]
    fn negative_zero_factorial_is_one() {
        assert_eq!(factorial(&[Value::Scalar(-0.0)]).unwrap(), Value::Scalar(1.0));
    }
}
