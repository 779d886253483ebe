use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::EvalResult,
            utils::{check_arity, scalar_arg, vector_arg},
        },
        value::{core::Value, vector::Vector},
    },
};

/// Euclidean length of a vector. A scalar is returned unchanged.
///
/// # Example
/// ```
/// use vecalc::interpreter::{
///     evaluator::function::geometry::length,
///     value::{core::Value, vector::Vector},
/// };
///
/// let v = Value::from(Vector::from([3.0, 4.0]));
/// assert_eq!(length(&[v]).unwrap(), Value::Scalar(5.0));
/// assert_eq!(length(&[Value::Scalar(-2.0)]).unwrap(), Value::Scalar(-2.0));
/// ```
pub fn length(args: &[Value]) -> EvalResult<Value> {
    check_arity(args, 1)?;

    match args[0] {
        Value::Scalar(s) => Ok(Value::Scalar(s)),
        Value::Vector(v) => Ok(Value::Scalar(v.length())),
        Value::Matrix(_) => Err(RuntimeError::TypeMismatch { details: "length expects a scalar or a vector, found a matrix".to_string() }),
    }
}

/// Scales a vector to unit length.
///
/// # Errors
/// - `TypeMismatch` if the argument is not a vector.
/// - `DivisionByZero` for the zero vector.
pub fn normalize(args: &[Value]) -> EvalResult<Value> {
    check_arity(args, 1)?;

    let v = args[0].as_vector("argument of normalize")?;
    let length = v.length();
    if length == 0.0 {
        return Err(RuntimeError::DivisionByZero);
    }
    Ok(Value::Vector(v.map(|c| c / length)))
}

/// Dot product of two vectors of the same size.
///
/// # Example
/// ```
/// use vecalc::interpreter::{
///     evaluator::function::geometry::dot,
///     value::{core::Value, vector::Vector},
/// };
///
/// let a = Value::from(Vector::from([1.0, 2.0, 3.0]));
/// let b = Value::from(Vector::from([4.0, 5.0, 6.0]));
///
/// assert_eq!(dot(&[a, b]).unwrap(), Value::Scalar(32.0));
/// ```
pub fn dot(args: &[Value]) -> EvalResult<Value> {
    check_arity(args, 2)?;

    let a = args[0].as_vector("argument 1 of dot")?;
    let b = vector_arg(args, 1, a.dims(), "dot")?;
    Ok(Value::Scalar(a.dot(&b)))
}

/// Cross product of two three-component vectors.
///
/// # Errors
/// `DimensionMismatch` unless both arguments are `vec3`.
pub fn cross(args: &[Value]) -> EvalResult<Value> {
    check_arity(args, 2)?;

    let [ax, ay, az] = vector_arg(args, 0, 3, "cross")?.to_vec3();
    let [bx, by, bz] = vector_arg(args, 1, 3, "cross")?.to_vec3();

    Ok(Value::Vector(Vector::from([ay * bz - az * by,
                                   az * bx - ax * bz,
                                   ax * by - ay * bx])))
}

/// Linear interpolation `x * (1 - a) + y * a`.
///
/// `x` and `y` must have the same shape; the weight `a` must be a scalar.
///
/// # Example
/// ```
/// use vecalc::interpreter::{
///     evaluator::function::geometry::mix,
///     value::{core::Value, vector::Vector},
/// };
///
/// let x = Value::from(Vector::from([0.0, 10.0]));
/// let y = Value::from(Vector::from([10.0, 20.0]));
///
/// let halfway = mix(&[x, y, Value::Scalar(0.5)]).unwrap();
/// assert_eq!(halfway, Value::from(Vector::from([5.0, 15.0])));
/// ```
pub fn mix(args: &[Value]) -> EvalResult<Value> {
    check_arity(args, 3)?;

    let a = scalar_arg(args, 2, "mix")?;
    let lerp = |x: f64, y: f64| x.mul_add(1.0 - a, y * a);

    match (&args[0], &args[1]) {
        (Value::Scalar(x), Value::Scalar(y)) => Ok(Value::Scalar(lerp(*x, *y))),
        (Value::Vector(x), Value::Vector(y)) if x.dims() == y.dims() => {
            Ok(Value::Vector(x.zip_with(y, lerp)))
        },
        (Value::Matrix(x), Value::Matrix(y)) if x.dims() == y.dims() => {
            Ok(Value::Matrix(x.zip_with(y, lerp)))
        },
        (x, y) => Err(RuntimeError::TypeMismatch { details: format!("mix expects two values of the same shape, found {} and {}",
                                                                    x.kind(),
                                                                    y.kind()) }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cross_of_axes_is_the_third_axis() {
        let x = Value::from(Vector::from([1.0, 0.0, 0.0]));
        let y = Value::from(Vector::from([0.0, 1.0, 0.0]));

        assert_eq!(cross(&[x, y]).unwrap(),
                   Value::from(Vector::from([0.0, 0.0, 1.0])));
    }

    #[test]
    fn cross_needs_both_operands_three_dimensional() {
        let a = Value::from(Vector::from([1.0, 0.0, 0.0]));
        let b = Value::from(Vector::from([0.0, 1.0]));

        assert!(matches!(cross(&[a, b]), Err(RuntimeError::DimensionMismatch { .. })));
        assert!(matches!(cross(&[b, a]), Err(RuntimeError::DimensionMismatch { .. })));
    }

    #[test]
    fn zero_vector_cannot_be_normalized() {
        let zero = Value::from(Vector::from([0.0, 0.0, 0.0]));

        assert_eq!(normalize(&[zero]), Err(RuntimeError::DivisionByZero));
    }

    #[test]
    fn dot_rejects_mixed_sizes() {
        let a = Value::from(Vector::from([1.0, 2.0]));
        let b = Value::from(Vector::from([1.0, 2.0, 3.0]));

        assert!(matches!(dot(&[a, b]), Err(RuntimeError::DimensionMismatch { .. })));
    }
}
