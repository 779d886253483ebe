use crate::interpreter::{
    evaluator::{core::EvalResult, utils::check_arity},
    value::core::Value,
};

/// Applies a one-argument real function elementwise.
///
/// The generated functions accept exactly one argument.
/// - Scalars have the function applied directly.
/// - Vectors have it applied to every component.
/// - Matrices have it applied to every cell of the active block.
///
/// Domain errors are not reported: `sqrt(-1)` is `NaN` and `ln(0)` is
/// negative infinity.
///
/// # Parameters
/// - `args`: Slice containing one argument.
///
/// # Returns
/// An `EvalResult<Value>` of the same shape as the argument.
///
/// # Example
/// ```
/// use vecalc::interpreter::{
///     evaluator::function::builtin::sin,
///     value::{core::Value, vector::Vector},
/// };
///
/// let x = Value::Scalar(std::f64::consts::PI / 2.0);
/// assert_eq!(sin(&[x]).unwrap(), Value::Scalar(1.0));
///
/// let v = Value::from(Vector::from([0.0, 0.0]));
/// assert_eq!(sin(&[v]).unwrap(), v);
/// ```
macro_rules! elementwise_builtin {
    ($fname:ident, $real_fn:expr) => {
        pub fn $fname(args: &[Value]) -> EvalResult<Value> {
            check_arity(args, 1)?;

            Ok(args[0].map($real_fn))
        }
    };
}

elementwise_builtin!(sin, f64::sin);
elementwise_builtin!(cos, f64::cos);
elementwise_builtin!(tan, f64::tan);
elementwise_builtin!(asin, f64::asin);
elementwise_builtin!(acos, f64::acos);
elementwise_builtin!(atan, f64::atan);
elementwise_builtin!(sinh, f64::sinh);
elementwise_builtin!(cosh, f64::cosh);
elementwise_builtin!(tanh, f64::tanh);
elementwise_builtin!(abs, f64::abs);
elementwise_builtin!(ln, f64::ln);
elementwise_builtin!(log, f64::log10);
elementwise_builtin!(exp, f64::exp);
elementwise_builtin!(sqrt, f64::sqrt);
elementwise_builtin!(rad, f64::to_radians);
elementwise_builtin!(deg, f64::to_degrees);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::value::matrix::Matrix;

    fn scalar(value: Value) -> f64 {
        value.as_scalar("result").unwrap()
    }

    #[test]
    fn log_is_base_ten() {
        assert!((scalar(log(&[Value::Scalar(1000.0)]).unwrap()) - 3.0).abs() < 1e-12);
    }

    #[test]
    fn degrees_round_trip_through_radians() {
        let r = scalar(rad(&[Value::Scalar(180.0)]).unwrap());
        assert!((r - std::f64::consts::PI).abs() < 1e-12);
        assert!((scalar(deg(&[Value::Scalar(r)]).unwrap()) - 180.0).abs() < 1e-9);
    }

    #[test]
    fn abs_applies_to_every_cell() {
        let m = Value::from(Matrix::from([[-1.0, 2.0], [-3.0, -4.0]]));

        assert_eq!(abs(&[m]).unwrap(),
                   Value::from(Matrix::from([[1.0, 2.0], [3.0, 4.0]])));
    }
}
