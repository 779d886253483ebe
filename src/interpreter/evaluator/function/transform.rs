use crate::interpreter::{
    evaluator::{
        core::EvalResult,
        utils::{check_arity, matrix_arg, scalar_arg, vector_arg},
    },
    value::{core::Value, matrix::Matrix},
};

/// `scale(m, v)`: `m` multiplied on the right by a scaling matrix.
///
/// # Example
/// ```
/// use vecalc::interpreter::{
///     evaluator::function::transform::scale,
///     value::{core::Value, matrix::Matrix, vector::Vector},
/// };
///
/// let m = Value::from(Matrix::identity(4).unwrap());
/// let v = Value::from(Vector::from([2.0, 3.0, 4.0]));
///
/// let Value::Matrix(scaled) = scale(&[m, v]).unwrap() else { panic!() };
/// assert_eq!(scaled.cell(1, 1), 3.0);
/// ```
pub fn scale(args: &[Value]) -> EvalResult<Value> {
    check_arity(args, 2)?;

    let m = matrix_arg(args, 0, 4, "scale")?;
    let v = vector_arg(args, 1, 3, "scale")?;
    Ok(Value::Matrix(m.product(&Matrix::scaling(v.to_vec3()))))
}

/// `translate(m, v)`: `m` multiplied on the right by a translation matrix.
pub fn translate(args: &[Value]) -> EvalResult<Value> {
    check_arity(args, 2)?;

    let m = matrix_arg(args, 0, 4, "translate")?;
    let v = vector_arg(args, 1, 3, "translate")?;
    Ok(Value::Matrix(m.product(&Matrix::translation(v.to_vec3()))))
}

/// `rotate(m, angle, axis)`: `m` multiplied on the right by a rotation of
/// `angle` radians around `axis`.
///
/// # Errors
/// `InvalidArgument` for a zero axis.
pub fn rotate(args: &[Value]) -> EvalResult<Value> {
    check_arity(args, 3)?;

    let m = matrix_arg(args, 0, 4, "rotate")?;
    let angle = scalar_arg(args, 1, "rotate")?;
    let axis = vector_arg(args, 2, 3, "rotate")?;
    Ok(Value::Matrix(m.product(&Matrix::rotation(angle, axis.to_vec3())?)))
}

/// Inverse transpose of a matrix of any size, as used for normal vectors.
///
/// # Errors
/// - `TypeMismatch` if the argument is not a matrix.
/// - `SingularMatrix` if it has no inverse.
pub fn inv_transpose(args: &[Value]) -> EvalResult<Value> {
    check_arity(args, 1)?;

    let m = args[0].as_matrix("argument 1 of invtranspose")?;
    Ok(Value::Matrix(m.inverse()?.transpose()))
}

/// `perspective(fovy, aspect, near, far)`: a right-handed perspective
/// projection with the vertical field of view `fovy` in radians.
///
/// # Errors
/// - `TypeMismatch` if any argument is not a scalar.
/// - `DivisionByZero` for a zero aspect ratio or field of view, or
///   coinciding clip planes.
///
/// # Example
/// ```
/// use vecalc::interpreter::{evaluator::function::transform::perspective, value::core::Value};
///
/// let args = [1.0, 1.5, 0.1, 100.0].map(Value::Scalar);
/// let Value::Matrix(m) = perspective(&args).unwrap() else { panic!() };
///
/// assert_eq!(m.dims(), 4);
/// assert_eq!(m.cell(3, 2), -1.0);
/// ```
pub fn perspective(args: &[Value]) -> EvalResult<Value> {
    let [fovy, aspect, near, far] = four_scalars(args, "perspective")?;
    Ok(Value::Matrix(Matrix::perspective(fovy, aspect, near, far)?))
}

/// `ortho(left, right, bottom, top)`: an orthographic projection mapping
/// the box onto `-1..1` in both directions.
///
/// # Errors
/// - `TypeMismatch` if any argument is not a scalar.
/// - `DivisionByZero` if the box has no width or height.
pub fn ortho(args: &[Value]) -> EvalResult<Value> {
    let [left, right, bottom, top] = four_scalars(args, "ortho")?;
    Ok(Value::Matrix(Matrix::ortho(left, right, bottom, top)?))
}

/// Reads exactly four scalar arguments of `function`.
fn four_scalars(args: &[Value], function: &str) -> EvalResult<[f64; 4]> {
    check_arity(args, 4)?;

    let mut scalars = [0.0; 4];
    for (i, slot) in scalars.iter_mut().enumerate() {
        *slot = scalar_arg(args, i, function)?;
    }
    Ok(scalars)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::RuntimeError, interpreter::value::vector::Vector};

    fn mat4() -> Value {
        Value::from(Matrix::identity(4).unwrap())
    }

    #[test]
    fn translation_moves_the_origin() {
        let Value::Matrix(m) = translate(&[mat4(), Value::from(Vector::from([1.0, 2.0, 3.0]))]).unwrap() else {
            panic!("translate must return a matrix");
        };

        assert_eq!(m.apply(&Vector::from([0.0, 0.0, 0.0, 1.0])),
                   Vector::from([1.0, 2.0, 3.0, 1.0]));
    }

    #[test]
    fn translate_rejects_small_matrices() {
        let m = Value::from(Matrix::identity(3).unwrap());
        let v = Value::from(Vector::from([1.0, 2.0, 3.0]));

        assert!(matches!(translate(&[m, v]), Err(RuntimeError::DimensionMismatch { .. })));
    }

    #[test]
    fn quarter_turn_about_z_maps_x_to_y() {
        let angle = Value::Scalar(std::f64::consts::FRAC_PI_2);
        let axis = Value::from(Vector::from([0.0, 0.0, 1.0]));
        let Value::Matrix(m) = rotate(&[mat4(), angle, axis]).unwrap() else {
            panic!("rotate must return a matrix");
        };

        let [x, y, z, w] = m.apply(&Vector::from([1.0, 0.0, 0.0, 1.0])).to_vec4();
        assert!(x.abs() < 1e-12);
        assert!((y - 1.0).abs() < 1e-12);
        assert!(z.abs() < 1e-12);
        assert!((w - 1.0).abs() < 1e-12);
    }

    #[test]
    fn singular_matrix_has_no_inverse_transpose() {
        let m = Value::from(Matrix::from([[1.0, 2.0], [2.0, 4.0]]));

        assert_eq!(inv_transpose(&[m]), Err(RuntimeError::SingularMatrix));
    }

    #[test]
    fn inverse_transpose_of_scaling() {
        let m = Value::from(Matrix::from([[2.0, 0.0], [0.0, 4.0]]));

        assert_eq!(inv_transpose(&[m]).unwrap(),
                   Value::from(Matrix::from([[0.5, 0.0], [0.0, 0.25]])));
    }

    #[test]
    fn projections_need_scalar_arguments() {
        let v = Value::from(Vector::from([1.0, 2.0]));
        let mut args = [1.0, 1.0, 0.1, 10.0].map(Value::Scalar);
        args[2] = v;

        assert!(matches!(perspective(&args), Err(RuntimeError::TypeMismatch { .. })));
        assert!(matches!(ortho(&args), Err(RuntimeError::TypeMismatch { .. })));
    }

    #[test]
    fn flat_ortho_box_is_rejected() {
        let args = [1.0, 1.0, 0.0, 1.0].map(Value::Scalar);

        assert_eq!(ortho(&args), Err(RuntimeError::DivisionByZero));
    }
}
