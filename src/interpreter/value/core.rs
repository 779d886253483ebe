use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::{display::DEFAULT_PRECISION, matrix::Matrix, vector::Vector},
    },
};

/// Represents a runtime value in the evaluator.
///
/// Every expression evaluates to exactly one of these shapes. A value is a
/// small `Copy` type, so operators and builtins pass values around freely.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    /// A double precision scalar.
    Scalar(f64),
    /// A vector of two to four components.
    Vector(Vector),
    /// A square matrix of size 2x2 to 4x4.
    Matrix(Matrix),
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Scalar(v)
    }
}

impl From<Vector> for Value {
    fn from(v: Vector) -> Self {
        Self::Vector(v)
    }
}

impl From<Matrix> for Value {
    fn from(m: Matrix) -> Self {
        Self::Matrix(m)
    }
}

impl Default for Value {
    fn default() -> Self {
        Self::Scalar(0.0)
    }
}

impl Value {
    /// Size of the value: `1` for a scalar, the component count for a
    /// vector and the row count for a matrix.
    #[must_use]
    pub const fn dims(&self) -> usize {
        match self {
            Self::Scalar(_) => 1,
            Self::Vector(v) => v.dims(),
            Self::Matrix(m) => m.dims(),
        }
    }

    /// Returns `true` if the value is [`Scalar`](Self::Scalar).
    #[must_use]
    pub const fn is_scalar(&self) -> bool {
        matches!(self, Self::Scalar(..))
    }

    /// Returns `true` if the value is [`Vector`](Self::Vector).
    #[must_use]
    pub const fn is_vector(&self) -> bool {
        matches!(self, Self::Vector(..))
    }

    /// Returns `true` if the value is [`Matrix`](Self::Matrix).
    #[must_use]
    pub const fn is_matrix(&self) -> bool {
        matches!(self, Self::Matrix(..))
    }

    /// Short name of the value's shape, such as `scalar`, `vec3` or `mat4`.
    ///
    /// # Example
    /// ```
    /// use vecalc::interpreter::value::{core::Value, vector::Vector};
    ///
    /// assert_eq!(Value::Scalar(1.0).kind(), "scalar");
    /// assert_eq!(Value::from(Vector::from([1.0, 2.0, 3.0])).kind(), "vec3");
    /// ```
    #[must_use]
    pub fn kind(&self) -> String {
        match self {
            Self::Scalar(_) => "scalar".to_string(),
            Self::Vector(v) => format!("vec{}", v.dims()),
            Self::Matrix(m) => format!("mat{}", m.dims()),
        }
    }

    /// First component of the value: the scalar itself, a vector's `x` or a
    /// matrix's upper-left cell.
    #[must_use]
    pub const fn to_scalar(&self) -> f64 {
        match self {
            Self::Scalar(s) => *s,
            Self::Vector(v) => v.to_vec4()[0],
            Self::Matrix(m) => m.cell(0, 0),
        }
    }

    /// Returns the scalar, or a `TypeMismatch` naming `what` was expected.
    ///
    /// # Parameters
    /// - `what`: Description of the operand, used in the error message.
    ///
    /// # Returns
    /// - `Ok(f64)`: If the value is a scalar.
    /// - `Err(RuntimeError::TypeMismatch)`: Otherwise.
    ///
    /// # Example
    /// ```
    /// use vecalc::interpreter::value::{core::Value, vector::Vector};
    ///
    /// assert_eq!(Value::Scalar(2.5).as_scalar("angle").unwrap(), 2.5);
    ///
    /// let v = Value::from(Vector::from([1.0, 2.0]));
    /// assert!(v.as_scalar("angle").is_err());
    /// ```
    pub fn as_scalar(&self, what: &str) -> EvalResult<f64> {
        match self {
            Self::Scalar(s) => Ok(*s),
            _ => Err(self.mismatch(what, "a scalar")),
        }
    }

    /// Returns the vector, or a `TypeMismatch` naming `what` was expected.
    pub fn as_vector(&self, what: &str) -> EvalResult<Vector> {
        match self {
            Self::Vector(v) => Ok(*v),
            _ => Err(self.mismatch(what, "a vector")),
        }
    }

    /// Returns the matrix, or a `TypeMismatch` naming `what` was expected.
    pub fn as_matrix(&self, what: &str) -> EvalResult<Matrix> {
        match self {
            Self::Matrix(m) => Ok(*m),
            _ => Err(self.mismatch(what, "a matrix")),
        }
    }

    /// Replaces the value with a scalar.
    pub fn set_scalar(&mut self, s: f64) {
        *self = Self::Scalar(s);
    }

    /// Replaces the value with a vector.
    pub fn set_vector(&mut self, v: Vector) {
        *self = Self::Vector(v);
    }

    /// Replaces the value with a matrix.
    pub fn set_matrix(&mut self, m: Matrix) {
        *self = Self::Matrix(m);
    }

    /// Applies `f` to the scalar, to every vector component or to every
    /// matrix cell, keeping the shape.
    #[must_use]
    pub fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        match self {
            Self::Scalar(s) => Self::Scalar(f(*s)),
            Self::Vector(v) => Self::Vector(v.map(f)),
            Self::Matrix(m) => Self::Matrix(m.map(f)),
        }
    }

    fn mismatch(&self, what: &str, expected: &str) -> RuntimeError {
        RuntimeError::TypeMismatch { details: format!("{what} must be {expected}, found {}",
                                                      self.kind()) }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display(DEFAULT_PRECISION))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setters_swap_variant_and_size_together() {
        let mut value = Value::default();
        assert!(value.is_scalar());
        assert_eq!(value.dims(), 1);

        value.set_vector(Vector::from([1.0, 2.0, 3.0]));
        assert!(value.is_vector());
        assert_eq!(value.dims(), 3);

        value.set_matrix(Matrix::identity(2).unwrap());
        assert!(value.is_matrix());
        assert_eq!(value.dims(), 2);

        value.set_scalar(4.0);
        assert_eq!(value, Value::Scalar(4.0));
    }

    #[test]
    fn first_component_of_every_shape() {
        assert_eq!(Value::Scalar(7.0).to_scalar(), 7.0);
        assert_eq!(Value::from(Vector::from([5.0, 6.0])).to_scalar(), 5.0);
        assert_eq!(Value::from(Matrix::from([[8.0, 1.0], [2.0, 3.0]])).to_scalar(), 8.0);
    }

    #[test]
    fn wrong_accessor_names_the_operand() {
        let err = Value::Scalar(1.0).as_matrix("argument 1 of translate").unwrap_err();

        assert_eq!(err,
                   RuntimeError::TypeMismatch { details: "argument 1 of translate must be a matrix, found scalar".to_string() });
    }
}
