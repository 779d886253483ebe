use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Smallest number of components or rows a vector or matrix may have.
pub const MIN_DIMS: usize = 2;
/// Largest number of components or rows a vector or matrix may have.
pub const MAX_DIMS: usize = 4;

/// Ensures a requested size lies within `MIN_DIMS..=MAX_DIMS`.
pub(crate) fn check_dims(dims: usize) -> EvalResult<usize> {
    if (MIN_DIMS..=MAX_DIMS).contains(&dims) {
        Ok(dims)
    } else {
        Err(RuntimeError::DimensionMismatch { details: format!("{dims} is not a supported size, expected {MIN_DIMS} to {MAX_DIMS}") })
    }
}

/// A vector of two, three or four components.
///
/// Components beyond `dims` are always zero, so projecting to a larger size
/// pads with zeros and projecting to a smaller size truncates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector {
    dims:       usize,
    components: [f64; MAX_DIMS],
}

impl Vector {
    /// Builds a vector from its components.
    ///
    /// # Errors
    /// Returns `DimensionMismatch` unless two to four components are given.
    ///
    /// # Example
    /// ```
    /// use vecalc::interpreter::value::vector::Vector;
    ///
    /// let v = Vector::new(&[1.0, 2.0, 3.0]).unwrap();
    /// assert_eq!(v.dims(), 3);
    /// assert_eq!(v.components(), &[1.0, 2.0, 3.0]);
    ///
    /// assert!(Vector::new(&[1.0]).is_err());
    /// ```
    pub fn new(components: &[f64]) -> EvalResult<Self> {
        let dims = check_dims(components.len())?;
        let mut padded = [0.0; MAX_DIMS];
        padded[..dims].copy_from_slice(components);
        Ok(Self { dims,
                  components: padded })
    }

    /// Builds the zero vector of the given size.
    pub fn zero(dims: usize) -> EvalResult<Self> {
        Ok(Self { dims:       check_dims(dims)?,
                  components: [0.0; MAX_DIMS], })
    }

    /// Number of active components.
    #[must_use]
    pub const fn dims(&self) -> usize {
        self.dims
    }

    /// The active components.
    #[must_use]
    pub fn components(&self) -> &[f64] {
        &self.components[..self.dims]
    }

    /// Returns this vector projected to another size.
    ///
    /// Missing components read as zero; surplus components are dropped.
    pub fn resized(&self, dims: usize) -> EvalResult<Self> {
        let dims = check_dims(dims)?;
        let mut components = [0.0; MAX_DIMS];
        let kept = dims.min(self.dims);
        components[..kept].copy_from_slice(&self.components[..kept]);
        Ok(Self { dims, components })
    }

    /// Drops the components beyond `dims`. `dims` must already be a valid
    /// size no larger than the current one.
    pub(crate) fn truncated(mut self, dims: usize) -> Self {
        self.components[dims..].fill(0.0);
        self.dims = dims;
        self
    }

    /// Projection to two components.
    #[must_use]
    pub const fn to_vec2(&self) -> [f64; 2] {
        [self.components[0], self.components[1]]
    }

    /// Projection to three components, zero-padded.
    ///
    /// # Example
    /// ```
    /// use vecalc::interpreter::value::vector::Vector;
    ///
    /// let v = Vector::from([1.0, 2.0]);
    /// assert_eq!(v.to_vec3(), [1.0, 2.0, 0.0]);
    /// ```
    #[must_use]
    pub const fn to_vec3(&self) -> [f64; 3] {
        [self.components[0], self.components[1], self.components[2]]
    }

    /// Projection to four components, zero-padded.
    #[must_use]
    pub const fn to_vec4(&self) -> [f64; 4] {
        self.components
    }

    /// Applies `f` to every active component.
    #[must_use]
    pub fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        let mut result = *self;
        for c in &mut result.components[..self.dims] {
            *c = f(*c);
        }
        result
    }

    /// Combines two vectors of the same size component by component.
    ///
    /// The caller is responsible for checking that the sizes agree.
    #[must_use]
    pub fn zip_with(&self, other: &Self, f: impl Fn(f64, f64) -> f64) -> Self {
        let mut result = *self;
        for (c, o) in result.components[..self.dims]
                            .iter_mut()
                            .zip(other.components())
        {
            *c = f(*c, *o);
        }
        result
    }

    /// Dot product over the active components.
    #[must_use]
    pub fn dot(&self, other: &Self) -> f64 {
        self.components()
            .iter()
            .zip(other.components())
            .map(|(a, b)| a * b)
            .sum()
    }

    /// Euclidean length.
    ///
    /// # Example
    /// ```
    /// use vecalc::interpreter::value::vector::Vector;
    ///
    /// assert_eq!(Vector::from([3.0, 4.0]).length(), 5.0);
    /// ```
    #[must_use]
    pub fn length(&self) -> f64 {
        self.dot(self).sqrt()
    }
}

macro_rules! vector_from_array {
    ($($n:literal),*) => {
        $(
            impl From<[f64; $n]> for Vector {
                fn from(components: [f64; $n]) -> Self {
                    let mut padded = [0.0; MAX_DIMS];
                    padded[..$n].copy_from_slice(&components);
                    Self { dims: $n, components: padded }
                }
            }
        )*
    };
}

vector_from_array!(2, 3, 4);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resizing_pads_with_zero_and_truncates() {
        let v = Vector::from([1.0, 2.0, 3.0]);

        assert_eq!(v.resized(4).unwrap().to_vec4(), [1.0, 2.0, 3.0, 0.0]);
        assert_eq!(v.resized(2).unwrap(), Vector::from([1.0, 2.0]));
        assert_eq!(v.resized(2).unwrap().resized(3).unwrap().to_vec3(), [1.0, 2.0, 0.0]);
        assert!(v.resized(5).is_err());
    }

    #[test]
    fn zero_vector_has_requested_size() {
        let v = Vector::zero(2).unwrap();

        assert_eq!(v.to_vec2(), [0.0, 0.0]);
        assert_eq!(v.length(), 0.0);
        assert!(Vector::zero(1).is_err());
    }
}
