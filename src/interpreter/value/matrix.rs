use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::vector::{MAX_DIMS, Vector, check_dims},
    },
};

/// Pivots smaller than this are treated as zero during inversion.
const SINGULAR_EPSILON: f64 = 1e-12;

const IDENTITY: [[f64; MAX_DIMS]; MAX_DIMS] = [[1.0, 0.0, 0.0, 0.0],
                                               [0.0, 1.0, 0.0, 0.0],
                                               [0.0, 0.0, 1.0, 0.0],
                                               [0.0, 0.0, 0.0, 1.0]];

/// A square matrix of size 2x2, 3x3 or 4x4.
///
/// Cells are stored row-major as `cells[row][column]`. Cells outside the
/// active `dims x dims` block always hold the identity, so projecting to a
/// larger size pads with identity and projecting to a smaller size keeps the
/// upper-left block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix {
    dims:  usize,
    cells: [[f64; MAX_DIMS]; MAX_DIMS],
}

impl Matrix {
    /// Builds the identity matrix of the given size.
    ///
    /// # Errors
    /// Returns `DimensionMismatch` unless `dims` is 2, 3 or 4.
    ///
    /// # Example
    /// ```
    /// use vecalc::interpreter::value::matrix::Matrix;
    ///
    /// let m = Matrix::identity(2).unwrap();
    /// assert_eq!(m.to_mat2(), [[1.0, 0.0], [0.0, 1.0]]);
    /// ```
    pub fn identity(dims: usize) -> EvalResult<Self> {
        Ok(Self { dims:  check_dims(dims)?,
                  cells: IDENTITY, })
    }

    /// Builds a matrix with `value` on the active diagonal and zero
    /// elsewhere.
    pub fn diagonal(dims: usize, value: f64) -> EvalResult<Self> {
        let mut matrix = Self::identity(dims)?;
        for i in 0..matrix.dims {
            matrix.cells[i][i] = value;
        }
        Ok(matrix)
    }

    /// Builds a matrix from its rows.
    ///
    /// # Errors
    /// Returns `DimensionMismatch` if the rows do not form a square of size
    /// 2, 3 or 4.
    pub fn new(rows: &[&[f64]]) -> EvalResult<Self> {
        let mut matrix = Self::identity(rows.len())?;
        for (r, row) in rows.iter().enumerate() {
            if row.len() != matrix.dims {
                return Err(RuntimeError::DimensionMismatch { details: format!("row {r} has {} cells in a {}x{} matrix",
                                                                              row.len(),
                                                                              matrix.dims,
                                                                              matrix.dims) });
            }
            matrix.cells[r][..row.len()].copy_from_slice(row);
        }
        Ok(matrix)
    }

    /// Number of active rows (and columns).
    #[must_use]
    pub const fn dims(&self) -> usize {
        self.dims
    }

    /// Reads one cell of the full 4x4 grid. Cells outside the active block
    /// read as identity.
    ///
    /// # Panics
    /// If `row` or `column` is 4 or more.
    ///
    /// # Example
    /// ```
    /// use vecalc::interpreter::value::matrix::Matrix;
    ///
    /// let m = Matrix::from([[2.0, 3.0], [4.0, 5.0]]);
    ///
    /// assert_eq!(m.cell(1, 0), 4.0);
    /// assert_eq!(m.cell(3, 3), 1.0);
    /// assert_eq!(m.cell(0, 3), 0.0);
    /// ```
    #[must_use]
    pub const fn cell(&self, row: usize, column: usize) -> f64 {
        self.cells[row][column]
    }

    /// Iterates over the active rows.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.cells[..self.dims]
            .iter()
            .map(|row| &row[..self.dims])
    }

    /// Returns this matrix projected to another size.
    ///
    /// # Example
    /// ```
    /// use vecalc::interpreter::value::matrix::Matrix;
    ///
    /// let m = Matrix::from([[2.0, 3.0], [4.0, 5.0]]);
    /// let grown = m.resized(3).unwrap();
    ///
    /// assert_eq!(grown.to_mat3(), [[2.0, 3.0, 0.0], [4.0, 5.0, 0.0], [0.0, 0.0, 1.0]]);
    /// ```
    pub fn resized(&self, dims: usize) -> EvalResult<Self> {
        let mut result = Self::identity(dims)?;
        let kept = dims.min(self.dims);
        for r in 0..kept {
            result.cells[r][..kept].copy_from_slice(&self.cells[r][..kept]);
        }
        Ok(result)
    }

    /// Projection to a 2x2 grid.
    #[must_use]
    pub const fn to_mat2(&self) -> [[f64; 2]; 2] {
        let c = &self.cells;
        [[c[0][0], c[0][1]], [c[1][0], c[1][1]]]
    }

    /// Projection to a 3x3 grid, identity-padded.
    #[must_use]
    pub const fn to_mat3(&self) -> [[f64; 3]; 3] {
        let c = &self.cells;
        [[c[0][0], c[0][1], c[0][2]],
         [c[1][0], c[1][1], c[1][2]],
         [c[2][0], c[2][1], c[2][2]]]
    }

    /// Projection to a 4x4 grid, identity-padded.
    #[must_use]
    pub const fn to_mat4(&self) -> [[f64; 4]; 4] {
        self.cells
    }

    /// Applies `f` to every active cell.
    #[must_use]
    pub fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        let mut result = *self;
        for row in &mut result.cells[..self.dims] {
            for cell in &mut row[..self.dims] {
                *cell = f(*cell);
            }
        }
        result
    }

    /// Combines two matrices of the same size cell by cell.
    #[must_use]
    pub fn zip_with(&self, other: &Self, f: impl Fn(f64, f64) -> f64) -> Self {
        let mut result = *self;
        for r in 0..self.dims {
            for c in 0..self.dims {
                result.cells[r][c] = f(self.cells[r][c], other.cells[r][c]);
            }
        }
        result
    }

    /// Matrix product `self * other`. Both operands must have the same size.
    #[must_use]
    pub fn product(&self, other: &Self) -> Self {
        let n = self.dims;
        let mut result = *self;
        for r in 0..n {
            for c in 0..n {
                result.cells[r][c] = (0..n).map(|k| self.cells[r][k] * other.cells[k][c])
                                           .sum();
            }
        }
        result
    }

    /// Matrix-vector product `self * vector`, treating the vector as a
    /// column. Both operands must have the same size.
    ///
    /// # Example
    /// ```
    /// use vecalc::interpreter::value::{matrix::Matrix, vector::Vector};
    ///
    /// let m = Matrix::from([[0.0, -1.0], [1.0, 0.0]]);
    /// let v = Vector::from([1.0, 0.0]);
    ///
    /// assert_eq!(m.apply(&v), Vector::from([0.0, 1.0]));
    /// ```
    #[must_use]
    pub fn apply(&self, vector: &Vector) -> Vector {
        let mut product = [0.0; MAX_DIMS];
        for (out, row) in product.iter_mut().zip(self.rows()) {
            *out = row.iter()
                      .zip(vector.components())
                      .map(|(a, b)| a * b)
                      .sum();
        }
        Vector::from(product).truncated(self.dims)
    }

    /// Swaps rows and columns.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let mut result = *self;
        for r in 0..self.dims {
            for c in 0..self.dims {
                result.cells[r][c] = self.cells[c][r];
            }
        }
        result
    }

    /// Inverts the matrix with Gauss-Jordan elimination and partial pivoting.
    ///
    /// # Errors
    /// Returns `SingularMatrix` when no inverse exists.
    pub fn inverse(&self) -> EvalResult<Self> {
        let n = self.dims;
        let mut work = self.cells;
        let mut inverse = Self::identity(n)?;

        for col in 0..n {
            let pivot = (col..n).max_by(|&a, &b| work[a][col].abs().total_cmp(&work[b][col].abs()))
                                .unwrap_or(col);
            if work[pivot][col].abs() < SINGULAR_EPSILON {
                return Err(RuntimeError::SingularMatrix);
            }
            work.swap(col, pivot);
            inverse.cells.swap(col, pivot);

            let scale = work[col][col];
            for c in 0..n {
                work[col][c] /= scale;
                inverse.cells[col][c] /= scale;
            }

            for r in (0..n).filter(|&r| r != col) {
                let factor = work[r][col];
                if factor == 0.0 {
                    continue;
                }
                for c in 0..n {
                    work[r][c] -= factor * work[col][c];
                    inverse.cells[r][c] -= factor * inverse.cells[col][c];
                }
            }
        }

        Ok(inverse)
    }

    /// 4x4 translation matrix moving points by `offset`.
    #[must_use]
    pub fn translation(offset: [f64; 3]) -> Self {
        let mut matrix = Self { dims:  4,
                                cells: IDENTITY, };
        for (r, value) in offset.into_iter().enumerate() {
            matrix.cells[r][3] = value;
        }
        matrix
    }

    /// 4x4 matrix scaling each axis by the matching factor.
    #[must_use]
    pub fn scaling(factors: [f64; 3]) -> Self {
        let mut matrix = Self { dims:  4,
                                cells: IDENTITY, };
        for (i, value) in factors.into_iter().enumerate() {
            matrix.cells[i][i] = value;
        }
        matrix
    }

    /// 4x4 matrix rotating by `angle` radians around `axis`
    /// (counter-clockwise when looking down the axis).
    ///
    /// # Errors
    /// Returns `InvalidArgument` for a zero-length axis.
    pub fn rotation(angle: f64, axis: [f64; 3]) -> EvalResult<Self> {
        let length = axis.iter().map(|a| a * a).sum::<f64>().sqrt();
        if length == 0.0 {
            return Err(RuntimeError::InvalidArgument { details: "rotation axis must not be zero".to_string() });
        }
        let [x, y, z] = axis.map(|a| a / length);
        let (s, c) = angle.sin_cos();
        let t = 1.0 - c;

        Ok(Self::from([[t * x * x + c, t * x * y - s * z, t * x * z + s * y, 0.0],
                       [t * x * y + s * z, t * y * y + c, t * y * z - s * x, 0.0],
                       [t * x * z - s * y, t * y * z + s * x, t * z * z + c, 0.0],
                       [0.0, 0.0, 0.0, 1.0]]))
    }

    /// Right-handed perspective projection with clip depth `-1..1`.
    ///
    /// # Errors
    /// Returns `DivisionByZero` for a zero aspect ratio, a zero field of view
    /// or coinciding clip planes.
    pub fn perspective(fovy: f64, aspect: f64, near: f64, far: f64) -> EvalResult<Self> {
        let tan_half = (fovy / 2.0).tan();
        if aspect == 0.0 || tan_half == 0.0 || far == near {
            return Err(RuntimeError::DivisionByZero);
        }
        let f = 1.0 / tan_half;

        Ok(Self::from([[f / aspect, 0.0, 0.0, 0.0],
                       [0.0, f, 0.0, 0.0],
                       [0.0, 0.0, -(far + near) / (far - near), -(2.0 * far * near) / (far - near)],
                       [0.0, 0.0, -1.0, 0.0]]))
    }

    /// Two-dimensional orthographic projection of the given box.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if the box is flat.
    pub fn ortho(left: f64, right: f64, bottom: f64, top: f64) -> EvalResult<Self> {
        if right == left || top == bottom {
            return Err(RuntimeError::DivisionByZero);
        }

        Ok(Self::from([[2.0 / (right - left), 0.0, 0.0, -(right + left) / (right - left)],
                       [0.0, 2.0 / (top - bottom), 0.0, -(top + bottom) / (top - bottom)],
                       [0.0, 0.0, -1.0, 0.0],
                       [0.0, 0.0, 0.0, 1.0]]))
    }
}

macro_rules! matrix_from_array {
    ($($n:literal),*) => {
        $(
            impl From<[[f64; $n]; $n]> for Matrix {
                fn from(rows: [[f64; $n]; $n]) -> Self {
                    let mut cells = IDENTITY;
                    for (r, row) in rows.iter().enumerate() {
                        cells[r][..$n].copy_from_slice(row);
                    }
                    Self { dims: $n, cells }
                }
            }
        )*
    };
}

matrix_from_array!(2, 3, 4);

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: &Matrix, b: &Matrix) -> bool {
        a.dims == b.dims
        && a.rows()
            .zip(b.rows())
            .all(|(x, y)| x.iter().zip(y).all(|(p, q)| (p - q).abs() < 1e-9))
    }

    #[test]
    fn inverse_times_matrix_is_identity() {
        let m = Matrix::from([[4.0, 7.0, 2.0], [3.0, 6.0, 1.0], [2.0, 5.0, 3.0]]);
        let product = m.product(&m.inverse().unwrap());

        assert!(close(&product, &Matrix::identity(3).unwrap()));
    }

    #[test]
    fn inversion_pivots_past_a_zero() {
        let m = Matrix::from([[0.0, 1.0], [1.0, 0.0]]);

        assert_eq!(m.inverse().unwrap(), m);
    }

    #[test]
    fn ragged_rows_are_rejected() {
        assert!(matches!(Matrix::new(&[&[1.0, 2.0], &[3.0]]),
                         Err(RuntimeError::DimensionMismatch { .. })));
        assert!(Matrix::new(&[&[1.0]]).is_err());
    }

    #[test]
    fn shrinking_then_growing_pads_with_identity() {
        let m = Matrix::from([[1.0, 2.0, 3.0, 4.0],
                              [5.0, 6.0, 7.0, 8.0],
                              [9.0, 10.0, 11.0, 12.0],
                              [13.0, 14.0, 15.0, 16.0]]);
        let round_trip = m.resized(2).unwrap().resized(4).unwrap();

        assert_eq!(round_trip.to_mat4(),
                   [[1.0, 2.0, 0.0, 0.0],
                    [5.0, 6.0, 0.0, 0.0],
                    [0.0, 0.0, 1.0, 0.0],
                    [0.0, 0.0, 0.0, 1.0]]);
    }

    #[test]
    fn perspective_maps_near_plane_to_minus_one() {
        let m = Matrix::perspective(std::f64::consts::FRAC_PI_2, 1.0, 1.0, 10.0).unwrap();
        let [_, _, z, w] = m.apply(&Vector::from([0.0, 0.0, -1.0, 1.0])).to_vec4();

        assert!((z / w + 1.0).abs() < 1e-12);
        assert_eq!(Matrix::perspective(1.0, 0.0, 1.0, 10.0), Err(RuntimeError::DivisionByZero));
    }
}
