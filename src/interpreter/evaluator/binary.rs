/// Operator dispatch on the shapes of both operands.
pub mod core;

/// Arithmetic between two scalars.
pub mod scalar;

/// Elementwise operations.
///
/// Broadcasts a scalar across a vector or matrix, and combines two vectors
/// of the same size component by component.
pub mod broadcast;

/// Matrix-matrix and matrix-vector products.
pub mod matmul;
