/// Fixed-size vector support.
///
/// Defines the `Vector` type holding two, three or four components, with the
/// zero-padded projections between sizes and the elementwise helpers used by
/// the evaluator.
pub mod vector;
/// Square matrix support.
///
/// Defines the `Matrix` type holding a 2x2, 3x3 or 4x4 grid of cells, with
/// identity-padded projections, products, inversion and the affine and
/// projection transforms.
pub mod matrix;
/// Precision-aware rendering of values for display.
pub mod display;

pub mod core;
