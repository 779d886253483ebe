/// Builtin dispatch.
///
/// Maps every function identity to its implementation and checks the
/// argument count before calling it.
pub mod core;
/// Elementwise builtins.
///
/// Trigonometric, hyperbolic, logarithmic and other one-argument functions
/// applied to a scalar, to every vector component or to every matrix cell.
pub mod builtin;
/// Vector geometry: `length`, `normalize`, `dot`, `cross` and `mix`.
pub mod geometry;
/// The `vecN` and `matN` constructors.
pub mod constructor;
/// Affine transforms and projection matrices.
///
/// Implements `scale`, `rotate`, `translate`, `invtranspose`, `perspective`
/// and `ortho`.
pub mod transform;
/// `rand`, drawing from the session's generator.
pub mod random;
