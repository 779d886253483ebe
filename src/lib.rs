//! # vecalc
//!
//! vecalc is a calculator for expressions over scalars, vectors and square
//! matrices, written in Rust. It understands GLSL-style constructors such as
//! `vec3(1, 2, 3)` and `mat4()`, geometry and transform functions, and
//! textual variables assigned with `name = expression`.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::EvalError,
    interpreter::{evaluator::core::Context, value::core::Value},
};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Node` tree, the binary operators and the closed
/// set of builtin function identities with their arities and keywords.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while resolving
/// variables, parsing or evaluating an expression.
///
/// # Responsibilities
/// - Defines `ParseError` and `RuntimeError` for the two phases.
/// - Combines them in `EvalError` so `?` composes across the pipeline.
/// - Attaches byte offsets to parse errors for user feedback.
pub mod error;
/// Orchestrates the entire process of evaluating a line.
///
/// This module ties together variable resolution, lexing, parsing, evaluation
/// and value representations.
pub mod interpreter;
/// General utilities for safe numeric conversion.
pub mod util;

/// Evaluates a single line in a fresh session.
///
/// The line sees only the predefined variables `pi` and `e`, and any
/// assignment it makes is discarded afterwards. Use
/// [`Context`] to keep variables between lines.
///
/// # Errors
/// Returns an error if the line cannot be resolved, parsed or evaluated.
///
/// # Examples
/// ```
/// use vecalc::{
///     evaluate,
///     interpreter::value::{core::Value, vector::Vector},
/// };
///
/// let v = evaluate("vec2(1, 2) * 3").unwrap().unwrap();
/// assert_eq!(v, Value::from(Vector::from([3.0, 6.0])));
///
/// // 'x' is not defined in a fresh session.
/// assert!(evaluate("x + 1").is_err());
///
/// // Assignments produce no value.
/// assert_eq!(evaluate("x = 1").unwrap(), None);
/// ```
pub fn evaluate(source: &str) -> Result<Option<Value>, EvalError> {
    Context::new().evaluate(source)
}
