/// Binary operator evaluation logic.
///
/// Handles the execution of all binary operations in expressions: scalar
/// arithmetic, broadcasting between scalars and vectors or matrices, and
/// matrix products.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements the two operators without a keyword: prefix negation and
/// postfix factorial.
pub mod unary;

/// Core evaluation logic and context management.
///
/// Contains the main evaluation engine, the session context and the
/// evaluation pipeline from raw text to value.
pub mod core;

/// Utility functions for evaluation.
pub mod utils;

/// Function evaluation.
///
/// Dispatches builtin function calls by identity and implements the
/// elementwise, geometric, constructor, transform and random builtins.
pub mod function;
