/// Parser state and the entry point.
///
/// Holds the token cursor and the `parse_expression` function that parses a
/// whole resolved line into an AST.
pub mod core;

/// Prefix operators, parentheses, literals and function calls.
pub mod unary;

/// Binary operator parsing.
///
/// Implements the left-associative precedence levels: additive,
/// multiplicative and power (including postfix factorial).
pub mod binary;

/// Helpers shared by the parsing routines, such as argument lists.
pub mod utils;
