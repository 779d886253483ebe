/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the tree produced by the parser, dispatches operators
/// on the shapes of their operands and calls builtin functions. It also owns
/// the session [`Context`](evaluator::core::Context) that ties the whole
/// pipeline together.
///
/// # Responsibilities
/// - Evaluates AST nodes for scalars, vectors and matrices.
/// - Runs the builtin function table.
/// - Reports runtime errors such as division by zero or mismatched shapes.
pub mod evaluator;
/// The lexer module tokenizes expression text on demand.
///
/// Tokens are produced one at a time. Whether a sign belongs to a number and
/// whether an identifier is an assignment target depends on where the parser
/// is, so the parser asks for each token instead of reading a prepared list.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// A recursive descent parser over three precedence levels: additive,
/// multiplicative and power/factorial. All binary operators are
/// left-associative.
pub mod parser;
/// Runtime values: scalars, vectors and matrices.
///
/// # Responsibilities
/// - Defines the `Value` enum and the fixed-size `Vector` and `Matrix` types.
/// - Implements the linear algebra the builtins need.
/// - Formats values for display with a configurable precision.
pub mod value;
/// The session variable table and the textual substitution pass.
pub mod variables;
