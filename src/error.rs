/// Parsing errors.
///
/// Defines all error types that can occur while resolving variables, lexing
/// and parsing an expression. Parse errors include malformed numerals,
/// unknown identifiers, missing punctuation and cyclic variable definitions.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while evaluating a parsed
/// expression: arithmetic domain violations and shape mismatches between
/// scalars, vectors and matrices.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any failure produced while evaluating one expression.
///
/// Evaluation is all-or-nothing: when an `EvalError` is returned no partial
/// value exists and the variable table is left as it was.
#[derive(Debug, Clone, PartialEq)]
pub enum EvalError {
    /// The expression could not be resolved or parsed.
    Parse(ParseError),
    /// The expression parsed but could not be evaluated.
    Runtime(RuntimeError),
}

impl From<ParseError> for EvalError {
    fn from(error: ParseError) -> Self {
        Self::Parse(error)
    }
}

impl From<RuntimeError> for EvalError {
    fn from(error: RuntimeError) -> Self {
        Self::Runtime(error)
    }
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for EvalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
