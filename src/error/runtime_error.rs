use crate::ast::Operator;

#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur while evaluating an expression tree.
pub enum RuntimeError {
    /// Division or modulo by a zero scalar, or a degenerate operation that
    /// would divide by zero (normalizing a zero vector, a flat projection).
    DivisionByZero,
    /// Modulo applied to a non-integral operand.
    NonIntegerModulo {
        /// Left operand.
        left:  f64,
        /// Right operand.
        right: f64,
    },
    /// Factorial applied to something other than a non-negative integral
    /// scalar.
    FactorialDomainError {
        /// Description of the rejected operand.
        details: String,
    },
    /// Operand sizes that do not fit together.
    DimensionMismatch {
        /// Details about the mismatch.
        details: String,
    },
    /// An operand of the wrong kind (scalar, vector or matrix).
    TypeMismatch {
        /// Details about the mismatch.
        details: String,
    },
    /// An operator that is not defined for the given operand kinds.
    UnsupportedOperator {
        /// The operator.
        op:    Operator,
        /// Kind of the left operand, such as `vec3`.
        left:  String,
        /// Kind of the right operand.
        right: String,
    },
    /// A function identity with no implementation.
    UnknownFunction {
        /// The name of the function.
        name: String,
    },
    /// The wrong number of arguments reached a builtin.
    ArgumentCountMismatch {
        /// Number of arguments the builtin takes.
        expected: usize,
        /// Number of arguments it received.
        found:    usize,
    },
    /// An argument was outside the range a function accepts.
    InvalidArgument {
        /// Details about why the argument is invalid.
        details: String,
    },
    /// A matrix that has no inverse.
    SingularMatrix,
    /// A result too large to be represented.
    Overflow,
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero => write!(f, "Error: Division by zero."),
            Self::NonIntegerModulo { left, right } => write!(f,
                                                             "Error: Modulo needs integral operands, found {left} % {right}."),

            Self::FactorialDomainError { details } => write!(f,
                                                             "Error: Factorial is only defined for non-negative integers: {details}."),

            Self::DimensionMismatch { details } => {
                write!(f, "Error: Dimension mismatch: {details}.")
            },
            Self::TypeMismatch { details } => write!(f, "Error: Type mismatch: {details}."),
            Self::UnsupportedOperator { op, left, right } => {
                write!(f, "Error: Operator '{op}' is not defined for {left} and {right}.")
            },
            Self::UnknownFunction { name } => write!(f, "Error: Unknown function '{name}'."),
            Self::ArgumentCountMismatch { expected, found } => write!(f,
                                                                      "Error: Expected {expected} arguments, found {found}."),
            Self::InvalidArgument { details } => {
                write!(f, "Error: Invalid argument: {details}.")
            },
            Self::SingularMatrix => write!(f, "Error: Matrix is singular and has no inverse."),
            Self::Overflow => write!(f, "Error: Result is too large to be represented."),
        }
    }
}

impl std::error::Error for RuntimeError {}
