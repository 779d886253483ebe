use crate::interpreter::lexer::Token;

#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur during variable resolution, lexing or
/// parsing.
///
/// Every variant carries the byte offset into the (resolved) expression text
/// where the problem was detected.
pub enum ParseError {
    /// A token was requested after the end of input had already been
    /// reported.
    UnexpectedEndOfInput {
        /// Byte offset of the end of input.
        position: usize,
    },
    /// A run of digits and dots that is not a valid number, such as `1.2.3`.
    BadNumericLiteral {
        /// The offending literal, including any sign.
        literal:  String,
        /// Byte offset of the literal.
        position: usize,
    },
    /// A character outside the accepted alphabet.
    UnexpectedCharacter {
        /// The character encountered.
        character: char,
        /// Byte offset of the character.
        position:  usize,
    },
    /// An identifier that is neither a function, nor a defined variable, nor
    /// the target of an assignment.
    UnexpectedIdentifier {
        /// The identifier.
        name:     String,
        /// Byte offset of the identifier.
        position: usize,
    },
    /// The grammar required a specific token and found another one.
    ExpectedToken {
        /// The token the parser needed.
        wanted:   Token,
        /// The token that was actually found.
        found:    Token,
        /// Byte offset of the token that was found.
        position: usize,
    },
    /// A token that cannot start an operand.
    UnexpectedToken {
        /// The token encountered.
        token:    Token,
        /// Byte offset of the token.
        position: usize,
    },
    /// Text left over after a complete expression.
    UnexpectedTrailingInput {
        /// The unparsed remainder of the expression.
        text:     String,
        /// Byte offset where the remainder starts.
        position: usize,
    },
    /// An assignment with nothing on the right-hand side of `=`.
    EmptyAssignment {
        /// The variable being assigned.
        name:     String,
        /// Byte offset just after the `=`.
        position: usize,
    },
    /// Parentheses, signs, calls or operator chains nested deeper than the
    /// parser allows.
    NestingTooDeep {
        /// Byte offset of the token that exceeded the limit.
        position: usize,
    },
    /// A variable whose substitution leads back to itself through other
    /// variables, such as `x = y` and `y = x`.
    CyclicSubstitution {
        /// The variable that was reached again.
        name:     String,
        /// Byte offset of the repeated reference.
        position: usize,
    },
}

impl ParseError {
    /// Returns the byte offset at which the error was detected.
    ///
    /// ## Example
    /// ```
    /// use vecalc::error::ParseError;
    ///
    /// let error = ParseError::UnexpectedCharacter { character: '$',
    ///                                               position:  2, };
    ///
    /// assert_eq!(error.position(), 2);
    /// ```
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::UnexpectedEndOfInput { position }
            | Self::BadNumericLiteral { position, .. }
            | Self::UnexpectedCharacter { position, .. }
            | Self::UnexpectedIdentifier { position, .. }
            | Self::ExpectedToken { position, .. }
            | Self::UnexpectedToken { position, .. }
            | Self::UnexpectedTrailingInput { position, .. }
            | Self::EmptyAssignment { position, .. }
            | Self::NestingTooDeep { position }
            | Self::CyclicSubstitution { position, .. } => *position,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let column = self.position() + 1;
        match self {
            Self::UnexpectedEndOfInput { .. } => {
                write!(f, "Error at column {column}: Unexpected end of expression.")
            },

            Self::BadNumericLiteral { literal, .. } => {
                write!(f, "Error at column {column}: Bad numeric literal: {literal}.")
            },

            Self::UnexpectedCharacter { character, .. } if u32::from(*character) < 0x20 => write!(f,
                                                                                                  "Error at column {column}: Unexpected character (decimal {}).",
                                                                                                  u32::from(*character)),

            Self::UnexpectedCharacter { character, .. } => {
                write!(f, "Error at column {column}: Unexpected character: {character}")
            },

            Self::UnexpectedIdentifier { name, .. } => write!(f,
                                                              "Error at column {column}: Unexpected alphanumeric characters: {name}"),

            Self::ExpectedToken { wanted, found, .. } => {
                write!(f, "Error at column {column}: {wanted} expected, found {found}.")
            },

            Self::UnexpectedToken { token, .. } => {
                write!(f, "Error at column {column}: Unexpected token: {token}.")
            },

            Self::UnexpectedTrailingInput { text, .. } => write!(f,
                                                                 "Error at column {column}: Unexpected text at the end of expression: {text}"),

            Self::EmptyAssignment { name, .. } => write!(f,
                                                         "Error at column {column}: Nothing assigned to variable '{name}'."),

            Self::NestingTooDeep { .. } => {
                write!(f, "Error at column {column}: Expression is nested too deeply.")
            },

            Self::CyclicSubstitution { name, .. } => write!(f,
                                                            "Error at column {column}: Variable '{name}' refers back to itself."),
        }
    }
}

impl std::error::Error for ParseError {}
