use crate::{
    ast::Node,
    error::ParseError,
    interpreter::{
        lexer::{Lexer, Token},
        variables::Variables,
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Deepest nesting the parser accepts. Each parenthesis, prefix sign,
/// function call and chained binary operator counts as one level.
pub const MAX_DEPTH: usize = 256;

/// Recursive descent parser over a single expression.
///
/// The parser holds exactly one token of lookahead in `current`. Every
/// parsing routine is entered with `current` set to the first token of its
/// construct and returns with `current` set to the token after it.
///
/// Whether a `+` or `-` in front of a digit is folded into the numeral
/// depends on the position: operands are fetched with signs folded, tokens
/// following an operand keep them separate so `1-2` reads as a subtraction.
pub struct Parser<'src, 'v> {
    pub(super) lexer:     Lexer<'src>,
    pub(super) variables: &'v Variables,
    pub(super) current:   Token,
    /// Byte offset where `current` starts.
    pub(super) position:  usize,
    depth:                usize,
}

impl<'src, 'v> Parser<'src, 'v> {
    /// Creates a parser and reads the first operand token.
    pub fn new(source: &'src str, variables: &'v Variables) -> ParseResult<Self> {
        let mut parser = Self { lexer: Lexer::new(source),
                                variables,
                                current: Token::End,
                                position: 0,
                                depth: 0 };
        parser.advance(false)?;
        Ok(parser)
    }

    /// Replaces `current` with the next token.
    ///
    /// # Parameters
    /// - `ignore_sign`: `true` after an operand, where a sign is a binary
    ///   operator; `false` where an operand is expected.
    pub(super) fn advance(&mut self, ignore_sign: bool) -> ParseResult<()> {
        self.current = self.lexer.next_token(self.variables, ignore_sign)?;
        self.position = self.lexer.span().start;
        Ok(())
    }

    /// Enters one more level of nesting.
    ///
    /// # Errors
    /// `NestingTooDeep` once more than [`MAX_DEPTH`] levels are open.
    pub(super) fn descend(&mut self) -> ParseResult<()> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            return Err(ParseError::NestingTooDeep { position: self.position });
        }
        Ok(())
    }

    /// Closes `levels` levels opened with [`descend`](Self::descend).
    pub(super) const fn ascend(&mut self, levels: usize) {
        self.depth -= levels;
    }

    /// Fails unless `current` is `wanted`. Does not consume it.
    pub(super) fn expect(&self, wanted: Token) -> ParseResult<()> {
        if self.current == wanted {
            Ok(())
        } else {
            Err(ParseError::ExpectedToken { wanted,
                                            found: self.current.clone(),
                                            position: self.position })
        }
    }
}

/// Parses a complete expression.
///
/// This is the entry point for expression parsing. The source must already
/// have had its variables resolved; the table is only consulted to classify
/// identifiers.
///
/// Grammar: `expression := additive END`
///
/// # Parameters
/// - `source`: Expression text.
/// - `variables`: The session's variable table.
///
/// # Returns
/// The root node of the parsed tree.
///
/// # Errors
/// Any lexing or grammar error, or `UnexpectedTrailingInput` if text remains
/// after a complete expression.
///
/// # Example
/// ```
/// use vecalc::{
///     ast::{Node, Operator},
///     interpreter::{parser::core::parse_expression, variables::Variables},
/// };
///
/// let tree = parse_expression("1 + 2 * 3", &Variables::new()).unwrap();
/// let expected = Node::binary(Operator::Add,
///                             Node::from(1.0),
///                             Node::binary(Operator::Mul, Node::from(2.0), Node::from(3.0)));
///
/// assert_eq!(tree, expected);
/// assert!(parse_expression("1 + 2 )", &Variables::new()).is_err());
/// ```
pub fn parse_expression(source: &str, variables: &Variables) -> ParseResult<Node> {
    let mut parser = Parser::new(source, variables)?;
    let node = parser.parse_additive()?;

    if parser.current != Token::End {
        return Err(ParseError::UnexpectedTrailingInput { text:     source[parser.position..].to_string(),
                                                         position: parser.position, });
    }

    Ok(node)
}
