use crate::{
    ast::{Function, Node},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_, '_> {
    /// Parses a primary (atomic) expression.
    ///
    /// Primary expressions form the base of the expression grammar:
    /// - numeric literals (already carrying any folded sign)
    /// - parenthesized expressions
    /// - prefix `-`, which becomes a `Negate` call, and prefix `+`, which is
    ///   dropped
    /// - function calls
    ///
    /// Grammar:
    /// ```text
    ///     primary := NUMBER
    ///              | "(" additive ")"
    ///              | ("-" | "+") primary
    ///              | FUNCTION "(" arguments ")"
    /// ```
    ///
    /// # Errors
    /// - `UnexpectedToken` if `current` cannot start an operand.
    /// - `ExpectedToken` for a missing closing parenthesis.
    /// - `NestingTooDeep` past [`MAX_DEPTH`](crate::interpreter::parser::core::MAX_DEPTH)
    ///   levels.
    pub(crate) fn parse_primary(&mut self) -> ParseResult<Node> {
        match self.current.clone() {
            Token::Number(n) => {
                self.advance(true)?;
                Ok(Node::from(n))
            },
            Token::LParen => {
                self.descend()?;
                self.advance(false)?;
                let inner = self.parse_additive()?;
                self.expect(Token::RParen)?;
                self.advance(true)?;
                self.ascend(1);
                Ok(inner)
            },
            Token::Minus => {
                self.descend()?;
                self.advance(false)?;
                let operand = self.parse_primary()?;
                self.ascend(1);
                Ok(Node::call(Function::Negate, vec![operand]))
            },
            Token::Plus => {
                self.descend()?;
                self.advance(false)?;
                let operand = self.parse_primary()?;
                self.ascend(1);
                Ok(operand)
            },
            Token::Function(function) => self.parse_call(function),
            token => Err(ParseError::UnexpectedToken { token,
                                                       position: self.position }),
        }
    }

    /// Parses a function call whose keyword is in `current`.
    ///
    /// The number of arguments is fixed by the function identity, see
    /// [`parse_arguments`](Self::parse_arguments).
    fn parse_call(&mut self, function: Function) -> ParseResult<Node> {
        self.descend()?;
        self.advance(true)?;
        self.expect(Token::LParen)?;
        self.advance(false)?;

        let operands = self.parse_arguments(function.arity())?;

        self.expect(Token::RParen)?;
        self.advance(true)?;
        self.ascend(1);
        Ok(Node::call(function, operands))
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        ast::{Function, Node},
        error::ParseError,
        interpreter::{
            lexer::Token,
            parser::core::{MAX_DEPTH, parse_expression},
            variables::Variables,
        },
    };

    #[test]
    fn unclosed_parenthesis_reports_missing_token() {
        let err = parse_expression("(1+2", &Variables::new()).unwrap_err();

        assert_eq!(err,
                   ParseError::ExpectedToken { wanted:   Token::RParen,
                                               found:    Token::End,
                                               position: 4, });
    }

    #[test]
    fn prefix_minus_becomes_negate() {
        let tree = parse_expression("-(2)", &Variables::new()).unwrap();

        assert_eq!(tree, Node::call(Function::Negate, vec![Node::from(2.0)]));
    }

    #[test]
    fn deep_parentheses_fail_instead_of_overflowing() {
        let source = format!("{}1{}", "(".repeat(10_000), ")".repeat(10_000));
        let err = parse_expression(&source, &Variables::new()).unwrap_err();

        assert_eq!(err, ParseError::NestingTooDeep { position: MAX_DEPTH });
    }

    #[test]
    fn nesting_up_to_the_limit_parses() {
        let source = format!("{}1{}", "(".repeat(MAX_DEPTH), ")".repeat(MAX_DEPTH));

        assert_eq!(parse_expression(&source, &Variables::new()).unwrap(), Node::from(1.0));
    }

    #[test]
    fn deep_signs_and_calls_are_limited() {
        let signs = format!("{}1", "- ".repeat(10_000));
        let calls = format!("{}1{}", "abs(".repeat(10_000), ")".repeat(10_000));

        for source in [signs, calls] {
            assert!(matches!(parse_expression(&source, &Variables::new()),
                             Err(ParseError::NestingTooDeep { .. })));
        }
    }

    #[test]
    fn dangling_operator_is_unexpected() {
        let err = parse_expression("1 *", &Variables::new()).unwrap_err();

        assert!(matches!(err, ParseError::UnexpectedToken { token: Token::End, .. }));
    }
}
