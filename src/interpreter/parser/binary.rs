use crate::{
    ast::{Function, Node, Operator},
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
    },
};

/// Maps a token to the binary operator it denotes, if any.
const fn token_to_binary_operator(token: &Token) -> Option<Operator> {
    match token {
        Token::Plus => Some(Operator::Add),
        Token::Minus => Some(Operator::Sub),
        Token::Star => Some(Operator::Mul),
        Token::Slash => Some(Operator::Div),
        Token::Percent => Some(Operator::Mod),
        Token::Caret => Some(Operator::Pow),
        _ => None,
    }
}

impl Parser<'_, '_> {
    /// Parses addition and subtraction expressions.
    ///
    /// Handles left-associative binary operators: `+` and `-`. Every operator
    /// in a chain deepens the tree by one level and counts towards the
    /// nesting limit.
    ///
    /// The rule is: `additive := term (("+" | "-") term)*`
    ///
    /// # Returns
    /// An `Node::Operator` tree, or the single term.
    pub(crate) fn parse_additive(&mut self) -> ParseResult<Node> {
        let mut left = self.parse_term()?;
        let mut chained = 0;
        loop {
            if let Some(op) = token_to_binary_operator(&self.current)
               && matches!(op, Operator::Add | Operator::Sub)
            {
                self.descend()?;
                chained += 1;
                self.advance(false)?;
                let right = self.parse_term()?;
                left = Node::binary(op, left, right);
                continue;
            }
            break;
        }
        self.ascend(chained);
        Ok(left)
    }

    /// Parses multiplication-level expressions.
    ///
    /// Handles left-associative operators: `*`, `/` and `%`.
    ///
    /// The rule is: `term := power (("*" | "/" | "%") power)*`
    pub(crate) fn parse_term(&mut self) -> ParseResult<Node> {
        let mut left = self.parse_power()?;
        let mut chained = 0;
        loop {
            if let Some(op) = token_to_binary_operator(&self.current)
               && matches!(op, Operator::Mul | Operator::Div | Operator::Mod)
            {
                self.descend()?;
                chained += 1;
                self.advance(false)?;
                let right = self.parse_power()?;
                left = Node::binary(op, left, right);
                continue;
            }
            break;
        }
        self.ascend(chained);
        Ok(left)
    }

    /// Parses exponentiation and postfix factorial.
    ///
    /// Both bind tighter than multiplication and are left-associative:
    /// `2 ^ 3 ^ 2` parses as `(2 ^ 3) ^ 2`, and `3! ^ 2` as `(3!) ^ 2`.
    ///
    /// The rule is: `power := primary (("^" primary) | "!")*`
    pub(crate) fn parse_power(&mut self) -> ParseResult<Node> {
        let mut left = self.parse_primary()?;
        let mut chained = 0;
        while matches!(self.current, Token::Caret | Token::Bang) {
            self.descend()?;
            chained += 1;

            if self.current == Token::Bang {
                self.advance(true)?;
                left = Node::call(Function::Factorial, vec![left]);
            } else {
                self.advance(false)?;
                let right = self.parse_primary()?;
                left = Node::binary(Operator::Pow, left, right);
            }
        }
        self.ascend(chained);
        Ok(left)
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        ast::{Function, Node, Operator},
        error::ParseError,
        interpreter::{parser::core::parse_expression, variables::Variables},
    };

    fn parse(source: &str) -> Node {
        parse_expression(source, &Variables::new()).unwrap()
    }

    #[test]
    fn power_is_left_associative() {
        let expected = Node::binary(Operator::Pow,
                                    Node::binary(Operator::Pow, Node::from(2.0), Node::from(3.0)),
                                    Node::from(2.0));
        assert_eq!(parse("2^3^2"), expected);
    }

    #[test]
    fn sign_after_operand_is_subtraction() {
        assert_eq!(parse("1-2"),
                   Node::binary(Operator::Sub, Node::from(1.0), Node::from(2.0)));
        assert_eq!(parse("1 - -2"),
                   Node::binary(Operator::Sub, Node::from(1.0), Node::from(-2.0)));
    }

    #[test]
    fn long_operator_chains_are_limited() {
        let sum = vec!["1"; 10_000].join(" + ");
        let factorials = format!("3{}", "!".repeat(10_000));

        for source in [sum, factorials] {
            assert!(matches!(parse_expression(&source, &Variables::new()),
                             Err(ParseError::NestingTooDeep { .. })));
        }
        assert!(parse_expression(&vec!["1"; 100].join(" * "), &Variables::new()).is_ok());
    }

    #[test]
    fn factorial_binds_before_multiplication() {
        let expected = Node::binary(Operator::Mul,
                                    Node::from(2.0),
                                    Node::call(Function::Factorial, vec![Node::from(3.0)]));
        assert_eq!(parse("2 * 3!"), expected);
    }
}
