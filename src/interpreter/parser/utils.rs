use crate::{
    ast::{Arity, Node},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_, '_> {
    /// Parses the comma-separated arguments of a call, up to but excluding
    /// the closing parenthesis.
    ///
    /// Exactly as many arguments are read as `arity` allows: once the
    /// largest permitted count is reached the list ends, so a surplus
    /// argument surfaces as a missing `)`. A call that stops short of a
    /// permitted count fails on the missing `,`.
    ///
    /// Grammar (simplified): `arguments := (additive ("," additive)*)?`
    ///
    /// # Parameters
    /// - `arity`: Argument counts the function accepts.
    ///
    /// # Returns
    /// The argument expressions in call order.
    ///
    /// # Errors
    /// `ExpectedToken` with `wanted: Token::Comma` when too few arguments
    /// were given, or any error from parsing an argument.
    pub(super) fn parse_arguments(&mut self, arity: Arity) -> ParseResult<Vec<Node>> {
        let mut operands = Vec::with_capacity(arity.max());
        loop {
            let count = operands.len();
            let more_allowed = count < arity.max();

            if count == 0 && more_allowed && !(arity.check(0) && self.current == Token::RParen) {
                operands.push(self.parse_additive()?);
                continue;
            }
            if count > 0 && more_allowed && self.current == Token::Comma {
                self.advance(false)?;
                operands.push(self.parse_additive()?);
                continue;
            }
            if arity.check(count) {
                return Ok(operands);
            }

            return Err(ParseError::ExpectedToken { wanted:   Token::Comma,
                                                   found:    self.current.clone(),
                                                   position: self.position, });
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        ast::{Function, Node},
        error::ParseError,
        interpreter::{lexer::Token, parser::core::parse_expression, variables::Variables},
    };

    #[test]
    fn empty_matrix_constructor_has_no_operands() {
        let tree = parse_expression("mat3()", &Variables::new()).unwrap();

        assert_eq!(tree, Node::call(Function::Mat3, Vec::new()));
    }

    #[test]
    fn too_few_arguments_want_a_comma() {
        let err = parse_expression("vec3(1, 2)", &Variables::new()).unwrap_err();

        assert!(matches!(err,
                         ParseError::ExpectedToken { wanted: Token::Comma,
                                                     found: Token::RParen,
                                                     .. }));
    }

    #[test]
    fn too_many_arguments_want_a_parenthesis() {
        let err = parse_expression("sin(1, 2)", &Variables::new()).unwrap_err();

        assert!(matches!(err,
                         ParseError::ExpectedToken { wanted: Token::RParen,
                                                     found: Token::Comma,
                                                     .. }));
    }
}
