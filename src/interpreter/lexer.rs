use std::ops::Range;

use logos::Logos;

use crate::{
    ast::Function,
    error::ParseError,
    interpreter::{parser::core::ParseResult, variables::Variables},
};

/// Characters skipped between tokens: space, tab, line feed, vertical tab,
/// form feed and carriage return.
pub(crate) const fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0b' | '\x0c' | '\r')
}

/// Raw lexemes recognised by the scanner before any classification.
///
/// Identifiers are classified into functions, assignments and variables by
/// [`Lexer::next_token`], which also folds a sign into a following numeral.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(skip r"[ \t\n\x0b\x0c\r]+")]
enum Lexeme {
    /// Runs of digits and dots, such as `3`, `.5` or `1.2.3` (rejected
    /// later).
    #[regex(r"[0-9.]+")]
    Number,
    /// Names of functions and variables.
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Identifier,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token("!")]
    Bang,
    #[token("^")]
    Caret,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token(",")]
    Comma,
    /// Only valid right after an assignment target.
    #[token("=")]
    Equals,
}

/// Represents a classified token of an expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// End of the expression.
    End,
    /// A numeric literal, possibly signed.
    Number(f64),
    /// An identifier followed by `=`; the `=` has been consumed.
    Assign(String),
    /// An identifier naming an entry of the variable table.
    Variable(String),
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `%`
    Percent,
    /// `!`
    Bang,
    /// `^`
    Caret,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `,`
    Comma,
    /// A function keyword such as `sin` or `vec3`.
    Function(Function),
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::End => write!(f, "end of expression"),
            Self::Number(n) => write!(f, "number {n}"),
            Self::Assign(name) => write!(f, "assignment to '{name}'"),
            Self::Variable(name) => write!(f, "variable '{name}'"),
            Self::Plus => write!(f, "'+'"),
            Self::Minus => write!(f, "'-'"),
            Self::Star => write!(f, "'*'"),
            Self::Slash => write!(f, "'/'"),
            Self::Percent => write!(f, "'%'"),
            Self::Bang => write!(f, "'!'"),
            Self::Caret => write!(f, "'^'"),
            Self::LParen => write!(f, "'('"),
            Self::RParen => write!(f, "')'"),
            Self::Comma => write!(f, "','"),
            Self::Function(function) => write!(f, "function '{function}'"),
        }
    }
}

/// Produces tokens from an expression one at a time.
///
/// The lexer never materialises a token list. Each call to
/// [`next_token`](Self::next_token) scans exactly one token starting at the
/// cursor, so the caller decides per token whether a leading sign belongs to
/// a numeral.
pub struct Lexer<'src> {
    source:   &'src str,
    position: usize,
    span:     Range<usize>,
    finished: bool,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer positioned at the start of `source`.
    #[must_use]
    pub const fn new(source: &'src str) -> Self {
        Self::starting_at(source, 0)
    }

    /// Creates a lexer positioned at byte offset `position` of `source`.
    #[must_use]
    pub const fn starting_at(source: &'src str, position: usize) -> Self {
        Self { source,
               position,
               span: position..position,
               finished: false }
    }

    /// Byte offset just past the last token returned.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Byte range of the last token returned. For an assignment this covers
    /// the name only, not the `=`.
    #[must_use]
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// The text not yet consumed.
    #[must_use]
    pub fn remainder(&self) -> &'src str {
        &self.source[self.position..]
    }

    /// Scans the next token.
    ///
    /// # Parameters
    /// - `variables`: Table used to classify identifiers as variables.
    /// - `ignore_sign`: When `false`, a `+` or `-` immediately followed by a
    ///   digit or `.` is read as part of a signed numeral.
    ///
    /// # Returns
    /// The token, or `Token::End` once the input is exhausted.
    ///
    /// # Errors
    /// - `UnexpectedEndOfInput` if called again after `Token::End`.
    /// - `BadNumericLiteral` for a numeral that does not parse.
    /// - `UnexpectedCharacter` for a character outside the alphabet.
    /// - `UnexpectedIdentifier` for an unknown name.
    ///
    /// # Example
    /// ```
    /// use vecalc::interpreter::{
    ///     lexer::{Lexer, Token},
    ///     variables::Variables,
    /// };
    ///
    /// let variables = Variables::new();
    /// let mut lexer = Lexer::new("2 * -pi");
    ///
    /// assert_eq!(lexer.next_token(&variables, false).unwrap(), Token::Number(2.0));
    /// assert_eq!(lexer.next_token(&variables, true).unwrap(), Token::Star);
    /// assert_eq!(lexer.next_token(&variables, false).unwrap(), Token::Minus);
    /// assert_eq!(lexer.next_token(&variables, false).unwrap(),
    ///            Token::Variable("pi".to_string()));
    /// assert_eq!(lexer.next_token(&variables, true).unwrap(), Token::End);
    /// assert!(lexer.next_token(&variables, true).is_err());
    /// ```
    pub fn next_token(&mut self, variables: &Variables, ignore_sign: bool) -> ParseResult<Token> {
        if self.finished {
            return Err(ParseError::UnexpectedEndOfInput { position: self.source.len() });
        }

        let Some((lexeme, span)) = self.scan(self.position) else {
            self.finished = true;
            self.position = self.source.len();
            self.span = self.position..self.position;
            return Ok(Token::End);
        };
        self.position = span.end;
        self.span = span.clone();

        let Ok(lexeme) = lexeme else {
            return Err(self.unexpected_character(span.start));
        };

        match lexeme {
            Lexeme::Plus | Lexeme::Minus if !ignore_sign && self.numeral_follows() => {
                self.signed_number(span.start)
            },
            Lexeme::Number => self.number(span.start),
            Lexeme::Identifier => {
                let source = self.source;
                self.identifier(variables, &source[span])
            },
            Lexeme::Plus => Ok(Token::Plus),
            Lexeme::Minus => Ok(Token::Minus),
            Lexeme::Star => Ok(Token::Star),
            Lexeme::Slash => Ok(Token::Slash),
            Lexeme::Percent => Ok(Token::Percent),
            Lexeme::Bang => Ok(Token::Bang),
            Lexeme::Caret => Ok(Token::Caret),
            Lexeme::LParen => Ok(Token::LParen),
            Lexeme::RParen => Ok(Token::RParen),
            Lexeme::Comma => Ok(Token::Comma),
            Lexeme::Equals => Err(self.unexpected_character(span.start)),
        }
    }

    /// Scans one raw lexeme at `from`, returning its absolute span.
    fn scan(&self, from: usize) -> Option<(Result<Lexeme, ()>, Range<usize>)> {
        let mut raw = Lexeme::lexer(&self.source[from..]);
        let lexeme = raw.next()?;
        let span = raw.span();
        Some((lexeme, from + span.start..from + span.end))
    }

    fn numeral_follows(&self) -> bool {
        self.remainder()
            .starts_with(|c: char| c.is_ascii_digit() || c == '.')
    }

    fn signed_number(&mut self, start: usize) -> ParseResult<Token> {
        if let Some((Ok(Lexeme::Number), span)) = self.scan(self.position) {
            self.position = span.end;
            self.span = start..span.end;
        }
        self.number(start)
    }

    fn number(&self, start: usize) -> ParseResult<Token> {
        let literal = &self.source[start..self.position];
        literal.parse::<f64>()
               .map(Token::Number)
               .map_err(|_| ParseError::BadNumericLiteral { literal:  literal.to_string(),
                                                            position: start, })
    }

    fn identifier(&mut self, variables: &Variables, name: &str) -> ParseResult<Token> {
        if let Some(function) = Function::from_keyword(name) {
            return Ok(Token::Function(function));
        }

        let rest = self.remainder();
        let trimmed = rest.trim_start_matches(is_blank);
        if trimmed.starts_with('=') {
            self.position += rest.len() - trimmed.len() + 1;
            return Ok(Token::Assign(name.to_string()));
        }

        if variables.contains(name) {
            return Ok(Token::Variable(name.to_string()));
        }

        Err(ParseError::UnexpectedIdentifier { name:     name.to_string(),
                                               position: self.span.start, })
    }

    fn unexpected_character(&mut self, position: usize) -> ParseError {
        let character = self.source[position..].chars().next().unwrap_or('\0');
        self.position = position + character.len_utf8();
        ParseError::UnexpectedCharacter { character, position }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(source: &str) -> Vec<Token> {
        let variables = Variables::new();
        let mut lexer = Lexer::new(source);
        let mut result = Vec::new();
        loop {
            let token = lexer.next_token(&variables, false).unwrap();
            if token == Token::End {
                return result;
            }
            result.push(token);
        }
    }

    #[test]
    fn signed_numerals_fold_the_sign() {
        assert_eq!(tokens("-2 +.5"), vec![Token::Number(-2.0), Token::Number(0.5)]);
    }

    #[test]
    fn sign_before_a_name_stays_an_operator() {
        assert_eq!(tokens("-e"),
                   vec![Token::Minus, Token::Variable("e".to_string())]);
    }

    #[test]
    fn assignment_consumes_the_equals_sign() {
        let variables = Variables::new();
        let mut lexer = Lexer::new("x = 1");

        assert_eq!(lexer.next_token(&variables, true).unwrap(),
                   Token::Assign("x".to_string()));
        assert_eq!(lexer.span(), 0..1);
        assert_eq!(lexer.remainder(), " 1");
    }

    #[test]
    fn keywords_are_case_sensitive() {
        let variables = Variables::new();
        let err = Lexer::new("Sin(1)").next_token(&variables, false)
                                      .unwrap_err();

        assert_eq!(err,
                   ParseError::UnexpectedIdentifier { name:     "Sin".to_string(),
                                                      position: 0, });
    }

    #[test]
    fn malformed_numeral_is_rejected() {
        let variables = Variables::new();
        let err = Lexer::new("1.2.3").next_token(&variables, false)
                                     .unwrap_err();

        assert!(matches!(err, ParseError::BadNumericLiteral { ref literal, position: 0 } if literal == "1.2.3"));
    }

    #[test]
    fn every_blank_separates_tokens() {
        assert_eq!(tokens("1\x0b+\x0c2\r\n"),
                   vec![Token::Number(1.0), Token::Plus, Token::Number(2.0)]);
    }

    #[test]
    fn non_ascii_space_is_not_blank() {
        let variables = Variables::new();
        let err = Lexer::new("x\u{a0}= 1").next_token(&variables, true)
                                          .unwrap_err();

        assert!(matches!(err, ParseError::UnexpectedIdentifier { ref name, .. } if name == "x"));
    }

    #[test]
    fn control_characters_are_reported_by_code() {
        let variables = Variables::new();
        let mut lexer = Lexer::new("1 \u{1} 2");
        lexer.next_token(&variables, false).unwrap();

        let err = lexer.next_token(&variables, true).unwrap_err();
        assert_eq!(err,
                   ParseError::UnexpectedCharacter { character: '\u{1}',
                                                     position:  2, });
        assert_eq!(err.to_string(),
                   "Error at column 3: Unexpected character (decimal 1).");
    }

    #[test]
    fn stray_equals_is_an_unexpected_character() {
        let variables = Variables::new();
        let mut lexer = Lexer::new("1 = 2");
        lexer.next_token(&variables, false).unwrap();

        assert_eq!(lexer.next_token(&variables, true).unwrap_err(),
                   ParseError::UnexpectedCharacter { character: '=',
                                                     position:  2, });
    }
}
