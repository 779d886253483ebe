use std::collections::HashMap;

use crate::{
    error::ParseError,
    interpreter::{
        lexer::{Lexer, Token, is_blank},
        parser::core::ParseResult,
    },
};

/// Session-scoped mapping from variable name to its raw replacement text.
///
/// Values are stored as text, not as evaluated numbers: a reference to a
/// variable is substituted textually into the expression before parsing.
/// The table starts out holding `pi` and `e`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variables {
    table: HashMap<String, String>,
}

impl Default for Variables {
    fn default() -> Self {
        Self::new()
    }
}

impl Variables {
    /// Creates a table holding only the predefined constants.
    ///
    /// # Example
    /// ```
    /// use vecalc::interpreter::variables::Variables;
    ///
    /// let variables = Variables::new();
    /// assert_eq!(variables.get("pi"), Some("3.141592653589793"));
    /// assert!(!variables.contains("x"));
    /// ```
    #[must_use]
    pub fn new() -> Self {
        let mut table = HashMap::new();
        table.insert("pi".to_string(), std::f64::consts::PI.to_string());
        table.insert("e".to_string(), std::f64::consts::E.to_string());
        Self { table }
    }

    /// Returns the raw text stored for `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.table.get(name).map(String::as_str)
    }

    /// Tests whether `name` is defined.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.table.contains_key(name)
    }

    /// Defines or replaces a variable.
    pub fn assign(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.table.insert(name.into(), value.into());
    }

    /// Iterates over all variables in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.table
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }
}

/// Outcome of the variable resolution pass over one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The line assigned a variable and has no value of its own.
    Assigned(String),
    /// The line is an expression; every variable reference has been replaced
    /// by its text.
    Expression(String),
}

/// Scans one token of `text` starting at `cursor`, with signs kept separate.
///
/// Returns the token, its span and the offset just past it.
fn token_at(text: &str,
            cursor: usize,
            variables: &Variables)
            -> ParseResult<(Token, std::ops::Range<usize>, usize)> {
    let mut lexer = Lexer::starting_at(text, cursor);
    let token = lexer.next_token(variables, true)?;
    Ok((token, lexer.span(), lexer.position()))
}

/// Substitutes variables into `source` or records an assignment.
///
/// The line is scanned token by token. The first assignment target found ends
/// the scan: the rest of the line becomes the variable's new text, after any
/// reference to the variable itself has been replaced by its current text.
/// Otherwise each variable reference is replaced in place by its text and
/// scanning continues at the start of the replacement, so variables defined
/// in terms of other variables resolve fully.
///
/// # Parameters
/// - `source`: The line as typed.
/// - `variables`: The session's table; modified only by a successful
///   assignment.
///
/// # Returns
/// - `Resolution::Assigned(name)` for an assignment line.
/// - `Resolution::Expression(text)` with the substituted expression
///   otherwise.
///
/// # Errors
/// - Any lexing error found while scanning.
/// - `EmptyAssignment` if nothing follows the `=`.
/// - `UnexpectedCharacter` for a second `=` in an assignment.
/// - `CyclicSubstitution` if a variable's text leads back to the variable.
///
/// # Example
/// ```
/// use vecalc::interpreter::variables::{Resolution, Variables, resolve_variables};
///
/// let mut variables = Variables::new();
///
/// let assigned = resolve_variables("r = 2", &mut variables).unwrap();
/// assert_eq!(assigned, Resolution::Assigned("r".to_string()));
///
/// let resolved = resolve_variables("r * r", &mut variables).unwrap();
/// assert_eq!(resolved, Resolution::Expression("2 * 2".to_string()));
/// ```
pub fn resolve_variables(source: &str, variables: &mut Variables) -> ParseResult<Resolution> {
    let mut text = source.to_string();
    // Names whose replacement text is being scanned, with the offset where
    // that text ends. Innermost last.
    let mut expanding: Vec<(String, usize)> = Vec::new();
    let mut cursor = 0;

    loop {
        let (token, span, next) = token_at(&text, cursor, variables)?;

        match token {
            Token::End => break,
            Token::Assign(name) => return assign(text, name, next, variables),
            Token::Variable(name) => {
                while expanding.last().is_some_and(|(_, end)| *end <= span.start) {
                    expanding.pop();
                }
                if expanding.iter().any(|(active, _)| *active == name) {
                    log::debug!("Cyclic substitution of {name} in: {text}");
                    return Err(ParseError::CyclicSubstitution { name,
                                                                position: span.start });
                }

                let value = variables.get(&name).unwrap_or_default().to_string();
                log::debug!("REPLACING: {name}, {value}");

                let removed = span.len();
                for (_, end) in &mut expanding {
                    *end = *end + value.len() - removed;
                }
                text.replace_range(span.clone(), &value);
                expanding.push((name, span.start + value.len()));
                cursor = span.start;
            },
            _ => cursor = next,
        }
    }

    log::debug!("Expression: {text}");
    Ok(Resolution::Expression(text))
}

/// Stores the text after the `=` at `start` as the new value of `name`.
fn assign(mut text: String,
          name: String,
          start: usize,
          variables: &mut Variables)
          -> ParseResult<Resolution> {
    let leading = text[start..].len() - text[start..].trim_start_matches(is_blank).len();
    let start = start + leading;
    text.truncate(text.trim_end_matches(is_blank).len());

    if start >= text.len() {
        return Err(ParseError::EmptyAssignment { name,
                                                 position: start });
    }

    // Replace the variable's own name by its current text, so `x = x + 1`
    // builds on the previous value instead of referring to itself.
    let mut cursor = start;
    loop {
        let (token, span, next) = token_at(&text, cursor, variables)?;
        match token {
            Token::End => break,
            // A stored `=` would turn every later read into an assignment.
            Token::Assign(_) => {
                return Err(ParseError::UnexpectedCharacter { character: '=',
                                                             position:  next - 1, });
            },
            Token::Variable(ref found) if *found == name => {
                let value = variables.get(&name).unwrap_or_default().to_string();
                log::debug!("Self reference in assignment to {name}: {value}");
                text.replace_range(span.clone(), &value);
                cursor = span.start + value.len();
            },
            _ => cursor = next,
        }
    }

    let value = &text[start..];
    log::debug!("VARIABLE_ASSIGNED({name}: {value})");
    variables.assign(name.clone(), value);
    Ok(Resolution::Assigned(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test_log::test]
    fn nested_variables_resolve_fully() {
        let mut variables = Variables::new();
        variables.assign("a", "b + 1");
        variables.assign("b", "2");

        assert_eq!(resolve_variables("a * a", &mut variables).unwrap(),
                   Resolution::Expression("2 + 1 * 2 + 1".to_string()));
    }

    #[test_log::test]
    fn self_reference_uses_the_previous_value() {
        let mut variables = Variables::new();
        resolve_variables("x = 3", &mut variables).unwrap();
        resolve_variables("x = x + 1", &mut variables).unwrap();

        assert_eq!(variables.get("x"), Some("3 + 1"));
    }

    #[test_log::test]
    fn transitive_cycle_is_reported() {
        let mut variables = Variables::new();
        variables.assign("x", "y");
        variables.assign("y", "x + 1");

        let err = resolve_variables("x", &mut variables).unwrap_err();
        assert!(matches!(err, ParseError::CyclicSubstitution { ref name, .. } if name == "x"));
    }

    #[test_log::test]
    fn repeated_use_is_not_a_cycle() {
        let mut variables = Variables::new();
        variables.assign("x", "y + y");
        variables.assign("y", "1");

        assert_eq!(resolve_variables("x - x", &mut variables).unwrap(),
                   Resolution::Expression("1 + 1 - 1 + 1".to_string()));
    }

    #[test]
    fn empty_assignment_is_rejected() {
        let mut variables = Variables::new();
        let err = resolve_variables("x =   ", &mut variables).unwrap_err();

        assert!(matches!(err, ParseError::EmptyAssignment { ref name, .. } if name == "x"));
        assert!(!variables.contains("x"));
    }

    #[test]
    fn assigned_text_cannot_hold_another_assignment() {
        let mut variables = Variables::new();
        variables.assign("x", "1");

        let err = resolve_variables("a = 1 + x = 5", &mut variables).unwrap_err();

        assert_eq!(err,
                   ParseError::UnexpectedCharacter { character: '=',
                                                     position:  10, });
        assert!(!variables.contains("a"));
        assert_eq!(variables.get("x"), Some("1"));
    }

    #[test]
    fn vertical_tab_is_trimmed_like_a_space() {
        let mut variables = Variables::new();
        resolve_variables("x\x0b=\x0b2\x0b", &mut variables).unwrap();

        assert_eq!(variables.get("x"), Some("2"));
    }

    #[test]
    fn assignment_to_unknown_names_fails() {
        let mut variables = Variables::new();
        let err = resolve_variables("x = y", &mut variables).unwrap_err();

        assert!(matches!(err, ParseError::UnexpectedIdentifier { ref name, position: 4 } if name == "y"));
        assert!(!variables.contains("x"));
    }
}
