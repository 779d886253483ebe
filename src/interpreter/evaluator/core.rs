use rand::{SeedableRng, rngs::StdRng};

use crate::{
    ast::Node,
    error::{EvalError, RuntimeError},
    interpreter::{
        parser::core::parse_expression,
        value::core::Value,
        variables::{Resolution, Variables, resolve_variables},
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the state of one evaluation session.
///
/// This struct holds the variable table that assignments write to and
/// substitutions read from, and the random number generator used by `rand`.
///
/// ## Usage
///
/// `Context` is created once per session and reused for every line. Each
/// call to [`evaluate`](Self::evaluate) sees the assignments made by earlier
/// calls on the same context. Separate contexts never share state.
pub struct Context {
    /// Variables defined in this session, including `pi` and `e`.
    pub variables: Variables,
    pub(crate) rng: StdRng,
}

#[allow(clippy::new_without_default)]
impl Context {
    /// Creates a new session with only the predefined variables and an
    /// entropy-seeded generator.
    #[must_use]
    pub fn new() -> Self {
        Self { variables: Variables::new(),
               rng:       StdRng::from_entropy(), }
    }

    /// Creates a new session whose `rand` results are reproducible.
    ///
    /// # Example
    /// ```
    /// use vecalc::interpreter::evaluator::core::Context;
    ///
    /// let mut first = Context::with_seed(7);
    /// let mut second = Context::with_seed(7);
    ///
    /// assert_eq!(first.evaluate("rand(1000)").unwrap(),
    ///            second.evaluate("rand(1000)").unwrap());
    /// ```
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self { variables: Variables::new(),
               rng:       StdRng::seed_from_u64(seed), }
    }

    /// Evaluates one line of input.
    ///
    /// The line first has its variables resolved. An assignment updates the
    /// variable table and yields no value. Anything else is parsed and the
    /// resulting tree evaluated.
    ///
    /// # Parameters
    /// - `source`: One expression or assignment.
    ///
    /// # Returns
    /// - `Ok(Some(value))`: The value of an expression.
    /// - `Ok(None)`: The line was an assignment.
    ///
    /// # Errors
    /// A `ParseError` or `RuntimeError` wrapped in `EvalError`. Nothing is
    /// assigned when an error is returned.
    ///
    /// # Example
    /// ```
    /// use vecalc::interpreter::{evaluator::core::Context, value::core::Value};
    ///
    /// let mut context = Context::new();
    ///
    /// assert_eq!(context.evaluate("x = 3").unwrap(), None);
    /// assert_eq!(context.evaluate("x + 1").unwrap(), Some(Value::Scalar(4.0)));
    /// ```
    pub fn evaluate(&mut self, source: &str) -> Result<Option<Value>, EvalError> {
        log::trace!("Evaluating: {source}");

        let text = match resolve_variables(source, &mut self.variables)? {
            Resolution::Assigned(_) => return Ok(None),
            Resolution::Expression(text) => text,
        };

        let tree = parse_expression(&text, &self.variables)?;
        log::trace!("Parsed: {tree:?}");

        Ok(Some(self.eval(&tree)?))
    }

    /// Evaluates an expression tree and returns the resulting value.
    ///
    /// Children are evaluated left to right before their parent. The
    /// evaluator dispatches on the node variant: literals return their value,
    /// operators go to [`eval_binary`](Self::eval_binary) and function nodes
    /// to [`eval_function`](Self::eval_function).
    ///
    /// # Parameters
    /// - `node`: Root of the tree to evaluate.
    ///
    /// # Returns
    /// The value of the tree.
    pub fn eval(&mut self, node: &Node) -> EvalResult<Value> {
        match node {
            Node::Number(value) => Ok(*value),
            Node::Operator { op, left, right } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                Self::eval_binary(*op, &left, &right)
            },
            Node::Function { function, operands } => {
                let args = operands.iter()
                                   .map(|operand| self.eval(operand))
                                   .collect::<EvalResult<Vec<_>>>()?;
                self.eval_function(*function, &args)
            },
        }
    }
}
