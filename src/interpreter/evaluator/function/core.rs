use crate::{
    ast::Function,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            function::{builtin, constructor, geometry, transform},
            unary,
        },
        value::core::Value,
    },
};

/// Type alias for builtin function handlers.
///
/// A builtin receives the session context and a slice of evaluated argument
/// values, and returns the computed value.
type BuiltinFn = fn(&mut Context, &[Value]) -> EvalResult<Value>;

/// Defines builtin functions by generating a lookup table.
///
/// Each entry pairs a function identity with the handler implementing it.
/// The macro produces `BuiltinDef` (internal metadata) and `BUILTIN_TABLE`
/// (static table for lookup).
macro_rules! builtin_functions {
    (
        $(
            $function:ident => $func:expr
        ),* $(,)?
    ) => {
        struct BuiltinDef {
            function: Function,
            func:     BuiltinFn,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { function: Function::$function, func: $func },
            )*
        ];
    };
}

builtin_functions! {
    Rad          => |_, args| builtin::rad(args),
    Deg          => |_, args| builtin::deg(args),
    Sin          => |_, args| builtin::sin(args),
    Cos          => |_, args| builtin::cos(args),
    Tan          => |_, args| builtin::tan(args),
    Asin         => |_, args| builtin::asin(args),
    Acos         => |_, args| builtin::acos(args),
    Atan         => |_, args| builtin::atan(args),
    Sinh         => |_, args| builtin::sinh(args),
    Cosh         => |_, args| builtin::cosh(args),
    Tanh         => |_, args| builtin::tanh(args),
    Abs          => |_, args| builtin::abs(args),
    Ln           => |_, args| builtin::ln(args),
    Log          => |_, args| builtin::log(args),
    Exp          => |_, args| builtin::exp(args),
    Sqrt         => |_, args| builtin::sqrt(args),
    Vec2         => |_, args| constructor::vector(Function::Vec2, args),
    Vec3         => |_, args| constructor::vector(Function::Vec3, args),
    Vec4         => |_, args| constructor::vector(Function::Vec4, args),
    Length       => |_, args| geometry::length(args),
    Normalize    => |_, args| geometry::normalize(args),
    Dot          => |_, args| geometry::dot(args),
    Cross        => |_, args| geometry::cross(args),
    Mix          => |_, args| geometry::mix(args),
    Mat2         => |_, args| constructor::matrix(Function::Mat2, args),
    Mat3         => |_, args| constructor::matrix(Function::Mat3, args),
    Mat4         => |_, args| constructor::matrix(Function::Mat4, args),
    Scale        => |_, args| transform::scale(args),
    Rotate       => |_, args| transform::rotate(args),
    Translate    => |_, args| transform::translate(args),
    InvTranspose => |_, args| transform::inv_transpose(args),
    Perspective  => |_, args| transform::perspective(args),
    Ortho        => |_, args| transform::ortho(args),
    Rand         => |context, args| context.eval_rand(args),
    Negate       => |_, args| unary::negate(args),
    Factorial    => |_, args| unary::factorial(args),
}

impl Context {
    /// Evaluates a function call.
    ///
    /// The evaluator looks the identity up in the builtin table, verifies the
    /// argument count against the identity's arity and executes the builtin.
    ///
    /// # Parameters
    /// - `function`: Which function to call.
    /// - `args`: Evaluated argument values.
    ///
    /// # Returns
    /// The function result or an error if lookup or arity fails.
    ///
    /// # Example
    /// ```
    /// use vecalc::{
    ///     ast::Function,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let mut context = Context::new();
    ///
    /// let root = context.eval_function(Function::Sqrt, &[Value::Scalar(16.0)]);
    /// assert_eq!(root.unwrap(), Value::Scalar(4.0));
    ///
    /// assert!(context.eval_function(Function::Dot, &[Value::Scalar(1.0)]).is_err());
    /// ```
    pub fn eval_function(&mut self, function: Function, args: &[Value]) -> EvalResult<Value> {
        let builtin = BUILTIN_TABLE.iter()
                                   .find(|b| b.function == function)
                                   .ok_or_else(|| RuntimeError::UnknownFunction { name:
                                                                                      function.name()
                                                                                              .to_string() })?;

        let arity = function.arity();
        if !arity.check(args.len()) {
            return Err(RuntimeError::ArgumentCountMismatch { expected: arity.max(),
                                                             found:    args.len(), });
        }

        log::trace!("Calling {function} with {} arguments", args.len());
        (builtin.func)(self, args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::KEYWORDS;

    #[test]
    fn every_function_has_a_builtin() {
        let unary = [Function::Negate, Function::Factorial];
        for function in KEYWORDS.iter().map(|(_, f)| *f).chain(unary) {
            assert!(BUILTIN_TABLE.iter().any(|b| b.function == function),
                    "{function} has no implementation");
        }
    }
}
