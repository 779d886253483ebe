use rand::Rng;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            utils::{check_arity, scalar_arg},
        },
        value::core::Value,
    },
    util::num::f64_to_u32_checked,
};

/// Largest bound `rand` accepts.
const MAX_RAND_BOUND: u32 = 32768;

impl Context {
    /// `rand(n)`: a uniformly distributed whole number in `[0, n)`.
    ///
    /// The number is drawn from the session's generator, so contexts created
    /// with the same seed produce the same sequence.
    ///
    /// # Errors
    /// `InvalidArgument` unless `n` is a whole number in `1..=32768`.
    pub(crate) fn eval_rand(&mut self, args: &[Value]) -> EvalResult<Value> {
        check_arity(args, 1)?;

        let bound = scalar_arg(args, 0, "rand")?;
        let invalid = || RuntimeError::InvalidArgument { details: format!("rand expects a whole number between 1 and {MAX_RAND_BOUND}, found {bound}") };

        let n = f64_to_u32_checked(bound, invalid())?;
        if !(1..=MAX_RAND_BOUND).contains(&n) {
            return Err(invalid());
        }

        Ok(Value::Scalar(f64::from(self.rng.gen_range(0..n))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn results_stay_below_the_bound() {
        let mut context = Context::with_seed(42);
        for _ in 0..200 {
            let Value::Scalar(x) = context.eval_rand(&[Value::Scalar(10.0)]).unwrap() else {
                panic!("rand must return a scalar");
            };
            assert!((0.0..10.0).contains(&x));
            assert_eq!(x.fract(), 0.0);
        }
    }

    #[test]
    fn bound_of_one_always_gives_zero() {
        let mut context = Context::with_seed(0);

        assert_eq!(context.eval_rand(&[Value::Scalar(1.0)]).unwrap(), Value::Scalar(0.0));
    }

    #[test]
    fn out_of_range_bounds_are_rejected() {
        let mut context = Context::with_seed(0);
        for bound in [0.0, -3.0, 2.5, 32769.0] {
            assert!(matches!(context.eval_rand(&[Value::Scalar(bound)]),
                             Err(RuntimeError::InvalidArgument { .. })),
                    "rand({bound}) should fail");
        }
    }
}
