use crate::{
    ast::BinaryOperator,
    interpreter::{
        console::Console,
        evaluator::core::{EvalResult, Evaluator},
        value::core::Value,
    },
};

/// Defines a builtin that applies an arithmetic operator to its two
/// arguments, sharing the implementation with the infix form.
///
/// # Example
/// ```
/// use seqfn::interpreter::{
///     console::BufferConsole, evaluator::function::builtin::sub, value::core::Value,
/// };
///
/// let mut console = BufferConsole::default();
/// let r = sub(&[Value::Scalar(5.0), Value::Scalar(7.0)], &mut console).unwrap();
///
/// assert_eq!(r, Value::Scalar(-2.0));
/// ```
macro_rules! arithmetic_builtin {
    ($fname:ident, $op:ident) => {
        pub fn $fname(args: &[Value], _: &mut dyn Console) -> EvalResult<Value> {
            Evaluator::eval_binary(BinaryOperator::$op, &args[0], &args[1])
        }
    };
}

arithmetic_builtin!(add, Add);
arithmetic_builtin!(sub, Sub);
arithmetic_builtin!(mul, Mul);
arithmetic_builtin!(div, Div);
arithmetic_builtin!(modulo, Mod);

/// Structural equality, returning `1` or `0`.
///
/// Scalars are promoted to one-element sequences before comparing, so
/// `eq([1], 1)` holds while `eq([1, 2], 1)` does not.
pub fn eq(args: &[Value], _: &mut dyn Console) -> EvalResult<Value> {
    Ok(Value::from(args[0] == args[1]))
}

/// Strict ordering of two scalars: `1` when the first is less than the
/// second.
pub fn le(args: &[Value], _: &mut dyn Console) -> EvalResult<Value> {
    Ok(Value::from(args[0].as_scalar()? < args[1].as_scalar()?))
}

/// Rounds a scalar toward negative infinity.
pub fn int(args: &[Value], _: &mut dyn Console) -> EvalResult<Value> {
    Ok(Value::Scalar(args[0].as_scalar()?.floor()))
}

/// Square root. Negative arguments give `NaN`.
pub fn sqrt(args: &[Value], _: &mut dyn Console) -> EvalResult<Value> {
    Ok(Value::Scalar(args[0].as_scalar()?.sqrt()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::ErrorKind, interpreter::console::BufferConsole};

    fn call(f: fn(&[Value], &mut dyn Console) -> EvalResult<Value>, args: &[Value]) -> EvalResult<Value> {
        f(args, &mut BufferConsole::default())
    }

    #[test]
    fn int_floors() {
        assert_eq!(call(int, &[Value::Scalar(2.7)]).unwrap(), Value::Scalar(2.0));
        assert_eq!(call(int, &[Value::Scalar(-2.2)]).unwrap(), Value::Scalar(-3.0));
    }

    #[test]
    fn le_is_strict() {
        assert_eq!(call(le, &[Value::Scalar(1.0), Value::Scalar(2.0)]).unwrap(), Value::Scalar(1.0));
        assert_eq!(call(le, &[Value::Scalar(2.0), Value::Scalar(2.0)]).unwrap(), Value::Scalar(0.0));
    }

    #[test]
    fn le_rejects_sequences() {
        let list = Value::from(vec![Value::Scalar(1.0), Value::Scalar(2.0)]);
        let err = call(le, &[list, Value::Scalar(2.0)]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgumentType);
    }

    #[test]
    fn eq_promotes_scalars() {
        let single = Value::from(vec![Value::Scalar(1.0)]);
        assert_eq!(call(eq, &[single, Value::Scalar(1.0)]).unwrap(), Value::Scalar(1.0));
        assert_eq!(call(eq, &[Value::Scalar(2.0), Value::Scalar(3.0)]).unwrap(), Value::Scalar(0.0));
    }
}
