use crate::{
    error::RuntimeError,
    interpreter::{
        console::Console,
        evaluator::core::EvalResult,
        value::{core::Value, sequence::Sequence},
    },
    util::num::{as_count, count_to_f64},
};

/// Number of elements in a sequence.
///
/// An unbounded sequence reports `-1`.
pub fn length(args: &[Value], _: &mut dyn Console) -> EvalResult<Value> {
    Ok(Value::Scalar(args[0].length()?.map_or(-1.0, count_to_f64)))
}

/// First element of a sequence.
pub fn head(args: &[Value], _: &mut dyn Console) -> EvalResult<Value> {
    args[0].head()
}

/// A sequence without its first element.
pub fn tail(args: &[Value], _: &mut dyn Console) -> EvalResult<Value> {
    args[0].clone().tail()
}

/// `list(start)`: the unbounded progression `start, start + 1, ...`.
pub fn list(args: &[Value], _: &mut dyn Console) -> EvalResult<Value> {
    Ok(Sequence::unbounded(args[0].as_scalar()?, 1.0).into())
}

/// `list(start, step)`: the unbounded progression with the given step.
pub fn list2(args: &[Value], _: &mut dyn Console) -> EvalResult<Value> {
    Ok(Sequence::unbounded(args[0].as_scalar()?, args[1].as_scalar()?).into())
}

/// `list(start, step, count)`: a finite progression.
///
/// # Example
/// ```
/// use seqfn::interpreter::{
///     console::BufferConsole, evaluator::function::sequence::list3, value::core::Value,
/// };
///
/// let args = [Value::Scalar(5.0), Value::Scalar(1.0), Value::Scalar(3.0)];
/// let v = list3(&args, &mut BufferConsole::default()).unwrap();
///
/// assert_eq!(v.to_string(), "[5 6 7]");
/// ```
pub fn list3(args: &[Value], _: &mut dyn Console) -> EvalResult<Value> {
    let start = args[0].as_scalar()?;
    let step = args[1].as_scalar()?;
    let raw_count = args[2].as_scalar()?;
    let count = as_count(raw_count).ok_or_else(|| {
                                       RuntimeError::type_error(format!("list length must be a \
                                                                         non-negative integer, \
                                                                         got {raw_count}"))
                                   })?;

    Ok(Sequence::progression(start, step, count)?.into())
}

/// Appends the second argument to the first.
pub fn concat(args: &[Value], _: &mut dyn Console) -> EvalResult<Value> {
    args[0].clone().concat(args[1].clone())
}
