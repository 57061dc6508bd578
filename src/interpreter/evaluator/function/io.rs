use crate::{
    error::RuntimeError,
    interpreter::{console::Console, evaluator::core::EvalResult, value::core::Value},
};

/// Reads one number from the console.
///
/// # Errors
/// `Input` when the console is exhausted or the next token is not a number.
pub fn read(_: &[Value], console: &mut dyn Console) -> EvalResult<Value> {
    console.read_number()
           .map(Value::Scalar)
           .map_err(|e| RuntimeError::Input { details: e.to_string() })
}

/// Writes a value to the console.
///
/// Returns `0` on success and `1` if the console failed; it never raises.
///
/// # Example
/// ```
/// use seqfn::interpreter::{
///     console::BufferConsole, evaluator::function::io::write, value::core::Value,
/// };
///
/// let mut console = BufferConsole::default();
/// let status = write(&[Value::Scalar(42.0)], &mut console).unwrap();
///
/// assert_eq!(status, Value::Scalar(0.0));
/// assert_eq!(console.output(), "42\n");
/// ```
pub fn write(args: &[Value], console: &mut dyn Console) -> EvalResult<Value> {
    match console.write_value(&args[0]) {
        Ok(()) => Ok(Value::Scalar(0.0)),
        Err(e) => {
            tracing::debug!(error = %e, "write failed");
            Ok(Value::Scalar(1.0))
        },
    }
}
