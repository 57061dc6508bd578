use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::core::Value,
    },
};

/// The activation of one user-function call.
///
/// A frame owns the evaluated arguments of the call and borrows the parsed
/// body of the function. Parameter references `#N` inside the body resolve
/// to the frame's `N`-th argument. Frames nest strictly: a frame outlives
/// every call made from its body.
#[derive(Debug)]
pub struct CallFrame<'a> {
    name:      &'a str,
    arguments: Vec<Value>,
    body:      &'a Expr,
}

impl<'a> CallFrame<'a> {
    /// Creates a frame for a call to `name` with the given arguments.
    #[must_use]
    pub const fn new(name: &'a str, arguments: Vec<Value>, body: &'a Expr) -> Self {
        Self { name,
               arguments,
               body }
    }

    /// Name of the called function.
    #[must_use]
    pub const fn name(&self) -> &str {
        self.name
    }

    /// Number of arguments the call was made with.
    #[must_use]
    pub fn arity(&self) -> usize {
        self.arguments.len()
    }

    /// Returns a copy of the argument at `index`.
    ///
    /// # Example
    /// ```
    /// use seqfn::{
    ///     ast::Expr,
    ///     interpreter::{evaluator::frame::CallFrame, value::core::Value},
    /// };
    ///
    /// let body = Expr::Number(0.0);
    /// let frame = CallFrame::new("f", vec![Value::Scalar(7.0)], &body);
    ///
    /// assert_eq!(frame.argument(0).unwrap(), Value::Scalar(7.0));
    /// assert!(frame.argument(1).is_err());
    /// ```
    pub fn argument(&self, index: usize) -> EvalResult<Value> {
        self.arguments
            .get(index)
            .cloned()
            .ok_or(RuntimeError::IndexOutOfRange { index,
                                                   arity: self.arguments.len() })
    }

    /// Evaluates the function body with this frame active.
    pub fn run(&self, evaluator: &mut Evaluator<'_>) -> EvalResult<Value> {
        tracing::trace!(name = self.name(),
                        arity = self.arity(),
                        depth = evaluator.depth(),
                        "entering call frame");
        evaluator.eval(self.body, Some(self))
    }
}
