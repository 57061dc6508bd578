use crate::{
    ast::Expr,
    error::{Error, RuntimeError},
    interpreter::{
        console::Console, evaluator::frame::CallFrame, parser::core::parse, registry::Registry,
        value::core::Value,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Default bound on nested user-function calls.
pub const DEFAULT_MAX_DEPTH: usize = 10_000;

/// Bytes of stack that must remain before evaluating a nested expression.
const RED_ZONE: usize = 128 * 1024;
/// Size of each stack segment allocated when the red zone is reached.
const STACK_SEGMENT: usize = 4 * 1024 * 1024;

/// Tunable limits for evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvalConfig {
    /// Deepest allowed nesting of user-function calls.
    pub max_depth: usize,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self { max_depth: DEFAULT_MAX_DEPTH }
    }
}

/// Walks expression trees and computes their values.
///
/// An evaluator borrows the function registry and the console for the
/// duration of one top-level evaluation. It tracks how deeply user-function
/// calls are nested so that runaway recursion ends in an error instead of
/// exhausting memory.
pub struct Evaluator<'a> {
    registry: &'a Registry,
    console:  &'a mut dyn Console,
    config:   EvalConfig,
    depth:    usize,
}

impl<'a> Evaluator<'a> {
    /// Creates an evaluator with the default limits.
    pub fn new(registry: &'a Registry, console: &'a mut dyn Console) -> Self {
        Self { registry,
               console,
               config: EvalConfig::default(),
               depth: 0 }
    }

    /// Replaces the evaluation limits.
    #[must_use]
    pub const fn with_config(mut self, config: EvalConfig) -> Self {
        self.config = config;
        self
    }

    /// Parses and evaluates an expression.
    ///
    /// `frame` is the frame of an enclosing user-function call; parameter
    /// references (`#N`) in `source` resolve against it.
    ///
    /// # Example
    /// ```
    /// use seqfn::interpreter::{
    ///     console::BufferConsole, evaluator::core::Evaluator, registry::Registry,
    ///     value::core::Value,
    /// };
    ///
    /// let registry = Registry::new();
    /// let mut console = BufferConsole::default();
    /// let mut evaluator = Evaluator::new(&registry, &mut console);
    ///
    /// let value = evaluator.evaluate_source("2 ^ 3 ^ 2", None).unwrap();
    /// assert_eq!(value, Value::Scalar(512.0));
    /// ```
    pub fn evaluate_source(&mut self,
                           source: &str,
                           frame: Option<&CallFrame<'_>>)
                           -> Result<Value, Error> {
        let expr = parse(source)?;
        Ok(self.eval(&expr, frame)?)
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. Evaluation is
    /// strict and left to right, except for the `if` and `nand` forms, which
    /// skip the operands whose value cannot matter.
    pub fn eval(&mut self, expr: &Expr, frame: Option<&CallFrame<'_>>) -> EvalResult<Value> {
        stacker::maybe_grow(RED_ZONE, STACK_SEGMENT, || self.eval_node(expr, frame))
    }

    fn eval_node(&mut self, expr: &Expr, frame: Option<&CallFrame<'_>>) -> EvalResult<Value> {
        match expr {
            Expr::Number(x) => Ok(Value::Scalar(*x)),
            Expr::List(elements) => self.eval_list_literal(elements, frame),
            Expr::Parameter { index, .. } => {
                frame.ok_or(RuntimeError::NoActiveFrame { index: *index })?
                     .argument(*index)
            },
            Expr::Unary { op, operand } => {
                let value = self.eval(operand, frame)?;
                Self::eval_unary(*op, &value)
            },
            Expr::Binary { op, left, right } => {
                let left = self.eval(left, frame)?;
                let right = self.eval(right, frame)?;
                Self::eval_binary(*op, &left, &right)
            },
            Expr::Sequence { first, then } => {
                self.eval(first, frame)?;
                self.eval(then, frame)
            },
            Expr::Builtin { builtin, arguments } => self.eval_builtin(builtin, arguments, frame),
            Expr::Call { name, arguments } => self.call_user_function(name, arguments, frame),
            Expr::If { condition,
                       then_branch,
                       else_branch, } => self.eval_if(condition, then_branch, else_branch, frame),
            Expr::Nand { left, right } => self.eval_nand(left, right, frame),
        }
    }

    /// The registry that user-function calls resolve against.
    #[must_use]
    pub const fn registry(&self) -> &'a Registry {
        self.registry
    }

    /// The console used by `read` and `write`.
    pub fn console(&mut self) -> &mut dyn Console {
        &mut *self.console
    }

    /// Current nesting of user-function calls.
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// Records entry into a user-function body.
    pub(crate) fn enter_call(&mut self) -> EvalResult<()> {
        if self.depth >= self.config.max_depth {
            tracing::debug!(limit = self.config.max_depth, "recursion limit reached");
            return Err(RuntimeError::RecursionLimitExceeded { limit: self.config.max_depth });
        }

        self.depth += 1;
        Ok(())
    }

    /// Records exit from a user-function body.
    pub(crate) fn leave_call(&mut self) {
        self.depth -= 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::ErrorKind, interpreter::console::BufferConsole};

    fn evaluate(source: &str) -> Result<Value, Error> {
        let registry = Registry::new();
        let mut console = BufferConsole::default();
        Evaluator::new(&registry, &mut console).evaluate_source(source, None)
    }

    #[test]
    fn parameter_without_frame_fails() {
        assert_eq!(evaluate("#0 + 1").unwrap_err().kind(), ErrorKind::NoActiveFrame);
    }

    #[test]
    fn sequence_operator_keeps_right_value() {
        assert_eq!(evaluate("(1, 2)").unwrap(), Value::Scalar(2.0));
    }

    #[test]
    fn depth_is_restored_after_a_failed_call() {
        let mut registry = Registry::new();
        registry.define("boom", 1, "div(#0, 0)").unwrap();
        let mut console = BufferConsole::default();
        let mut evaluator = Evaluator::new(&registry, &mut console);

        assert!(evaluator.evaluate_source("boom(1)", None).is_err());
        assert_eq!(evaluator.depth(), 0);
    }

    #[test]
    fn recursion_limit_is_configurable() {
        let mut registry = Registry::new();
        registry.define("down", 1, "if(#0, down(#0 - 1), 0)").unwrap();
        let mut console = BufferConsole::default();
        let mut evaluator =
            Evaluator::new(&registry, &mut console).with_config(EvalConfig { max_depth: 5 });

        assert_eq!(evaluator.evaluate_source("down(4)", None).unwrap(), Value::Scalar(0.0));
        let err = evaluator.evaluate_source("down(5)", None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::RecursionLimitExceeded);
    }
}
