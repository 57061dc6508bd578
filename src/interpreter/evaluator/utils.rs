use crate::{
    ast::Expr,
    interpreter::{
        evaluator::{
            core::{EvalResult, Evaluator},
            frame::CallFrame,
            function::core::{BUILTIN_FUNCTIONS, CONSTANTS, SPECIAL_FORMS},
        },
        value::{core::Value, sequence::Sequence},
    },
};

impl Evaluator<'_> {
    /// Evaluates call arguments left to right.
    pub(crate) fn eval_arguments(&mut self,
                                 arguments: &[Expr],
                                 frame: Option<&CallFrame<'_>>)
                                 -> EvalResult<Vec<Value>> {
        arguments.iter()
                 .map(|argument| self.eval(argument, frame))
                 .collect()
    }

    /// Evaluates a list literal into a finite sequence.
    ///
    /// # Example
    /// ```
    /// use seqfn::{
    ///     ast::Expr,
    ///     interpreter::{
    ///         console::BufferConsole, evaluator::core::Evaluator, registry::Registry,
    ///     },
    /// };
    ///
    /// let registry = Registry::new();
    /// let mut console = BufferConsole::default();
    /// let mut evaluator = Evaluator::new(&registry, &mut console);
    ///
    /// let elements = vec![Expr::Number(1.0), Expr::List(vec![])];
    /// let value = evaluator.eval(&Expr::List(elements), None).unwrap();
    ///
    /// assert_eq!(value.to_string(), "[1 []]");
    /// ```
    pub(crate) fn eval_list_literal(&mut self,
                                    elements: &[Expr],
                                    frame: Option<&CallFrame<'_>>)
                                    -> EvalResult<Value> {
        let values = self.eval_arguments(elements, frame)?;

        Ok(Sequence::from_values(values).into())
    }
}

/// Returns `true` if `name` belongs to the language: a builtin function, a
/// special form or a constant. Such names can never be user-defined.
///
/// # Example
/// ```
/// use seqfn::interpreter::evaluator::utils::is_reserved_identifier;
///
/// assert!(is_reserved_identifier("head"));
/// assert!(is_reserved_identifier("nand"));
/// assert!(is_reserved_identifier("PI"));
/// assert!(!is_reserved_identifier("len"));
/// ```
#[must_use]
pub fn is_reserved_identifier(name: &str) -> bool {
    BUILTIN_FUNCTIONS.contains(&name)
    || SPECIAL_FORMS.contains(&name)
    || CONSTANTS.iter().any(|(constant, _)| *constant == name)
}
