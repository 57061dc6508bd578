use crate::{
    ast::Expr,
    interpreter::{
        evaluator::{
            core::{EvalResult, Evaluator},
            frame::CallFrame,
        },
        value::core::Value,
    },
};

impl Evaluator<'_> {
    /// Evaluates `if(condition, then, else)`.
    ///
    /// Only the branch selected by the condition is evaluated.
    pub(crate) fn eval_if(&mut self,
                          condition: &Expr,
                          then_branch: &Expr,
                          else_branch: &Expr,
                          frame: Option<&CallFrame<'_>>)
                          -> EvalResult<Value> {
        let taken = self.eval(condition, frame)?.is_truthy();
        tracing::trace!(taken, "if");

        self.eval(if taken { then_branch } else { else_branch }, frame)
    }

    /// Evaluates `nand(left, right)`.
    ///
    /// When `left` is falsy the result is `1` and `right` is never
    /// evaluated.
    pub(crate) fn eval_nand(&mut self,
                            left: &Expr,
                            right: &Expr,
                            frame: Option<&CallFrame<'_>>)
                            -> EvalResult<Value> {
        if !self.eval(left, frame)?.is_truthy() {
            tracing::trace!("nand short-circuited");
            return Ok(Value::from(true));
        }

        Ok(Value::from(!self.eval(right, frame)?.is_truthy()))
    }
}
