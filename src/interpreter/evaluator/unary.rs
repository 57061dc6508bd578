use crate::{
    ast::UnaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::core::Value,
    },
};

impl Evaluator<'_> {
    /// Evaluates a prefix operator.
    ///
    /// Both operators are defined on scalars only.
    ///
    /// # Example
    /// ```
    /// use seqfn::{
    ///     ast::UnaryOperator,
    ///     interpreter::{evaluator::core::Evaluator, value::core::Value},
    /// };
    ///
    /// let v = Evaluator::eval_unary(UnaryOperator::Negate, &Value::Scalar(5.0)).unwrap();
    /// assert_eq!(v, Value::Scalar(-5.0));
    /// ```
    pub fn eval_unary(op: UnaryOperator, value: &Value) -> EvalResult<Value> {
        let Value::Scalar(x) = value else {
            return Err(RuntimeError::type_error(format!("unary '{op}' applied to a {}",
                                                        value.kind_name())));
        };

        Ok(Value::Scalar(match op {
                             UnaryOperator::Plus => *x,
                             UnaryOperator::Negate => -x,
                         }))
    }
}
