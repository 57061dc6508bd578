use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::core::Value,
    },
    util::num::{as_integral, integral_to_f64},
};

impl Evaluator<'_> {
    /// Evaluates a binary arithmetic operation.
    ///
    /// Operands must both be scalars. The `add`, `sub`, `mul`, `div` and
    /// `mod` built-ins share this implementation with the infix operators.
    ///
    /// # Errors
    /// - `TypeError` if either operand is a sequence, or if a `%` operand is
    ///   not integral.
    /// - `DivisionByZero` for `/` or `%` with a zero right operand.
    ///
    /// # Example
    /// ```
    /// use seqfn::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Evaluator, value::core::Value},
    /// };
    ///
    /// let v = Evaluator::eval_binary(BinaryOperator::Pow, &Value::Scalar(2.0), &Value::Scalar(10.0));
    /// assert_eq!(v.unwrap(), Value::Scalar(1024.0));
    /// ```
    pub fn eval_binary(op: BinaryOperator, left: &Value, right: &Value) -> EvalResult<Value> {
        let (Value::Scalar(l), Value::Scalar(r)) = (left, right) else {
            return Err(RuntimeError::type_error(format!("operator '{op}' expects numbers, got a \
                                                         {} and a {}",
                                                        left.kind_name(),
                                                        right.kind_name())));
        };
        let (l, r) = (*l, *r);

        Ok(Value::Scalar(match op {
                             BinaryOperator::Add => l + r,
                             BinaryOperator::Sub => l - r,
                             BinaryOperator::Mul => l * r,
                             BinaryOperator::Div => {
                                 if r == 0.0 {
                                     return Err(RuntimeError::DivisionByZero);
                                 }
                                 l / r
                             },
                             BinaryOperator::Mod => Self::eval_modulo(l, r)?,
                             BinaryOperator::Pow => l.powf(r),
                         }))
    }

    /// Remainder of integral division. The sign follows the dividend.
    fn eval_modulo(left: f64, right: f64) -> EvalResult<f64> {
        let integral = |x: f64| {
            as_integral(x).ok_or_else(|| {
                              RuntimeError::type_error(format!("modulo expects integral operands, \
                                                                got {x}"))
                          })
        };
        let (a, b) = (integral(left)?, integral(right)?);

        if b == 0 {
            return Err(RuntimeError::DivisionByZero);
        }

        Ok(integral_to_f64(a % b))
    }
}
