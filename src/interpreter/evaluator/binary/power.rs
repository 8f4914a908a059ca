use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
    util::num::i64_to_u32_checked,
};

impl Context<'_> {
    /// Evaluates an exponentiation of the form `base ^ exponent`.
    ///
    /// When both operands are integers and the exponent is non-negative, the
    /// result is computed with exact checked integer exponentiation and
    /// overflow is reported. In every other numeric combination (including a
    /// negative integer exponent) both operands are promoted to real and the
    /// result is `f64::powf`.
    ///
    /// # Parameters
    /// - `left`: The base value.
    /// - `right`: The exponent value.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// `Value::Integer` or `Value::Real` depending on operand types.
    ///
    /// # Example
    /// ```
    /// use evalscope::{Scope, Value, evaluate};
    ///
    /// let scope = Scope::new();
    ///
    /// assert_eq!(evaluate("2 ^ 10", &scope).unwrap(), Value::Integer(1024));
    /// assert_eq!(evaluate("2 ^ -1", &scope).unwrap(), Value::Real(0.5));
    /// ```
    pub(crate) fn eval_pow(left: &Value, right: &Value, line: usize) -> EvalResult<Value> {
        match (left, right) {
            (Value::Integer(base), Value::Integer(exp)) if *exp >= 0 => {
                let exp = i64_to_u32_checked(*exp, line)?;
                base.checked_pow(exp)
                    .map(Value::Integer)
                    .ok_or(RuntimeError::Overflow { line })
            },
            _ => {
                if !left.is_numeric() || !right.is_numeric() {
                    return Err(RuntimeError::TypeError { details: format!("Cannot use ^ on {left} and {right}"),
                                                         line });
                }
                let base = left.as_real(line)?;
                let exp = right.as_real(line)?;
                Ok(Value::Real(base.powf(exp)))
            },
        }
    }
}
