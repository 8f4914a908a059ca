use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context<'_> {
    /// Evaluates a logical operation between two boolean values.
    ///
    /// The operands are converted to booleans using `as_bool`.
    /// Supported operators are logical AND, XOR and OR. Both operands are
    /// always evaluated before this point; there is no short-circuiting.
    ///
    /// # Parameters
    /// - `op`: The logical operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing a boolean.
    ///
    /// # Example
    /// ```
    /// use evalscope::{Scope, Value, evaluate};
    ///
    /// let scope = Scope::new();
    ///
    /// assert_eq!(evaluate("true xor false", &scope).unwrap(),
    ///            Value::Bool(true));
    /// ```
    pub(crate) fn eval_logic(op: BinaryOperator,
                             left: &Value,
                             right: &Value,
                             line: usize)
                             -> EvalResult<Value> {
        use BinaryOperator::{And, Or, Xor};

        match op {
            And => Ok(Value::Bool(left.as_bool(line)? && right.as_bool(line)?)),
            Xor => Ok(Value::Bool(left.as_bool(line)? ^ right.as_bool(line)?)),
            Or => Ok(Value::Bool(left.as_bool(line)? || right.as_bool(line)?)),
            _ => unreachable!(),
        }
    }
}
