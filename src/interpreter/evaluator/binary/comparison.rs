use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

/// Maps an equality-style operator and a boolean equality result
/// to the final boolean value.
///
/// Used by `eval_comparison` to invert the result for `NotEqual`.
///
/// This function does not perform any numeric work itself.
#[must_use]
pub fn equality_op_result(op: BinaryOperator, is_equal: bool) -> bool {
    match op {
        BinaryOperator::Equal => is_equal,
        BinaryOperator::NotEqual => !is_equal,
        _ => unreachable!("equality_op_result used with non equality operator"),
    }
}

impl Context<'_> {
    /// Evaluates a comparison of the form `Value <Operator> Value`.
    ///
    /// This function handles equality and relational comparisons.
    /// For `Equal` and `NotEqual`, values are compared using strict
    /// structural equality with numeric promotion. For relational operators,
    /// numeric operands are promoted to real numbers and strings are ordered
    /// lexicographically; any other operand combination is a type error.
    ///
    /// # Parameters
    /// - `op`: The comparison operator.
    /// - `left`: The left-hand value.
    /// - `right`: The right-hand value.
    /// - `line`: Current line number used for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing a boolean result.
    ///
    /// # Example
    /// ```
    /// use evalscope::{Scope, Value, evaluate};
    ///
    /// let scope = Scope::new();
    ///
    /// assert_eq!(evaluate("3.0 < 5", &scope).unwrap(), Value::Bool(true));
    /// assert_eq!(evaluate(r#""abc" < "abd""#, &scope).unwrap(),
    ///            Value::Bool(true));
    /// ```
    pub(crate) fn eval_comparison(op: BinaryOperator,
                                  left: &Value,
                                  right: &Value,
                                  line: usize)
                                  -> EvalResult<Value> {
        use crate::interpreter::evaluator::utils::strict_eq;

        Ok(Value::Bool(match op {
                           BinaryOperator::Equal | BinaryOperator::NotEqual => {
                               let equality = strict_eq(left, right, line)?;
                               equality_op_result(op, equality)
                           },

                           BinaryOperator::Less
                           | BinaryOperator::Greater
                           | BinaryOperator::LessEqual
                           | BinaryOperator::GreaterEqual => {
                               if let (Value::Str(a), Value::Str(b)) = (left, right) {
                                   match op {
                                       BinaryOperator::Less => a < b,
                                       BinaryOperator::Greater => a > b,
                                       BinaryOperator::LessEqual => a <= b,
                                       BinaryOperator::GreaterEqual => a >= b,
                                       _ => unreachable!(),
                                   }
                               } else {
                                   let (left, right) =
                                       left.clone().promote_to_real(right, line)?;
                                   let left = left.as_real(line)?;
                                   let right = right.as_real(line)?;

                                   match op {
                                       BinaryOperator::Less => left < right,
                                       BinaryOperator::Greater => left > right,
                                       BinaryOperator::LessEqual => left <= right,
                                       BinaryOperator::GreaterEqual => left >= right,
                                       _ => unreachable!(),
                                   }
                               }
                           },

                           _ => unreachable!(),
                       }))
    }
}
