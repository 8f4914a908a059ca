use std::rc::Rc;

use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context<'_> {
    /// Evaluates a scalar arithmetic operation.
    ///
    /// The function handles integer, real, and string operands. Mixed
    /// numeric types are promoted as needed. Integer arithmetic is checked;
    /// overflow is reported instead of wrapping. Division by zero is checked
    /// explicitly for all numeric categories. `+` on two strings
    /// concatenates them. The operator must be one of `Add`, `Sub`, `Mul` or
    /// `Div`; other operators are not processed here.
    ///
    /// # Parameters
    /// - `op`: The arithmetic operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the computed scalar.
    ///
    /// # Example
    /// ```
    /// use evalscope::{Scope, Value, evaluate};
    ///
    /// let scope = Scope::new();
    ///
    /// assert_eq!(evaluate("1.5 * 2.0", &scope).unwrap(), Value::Real(3.0));
    /// assert_eq!(evaluate(r#""foo" + "bar""#, &scope).unwrap(),
    ///            Value::Str("foobar".into()));
    /// ```
    pub(crate) fn eval_scalar_op(op: BinaryOperator,
                                 left: &Value,
                                 right: &Value,
                                 line: usize)
                                 -> EvalResult<Value> {
        use BinaryOperator::{Add, Div, Mul, Sub};
        use Value::{Integer, Real, Str};

        match (&left, &right) {
            (Str(a), Str(b)) => {
                if matches!(op, Add) {
                    let mut joined = String::with_capacity(a.len() + b.len());
                    joined.push_str(a);
                    joined.push_str(b);
                    Ok(Str(Rc::from(joined.as_str())))
                } else {
                    Err(RuntimeError::TypeError { details: format!("Cannot use {op} on strings"),
                                                  line })
                }
            },
            (Real(_), Real(_) | Integer(_)) | (Integer(_), Real(_)) => {
                let (left, right) = left.clone().promote_to_real(right, line)?;
                let left = left.as_real(line)?;
                let right = right.as_real(line)?;

                Ok(Real(match op {
                            Add => left + right,
                            Sub => left - right,
                            Mul => left * right,
                            Div => {
                                if right == 0.0 {
                                    return Err(RuntimeError::DivisionByZero { line });
                                }
                                left / right
                            },
                            _ => unreachable!(),
                        }))
            },
            (Integer(a), Integer(b)) => {
                let result = match op {
                    Add => a.checked_add(*b),
                    Sub => a.checked_sub(*b),
                    Mul => a.checked_mul(*b),
                    Div => {
                        if *b == 0 {
                            return Err(RuntimeError::DivisionByZero { line });
                        }
                        a.checked_div(*b)
                    },
                    _ => unreachable!(),
                };

                result.map(Integer).ok_or(RuntimeError::Overflow { line })
            },
            _ => {
                Err(RuntimeError::TypeError { details: format!("Invalid scalar operands: {left} {op} {right}"),
                                              line })
            },
        }
    }
}
