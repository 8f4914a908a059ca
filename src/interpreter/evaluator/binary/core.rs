use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context<'_> {
    /// Evaluates a binary operation between two values.
    ///
    /// This function routes the operation to specialized handlers depending
    /// on the operator. Arithmetic operations use scalar evaluation (which
    /// also covers string concatenation for `+`). Modulo supports integers
    /// and reals with promotion and a zero-divisor check. Power calls
    /// `eval_pow`. Relational and equality operators use `eval_comparison`.
    /// Logical operators call `eval_logic`.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the evaluated result.
    ///
    /// # Example
    /// ```
    /// use evalscope::{Scope, Value, evaluate};
    ///
    /// let scope = Scope::new();
    ///
    /// assert_eq!(evaluate("3 + 4", &scope).unwrap(), Value::Integer(7));
    /// assert_eq!(evaluate("3 < 4", &scope).unwrap(), Value::Bool(true));
    /// ```
    pub(crate) fn eval_binary(op: BinaryOperator,
                              left: &Value,
                              right: &Value,
                              line: usize)
                              -> EvalResult<Value> {
        use BinaryOperator::{
            Add, And, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mod, Mul, NotEqual, Or,
            Pow, Sub, Xor,
        };
        use Value::{Integer, Real};

        match op {
            Add | Sub | Mul | Div => Self::eval_scalar_op(op, left, right, line),

            Mod => match (&left, &right) {
                (Integer(a), Integer(b)) => {
                    if *b == 0 {
                        return Err(RuntimeError::DivisionByZero { line });
                    }
                    a.checked_rem(*b)
                     .map(Integer)
                     .ok_or(RuntimeError::Overflow { line })
                },
                (Real(_), _) | (_, Real(_)) => {
                    let (l, r) = left.clone().promote_to_real(right, line)?;
                    let divisor = r.as_real(line)?;
                    if divisor == 0.0 {
                        return Err(RuntimeError::DivisionByZero { line });
                    }
                    Ok(Real(l.as_real(line)? % divisor))
                },
                _ => {
                    Err(RuntimeError::TypeError { details: format!("Cannot use {op} on {left} and {right}"),
                                                  line })
                },
            },

            Pow => Self::eval_pow(left, right, line),

            Less | Greater | LessEqual | GreaterEqual | Equal | NotEqual => {
                Self::eval_comparison(op, left, right, line)
            },

            And | Xor | Or => Self::eval_logic(op, left, right, line),
        }
    }
}
