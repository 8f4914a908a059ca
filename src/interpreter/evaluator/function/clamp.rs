use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{core::EvalResult, utils::check_arity},
        value::core::Value,
    },
};

/// Restricts a numeric value to an inclusive range.
///
/// Accepts exactly three arguments: the value, the lower bound, and the
/// upper bound. All three must be numeric. If every operand is an integer,
/// the result is an integer; otherwise the computation is performed on real
/// values. A lower bound greater than the upper bound is an
/// `InvalidArgument` error.
///
/// # Parameters
/// - `args`: Slice containing `[value, low, high]`.
/// - `line`: Line number for error reporting.
///
/// # Returns
/// The clamped `Value::Integer` or `Value::Real`.
///
/// # Example
/// ```
/// use evalscope::{Scope, Value, evaluate};
///
/// let scope = Scope::new();
///
/// assert_eq!(evaluate("clamp(7, 0, 5)", &scope).unwrap(), Value::Integer(5));
/// assert_eq!(evaluate("clamp(-1.5, 0.0, 5.0)", &scope).unwrap(),
///            Value::Real(0.0));
/// ```
pub fn clamp(args: &[Value], line: usize) -> EvalResult<Value> {
    check_arity("clamp", args, 3, line)?;

    if let (Value::Integer(value), Value::Integer(low), Value::Integer(high)) =
        (&args[0], &args[1], &args[2])
    {
        if low > high {
            return Err(RuntimeError::InvalidArgument { details: format!("Lower bound {low} is greater than upper bound {high}"),
                                                       line });
        }
        return Ok(Value::Integer(*value.clamp(low, high)));
    }

    let value = args[0].as_real(line)?;
    let low = args[1].as_real(line)?;
    let high = args[2].as_real(line)?;

    if low > high {
        return Err(RuntimeError::InvalidArgument { details: format!("Lower bound {low} is greater than upper bound {high}"),
                                                   line });
    }

    Ok(Value::Real(value.clamp(low, high)))
}
