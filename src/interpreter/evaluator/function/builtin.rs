use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{core::EvalResult, utils::check_arity},
        value::core::Value,
    },
    util::num::f64_to_i64_checked,
};

/// Returns the absolute value of a numeric argument.
///
/// Accepts exactly one argument.
/// Integers stay integers; `abs(i64::MIN)` overflows and is reported.
/// Non-numeric values cause an `ExpectedNumber` error.
///
/// # Parameters
/// - `args`: Slice containing one argument.
/// - `line`: Line number for error reporting.
///
/// # Returns
/// `Value::Integer` or `Value::Real` depending on input type.
///
/// # Example
/// ```
/// use evalscope::{Scope, Value, evaluate};
///
/// let scope = Scope::new();
/// assert_eq!(evaluate("abs(-5)", &scope).unwrap(), Value::Integer(5));
/// ```
pub fn abs(args: &[Value], line: usize) -> EvalResult<Value> {
    check_arity("abs", args, 1, line)?;

    match args[0] {
        Value::Integer(i) => {
            i.checked_abs()
             .map(Value::Integer)
             .ok_or(RuntimeError::Overflow { line })
        },
        Value::Real(r) => Ok(Value::Real(r.abs())),
        _ => Err(RuntimeError::ExpectedNumber { line }),
    }
}

/// Returns the numeric sign of a value.
///
/// Accepts exactly one argument.
/// Integers return `-1`, `0` or `1`.
/// Reals return `-1.0`, `0.0` or `1.0`.
/// Non-numeric values cause an `ExpectedNumber` error.
///
/// # Parameters
/// - `args`: Slice containing one argument.
/// - `line`: Line number for error reporting.
///
/// # Returns
/// `Value::Integer` or `Value::Real` depending on input type.
///
/// # Example
/// ```
/// use evalscope::{Scope, Value, evaluate};
///
/// let scope = Scope::new();
/// assert_eq!(evaluate("sign(-42)", &scope).unwrap(), Value::Integer(-1));
/// ```
pub fn sign(args: &[Value], line: usize) -> EvalResult<Value> {
    check_arity("sign", args, 1, line)?;

    match args[0] {
        Value::Integer(i) => Ok(Value::Integer(i.signum())),
        Value::Real(r) => {
            // signum() maps 0.0 to 1.0, which is not the convention here.
            if r == 0.0 {
                Ok(Value::Real(0.0))
            } else {
                Ok(Value::Real(r.signum()))
            }
        },
        _ => Err(RuntimeError::ExpectedNumber { line }),
    }
}

/// Applies a rounding operation (`floor`, `ceil`, or `round`) to a numeric
/// value.
///
/// The operation is selected by name.
/// Integers are returned as-is.
/// Non-numeric values cause an `ExpectedNumber` error.
///
/// # Parameters
/// - `name`: Operation name (`floor`, `ceil`, `round`).
/// - `args`: Slice containing one argument.
/// - `line`: Line number for error reporting.
///
/// # Returns
/// `Value::Real` or `Value::Integer` depending on input.
///
/// # Example
/// ```
/// use evalscope::{Scope, Value, evaluate};
///
/// let scope = Scope::new();
/// assert_eq!(evaluate("floor(3.8)", &scope).unwrap(), Value::Real(3.0));
/// ```
pub fn unary_round(name: &str, args: &[Value], line: usize) -> EvalResult<Value> {
    check_arity(name, args, 1, line)?;

    let op = match name {
        "floor" => f64::floor,
        "ceil" => f64::ceil,
        "round" => f64::round,
        _ => unreachable!(),
    };

    match args[0] {
        Value::Integer(i) => Ok(Value::Integer(i)),
        Value::Real(r) => Ok(Value::Real(op(r))),
        _ => Err(RuntimeError::ExpectedNumber { line }),
    }
}

/// Truncates a numeric value toward zero, yielding an integer.
///
/// Accepts exactly one argument.
/// Integers are returned as-is. Reals lose their fractional part; the result
/// must fit in `i64`.
///
/// # Parameters
/// - `args`: Slice containing one argument.
/// - `line`: Line number for error reporting.
///
/// # Returns
/// `Value::Integer`.
///
/// # Example
/// ```
/// use evalscope::{Scope, Value, evaluate};
///
/// let scope = Scope::new();
/// assert_eq!(evaluate("trunc(3.9)", &scope).unwrap(), Value::Integer(3));
/// assert_eq!(evaluate("trunc(-3.9)", &scope).unwrap(), Value::Integer(-3));
/// ```
pub fn trunc(args: &[Value], line: usize) -> EvalResult<Value> {
    check_arity("trunc", args, 1, line)?;

    match args[0] {
        Value::Integer(i) => Ok(Value::Integer(i)),
        Value::Real(r) => Ok(Value::Integer(f64_to_i64_checked(r.trunc(), line)?)),
        _ => Err(RuntimeError::ExpectedNumber { line }),
    }
}

/// Computes the square root of a non-negative numeric value.
///
/// Accepts exactly one argument.
/// Integers are promoted to real before the root is taken; the result is
/// always real. Negative input is an `InvalidArgument` error rather than a
/// NaN.
///
/// # Parameters
/// - `args`: Slice containing one argument.
/// - `line`: Line number for error reporting.
///
/// # Returns
/// `Value::Real` containing the square root.
///
/// # Example
/// ```
/// use evalscope::{Scope, Value, evaluate};
///
/// let scope = Scope::new();
/// assert_eq!(evaluate("sqrt(9)", &scope).unwrap(), Value::Real(3.0));
/// assert!(evaluate("sqrt(-1)", &scope).is_err());
/// ```
pub fn sqrt(args: &[Value], line: usize) -> EvalResult<Value> {
    check_arity("sqrt", args, 1, line)?;

    if !args[0].is_numeric() {
        return Err(RuntimeError::ExpectedNumber { line });
    }

    let value = args[0].as_real(line)?;
    if value < 0.0 {
        return Err(RuntimeError::InvalidArgument { details: format!("Square root of negative number {value}"),
                                                   line });
    }

    Ok(Value::Real(value.sqrt()))
}

/// Returns the length of an array or string.
///
/// Accepts exactly one argument.
/// Arrays yield their element count; strings yield their character count.
/// Any other type causes a `TypeError`.
///
/// # Parameters
/// - `args`: Slice containing one argument.
/// - `line`: Line number for error reporting.
///
/// # Returns
/// `Value::Integer` containing the length.
///
/// # Example
/// ```
/// use evalscope::{Scope, Value, evaluate};
///
/// let scope = Scope::new();
/// assert_eq!(evaluate("len([1, 2, 3])", &scope).unwrap(), Value::Integer(3));
/// assert_eq!(evaluate(r#"len("ab")"#, &scope).unwrap(), Value::Integer(2));
/// ```
pub fn len(args: &[Value], line: usize) -> EvalResult<Value> {
    check_arity("len", args, 1, line)?;

    let length = match &args[0] {
        Value::Array(elements) => elements.len(),
        Value::Str(s) => s.chars().count(),
        other => {
            return Err(RuntimeError::TypeError { details: format!("len is not defined for {other}"),
                                                 line });
        },
    };

    i64::try_from(length).map(Value::Integer)
                         .map_err(|_| RuntimeError::LiteralTooLarge { line })
}
