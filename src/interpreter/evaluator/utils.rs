use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Checks if the argument list matches the expected count.
/// Returns an error if the argument count does not match.
///
/// ## Example
/// ```
/// use evalscope::{Value, interpreter::evaluator::utils::check_arity};
///
/// let arg_vals = vec![Value::Integer(2), Value::Integer(1)];
/// let line = 15;
///
/// assert!(check_arity("max", &arg_vals, 2, line).is_ok()); // Requires exactly 2 arguments.
/// ```
pub fn check_arity<T>(name: &str, args: &[T], expected: usize, line: usize) -> EvalResult<()> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(RuntimeError::ArgumentCountMismatch { name: name.to_string(),
                                                  line })
    }
}

/// Compares two values for strict structural equality.
///
/// Numeric operands of mixed type are promoted so that `1 == 1.0` holds.
/// Arrays compare element-wise with the same promotion applied at every
/// depth, so `[1] == [1.0]` also holds. All other combinations compare
/// structurally: booleans and strings are equal only to values of the same
/// type with equal contents.
///
/// # Parameters
/// - `left`: First value.
/// - `right`: Second value.
/// - `line`: Line number for error reporting.
///
/// # Returns
/// `Ok(bool)` indicating equality, or an error if a numeric promotion
/// fails.
///
/// # Example
/// ```
/// use evalscope::{Value, interpreter::evaluator::utils::strict_eq};
///
/// assert!(strict_eq(&Value::Integer(1), &Value::Real(1.0), 1).unwrap());
/// assert!(!strict_eq(&Value::Bool(true), &Value::Integer(1), 1).unwrap());
///
/// let ints = Value::from(vec![Value::Integer(1)]);
/// let reals = Value::from(vec![Value::Real(1.0)]);
/// assert!(strict_eq(&ints, &reals, 1).unwrap());
/// ```
pub fn strict_eq(left: &Value, right: &Value, line: usize) -> EvalResult<bool> {
    match (left, right) {
        (Value::Real(_), Value::Integer(_)) | (Value::Integer(_), Value::Real(_)) => {
            let (l, r) = left.clone().promote_to_real(right, line)?;
            Ok(l == r)
        },

        (Value::Array(a), Value::Array(b)) => {
            if a.len() != b.len() {
                return Ok(false);
            }
            for (x, y) in a.iter().zip(b.iter()) {
                if !strict_eq(x, y, line)? {
                    return Ok(false);
                }
            }
            Ok(true)
        },

        _ => Ok(left == right),
    }
}
