use std::rc::Rc;

use crate::{
    ast::LiteralValue,
    error::RuntimeError,
    interpreter::evaluator::core::EvalResult,
    util::num::{f64_to_i64_checked, i64_to_f64_checked},
};

/// Represents a runtime value.
///
/// This enum models all the possible types that can appear in scope entries,
/// expressions, and evaluation results.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A numeric value (double precision floating-point).
    Real(f64),
    /// An integer value (64 bit integer).
    Integer(i64),
    /// A boolean value (`true` or `false`).
    /// Produced by comparison operators (`<`, `==`, `!=`, etc.) or logical
    /// operations (`!`, `and`, `or`, `xor`).
    Bool(bool),
    /// A string value.
    Str(Rc<str>),
    /// An array of `Value` elements.
    Array(Rc<Vec<Self>>),
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(Rc::from(v))
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::Array(Rc::new(v))
    }
}

impl Value {
    /// Converts the value to an `f64`, or returns an error if not numeric.
    ///
    /// Accepts `Value::Real` and `Value::Integer`.
    /// For integers, conversion fails if the value is too large to be
    /// represented as `f64` exactly.
    ///
    /// # Parameters
    /// - `line`: Source line number for error reporting.
    ///
    /// # Returns
    /// - `Ok(f64)`: If value is real or a safe integer.
    /// - `Err(RuntimeError::ExpectedNumber | LiteralTooLarge)`: If not
    ///   numeric or not representable.
    ///
    /// # Example
    /// ```
    /// use evalscope::Value;
    ///
    /// let x = Value::Integer(10);
    /// let real = x.as_real(42).unwrap();
    ///
    /// assert_eq!(real, 10.0);
    /// ```
    pub fn as_real(&self, line: usize) -> EvalResult<f64> {
        match self {
            Self::Real(r) => Ok(*r),
            Self::Integer(n) => Ok(i64_to_f64_checked(*n, RuntimeError::LiteralTooLarge { line })?),
            _ => Err(RuntimeError::ExpectedNumber { line }),
        }
    }
    /// Converts the value to `bool`, or returns an error if not boolean.
    ///
    /// Used for logical operations. There is no implicit truthiness; only
    /// `Value::Bool` qualifies.
    ///
    /// # Parameters
    /// - `line`: Source line number for error reporting.
    ///
    /// # Returns
    /// - `Ok(bool)`: The boolean value.
    /// - `Err(RuntimeError::ExpectedBoolean)`: If not boolean.
    pub const fn as_bool(&self, line: usize) -> EvalResult<bool> {
        match self {
            Self::Bool(b) => Ok(*b),
            _ => Err(RuntimeError::ExpectedBoolean { line }),
        }
    }
    /// Converts the value to a vector of values, or returns an error if not
    /// an array.
    ///
    /// # Parameters
    /// - `line`: Source line number for error reporting.
    ///
    /// # Returns
    /// - `Ok(&Vec<Value>)`: If the value is an array.
    /// - `Err(RuntimeError::ExpectedArray)`: If not an array.
    pub fn as_vec(&self, line: usize) -> EvalResult<&Vec<Self>> {
        match self {
            Self::Array(v) => Ok(v),
            _ => Err(RuntimeError::ExpectedArray { line }),
        }
    }
    /// Promotes an integer to a real value for mixed math, or returns values
    /// as-is if already matching.
    ///
    /// - If one side is an integer and the other is a real, the integer is
    ///   converted to a real.
    /// - Otherwise, both values are returned unchanged.
    ///
    /// # Parameters
    /// - `other`: The value to promote with.
    /// - `line`: Source line number for error reporting.
    ///
    /// # Returns
    /// - `Ok((Self, Self))`: Promoted values.
    /// - `Err(RuntimeError)`: If conversion fails.
    pub fn promote_to_real(self, other: &Self, line: usize) -> EvalResult<(Self, Self)> {
        use Value::{Integer, Real};

        match (&self, other) {
            (Real(_), Integer(_)) => Ok((self, Self::Real(other.as_real(line)?))),
            (Integer(_), Real(_)) => Ok((Real(self.as_real(line)?), other.clone())),
            _ => Ok((self, other.clone())),
        }
    }
    /// Converts a [`Value`] to an `i64`, performing safe conversion if
    /// necessary.
    ///
    /// - Accepts `Value::Integer` directly.
    /// - Converts `Value::Real` to `i64` if the value is finite, within the
    ///   `i64` range, and not fractional.
    /// - Returns an error if the value is not numeric or if conversion would
    ///   lose precision.
    ///
    /// # Parameters
    /// - `line`: Source line number for error reporting.
    ///
    /// # Returns
    /// - `Ok(i64)`: The integer value if conversion succeeds.
    /// - `Err(RuntimeError)`: If the value is not numeric or cannot be safely
    ///   converted.
    ///
    /// # Example
    /// ```
    /// use evalscope::Value;
    ///
    /// let int_val = Value::Integer(42);
    /// assert_eq!(int_val.value_to_i64(1).unwrap(), 42);
    ///
    /// let real_val = Value::Real(10.0);
    /// assert_eq!(real_val.value_to_i64(1).unwrap(), 10);
    ///
    /// let non_int_val = Value::Real(1.23);
    /// assert!(non_int_val.value_to_i64(1).is_err());
    /// ```
    pub fn value_to_i64(&self, line: usize) -> EvalResult<i64> {
        match self {
            Self::Integer(i) => Ok(*i),
            Self::Real(r) => Ok(f64_to_i64_checked(*r, line)?),
            _ => Err(RuntimeError::ExpectedNumber { line }),
        }
    }
    /// Returns `true` if the value is [`Integer`].
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Self::Integer(..))
    }

    /// Returns `true` if the value is numeric ([`Integer`] or [`Real`]).
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::Integer(..) | Self::Real(..))
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Real(r) => write!(f, "{r}"),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Str(s) => write!(f, "{s}"),
            Self::Array(a) => {
                write!(f, "[")?;

                for (index, value) in a.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }

                    write!(f, "{value}")?;
                }

                write!(f, "]")
            },
        }
    }
}

impl From<&LiteralValue> for Value {
    fn from(lit: &LiteralValue) -> Self {
        match lit {
            LiteralValue::Real(n) => (*n).into(),
            LiteralValue::Integer(i) => (*i).into(),
            LiteralValue::Bool(b) => (*b).into(),
            LiteralValue::Str(s) => Self::Str(Rc::clone(s)),
        }
    }
}
