/// Binary operator dispatch.
///
/// Routes each operator to its specialized handler.
pub mod core;

/// Scalar arithmetic evaluation.
///
/// Handles `+`, `-`, `*`, `/` for integers, reals, and string
/// concatenation.
pub mod scalar;

/// Exponentiation evaluation.
///
/// Handles `^` with exact integer exponentiation where possible.
pub mod power;

/// Comparison evaluation.
///
/// Handles equality and relational operators with numeric promotion and
/// lexicographic string ordering.
pub mod comparison;

/// Logical operator evaluation.
///
/// Handles `and`, `or`, and `xor` on boolean operands.
pub mod logic;
