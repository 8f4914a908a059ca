/// Core function dispatch.
///
/// Holds the closed built-in whitelist, arity checking, and the
/// scope-shadows-built-ins resolution rule.
pub mod core;

/// Built-in function implementations.
///
/// Contains the single-argument numeric built-ins (`abs`, `sign`, rounding,
/// `sqrt`, `trunc`) and `len`.
pub mod builtin;
/// The `clamp` function implementation.
///
/// Restricts a value to a specified inclusive range.
pub mod clamp;
/// `min` and `max` function implementations.
///
/// Returns the smaller or larger of two numeric arguments.
pub mod min_max;
