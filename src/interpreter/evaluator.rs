/// Core evaluation logic and context management.
///
/// Contains the main evaluation engine, the evaluation context holding the
/// borrowed scope, and name resolution.
pub mod core;

/// Unary operator evaluation.
///
/// Handles all operations that take a single operand, such as negation and
/// logical NOT.
pub mod unary;

/// Binary operator evaluation.
///
/// Implements evaluation for all binary operations, including arithmetic,
/// comparisons, and logical operators.
pub mod binary;

/// Function evaluation.
///
/// Handles built-in function calls, the closed whitelist, argument checking,
/// and return value computation.
pub mod function;

/// Utility functions for the evaluator.
///
/// Provides helpers, common checks, and reusable logic used during
/// expression evaluation.
pub mod utils;
