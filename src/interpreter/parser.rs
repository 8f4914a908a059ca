/// Core parsing logic for expressions.
///
/// Contains the expression entry point and the shared parse result type.
pub mod core;

/// Binary operator parsing.
///
/// Implements the precedence-climbing levels for all binary operators,
/// including arithmetic, comparisons, and logical connectives.
pub mod binary;

/// Unary, primary, and postfix parsing.
///
/// Handles prefix operators, literals, identifiers, function calls,
/// groupings, array literals, and indexing.
pub mod unary;

/// Utility functions for the parser.
///
/// Provides helpers shared by argument lists and array literals.
pub mod utils;
