//! # evalscope
//!
//! evalscope evaluates a single expression string against a caller-supplied
//! variable scope. Names in the expression resolve first against the scope,
//! then against a closed set of built-in functions; nothing else is visible.
//! The crate provides scoping discipline, not a security sandbox.
//!
//! ```
//! use evalscope::{Scope, Value, evaluate};
//!
//! let mut scope = Scope::new();
//! scope.insert("a".to_string(), Value::Integer(2));
//! scope.insert("b".to_string(), Value::Integer(3));
//!
//! let result = evaluate("a + b", &scope).unwrap();
//! assert_eq!(result, Value::Integer(5));
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use std::collections::HashMap;

use logos::Logos;

use crate::{
    error::ParseError,
    interpreter::{
        evaluator::core::Context,
        lexer::{LexerExtras, Token},
        parser::core::parse_expression,
    },
};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and related types that represent the
/// syntactic structure of an expression as a tree. The AST is built by the
/// parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression node types for all supported constructs.
/// - Attaches source line numbers to AST nodes for error reporting.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while lexing, parsing,
/// or evaluating an expression, and the public [`EvaluationError`] wrapper
/// that carries the underlying cause to the caller.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches line numbers and detailed messages for diagnostics.
/// - Integrates with the standard `Error` trait so causes stay inspectable.
pub mod error;
/// Orchestrates the evaluation pipeline.
///
/// This module ties together lexing, parsing, evaluation, and value
/// representations to provide the complete machinery behind [`evaluate`].
///
/// # Responsibilities
/// - Coordinates the core components: lexer, parser, and evaluator.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities for safe numeric conversion.
///
/// This module provides conversion routines used throughout the parser and
/// evaluator, such as lossless conversions between `i64` and `f64`.
///
/// # Responsibilities
/// - Safely convert between `i64`, `u32`, `usize`, and `f64` without silent
///   data loss.
pub mod util;

pub use crate::{error::EvaluationError, interpreter::value::core::Value};

/// A flat mapping from variable names to values.
///
/// The scope is owned by the caller and borrowed read-only for the duration
/// of one [`evaluate`] call; the evaluator never retains a reference to it.
pub type Scope = HashMap<String, Value>;

/// Evaluates a single expression against the given scope.
///
/// Names appearing in `expression` resolve first against `scope`, then
/// against the built-in function whitelist (`max`, `min`, `abs`, ...). Scope
/// entries shadow built-ins of the same name; ambient bindings of any other
/// kind are invisible. The computed value is returned unwrapped.
///
/// # Errors
/// Returns an [`EvaluationError`] when the expression is empty or
/// syntactically invalid, references a name that is neither in `scope` nor a
/// built-in, or faults at runtime (division by zero, type mismatch, calling
/// a non-callable, ...). Errors are never swallowed or mapped to defaults.
///
/// # Examples
/// ```
/// use evalscope::{Scope, Value, evaluate};
///
/// let mut scope = Scope::new();
/// scope.insert("x".to_string(), Value::Integer(10));
/// scope.insert("y".to_string(), Value::Integer(20));
///
/// assert_eq!(evaluate("max(x, y)", &scope).unwrap(), Value::Integer(20));
///
/// // 'unknown' is neither in scope nor a built-in.
/// assert!(evaluate("unknown + 1", &scope).is_err());
/// ```
pub fn evaluate(expression: &str, scope: &Scope) -> Result<Value, EvaluationError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(expression, LexerExtras { line: 1 });

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            tokens.push((tok, lexer.extras.line));
        } else {
            let slice = lexer.slice();
            let line = lexer.extras.line;

            // A run of digits only fails to lex when it does not fit in i64.
            if !slice.is_empty() && slice.bytes().all(|b| b.is_ascii_digit()) {
                return Err(ParseError::LiteralTooLarge { line }.into());
            }
            return Err(ParseError::UnexpectedToken { token: slice.to_string(),
                                                     line }.into());
        }
    }

    if tokens.is_empty() {
        return Err(ParseError::EmptyExpression.into());
    }

    let mut iter = tokens.iter().peekable();

    let expr = parse_expression(&mut iter)?;

    if let Some((tok, line)) = iter.next() {
        return Err(ParseError::UnexpectedTrailingTokens { token: format!("{tok:?}"),
                                                          line:  *line, }.into());
    }

    let context = Context::new(scope);
    Ok(context.eval(&expr)?)
}
