/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, evaluates expressions, performs
/// arithmetic and logical operations, resolves names against the scope and
/// the built-in whitelist, and produces results.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Resolves variables and function calls with scope-first precedence.
/// - Reports runtime errors such as division by zero or invalid operations.
pub mod evaluator;
/// The lexer module tokenizes an expression for further parsing.
///
/// The lexer (tokenizer) reads the raw expression text and produces a stream
/// of tokens, each corresponding to meaningful elements such as numbers,
/// identifiers, operators, and delimiters. This is the first stage of
/// evaluation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source location.
/// - Handles numeric, boolean, and string literals, identifiers, operators.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and
/// constructs an AST representing the syntactic structure of the expression.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes.
/// - Validates correct grammar and syntax, reporting errors with line info.
/// - Supports arithmetic, comparisons, function calls, and arrays.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares all the value types used during evaluation, such as
/// integers, floating-point numbers, booleans, strings, and arrays. It also
/// provides methods for type conversion and promotion, ensuring robust type
/// handling throughout evaluation.
///
/// # Responsibilities
/// - Defines the `Value` enum and all supported value variants.
/// - Implements methods for conversion and error checking.
/// - Provides safe promotion between numeric types (e.g., integer to real).
pub mod value;
