/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of an
/// expression. Parse errors include syntax mistakes, unexpected tokens,
/// invalid literals, and any other issues detected before evaluation.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation. Runtime
/// errors include things like unresolved names, division by zero, type
/// mismatches, and failed numeric conversions.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// The single error kind surfaced by [`evaluate`](crate::evaluate).
///
/// Wraps the underlying failure so callers get one error type to match on
/// while the original cause stays reachable through
/// [`std::error::Error::source`].
#[derive(Debug)]
pub enum EvaluationError {
    /// The expression failed to lex or parse.
    Parse(ParseError),
    /// The expression parsed but faulted during evaluation.
    Runtime(RuntimeError),
}

impl std::fmt::Display for EvaluationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "Evaluation failed while parsing: {e}"),
            Self::Runtime(e) => write!(f, "Evaluation failed: {e}"),
        }
    }
}

impl std::error::Error for EvaluationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}

impl From<ParseError> for EvaluationError {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<RuntimeError> for EvaluationError {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}
