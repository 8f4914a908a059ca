use crate::{
    Scope,
    ast::Expr,
    error::RuntimeError,
    interpreter::value::core::Value,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the evaluation context for a single call.
///
/// The context borrows the caller's scope for the duration of one
/// evaluation. It holds no other state: the evaluator is stateless across
/// calls and never retains the borrow after the result is produced.
///
/// ## Usage
///
/// A `Context` is created per [`evaluate`](crate::evaluate) call. All
/// evaluation methods access it to resolve variable references and to apply
/// the scope-shadows-built-ins rule for function calls.
pub struct Context<'s> {
    /// The caller-supplied name-to-value mapping, read-only.
    scope: &'s Scope,
}

impl<'s> Context<'s> {
    /// Creates an evaluation context over the given scope.
    #[must_use]
    pub const fn new(scope: &'s Scope) -> Self {
        Self { scope }
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation.
    /// The evaluator dispatches based on expression variant:
    /// literals, variables, unary and binary operations, function calls,
    /// array literals, and array indexing.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    ///
    /// # Returns
    /// The computed [`Value`], or a `RuntimeError` on failure.
    pub fn eval(&self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Literal { value, .. } => Ok(Value::from(value)),
            Expr::Variable { name, line } => self.eval_variable(name, *line),
            Expr::UnaryOp { op, expr, line } => {
                let value = self.eval(expr)?;
                Self::eval_unary(*op, &value, *line)
            },
            Expr::BinaryOp { left, op, right, line } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                Self::eval_binary(*op, &left, &right, *line)
            },
            Expr::FunctionCall { name,
                                 arguments,
                                 line, } => self.eval_function_call(name, arguments, *line),
            Expr::ArrayLiteral { elements, .. } => self.eval_array_literal(elements),
            Expr::ArrayIndex { array, index, line } => {
                self.eval_array_index(array, index, *line)
            },
        }
    }

    /// Resolves a bare variable reference.
    ///
    /// Bare identifiers resolve against the scope only. Built-in names are
    /// callables, not values, so a scope entry named like a built-in shadows
    /// it, and a built-in name absent from the scope is an unknown variable
    /// when referenced without parentheses.
    ///
    /// # Parameters
    /// - `name`: The referenced name.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// The scope entry's value, or `RuntimeError::UnknownVariable`.
    fn eval_variable(&self, name: &str, line: usize) -> EvalResult<Value> {
        self.scope
            .get(name)
            .cloned()
            .ok_or_else(|| RuntimeError::UnknownVariable { name: name.to_string(),
                                                           line })
    }

    /// Evaluates a function call expression.
    ///
    /// Arguments are evaluated left to right before dispatch. Name
    /// resolution for the callee follows the scope-first rule implemented in
    /// `eval_function`.
    ///
    /// # Parameters
    /// - `name`: The callee name.
    /// - `arguments`: Unevaluated argument expressions.
    /// - `line`: Line number for error reporting.
    fn eval_function_call(&self, name: &str, arguments: &[Expr], line: usize) -> EvalResult<Value> {
        let arg_vals = arguments.iter()
                                .map(|arg| self.eval(arg))
                                .collect::<EvalResult<Vec<_>>>()?;

        self.eval_function(name, &arg_vals, line)
    }

    /// Evaluates an array literal by evaluating each element in order.
    fn eval_array_literal(&self, elements: &[Expr]) -> EvalResult<Value> {
        let values = elements.iter()
                             .map(|element| self.eval(element))
                             .collect::<EvalResult<Vec<_>>>()?;

        Ok(values.into())
    }

    /// Evaluates an array indexing expression.
    ///
    /// The indexed value must be an array and the index a non-negative
    /// integral number within bounds.
    ///
    /// # Errors
    /// - `ExpectedArray` if the indexed value is not an array.
    /// - `ExpectedNumber` / `LiteralTooSmall` for invalid index values.
    /// - `IndexOutOfBounds` if the index is past the end.
    fn eval_array_index(&self, array: &Expr, index: &Expr, line: usize) -> EvalResult<Value> {
        use crate::util::num::i64_to_usize_checked;

        let array_val = self.eval(array)?;
        let index_val = self.eval(index)?;

        let elements = array_val.as_vec(line)?;
        let index = i64_to_usize_checked(index_val.value_to_i64(line)?, line)?;

        elements.get(index)
                .cloned()
                .ok_or(RuntimeError::IndexOutOfBounds { max: elements.len().saturating_sub(1),
                                                        found: index,
                                                        line })
    }

    /// Tests whether `name` is bound in the scope.
    ///
    /// Used by function dispatch to enforce that scope entries shadow
    /// built-ins of the same name.
    #[must_use]
    pub(crate) fn scope_contains(&self, name: &str) -> bool {
        self.scope.contains_key(name)
    }
}
