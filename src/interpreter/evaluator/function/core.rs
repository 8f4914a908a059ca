use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            function::{builtin, clamp, min_max},
        },
        value::core::Value,
    },
};

/// Type alias for builtin function handlers.
///
/// A builtin receives a slice of evaluated argument values and the line
/// number. It returns a value wrapped in `EvalResult`.
type BuiltinFn = fn(&[Value], usize) -> EvalResult<Value>;

/// Specifies the allowed number of arguments for a builtin.
#[derive(Clone, Copy)]
enum Arity {
    Exact(usize),
}

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name,
/// - an arity specification,
/// - a function pointer implementing the builtin.
///
/// The macro produces:
/// - `BuiltinDef` (internal metadata),
/// - `BUILTIN_TABLE` (static table for lookup),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
///
/// This table is the entire second tier of name resolution: nothing outside
/// it is reachable from an expression.
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        struct BuiltinDef {
            name:  &'static str,
            arity: Arity,
            func:  BuiltinFn,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, arity: $arity, func: $func },
            )*
        ];
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "min"   => { arity: Arity::Exact(2), func: |args, line| min_max::min_max("min", args, line) },
    "max"   => { arity: Arity::Exact(2), func: |args, line| min_max::min_max("max", args, line) },
    "abs"   => { arity: Arity::Exact(1), func: builtin::abs },
    "sign"  => { arity: Arity::Exact(1), func: builtin::sign },
    "floor" => { arity: Arity::Exact(1), func: |args, line| builtin::unary_round("floor", args, line) },
    "ceil"  => { arity: Arity::Exact(1), func: |args, line| builtin::unary_round("ceil", args, line) },
    "round" => { arity: Arity::Exact(1), func: |args, line| builtin::unary_round("round", args, line) },
    "trunc" => { arity: Arity::Exact(1), func: builtin::trunc },
    "sqrt"  => { arity: Arity::Exact(1), func: builtin::sqrt },
    "clamp" => { arity: Arity::Exact(3), func: clamp::clamp },
    "len"   => { arity: Arity::Exact(1), func: builtin::len },
}

impl Arity {
    /// Tests whether the given argument count satisfies this arity
    /// constraint.
    ///
    /// Returns `true` if the count is permitted, `false` otherwise.
    const fn check(&self, n: usize) -> bool {
        match self {
            Self::Exact(m) => n == *m,
        }
    }
}

impl Context<'_> {
    /// Dispatches a function call by name.
    ///
    /// Resolution is scope-first: a scope entry with the callee's name
    /// shadows any builtin, and since scope entries are data rather than
    /// callables, calling one is a `NotCallable` error. Otherwise the name
    /// is looked up in the builtin table, its arity is verified, and the
    /// builtin executes. Names in neither tier are unknown.
    ///
    /// # Parameters
    /// - `name`: Function name.
    /// - `arg_vals`: Evaluated argument values.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// The function result or an error if lookup or arity fails.
    pub(crate) fn eval_function(&self,
                                name: &str,
                                arg_vals: &[Value],
                                line: usize)
                                -> EvalResult<Value> {
        if self.scope_contains(name) {
            return Err(RuntimeError::NotCallable { name: name.to_string(),
                                                   line });
        }

        if let Some(builtin) = BUILTIN_TABLE.iter().find(|b| b.name == name) {
            if !builtin.arity.check(arg_vals.len()) {
                return Err(RuntimeError::ArgumentCountMismatch { name: name.to_string(),
                                                                 line });
            }
            return (builtin.func)(arg_vals, line);
        }

        Err(RuntimeError::UnknownFunction { name: name.to_string(),
                                            line })
    }
}

/// Tests whether `name` belongs to the built-in whitelist.
///
/// # Example
/// ```
/// use evalscope::interpreter::evaluator::function::core::is_builtin;
///
/// assert!(is_builtin("max"));
/// assert!(!is_builtin("eval"));
/// ```
#[must_use]
pub fn is_builtin(name: &str) -> bool {
    BUILTIN_FUNCTIONS.contains(&name)
}
