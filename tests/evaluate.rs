use evalscope::{EvaluationError, Scope, Value, evaluate};

fn eval_ok(src: &str, scope: &Scope) -> Value {
    match evaluate(src, scope) {
        Ok(value) => value,
        Err(e) => panic!("Expression failed: {src}\nError: {e}"),
    }
}

fn assert_err(src: &str, scope: &Scope) {
    if evaluate(src, scope).is_ok() {
        panic!("Expression succeeded but was expected to fail: {src}")
    }
}

fn scope_of(entries: &[(&str, Value)]) -> Scope {
    entries.iter()
           .map(|(name, value)| ((*name).to_string(), value.clone()))
           .collect()
}

#[test]
fn basic_arithmetic() {
    let scope = Scope::new();

    assert_eq!(eval_ok("1 + 2", &scope), Value::Integer(3));
    assert_eq!(eval_ok("7 * 9", &scope), Value::Integer(63));
    assert_eq!(eval_ok("8 - 5", &scope), Value::Integer(3));
    assert_eq!(eval_ok("10 / 2", &scope), Value::Integer(5));
    assert_eq!(eval_ok("10 % 3", &scope), Value::Integer(1));
    assert_eq!(eval_ok("2 ^ 10", &scope), Value::Integer(1024));
}

#[test]
fn precedence_and_grouping() {
    let scope = Scope::new();

    assert_eq!(eval_ok("2 + 3 * 4", &scope), Value::Integer(14));
    assert_eq!(eval_ok("(2 + 3) * 4", &scope), Value::Integer(20));
    assert_eq!(eval_ok("2 ^ 3 ^ 2", &scope), Value::Integer(512));
    assert_eq!(eval_ok("-2 ^ 2", &scope), Value::Integer(4));
    assert_eq!(eval_ok("2 - 3 - 1", &scope), Value::Integer(-2));
}

#[test]
fn mixed_numeric_promotion() {
    let scope = Scope::new();

    assert_eq!(eval_ok("1 + 2.5", &scope), Value::Real(3.5));
    assert_eq!(eval_ok("5 / 2.0", &scope), Value::Real(2.5));
    assert_eq!(eval_ok("1 == 1.0", &scope), Value::Bool(true));
}

#[test]
fn scope_variables_resolve() {
    let scope = scope_of(&[("a", Value::Integer(2)),
                           ("b", Value::Integer(3)),
                           ("pi", Value::Real(3.125))]);

    assert_eq!(eval_ok("a + b", &scope), Value::Integer(5));
    assert_eq!(eval_ok("a * b - a", &scope), Value::Integer(4));
    assert_eq!(eval_ok("pi * 2", &scope), Value::Real(6.25));
}

#[test]
fn scope_sums_associate() {
    let scope = scope_of(&[("a", Value::Integer(11)),
                           ("b", Value::Integer(22)),
                           ("c", Value::Integer(33))]);

    assert_eq!(eval_ok("a + b + c", &scope), Value::Integer(66));
    assert_eq!(eval_ok("b * 2", &scope), Value::Integer(44));
}

#[test]
fn unknown_variable_is_error() {
    let scope = scope_of(&[("a", Value::Integer(1))]);

    assert_err("missing + 1", &scope);
    assert_err("a + missing", &scope);
}

#[test]
fn scope_is_not_mutated() {
    let scope = scope_of(&[("a", Value::Integer(1))]);
    let before = scope.clone();

    let _ = evaluate("a + 1", &scope);
    let _ = evaluate("a + missing", &scope);

    assert_eq!(scope, before);
}

#[test]
fn builtin_functions_work() {
    let scope = Scope::new();

    assert_eq!(eval_ok("max(1, 2)", &scope), Value::Integer(2));
    assert_eq!(eval_ok("min(1, 2)", &scope), Value::Integer(1));
    assert_eq!(eval_ok("max(1, 2.5)", &scope), Value::Real(2.5));
    assert_eq!(eval_ok("abs(-5)", &scope), Value::Integer(5));
    assert_eq!(eval_ok("sign(-42)", &scope), Value::Integer(-1));
    assert_eq!(eval_ok("sign(0)", &scope), Value::Integer(0));
    assert_eq!(eval_ok("floor(3.8)", &scope), Value::Real(3.0));
    assert_eq!(eval_ok("ceil(3.2)", &scope), Value::Real(4.0));
    assert_eq!(eval_ok("round(3.5)", &scope), Value::Real(4.0));
    assert_eq!(eval_ok("trunc(-3.9)", &scope), Value::Integer(-3));
    assert_eq!(eval_ok("sqrt(9)", &scope), Value::Real(3.0));
    assert_eq!(eval_ok("clamp(7, 0, 5)", &scope), Value::Integer(5));
    assert_eq!(eval_ok("len([1, 2, 3])", &scope), Value::Integer(3));
}

#[test]
fn builtin_arguments_are_expressions() {
    let scope = scope_of(&[("x", Value::Integer(10)), ("y", Value::Integer(20))]);

    assert_eq!(eval_ok("max(x + 1, y - 15)", &scope), Value::Integer(11));
    assert_eq!(eval_ok("clamp(x * y, 0, 100)", &scope), Value::Integer(100));
}

#[test]
fn scope_entry_shadows_builtin_in_value_position() {
    let scope = scope_of(&[("max", Value::Integer(5))]);

    assert_eq!(eval_ok("max", &scope), Value::Integer(5));
    assert_eq!(eval_ok("max + 1", &scope), Value::Integer(6));
}

#[test]
fn scope_entry_shadows_builtin_in_call_position() {
    let scope = scope_of(&[("max", Value::Integer(5))]);

    // The scope entry wins; data is not callable.
    assert_err("max(1, 2)", &scope);
}

#[test]
fn bare_builtin_name_is_not_a_value() {
    let scope = Scope::new();

    assert_err("max", &scope);
    assert_err("sqrt + 1", &scope);
}

#[test]
fn unknown_function_is_error() {
    let scope = Scope::new();

    assert_err("eval(1)", &scope);
    assert_err("frobnicate(1, 2)", &scope);
}

#[test]
fn wrong_builtin_arity_is_error() {
    let scope = Scope::new();

    assert_err("max(1)", &scope);
    assert_err("max(1, 2, 3)", &scope);
    assert_err("abs()", &scope);
    assert_err("clamp(1, 2)", &scope);
}

#[test]
fn sqrt_of_negative_is_error() {
    let scope = Scope::new();

    assert_err("sqrt(-1)", &scope);
    assert_err("sqrt(-0.5)", &scope);
}

#[test]
fn comparisons_and_logic() {
    let scope = Scope::new();

    assert_eq!(eval_ok("2 < 3", &scope), Value::Bool(true));
    assert_eq!(eval_ok("3 >= 3", &scope), Value::Bool(true));
    assert_eq!(eval_ok("2 != 3", &scope), Value::Bool(true));
    assert_eq!(eval_ok("true and false", &scope), Value::Bool(false));
    assert_eq!(eval_ok("true or false", &scope), Value::Bool(true));
    assert_eq!(eval_ok("true xor true", &scope), Value::Bool(false));
    assert_eq!(eval_ok("!false", &scope), Value::Bool(true));
    assert_eq!(eval_ok("1 < 2 and 2 < 3", &scope), Value::Bool(true));
}

#[test]
fn logic_requires_booleans() {
    let scope = Scope::new();

    assert_err("1 and true", &scope);
    assert_err("true or 0", &scope);
    assert_err("!1", &scope);
}

#[test]
fn strings_concatenate_and_compare() {
    let scope = scope_of(&[("name", Value::from("world"))]);

    assert_eq!(eval_ok(r#""hello " + name"#, &scope), Value::from("hello world"));
    assert_eq!(eval_ok(r#""abc" < "abd""#, &scope), Value::Bool(true));
    assert_eq!(eval_ok(r#""a" == "a""#, &scope), Value::Bool(true));
    assert_eq!(eval_ok(r#"len("hello")"#, &scope), Value::Integer(5));
}

#[test]
fn strings_reject_other_arithmetic() {
    let scope = Scope::new();

    assert_err(r#""a" - "b""#, &scope);
    assert_err(r#""a" * 2"#, &scope);
    assert_err(r#""1" + 1"#, &scope);
}

#[test]
fn arrays_and_indexing() {
    let scope = scope_of(&[("xs", Value::from(vec![Value::Integer(1),
                                                   Value::Integer(2),
                                                   Value::Integer(3)]))]);

    assert_eq!(eval_ok("xs[0]", &scope), Value::Integer(1));
    assert_eq!(eval_ok("xs[2]", &scope), Value::Integer(3));
    assert_eq!(eval_ok("[10, 20, 30][1]", &scope), Value::Integer(20));
    assert_eq!(eval_ok("[[1, 2], [3, 4]][1][0]", &scope), Value::Integer(3));
    assert_eq!(eval_ok("len(xs)", &scope), Value::Integer(3));
}

#[test]
fn index_out_of_bounds_is_error() {
    let scope = Scope::new();

    assert_err("[1, 2][2]", &scope);
    assert_err("[1, 2][-1]", &scope);
    assert_err("[][0]", &scope);
}

#[test]
fn division_by_zero_is_error() {
    let scope = Scope::new();

    assert_err("1 / 0", &scope);
    assert_err("1 % 0", &scope);
    assert_err("1.0 / 0", &scope);
    assert_err("1 / (2 - 2)", &scope);
}

#[test]
fn integer_overflow_is_error() {
    let scope = scope_of(&[("big", Value::Integer(i64::MAX))]);

    assert_err("big + 1", &scope);
    assert_err("big * 2", &scope);
    assert_err("2 ^ 64", &scope);
}

#[test]
fn builtin_whitelist_is_closed() {
    use evalscope::interpreter::evaluator::function::core::is_builtin;

    for name in ["min", "max", "abs", "sign", "floor", "ceil", "round", "trunc", "sqrt", "clamp",
                 "len"]
    {
        assert!(is_builtin(name), "{name} should be a built-in");
    }

    assert!(!is_builtin("eval"));
    assert!(!is_builtin("pow"));
    assert!(!is_builtin(""));
}

#[test]
fn array_equality_promotes_elements() {
    let scope = Scope::new();

    assert_eq!(eval_ok("[1, 2] == [1.0, 2.0]", &scope), Value::Bool(true));
    assert_eq!(eval_ok("[[1]] == [[1.0]]", &scope), Value::Bool(true));
    assert_eq!(eval_ok("[1] == [1, 2]", &scope), Value::Bool(false));
    assert_eq!(eval_ok("[1] != [2]", &scope), Value::Bool(true));
}

#[test]
fn oversized_integer_literal_is_error() {
    let scope = Scope::new();

    let err = evaluate("99999999999999999999", &scope).unwrap_err();
    assert!(matches!(err, EvaluationError::Parse(_)));
    assert!(err.to_string().contains("too large"), "got: {err}");

    assert_err("1 + 99999999999999999999", &scope);
}

#[test]
fn syntax_errors_are_reported() {
    let scope = scope_of(&[("a", Value::Integer(1))]);

    assert_err("a +", &scope);
    assert_err("(a + 1", &scope);
    assert_err("a + + b", &scope);
    assert_err("1 2", &scope);
    assert_err("", &scope);
    assert_err("   ", &scope);
}

#[test]
fn errors_carry_their_cause() {
    use std::error::Error;

    let scope = Scope::new();

    let parse = evaluate("1 +", &scope).unwrap_err();
    assert!(matches!(parse, EvaluationError::Parse(_)));
    assert!(parse.source().is_some());

    let runtime = evaluate("1 / 0", &scope).unwrap_err();
    assert!(matches!(runtime, EvaluationError::Runtime(_)));
    assert!(runtime.source().is_some());
}

#[test]
fn error_lines_follow_newlines() {
    let scope = Scope::new();

    let err = evaluate("1 +\nmissing", &scope).unwrap_err();
    assert!(err.to_string().contains("line 2"), "got: {err}");
}

#[test]
fn comments_are_skipped() {
    let scope = Scope::new();

    assert_eq!(eval_ok("1 + 2 // trailing comment", &scope), Value::Integer(3));
    assert_eq!(eval_ok("1 + /* inline */ 2", &scope), Value::Integer(3));
}

#[test]
fn evaluation_is_deterministic() {
    let scope = scope_of(&[("x", Value::Integer(10)), ("y", Value::Integer(20))]);

    let first = eval_ok("max(x, y) + min(x, y)", &scope);
    for _ in 0..10 {
        assert_eq!(eval_ok("max(x, y) + min(x, y)", &scope), first);
    }
}
