//! Runs programs straight from the parser, without static analysis, to pin
//! down runtime behavior the analyzer would otherwise reject first.

use plc::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{evaluator::Context, lexer::scan, parser::parse, value::core::Value},
};

fn run(source: &str) -> (Result<Value, RuntimeError>, String) {
    let program = parse(&scan(source).expect("source should scan")).expect("source should parse");
    let mut out = Vec::new();
    let result = Context::with_output(&mut out).execute(&program);
    (result, String::from_utf8(out).expect("output is UTF-8"))
}

fn value(source: &str) -> Value {
    run(source).0.unwrap_or_else(|e| panic!("program failed: {e}"))
}

fn error(source: &str) -> RuntimeError {
    match run(source).0 {
        Ok(value) => panic!("program returned {value} but was expected to fail"),
        Err(e) => e,
    }
}

fn returning(expr: &str) -> Value {
    value(&format!("FUN main() DO RETURN {expr}; END"))
}

#[test]
fn callees_see_the_callers_locals() {
    let source = "
        FUN peek(): Integer DO RETURN secret; END
        FUN main(): Integer DO
            LET secret = 42;
            RETURN peek();
        END";
    assert_eq!(value(source), Value::from(42));
}

#[test]
fn callee_locals_end_with_the_call() {
    // ... RETURN@22 leaked@23
    let source = "FUN set() DO LET leaked = 1; END FUN main(): Integer DO set(); RETURN leaked; END";
    assert_eq!(error(source),
               RuntimeError::UnknownVariable { name:  "leaked".to_string(),
                                               index: 23, });
}

#[test]
fn callees_may_assign_the_callers_locals() {
    let source = "
        FUN bump() DO n = n + 1; END
        FUN main(): Integer DO
            LET n = 2;
            bump();
            RETURN n;
        END";
    assert_eq!(value(source), Value::from(3));
}

#[test]
fn parameters_shadow_outer_names() {
    let source = "
        LET x = 1;
        FUN twice(x) DO RETURN x * 2; END
        FUN main(): Integer DO RETURN twice(5) + x; END";
    assert_eq!(value(source), Value::from(11));
}

#[test]
fn return_leaves_nested_loops() {
    let source = "
        FUN main(): Integer DO
            LET i = 0;
            WHILE TRUE DO
                i = i + 1;
                IF i == 5 DO RETURN i; END
            END
            RETURN 0;
        END";
    assert_eq!(value(source), Value::from(5));
}

#[test]
fn functions_without_return_yield_nil() {
    assert_eq!(value("FUN main() DO END"), Value::Nil);
    assert_eq!(value("FUN f() DO END FUN main() DO RETURN f(); END"), Value::Nil);
}

#[test]
fn main_must_exist() {
    assert_eq!(error("FUN helper() DO END"), RuntimeError::MissingMain);
    assert_eq!(error("FUN main(x) DO END"), RuntimeError::MissingMain);
}

#[test]
fn globals_are_evaluated_in_order() {
    let source = "VAR a = 2; VAR b = a * 3; VAR c; FUN main() DO print(c); RETURN b; END";
    let (result, output) = run(source);

    assert_eq!(result, Ok(Value::from(6)));
    assert_eq!(output, "NIL\n");
}

#[test]
fn mixed_numeric_operands_fail() {
    // RETURN@5 1@6 +@7
    assert!(matches!(error("FUN main() DO RETURN 1 + 1.0; END"),
                     RuntimeError::TypeError { index: 7, .. }));
    assert!(matches!(error("FUN main() DO RETURN 1 < 1.5; END"),
                     RuntimeError::TypeError { .. }));
    assert!(matches!(error("FUN main() DO RETURN TRUE + TRUE; END"),
                     RuntimeError::TypeError { .. }));
}

#[test]
fn list_offsets_are_bounds_checked() {
    // LIST@0 l@1 =@2 [@3 1@4 ]@5 ;@6 FUN@7 main@8 (@9 )@10 :@11 Integer@12
    // DO@13 RETURN@14 l@15
    assert_eq!(error("LIST l = [1]; FUN main(): Integer DO RETURN l[1]; END"),
               RuntimeError::IndexOutOfBounds { len:   1,
                                                found: "1".to_string(),
                                                index: 15, });
    assert!(matches!(error("LIST l = [1]; FUN main(): Integer DO RETURN l[-1]; END"),
                     RuntimeError::IndexOutOfBounds { ref found, .. } if found == "-1"));
    assert!(matches!(error("LIST l = [1]; FUN main(): Integer DO l[3] = 0; RETURN 0; END"),
                     RuntimeError::IndexOutOfBounds { len: 1, .. }));
}

#[test]
fn exponents_must_fit() {
    assert_eq!(returning("2 ^ 10"), Value::from(1024));
    assert_eq!(returning("-2 ^ 3"), Value::from(-8));
    assert!(matches!(error("FUN main() DO RETURN 2 ^ -1; END"),
                     RuntimeError::InvalidExponent { .. }));
    assert!(matches!(error("FUN main() DO RETURN 2 ^ 4294967296; END"),
                     RuntimeError::InvalidExponent { .. }));
}

#[test]
fn arithmetic() {
    assert_eq!(returning("7 / 2"), Value::from(3));
    assert_eq!(returning("-7 / 2"), Value::from(-3));
    assert_eq!(returning("1.0 / 4.0"), Value::from(0.25));
    assert_eq!(returning("2147483647 + 1"), Value::from(2_147_483_648_i64));
    assert!(matches!(error("FUN main() DO RETURN 1 / 0; END"),
                     RuntimeError::DivisionByZero { index: 7 }));
    assert!(matches!(error("FUN main() DO RETURN 1.0 / 0.0; END"),
                     RuntimeError::DivisionByZero { .. }));
}

#[test]
fn comparisons() {
    assert_eq!(returning("'a' < 'b'"), Value::from(true));
    assert_eq!(returning(r#""abc" > "abd""#), Value::from(false));
    assert_eq!(returning("TRUE > FALSE"), Value::from(true));
    assert_eq!(returning("[1, 2] == [1, 2]"), Value::from(true));
    assert_eq!(returning("1 == 1.0"), Value::from(false));
    assert_eq!(returning("NIL != NIL"), Value::from(false));
}

#[test]
fn logical_operators_only_evaluate_what_they_need() {
    assert_eq!(returning("FALSE && 1"), Value::from(false));
    assert_eq!(returning("TRUE || 1"), Value::from(true));
    assert!(matches!(error("FUN main() DO RETURN TRUE && 1; END"),
                     RuntimeError::ExpectedBoolean { .. }));
}

#[test]
fn logical_operators_need_their_unevaluated_operands() {
    let t = Value::from(true);

    assert!(matches!(Context::eval_binary(BinaryOperator::And, &t, &t, 3),
                     Err(RuntimeError::TypeError { index: 3, .. })));
    assert!(matches!(Context::eval_binary(BinaryOperator::Or, &t, &t, 3),
                     Err(RuntimeError::TypeError { .. })));
}

#[test]
fn strings_absorb_anything_added_to_them() {
    assert_eq!(returning(r#""x" + [1]"#), Value::from("x[1]"));
    assert_eq!(returning(r#"NIL + "!""#), Value::from("NIL!"));
    assert_eq!(returning(r#""" + 2.0"#), Value::from("2.0"));
}

#[test]
fn conditions_must_be_boolean_at_runtime() {
    assert!(matches!(error("FUN main() DO IF 1 DO END END"),
                     RuntimeError::ExpectedBoolean { index: 6 }));
}

#[test]
fn switch_evaluates_its_condition_once() {
    let source = r#"
        FUN pick(): Integer DO print("pick"); RETURN 2; END
        FUN main(): Integer DO
            SWITCH pick()
                CASE 1: print("one");
                CASE 2: print("two");
                DEFAULT print("other");
            END
            RETURN 0;
        END"#;
    assert_eq!(run(source).1, "pick\ntwo\n");
}

#[test]
fn switch_falls_back_to_default() {
    let source = r#"
        FUN main() DO
            SWITCH "b" CASE "a": RETURN 1; DEFAULT RETURN 2; END
        END"#;
    assert_eq!(value(source), Value::from(2));
}

#[test]
fn lists_are_shared_between_caller_and_callee() {
    let source = "
        FUN set-first(xs) DO xs[0] = 99; END
        FUN main(): Integer DO
            LET l = [1, 2];
            set-first(l);
            RETURN l[0];
        END";
    assert_eq!(value(source), Value::from(99));
}

#[test]
fn rebinding_a_list_variable_breaks_the_alias() {
    let source = "
        FUN main() DO
            LET a = [1];
            LET b = a;
            a = [2];
            RETURN b;
        END";
    assert_eq!(value(source), Value::from(vec![Value::from(1)]));
}

#[test]
fn unknown_functions() {
    assert_eq!(error("FUN main() DO RETURN nope(1); END"),
               RuntimeError::UnknownFunction { name:  "nope".to_string(),
                                               arity: 1,
                                               index: 6, });
    assert!(matches!(error("FUN main() DO print(); END"),
                     RuntimeError::UnknownFunction { arity: 0, .. }));
}
