use std::fs;

use plc::{interpreter::value::core::Value, run_with_output};
use walkdir::WalkDir;

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, code) in extract_plc_blocks(&content).into_iter().enumerate() {
            count += 1;
            if let Err(e) = run_with_output(&code, std::io::sink()) {
                panic!("Example {} in {:?} failed:\n{}\nError: {}", i + 1, path, code, e);
            }
        }
    }

    assert!(count > 0, "No plc examples found in book/src");
}

fn extract_plc_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```plc") {
            inside = true;
            buf.clear();
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            blocks.push(buf.clone());
            continue;
        }
        if inside {
            buf.push_str(line);
            buf.push('\n');
        }
    }

    blocks
}

fn run_capture(src: &str) -> (Value, String) {
    let mut out = Vec::new();
    let value = run_with_output(src, &mut out).unwrap_or_else(|e| panic!("Script failed: {e}"));
    (value, String::from_utf8(out).expect("output is UTF-8"))
}

fn assert_success(src: &str) {
    run_capture(src);
}

fn assert_failure(src: &str) {
    if run_with_output(src, std::io::sink()).is_ok() {
        panic!("Script succeeded but was expected to fail")
    }
}

fn assert_output(src: &str, expected: &str) {
    let (_, output) = run_capture(src);
    assert_eq!(output, expected);
}

#[test]
fn integer_division_truncates() {
    let (value, _) = run_capture("LET x = 5; LET y = 2; FUN main(): Integer DO RETURN x / y; END");
    assert_eq!(value, Value::from(2));
}

#[test]
fn plus_concatenates_strings() {
    assert_output(r#"LET s = "a" + 1; FUN main(): Integer DO print(s); RETURN 0; END"#, "a1\n");
    assert_output(r#"FUN main(): Integer DO print(1.5 + "!"); RETURN 0; END"#, "1.5!\n");
}

#[test]
fn list_assignment_is_visible_through_aliases() {
    let src = "
        LIST l = [1, 2, 3];
        FUN main(): Integer DO
            LET alias = l;
            l[1] = 9;
            print(alias[1]);
            RETURN l[1];
        END";
    let (value, output) = run_capture(src);

    assert_eq!(value, Value::from(9));
    assert_eq!(output, "9\n");
}

#[test]
fn switch_runs_only_the_matching_case() {
    let src = r#"
        VAR x: Integer = 1;
        FUN main(): Integer DO
            SWITCH x
                CASE 1: print("one");
                CASE 2: print("two");
                DEFAULT: print("other");
            END
            RETURN 0;
        END"#;
    assert_output(src, "one\n");
}

#[test]
fn switch_falls_back_to_default() {
    let src = r#"
        FUN main(): Integer DO
            LET c = 'z';
            SWITCH c
                CASE 'a': print("a");
                DEFAULT print("default");
            END
            RETURN 0;
        END"#;
    assert_output(src, "default\n");
}

#[test]
fn integer_literals_are_limited_to_32_bits() {
    assert_failure("VAL big = 2147483648; FUN main(): Integer DO RETURN 0; END");
    assert_success("VAL big = 2147483647; FUN main(): Integer DO RETURN 0; END");
    assert_success("VAL small = -2147483648; FUN main(): Integer DO RETURN 0; END");
}

#[test]
fn arithmetic_may_exceed_literal_range() {
    let (value, _) = run_capture("FUN main(): Integer DO RETURN 2147483647 * 4; END");
    assert_eq!(value, Value::from(8_589_934_588_i64));
}

#[test]
fn division_by_zero_fails() {
    assert_failure("FUN main(): Integer DO RETURN 5 / 0; END");
    assert_failure("FUN main(): Integer DO LET d = 5.0 / 0.0; RETURN 0; END");
}

#[test]
fn main_is_required() {
    assert_failure("FUN helper(): Integer DO RETURN 1; END");
    assert_failure("FUN main() DO END");
    assert_failure("FUN main(): Decimal DO RETURN 1.0; END");
    assert_failure("FUN main(x: Integer): Integer DO RETURN x; END");
}

#[test]
fn recursion() {
    let src = "
        FUN fact(n: Integer): Integer DO
            IF n < 2 DO
                RETURN 1;
            ELSE
                RETURN n * fact(n - 1);
            END
        END
        FUN main(): Integer DO
            RETURN fact(20);
        END";
    let (value, _) = run_capture(src);
    assert_eq!(value, Value::from(2_432_902_008_176_640_000_i64));
}

#[test]
fn while_loop_accumulates() {
    let src = "
        FUN main(): Integer DO
            LET i = 0;
            LET total = 0;
            WHILE i < 5 DO
                total = total + i;
                i = i + 1;
            END
            RETURN total;
        END";
    let (value, _) = run_capture(src);
    assert_eq!(value, Value::from(10));
}

#[test]
fn logical_operators_short_circuit() {
    let src = r#"
        FUN boom(): Boolean DO
            RETURN 1 / 0 == 0;
        END
        FUN main(): Integer DO
            IF FALSE && boom() DO print("no"); END
            IF TRUE || boom() DO print("yes"); END
            RETURN 0;
        END"#;
    assert_output(src, "yes\n");
}

#[test]
fn precedence_and_associativity() {
    let (value, _) = run_capture("FUN main(): Integer DO RETURN 1 + 2 * 3 - 4; END");
    assert_eq!(value, Value::from(3));

    let (value, _) = run_capture("FUN main(): Integer DO RETURN 2 ^ 3 ^ 2; END");
    assert_eq!(value, Value::from(64));

    let (value, _) = run_capture("FUN main(): Integer DO RETURN 10 - 4 - 3; END");
    assert_eq!(value, Value::from(3));
}

#[test]
fn print_formats_values() {
    let src = r"
        FUN main(): Integer DO
            print(1.0);
            print(1.0 / 4.0);
            print(NIL);
            print(TRUE);
            print('c');
            print([1, 2]);
            print(-7);
            RETURN 0;
        END";
    assert_output(src, "1.0\n0.25\nNIL\ntrue\nc\n[1, 2]\n-7\n");
}

#[test]
fn nested_declarations_shadow_outer_ones() {
    let src = "
        FUN main(): Integer DO
            LET x = 1;
            IF TRUE DO
                LET x = 2;
                print(x);
            END
            RETURN x;
        END";
    let (value, output) = run_capture(src);

    assert_eq!(value, Value::from(1));
    assert_eq!(output, "2\n");
}

#[test]
fn immutable_globals_cannot_be_assigned() {
    assert_failure("VAL x = 1; FUN main(): Integer DO x = 2; RETURN x; END");
    assert_success("VAR x = 1; FUN main(): Integer DO x = 2; RETURN x; END");
}

#[test]
fn declarations_are_type_checked() {
    assert_failure(r#"VAR x: Integer = "s"; FUN main(): Integer DO RETURN 0; END"#);
    assert_failure("VAR x; FUN main(): Integer DO RETURN 0; END");
    assert_success("VAR x: Comparable = 'c'; FUN main(): Integer DO RETURN 0; END");
    assert_success("VAR x: Any = NIL; FUN main(): Integer DO RETURN 0; END");
}

#[test]
fn calls_are_checked_against_signatures() {
    let f = "FUN f(x: Integer): Integer DO RETURN x; END ";

    assert_success(&format!("{f}FUN main(): Integer DO RETURN f(1); END"));
    assert_failure(&format!("{f}FUN main(): Integer DO RETURN f(\"s\"); END"));
    assert_failure(&format!("{f}FUN main(): Integer DO RETURN f(1, 2); END"));
}

#[test]
fn functions_must_be_declared_before_use() {
    assert_failure("FUN main(): Integer DO RETURN f(); END FUN f(): Integer DO RETURN 1; END");
    assert_success("FUN f(): Integer DO RETURN 1; END FUN main(): Integer DO RETURN f(); END");
}

#[test]
fn phases_stop_at_the_first_error() {
    // lexical
    assert_failure("FUN main(): Integer DO print(''); RETURN 0; END");
    // syntactic
    assert_failure("FUN main(): Integer DO RETURN 0 END");
    // semantic, even though running it would print first
    assert_failure("FUN main(): Integer DO print(1); RETURN TRUE; END");
}

#[test]
fn nothing_runs_when_analysis_fails() {
    let mut out = Vec::new();
    let result = run_with_output("FUN main(): Integer DO print(1); RETURN TRUE; END", &mut out);

    assert!(result.is_err());
    assert!(out.is_empty());
}

#[test]
fn errors_name_their_position() {
    let Err(e) = run_with_output("FUN main(): Integer DO RETURN y; END", std::io::sink()) else {
        panic!("undefined variable was accepted");
    };
    assert_eq!(e.to_string(), "Error at token 8: Variable 'y' is not defined.");
}
