use plc::{
    ast::{BinaryOperator, Case, Expr, LiteralValue, Statement},
    error::AnalysisError,
    interpreter::{
        analyzer::{Analysis, Analyzer, analyze, expression::binary_type},
        environment::types::Type,
        lexer::scan,
        parser::parse,
    },
};

fn analyze_str(source: &str) -> Result<Analysis, AnalysisError> {
    let tokens = scan(source).expect("source should scan");
    analyze(&parse(&tokens).expect("source should parse"))
}

/// Analyzes `body` inside `FUN main(): Integer DO ... END`. The body starts
/// at token index 7.
fn check_main(body: &str) -> Result<Analysis, AnalysisError> {
    analyze_str(&format!("FUN main(): Integer DO {body} END"))
}

#[test]
fn globals_and_accesses_are_recorded() {
    // LET@0 x@1 =@2 5@3 ;@4 LET@5 s@6 =@7 "n"@8 +@9 x@10 ;@11
    // FUN@12 main@13 (@14 )@15 :@16 Integer@17 DO@18 RETURN@19 x@20 ;@21 END@22
    let analysis =
        analyze_str(r#"LET x = 5; LET s = "n" + x; FUN main(): Integer DO RETURN x; END"#).unwrap();

    assert_eq!(analysis.variables[&0].ty, Type::Integer);
    assert_eq!(analysis.variables[&5].ty, Type::String);
    assert_eq!(analysis.variables[&10].name, "x");
    assert_eq!(analysis.type_of(9), Some(Type::String));
    assert_eq!(analysis.type_of(20), Some(Type::Integer));
    assert_eq!(analysis.functions[&12].return_type, Type::Integer);
    assert!(analysis.variables[&0].mutable);
}

#[test]
fn assignability_is_reflexive_and_bounded_by_supertypes() {
    for target in Type::ALL {
        assert!(target.accepts(target), "{target} should accept itself");
        assert!(Type::Any.accepts(target));
        assert_eq!(Type::Comparable.accepts(target),
                   target.is_comparable() || target == Type::Comparable);

        for source in Type::ALL {
            if !matches!(target, Type::Any | Type::Comparable) {
                assert_eq!(target.accepts(source), target == source);
            }
        }
    }
}

#[test]
fn binary_operator_table() {
    for left in Type::ALL {
        for right in Type::ALL {
            let logical = binary_type(BinaryOperator::And, left, right);
            assert_eq!(logical.is_some(), left == Type::Boolean && right == Type::Boolean);

            let equal = binary_type(BinaryOperator::Equal, left, right);
            assert_eq!(equal, (left == right).then_some(Type::Boolean));
        }
    }

    assert_eq!(binary_type(BinaryOperator::Add, Type::Nil, Type::String), Some(Type::String));
    assert_eq!(binary_type(BinaryOperator::Mul, Type::Decimal, Type::Decimal), Some(Type::Decimal));
    assert_eq!(binary_type(BinaryOperator::Pow, Type::Decimal, Type::Integer), None);
    assert_eq!(binary_type(BinaryOperator::Div, Type::String, Type::String), None);
}

#[test]
fn operand_mismatch_points_at_the_operator() {
    assert_eq!(check_main("RETURN 1 + 1.0;"),
               Err(AnalysisError::InvalidOperands { operator: "+".to_string(),
                                                    left:     Type::Integer,
                                                    right:    Type::Decimal,
                                                    index:    9, }));
}

#[test]
fn groups_must_wrap_binary_expressions() {
    assert_eq!(check_main("RETURN (1);"), Err(AnalysisError::InvalidGroup { index: 8 }));
    assert!(check_main("RETURN (1 + 2) * 3;").is_ok());
}

#[test]
fn list_indices_must_be_integers() {
    // LIST@0 l@1 =@2 [@3 1@4 ]@5 ;@6 FUN@7 main@8 (@9 )@10 :@11 Integer@12
    // DO@13 RETURN@14 l@15 [@16 'a'@17
    assert_eq!(analyze_str("LIST l = [1]; FUN main(): Integer DO RETURN l['a']; END"),
               Err(AnalysisError::ExpectedInteger { found: Type::Character,
                                                    index: 17, }));
}

#[test]
fn list_elements_follow_the_container_type() {
    let main = "FUN main(): Integer DO RETURN 0; END";

    assert_eq!(analyze_str(&format!("LIST l = [1, 'c']; {main}")),
               Err(AnalysisError::ListElementMismatch { expected: Type::Integer,
                                                        found:    Type::Character,
                                                        index:    6, }));
    assert!(analyze_str(&format!("LIST l: Any = [1, 'c', NIL]; {main}")).is_ok());
    assert!(analyze_str(&format!("LIST l: Comparable = [TRUE]; {main}")).is_err());
    assert!(analyze_str(&format!("LIST l = []; {main}")).is_ok());
}

#[test]
fn only_any_lists_skip_the_element_check() {
    let main = "FUN main(): Integer DO RETURN 0; END";

    // LIST@0 l@1 :@2 Comparable@3 =@4 [@5 1@6
    assert_eq!(analyze_str(&format!(r#"LIST l: Comparable = [1, 'c', "s"]; {main}"#)),
               Err(AnalysisError::ListElementMismatch { expected: Type::Comparable,
                                                        found:    Type::Integer,
                                                        index:    6, }));
    assert!(matches!(check_main("LET l: Comparable = [1, 2.0]; RETURN 0;"),
                     Err(AnalysisError::ListElementMismatch { .. })));
    assert!(matches!(check_main("LET l: Decimal = [1.0, 2]; RETURN 0;"),
                     Err(AnalysisError::ListElementMismatch { found: Type::Integer, .. })));
    assert!(check_main("LET l: Any = [1, 2.0, 'c']; RETURN 0;").is_ok());
}

#[test]
fn if_statements() {
    assert_eq!(check_main("IF TRUE DO ELSE print(1); END RETURN 0;"),
               Err(AnalysisError::EmptyIfBranch { index: 7 }));
    assert!(check_main("IF TRUE DO print(1); END RETURN 0;").is_ok());
}

#[test]
fn conditions_must_be_boolean() {
    assert_eq!(check_main("WHILE 1 DO END RETURN 0;"),
               Err(AnalysisError::ConditionNotBoolean { found: Type::Integer,
                                                        index: 8, }));
    assert!(check_main("WHILE 1 < 2 && FALSE DO END RETURN 0;").is_ok());
}

#[test]
fn case_values_match_the_condition() {
    // SWITCH@7 1@8 CASE@9 'a'@10
    assert_eq!(check_main("SWITCH 1 CASE 'a': DEFAULT END RETURN 0;"),
               Err(AnalysisError::CaseTypeMismatch { expected: Type::Integer,
                                                     found:    Type::Character,
                                                     index:    10, }));
    assert!(check_main("SWITCH 1 CASE 2: CASE 3: DEFAULT END RETURN 0;").is_ok());
}

#[test]
fn return_types_must_match_exactly() {
    assert_eq!(check_main("RETURN 1.5;"),
               Err(AnalysisError::ReturnTypeMismatch { expected: Type::Integer,
                                                       found:    Type::Decimal,
                                                       index:    8, }));
    assert_eq!(check_main("RETURN;"),
               Err(AnalysisError::ReturnTypeMismatch { expected: Type::Integer,
                                                       found:    Type::Nil,
                                                       index:    7, }));
    assert!(analyze_str("FUN f(): Any DO RETURN 1; END FUN main(): Integer DO RETURN 0; END").is_err());
    assert!(analyze_str("FUN f() DO RETURN; END FUN main(): Integer DO RETURN 0; END").is_ok());
}

#[test]
fn declarations() {
    assert_eq!(check_main("LET x; RETURN 0;"),
               Err(AnalysisError::UntypedDeclaration { name:  "x".to_string(),
                                                       index: 7, }));
    assert_eq!(analyze_str("VAR x: Float = 1.0; FUN main(): Integer DO RETURN 0; END"),
               Err(AnalysisError::UnknownType { name:  "Float".to_string(),
                                                index: 0, }));
    assert!(matches!(check_main("LET x: Integer = 1.0; RETURN 0;"),
                     Err(AnalysisError::TypeMismatch { expected: Type::Integer,
                                                       found: Type::Decimal,
                                                       .. })));
}

#[test]
fn literal_ranges() {
    assert_eq!(check_main("RETURN 2147483648;"),
               Err(AnalysisError::IntegerOutOfRange { index: 8 }));
    assert!(check_main("RETURN -2147483648;").is_ok());

    let huge = format!("LET d = {}.0; RETURN 0;", "9".repeat(400));
    assert_eq!(check_main(&huge), Err(AnalysisError::DecimalOutOfRange { index: 10 }));
}

#[test]
fn block_locals_leave_scope() {
    // IF@7 TRUE@8 DO@9 LET@10 x@11 =@12 1@13 ;@14 END@15 RETURN@16 x@17
    assert_eq!(check_main("IF TRUE DO LET x = 1; END RETURN x;"),
               Err(AnalysisError::UndefinedVariable { name:  "x".to_string(),
                                                      index: 17, }));
}

#[test]
fn assignments() {
    // VAL@0 x@1 =@2 1@3 ;@4 FUN@5 main@6 (@7 )@8 :@9 Integer@10 DO@11 x@12
    assert_eq!(analyze_str("VAL x = 1; FUN main(): Integer DO x = 2; RETURN 0; END"),
               Err(AnalysisError::ImmutableAssignment { name:  "x".to_string(),
                                                        index: 12, }));
    assert_eq!(check_main("1 = 2; RETURN 0;"),
               Err(AnalysisError::InvalidAssignmentTarget { index: 7 }));
    assert!(check_main("LET x = 1; x = 'c'; RETURN 0;").is_err());
    assert!(analyze_str("LIST l = [1]; FUN main(): Integer DO l[0] = 2; RETURN l[0]; END").is_ok());
}

#[test]
fn untyped_parameters_accept_anything() {
    let analysis = analyze_str(r#"FUN show(x) DO print(x); END
                                  FUN main(): Integer DO show(1); show("s"); RETURN 0; END"#)
        .unwrap();

    assert_eq!(analysis.functions[&0].parameter_types, [Type::Any]);
    assert_eq!(analysis.functions[&0].return_type, Type::Nil);
}

#[test]
fn calls_are_checked() {
    // FUN@0 f@1 (@2 x@3 :@4 Integer@5 )@6 DO@7 END@8 FUN@9 main@10 (@11 )@12
    // :@13 Integer@14 DO@15 f@16 (@17 'c'@18
    assert_eq!(analyze_str("FUN f(x: Integer) DO END FUN main(): Integer DO f('c'); RETURN 0; END"),
               Err(AnalysisError::TypeMismatch { expected: Type::Integer,
                                                 found:    Type::Character,
                                                 index:    18, }));
    assert_eq!(check_main("print(1, 2); RETURN 0;"),
               Err(AnalysisError::UndefinedFunction { name:  "print".to_string(),
                                                      arity: 2,
                                                      index: 7, }));
}

#[test]
fn functions_see_themselves_and_earlier_functions() {
    assert!(analyze_str("FUN loop(n: Integer): Integer DO RETURN loop(n); END \
                         FUN main(): Integer DO RETURN loop(1); END")
        .is_ok());
    assert!(matches!(analyze_str("FUN main(): Integer DO RETURN later(); END \
                                  FUN later(): Integer DO RETURN 1; END"),
                     Err(AnalysisError::UndefinedFunction { .. })));
}

#[test]
fn main_requirements() {
    assert_eq!(analyze_str("FUN f(): Integer DO RETURN 0; END"), Err(AnalysisError::MissingMain));
    assert_eq!(analyze_str("FUN main(): Decimal DO RETURN 0.0; END"),
               Err(AnalysisError::InvalidMainReturnType { found: "Decimal".to_string() }));
    assert_eq!(analyze_str("FUN main(a): Integer DO RETURN 0; END"), Err(AnalysisError::MissingMain));
}

#[test]
fn return_outside_a_function() {
    let statement = Statement::Return { value: None,
                                        index: 3, };

    assert_eq!(Analyzer::new().visit_statement(&statement),
               Err(AnalysisError::ReturnOutsideFunction { index: 3 }));
}

#[test]
fn default_must_be_the_last_arm() {
    let literal = |index| Expr::Literal { value: LiteralValue::from(1),
                                          index };
    let statement = Statement::Switch { condition: literal(1),
                                        cases:     vec![Case { value: None,
                                                               body:  Vec::new(),
                                                               index: 2, },
                                                        Case { value: Some(literal(4)),
                                                               body:  Vec::new(),
                                                               index: 3, }],
                                        index:     0, };

    assert_eq!(Analyzer::new().visit_statement(&statement),
               Err(AnalysisError::MisplacedDefault { index: 2 }));
}
