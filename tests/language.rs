use numera::{
    Environment, Error, Value,
    error::{ParseError, RuntimeError},
    evaluate_expression, process_script,
};

fn eval(source: &str) -> Result<Value, Error> {
    evaluate_expression(source, &Environment::new())
}

fn assert_value(source: &str, expected: Value) {
    match eval(source) {
        Ok(value) => assert_eq!(value, expected, "'{source}' evaluated to {value}"),
        Err(e) => panic!("'{source}' failed: {e}"),
    }
}

fn assert_close(source: &str, expected: f64) {
    match eval(source) {
        Ok(Value::Real(r)) => {
            assert!((r - expected).abs() < 1e-10, "'{source}' evaluated to {r}, expected {expected}");
        },
        Ok(value) => panic!("'{source}' evaluated to non-real {value}"),
        Err(e) => panic!("'{source}' failed: {e}"),
    }
}

fn assert_runtime_failure(source: &str) -> RuntimeError {
    match eval(source) {
        Ok(value) => panic!("'{source}' succeeded with {value} but was expected to fail"),
        Err(Error::Runtime(e)) => e,
        Err(e) => panic!("'{source}' failed with a non-runtime error: {e}"),
    }
}

fn assert_parse_failure(source: &str) -> ParseError {
    match eval(source) {
        Ok(value) => panic!("'{source}' succeeded with {value} but was expected to fail"),
        Err(Error::Parse(e)) => e,
        Err(e) => panic!("'{source}' failed with a non-parse error: {e}"),
    }
}

#[test]
fn literals_evaluate_to_themselves() {
    assert_value("42", Value::Integer(42));
    assert_value("2.5", Value::Real(2.5));
    assert_value("1e3", Value::Real(1000.0));
    assert_value(".5", Value::Real(0.5));
}

#[test]
fn arithmetic_precedence() {
    assert_value("3 + 5 * 2", Value::Integer(13));
    assert_value("(3 + 5) * 2", Value::Integer(16));
    assert_value("2 + 3 * 4 - 1", Value::Integer(13));
    assert_value("1 << 2 + 3", Value::Integer(32));
}

#[test]
fn division_is_always_true_division() {
    assert_value("7 / 2", Value::Real(3.5));
    assert_value("8 / 2", Value::Real(4.0));
}

#[test]
fn modulo_follows_sign_of_divisor() {
    assert_value("-7 % 3", Value::Integer(2));
    assert_value("7 % -3", Value::Integer(-2));
    assert_value("7 % 3", Value::Integer(1));
    assert_close("-7.5 % 3", 1.5);
}

#[test]
fn power_is_right_associative() {
    assert_value("2 ** 3 ** 2", Value::Integer(512));
    assert_value("2 ** 10", Value::Integer(1024));
    assert_close("2 ** -1", 0.5);
}

#[test]
fn unary_minus() {
    assert_value("-5", Value::Integer(-5));
    assert_value("--5", Value::Integer(5));
    assert_value("-2 ** 2", Value::Integer(-4));
    assert_value("3 - -2", Value::Integer(5));
}

#[test]
fn division_by_zero_fails() {
    assert!(matches!(assert_runtime_failure("1 / 0"), RuntimeError::DivisionByZero));
    assert!(matches!(assert_runtime_failure("1 % 0"), RuntimeError::DivisionByZero));
    assert!(matches!(assert_runtime_failure("0 ** -1"), RuntimeError::DivisionByZero));
    assert!(matches!(assert_runtime_failure("1.0 / 0.0"), RuntimeError::DivisionByZero));
}

#[test]
fn integer_overflow_is_an_error() {
    assert!(matches!(assert_runtime_failure("9223372036854775807 + 1"),
                     RuntimeError::DomainError { .. }));
    assert!(matches!(assert_runtime_failure("2 ** 64"), RuntimeError::DomainError { .. }));
}

#[test]
fn comparisons_produce_canonical_integers() {
    assert_value("3 > 1", Value::Integer(1));
    assert_value("3 < 1", Value::Integer(0));
    assert_value("3 == 3.0", Value::Integer(1));
    assert_value("3 != 3", Value::Integer(0));
    assert_value("2 <= 2", Value::Integer(1));
    assert_value("2 >= 3", Value::Integer(0));
}

#[test]
fn chained_comparisons_are_rejected() {
    assert_parse_failure("1 < 2 < 3");
}

#[test]
fn boolean_operators_evaluate_all_operands() {
    assert_value("1 and 2", Value::Integer(1));
    assert_value("0 or 0.0", Value::Integer(0));
    assert_value("0 or 3", Value::Integer(1));
    assert_value("1 and 2 and 0", Value::Integer(0));

    // No short-circuiting: the undefined name is still reported.
    assert!(matches!(assert_runtime_failure("0 and nope"),
                     RuntimeError::UndefinedVariable { .. }));
    assert!(matches!(assert_runtime_failure("1 or nope"),
                     RuntimeError::UndefinedVariable { .. }));
}

#[test]
fn bitwise_operators_are_integer_only() {
    assert_value("6 & 3", Value::Integer(2));
    assert_value("6 | 3", Value::Integer(7));
    assert_value("6 ^ 3", Value::Integer(5));
    assert_value("1 << 4", Value::Integer(16));
    assert_value("16 >> 2", Value::Integer(4));

    assert!(matches!(assert_runtime_failure("1.5 & 2"), RuntimeError::DomainError { .. }));
    assert!(matches!(assert_runtime_failure("1 << 2.5"), RuntimeError::DomainError { .. }));
    assert!(matches!(assert_runtime_failure("1 << -1"), RuntimeError::DomainError { .. }));
    assert!(matches!(assert_runtime_failure("1 << 64"), RuntimeError::DomainError { .. }));
}

#[test]
fn constants_are_seeded() {
    assert_value("pi", Value::Real(std::f64::consts::PI));
    assert_value("e", Value::Real(std::f64::consts::E));
    assert_value("c", Value::Integer(299_792_458));
    assert_close("g * 2", 19.6133);
}

#[test]
fn undefined_variables_fail() {
    let error = assert_runtime_failure("undefined_thing + 1");
    assert!(matches!(error, RuntimeError::UndefinedVariable { ref name } if name == "undefined_thing"));
}

#[test]
fn builtin_functions() {
    assert_close("sin(0)", 0.0);
    assert_close("cos(0)", 1.0);
    assert_close("sqrt(9)", 3.0);
    assert_close("exp(0)", 1.0);
    assert_close("log(e)", 1.0);
    assert_value("abs(-3)", Value::Integer(3));
    assert_close("abs(-2.5)", 2.5);
    assert_value("floor(2.7)", Value::Integer(2));
    assert_value("ceil(2.1)", Value::Integer(3));
    assert_value("factorial(5)", Value::Integer(120));
    assert_close("deg(pi)", 180.0);
    assert_close("rad(180)", std::f64::consts::PI);
}

#[test]
fn round_uses_ties_to_even() {
    assert_value("round(2.5)", Value::Integer(2));
    assert_value("round(3.5)", Value::Integer(4));
    assert_value("round(2.4)", Value::Integer(2));
}

#[test]
fn unknown_functions_fail() {
    let error = assert_runtime_failure("foo(1)");
    assert!(matches!(error, RuntimeError::UnknownFunction { ref name } if name == "foo"));

    // Names that would reach the host in a naive evaluator are just
    // unknown functions here.
    assert!(matches!(assert_runtime_failure("eval(1)"), RuntimeError::UnknownFunction { .. }));
    assert!(matches!(assert_runtime_failure("exec(1)"), RuntimeError::UnknownFunction { .. }));
}

#[test]
fn builtin_whitelist_is_exactly_the_supported_functions() {
    use numera::interpreter::evaluator::function::BUILTIN_FUNCTIONS;

    assert_eq!(BUILTIN_FUNCTIONS,
               &["sin", "cos", "tan", "exp", "sqrt", "log", "abs", "floor", "ceil", "round",
                 "deg", "rad", "factorial", "complex"][..]);

    // Every listed name is callable.
    let env = Environment::new();
    for name in BUILTIN_FUNCTIONS {
        assert!(evaluate_expression(&format!("{name}(1)"), &env).is_ok(),
                "builtin '{name}' rejected a plain argument");
    }
}

#[test]
fn negative_roots_widen_to_complex() {
    match eval("sqrt(-4)") {
        Ok(Value::Complex(c)) => {
            assert!(c.real.abs() < 1e-10);
            assert!((c.imaginary - 2.0).abs() < 1e-10);
        },
        other => panic!("sqrt(-4) produced {other:?}"),
    }

    assert!(matches!(eval("(-8) ** 0.5"), Ok(Value::Complex(_))));
    assert!(matches!(eval("log(-1)"), Ok(Value::Complex(_))));
}

#[test]
fn complex_arithmetic_collapses_to_real() {
    // sqrt(-4) is exactly 2i, so squaring it lands back on the real line.
    assert_value("sqrt(-4) * sqrt(-4)", Value::Real(-4.0));
    assert_value("complex(2) + complex(3)", Value::Real(5.0));
    assert_close("abs(complex(3) + sqrt(-16))", 5.0);
}

#[test]
fn complex_values_have_no_ordering() {
    assert!(matches!(assert_runtime_failure("sqrt(-1) < 2"), RuntimeError::DomainError { .. }));
    assert_value("sqrt(-1) == sqrt(-1)", Value::Integer(1));
    assert_value("sqrt(-1) != 2", Value::Integer(1));
}

#[test]
fn factorial_domain() {
    assert!(matches!(assert_runtime_failure("factorial(-1)"), RuntimeError::DomainError { .. }));
    assert!(matches!(assert_runtime_failure("factorial(1.5)"), RuntimeError::DomainError { .. }));
    assert_value("factorial(0)", Value::Integer(1));
}

#[test]
fn parse_errors() {
    assert!(matches!(assert_parse_failure(""), ParseError::UnexpectedEndOfInput));
    assert!(matches!(assert_parse_failure("3 +"), ParseError::UnexpectedEndOfInput));
    assert!(matches!(assert_parse_failure("(1 + 2"), ParseError::ExpectedClosingParen));
    assert!(matches!(assert_parse_failure("1 2"), ParseError::UnexpectedTrailingTokens { .. }));
    assert!(matches!(assert_parse_failure("x = 3"), ParseError::AssignmentInExpression));
    assert!(matches!(assert_parse_failure("1 @ 2"), ParseError::UnexpectedToken { .. }));

    let error = assert_parse_failure("log(1, 2)");
    assert!(matches!(error, ParseError::MultiArgumentCall { ref function } if function == "log"));
}

#[test]
fn script_round_trip() {
    let mut env = Environment::new();
    let records = process_script(&["x = 5", "y = x * 2", "y"], &mut env);

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].line, 3);
    assert_eq!(records[0].outcome.as_ref().unwrap(), &Value::Integer(10));
    assert_eq!(env.get("x"), Some(Value::Integer(5)));
    assert_eq!(env.get("y"), Some(Value::Integer(10)));
}

#[test]
fn comments_and_blank_lines_are_skipped() {
    let mut env = Environment::new();
    let records = process_script(&["# a comment", "", "   ", "1 + 1", "# trailing"], &mut env);

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].line, 4);
    assert_eq!(records[0].outcome.as_ref().unwrap(), &Value::Integer(2));
}

#[test]
fn falsy_conditional_skips_its_block() {
    let mut env = Environment::new();
    let records = process_script(&["x = 0", "if x", "    y = 1", "x"], &mut env);

    assert!(env.get("y").is_none());
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].line, 4);
    assert_eq!(records[0].outcome.as_ref().unwrap(), &Value::Integer(0));
}

#[test]
fn truthy_conditional_runs_its_block() {
    let mut env = Environment::new();
    process_script(&["x = 2", "if x > 1", "    y = x * 10"], &mut env);

    assert_eq!(env.get("y"), Some(Value::Integer(20)));
}

#[test]
fn while_loop_shares_one_environment() {
    let mut env = Environment::new();
    let records = process_script(&["x = 0", "while x < 3", "    x = x + 1", "x"], &mut env);

    assert_eq!(env.get("x"), Some(Value::Integer(3)));
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].outcome.as_ref().unwrap(), &Value::Integer(3));
}

#[test]
fn while_loop_records_body_expressions_each_iteration() {
    let mut env = Environment::new();
    let records = process_script(&["n = 0", "while n < 2", "    n = n + 1", "    n * 10"], &mut env);

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].outcome.as_ref().unwrap(), &Value::Integer(10));
    assert_eq!(records[1].outcome.as_ref().unwrap(), &Value::Integer(20));
}

#[test]
fn nested_blocks() {
    let mut env = Environment::new();
    process_script(&["x = 0",
                     "total = 0",
                     "while x < 4",
                     "    x = x + 1",
                     "    if x % 2 == 0",
                     "        total = total + x"],
                   &mut env);

    assert_eq!(env.get("total"), Some(Value::Integer(6)));
    assert_eq!(env.get("x"), Some(Value::Integer(4)));
}

#[test]
fn header_without_block_is_reported() {
    let mut env = Environment::new();
    let records = process_script(&["if 1", "1 + 1"], &mut env);

    assert_eq!(records.len(), 2);
    assert!(matches!(records[0].outcome,
                     Err(Error::Parse(ParseError::MissingBlock { .. }))));
    assert_eq!(records[1].outcome.as_ref().unwrap(), &Value::Integer(2));
}

#[test]
fn while_without_block_is_reported() {
    let mut env = Environment::new();
    let records = process_script(&["while 1", "1 + 1"], &mut env);

    assert_eq!(records.len(), 2);
    assert!(matches!(records[0].outcome,
                     Err(Error::Parse(ParseError::MissingBlock { .. }))));
    assert_eq!(records[1].outcome.as_ref().unwrap(), &Value::Integer(2));
}

#[test]
fn failed_condition_skips_block_and_continues() {
    let mut env = Environment::new();
    let records = process_script(&["if nope", "    x = 1", "2 + 2"], &mut env);

    assert!(env.get("x").is_none());
    assert_eq!(records.len(), 2);
    assert!(records[0].outcome.is_err());
    assert_eq!(records[1].outcome.as_ref().unwrap(), &Value::Integer(4));
}

#[test]
fn failing_while_condition_stops_the_loop() {
    let mut env = Environment::new();
    let records = process_script(&["while nope", "    x = 1", "2 + 2"], &mut env);

    // One error record for the header, then processing continues past the
    // body; the loop must terminate rather than spin on the failure.
    assert!(env.get("x").is_none());
    assert_eq!(records.len(), 2);
    assert!(records[0].outcome.is_err());
    assert_eq!(records[1].outcome.as_ref().unwrap(), &Value::Integer(4));
}

#[test]
fn failed_assignment_leaves_environment_untouched() {
    let mut env = Environment::new();
    let records = process_script(&["x = 1", "x = nope + 1", "x"], &mut env);

    assert_eq!(env.get("x"), Some(Value::Integer(1)));
    assert_eq!(records.len(), 2);
    match &records[0].outcome {
        Err(Error::Equation { line, .. }) => assert_eq!(line, "x = nope + 1"),
        other => panic!("expected an equation error, got {other:?}"),
    }
    assert_eq!(records[1].outcome.as_ref().unwrap(), &Value::Integer(1));
}

#[test]
fn equality_lines_are_not_assignments() {
    let mut env = Environment::new();
    env.set("x", Value::Integer(1));
    let records = process_script(&["x == 1"], &mut env);

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].outcome.as_ref().unwrap(), &Value::Integer(1));
    assert_eq!(env.get("x"), Some(Value::Integer(1)));
}

#[test]
fn assignment_rhs_may_contain_comparisons() {
    let mut env = Environment::new();
    process_script(&["flag = 3 > 2"], &mut env);
    assert_eq!(env.get("flag"), Some(Value::Integer(1)));
}

#[test]
fn constants_can_be_shadowed_in_scripts() {
    let mut env = Environment::new();
    let records = process_script(&["pi = 3", "pi * 2"], &mut env);

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].outcome.as_ref().unwrap(), &Value::Integer(6));
}

#[test]
fn errors_do_not_abort_the_script() {
    let mut env = Environment::new();
    let records = process_script(&["1 / 0", "2 + 2", "nope", "3 * 3"], &mut env);

    assert_eq!(records.len(), 4);
    assert!(records[0].outcome.is_err());
    assert_eq!(records[1].outcome.as_ref().unwrap(), &Value::Integer(4));
    assert!(records[2].outcome.is_err());
    assert_eq!(records[3].outcome.as_ref().unwrap(), &Value::Integer(9));
}

#[test]
fn evaluation_is_left_to_right() {
    // Both operands fail; the left one is the error reported.
    let error = assert_runtime_failure("(1 / 0) + nope");
    assert!(matches!(error, RuntimeError::DivisionByZero));
}
