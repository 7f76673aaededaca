/// End-to-end language tests
/// Demonstrates: Lexer → Parser → Interpreter working together
use minilang::lexer::Lexer;
use minilang::parser::Parser;
use minilang::runtime::{Interpreter, Value};
use minilang::{evaluate, parse, run, Error};

fn execute(source: &str) -> (Option<Value>, Vec<String>) {
    // Lex + Parse
    let mut parser = Parser::new(Lexer::new(source)).unwrap();
    let program = parser.parse().unwrap();

    // Evaluate
    let mut interpreter = Interpreter::with_sink(Vec::new());
    let result = interpreter.interpret(&program).unwrap();

    (result, interpreter.into_sink())
}

fn number(source: &str) -> f64 {
    match execute(source).0 {
        Some(Value::Number(n)) => n,
        other => panic!("expected number from {:?}, got {:?}", source, other),
    }
}

#[test]
fn test_e2e_arithmetic_precedence() {
    assert_eq!(number("2 + 3 * 4"), 14.0);
    assert_eq!(number("(2 + 3) * 4"), 20.0);
    assert_eq!(number("10 - 2 * 3"), 4.0);
}

#[test]
fn test_e2e_reference_expressions() {
    let cases = [
        ("2 + 3", 5.0),
        ("5 - 2", 3.0),
        ("3 * 4", 12.0),
        ("10 / 2", 5.0),
        ("2 + 3 * 4", 14.0),
        ("(2 + 3) * 4", 20.0),
        ("10 - 2 * 3", 4.0),
    ];
    for (source, expected) in cases {
        assert_eq!(number(source), expected, "{}", source);
    }
}

#[test]
fn test_e2e_division_is_real_valued() {
    assert_eq!(number("10 / 4"), 2.5);
    assert_eq!(number("7 / 2 * 2"), 7.0);
}

#[test]
fn test_e2e_flattened_comparison_tier() {
    assert_eq!(execute("1 + 1 == 2").0, Some(Value::Boolean(true)));
    // (1 < 2) == 1 compares a boolean with a number
    assert_eq!(execute("1 < 2 == 1").0, Some(Value::Boolean(false)));
    // (3 > 2) + 1 adds a boolean to a number
    assert_eq!(number("3 > 2 + 1"), 2.0);
}

#[test]
fn test_e2e_flat_scope() {
    let (_, output) = execute(
        r#"
        let x = 1;
        while (x < 3) {
            let y = x;
            x = x + 1;
        }
        print y;
        "#,
    );
    assert_eq!(output, vec!["2"]);
}

#[test]
fn test_e2e_block_declarations_leak() {
    let (_, output) = execute("{ let inner = \"visible\" } if (1) { let other = 3 } print inner print other");
    assert_eq!(output, vec!["visible", "3"]);
}

#[test]
fn test_e2e_redeclaration() {
    let (_, output) = execute("let x = 1; let x = 2; print x;");
    assert_eq!(output, vec!["2"]);

    let (_, output) = execute("let x = 1; let x = \"now text\"; print x;");
    assert_eq!(output, vec!["now text"]);
}

#[test]
fn test_e2e_undefined_variables() {
    assert_eq!(
        run("x = 1").error,
        Some(Error::NameError {
            name: "x".to_string()
        })
    );
    assert_eq!(
        run("print y").error,
        Some(Error::NameError {
            name: "y".to_string()
        })
    );
}

#[test]
fn test_e2e_invalid_character() {
    assert_eq!(
        run("let x = @").error,
        Some(Error::LexError { character: '@' })
    );
}

#[test]
fn test_e2e_sum_loop() {
    let evaluation = evaluate(
        r#"let sum=0; let i=1; while (i<=5) { sum=sum+i; i=i+1; } print "Sum is:"; print sum;"#,
    );
    assert_eq!(evaluation.output_lines, vec!["Sum is:", "15"]);
    assert_eq!(evaluation.error, None);
}

#[test]
fn test_e2e_parse_is_deterministic() {
    let source = r#"
        let n = 10; let a = 0; let b = 1;
        while (n > 0) { let t = a + b; a = b; b = t; n = n - 1; }
        if (a == 55) print "fib ok" else print "fib broken"
    "#;
    assert_eq!(parse(source).unwrap(), parse(source).unwrap());
}

#[test]
fn test_e2e_fibonacci() {
    let (_, output) = execute(
        r#"
        let n = 10; let a = 0; let b = 1;
        while (n > 0) { let t = a + b; a = b; b = t; n = n - 1; }
        if (a == 55) print "fib ok" else print "fib broken"
        "#,
    );
    assert_eq!(output, vec!["fib ok"]);
}

#[test]
fn test_e2e_nested_while_and_strings() {
    let (_, output) = execute(
        r#"
        let row = 1;
        while (row <= 3) {
            let line = "";
            let col = 1;
            while (col <= row) { line = line + "*"; col = col + 1; }
            print line;
            row = row + 1;
        }
        "#,
    );
    assert_eq!(output, vec!["*", "**", "***"]);
}

#[test]
fn test_e2e_else_if_chain() {
    let source = |n: i32| {
        format!(
            r#"let n = {}
            if (n < 0) print "negative"
            else if (n == 0) print "zero"
            else print "positive""#,
            n
        )
    };
    assert_eq!(execute(&source(-4)).1, vec!["negative"]);
    assert_eq!(execute(&source(0)).1, vec!["zero"]);
    assert_eq!(execute(&source(9)).1, vec!["positive"]);
}

#[test]
fn test_e2e_syntax_errors() {
    for source in ["let 1 = 2", "print", "while (1 print 1", "{", "1 +", "x ="] {
        let outcome = run(source);
        assert!(
            matches!(outcome.error, Some(Error::SyntaxError { .. })),
            "{} should be a syntax error, got {:?}",
            source,
            outcome.error
        );
        assert_eq!(outcome.error.unwrap().to_string(), "Invalid syntax");
    }
}

#[test]
fn test_e2e_reserved_keywords_are_not_identifiers() {
    assert!(run("let for = 1").error.is_some());
    assert!(run("return 1").error.is_some());
}

#[test]
fn test_demo_scripts() {
    let sum = run(include_str!("../demos/sum.ml"));
    assert_eq!(sum.output, vec!["Sum is:", "15"]);

    let fizzbuzz = run(include_str!("../demos/fizzbuzz.ml"));
    assert_eq!(
        fizzbuzz.output,
        vec![
            "1", "2", "Fizz", "4", "Buzz", "Fizz", "7", "8", "Fizz", "Buzz", "11", "Fizz", "13",
            "14", "FizzBuzz",
        ]
    );
}

#[test]
fn test_e2e_exponent_number_display() {
    let outcome = run(
        "print 1000000000000000000000 * 1 print 1 / 10000000 print 100000000000000000000",
    );
    assert_eq!(outcome.output, vec!["1e+21", "1e-7", "100000000000000000000"]);
    assert_eq!(run("print 0 - 3 / 2000000").output, vec!["-0.0000015"]);
}

#[test]
fn test_e2e_vertical_tab_is_whitespace() {
    let outcome = run("let\x0Bx = 1 print x");
    assert!(outcome.is_ok(), "{:?}", outcome.error);
    assert_eq!(outcome.output, vec!["1"]);
}

#[test]
fn test_e2e_deep_nesting_is_a_syntax_error() {
    for source in [
        format!("{}1", "-".repeat(5_000)),
        format!("{}1{}", "(".repeat(5_000), ")".repeat(5_000)),
        format!("{}{}", "{".repeat(5_000), "}".repeat(5_000)),
        format!("{}print 1", "while (0) ".repeat(5_000)),
    ] {
        let outcome = run(&source);
        assert!(
            matches!(outcome.error, Some(Error::SyntaxError { .. })),
            "expected syntax error, got {:?}",
            outcome.error
        );
    }

    // Moderate nesting still runs
    let outcome = run(&format!("print {}7{}", "(".repeat(200), ")".repeat(200)));
    assert_eq!(outcome.output, vec!["7"]);
}
