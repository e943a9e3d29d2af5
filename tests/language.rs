use std::rc::Rc;

use schemette::{
    ast::Expr,
    interpret,
    interpreter::{
        evaluator::{builtin::BUILTIN_PROCEDURES, core::Interpreter},
        lexer::{self, Token},
        parser::Parser,
        value::Value,
    },
};

fn assert_number(src: &str, expected: f64) {
    match interpret(src) {
        Ok(Value::Number(n)) => {
            assert!((n - expected).abs() < f64::EPSILON,
                    "Expected {expected} but got {n} for: {src}");
        },
        Ok(other) => panic!("Expected a number but got {other} for: {src}"),
        Err(e) => panic!("Script failed: {e}"),
    }
}

fn assert_value(src: &str, expected: &Value) {
    match interpret(src) {
        Ok(value) => assert_eq!(&value, expected, "Wrong result for: {src}"),
        Err(e) => panic!("Script failed: {e}"),
    }
}

fn assert_failure(src: &str) {
    if interpret(src).is_ok() {
        panic!("Script succeeded but was expected to fail: {src}")
    }
}

#[test]
fn basic_arithmetic() {
    assert_number("(+ 2 2)", 4.0);
    assert_number("(+ 2 2 3 5)", 12.0);
    assert_number("(- 8 2 3 2)", 1.0);
    assert_number("(* 8 2 2)", 32.0);
    assert_number("(/ 10 4)", 2.5);
    assert_number("(/ 24 2 3)", 4.0);
    assert_number("(+)", 0.0);
    assert_number("(*)", 1.0);
}

#[test]
fn division_by_zero_is_infinite() {
    assert_value("(/ 1 0)", &Value::Number(f64::INFINITY));
    assert_value("(/ -1 0)", &Value::Number(f64::NEG_INFINITY));
}

#[test]
fn comparisons() {
    assert_value("(< 1 2)", &Value::Bool(true));
    assert_value("(< 2 1)", &Value::Bool(false));
    assert_value("(> 3 2)", &Value::Bool(true));
    assert_value("(= 2 2)", &Value::Bool(true));
    assert_value("(= 2 3)", &Value::Bool(false));
}

#[test]
fn define_and_reference() {
    assert_number("(begin (define x 4) x)", 4.0);
    assert_number("(begin (define x 4) (define y 5) (+ x y))", 9.0);
    assert_value("(define x 4)", &Value::Unspecified);
}

#[test]
fn conditionals() {
    assert_number("(if (< 1 2) 1 2)", 1.0);
    assert_number("(if #f 1 2)", 2.0);
    assert_value("(if #f 1)", &Value::Unspecified);
}

#[test]
fn everything_but_false_is_truthy() {
    assert_number("(if 0 1 2)", 1.0);
    assert_number("(if \"\" 1 2)", 1.0);
    assert_number("(if (quote ()) 1 2)", 1.0);
    assert_number("(if #t 1 2)", 1.0);
}

#[test]
fn lambda_application() {
    assert_number("((lambda (x y) (+ x y 1)) 5 6)", 12.0);
    assert_number("((lambda () 7))", 7.0);
    assert_number("(begin (define twice (lambda (f x) (f (f x)))) (twice (lambda (n) (* n 2)) 3))",
                  12.0);
}

#[test]
fn closures_capture_their_environment() {
    assert_number("(begin (define make-adder (lambda (n) (lambda (m) (+ n m)))) \
                   (define add3 (make-adder 3)) (add3 4))",
                  7.0);
}

#[test]
fn recursion_through_the_defining_scope() {
    assert_number("(begin (define count (lambda (n) (if (< n 1) 0 (+ n (count (- n 1)))))) \
                   (count 10))",
                  55.0);
}

#[test]
fn quote_prevents_evaluation() {
    assert_value("(quote (1 2 3))",
                 &Value::List(Rc::new(vec![Value::Number(1.0),
                                           Value::Number(2.0),
                                           Value::Number(3.0)])));
    assert_value("(quote hello)", &Value::Str("hello".to_string()));
    assert_value("(quote ())", &Value::List(Rc::new(vec![])));
}

#[test]
fn set_mutates_existing_bindings() {
    assert_number("(begin (define x 1) (set! x 5) x)", 5.0);
    assert_number("(begin (define x 1) ((lambda () (set! x 5))) x)", 5.0);
    assert_failure("(set! x 5)");
}

#[test]
fn list_operations() {
    assert_number("(len (list 1 2 3))", 3.0);
    assert_number("(car (list 4 5 6))", 4.0);
    assert_number("(car (cdr (list 4 5 6)))", 5.0);
    assert_value("(cdr (list 1))", &Value::List(Rc::new(vec![])));
    assert_value("(cdr (quote ()))", &Value::List(Rc::new(vec![])));
    assert_number("(len (cons 0 (list 1 2)))", 3.0);
    assert_number("(car (cons 9 (quote ())))", 9.0);
    assert_value("(null? (quote ()))", &Value::Bool(true));
    assert_value("(null? (list 1))", &Value::Bool(false));
    assert_failure("(car (quote ()))");
    assert_failure("(car 5)");
}

#[test]
fn apply_spreads_a_plain_argument_list() {
    assert_number("(apply + 1 2 3)", 6.0);
    assert_number("(apply (lambda (a b) (* a b)) 3 4)", 12.0);
    assert_failure("(apply 5 1)");
}

#[test]
fn string_append_concatenates_display_forms() {
    assert_value("(string-append \"foo\" \"bar\")", &Value::Str("foobar".to_string()));
    assert_value("(string-append \"n = \" 4)", &Value::Str("n = 4".to_string()));
    assert_value("(string-append)", &Value::Str(String::new()));
}

#[test]
fn runtime_errors() {
    assert_failure("nope");
    assert_failure("(1 2)");
    assert_failure("(+ 1 #t)");
    assert_failure("((lambda (x) x) 1 2)");
    assert_failure("(car (list 1) (list 2))");
}

#[test]
fn parse_errors() {
    assert_failure("");
    assert_failure("(");
    assert_failure("(+ 1 2");
    assert_failure(")");
    assert_failure("(+ 1 2) extra");
}

#[test]
fn an_open_string_runs_to_end_of_input() {
    assert_value("\"open", &Value::Str("open".to_string()));
}

#[test]
fn a_nul_byte_is_rejected_rather_than_truncating() {
    assert_failure("\0");
    assert_failure("(+ 1 2)\0(+ 3 4)");
}

#[test]
fn hash_names_longer_than_the_literals_are_symbols() {
    let tokens = lexer::lex("#true").unwrap();

    assert_eq!(tokens[0].0, Token::Symbol("#true".to_string()));
}

#[test]
fn parsing_preserves_atom_kinds_and_nesting() {
    let tokens = lexer::lex("(a (1 \"s\" #t) ())").unwrap();
    let expr = Parser::new(&tokens).parse().unwrap();

    let inner = Expr::List { items: vec![Expr::Number { value: 1.0,
                                                        line:  1, },
                                         Expr::Str { value: "s".to_string(),
                                                     line:  1, },
                                         Expr::Bool { value: true,
                                                      line:  1, }],
                             line:  1, };
    let expected = Expr::List { items: vec![Expr::Symbol { name: "a".to_string(),
                                                           line: 1, },
                                            inner,
                                            Expr::List { items: vec![],
                                                         line:  1, }],
                                line:  1, };

    assert_eq!(expr, expected);
}

#[test]
fn every_builtin_is_bound_in_the_root_environment() {
    let interpreter = Interpreter::new();
    let globals = interpreter.globals();

    for name in BUILTIN_PROCEDURES {
        let value = globals.borrow()
                           .lookup(name, 1)
                           .unwrap_or_else(|e| panic!("'{name}' is not bound: {e}"));

        assert!(matches!(value, Value::Builtin { .. }),
                "'{name}' is bound to something other than a builtin");
    }
}

#[test]
fn evaluation_is_idempotent() {
    let tokens = lexer::lex("(+ 2 (* 3 4))").unwrap();
    let expr = Parser::new(&tokens).parse().unwrap();

    let first = Interpreter::new().run(&expr).unwrap();
    let second = Interpreter::new().run(&expr).unwrap();

    assert_eq!(first, Value::Number(14.0));
    assert_eq!(first, second);
}

#[test]
fn an_interpreter_accumulates_definitions() {
    let interpreter = Interpreter::new();

    let tokens = lexer::lex("(define x 10)").unwrap();
    let define = Parser::new(&tokens).parse().unwrap();
    interpreter.run(&define).unwrap();

    let tokens = lexer::lex("(* x x)").unwrap();
    let square = Parser::new(&tokens).parse().unwrap();

    assert_eq!(interpreter.run(&square).unwrap(), Value::Number(100.0));
}

#[test]
fn multiline_scripts_report_useful_lines() {
    let source = "(begin\n(define x 1)\n(+ x y))";
    let error = interpret(source).unwrap_err().to_string();

    assert!(error.contains("line 3"), "Unexpected message: {error}");
    assert!(error.contains('y'), "Unexpected message: {error}");
}
