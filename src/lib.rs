//! # schemette
//!
//! schemette is a minimal Scheme-like expression interpreter written in Rust.
//! It lexes, parses, and evaluates parenthesized prefix expressions with
//! support for closures, lexical scoping, and a set of builtin procedures.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::interpreter::{
    evaluator::core::Interpreter,
    lexer,
    parser::Parser,
    value::Value,
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` enum that represents the syntactic
/// structure of source code as a tree. The AST is built by the parser and
/// traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression types for all language constructs.
/// - Attaches source line numbers to AST nodes for error reporting.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing, parsing,
/// or evaluating code. It standardizes error reporting and carries detailed
/// information about failures, including error kinds, descriptions, and
/// source locations for debugging and user feedback.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches line numbers and detailed messages for context.
/// - Supports integration with standard error handling traits and reporting
///   utilities.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations, error handling, and all supporting infrastructure to
/// provide a complete runtime for source code evaluation. It exposes the
/// public API for interpreting and executing expressions.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Provides entry points for parsing and evaluating user code.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Returns the result of evaluating a single expression.
///
/// This function lexes and parses the provided source string into one
/// top-level expression and evaluates it in a fresh interpreter. Forms that
/// produce no value, such as a bare `define`, yield
/// [`Value::Unspecified`].
///
/// # Errors
/// Returns an error if lexing, parsing, or evaluation fails.
///
/// # Examples
/// ```
/// use schemette::{interpret, interpreter::value::Value};
///
/// let result = interpret("(+ 2 2)").unwrap();
/// assert_eq!(result, Value::Number(4.0));
///
/// // Example with an intentional error (unbound variable).
/// assert!(interpret("(+ x 1)").is_err());
/// ```
pub fn interpret(source: &str) -> Result<Value, Box<dyn std::error::Error>> {
    let tokens = lexer::lex(source)?;
    let expr = Parser::new(&tokens).parse()?;

    let interpreter = Interpreter::new();

    interpreter.run(&expr).map_err(Into::into)
}
