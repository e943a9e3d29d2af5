/// The evaluator module executes expression trees and computes values.
///
/// The evaluator walks the `Expr` tree against an environment, dispatches on
/// form shape (special forms vs. procedure application), and produces runtime
/// values. It is the core execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates atoms, special forms, and procedure applications.
/// - Creates call frames for closure invocations.
/// - Reports runtime errors such as unbound variables or bad applications.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens: parentheses, numbers, booleans, strings, and symbols. This is the
/// first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source lines.
/// - Decodes numeric, boolean, and string literals.
/// - Never fails on well-formed characters; malformed literals are decoded
///   best-effort and left for downstream consumers.
pub mod lexer;
/// The parser module builds the expression tree from tokens.
///
/// The parser (reader) processes the token stream produced by the lexer and
/// constructs the recursive `Expr` tree of atoms and nested lists. It has no
/// knowledge of semantics.
///
/// # Responsibilities
/// - Converts tokens into structured `Expr` nodes.
/// - Validates parenthesis balance, reporting errors with line info.
/// - Represents a stray leading `)` as an error-carrying node instead of
///   aborting the parse.
pub mod parser;
/// The environment module implements the variable-scope chain.
///
/// An environment is a mutable mapping from symbol names to values with an
/// optional link to an outer environment. Lookup delegates outward through
/// the chain; definition always writes locally; assignment mutates the
/// nearest frame that already holds the name.
///
/// # Responsibilities
/// - Defines the `Environment` frame and its chain operations.
/// - Shares frames between closures and call frames so that later mutations
///   are observed by every holder.
pub mod environment;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares all value types produced by evaluation: numbers,
/// booleans, strings, lists, builtin procedures, and closures. It also
/// provides conversion helpers and the printable representation of each
/// value.
///
/// # Responsibilities
/// - Defines the `Value` enum and all supported value variants.
/// - Implements type-checked accessors used by builtins and special forms.
/// - Defines closures and the builtin function signature.
pub mod value;
