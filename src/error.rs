/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of source
/// code. Parse errors include premature end of input, unbalanced parentheses,
/// and trailing garbage after a complete expression.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation. Runtime
/// errors include unbound variables, type mismatches, wrong argument counts,
/// and applications of values that are not procedures.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
