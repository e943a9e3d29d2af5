/// The parsed representation of a program: an atom or a list of
/// sub-expressions.
///
/// `Expr` is a closed sum type with one case per atom kind plus `List` for
/// nested forms. Expressions are immutable once constructed; the evaluator
/// only ever borrows them, so the same tree can be evaluated repeatedly
/// against different environments.
///
/// Every variant carries the source line it was read from so that runtime
/// errors can point back at the offending form.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal, e.g. `42` or `3.14`.
    Number {
        /// The decoded floating-point value.
        value: f64,
        /// Line number in the source code.
        line:  usize,
    },
    /// A symbol, e.g. `x` or `+`. Resolved against the environment when
    /// evaluated.
    Symbol {
        /// The symbol's name, taken verbatim from the source.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// A string literal, e.g. `"dog"`. The quotes are not part of the value.
    Str {
        /// The decoded string contents.
        value: String,
        /// Line number in the source code.
        line:  usize,
    },
    /// A boolean literal: `#t` or `#f`.
    Bool {
        /// The decoded boolean value.
        value: bool,
        /// Line number in the source code.
        line:  usize,
    },
    /// A malformed-structure marker produced by the parser, e.g. for a stray
    /// closing parenthesis. Carried as data rather than raised immediately;
    /// evaluating it reports a runtime error.
    Error {
        /// Description of the structural problem.
        message: String,
        /// Line number in the source code.
        line:    usize,
    },
    /// A parenthesised form: zero or more sub-expressions in order.
    List {
        /// The sub-expressions, head first.
        items: Vec<Expr>,
        /// Line number of the opening parenthesis.
        line:  usize,
    },
}

impl Expr {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use schemette::ast::Expr;
    ///
    /// let expr = Expr::Symbol { name: "x".to_string(),
    ///                           line: 5, };
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Number { line, .. }
            | Self::Symbol { line, .. }
            | Self::Str { line, .. }
            | Self::Bool { line, .. }
            | Self::Error { line, .. }
            | Self::List { line, .. } => *line,
        }
    }
}
