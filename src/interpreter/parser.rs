use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::lexer::Token,
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Recursive-descent reader over an immutable token buffer.
///
/// The parser consumes tokens through a peekable cursor, never mutating the
/// buffer itself. It builds the recursive [`Expr`] tree: atoms become atom
/// nodes, and each `( ... )` group becomes a `List` of sub-expressions.
///
/// # Example
/// ```
/// use schemette::{ast::Expr, interpreter::{lexer::lex, parser::Parser}};
///
/// let tokens = lex("(+ 1 (2 3))").unwrap();
/// let expr = Parser::new(&tokens).parse().unwrap();
///
/// assert!(matches!(expr, Expr::List { .. }));
/// ```
pub struct Parser<'a> {
    tokens: Peekable<std::slice::Iter<'a, (Token, usize)>>,
    line:   usize,
}

impl<'a> Parser<'a> {
    /// Creates a parser positioned at the start of the token buffer.
    #[must_use]
    pub fn new(tokens: &'a [(Token, usize)]) -> Self {
        Parser { tokens: tokens.iter().peekable(),
                 line:   1, }
    }

    /// Parses one top-level expression and checks that nothing but the
    /// end-of-input sentinel follows it.
    ///
    /// The interpreter evaluates exactly one expression tree, so trailing
    /// tokens after a balanced top-level form are reported as an error.
    ///
    /// # Errors
    /// - `UnexpectedEndOfInput` if the buffer holds no expression.
    /// - `ExpectedClosingParen` if a list is still open at end of input.
    /// - `UnexpectedTrailingTokens` if tokens remain after the expression.
    pub fn parse(&mut self) -> ParseResult<Expr> {
        let expr = self.expression()?;

        match self.tokens.peek() {
            Some((Token::Eof, _)) | None => Ok(expr),
            Some((token, line)) => {
                Err(ParseError::UnexpectedTrailingTokens { token: format!("{token:?}"),
                                                           line:  *line, })
            },
        }
    }

    /// Parses the next expression: an atom or a parenthesised list.
    ///
    /// A `)` where an expression was expected is not a hard failure; it
    /// becomes an [`Expr::Error`] node carried as data, so the caller decides
    /// how to react (the evaluator reports it as a runtime error).
    fn expression(&mut self) -> ParseResult<Expr> {
        let Some((token, line)) = self.tokens.next() else {
            return Err(ParseError::UnexpectedEndOfInput { line: self.line });
        };
        self.line = *line;

        match token {
            Token::LParen => self.list(*line),
            Token::RParen => Ok(Expr::Error { message: "unexpected )".to_string(),
                                              line:    *line, }),
            Token::Eof => Err(ParseError::UnexpectedEndOfInput { line: *line }),
            Token::Number(value) => Ok(Expr::Number { value: *value,
                                                      line:  *line, }),
            Token::Bool(value) => Ok(Expr::Bool { value: *value,
                                                  line:  *line, }),
            Token::Str(value) => Ok(Expr::Str { value: value.clone(),
                                                line:  *line, }),
            Token::Symbol(name) => Ok(Expr::Symbol { name: name.clone(),
                                                     line: *line, }),
            // Skipped by the lexer; they never reach the token buffer.
            Token::Newline | Token::Ignored => self.expression(),
        }
    }

    /// Parses list items up to and including the closing `)`.
    fn list(&mut self, line: usize) -> ParseResult<Expr> {
        let mut items = Vec::new();

        loop {
            match self.tokens.peek() {
                Some((Token::RParen, _)) => {
                    self.tokens.next();
                    return Ok(Expr::List { items, line });
                },
                Some((Token::Eof, eof_line)) => {
                    return Err(ParseError::ExpectedClosingParen { line: *eof_line });
                },
                None => return Err(ParseError::ExpectedClosingParen { line: self.line }),
                Some(_) => items.push(self.expression()?),
            }
        }
    }
}
