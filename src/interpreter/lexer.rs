use logos::Logos;

use crate::error::ParseError;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Boolean literal tokens: `#t` or `#f`.
    #[token("#t", |_| true)]
    #[token("#f", |_| false)]
    Bool(bool),
    /// String literal tokens, such as `"dog"`. The delimiting quotes are not
    /// part of the decoded value. A string still open at end of input is
    /// emitted with whatever was scanned rather than failing.
    #[regex(r#""[^"]*""#, decode_string)]
    #[regex(r#""[^"]*"#, decode_open_string)]
    Str(String),
    /// Numeric literal tokens: a run of digits optionally containing dots,
    /// such as `42` or `3.14`. Malformed runs like `1.2.3` are decoded
    /// best-effort from their longest valid prefix.
    #[regex(r"[0-9][0-9.]*", decode_number)]
    Number(f64),
    /// Symbol tokens; any other maximal run of characters that is not
    /// whitespace or a parenthesis, such as `x`, `+`, or `set!`.
    #[regex(r#"[^ \t\r\n()"0-9][^ \t\r\n()]*"#, |lex| lex.slice().to_string())]
    Symbol(String),
    /// Newlines are skipped but advance the line counter.
    #[token("\n", newline)]
    Newline,
    /// Spaces, tabs and carriage returns.
    #[regex(r"[ \t\r]+", logos::skip)]
    Ignored,
    /// End-of-input sentinel, appended once by [`lex`] so the parser can
    /// detect exhaustion without a separate length check. A NUL byte in the
    /// source would scan as this variant and masquerade as end of input, so
    /// [`lex`] rejects it.
    #[token("\0", priority = 3)]
    Eof,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Lexes a source string into a list of `(Token, line)` pairs.
///
/// The lexer is total on ordinary text: every character belongs to some
/// token class, so scanning cannot fail. The one exception is a literal NUL
/// byte, which is rejected so it cannot impersonate the end-of-input
/// sentinel. A single [`Token::Eof`] sentinel is always appended after the
/// last real token.
///
/// # Parameters
/// - `source`: The raw source text.
///
/// # Returns
/// The token list, each token paired with the line it started on.
///
/// # Example
/// ```
/// use schemette::interpreter::lexer::{lex, Token};
///
/// let tokens = lex("(+ 1)").unwrap();
///
/// assert_eq!(tokens[0].0, Token::LParen);
/// assert_eq!(tokens[1].0, Token::Symbol("+".to_string()));
/// assert_eq!(tokens[2].0, Token::Number(1.0));
/// assert_eq!(tokens[3].0, Token::RParen);
/// assert_eq!(tokens[4].0, Token::Eof);
/// ```
pub fn lex(source: &str) -> Result<Vec<(Token, usize)>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1 });

    while let Some(token) = lexer.next() {
        match token {
            // A NUL in the source scans as the sentinel; letting it through
            // would hide every token after it from the parser.
            Ok(Token::Eof) => {
                return Err(ParseError::UnexpectedToken { token: lexer.slice()
                                                                     .escape_default()
                                                                     .to_string(),
                                                         line:  lexer.extras.line, });
            },
            Ok(tok) => tokens.push((tok, lexer.extras.line)),
            Err(()) => {
                return Err(ParseError::UnexpectedToken { token: lexer.slice().to_string(),
                                                         line:  lexer.extras.line, });
            },
        }
    }

    tokens.push((Token::Eof, lexer.extras.line));
    Ok(tokens)
}

/// Skips a newline while advancing the line counter in the lexer extras.
fn newline(lex: &mut logos::Lexer<Token>) -> logos::Skip {
    lex.extras.line += 1;
    logos::Skip
}

/// Decodes a terminated string literal, stripping both quotes.
fn decode_string(lex: &logos::Lexer<Token>) -> String {
    let slice = lex.slice();
    slice[1..slice.len() - 1].to_string()
}

/// Decodes a string literal left open at end of input, stripping the opening
/// quote only.
fn decode_open_string(lex: &logos::Lexer<Token>) -> String {
    lex.slice()[1..].to_string()
}

/// Decodes a numeric literal from the current token slice.
///
/// Mirrors `parseFloat`-style decoding: if the whole slice is not a valid
/// number (e.g. `1.2.3`), the longest valid prefix is decoded instead, so the
/// scanner itself never fails on malformed numeric text.
fn decode_number(lex: &logos::Lexer<Token>) -> f64 {
    let slice = lex.slice();

    match slice.parse() {
        Ok(n) => n,
        Err(_) => {
            let mut end = 0;
            let mut seen_dot = false;

            for (i, ch) in slice.char_indices() {
                if ch == '.' {
                    if seen_dot {
                        break;
                    }
                    seen_dot = true;
                }
                end = i + ch.len_utf8();
            }

            slice[..end].parse().unwrap_or(f64::NAN)
        },
    }
}
