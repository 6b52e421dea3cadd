//! Whitespace tokenizer.
//!
//! The whole input is trimmed of Unicode whitespace and then split on runs of
//! ASCII separators (space, tab, newline, form feed, carriage return). Other
//! whitespace inside the input, such as a vertical tab, stays part of its
//! token. A blank input yields exactly one empty token, which the parser turns
//! into an empty text constant, so `""` is a valid expression.

use crate::parser::Span;

/// A lexeme together with its location in the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    pub span: Span,
}

/// Split `source` into tokens.
///
/// # Example
///
/// ```
/// use scalc_core::parser::lexer::tokenize;
///
/// let tokens: Vec<_> = tokenize("  1 2\t+ ").into_iter().map(|t| t.text).collect();
/// assert_eq!(tokens, ["1", "2", "+"]);
///
/// let tokens = tokenize(" \n ");
/// assert_eq!(tokens.len(), 1);
/// assert_eq!(tokens[0].text, "");
/// ```
pub fn tokenize(source: &str) -> Vec<Token<'_>> {
    let trimmed = source.trim();
    let base = source.len() - source.trim_start().len();

    if trimmed.is_empty() {
        return vec![Token {
            text: "",
            span: Span::new(base, base),
        }];
    }

    let mut tokens = Vec::new();
    let mut start: Option<usize> = None;
    for (offset, ch) in trimmed.char_indices() {
        match (is_separator(ch), start) {
            (true, Some(begin)) => {
                tokens.push(token(trimmed, base, begin, offset));
                start = None;
            }
            (false, None) => start = Some(offset),
            _ => {}
        }
    }
    if let Some(begin) = start {
        tokens.push(token(trimmed, base, begin, trimmed.len()));
    }

    tokens
}

fn is_separator(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n' | '\x0C' | '\r')
}

fn token(trimmed: &str, base: usize, begin: usize, end: usize) -> Token<'_> {
    Token {
        text: &trimmed[begin..end],
        span: Span::new(base + begin, base + end),
    }
}
