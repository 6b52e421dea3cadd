//! Structural parser.
//!
//! Tokens are classified one at a time and appended to the section currently
//! being built. Nesting is tracked with an explicit stack of open levels, so
//! arbitrarily deep `[ ... ]` blocks never recurse.

use core::mem;

use tracing::{debug, trace};

use crate::operators::Operator;
use crate::parser::lexer::tokenize;
use crate::parser::{ParseError, ParseErrorKind, Span};
use crate::syntax::unescape_string;
use crate::values::Value;
use crate::vm::{Code, Instruction};

const OPEN: &str = "[";
const SEPARATOR: &str = ";";
const CLOSE: &str = "]";
const TEXT_MARKER: char = '\'';

/// Meaning of a single token.
#[derive(Debug, Clone, PartialEq)]
pub enum Lexeme {
    Operator(Operator),
    Open,
    Separator,
    Close,
    Literal(Value),
}

/// Classify a token.
///
/// Registered operator names win over everything else, then the structural
/// symbols, then integer and float literals. A leading `'` forces a text
/// literal (the marker is removed). Anything left is an implicit text
/// literal. Text literals are escape-decoded in both cases.
pub fn classify(token: &str) -> Lexeme {
    if let Some(op) = Operator::lookup(token) {
        return Lexeme::Operator(op);
    }
    match token {
        OPEN => return Lexeme::Open,
        SEPARATOR => return Lexeme::Separator,
        CLOSE => return Lexeme::Close,
        _ => {}
    }
    if let Ok(value) = token.parse::<i64>() {
        return Lexeme::Literal(Value::Int(value));
    }
    if let Ok(value) = token.parse::<f64>() {
        return Lexeme::Literal(Value::Float(value));
    }
    let text = token.strip_prefix(TEXT_MARKER).unwrap_or(token);
    Lexeme::Literal(Value::Str(unescape_string(text).into_owned()))
}

/// A `[` that has not been closed yet.
struct Level {
    opened: Span,
    finished: Vec<Code>,
    current: Code,
}

impl Level {
    fn new(opened: Span) -> Self {
        Self {
            opened,
            finished: Vec::new(),
            current: Code::default(),
        }
    }
}

/// Parse source text into executable code.
///
/// # Example
///
/// ```
/// use scalc_core::parser::parse;
///
/// let code = parse("1 [ 'a ; 'b ]").unwrap();
/// assert_eq!(code.len(), 2);
///
/// assert!(parse("1 ]").is_err());
/// ```
pub fn parse(source: &str) -> Result<Code, ParseError> {
    let tokens = tokenize(source);
    trace!(tokens = tokens.len(), "tokenized");

    let mut root = Code::default();
    let mut levels: Vec<Level> = Vec::new();

    for token in tokens {
        match classify(token.text) {
            Lexeme::Open => levels.push(Level::new(token.span)),
            Lexeme::Separator => {
                let Some(level) = levels.last_mut() else {
                    return Err(ParseError::new(
                        ParseErrorKind::SemicolonOutsideBlock,
                        token.span,
                    ));
                };
                let section = mem::take(&mut level.current);
                level.finished.push(section);
            }
            Lexeme::Close => {
                let Some(mut level) = levels.pop() else {
                    return Err(ParseError::new(
                        ParseErrorKind::UnmatchedCloseBracket,
                        token.span,
                    ));
                };
                level.finished.push(level.current);
                let span = Span::combine(&level.opened, &token.span);
                current_section(&mut root, &mut levels)
                    .push(Instruction::Select(level.finished.into()), span);
            }
            Lexeme::Operator(op) => {
                current_section(&mut root, &mut levels).push(Instruction::Op(op), token.span)
            }
            Lexeme::Literal(value) => {
                current_section(&mut root, &mut levels).push(Instruction::Const(value), token.span)
            }
        }
    }

    if let Some(level) = levels.pop() {
        let end = source.trim_end().len();
        return Err(ParseError::new(
            ParseErrorKind::UnmatchedOpenBracket {
                opened: level.opened,
            },
            Span::new(end, end),
        ));
    }

    debug!(instructions = root.len(), "parsed expression");
    Ok(root)
}

fn current_section<'a>(root: &'a mut Code, levels: &'a mut [Level]) -> &'a mut Code {
    match levels.last_mut() {
        Some(level) => &mut level.current,
        None => root,
    }
}
