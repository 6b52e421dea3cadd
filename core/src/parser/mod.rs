pub mod error;
pub mod lexer;
mod parser;
mod syntax;

pub use error::{ParseError, ParseErrorKind};
pub use parser::{Lexeme, classify, parse};
pub use syntax::Span;
