pub mod string_literal;

pub use string_literal::{escape_string, unescape_string};
