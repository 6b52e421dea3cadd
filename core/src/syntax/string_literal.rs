//! Escape decoding for literal tokens, and the inverse used when printing
//! text values back as quoted literals.
//!
//! Decoding is total: `\s`, `\n`, `\t` and `\\` map to space, newline, tab and
//! backslash, any other escaped character stands for itself, and a trailing
//! lone backslash is kept as is.

use core::fmt;
use std::borrow::Cow;

/// Decode the escape sequences of a literal token.
///
/// Tokens without a backslash are returned borrowed (zero-copy fast path).
///
/// # Example
///
/// ```
/// use scalc_core::syntax::unescape_string;
///
/// assert_eq!(unescape_string(r"a\sb\n"), "a b\n");
/// assert_eq!(unescape_string(r"\c\\"), "c\\");
/// assert_eq!(unescape_string(r"end\"), "end\\");
/// ```
pub fn unescape_string(input: &str) -> Cow<'_, str> {
    if !input.contains('\\') {
        return Cow::Borrowed(input);
    }

    let mut output = String::with_capacity(input.len());
    let mut chars = input.chars();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            output.push(ch);
            continue;
        }

        match chars.next() {
            Some('s') => output.push(' '),
            Some('n') => output.push('\n'),
            Some('t') => output.push('\t'),
            Some(other) => output.push(other),
            None => output.push('\\'),
        }
    }

    Cow::Owned(output)
}

/// Write `s` as a double-quoted literal.
///
/// Converts runtime strings to a readable source-like form by escaping:
/// - `"` → `\"`
/// - `\` → `\\`
/// - newline, carriage return, tab → `\n`, `\r`, `\t`
/// - other control characters → `\u{NN}`
pub fn escape_string(f: &mut impl fmt::Write, s: &str) -> fmt::Result {
    f.write_char('"')?;
    for ch in s.chars() {
        match ch {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            c if c.is_control() => write!(f, "\\u{{{:x}}}", c as u32)?,
            c => f.write_char(c)?,
        }
    }
    f.write_char('"')
}
