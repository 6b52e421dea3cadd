use crate::api::{Diagnostic, RelatedInfo, Severity};
use crate::parser::Span;

/// Structural error found while building the instruction tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
}

/// Specific kinds of parse errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// `]` with no open block.
    UnmatchedCloseBracket,
    /// `;` at top level.
    SemicolonOutsideBlock,
    /// Input ended while a block was still open. `opened` points at its `[`.
    UnmatchedOpenBracket { opened: Span },
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Convert to a Diagnostic for API boundary
    pub fn to_diagnostic(&self) -> Diagnostic {
        let (message, code, help) = match &self.kind {
            ParseErrorKind::UnmatchedCloseBracket => (
                "Unmatched ']'",
                "P001",
                "Remove it or open a block with '[' before it",
            ),
            ParseErrorKind::SemicolonOutsideBlock => (
                "';' outside of a block",
                "P002",
                "Section separators are only allowed between '[' and ']'",
            ),
            ParseErrorKind::UnmatchedOpenBracket { .. } => (
                "Unclosed block",
                "P003",
                "Add the missing ']'",
            ),
        };

        let related = match &self.kind {
            ParseErrorKind::UnmatchedOpenBracket { opened } => vec![RelatedInfo {
                span: opened.clone(),
                message: "block opened here".to_string(),
            }],
            _ => Vec::new(),
        };

        Diagnostic {
            severity: Severity::Error,
            message: message.to_string(),
            span: self.span.clone(),
            related,
            help: Some(help.to_string()),
            code: Some(code.to_string()),
        }
    }
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let diagnostic = self.to_diagnostic();
        write!(f, "{}: {}", diagnostic.severity, diagnostic.message)?;

        if let Some(ref code) = diagnostic.code {
            write!(f, " [{}]", code)?;
        }

        for help_msg in &diagnostic.help {
            write!(f, "\nhelp: {}", help_msg)?;
        }

        Ok(())
    }
}

impl std::error::Error for ParseError {}
