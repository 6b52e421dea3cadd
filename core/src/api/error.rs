//! Public error types.
//!
//! Internal errors are converted to these types at the API boundary.
//! [`Error::kind`] flattens every fault into a single [`FaultKind`] so hosts
//! can branch on it without matching nested structures.

use core::fmt;

use thiserror::Error as ThisError;

use crate::evaluator::{
    ExecutionError, ExecutionErrorKind, ResourceExceededError, RuntimeError,
};
use crate::parser::{ParseError, ParseErrorKind, Span};

/// Public error type for all operations.
#[derive(Debug, Clone, PartialEq, ThisError)]
pub enum Error {
    /// The source text is not a well-formed expression.
    #[error("Compilation failed: {error}")]
    Compilation {
        error: ParseError,
        diagnostics: Vec<Diagnostic>,
    },

    /// Evaluation failed (e.g., division by zero, missing parameter).
    #[error("Runtime error: {0}")]
    Runtime(ExecutionError),

    /// Evaluation hit a configured resource limit.
    #[error("Resource limit exceeded: {0}")]
    ResourceExceeded(ExecutionError),
}

/// Every fault the language can raise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaultKind {
    UnmatchedCloseBracket,
    SemicolonOutsideBlock,
    UnmatchedOpenBracket,
    StackUnderflow,
    TypeMismatch,
    DivisionByZero,
    InvalidLiteral,
    ParameterNotFound,
    ArgumentTypeInvalid,
    SelectorNotInteger,
    SelectorOutOfRange,
    ResultArityMismatch,
    InvalidPattern,
    Internal,
    StackOverflow,
}

impl FaultKind {
    /// Raised while compiling rather than evaluating.
    pub fn is_syntax(self) -> bool {
        matches!(
            self,
            FaultKind::UnmatchedCloseBracket
                | FaultKind::SemicolonOutsideBlock
                | FaultKind::UnmatchedOpenBracket
        )
    }

    /// Caused by the data an expression ran on rather than by the
    /// expression or its binding being wrong.
    pub fn is_domain(self) -> bool {
        matches!(self, FaultKind::DivisionByZero | FaultKind::InvalidLiteral)
    }

    /// Stable diagnostic code.
    pub fn code(self) -> &'static str {
        match self {
            FaultKind::UnmatchedCloseBracket => "P001",
            FaultKind::SemicolonOutsideBlock => "P002",
            FaultKind::UnmatchedOpenBracket => "P003",
            FaultKind::StackUnderflow => "R001",
            FaultKind::TypeMismatch => "R002",
            FaultKind::DivisionByZero => "R003",
            FaultKind::InvalidLiteral => "R004",
            FaultKind::ParameterNotFound => "R005",
            FaultKind::ArgumentTypeInvalid => "R006",
            FaultKind::SelectorNotInteger => "R007",
            FaultKind::SelectorOutOfRange => "R008",
            FaultKind::ResultArityMismatch => "R009",
            FaultKind::InvalidPattern => "R010",
            FaultKind::Internal => "R999",
            FaultKind::StackOverflow => "L001",
        }
    }
}

impl From<&ParseErrorKind> for FaultKind {
    fn from(kind: &ParseErrorKind) -> Self {
        match kind {
            ParseErrorKind::UnmatchedCloseBracket => FaultKind::UnmatchedCloseBracket,
            ParseErrorKind::SemicolonOutsideBlock => FaultKind::SemicolonOutsideBlock,
            ParseErrorKind::UnmatchedOpenBracket { .. } => FaultKind::UnmatchedOpenBracket,
        }
    }
}

impl From<&ExecutionErrorKind> for FaultKind {
    fn from(kind: &ExecutionErrorKind) -> Self {
        match kind {
            ExecutionErrorKind::Runtime(err) => match err {
                RuntimeError::StackUnderflow { .. } => FaultKind::StackUnderflow,
                RuntimeError::TypeMismatch { .. } => FaultKind::TypeMismatch,
                RuntimeError::DivisionByZero => FaultKind::DivisionByZero,
                RuntimeError::InvalidLiteral { .. } => FaultKind::InvalidLiteral,
                RuntimeError::ParameterNotFound { .. } => FaultKind::ParameterNotFound,
                RuntimeError::ArgumentTypeInvalid { .. } => FaultKind::ArgumentTypeInvalid,
                RuntimeError::SelectorNotInteger { .. } => FaultKind::SelectorNotInteger,
                RuntimeError::SelectorOutOfRange { .. } => FaultKind::SelectorOutOfRange,
                RuntimeError::ResultArityMismatch { .. } => FaultKind::ResultArityMismatch,
                RuntimeError::InvalidPattern { .. } => FaultKind::InvalidPattern,
                RuntimeError::Internal { .. } => FaultKind::Internal,
            },
            ExecutionErrorKind::ResourceExceeded(ResourceExceededError::StackOverflow {
                ..
            }) => FaultKind::StackOverflow,
        }
    }
}

impl Error {
    pub fn kind(&self) -> FaultKind {
        match self {
            Error::Compilation { error, .. } => (&error.kind).into(),
            Error::Runtime(err) | Error::ResourceExceeded(err) => (&err.kind).into(),
        }
    }

    /// Source range the error points at, if it has one.
    pub fn span(&self) -> Option<&Span> {
        match self {
            Error::Compilation { error, .. } => Some(&error.span),
            Error::Runtime(err) | Error::ResourceExceeded(err) => err.span.as_ref(),
        }
    }

    /// Diagnostics describing the error, ready for rendering.
    ///
    /// Runtime errors without a location (such as a result count mismatch)
    /// get an empty span at offset 0.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        match self {
            Error::Compilation { diagnostics, .. } => diagnostics.clone(),
            Error::Runtime(err) | Error::ResourceExceeded(err) => {
                let kind = self.kind();
                vec![Diagnostic {
                    severity: Severity::Error,
                    message: err.to_string(),
                    span: err.span.clone().unwrap_or_default(),
                    related: Vec::new(),
                    help: runtime_help(kind).map(str::to_string),
                    code: Some(kind.code().to_string()),
                }]
            }
        }
    }
}

fn runtime_help(kind: FaultKind) -> Option<&'static str> {
    match kind {
        FaultKind::ParameterNotFound => Some("Bind the parameter before evaluating"),
        FaultKind::ResultArityMismatch => {
            Some("Use the all-results mode to get every value left on the stack")
        }
        FaultKind::SelectorOutOfRange => Some("Selectors count alternatives from 0"),
        FaultKind::StackOverflow => Some("Raise max_stack_size or simplify the expression"),
        _ => None,
    }
}

/// A diagnostic message (error, warning, or info) with source location.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    /// Severity level (error, warning, info).
    pub severity: Severity,

    /// Primary diagnostic message.
    pub message: String,

    /// Source location of the primary issue.
    pub span: Span,

    /// Related locations that provide additional context.
    pub related: Vec<RelatedInfo>,

    /// Optional help text suggesting how to fix the issue.
    pub help: Option<String>,

    /// Optional error code (e.g., "P001") for documentation lookup.
    pub code: Option<String>,
}

/// Severity level for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Info => write!(f, "info"),
        }
    }
}

/// Related information for a diagnostic (e.g., "block opened here").
#[derive(Debug, Clone, PartialEq)]
pub struct RelatedInfo {
    pub span: Span,
    pub message: String,
}

// ============================================================================
// Conversion from internal errors
// ============================================================================

impl From<ParseError> for Error {
    fn from(error: ParseError) -> Self {
        let diagnostics = vec![error.to_diagnostic()];
        Error::Compilation { error, diagnostics }
    }
}

impl From<ExecutionError> for Error {
    fn from(err: ExecutionError) -> Self {
        match err.kind {
            ExecutionErrorKind::ResourceExceeded(_) => Error::ResourceExceeded(err),
            ExecutionErrorKind::Runtime(_) => Error::Runtime(err),
        }
    }
}
