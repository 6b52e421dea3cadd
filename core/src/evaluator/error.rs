//! Runtime evaluation errors.
//!
//! # Error Categories
//!
//! - **Runtime errors**: the expression did something its operands do not
//!   allow (wrong operand kinds, division by zero, a missing parameter, a
//!   selector out of range).
//!
//! - **Resource exceeded errors**: evaluation hit a configured limit, such as
//!   the maximum stack size.
//!
//! Every error carries the span of the instruction that raised it, when one
//! is known.

use smallvec::SmallVec;
use thiserror::Error;

use crate::parser::Span;
use crate::values::ValueKind;
use crate::vm::Overflow;

/// Runtime evaluation error with its location in the source.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{kind}")]
pub struct ExecutionError {
    pub kind: ExecutionErrorKind,
    pub span: Option<Span>,
}

impl ExecutionError {
    pub fn new(kind: impl Into<ExecutionErrorKind>, span: Option<Span>) -> Self {
        Self {
            kind: kind.into(),
            span,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExecutionErrorKind {
    #[error(transparent)]
    Runtime(#[from] RuntimeError),

    #[error(transparent)]
    ResourceExceeded(#[from] ResourceExceededError),
}

/// Operand kinds as seen by an operator, bottom to top.
pub type OperandKinds = SmallVec<[ValueKind; 3]>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RuntimeError {
    #[error("'{operator}' needs {required} operand(s) but the stack holds {available}")]
    StackUnderflow {
        operator: &'static str,
        required: usize,
        available: usize,
    },

    #[error("'{operator}' is not defined for operands ({})", kind_list(.operands))]
    TypeMismatch {
        operator: &'static str,
        operands: OperandKinds,
    },

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Cannot convert {text:?} to {target}")]
    InvalidLiteral { target: ValueKind, text: String },

    #[error("Parameter '{name}' is not bound")]
    ParameterNotFound { name: String },

    #[error("Parameter '{name}' has an unsupported type: {reason}")]
    ArgumentTypeInvalid { name: String, reason: String },

    #[error("Block selector must be an Integer, found {found}")]
    SelectorNotInteger { found: ValueKind },

    #[error("Block selector {selector} is out of range for {alternatives} alternative(s)")]
    SelectorOutOfRange { selector: i64, alternatives: usize },

    #[error("Expected exactly one result, found {count}")]
    ResultArityMismatch { count: usize },

    #[error("Invalid pattern: {message}")]
    InvalidPattern { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResourceExceededError {
    #[error("Evaluation stack overflow: more than {max_size} values")]
    StackOverflow { max_size: usize },
}

impl From<Overflow> for ExecutionErrorKind {
    fn from(overflow: Overflow) -> Self {
        ResourceExceededError::StackOverflow {
            max_size: overflow.max_size,
        }
        .into()
    }
}

impl RuntimeError {
    pub(crate) fn internal(message: impl Into<String>) -> Self {
        RuntimeError::Internal {
            message: message.into(),
        }
    }

    pub(crate) fn pattern(message: impl ToString) -> Self {
        RuntimeError::InvalidPattern {
            message: message.to_string(),
        }
    }
}

fn kind_list(kinds: &[ValueKind]) -> String {
    kinds
        .iter()
        .map(|kind| kind.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
