//! Instruction set of the stack VM.
//!
//! Compiled code is a tree rather than a flat byte stream: a `Select`
//! instruction owns the code of each of its alternatives, and the VM descends
//! into the chosen one with an explicit frame stack.
//!
//! # Stack Discipline
//!
//! Stack effect notation: `[..., operand1, operand2] -> [..., result]`

use std::sync::Arc;
use core::fmt;

use crate::operators::Operator;
use crate::syntax::escape_string;
use crate::values::{Value, write_float};
use crate::vm::Code;

#[derive(Clone)]
pub enum Instruction {
    /// Push a literal.
    /// Stack: [...] -> [..., value]
    Const(Value),

    /// Apply a registered operator. Its arity and operand kinds are checked
    /// when it runs.
    Op(Operator),

    /// Pop an integer selector and run the alternative at that index.
    /// Stack: [..., selector] -> [...] followed by the chosen code.
    ///
    /// Alternatives are shared, so cloning compiled code never walks the
    /// nested blocks.
    Select(Arc<[Code]>),
}

impl PartialEq for Instruction {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Select(a), Self::Select(b)) => {
                Arc::ptr_eq(a, b)
                    || (a.len() == b.len() && a.iter().zip(b.iter()).all(|(x, y)| x == y))
            }
            _ => self.eq_shallow(other),
        }
    }
}

impl Instruction {
    /// Compares everything except the contents of `Select` alternatives,
    /// which only need to agree in count.
    pub(crate) fn eq_shallow(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Const(a), Self::Const(b)) => a == b,
            (Self::Op(a), Self::Op(b)) => a == b,
            (Self::Select(a), Self::Select(b)) => a.len() == b.len(),
            _ => false,
        }
    }
}

/// Disassembly form of a constant.
pub(crate) struct ConstDisplay<'a>(pub &'a Value);

impl fmt::Display for ConstDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Value::Int(value) => write!(f, "{}", value),
            Value::Float(value) => {
                write_float(f, *value)?;
                if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e6 {
                    f.write_str(".0")?;
                }
                Ok(())
            }
            Value::Str(value) => escape_string(f, value),
        }
    }
}

impl fmt::Debug for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Const(value) => write!(f, "Const({})", ConstDisplay(value)),
            Self::Op(op) => write!(f, "Op({})", op.name()),
            Self::Select(alternatives) => write!(f, "Select({})", alternatives.len()),
        }
    }
}
