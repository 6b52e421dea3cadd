//! Operator registry and dispatch.
//!
//! Every operator has a fixed arity. Dispatch checks the stack depth first
//! (`StackUnderflow`), then matches on the exact tuple of operand kinds. There
//! is no coercion: a combination that is not listed in the operator's match
//! arms is a `TypeMismatch`.

mod binary;
mod format;
mod ternary;
mod time;
mod unary;


use once_cell::sync::Lazy;
use smallvec::SmallVec;
use tracing::warn;

use hashbrown::HashMap;

use crate::api::ParameterBinding;
use crate::evaluator::{ExecutionErrorKind, RuntimeError};
use crate::values::Value;
use crate::vm::Stack;

pub use format::format_value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Drop,
    Dup,
    Swap,
    Over,
    /// `@`: replace a parameter name with its bound value.
    Param,
    Unary(UnaryOp),
    Binary(BinaryOp),
    Ternary(TernaryOp),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    ToInt,
    ToFloat,
    ToStr,
    Neg,
    Abs,
    Sign,
    BitNot,
    Not,
    Sqrt,
    Ln,
    Exp,
    Floor,
    Ceil,
    Round,
    Trunc,
    Frac,
    IsNaN,
    IsInf,
    Trim,
    Upper,
    Lower,
    Len,
    IsEmpty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Min,
    Max,
    Sub,
    Mul,
    Div,
    Pow,
    Rem,
    BitAnd,
    BitOr,
    BitXor,
    Shl,
    Shr,
    Compare(Comparison),
    Index,
    IndexLast,
    RegexMatch,
    TimeParse,
    Left,
    Right,
    TimeFormat,
    Format,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Comparison {
    Eq,
    Ne,
    Gt,
    Lt,
    Ge,
    Le,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TernaryOp {
    Replace,
    RegexReplace,
}

/// Every registered name. The first entry for an operator is its canonical
/// name; later entries are aliases.
const CATALOGUE: &[(&str, Operator)] = &[
    ("drop", Operator::Drop),
    ("dup", Operator::Dup),
    ("swap", Operator::Swap),
    ("over", Operator::Over),
    ("@", Operator::Param),
    ("int", Operator::Unary(UnaryOp::ToInt)),
    ("float", Operator::Unary(UnaryOp::ToFloat)),
    ("string", Operator::Unary(UnaryOp::ToStr)),
    ("--", Operator::Unary(UnaryOp::Neg)),
    ("abs", Operator::Unary(UnaryOp::Abs)),
    ("sign", Operator::Unary(UnaryOp::Sign)),
    ("~", Operator::Unary(UnaryOp::BitNot)),
    ("!", Operator::Unary(UnaryOp::Not)),
    ("sqrt", Operator::Unary(UnaryOp::Sqrt)),
    ("ln", Operator::Unary(UnaryOp::Ln)),
    ("exp", Operator::Unary(UnaryOp::Exp)),
    ("floor", Operator::Unary(UnaryOp::Floor)),
    ("ceil", Operator::Unary(UnaryOp::Ceil)),
    ("round", Operator::Unary(UnaryOp::Round)),
    ("trunc", Operator::Unary(UnaryOp::Trunc)),
    ("frac", Operator::Unary(UnaryOp::Frac)),
    ("isNaN", Operator::Unary(UnaryOp::IsNaN)),
    ("isInf", Operator::Unary(UnaryOp::IsInf)),
    ("trim", Operator::Unary(UnaryOp::Trim)),
    ("upper", Operator::Unary(UnaryOp::Upper)),
    ("lower", Operator::Unary(UnaryOp::Lower)),
    ("len", Operator::Unary(UnaryOp::Len)),
    ("isEmpty", Operator::Unary(UnaryOp::IsEmpty)),
    ("+", Operator::Binary(BinaryOp::Add)),
    ("min", Operator::Binary(BinaryOp::Min)),
    ("max", Operator::Binary(BinaryOp::Max)),
    ("-", Operator::Binary(BinaryOp::Sub)),
    ("*", Operator::Binary(BinaryOp::Mul)),
    ("/", Operator::Binary(BinaryOp::Div)),
    ("**", Operator::Binary(BinaryOp::Pow)),
    ("%", Operator::Binary(BinaryOp::Rem)),
    ("&", Operator::Binary(BinaryOp::BitAnd)),
    ("|", Operator::Binary(BinaryOp::BitOr)),
    ("^", Operator::Binary(BinaryOp::BitXor)),
    ("<<", Operator::Binary(BinaryOp::Shl)),
    (">>", Operator::Binary(BinaryOp::Shr)),
    ("=", Operator::Binary(BinaryOp::Compare(Comparison::Eq))),
    ("#", Operator::Binary(BinaryOp::Compare(Comparison::Ne))),
    ("!=", Operator::Binary(BinaryOp::Compare(Comparison::Ne))),
    (">", Operator::Binary(BinaryOp::Compare(Comparison::Gt))),
    ("<", Operator::Binary(BinaryOp::Compare(Comparison::Lt))),
    (">=", Operator::Binary(BinaryOp::Compare(Comparison::Ge))),
    ("<=", Operator::Binary(BinaryOp::Compare(Comparison::Le))),
    ("index", Operator::Binary(BinaryOp::Index)),
    ("indexLast", Operator::Binary(BinaryOp::IndexLast)),
    ("regexMatch", Operator::Binary(BinaryOp::RegexMatch)),
    ("timeParse", Operator::Binary(BinaryOp::TimeParse)),
    ("left", Operator::Binary(BinaryOp::Left)),
    ("right", Operator::Binary(BinaryOp::Right)),
    ("timeFormat", Operator::Binary(BinaryOp::TimeFormat)),
    ("format", Operator::Binary(BinaryOp::Format)),
    ("replace", Operator::Ternary(TernaryOp::Replace)),
    ("regexReplace", Operator::Ternary(TernaryOp::RegexReplace)),
];

static REGISTRY: Lazy<HashMap<&'static str, Operator>> =
    Lazy::new(|| CATALOGUE.iter().copied().collect());

impl Operator {
    /// Find the operator registered under `name`.
    pub fn lookup(name: &str) -> Option<Operator> {
        REGISTRY.get(name).copied()
    }

    /// Canonical name, as written in source.
    pub fn name(self) -> &'static str {
        CATALOGUE
            .iter()
            .find(|(_, op)| *op == self)
            .map_or("?", |(name, _)| *name)
    }

    /// Number of stack values the operator needs to be present.
    pub fn arity(self) -> usize {
        match self {
            Operator::Drop | Operator::Dup | Operator::Param | Operator::Unary(_) => 1,
            Operator::Swap | Operator::Over | Operator::Binary(_) => 2,
            Operator::Ternary(_) => 3,
        }
    }

    /// All registered `(name, operator)` pairs, aliases included.
    pub fn catalogue() -> impl Iterator<Item = (&'static str, Operator)> {
        CATALOGUE.iter().copied()
    }
}

/// Apply `op` to the top of `stack`.
///
/// On failure the stack is left in an unspecified state; evaluation is
/// expected to stop.
pub fn apply(
    op: Operator,
    stack: &mut Stack<Value>,
    binding: &dyn ParameterBinding,
) -> Result<(), ExecutionErrorKind> {
    let required = op.arity();
    if stack.len() < required {
        return Err(RuntimeError::StackUnderflow {
            operator: op.name(),
            required,
            available: stack.len(),
        }
        .into());
    }

    match op {
        Operator::Drop => {
            stack.pop();
        }
        Operator::Dup => {
            stack.copy_from(0)?;
        }
        Operator::Swap => {
            stack.swap_top();
        }
        Operator::Over => {
            stack.copy_from(1)?;
        }
        Operator::Param => {
            let [name] = operands(stack)?;
            stack.push(fetch_parameter(name, binding)?)?;
        }
        Operator::Unary(unary_op) => {
            let [value] = operands(stack)?;
            stack.push(unary::eval(unary_op, value)?)?;
        }
        Operator::Binary(binary_op) => {
            let [lhs, rhs] = operands(stack)?;
            stack.push(binary::eval(binary_op, lhs, rhs)?)?;
        }
        Operator::Ternary(ternary_op) => {
            let [first, second, third] = operands(stack)?;
            stack.push(ternary::eval(ternary_op, first, second, third)?)?;
        }
    }
    Ok(())
}

fn operands<const N: usize>(stack: &mut Stack<Value>) -> Result<[Value; N], RuntimeError> {
    stack
        .pop_n::<N>()
        .ok_or_else(|| RuntimeError::internal("operands missing after depth check"))
}

fn fetch_parameter(name: Value, binding: &dyn ParameterBinding) -> Result<Value, RuntimeError> {
    let name = match name {
        Value::Str(name) => name,
        other => return Err(type_mismatch(Operator::Param, &[&other])),
    };
    let host = binding
        .lookup(&name)
        .ok_or_else(|| RuntimeError::ParameterNotFound { name: name.clone() })?;
    host.to_value(&name).inspect_err(|err| {
        warn!(parameter = %name, error = %err, "rejected host parameter");
    })
}

pub(crate) fn type_mismatch(op: Operator, operands: &[&Value]) -> RuntimeError {
    RuntimeError::TypeMismatch {
        operator: op.name(),
        operands: operands.iter().map(|value| value.kind()).collect::<SmallVec<_>>(),
    }
}
