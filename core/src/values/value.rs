use core::fmt;

use thiserror::Error;

use crate::values::float::write_float;

/// Runtime type tag of a [`Value`].
///
/// Operator dispatch is keyed on tuples of these tags; there is no implicit
/// conversion between kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Int,
    Float,
    Str,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueKind::Int => write!(f, "Integer"),
            ValueKind::Float => write!(f, "Float"),
            ValueKind::Str => write!(f, "Text"),
        }
    }
}

/// A single stack value.
///
/// Booleans produced by comparisons and predicates are represented as
/// `Int(1)` / `Int(0)`.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
    Str(String),
}

/// Returned by the `as_*` accessors when the value has a different kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TypeError {
    #[error("expected {expected}, found {found}")]
    Mismatch {
        expected: ValueKind,
        found: ValueKind,
    },
}

impl Value {
    /// Convert a boolean into the integer encoding used by the language.
    pub fn bool(value: bool) -> Self {
        Value::Int(value as i64)
    }

    pub fn str(value: impl Into<String>) -> Self {
        Value::Str(value.into())
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Int(_) => ValueKind::Int,
            Value::Float(_) => ValueKind::Float,
            Value::Str(_) => ValueKind::Str,
        }
    }

    pub fn as_int(&self) -> Result<i64, TypeError> {
        match self {
            Value::Int(value) => Ok(*value),
            other => Err(other.mismatch(ValueKind::Int)),
        }
    }

    pub fn as_float(&self) -> Result<f64, TypeError> {
        match self {
            Value::Float(value) => Ok(*value),
            other => Err(other.mismatch(ValueKind::Float)),
        }
    }

    pub fn as_str(&self) -> Result<&str, TypeError> {
        match self {
            Value::Str(value) => Ok(value),
            other => Err(other.mismatch(ValueKind::Str)),
        }
    }

    fn mismatch(&self, expected: ValueKind) -> TypeError {
        TypeError::Mismatch {
            expected,
            found: self.kind(),
        }
    }
}

impl fmt::Display for Value {
    /// Host-facing rendering: the same text the `string` operator produces.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(value) => write!(f, "{}", value),
            Value::Float(value) => write_float(f, *value),
            Value::Str(value) => f.write_str(value),
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}
