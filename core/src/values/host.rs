//! Host-side parameter values.
//!
//! Hosts bind parameters with whatever native type they have at hand. When
//! an expression reads a parameter with `@`, the bound value is narrowed to a
//! [`Value`]: integers that fit in `i64` become `Int`, floats become `Float`,
//! strings become `Str`. One level of reference is followed. Everything else
//! is rejected.

use crate::evaluator::RuntimeError;
use crate::values::Value;

#[derive(Debug, Clone, PartialEq)]
pub enum HostValue {
    Signed(i128),
    Unsigned(u128),
    Float(f64),
    Str(String),
    Bool(bool),
    Char(char),
    Unit,
    /// A value reached through one level of indirection.
    Ref(Box<HostValue>),
}

impl HostValue {
    /// Wrap a value in one level of indirection.
    pub fn reference(value: impl Into<HostValue>) -> Self {
        HostValue::Ref(Box::new(value.into()))
    }

    /// Narrow to a language value. `name` is only used for the error.
    pub fn to_value(&self, name: &str) -> Result<Value, RuntimeError> {
        match self {
            HostValue::Ref(inner) if matches!(**inner, HostValue::Ref(_)) => {
                Err(invalid(name, "nested references are not followed"))
            }
            HostValue::Ref(inner) => inner.to_value(name),
            HostValue::Signed(value) => i64::try_from(*value)
                .map(Value::Int)
                .map_err(|_| invalid(name, format!("{} does not fit in a 64-bit integer", value))),
            HostValue::Unsigned(value) => i64::try_from(*value)
                .map(Value::Int)
                .map_err(|_| invalid(name, format!("{} does not fit in a 64-bit integer", value))),
            HostValue::Float(value) => Ok(Value::Float(*value)),
            HostValue::Str(value) => Ok(Value::Str(value.clone())),
            HostValue::Bool(_) => Err(invalid(name, "booleans are not supported")),
            HostValue::Char(_) => Err(invalid(name, "characters are not supported")),
            HostValue::Unit => Err(invalid(name, "unit is not supported")),
        }
    }
}

fn invalid(name: &str, reason: impl Into<String>) -> RuntimeError {
    RuntimeError::ArgumentTypeInvalid {
        name: name.to_string(),
        reason: reason.into(),
    }
}

macro_rules! impl_from_int {
    ($variant:ident, $wide:ty: $($ty:ty),*) => {
        $(
            impl From<$ty> for HostValue {
                fn from(value: $ty) -> Self {
                    HostValue::$variant(value as $wide)
                }
            }
        )*
    };
}

impl_from_int!(Signed, i128: i8, i16, i32, i64, i128, isize);
impl_from_int!(Unsigned, u128: u8, u16, u32, u64, u128, usize);

impl From<f32> for HostValue {
    fn from(value: f32) -> Self {
        HostValue::Float(f64::from(value))
    }
}

impl From<f64> for HostValue {
    fn from(value: f64) -> Self {
        HostValue::Float(value)
    }
}

impl From<&str> for HostValue {
    fn from(value: &str) -> Self {
        HostValue::Str(value.to_string())
    }
}

impl From<String> for HostValue {
    fn from(value: String) -> Self {
        HostValue::Str(value)
    }
}

impl From<bool> for HostValue {
    fn from(value: bool) -> Self {
        HostValue::Bool(value)
    }
}

impl From<char> for HostValue {
    fn from(value: char) -> Self {
        HostValue::Char(value)
    }
}

impl From<()> for HostValue {
    fn from(_: ()) -> Self {
        HostValue::Unit
    }
}

impl From<Value> for HostValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Int(value) => HostValue::Signed(value.into()),
            Value::Float(value) => HostValue::Float(value),
            Value::Str(value) => HostValue::Str(value),
        }
    }
}
