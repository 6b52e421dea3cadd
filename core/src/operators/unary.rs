use crate::evaluator::RuntimeError;
use crate::operators::{Operator, UnaryOp, type_mismatch};
use crate::values::{Value, ValueKind, float_to_string};

pub(super) fn eval(op: UnaryOp, operand: Value) -> Result<Value, RuntimeError> {
    use Value::{Float, Int, Str};

    let result = match (op, operand) {
        (UnaryOp::ToInt, Int(v)) => Int(v),
        // Saturates at the i64 bounds; NaN becomes 0.
        (UnaryOp::ToInt, Float(v)) => Int(v as i64),
        (UnaryOp::ToInt, Str(s)) => match s.parse::<i64>() {
            Ok(v) => Int(v),
            Err(_) => return Err(invalid_literal(ValueKind::Int, s)),
        },

        (UnaryOp::ToFloat, Int(v)) => Float(v as f64),
        (UnaryOp::ToFloat, Float(v)) => Float(v),
        (UnaryOp::ToFloat, Str(s)) => match s.replace(',', ".").parse::<f64>() {
            Ok(v) => Float(v),
            Err(_) => return Err(invalid_literal(ValueKind::Float, s)),
        },

        (UnaryOp::ToStr, Int(v)) => Str(v.to_string()),
        (UnaryOp::ToStr, Float(v)) => Str(float_to_string(v)),
        (UnaryOp::ToStr, Str(s)) => Str(s),

        (UnaryOp::Neg, Int(v)) => Int(v.wrapping_neg()),
        (UnaryOp::Neg, Float(v)) => Float(-v),
        (UnaryOp::Abs, Int(v)) => Int(v.wrapping_abs()),
        (UnaryOp::Abs, Float(v)) => Float(v.abs()),
        (UnaryOp::Sign, Int(v)) => Int(v.signum()),
        (UnaryOp::Sign, Float(v)) => Int(if v < 0.0 {
            -1
        } else {
            (v > 0.0) as i64
        }),

        (UnaryOp::BitNot, Int(v)) => Int(!v),
        (UnaryOp::Not, Int(v)) => Value::bool(v == 0),

        (UnaryOp::Sqrt, Float(v)) => Float(v.sqrt()),
        (UnaryOp::Ln, Float(v)) => Float(v.ln()),
        (UnaryOp::Exp, Float(v)) => Float(v.exp()),
        (UnaryOp::Floor, Float(v)) => Float(v.floor()),
        (UnaryOp::Ceil, Float(v)) => Float(v.ceil()),
        (UnaryOp::Round, Float(v)) => Float(v.round()),
        (UnaryOp::Trunc, Float(v)) => Float(v.trunc()),
        (UnaryOp::Frac, Float(v)) => Float(v.fract()),
        (UnaryOp::IsNaN, Float(v)) => Value::bool(v.is_nan()),
        (UnaryOp::IsInf, Float(v)) => Value::bool(v.is_infinite()),

        (UnaryOp::Trim, Str(s)) => Str(s.trim().to_string()),
        (UnaryOp::Upper, Str(s)) => Str(s.to_uppercase()),
        (UnaryOp::Lower, Str(s)) => Str(s.to_lowercase()),
        (UnaryOp::Len, Str(s)) => Int(s.len() as i64),

        (UnaryOp::IsEmpty, Int(v)) => Value::bool(v == 0),
        (UnaryOp::IsEmpty, Float(v)) => Value::bool(v == 0.0),
        (UnaryOp::IsEmpty, Str(s)) => Value::bool(s.is_empty()),

        (op, operand) => return Err(type_mismatch(Operator::Unary(op), &[&operand])),
    };
    Ok(result)
}

fn invalid_literal(target: ValueKind, text: String) -> RuntimeError {
    RuntimeError::InvalidLiteral { target, text }
}
