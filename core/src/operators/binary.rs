use core::cmp::Ordering;

use regex::Regex;

use crate::evaluator::RuntimeError;
use crate::operators::{BinaryOp, Comparison, Operator, format_value, time, type_mismatch};
use crate::values::Value;

/// `lhs` is the deeper operand, `rhs` the top of the stack.
pub(super) fn eval(op: BinaryOp, lhs: Value, rhs: Value) -> Result<Value, RuntimeError> {
    use Value::{Float, Int, Str};

    let result = match (op, lhs, rhs) {
        (BinaryOp::Add, Int(a), Int(b)) => Int(a.wrapping_add(b)),
        (BinaryOp::Add, Float(a), Float(b)) => Float(a + b),
        (BinaryOp::Add, Str(mut a), Str(b)) => {
            a.push_str(&b);
            Str(a)
        }

        (BinaryOp::Min, Int(a), Int(b)) => Int(a.min(b)),
        (BinaryOp::Min, Float(a), Float(b)) => Float(float_extreme(a, b, Ordering::Less)),
        (BinaryOp::Min, Str(a), Str(b)) => Str(if a < b { a } else { b }),
        (BinaryOp::Max, Int(a), Int(b)) => Int(a.max(b)),
        (BinaryOp::Max, Float(a), Float(b)) => Float(float_extreme(a, b, Ordering::Greater)),
        (BinaryOp::Max, Str(a), Str(b)) => Str(if a > b { a } else { b }),

        (BinaryOp::Sub, Int(a), Int(b)) => Int(a.wrapping_sub(b)),
        (BinaryOp::Sub, Float(a), Float(b)) => Float(a - b),
        (BinaryOp::Mul, Int(a), Int(b)) => Int(a.wrapping_mul(b)),
        (BinaryOp::Mul, Float(a), Float(b)) => Float(a * b),
        (BinaryOp::Div, Int(_), Int(0)) => return Err(RuntimeError::DivisionByZero),
        (BinaryOp::Div, Int(a), Int(b)) => Int(a.wrapping_div(b)),
        (BinaryOp::Div, Float(a), Float(b)) => Float(a / b),
        (BinaryOp::Pow, Float(a), Float(b)) => Float(a.powf(b)),

        (BinaryOp::Rem, Int(_), Int(0)) => return Err(RuntimeError::DivisionByZero),
        (BinaryOp::Rem, Int(a), Int(b)) => Int(a.wrapping_rem(b)),
        (BinaryOp::BitAnd, Int(a), Int(b)) => Int(a & b),
        (BinaryOp::BitOr, Int(a), Int(b)) => Int(a | b),
        (BinaryOp::BitXor, Int(a), Int(b)) => Int(a ^ b),
        (BinaryOp::Shl, Int(a), Int(b)) => Int(a.checked_shl(shift_count(b)).unwrap_or(0)),
        (BinaryOp::Shr, Int(a), Int(b)) => {
            let fill = if a < 0 { -1 } else { 0 };
            Int(a.checked_shr(shift_count(b)).unwrap_or(fill))
        }

        (BinaryOp::Compare(cmp), Int(a), Int(b)) => Value::bool(compare(cmp, &a, &b)),
        (BinaryOp::Compare(cmp), Float(a), Float(b)) => Value::bool(compare(cmp, &a, &b)),
        (BinaryOp::Compare(cmp), Str(a), Str(b)) => Value::bool(compare(cmp, &a, &b)),

        (BinaryOp::Index, Str(text), Str(needle)) => Int(offset(text.find(&needle))),
        (BinaryOp::IndexLast, Str(text), Str(needle)) => Int(offset(text.rfind(&needle))),
        (BinaryOp::RegexMatch, Str(pattern), Str(text)) => {
            let regex = Regex::new(&pattern).map_err(RuntimeError::pattern)?;
            Value::bool(regex.is_match(&text))
        }
        (BinaryOp::TimeParse, Str(layout), Str(text)) => Int(time::parse(&layout, &text)?),

        (BinaryOp::Left, Str(text), Int(count)) => {
            let end = byte_count(count)?;
            Str(slice(&text, 0, end)?.to_string())
        }
        (BinaryOp::Right, Str(text), Int(count)) => {
            let start = text
                .len()
                .checked_sub(byte_count(count)?)
                .ok_or_else(|| out_of_range(&text, count))?;
            Str(slice(&text, start, text.len())?.to_string())
        }
        (BinaryOp::TimeFormat, Str(layout), Int(seconds)) => Str(time::format(&layout, seconds)?),

        (BinaryOp::Format, Str(pattern), value) => Str(format_value(&pattern, &value)?),

        (op, lhs, rhs) => return Err(type_mismatch(Operator::Binary(op), &[&lhs, &rhs])),
    };
    Ok(result)
}

fn compare<T: PartialOrd + ?Sized>(cmp: Comparison, a: &T, b: &T) -> bool {
    match cmp {
        Comparison::Eq => a == b,
        Comparison::Ne => a != b,
        Comparison::Gt => a > b,
        Comparison::Lt => a < b,
        Comparison::Ge => a >= b,
        Comparison::Le => a <= b,
    }
}

/// NaN-propagating min/max. `f64::min` would drop the NaN instead.
fn float_extreme(a: f64, b: f64, keep: Ordering) -> f64 {
    match a.partial_cmp(&b) {
        None => f64::NAN,
        Some(Ordering::Equal) => {
            // min(-0, 0) is -0 and max(-0, 0) is 0.
            if (keep == Ordering::Less) == a.is_sign_negative() { a } else { b }
        }
        Some(ordering) if ordering == keep => a,
        Some(_) => b,
    }
}

/// Negative counts read as huge unsigned counts and saturate like any count
/// of 64 or more.
fn shift_count(count: i64) -> u32 {
    u32::try_from(count).unwrap_or(u32::MAX)
}

fn offset(position: Option<usize>) -> i64 {
    position.map_or(-1, |position| position as i64)
}

fn byte_count(count: i64) -> Result<usize, RuntimeError> {
    usize::try_from(count)
        .map_err(|_| RuntimeError::internal(format!("negative length {}", count)))
}

fn slice(text: &str, start: usize, end: usize) -> Result<&str, RuntimeError> {
    text.get(start..end).ok_or_else(|| {
        RuntimeError::internal(format!(
            "byte range {}..{} is out of bounds or splits a character in a text of {} bytes",
            start,
            end,
            text.len()
        ))
    })
}

fn out_of_range(text: &str, count: i64) -> RuntimeError {
    RuntimeError::internal(format!(
        "length {} exceeds text of {} bytes",
        count,
        text.len()
    ))
}
