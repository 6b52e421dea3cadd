use regex::Regex;

use crate::evaluator::RuntimeError;
use crate::operators::{Operator, TernaryOp, type_mismatch};
use crate::values::Value;

/// Operands in push order: `third` is the top of the stack.
pub(super) fn eval(
    op: TernaryOp,
    first: Value,
    second: Value,
    third: Value,
) -> Result<Value, RuntimeError> {
    match (op, first, second, third) {
        (TernaryOp::Replace, Value::Str(old), Value::Str(new), Value::Str(text)) => {
            Ok(Value::Str(text.replace(&old, &new)))
        }
        (TernaryOp::RegexReplace, Value::Str(pattern), Value::Str(replacement), Value::Str(text)) => {
            let regex = Regex::new(&pattern).map_err(RuntimeError::pattern)?;
            Ok(Value::Str(
                regex.replace_all(&text, replacement.as_str()).into_owned(),
            ))
        }
        (op, first, second, third) => Err(type_mismatch(
            Operator::Ternary(op),
            &[&first, &second, &third],
        )),
    }
}
