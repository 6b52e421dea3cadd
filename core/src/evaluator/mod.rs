//! Evaluation entry points.
//!
//! Each call runs the compiled code on a fresh stack; nothing is shared
//! between evaluations except the read-only code and binding.
//!
//! ## Example
//!
//! ```
//! use scalc_core::api::{ExecutionOptions, Parameters};
//! use scalc_core::evaluator::{eval, eval_all};
//! use scalc_core::parser::parse;
//! use scalc_core::values::Value;
//!
//! let code = parse("price @ 2 *").unwrap();
//! let params = Parameters::new().with("price", 21);
//! let options = ExecutionOptions::default();
//!
//! assert_eq!(eval(&code, &params, &options).unwrap(), Value::Int(42));
//! assert_eq!(eval_all(&parse("1 2").unwrap(), &(), &options).unwrap().len(), 2);
//! ```

mod error;

#[cfg(test)]
mod eval_test;

pub use error::{
    ExecutionError, ExecutionErrorKind, OperandKinds, ResourceExceededError, RuntimeError,
};

use tracing::debug;

use crate::api::{ExecutionOptions, ParameterBinding};
use crate::values::Value;
use crate::vm::{Code, VM};

/// Evaluate `code` and return every value left on the stack, bottom to top.
pub fn eval_all(
    code: &Code,
    binding: &dyn ParameterBinding,
    options: &ExecutionOptions,
) -> Result<Vec<Value>, ExecutionError> {
    let result = VM::new(code, binding, options.max_stack_size).run();
    match &result {
        Ok(values) => debug!(results = values.len(), "evaluation finished"),
        Err(err) => debug!(error = %err, "evaluation failed"),
    }
    result
}

/// Evaluate `code`, which must leave exactly one value on the stack.
pub fn eval(
    code: &Code,
    binding: &dyn ParameterBinding,
    options: &ExecutionOptions,
) -> Result<Value, ExecutionError> {
    let values = eval_all(code, binding, options)?;
    match <[Value; 1]>::try_from(values) {
        Ok([value]) => Ok(value),
        Err(values) => Err(ExecutionError::new(
            RuntimeError::ResultArityMismatch {
                count: values.len(),
            },
            None,
        )),
    }
}
