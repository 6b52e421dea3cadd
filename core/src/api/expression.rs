//! Compiled scalc expressions.

use core::fmt;

use static_assertions::assert_impl_all;

use super::{Error, ExecutionOptions, ParameterBinding};
use crate::evaluator;
use crate::parser;
use crate::values::Value;
use crate::vm::Code;

/// A compiled scalc expression ready for execution.
///
/// Compiled expressions own their instruction tree and never change after
/// compilation. Each run gets a fresh stack, so one expression can be run
/// any number of times, from any number of threads at once, with a
/// different binding each time.
///
/// # Result modes
///
/// - **`run()`**: the expression must leave exactly one value.
/// - **`run_all()`**: every value left on the stack, bottom first.
///
/// # Example
///
/// ```
/// use scalc_core::api::{CompiledExpression, ExecutionOptions};
/// use scalc_core::values::Value;
///
/// let expr = CompiledExpression::compile("1 2 3", ExecutionOptions::default()).unwrap();
/// assert_eq!(
///     expr.run_all(&()).unwrap(),
///     vec![Value::Int(1), Value::Int(2), Value::Int(3)]
/// );
/// assert!(expr.run(&()).is_err());
/// ```
#[derive(Clone)]
pub struct CompiledExpression {
    /// Text the expression was compiled from, kept for diagnostics.
    source: String,

    code: Code,

    /// Options used by `run()` and `run_all()`.
    options: ExecutionOptions,
}

assert_impl_all!(CompiledExpression: Send, Sync);

impl CompiledExpression {
    /// Compile without going through an [`Engine`](super::Engine).
    pub fn compile(source: &str, options: ExecutionOptions) -> Result<Self, Error> {
        let code = parser::parse(source)?;
        Ok(Self {
            source: source.to_string(),
            code,
            options,
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn code(&self) -> &Code {
        &self.code
    }

    pub fn options(&self) -> &ExecutionOptions {
        &self.options
    }

    /// Run the expression and return its single result.
    ///
    /// Fails with `ResultArityMismatch` if the stack does not end with
    /// exactly one value.
    pub fn run(&self, binding: &dyn ParameterBinding) -> Result<Value, Error> {
        self.run_with_options(binding, &self.options)
    }

    /// Run the expression and return the whole final stack, bottom first.
    pub fn run_all(&self, binding: &dyn ParameterBinding) -> Result<Vec<Value>, Error> {
        self.run_all_with_options(binding, &self.options)
    }

    pub fn run_with_options(
        &self,
        binding: &dyn ParameterBinding,
        options: &ExecutionOptions,
    ) -> Result<Value, Error> {
        Ok(evaluator::eval(&self.code, binding, options)?)
    }

    pub fn run_all_with_options(
        &self,
        binding: &dyn ParameterBinding,
        options: &ExecutionOptions,
    ) -> Result<Vec<Value>, Error> {
        Ok(evaluator::eval_all(&self.code, binding, options)?)
    }
}

impl fmt::Debug for CompiledExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompiledExpression")
            .field("source", &self.source)
            .field("code", &self.code)
            .field("options", &self.options)
            .finish()
    }
}
