//! The scalc compilation engine.

use tracing::debug;

use super::{CompiledExpression, EngineOptions, Error};

/// The scalc compilation engine.
///
/// The engine holds the defaults stamped onto every expression it compiles.
/// It keeps no state between compilations, so one engine can be shared by
/// any number of threads.
///
/// # Example
///
/// ```
/// use scalc_core::api::{Engine, EngineOptions, Parameters};
/// use scalc_core::values::Value;
///
/// let engine = Engine::new(EngineOptions::default());
/// let expr = engine.compile("price @ 2 *").unwrap();
///
/// let params = Parameters::new().with("price", 21);
/// assert_eq!(expr.run(&params).unwrap(), Value::Int(42));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Engine {
    options: EngineOptions,
}

impl Engine {
    pub fn new(options: EngineOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    /// Compile source text into an executable expression.
    ///
    /// Only structural errors are reported here. Type and parameter errors
    /// surface when the expression runs.
    pub fn compile(&self, source: &str) -> Result<CompiledExpression, Error> {
        let expr = CompiledExpression::compile(source, self.options.default_execution_options.clone())
            .inspect_err(|err| debug!(error = %err, "Compilation failed"))?;
        debug!(
            source,
            instructions = expr.code().len(),
            "Compiled expression"
        );
        Ok(expr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ExecutionOptions, FaultKind};

    #[test]
    fn test_compile_stamps_default_options() {
        let engine = Engine::new(EngineOptions {
            default_execution_options: ExecutionOptions { max_stack_size: 3 },
        });
        let expr = engine.compile("1 2").unwrap();
        assert_eq!(expr.options().max_stack_size, 3);
        assert_eq!(expr.source(), "1 2");
    }

    #[test]
    fn test_compile_reports_syntax_errors() {
        let engine = Engine::default();
        let err = engine.compile("1 ]").unwrap_err();
        assert_eq!(err.kind(), FaultKind::UnmatchedCloseBracket);
        assert_eq!(err.diagnostics().len(), 1);
    }
}
