//! Configuration options for the engine.

/// Configuration options for expression execution.
///
/// # Example
///
/// ```
/// use scalc_core::api::ExecutionOptions;
///
/// let options = ExecutionOptions { max_stack_size: 256 };
/// assert_eq!(ExecutionOptions::default().max_stack_size, 4096);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionOptions {
    /// Maximum number of values on the evaluation stack. Pushing past it
    /// faults with `StackOverflow`.
    ///
    /// Default: 4096
    pub max_stack_size: usize,
}

impl Default for ExecutionOptions {
    fn default() -> Self {
        Self {
            max_stack_size: 4096,
        }
    }
}

/// Configuration options for the engine.
///
/// These set the defaults stamped onto every expression the engine compiles,
/// which can be overridden on a per-call basis.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineOptions {
    /// Default options for execution.
    ///
    /// These can be overridden when calling
    /// `CompiledExpression::run_with_options()`.
    pub default_execution_options: ExecutionOptions,
}
