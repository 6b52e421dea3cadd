//! Public API for the scalc expression language.
//!
//! Compile once with an [`Engine`] (or [`CompiledExpression::compile`]),
//! then run the result against any [`ParameterBinding`].
//!
//! # Example
//!
//! ```
//! use scalc_core::api::{Engine, EngineOptions, FaultKind, Parameters};
//! use scalc_core::values::Value;
//!
//! let engine = Engine::new(EngineOptions::default());
//!
//! let expr = engine.compile("n @ 0 > [ 'neg ; 'pos ]").unwrap();
//! let params = Parameters::new().with("n", 5);
//! assert_eq!(expr.run(&params).unwrap(), Value::str("pos"));
//!
//! let err = engine.compile("1 0 /").unwrap().run(&()).unwrap_err();
//! assert_eq!(err.kind(), FaultKind::DivisionByZero);
//! ```

pub mod binding;
pub mod engine;
pub mod error;
pub mod expression;
pub mod options;

pub use binding::{ParameterBinding, Parameters};
pub use engine::Engine;
pub use error::{Diagnostic, Error, FaultKind, RelatedInfo, Severity};
pub use expression::CompiledExpression;
pub use options::{EngineOptions, ExecutionOptions};

pub use crate::values::HostValue;
