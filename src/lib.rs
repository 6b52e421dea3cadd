//! scalc - an embeddable postfix expression language
//!
//! # Overview
//!
//! A host supplies a whitespace-separated postfix formula and a set of named
//! scalar parameters; scalc computes one or more result values. Formulas are
//! compiled once and can then be evaluated many times, concurrently, against
//! different parameter sets. Common use cases include:
//!
//! - Scoring rules
//! - Derived configuration values
//! - Small formulas evaluated per record
//!
//! # Quick Start
//!
//! ```
//! use scalc::{Engine, Parameters, Value};
//!
//! let engine = Engine::default();
//! let expr = engine.compile("base @ rate @ * 100 /").unwrap();
//!
//! let params = Parameters::new().with("base", 2500).with("rate", 4);
//! assert_eq!(expr.run(&params).unwrap(), Value::Int(100));
//! ```
//!
//! # Branching
//!
//! `[ a ; b ; c ]` pops an integer selector and runs the alternative it
//! picks, counting from 0. Comparisons leave `1` or `0`, so a two-way block
//! reads as `[ if-false ; if-true ]`:
//!
//! ```
//! use scalc::{Engine, Parameters, Value};
//!
//! let expr = Engine::default().compile("n @ 10 > [ 'small ; 'large ]").unwrap();
//! let large = Parameters::new().with("n", 11);
//! assert_eq!(expr.run(&large).unwrap(), Value::str("large"));
//! ```

mod error_renderer;

// Re-export public API from scalc_core
pub use scalc_core::api::{
    CompiledExpression, Diagnostic, Engine, EngineOptions, Error, ExecutionOptions, FaultKind,
    HostValue, ParameterBinding, Parameters, RelatedInfo, Severity,
};

pub use scalc_core::values::{self, Value, ValueKind};

pub use error_renderer::{
    render_error, render_error_to, render_error_to_string, render_error_to_string_no_color,
};
