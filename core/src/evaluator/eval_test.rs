//! Unit tests for the evaluator.

use pretty_assertions::assert_eq;

use super::*;
use crate::api::Parameters;
use crate::parser::{Span, parse};
use crate::test_utils::init_test_logging;
use crate::values::ValueKind;

struct Runner {
    options: ExecutionOptions,
    params: Parameters,
}

impl Runner {
    fn new() -> Self {
        Self {
            options: ExecutionOptions::default(),
            params: Parameters::new(),
        }
    }

    fn with_stack_limit(max_stack_size: usize) -> Self {
        Self {
            options: ExecutionOptions { max_stack_size },
            ..Self::new()
        }
    }

    fn all(&self, input: &str) -> Result<Vec<Value>, ExecutionError> {
        let code = parse(input).expect("parsing failed");
        eval_all(&code, &self.params, &self.options)
    }

    fn single(&self, input: &str) -> Result<Value, ExecutionError> {
        let code = parse(input).expect("parsing failed");
        eval(&code, &self.params, &self.options)
    }

    fn runtime_error(&self, input: &str) -> RuntimeError {
        match self.all(input) {
            Err(ExecutionError {
                kind: ExecutionErrorKind::Runtime(err),
                ..
            }) => err,
            other => panic!("{:?}: expected a runtime error, got {:?}", input, other),
        }
    }
}

fn ints(values: &[i64]) -> Vec<Value> {
    values.iter().copied().map(Value::Int).collect()
}

#[test]
fn test_empty_expression_is_empty_text() {
    let runner = Runner::new();
    assert_eq!(runner.all(""), Ok(vec![Value::str("")]));
    assert_eq!(runner.single("   "), Ok(Value::str("")));
}

#[test]
fn test_stack_operations() {
    let runner = Runner::new();
    assert_eq!(runner.all("1 2 dup"), Ok(ints(&[1, 2, 2])));
    assert_eq!(runner.all("1 2 3 swap"), Ok(ints(&[1, 3, 2])));
    assert_eq!(runner.all("1 2 over"), Ok(ints(&[1, 2, 1])));
    assert_eq!(runner.all("1 2 drop"), Ok(ints(&[1])));
}

#[test]
fn test_select_chooses_alternative() {
    init_test_logging();
    let runner = Runner::new();
    assert_eq!(
        runner.all("0 [ 101 ; 102 ; 103 ] 1 [ 201 ; 202 ; 203 ] 2 [ 301 ; 302 ; 303 ]"),
        Ok(ints(&[101, 202, 303]))
    );
}

#[test]
fn test_select_runs_in_place() {
    let runner = Runner::new();
    // The alternative sees and consumes values pushed before the block.
    assert_eq!(runner.all("10 20 1 [ + ; * ]"), Ok(ints(&[200])));
    assert_eq!(runner.all("1 [ ; ]"), Ok(vec![]));
    assert_eq!(runner.all("0 [ ]"), Ok(vec![]));
    assert_eq!(runner.all("0 [ 1 2 ; 3 ] 9"), Ok(ints(&[1, 2, 9])));
}

#[test]
fn test_nested_select() {
    let runner = Runner::new();
    assert_eq!(
        runner.all("1 [ 'a ; 0 [ 'b ; 'c ] 'd ] 'e"),
        Ok(vec![Value::str("b"), Value::str("d"), Value::str("e")])
    );
}

#[test]
fn test_selector_faults() {
    let runner = Runner::new();
    assert_eq!(
        runner.runtime_error("2 [ ; ]"),
        RuntimeError::SelectorOutOfRange {
            selector: 2,
            alternatives: 2
        }
    );
    assert!(matches!(
        runner.runtime_error("1 [ ]"),
        RuntimeError::SelectorOutOfRange { .. }
    ));
    assert!(matches!(
        runner.runtime_error("-1 [ 1 ; 2 ]"),
        RuntimeError::SelectorOutOfRange { selector: -1, .. }
    ));
    assert_eq!(
        runner.runtime_error("1.0 [ 1 ; 2 ]"),
        RuntimeError::SelectorNotInteger {
            found: ValueKind::Float
        }
    );
    assert!(matches!(
        runner.runtime_error("[ ]"),
        RuntimeError::StackUnderflow { operator: "[", .. }
    ));
}

#[test]
fn test_fault_inside_alternative_aborts_everything() {
    let runner = Runner::new();
    assert_eq!(
        runner.runtime_error("5 1 [ 'x ; / ] 9"),
        RuntimeError::StackUnderflow {
            operator: "/",
            required: 2,
            available: 1
        }
    );
    assert_eq!(
        runner.runtime_error("7 0 1 [ 'x ; / ] 'never"),
        RuntimeError::DivisionByZero
    );
}

#[test]
fn test_fault_carries_token_span() {
    let runner = Runner::new();
    let err = runner.all("1 0 /").unwrap_err();
    assert_eq!(err.span, Some(Span(4..5)));

    let err = runner.all("'a  3 [ 1 ; 2 ]").unwrap_err();
    assert_eq!(err.span, Some(Span(6..15)));

    let err = runner.all("0 [ 1 2 + 'x + ]").unwrap_err();
    assert_eq!(err.span, Some(Span(13..14)));
}

#[test]
fn test_single_result_mode() {
    let runner = Runner::new();
    assert_eq!(runner.single("1 2 +"), Ok(Value::Int(3)));
    assert_eq!(
        runner.single("1 2"),
        Err(ExecutionError::new(
            RuntimeError::ResultArityMismatch { count: 2 },
            None
        ))
    );
    assert_eq!(
        runner.single("1 drop"),
        Err(ExecutionError::new(
            RuntimeError::ResultArityMismatch { count: 0 },
            None
        ))
    );
    assert_eq!(
        runner.single("1 0 /").map_err(|err| err.kind),
        Err(ExecutionErrorKind::from(RuntimeError::DivisionByZero))
    );
}

#[test]
fn test_parameters() {
    let mut runner = Runner::new();
    runner.params = Parameters::new().with("x", 40u32).with("name", "Ann");
    assert_eq!(runner.single("x @ 2 +"), Ok(Value::Int(42)));
    assert_eq!(runner.single("'Hi,\\s name @ +"), Ok(Value::str("Hi, Ann")));
    assert_eq!(
        runner.runtime_error("y @"),
        RuntimeError::ParameterNotFound {
            name: "y".to_string()
        }
    );
}

#[test]
fn test_stack_limit() {
    let runner = Runner::with_stack_limit(3);
    assert_eq!(runner.all("1 2 3"), Ok(ints(&[1, 2, 3])));
    let err = runner.all("1 2 3 4").unwrap_err();
    assert_eq!(
        err.kind,
        ExecutionErrorKind::ResourceExceeded(ResourceExceededError::StackOverflow { max_size: 3 })
    );
    assert_eq!(err.span, Some(Span(6..7)));
    assert!(matches!(
        runner.all("1 2 3 dup").unwrap_err().kind,
        ExecutionErrorKind::ResourceExceeded(_)
    ));
}

#[test]
fn test_deeply_nested_blocks() {
    let depth = 2_000;
    let mut source = String::new();
    for _ in 0..depth {
        source.push_str("0 [ ");
    }
    source.push_str("42");
    for _ in 0..depth {
        source.push_str(" ]");
    }
    assert_eq!(Runner::new().single(&source), Ok(Value::Int(42)));
}

#[test]
fn test_repeated_runs_are_independent() {
    let runner = Runner::new();
    let code = parse("1 [ 'a ; 1 0 / ]").unwrap();
    for _ in 0..3 {
        let err = eval_all(&code, &runner.params, &runner.options).unwrap_err();
        assert_eq!(err.kind, ExecutionErrorKind::from(RuntimeError::DivisionByZero));
    }
}
