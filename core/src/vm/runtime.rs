use tracing::trace;

use crate::api::ParameterBinding;
use crate::evaluator::{ExecutionError, RuntimeError};
use crate::operators;
use crate::parser::Span;
use crate::values::Value;
use crate::vm::{Code, Instruction, Stack};

/// Position inside one instruction sequence.
struct Frame<'c> {
    code: &'c Code,
    ip: usize,
}

/// Executes compiled code against a private stack.
///
/// Entering a `Select` alternative pushes a frame instead of recursing, so
/// nesting depth never touches the host call stack. A frame that has run its
/// last instruction is popped before that instruction executes, which keeps a
/// chain of trailing selects at constant frame depth.
pub struct VM<'c, 'b> {
    frames: Vec<Frame<'c>>,
    stack: Stack<Value>,
    binding: &'b dyn ParameterBinding,
}

impl<'c, 'b> VM<'c, 'b> {
    pub fn new(code: &'c Code, binding: &'b dyn ParameterBinding, max_stack_size: usize) -> Self {
        VM {
            frames: vec![Frame { code, ip: 0 }],
            stack: Stack::new(max_stack_size),
            binding,
        }
    }

    /// Run to completion and return whatever is left on the stack, bottom to
    /// top. Stops at the first fault.
    pub fn run(mut self) -> Result<Vec<Value>, ExecutionError> {
        while let Some(frame) = self.frames.last_mut() {
            let code = frame.code;
            let Some((instruction, span)) = code.get(frame.ip) else {
                self.frames.pop();
                continue;
            };
            trace!(ip = frame.ip, depth = self.stack.len(), instruction = ?instruction, "execute");
            frame.ip += 1;
            if frame.ip == code.len() {
                self.frames.pop();
            }

            self.execute(instruction, span)
                .map_err(|err| ExecutionError { span: Some(span.clone()), ..err })?;
        }
        Ok(self.stack.into_vec())
    }

    fn execute(&mut self, instruction: &'c Instruction, span: &Span) -> Result<(), ExecutionError> {
        match instruction {
            Instruction::Const(value) => self
                .stack
                .push(value.clone())
                .map_err(|overflow| ExecutionError::new(overflow, None)),
            Instruction::Op(op) => operators::apply(*op, &mut self.stack, self.binding)
                .map_err(|kind| ExecutionError::new(kind, None)),
            Instruction::Select(alternatives) => {
                let code = self.select(alternatives)?;
                trace!(start = span.0.start, "enter alternative");
                self.frames.push(Frame { code, ip: 0 });
                Ok(())
            }
        }
    }

    fn select(&mut self, alternatives: &'c [Code]) -> Result<&'c Code, ExecutionError> {
        let fault = |err: RuntimeError| ExecutionError::new(err, None);

        let selector = self.stack.pop().ok_or_else(|| {
            fault(RuntimeError::StackUnderflow {
                operator: "[",
                required: 1,
                available: 0,
            })
        })?;
        let selector = match selector {
            Value::Int(selector) => selector,
            other => {
                return Err(fault(RuntimeError::SelectorNotInteger {
                    found: other.kind(),
                }));
            }
        };

        let index = usize::try_from(selector)
            .ok()
            .filter(|index| *index < alternatives.len())
            .ok_or_else(|| {
                fault(RuntimeError::SelectorOutOfRange {
                    selector,
                    alternatives: alternatives.len(),
                })
            })?;

        alternatives.get(index).ok_or_else(|| {
            fault(RuntimeError::internal(format!(
                "alternative {} missing from block of {}",
                index,
                alternatives.len()
            )))
        })
    }
}
