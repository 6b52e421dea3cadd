use core::{fmt, mem};
use std::sync::Arc;

use crate::parser::Span;
use crate::vm::Instruction;

/// Listing indentation stops growing past this many columns.
const MAX_LISTING_INDENT: usize = 64;

/// An immutable instruction sequence with the source span of every
/// instruction.
///
/// Produced by the parser; `Select` instructions share nested `Code` values
/// for their alternatives. Equality, listing and drop walk the nesting with
/// explicit worklists, so they work at any depth the parser accepts.
#[derive(Clone, Default)]
pub struct Code {
    instructions: Vec<Instruction>,
    spans: Vec<Span>,
}

enum Listing<'a> {
    Code {
        code: &'a Code,
        ip: usize,
        indent: usize,
    },
    Alternatives {
        alternatives: &'a [Code],
        next: usize,
        indent: usize,
    },
}

impl Code {
    pub fn push(&mut self, instruction: Instruction, span: Span) {
        self.instructions.push(instruction);
        self.spans.push(span);
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Instruction at `ip` together with its span.
    pub fn get(&self, ip: usize) -> Option<(&Instruction, &Span)> {
        Some((self.instructions.get(ip)?, self.spans.get(ip)?))
    }

    fn write_listing(&self, f: &mut fmt::Formatter<'_>, indent: usize) -> fmt::Result {
        let mut stack = vec![Listing::Code {
            code: self,
            ip: 0,
            indent,
        }];
        while let Some(top) = stack.last_mut() {
            match top {
                Listing::Code { code, ip, indent } => {
                    let code = *code;
                    let indent = *indent;
                    let Some((instr, span)) = code.get(*ip) else {
                        stack.pop();
                        continue;
                    };
                    writeln!(
                        f,
                        "{:indent$}{:4}  {:?}  @{}..{}",
                        "",
                        *ip,
                        instr,
                        span.0.start,
                        span.0.end,
                        indent = indent
                    )?;
                    *ip += 1;
                    if let Instruction::Select(alternatives) = instr {
                        stack.push(Listing::Alternatives {
                            alternatives,
                            next: 0,
                            indent,
                        });
                    }
                }
                Listing::Alternatives {
                    alternatives,
                    next,
                    indent,
                } => {
                    let alternatives = *alternatives;
                    let indent = *indent;
                    let Some(alternative) = alternatives.get(*next) else {
                        stack.pop();
                        continue;
                    };
                    writeln!(f, "{:indent$}      [{}]:", "", *next, indent = indent)?;
                    *next += 1;
                    stack.push(Listing::Code {
                        code: alternative,
                        ip: 0,
                        indent: (indent + 8).min(MAX_LISTING_INDENT),
                    });
                }
            }
        }
        Ok(())
    }
}

impl PartialEq for Code {
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self, other)];
        while let Some((a, b)) = pending.pop() {
            if a.spans != b.spans || a.instructions.len() != b.instructions.len() {
                return false;
            }
            for (x, y) in a.instructions.iter().zip(&b.instructions) {
                if !x.eq_shallow(y) {
                    return false;
                }
                if let (Instruction::Select(xs), Instruction::Select(ys)) = (x, y) {
                    if !Arc::ptr_eq(xs, ys) {
                        pending.extend(xs.iter().zip(ys.iter()));
                    }
                }
            }
        }
        true
    }
}

impl Drop for Code {
    /// Deeply nested blocks are torn down with a worklist instead of nested
    /// drop calls. Alternatives still shared with a clone are left to their
    /// last owner.
    fn drop(&mut self) {
        let mut pending = mem::take(&mut self.instructions);
        while let Some(instruction) = pending.pop() {
            if let Instruction::Select(mut alternatives) = instruction {
                if let Some(alternatives) = Arc::get_mut(&mut alternatives) {
                    for alternative in alternatives.iter_mut() {
                        pending.append(&mut alternative.instructions);
                    }
                }
            }
        }
    }
}

impl fmt::Debug for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Code {{")?;
        writeln!(f, "  instructions:")?;
        self.write_listing(f, 4)?;
        write!(f, "}}")
    }
}
