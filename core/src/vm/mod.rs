mod code;
mod instruction_set;
mod runtime;
mod stack;

pub use code::Code;
pub use instruction_set::Instruction;
pub use runtime::VM;
pub use stack::{Overflow, Stack};
