/*!
## Rust Machine Module

This Rust module is the P-code instruction set, the instruction store
the compiler emits into, and the stack machine that runs it.

*/

pub type Address = usize;
pub type Val = i64;

/// Slots in the runtime stack, zeroed before a run.
pub const STACK_SIZE: usize = 1000;

/// Static link, dynamic link and return address at the base of every frame.
pub const FRAME_HEADER: usize = 3;

/// Instructions executed per `Runtime::execute` slice in batch runs.
pub const CYCLES: usize = 5000;

mod opcode;
mod program;
mod runtime;
mod stack;

pub use opcode::Opcode;
pub use opcode::Opr;
pub use program::Program;
pub use runtime::Event;
pub use runtime::Runtime;
pub use stack::Stack;
