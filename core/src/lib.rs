//! A Chip-8 interpreter: memory, registers, stack, frame buffer, timers and
//! keypad, driven one instruction at a time through `Chip8::cycle`.
//!
//! Rendering, audio, input mapping and rom I/O are left to whoever drives it.

pub use chip8::{Chip8, Cycle};
pub use fault::Fault;
pub use frame_buffer::FrameBuffer;
pub use instruction::Instruction;
pub use opcode::Opcode;
pub use random::ByteSource;

mod chip8;
pub mod constants;
mod fault;
pub mod frame_buffer;
mod instruction;
pub mod keypad;
pub mod memory;
mod opcode;
mod operations;
mod random;
pub mod registers;
pub mod state;
pub mod timers;
