use thiserror::Error;

/// Everything that can go wrong while loading or running a program.
///
/// Faults raised by `Chip8::cycle` are either recoverable (the cycle still
/// completes and execution may continue) or fatal (the interpreter halts).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Fault {
    #[error("ROM is too large ({size} bytes), max size is {max} bytes")]
    RomTooLarge { size: usize, max: usize },

    #[error("unknown opcode {opcode:#06X} at {address:#05X}")]
    UnknownOpcode { opcode: u16, address: u16 },

    #[error("stack overflow calling from {address:#05X}")]
    StackOverflow { address: u16 },

    #[error("stack underflow returning from {address:#05X}")]
    StackUnderflow { address: u16 },

    #[error("memory access out of bounds at {address:#06X}")]
    OutOfBounds { address: usize },

    #[error("program counter {pc:#06X} is outside of fetchable memory")]
    ProgramCounterOutOfRange { pc: u16 },
}

impl Fault {
    /// Whether the interpreter must halt after this fault.
    pub fn is_fatal(&self) -> bool {
        match self {
            Fault::StackOverflow { .. }
            | Fault::StackUnderflow { .. }
            | Fault::ProgramCounterOutOfRange { .. } => true,
            Fault::RomTooLarge { .. } | Fault::UnknownOpcode { .. } | Fault::OutOfBounds { .. } => {
                false
            }
        }
    }
}
