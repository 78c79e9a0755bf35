use crate::fault::Fault;
use crate::frame_buffer::{self, FrameBuffer};
use crate::memory::Memory;
use crate::registers::{Registers, Stack};
use crate::timers::Timers;

/// A snapshot of the Chip8 internal state
///
/// ## CPU
/// - `registers` V0..VF, I and the program counter
/// - `stack` return addresses with their stack pointer
/// - `timers` delay & sound
///
/// ## Memory
/// - 4096 bytes of addressable memory with the sprite sheet at 0x000
/// - 32x64 frame buffer holding the next frame to be drawn
///
/// Input isn't part of the snapshot; the keypad belongs to whoever drives the
/// interpreter and is only ever read by instructions.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct State {
    pub registers: Registers,
    pub stack: Stack,
    pub memory: Memory,
    pub frame_buffer: FrameBuffer,
    pub timers: Timers,
}

impl State {
    pub fn new() -> Self {
        State {
            registers: Registers::new(),
            stack: Stack::new(),
            memory: Memory::new(),
            frame_buffer: frame_buffer::blank(),
            timers: Timers::new(),
        }
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

/// What an instruction does to control flow once it has executed.
///
/// The program counter already points past the instruction when it executes,
/// so `Next` leaves it alone.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Flow {
    /// Carry on with the following instruction.
    Next,
    /// Skip over the following instruction.
    Skip,
    /// Continue at the given address.
    Jump(u16),
    /// Stop fetching until a key is pressed, then store it in the given register.
    AwaitKey(u8),
}

/// The outcome of executing a single instruction.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Effect {
    pub state: State,
    pub flow: Flow,
    /// Whether the frame buffer was touched.
    pub redraw: bool,
    /// A recoverable fault raised along the way, e.g. a clamped memory access.
    pub fault: Option<Fault>,
}

impl Effect {
    pub fn next(state: State) -> Self {
        Effect {
            state,
            flow: Flow::Next,
            redraw: false,
            fault: None,
        }
    }

    pub fn skip_if(state: State, condition: bool) -> Self {
        let flow = if condition { Flow::Skip } else { Flow::Next };
        Effect {
            flow,
            ..Effect::next(state)
        }
    }

    pub fn jump(state: State, address: u16) -> Self {
        Effect {
            flow: Flow::Jump(address),
            ..Effect::next(state)
        }
    }

    pub fn await_key(state: State, register: u8) -> Self {
        Effect {
            flow: Flow::AwaitKey(register),
            ..Effect::next(state)
        }
    }

    pub fn redrawn(self) -> Self {
        Effect {
            redraw: true,
            ..self
        }
    }

    pub fn with_fault(self, fault: Option<Fault>) -> Self {
        Effect { fault, ..self }
    }
}
