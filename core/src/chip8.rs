use log::{debug, error, info, trace, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::constants::{LAST_FETCH_ADDRESS, MAX_ROM_SIZE};
use crate::fault::Fault;
use crate::frame_buffer::FrameBuffer;
use crate::instruction::Instruction;
use crate::keypad::Keypad;
use crate::memory::Memory;
use crate::opcode::Opcode;
use crate::random::ByteSource;
use crate::registers::{Registers, Stack};
use crate::state::{Flow, State};
use crate::timers::Timers;

/// What a single call to `Chip8::cycle` did.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Cycle {
    /// The instruction ran to completion.
    Executed(Instruction),
    /// Nothing ran; an `Fx0A` is still waiting on a key press.
    AwaitingKey,
    /// Something went wrong but execution can carry on.
    /// Unknown opcodes are skipped, out of bounds accesses are clamped.
    Recovered(Fault),
}

/// # Chip-8
/// Chip-8 is a virtual machine and corresponding interpreted language.
///
/// Tracks:
///  - current `state`
///  - `keypad` with public interfaces for manipulating it
///  - the register waiting on a key press, if any
///  - whether the frame buffer changed since it was last taken
///  - the fault that halted execution, if any
///
/// Supplies interfaces for:
/// - loading roms
/// - pressing and releasing keys
/// - advancing the CPU by one instruction
/// - advancing its timers
/// - inspecting its frame buffer for rendering by some display
///
/// The CPU and the timers are advanced separately: `cycle` should be called
/// as often as the desired instruction rate demands and `tick` at 60Hz.
pub struct Chip8 {
    state: State,
    keypad: Keypad,
    register_needing_key: Option<u8>,
    draw_flag: bool,
    halted: Option<Fault>,
    rng: Box<dyn ByteSource + Send>,
}

impl Chip8 {
    pub fn new() -> Self {
        Self::with_random_source(StdRng::from_entropy())
    }

    /// Creates an interpreter whose `Cxkk` instructions draw from `rng`.
    pub fn with_random_source(rng: impl ByteSource + Send + 'static) -> Self {
        let mut chip8 = Chip8 {
            state: State::new(),
            keypad: Keypad::new(),
            register_needing_key: None,
            draw_flag: true,
            halted: None,
            rng: Box::new(rng),
        };
        chip8.reset();
        chip8
    }

    /// Puts every component back into its power-on state.
    /// Memory only holds the sprite sheet afterwards.
    pub fn reset(&mut self) {
        self.state = State::new();
        self.keypad = Keypad::new();
        self.register_needing_key = None;
        self.draw_flag = true;
        self.halted = None;
        info!("interpreter initialized");
    }

    /// Resets the machine and loads a rom at 0x200.
    /// An oversized rom is rejected before anything is touched.
    pub fn load_program(&mut self, rom: &[u8]) -> Result<(), Fault> {
        if rom.len() > MAX_ROM_SIZE {
            return Err(Fault::RomTooLarge {
                size: rom.len(),
                max: MAX_ROM_SIZE,
            });
        }
        self.reset();
        self.state.memory.load(rom)?;
        info!("loaded {} byte ROM", rom.len());
        Ok(())
    }

    /// Set the pressed status of a key
    ///
    /// A press also satisfies a pending `Fx0A`, storing the key in its register.
    ///
    /// # Arguments
    /// * `key` the key 0x0..0xF; anything past 0xF is ignored
    /// * `pressed` whether it is now held down
    pub fn set_key(&mut self, key: u8, pressed: bool) {
        if key > 0xF {
            warn!("ignoring nonexistent key {:#X}", key);
            return;
        }
        self.keypad.set(key, pressed);
        if !pressed {
            return;
        }
        if let Some(register) = self.register_needing_key.take() {
            self.state.registers.v[register as usize] = key;
            debug!("key {:X} stored in V{:X}", key, register);
        }
    }

    pub fn key_press(&mut self, key: u8) {
        self.set_key(key, true);
    }

    pub fn key_release(&mut self, key: u8) {
        self.set_key(key, false);
    }

    /// Advances the CPU by a single cycle
    /// - breaks if halted or awaiting a keypress
    /// - gets the opcode at the pc and moves the pc past it
    /// - executes it and applies its effect on control flow
    pub fn cycle(&mut self) -> Result<Cycle, Fault> {
        if let Some(fault) = self.halted {
            return Err(fault);
        }
        if self.register_needing_key.is_some() {
            return Ok(Cycle::AwaitingKey);
        }

        let pc = self.state.registers.pc;
        let op = self.get_op()?;
        self.state.registers.pc = pc + 0x2;

        let instruction = match Instruction::decode(op) {
            Some(instruction) => instruction,
            None => {
                let fault = Fault::UnknownOpcode {
                    opcode: op.0,
                    address: pc,
                };
                warn!("{}, skipping", fault);
                return Ok(Cycle::Recovered(fault));
            }
        };
        trace!(
            "{:03X}: {} {:<16} i{:03X} v{:02X?}",
            pc,
            op,
            instruction.to_string(),
            self.state.registers.i,
            self.state.registers.v
        );

        let effect = match instruction.execute(&self.state, &self.keypad, self.rng.as_mut()) {
            Ok(effect) => effect,
            Err(fault) => {
                self.state.registers.pc = pc;
                return Err(self.halt(fault));
            }
        };

        self.state = effect.state;
        self.draw_flag |= effect.redraw;
        match effect.flow {
            Flow::Next => {}
            Flow::Skip => self.state.registers.pc += 0x2,
            Flow::Jump(address) => self.state.registers.pc = address,
            Flow::AwaitKey(register) => {
                debug!("V{:X} waiting on a key press", register);
                self.register_needing_key = Some(register);
            }
        }

        match effect.fault {
            Some(fault) => {
                warn!("{} executing {}, clamped", fault, instruction);
                Ok(Cycle::Recovered(fault))
            }
            None => Ok(Cycle::Executed(instruction)),
        }
    }

    /// Decrements the delay and sound timers; call at 60Hz.
    pub fn tick(&mut self) {
        let was_sounding = self.state.timers.sound_active();
        self.state.timers.tick();
        if was_sounding && !self.state.timers.sound_active() {
            debug!("tone stopped");
        }
    }

    /// Whether a tone should currently be audible.
    pub fn is_sound_active(&self) -> bool {
        self.state.timers.sound_active()
    }

    /// A copy of the current frame.
    pub fn framebuffer(&self) -> FrameBuffer {
        self.state.frame_buffer
    }

    /// Returns the FrameBuffer if the display should be redrawn, unsetting the draw flag.
    pub fn take_frame(&mut self) -> Option<FrameBuffer> {
        if self.draw_flag {
            self.draw_flag = false;
            Some(self.state.frame_buffer)
        } else {
            None
        }
    }

    pub fn registers(&self) -> &Registers {
        &self.state.registers
    }

    pub fn stack(&self) -> &Stack {
        &self.state.stack
    }

    pub fn memory(&self) -> &Memory {
        &self.state.memory
    }

    pub fn timers(&self) -> &Timers {
        &self.state.timers
    }

    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// The register a pending `Fx0A` will store the next key press in.
    pub fn awaiting_key(&self) -> Option<u8> {
        self.register_needing_key
    }

    /// The fatal fault that stopped execution, if there was one.
    pub fn halted(&self) -> Option<Fault> {
        self.halted
    }

    /// Gets the opcode currently pointed at by the pc.
    /// Memory is stored as bytes, but opcodes are 16 bits so we combine two subsequent bytes.
    fn get_op(&mut self) -> Result<Opcode, Fault> {
        let pc = self.state.registers.pc;
        if pc > LAST_FETCH_ADDRESS {
            return Err(self.halt(Fault::ProgramCounterOutOfRange { pc }));
        }
        match self.state.memory.read16(pc as usize) {
            Ok(word) => Ok(Opcode::from(word)),
            Err(_) => Err(self.halt(Fault::ProgramCounterOutOfRange { pc })),
        }
    }

    fn halt(&mut self, fault: Fault) -> Fault {
        error!("halting: {}", fault);
        self.halted = Some(fault);
        fault
    }
}

impl Default for Chip8 {
    fn default() -> Self {
        Self::new()
    }
}
