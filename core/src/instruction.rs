use std::fmt;

use crate::fault::Fault;
use crate::keypad::Keypad;
use crate::opcode::Opcode;
use crate::operations::*;
use crate::random::ByteSource;
use crate::state::{Effect, State};

/// Every instruction of the standard Chip-8 set, with its operands pulled out of the opcode.
///
/// `x` and `y` name registers, `kk` is an immediate byte, `n` a nibble and
/// `addr` a 12-bit address.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Instruction {
    /// 00E0
    Clear,
    /// 00EE
    Return,
    /// 1nnn
    Jump { addr: u16 },
    /// 2nnn
    Call { addr: u16 },
    /// 3xkk
    SkipEqual { x: u8, kk: u8 },
    /// 4xkk
    SkipNotEqual { x: u8, kk: u8 },
    /// 5xy0
    SkipRegistersEqual { x: u8, y: u8 },
    /// 6xkk
    Load { x: u8, kk: u8 },
    /// 7xkk
    Add { x: u8, kk: u8 },
    /// 8xy0
    Move { x: u8, y: u8 },
    /// 8xy1
    Or { x: u8, y: u8 },
    /// 8xy2
    And { x: u8, y: u8 },
    /// 8xy3
    Xor { x: u8, y: u8 },
    /// 8xy4
    AddRegisters { x: u8, y: u8 },
    /// 8xy5
    Sub { x: u8, y: u8 },
    /// 8xy6
    ShiftRight { x: u8 },
    /// 8xy7
    SubNegated { x: u8, y: u8 },
    /// 8xyE
    ShiftLeft { x: u8 },
    /// 9xy0
    SkipRegistersNotEqual { x: u8, y: u8 },
    /// Annn
    LoadI { addr: u16 },
    /// Bnnn
    JumpOffset { addr: u16 },
    /// Cxkk
    Random { x: u8, kk: u8 },
    /// Dxyn
    Draw { x: u8, y: u8, n: u8 },
    /// Ex9E
    SkipPressed { x: u8 },
    /// ExA1
    SkipNotPressed { x: u8 },
    /// Fx07
    LoadDelay { x: u8 },
    /// Fx0A
    AwaitKey { x: u8 },
    /// Fx15
    SetDelay { x: u8 },
    /// Fx18
    SetSound { x: u8 },
    /// Fx1E
    AddI { x: u8 },
    /// Fx29
    LoadSprite { x: u8 },
    /// Fx33
    StoreBcd { x: u8 },
    /// Fx55
    Store { x: u8 },
    /// Fx65
    Read { x: u8 },
}

impl Instruction {
    /// Selects the Instruction for a given Opcode, if there is one.
    pub fn decode(op: Opcode) -> Option<Instruction> {
        use Instruction::*;

        let (x, y, n, kk, addr) = (op.x(), op.y(), op.n(), op.kk(), op.addr());
        let instruction = match op.nibbles() {
            (0x0, 0x0, 0xE, 0x0) => Clear,
            (0x0, 0x0, 0xE, 0xE) => Return,
            (0x1, ..) => Jump { addr },
            (0x2, ..) => Call { addr },
            (0x3, ..) => SkipEqual { x, kk },
            (0x4, ..) => SkipNotEqual { x, kk },
            (0x5, .., 0x0) => SkipRegistersEqual { x, y },
            (0x6, ..) => Load { x, kk },
            (0x7, ..) => Add { x, kk },
            (0x8, .., 0x0) => Move { x, y },
            (0x8, .., 0x1) => Or { x, y },
            (0x8, .., 0x2) => And { x, y },
            (0x8, .., 0x3) => Xor { x, y },
            (0x8, .., 0x4) => AddRegisters { x, y },
            (0x8, .., 0x5) => Sub { x, y },
            (0x8, .., 0x6) => ShiftRight { x },
            (0x8, .., 0x7) => SubNegated { x, y },
            (0x8, .., 0xE) => ShiftLeft { x },
            (0x9, .., 0x0) => SkipRegistersNotEqual { x, y },
            (0xA, ..) => LoadI { addr },
            (0xB, ..) => JumpOffset { addr },
            (0xC, ..) => Random { x, kk },
            (0xD, ..) => Draw { x, y, n },
            (0xE, _, 0x9, 0xE) => SkipPressed { x },
            (0xE, _, 0xA, 0x1) => SkipNotPressed { x },
            (0xF, _, 0x0, 0x7) => LoadDelay { x },
            (0xF, _, 0x0, 0xA) => AwaitKey { x },
            (0xF, _, 0x1, 0x5) => SetDelay { x },
            (0xF, _, 0x1, 0x8) => SetSound { x },
            (0xF, _, 0x1, 0xE) => AddI { x },
            (0xF, _, 0x2, 0x9) => LoadSprite { x },
            (0xF, _, 0x3, 0x3) => StoreBcd { x },
            (0xF, _, 0x5, 0x5) => Store { x },
            (0xF, _, 0x6, 0x5) => Read { x },
            _ => return None,
        };
        Some(instruction)
    }

    /// Runs the instruction against a snapshot of the machine.
    ///
    /// The snapshot's program counter must already point past the instruction.
    /// Only stack faults come back as errors; recoverable faults ride along in
    /// the returned `Effect`.
    pub fn execute(
        &self,
        state: &State,
        keypad: &Keypad,
        rng: &mut dyn ByteSource,
    ) -> Result<Effect, Fault> {
        use Instruction::*;

        let effect = match *self {
            Clear => clr(state),
            Return => rts(state)?,
            Jump { addr } => jump(addr, state),
            Call { addr } => call(addr, state)?,
            SkipEqual { x, kk } => ske(x, kk, state),
            SkipNotEqual { x, kk } => skne(x, kk, state),
            SkipRegistersEqual { x, y } => skre(x, y, state),
            Load { x, kk } => load(x, kk, state),
            Add { x, kk } => add(x, kk, state),
            Move { x, y } => mv(x, y, state),
            Or { x, y } => or(x, y, state),
            And { x, y } => and(x, y, state),
            Xor { x, y } => xor(x, y, state),
            AddRegisters { x, y } => addr(x, y, state),
            Sub { x, y } => sub(x, y, state),
            ShiftRight { x } => shr(x, state),
            SubNegated { x, y } => subn(x, y, state),
            ShiftLeft { x } => shl(x, state),
            SkipRegistersNotEqual { x, y } => skrne(x, y, state),
            LoadI { addr } => loadi(addr, state),
            JumpOffset { addr } => jumpi(addr, state),
            Random { x, kk } => rand(x, kk, state, rng),
            Draw { x, y, n } => draw(x, y, n, state),
            SkipPressed { x } => skpr(x, state, keypad),
            SkipNotPressed { x } => skup(x, state, keypad),
            LoadDelay { x } => moved(x, state),
            AwaitKey { x } => keyd(x, state),
            SetDelay { x } => loads(x, state),
            SetSound { x } => ld(x, state),
            AddI { x } => addi(x, state),
            LoadSprite { x } => ldspr(x, state),
            StoreBcd { x } => bcd(x, state),
            Store { x } => stor(x, state),
            Read { x } => read(x, state),
        };
        Ok(effect)
    }
}

/// Disassembles into the customary mnemonics, e.g. `DRW V0, V1, 5`.
impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use Instruction::*;

        match *self {
            Clear => write!(f, "CLS"),
            Return => write!(f, "RET"),
            Jump { addr } => write!(f, "JP {:#05X}", addr),
            Call { addr } => write!(f, "CALL {:#05X}", addr),
            SkipEqual { x, kk } => write!(f, "SE V{:X}, {:#04X}", x, kk),
            SkipNotEqual { x, kk } => write!(f, "SNE V{:X}, {:#04X}", x, kk),
            SkipRegistersEqual { x, y } => write!(f, "SE V{:X}, V{:X}", x, y),
            Load { x, kk } => write!(f, "LD V{:X}, {:#04X}", x, kk),
            Add { x, kk } => write!(f, "ADD V{:X}, {:#04X}", x, kk),
            Move { x, y } => write!(f, "LD V{:X}, V{:X}", x, y),
            Or { x, y } => write!(f, "OR V{:X}, V{:X}", x, y),
            And { x, y } => write!(f, "AND V{:X}, V{:X}", x, y),
            Xor { x, y } => write!(f, "XOR V{:X}, V{:X}", x, y),
            AddRegisters { x, y } => write!(f, "ADD V{:X}, V{:X}", x, y),
            Sub { x, y } => write!(f, "SUB V{:X}, V{:X}", x, y),
            ShiftRight { x } => write!(f, "SHR V{:X}", x),
            SubNegated { x, y } => write!(f, "SUBN V{:X}, V{:X}", x, y),
            ShiftLeft { x } => write!(f, "SHL V{:X}", x),
            SkipRegistersNotEqual { x, y } => write!(f, "SNE V{:X}, V{:X}", x, y),
            LoadI { addr } => write!(f, "LD I, {:#05X}", addr),
            JumpOffset { addr } => write!(f, "JP V0, {:#05X}", addr),
            Random { x, kk } => write!(f, "RND V{:X}, {:#04X}", x, kk),
            Draw { x, y, n } => write!(f, "DRW V{:X}, V{:X}, {}", x, y, n),
            SkipPressed { x } => write!(f, "SKP V{:X}", x),
            SkipNotPressed { x } => write!(f, "SKNP V{:X}", x),
            LoadDelay { x } => write!(f, "LD V{:X}, DT", x),
            AwaitKey { x } => write!(f, "LD V{:X}, K", x),
            SetDelay { x } => write!(f, "LD DT, V{:X}", x),
            SetSound { x } => write!(f, "LD ST, V{:X}", x),
            AddI { x } => write!(f, "ADD I, V{:X}", x),
            LoadSprite { x } => write!(f, "LD F, V{:X}", x),
            StoreBcd { x } => write!(f, "LD B, V{:X}", x),
            Store { x } => write!(f, "LD [I], V{:X}", x),
            Read { x } => write!(f, "LD V{:X}, [I]", x),
        }
    }
}
