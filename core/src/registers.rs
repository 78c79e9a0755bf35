use crate::constants::{PROGRAM_START, STACK_DEPTH};
use crate::fault::Fault;

/// # Registers
/// - (v) 16 primary 8-bit registers (V0..VF)
///     - the first 15 (V0..VE) are general purpose registers
///     - the 16th (VF) doubles as the carry/borrow/collision flag
/// - (i) a 16-bit memory address register
/// - (pc) a 16-bit program counter
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Registers {
    pub v: [u8; 16],
    pub i: u16,
    pub pc: u16,
}

impl Registers {
    pub fn new() -> Self {
        Registers {
            v: [0; 16],
            i: 0,
            pc: PROGRAM_START,
        }
    }

    pub fn vf(&self) -> u8 {
        self.v[0xF]
    }
}

impl Default for Registers {
    fn default() -> Self {
        Self::new()
    }
}

/// # Stack
/// Return addresses for up to 16 nested subroutine calls.
///
/// `sp` is the number of addresses currently held, so it points at the next free slot.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Stack {
    addresses: [u16; STACK_DEPTH],
    sp: u8,
}

impl Stack {
    pub fn new() -> Self {
        Stack {
            addresses: [0; STACK_DEPTH],
            sp: 0,
        }
    }

    /// Pushes a return address.
    /// `caller` is only used to describe where an overflow happened.
    pub fn push(&mut self, address: u16, caller: u16) -> Result<(), Fault> {
        let slot = self
            .addresses
            .get_mut(self.sp as usize)
            .ok_or(Fault::StackOverflow { address: caller })?;
        *slot = address;
        self.sp += 1;
        Ok(())
    }

    /// Pops the most recent return address.
    pub fn pop(&mut self, caller: u16) -> Result<u16, Fault> {
        if self.sp == 0 {
            return Err(Fault::StackUnderflow { address: caller });
        }
        self.sp -= 1;
        Ok(self.addresses[self.sp as usize])
    }

    pub fn sp(&self) -> u8 {
        self.sp
    }

    /// Return addresses from the outermost call inwards.
    pub fn frames(&self) -> &[u16] {
        &self.addresses[..self.sp as usize]
    }
}

impl Default for Stack {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registers_start_at_program() {
        let registers = Registers::new();
        assert_eq!(registers.pc, 0x200);
        assert_eq!(registers.i, 0x0);
        assert_eq!(registers.v, [0; 16]);
    }

    #[test]
    fn test_push_then_pop() {
        let mut stack = Stack::new();
        stack.push(0x202, 0x200).unwrap();
        stack.push(0x304, 0x302).unwrap();
        assert_eq!(stack.sp(), 2);
        assert_eq!(stack.frames(), &[0x202, 0x304]);
        assert_eq!(stack.pop(0x400), Ok(0x304));
        assert_eq!(stack.pop(0x306), Ok(0x202));
        assert_eq!(stack.sp(), 0);
    }

    #[test]
    fn test_push_overflows_at_depth() {
        let mut stack = Stack::new();
        for n in 0..STACK_DEPTH as u16 {
            stack.push(n * 2, 0x200).unwrap();
        }
        assert_eq!(stack.sp(), 16);
        assert_eq!(
            stack.push(0x0, 0x220),
            Err(Fault::StackOverflow { address: 0x220 })
        );
        assert_eq!(stack.sp(), 16);
    }

    #[test]
    fn test_pop_underflows_when_empty() {
        let mut stack = Stack::new();
        assert_eq!(stack.pop(0x200), Err(Fault::StackUnderflow { address: 0x200 }));
        assert_eq!(stack.sp(), 0);
    }
}
