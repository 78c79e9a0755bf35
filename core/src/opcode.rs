use std::fmt;

/// # Opcodes
///
/// Chip-8 opcodes are 16 bits each, stored big-endian. Their behavior is cased on some combination of:
/// - `(n, _, _, _)` broad categorization; applies to all opcodes
/// - `(_, _, _, n)` specific behavior within a category
/// - `(_, _, n, n)` more specific behavior within a category
/// - `(_, n, n, n)` some fixed function that doesn't require variables (e.g. CLS; clear screen)
///
/// Nibbles not used to determine the operation often (but not always) carry important data.
/// - `(_, n, n, n)` represent a 12-bit address
/// - `(_, _, n, n)` encodes some data that is assigned to and/or compared with Vx
/// - `(_, n, _, _)` refers either to the register Vx or a range of registers V0..Vx
/// - `(_, _, n, _)` refers to the the register Vy
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Opcode(pub u16);

impl Opcode {
    /// The Opcode's component nibbles, most significant first.
    pub fn nibbles(self) -> (u8, u8, u8, u8) {
        (((self.0 & 0xF000) >> 12) as u8, self.x(), self.y(), self.n())
    }

    /// `[_x__]`
    pub fn x(self) -> u8 {
        ((self.0 & 0x0F00) >> 8) as u8
    }

    /// `[__y_]`
    pub fn y(self) -> u8 {
        ((self.0 & 0x00F0) >> 4) as u8
    }

    /// `[___n]`
    pub fn n(self) -> u8 {
        (self.0 & 0x000F) as u8
    }

    /// `[__kk]`
    pub fn kk(self) -> u8 {
        (self.0 & 0x00FF) as u8
    }

    /// `[_adr]`
    pub fn addr(self) -> u16 {
        self.0 & 0x0FFF
    }
}

impl From<u16> for Opcode {
    fn from(raw: u16) -> Self {
        Opcode(raw)
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:04X}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields() {
        let op = Opcode(0xABCD);
        assert_eq!(op.nibbles(), (0xA, 0xB, 0xC, 0xD));
        assert_eq!(op.x(), 0xB);
        assert_eq!(op.y(), 0xC);
        assert_eq!(op.n(), 0xD);
        assert_eq!(op.kk(), 0xCD);
        assert_eq!(op.addr(), 0x0BCD);
    }

    #[test]
    fn test_from_word() {
        assert_eq!(Opcode::from(0x1234), Opcode(0x1234));
    }

    #[test]
    fn test_display_pads() {
        assert_eq!(Opcode(0x00E0).to_string(), "00E0");
    }
}
