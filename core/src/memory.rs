use crate::constants::{
    MAX_ROM_SIZE, MEMORY_SIZE, PROGRAM_START, SPRITE_SHEET, SPRITE_SHEET_ADDRESS, SPRITE_SHEET_END,
};
use crate::fault::Fault;

/// # Memory
/// 4096 bytes of flat addressable memory.
///
/// ```text
/// 0x000-0x04F  sprite sheet (hex digits 0..F)
/// 0x050-0x1FF  unused
/// 0x200-0xFFF  program
/// ```
///
/// Every access is bounds checked: single byte accesses fail with
/// `Fault::OutOfBounds`, span accesses are clamped to the end of memory and
/// report the first address that didn't fit.
/// The sprite sheet is read-only; only `reset` writes it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Memory {
    bytes: [u8; MEMORY_SIZE],
}

impl Memory {
    pub fn new() -> Self {
        let mut memory = Memory {
            bytes: [0; MEMORY_SIZE],
        };
        memory.reset();
        memory
    }

    /// Zeroes everything then rewrites the sprite sheet.
    pub fn reset(&mut self) {
        self.bytes = [0; MEMORY_SIZE];
        let start = SPRITE_SHEET_ADDRESS as usize;
        self.bytes[start..start + SPRITE_SHEET.len()].copy_from_slice(&SPRITE_SHEET);
    }

    /// Copies a ROM into the program region.
    /// The size is checked before anything is written.
    pub fn load(&mut self, rom: &[u8]) -> Result<(), Fault> {
        if rom.len() > MAX_ROM_SIZE {
            return Err(Fault::RomTooLarge {
                size: rom.len(),
                max: MAX_ROM_SIZE,
            });
        }
        let start = PROGRAM_START as usize;
        self.bytes[start..start + rom.len()].copy_from_slice(rom);
        Ok(())
    }

    pub fn read8(&self, address: usize) -> Result<u8, Fault> {
        self.bytes
            .get(address)
            .copied()
            .ok_or(Fault::OutOfBounds { address })
    }

    /// Fails for addresses past the end of memory or inside the sprite sheet.
    pub fn write8(&mut self, address: usize, value: u8) -> Result<(), Fault> {
        if address < SPRITE_SHEET_END {
            return Err(Fault::OutOfBounds { address });
        }
        let byte = self
            .bytes
            .get_mut(address)
            .ok_or(Fault::OutOfBounds { address })?;
        *byte = value;
        Ok(())
    }

    /// Reads a big-endian 16-bit word; opcodes are stored this way.
    pub fn read16(&self, address: usize) -> Result<u16, Fault> {
        let high = u16::from(self.read8(address)?);
        let low = u16::from(self.read8(address + 1)?);
        Ok(high << 8 | low)
    }

    /// Up to `len` bytes starting at `address`, cut short at the end of memory.
    /// The fault names the first address that was cut off.
    pub fn span(&self, address: usize, len: usize) -> (&[u8], Option<Fault>) {
        let (start, end, fault) = clamp(address, len);
        (&self.bytes[start..end], fault)
    }

    /// Writes `data` starting at `address`, dropping whatever lands in the
    /// sprite sheet or runs past the end of memory.
    /// The fault names the first address that was dropped.
    pub fn write_span(&mut self, address: usize, data: &[u8]) -> Option<Fault> {
        let mut fault = None;
        for (offset, &value) in data.iter().enumerate() {
            if let Err(dropped) = self.write8(address.saturating_add(offset), value) {
                fault.get_or_insert(dropped);
            }
        }
        fault
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

fn clamp(address: usize, len: usize) -> (usize, usize, Option<Fault>) {
    let start = address.min(MEMORY_SIZE);
    let end = address.saturating_add(len).min(MEMORY_SIZE);
    let fault = if end - start < len {
        Some(Fault::OutOfBounds {
            address: address.max(end),
        })
    } else {
        None
    };
    (start, end, fault)
}
