/// Total addressable memory in bytes.
pub const MEMORY_SIZE: usize = 4096;

/// Where ROMs are loaded and where the program counter starts.
pub const PROGRAM_START: u16 = 0x200;

/// Everything from `PROGRAM_START` up to the end of memory.
pub const MAX_ROM_SIZE: usize = MEMORY_SIZE - PROGRAM_START as usize;

/// The highest address an opcode can be fetched from (it occupies two bytes).
pub const LAST_FETCH_ADDRESS: u16 = MEMORY_SIZE as u16 - 2;

/// Where the sprite sheet starts in memory.
pub const SPRITE_SHEET_ADDRESS: u16 = 0x000;

/// First address past the sprite sheet; programs can't write below it.
pub const SPRITE_SHEET_END: usize = SPRITE_SHEET_ADDRESS as usize + SPRITE_SHEET.len();

/// Bytes per hex digit sprite.
pub const SPRITE_HEIGHT: u16 = 5;

pub const DISPLAY_WIDTH: usize = 64;
pub const DISPLAY_HEIGHT: usize = 32;

/// Return addresses the call stack can hold.
pub const STACK_DEPTH: usize = 16;

/// Rate at which the delay and sound timers count down.
pub const TIMER_HZ: u32 = 60;

/// Instructions executed per 60 Hz frame by default (~600 instructions per second).
pub const DEFAULT_CYCLES_PER_FRAME: u32 = 10;

/// # Sprite Sheet
/// Hex digits 0..F, each five rows of four pixels wide stored in the high nibble.
///
/// ```text
/// 0xF0  ####
/// 0x90  #  #
/// 0x90  #  #
/// 0x90  #  #
/// 0xF0  ####
/// ```
pub const SPRITE_SHEET: [u8; 80] = [
    0xF0, 0x90, 0x90, 0x90, 0xF0, // 0
    0x20, 0x60, 0x20, 0x20, 0x70, // 1
    0xF0, 0x10, 0xF0, 0x80, 0xF0, // 2
    0xF0, 0x10, 0xF0, 0x10, 0xF0, // 3
    0x90, 0x90, 0xF0, 0x10, 0x10, // 4
    0xF0, 0x80, 0xF0, 0x10, 0xF0, // 5
    0xF0, 0x80, 0xF0, 0x90, 0xF0, // 6
    0xF0, 0x10, 0x20, 0x40, 0x40, // 7
    0xF0, 0x90, 0xF0, 0x90, 0xF0, // 8
    0xF0, 0x90, 0xF0, 0x10, 0xF0, // 9
    0xF0, 0x90, 0xF0, 0x90, 0x90, // A
    0xE0, 0x90, 0xE0, 0x90, 0xE0, // B
    0xF0, 0x80, 0x80, 0x80, 0xF0, // C
    0xE0, 0x90, 0x90, 0x90, 0xE0, // D
    0xF0, 0x80, 0xF0, 0x80, 0xF0, // E
    0xF0, 0x80, 0xF0, 0x80, 0x80, // F
];
