use crate::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH};

/// The FrameBuffer is indexed as [y][x]; `true` is a lit pixel.
pub type FrameBuffer = [[bool; DISPLAY_WIDTH]; DISPLAY_HEIGHT];

/// A frame with every pixel off.
pub fn blank() -> FrameBuffer {
    [[false; DISPLAY_WIDTH]; DISPLAY_HEIGHT]
}

/// XORs a sprite onto a copy of `frame` with its top left corner at (x, y).
///
/// Each sprite byte is one row, eight pixels wide, most significant bit on the
/// left. Pixels falling off an edge wrap around to the opposite one.
/// Returns the new frame and whether any lit pixel was switched off.
pub fn draw_sprite(frame: &FrameBuffer, x: usize, y: usize, sprite: &[u8]) -> (FrameBuffer, bool) {
    let mut frame = *frame;
    let mut collided = false;

    for (row, &byte) in sprite.iter().enumerate() {
        let py = (y + row) % DISPLAY_HEIGHT;
        for bit in 0..8usize {
            if byte >> (7 - bit) & 0x1 == 0 {
                continue;
            }
            let px = (x + bit) % DISPLAY_WIDTH;
            let pixel = &mut frame[py][px];
            collided |= *pixel;
            *pixel = !*pixel;
        }
    }

    (frame, collided)
}

/// Number of lit pixels; handy for tests and diagnostics.
pub fn lit(frame: &FrameBuffer) -> usize {
    frame.iter().flatten().filter(|&&pixel| pixel).count()
}
