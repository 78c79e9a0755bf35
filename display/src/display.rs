use sdl2::pixels::PixelFormatEnum;
use sdl2::render::WindowCanvas;

use emu8_core::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH};
use emu8_core::FrameBuffer;

use crate::error::DisplayError;

/// # Display
/// The Chip-8 display is composed of 64x32 black/white pixels.
/// The on/off state of these pixels is encoded as true/false in a 2d array indexed [y][x].
/// The display only gets a call to `render` when the Chip-8 FrameBuffer is updated.
pub struct Display {
    canvas: WindowCanvas,
    width: usize,
    height: usize,
}

impl Display {
    /// Creates a new display object bound to an sdl2 context.
    ///
    /// # Arguments
    /// * `sdl` an sdl2 context with which to draw
    /// * `scale` the size multiplier for each pixel
    pub fn new(sdl: &sdl2::Sdl, scale: u32) -> Result<Self, DisplayError> {
        let video_subsystem = sdl.video().map_err(DisplayError::Video)?;
        let window = video_subsystem
            .window(
                "Emu-8",
                DISPLAY_WIDTH as u32 * scale,
                DISPLAY_HEIGHT as u32 * scale,
            )
            .position_centered()
            .opengl()
            .build()
            .map_err(|e| DisplayError::Video(e.to_string()))?;
        let canvas = window
            .into_canvas()
            .build()
            .map_err(|e| DisplayError::Video(e.to_string()))?;

        Ok(Display {
            canvas,
            width: DISPLAY_WIDTH,
            height: DISPLAY_HEIGHT,
        })
    }

    /// Formats a Chip-8 FrameBuffer for rendering as an SDL2 texture.
    ///
    /// An SDL2 texture is a 1D array of ints that represent concatenated rows of RGB pixels.
    ///
    /// This creates a black and white rendering by:
    /// - Flattening the 2D frame buffer into a 1D array by concatenating its rows
    /// - Triplicating each element of that 1D array to represent the RGB values of each pixel
    /// - Mapping lit pixels to full 255 intensity and unlit ones to 0
    ///
    /// # Arguments
    /// * `frame` a Chip-8 FrameBuffer
    fn frame_to_sdl_texture(frame: &FrameBuffer) -> Vec<u8> {
        frame
            .iter()
            .flat_map(|row| row.iter())
            .flat_map(|&pixel| std::iter::repeat(if pixel { 255 } else { 0 }).take(3))
            .collect()
    }

    /// Formats the Chip-8 FrameBuffer as an SDL2 RGB24 texture and renders it.
    ///
    /// # Arguments
    /// * `frame` a Chip-8 FrameBuffer
    pub fn render(&mut self, frame: &FrameBuffer) -> Result<(), DisplayError> {
        let texture_creator = self.canvas.texture_creator();

        let mut texture = texture_creator
            .create_texture_streaming(
                PixelFormatEnum::RGB24,
                self.width as u32,
                self.height as u32,
            )
            .map_err(|e| DisplayError::Video(e.to_string()))?;

        let pixels = Display::frame_to_sdl_texture(frame);
        texture
            .update(None, &pixels, self.width * 3)
            .map_err(|e| DisplayError::Video(e.to_string()))?;

        self.canvas
            .copy(&texture, None, None)
            .map_err(DisplayError::Video)?;
        self.canvas.present();
        Ok(())
    }
}
