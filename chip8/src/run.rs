use std::time::{Duration, Instant};

use log::info;
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use thiserror::Error;

use display::{Beeper, Display, DisplayError};
use emu8_core::constants::TIMER_HZ;
use emu8_core::{Chip8, Cycle, Fault};

use crate::keymap::keymap;
use crate::settings::Settings;

#[derive(Debug, Error)]
pub enum RunError {
    #[error("sdl: {0}")]
    Sdl(String),

    #[error(transparent)]
    Display(#[from] DisplayError),

    #[error("interpreter halted: {0}")]
    Halted(Fault),
}

/// Runs the frame loop until the window is closed or escape is pressed.
///
/// Each frame:
/// - handles input
/// - runs `cycles_per_frame` instructions
/// - ticks the timers once, so they count down at 60Hz whatever the instruction rate
/// - renders the frame if it changed and starts/stops the tone
/// - sleeps out the rest of the frame unless fast forwarding
pub fn run(chip8: &mut Chip8, settings: &Settings) -> Result<(), RunError> {
    // Get SDL2 context
    let sdl = sdl2::init().map_err(RunError::Sdl)?;
    let mut display = Display::new(&sdl, settings.scale)?;
    let mut beeper = if settings.mute {
        None
    } else {
        Some(Beeper::new(&sdl)?)
    };
    let mut events = sdl.event_pump().map_err(RunError::Sdl)?;

    // Set initial timing
    let frame_time = Duration::from_secs(1) / TIMER_HZ;
    let mut last_frame = Instant::now();

    // Whether or not the default clock speed should be respected
    let mut fast_forward = false;

    'event: loop {
        // Handle input
        for event in events.poll_iter() {
            match event {
                Event::Quit { .. } => break 'event,
                Event::KeyDown {
                    keycode: Some(key),
                    repeat: false,
                    ..
                } => match (key, keymap(key)) {
                    (_, Some(kc)) => chip8.key_press(kc),
                    (Keycode::Space, _) => fast_forward = true,
                    (Keycode::Escape, _) => break 'event,
                    _ => continue,
                },
                Event::KeyUp {
                    keycode: Some(key), ..
                } => match (key, keymap(key)) {
                    (_, Some(kc)) => chip8.key_release(kc),
                    (Keycode::Space, _) => fast_forward = false,
                    _ => continue,
                },
                _ => continue,
            };
        }

        // Update state
        for _ in 0..settings.cycles_per_frame {
            match chip8.cycle() {
                Ok(Cycle::AwaitingKey) => break,
                Ok(_) => {}
                Err(fault) => return Err(RunError::Halted(fault)),
            }
        }
        chip8.tick();

        // Present
        if let Some(frame) = chip8.take_frame() {
            display.render(&frame)?;
        }
        if let Some(beeper) = beeper.as_mut() {
            beeper.set_active(chip8.is_sound_active());
        }

        // Handle timing
        let elapsed = last_frame.elapsed();
        if !fast_forward && frame_time > elapsed {
            std::thread::sleep(frame_time - elapsed);
        }
        last_frame = Instant::now();
    }

    info!("quit");
    Ok(())
}
