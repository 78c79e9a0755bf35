use log::debug;
use sdl2::audio::{AudioCallback, AudioDevice, AudioSpecDesired};

use crate::error::DisplayError;

const TONE_HZ: f32 = 440.0;
const VOLUME: f32 = 0.2;

/// A plain square wave, one period per `1 / phase_inc` samples.
pub struct SquareWave {
    phase_inc: f32,
    phase: f32,
    volume: f32,
}

impl AudioCallback for SquareWave {
    type Channel = f32;

    fn callback(&mut self, out: &mut [f32]) {
        for sample in out.iter_mut() {
            *sample = if self.phase <= 0.5 {
                self.volume
            } else {
                -self.volume
            };
            self.phase = (self.phase + self.phase_inc) % 1.0;
        }
    }
}

/// # Beeper
/// Plays a tone for as long as the Chip-8 sound timer is running.
pub struct Beeper {
    device: AudioDevice<SquareWave>,
    playing: bool,
}

impl Beeper {
    pub fn new(sdl: &sdl2::Sdl) -> Result<Self, DisplayError> {
        let audio = sdl.audio().map_err(DisplayError::Audio)?;
        let desired = AudioSpecDesired {
            freq: Some(44_100),
            channels: Some(1),
            samples: None,
        };
        let device = audio
            .open_playback(None, &desired, |spec| SquareWave {
                phase_inc: TONE_HZ / spec.freq as f32,
                phase: 0.0,
                volume: VOLUME,
            })
            .map_err(DisplayError::Audio)?;

        Ok(Beeper {
            device,
            playing: false,
        })
    }

    /// Starts or stops the tone; does nothing if it's already in that state.
    pub fn set_active(&mut self, active: bool) {
        if active == self.playing {
            return;
        }
        if active {
            self.device.resume();
        } else {
            self.device.pause();
        }
        self.playing = active;
        debug!("tone {}", if active { "on" } else { "off" });
    }
}
