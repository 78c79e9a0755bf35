/// # Timers
/// Two 8-bit countdown timers, decremented once per `tick` until they reach 0.
///
/// `tick` is meant to be called at 60Hz by whatever drives the interpreter,
/// independently of how many instructions run in between.
/// While `sound` is above 0 a tone should be audible.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Timers {
    pub delay: u8,
    pub sound: u8,
}

impl Timers {
    pub fn new() -> Self {
        Timers { delay: 0, sound: 0 }
    }

    pub fn tick(&mut self) {
        self.delay = self.delay.saturating_sub(1);
        self.sound = self.sound.saturating_sub(1);
    }

    pub fn sound_active(&self) -> bool {
        self.sound > 0
    }
}
