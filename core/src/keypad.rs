/// # Keypad
/// Pressed status of the 16 hex keys 0..F.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Keypad {
    pressed: [bool; 16],
}

impl Keypad {
    pub fn new() -> Self {
        Keypad { pressed: [false; 16] }
    }

    /// Keys past 0xF don't exist and are ignored.
    pub fn set(&mut self, key: u8, pressed: bool) {
        if let Some(status) = self.pressed.get_mut(key as usize) {
            *status = pressed;
        }
    }

    /// Whether the key named by the low nibble of `key` is held down.
    pub fn is_pressed(&self, key: u8) -> bool {
        self.pressed[(key & 0xF) as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_and_release() {
        let mut keypad = Keypad::new();
        keypad.set(0xE, true);
        assert!(keypad.is_pressed(0xE));
        assert!(!keypad.is_pressed(0x1));
        keypad.set(0xE, false);
        assert!(!keypad.is_pressed(0xE));
    }

    #[test]
    fn test_ignores_keys_past_f() {
        let mut keypad = Keypad::new();
        keypad.set(0x1A, true);
        assert_eq!(keypad, Keypad::new());
    }

    #[test]
    fn test_lookup_uses_low_nibble() {
        let mut keypad = Keypad::new();
        keypad.set(0xA, true);
        assert!(keypad.is_pressed(0x1A));
    }
}
