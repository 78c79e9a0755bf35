use rand::Rng;

/// Where `CXKK` gets its random bytes from.
///
/// Every `rand::Rng` is a `ByteSource`, so a seeded or mock generator can be
/// handed to the interpreter to make runs reproducible.
pub trait ByteSource {
    fn next_byte(&mut self) -> u8;
}

impl<R: Rng + ?Sized> ByteSource for R {
    fn next_byte(&mut self) -> u8 {
        self.gen()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;

    #[test]
    fn test_mock_rng_is_deterministic() {
        let mut rng = StepRng::new(0xAB, 0x1);
        assert_eq!(rng.next_byte(), 0xAB);
        assert_eq!(rng.next_byte(), 0xAC);
    }
}
