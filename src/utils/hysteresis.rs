//! Dead-band hysteresis for noisy 12-bit control readings.
//!
//! A new reading only replaces the held value once it moves at least `threshold` away from it.

#[derive(Debug)]
pub struct Hysteresis {
    threshold: i32,
    held_value: i32,
}

impl Default for Hysteresis {
    fn default() -> Self {
        Self::new(8)
    }
}

impl Hysteresis {
    pub fn new(threshold: i32) -> Self {
        Self {
            threshold,
            held_value: 0,
        }
    }

    pub fn init(&mut self) {
        self.held_value = 0;
    }

    #[inline]
    pub fn process(&mut self, value: i32) -> i32 {
        if (value - self.held_value).abs() >= self.threshold {
            self.held_value = value;
        }

        self.held_value
    }

    /// Takes the reading as-is, used when jitter is wanted.
    #[inline]
    pub fn bypass(&mut self, value: i32) -> i32 {
        self.held_value = value;
        value
    }

    #[inline]
    pub fn held_value(&self) -> i32 {
        self.held_value
    }
}
