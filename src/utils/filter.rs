//! Fixed-point one pole highpass, used both as DC blocker and as shimmer low cut.

/// One pole highpass with a Q16 coefficient.
///
/// The state tracks the lowpassed input, the output is the difference to it. Small
/// coefficients give a low cutoff (200 is around 23 Hz at 48 kHz).
#[derive(Debug, Default)]
pub struct OnePoleHighpass {
    coefficient: i32,
    state: i32,
}

impl OnePoleHighpass {
    pub fn new(coefficient: i32) -> Self {
        Self {
            coefficient,
            state: 0,
        }
    }

    pub fn reset(&mut self) {
        self.state = 0;
    }

    #[inline]
    pub fn process(&mut self, input: i32) -> i32 {
        let error = input as i64 - self.state as i64;
        self.state += ((error * self.coefficient as i64 + 32768) >> 16) as i32;
        input - self.state
    }
}
