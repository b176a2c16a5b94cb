//! Indicator values for the front panel LEDs.

use crate::mode::{Mode, NUM_MODES};

/// Fastest blink period in samples.
pub const MIN_BLINK_PERIOD: i32 = 100;

/// Feedback setting above which the high feedback indicator lights.
pub const HIGH_FEEDBACK_THRESHOLD: i32 = 2048;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Indicators {
    /// Blinks with half the left delay time.
    pub tempo: bool,
    /// Feedback above 50%.
    pub high_feedback: bool,
    /// One-hot mode display, indexed by [`Mode::index`].
    pub mode: [bool; NUM_MODES],
}

#[derive(Debug, Default)]
pub struct IndicatorState {
    counter: i32,
    tempo: bool,
}

impl IndicatorState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn init(&mut self) {
        *self = Self::default();
    }

    /// `delay_samples` is the integral part of the left delay.
    #[inline]
    pub fn process(&mut self, delay_samples: i32, feedback: i32, mode: Mode) -> Indicators {
        self.counter += 1;
        let period = (delay_samples / 2).max(MIN_BLINK_PERIOD);
        if self.counter >= period {
            self.counter = 0;
            self.tempo = true;
        } else if self.counter >= period / 2 {
            self.tempo = false;
        }

        let mut mode_leds = [false; NUM_MODES];
        mode_leds[mode.index()] = true;

        Indicators {
            tempo: self.tempo,
            high_feedback: feedback > HIGH_FEEDBACK_THRESHOLD,
            mode: mode_leds,
        }
    }
}
