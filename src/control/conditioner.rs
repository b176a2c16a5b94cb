//! Delay time conditioning.
//!
//! The combined delay control passes a hysteresis stage, gets mapped linearly onto
//! `MIN_DELAY..=MAX_DELAY` and is then smoothed with a `255/256` pole in the 7-bit fractional
//! domain to avoid zipper noise.

use crate::utils::hysteresis::Hysteresis;
use crate::utils::one_pole_255;
use crate::{CONTROL_MAX, DELAY_FRACTION_BITS, MAX_DELAY, MIN_DELAY};

#[derive(Debug, Default)]
pub struct ControlConditioner {
    hysteresis: Hysteresis,
    smoothed_delay: i32,
    primed: bool,
}

impl ControlConditioner {
    pub fn new(hysteresis_threshold: i32) -> Self {
        Self {
            hysteresis: Hysteresis::new(hysteresis_threshold),
            smoothed_delay: 0,
            primed: false,
        }
    }

    pub fn init(&mut self) {
        self.hysteresis.init();
        self.smoothed_delay = 0;
        self.primed = false;
    }

    /// Runs the hysteresis stage and returns the held control value.
    #[inline]
    pub fn hold(&mut self, combined: i32, hysteresis: bool) -> i32 {
        if hysteresis {
            self.hysteresis.process(combined)
        } else {
            self.hysteresis.bypass(combined)
        }
    }

    /// Moves the smoothed delay one step towards `target` (in whole samples) and returns it
    /// with 7 fractional bits.
    #[inline]
    pub fn smooth(&mut self, target: i32) -> i32 {
        let target_fine = target.clamp(MIN_DELAY, MAX_DELAY) << DELAY_FRACTION_BITS;
        if self.primed {
            one_pole_255(&mut self.smoothed_delay, target_fine);
        } else {
            self.smoothed_delay = target_fine;
            self.primed = true;
        }

        self.smoothed_delay
    }

    #[inline]
    pub fn held_value(&self) -> i32 {
        self.hysteresis.held_value()
    }

    #[inline]
    pub fn smoothed_delay(&self) -> i32 {
        self.smoothed_delay
    }
}

/// Maps a control value in `0..=4095` onto a delay in samples.
#[inline]
pub fn control_to_delay(control: i32) -> i32 {
    let control = control.clamp(0, CONTROL_MAX);
    let range = MAX_DELAY - MIN_DELAY;

    MIN_DELAY + ((control as i64 * range as i64) / CONTROL_MAX as i64) as i32
}
