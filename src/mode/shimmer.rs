//! Shimmer: every trip through the loop is a fifth higher.
//!
//! The loop delay is shortened to `2^(-7/12)` of the smoothed delay. As pitch is inversely
//! proportional to delay length, each repeat is read back a perfect fifth up from the
//! previous one, so echoes stack into a rising staircase. A steep low cut keeps the stack
//! from building up low end.

use super::ModeProcessor;
use crate::config::Config;
use crate::utils::filter::OnePoleHighpass;
use crate::utils::mul_q16;

/// `2^(-7/12) - 1` in Q16.
pub const FIFTH_UP_DELAY_CHANGE: i32 = -21782;

#[derive(Debug)]
pub struct Shimmer {
    highpass: OnePoleHighpass,
}

impl Default for Shimmer {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl Shimmer {
    pub fn new(config: &Config) -> Self {
        Self {
            highpass: OnePoleHighpass::new(config.shimmer_highpass_coefficient),
        }
    }

    pub fn init(&mut self) {
        self.highpass.reset();
    }
}

impl ModeProcessor for Shimmer {
    fn modulate_delay(&self, delay: i32) -> i32 {
        delay + mul_q16(delay, FIFTH_UP_DELAY_CHANGE)
    }

    fn stereo_offset(&self, delay_left: i32) -> i32 {
        ((delay_left as i64 * 110) / 100) as i32
    }

    fn shape_feedback(&mut self, feedback: i32) -> i32 {
        self.highpass.process(feedback)
    }
}
