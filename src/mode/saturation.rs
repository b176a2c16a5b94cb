//! Warm saturation of the feedback path.
//!
//! A symmetric soft knee curve whose drive follows a slow running average of the signal
//! level, so repeats bloom into saturation and relax again when the loop quiets down.

use super::ModeProcessor;
use crate::config::Config;
use crate::FULL_SCALE;

#[derive(Debug)]
pub struct Saturation {
    knee: i32,
    base_drive: i32,
    energy_cap: i32,
    energy: i32,
}

impl Default for Saturation {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl Saturation {
    pub fn new(config: &Config) -> Self {
        Self {
            knee: config.saturation_knee,
            base_drive: config.saturation_base_drive,
            energy_cap: config.saturation_energy_cap,
            energy: 0,
        }
    }

    pub fn init(&mut self) {
        self.energy = 0;
    }

    #[inline]
    pub fn energy(&self) -> i32 {
        self.energy
    }

    /// Current Q11 drive.
    #[inline]
    pub fn drive(&self) -> i32 {
        self.base_drive + ((self.energy + 4) >> 3)
    }

    #[inline]
    pub fn process(&mut self, input: i32) -> i32 {
        let level = input.abs();
        self.energy =
            (((252 * self.energy + 128) >> 8) + ((level + 128) >> 8)).min(self.energy_cap);

        let driven = ((input as i64 * self.drive() as i64 + 1024) >> 11) as i32;
        let magnitude = driven.abs();
        let shaped = if magnitude < self.knee {
            magnitude
        } else {
            let excess = magnitude - self.knee;
            (self.knee + ((excess + 1) >> 1) + ((excess + 4) >> 3)).min(FULL_SCALE)
        };

        if driven < 0 {
            -shaped
        } else {
            shaped
        }
    }
}

impl ModeProcessor for Saturation {
    fn stereo_offset(&self, delay_left: i32) -> i32 {
        ((delay_left as i64 * 101) / 100) as i32
    }

    fn shape_feedback(&mut self, feedback: i32) -> i32 {
        self.process(feedback)
    }
}
