//! Tuning constants of the engine.
//!
//! These are empirically chosen values. They are fixed once the engine is constructed.

use thiserror::Error;

/// Engine tuning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Minimum change of the delay control before the held value follows, in `1..=4095`.
    /// Default is `8` (~0.2%).
    pub hysteresis_threshold: i32,

    /// Lower bound of the input gain at high feedback settings, in `1..=4095`.
    /// Default is `205` (~5%).
    pub min_input_gain: i32,

    /// Q16 coefficient of the DC blocker in the feedback path. Default is `200`.
    pub dc_blocker_coefficient: i32,

    /// Q16 coefficient of the shimmer low cut. Default is `4096`.
    pub shimmer_highpass_coefficient: i32,

    /// Level where the saturation curve starts compressing. Default is `1200`.
    pub saturation_knee: i32,

    /// Q11 drive applied before the saturation curve when the signal is quiet.
    /// Default is `3000` (~1.46x).
    pub saturation_base_drive: i32,

    /// Upper bound of the saturation energy accumulator. Default is `1024`.
    pub saturation_energy_cap: i32,

    /// Number of samples the mode switch has to be stable. Default is `1`.
    pub switch_debounce: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            hysteresis_threshold: 8,
            min_input_gain: 205,
            dc_blocker_coefficient: 200,
            shimmer_highpass_coefficient: 4096,
            saturation_knee: 1200,
            saturation_base_drive: 3000,
            saturation_energy_cap: 1024,
            switch_debounce: 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("hysteresis threshold {0} outside 1..=4095")]
    HysteresisThreshold(i32),

    #[error("minimum input gain {0} outside 1..=4095")]
    MinInputGain(i32),

    #[error("filter coefficient {0} outside 1..=65535")]
    FilterCoefficient(i32),

    #[error("saturation knee {0} outside 1..=2047")]
    SaturationKnee(i32),

    #[error("saturation drive {0} outside 1..=8192")]
    SaturationDrive(i32),

    #[error("saturation energy cap {0} outside 1..=4095")]
    SaturationEnergyCap(i32),

    #[error("switch debounce must be at least one sample")]
    SwitchDebounce,
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=4095).contains(&self.hysteresis_threshold) {
            return Err(ConfigError::HysteresisThreshold(self.hysteresis_threshold));
        }
        if !(1..=4095).contains(&self.min_input_gain) {
            return Err(ConfigError::MinInputGain(self.min_input_gain));
        }
        for coefficient in [
            self.dc_blocker_coefficient,
            self.shimmer_highpass_coefficient,
        ] {
            if !(1..=65535).contains(&coefficient) {
                return Err(ConfigError::FilterCoefficient(coefficient));
            }
        }
        if !(1..=2047).contains(&self.saturation_knee) {
            return Err(ConfigError::SaturationKnee(self.saturation_knee));
        }
        if !(1..=8192).contains(&self.saturation_base_drive) {
            return Err(ConfigError::SaturationDrive(self.saturation_base_drive));
        }
        if !(1..=4095).contains(&self.saturation_energy_cap) {
            return Err(ConfigError::SaturationEnergyCap(self.saturation_energy_cap));
        }
        if self.switch_debounce == 0 {
            return Err(ConfigError::SwitchDebounce);
        }

        Ok(())
    }
}
