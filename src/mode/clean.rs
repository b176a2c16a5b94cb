//! Modes without feedback processing.

use super::ModeProcessor;

/// Plain mono delay.
#[derive(Debug, Default)]
pub struct Clean;

impl ModeProcessor for Clean {}

/// Like [`Clean`], but the delay control follows every bit of ADC jitter.
#[derive(Debug, Default)]
pub struct LoFi;

impl ModeProcessor for LoFi {
    fn hysteresis(&self) -> bool {
        false
    }
}
