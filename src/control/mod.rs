//! Control path: conditioning of the delay control, tap tempo and freeze.

pub mod conditioner;
pub mod freeze;
pub mod tap_tempo;

use crate::utils::clip_control;

/// Position of the three-way toggle. `Down` is momentary and cycles the mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SwitchPosition {
    Up,
    #[default]
    Middle,
    Down,
}

/// Sums a knob reading and its bipolar CV and clamps the result to `0..=4095`.
#[inline]
pub fn combine(control: i32, modulation: i32) -> i32 {
    clip_control(control.saturating_add(modulation))
}
