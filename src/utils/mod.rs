//! Fixed-point helpers shared by the processing stages.
//!
//! Gains and controls are 12-bit values in `0..=4095`, filter coefficients are Q16 and delay
//! times carry [`DELAY_FRACTION_BITS`](crate::DELAY_FRACTION_BITS) fractional bits.

pub mod delay_line;
pub mod edge;
pub mod filter;
pub mod hysteresis;

use crate::{CONTROL_MAX, FULL_SCALE};

/// Clamps a value to the signed 12-bit audio range.
#[inline]
pub fn clip_12(x: i32) -> i32 {
    x.clamp(-FULL_SCALE, FULL_SCALE)
}

/// Clamps a value to the knob/CV range.
#[inline]
pub fn clip_control(x: i32) -> i32 {
    x.clamp(0, CONTROL_MAX)
}

/// Multiplies by a 12-bit gain and rounds back to the sample domain.
#[inline]
pub fn scale_12(x: i32, gain: i32) -> i32 {
    (x * gain + 2048) >> 12
}

/// Multiplies by a Q16 factor with round-half-away-from-zero.
///
/// The rounding is symmetric so that positive and negative products of the same magnitude
/// land on the same magnitude.
#[inline]
pub fn mul_q16(x: i32, factor: i32) -> i32 {
    let product = x as i64 * factor as i64;
    let rounded = if product < 0 {
        -((-product + 32768) >> 16)
    } else {
        (product + 32768) >> 16
    };

    rounded as i32
}

/// Averages two samples with rounding.
#[inline]
pub fn average(a: i32, b: i32) -> i32 {
    (a + b + 1) >> 1
}

/// One pole smoothing step towards `target` with a `255/256` pole.
#[inline]
pub fn one_pole_255(out: &mut i32, target: i32) {
    *out = ((*out as i64 * 255 + target as i64 + 128) >> 8) as i32;
}

/// Wrap-safe check whether the counter `now` has reached `deadline`.
#[inline]
pub fn reached(now: u32, deadline: u32) -> bool {
    (now.wrapping_sub(deadline) as i32) >= 0
}
